use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, Guild, Interaction, Message, Ready};
use serenity::async_trait;

use crate::cooldown::CooldownGate;

pub mod command;
pub mod guild;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub gate: CooldownGate,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            gate: CooldownGate::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.db, &self.gate, ctx, message).await;
    }

    /// Called when a slash command or other interaction is invoked
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        command::handle_interaction(&self.db, ctx, interaction).await;
    }
}
