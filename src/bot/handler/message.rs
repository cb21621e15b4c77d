use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::cooldown::CooldownGate;
use crate::model::progress::ChatMessageParam;
use crate::service::{
    notify::LevelUpNotifier, progression::ProgressionService, settings::SettingsService,
};

/// Handle message creation in a channel
///
/// Runs the passive XP path: automated accounts and DMs are filtered here,
/// everything else goes through the progression service. Failures on this
/// path are logged and swallowed; a missed grant must not surface to the
/// chatting user.
pub async fn handle_message(
    db: &DatabaseConnection,
    gate: &CooldownGate,
    ctx: Context,
    message: Message,
) {
    // Automated accounts are excluded from progression
    if message.author.bot {
        return;
    }

    // Only track messages in guild channels (not DMs)
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let param = ChatMessageParam {
        user_id: message.author.id.get(),
        guild_id: guild_id.get(),
        display_name: message.author.display_name().to_string(),
        now: message.timestamp.to_utc(),
    };

    let event = match ProgressionService::new(db)
        .handle_chat_message(gate, param)
        .await
    {
        Ok(Some(event)) => event,
        Ok(None) => return,
        Err(e) => {
            tracing::error!("Failed to grant XP for message {}: {}", message.id, e);
            return;
        }
    };

    tracing::debug!(
        "User {} reached level {} (from {}) in guild {}",
        event.user_id,
        event.new_level,
        event.previous_level,
        event.guild_id
    );

    // The grant is already committed; announcing it is best-effort.
    let settings = match SettingsService::new(db).get(event.guild_id).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                "Failed to load settings for level-up announcement in guild {}: {}",
                event.guild_id,
                e
            );
            return;
        }
    };

    LevelUpNotifier::new(&ctx.http)
        .notify(&settings, message.channel_id, &event)
        .await;
}
