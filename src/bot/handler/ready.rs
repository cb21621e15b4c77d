//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. This is the
//! first event received after authentication and is where the slash commands are
//! registered globally.

use serenity::all::{Command, Context, Ready};

use crate::bot::command::{leaderboard, rank, settings, xp_admin, xp_table};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and registers the global slash commands. Registration
/// is idempotent: Discord replaces the command set with the provided one, so
/// reconnects and restarts converge on the same commands.
///
/// # Arguments
/// - `ctx` - Discord context for API access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let commands = vec![
        rank::register(),
        leaderboard::register(),
        xp_table::register(),
        xp_admin::register(),
        settings::register(),
    ];

    match Command::set_global_commands(&ctx.http, commands).await {
        Ok(registered) => tracing::info!("Registered {} slash commands", registered.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}
