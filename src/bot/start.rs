use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down, so it is the last thing `main` calls.
///
/// The event handler owns the cooldown gate: gate state is process-local and
/// volatile by design, so it lives and dies with the gateway connection.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs until shutdown
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    // Create the event handler with database access
    let handler = Handler::new(db);

    // Build the client
    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
