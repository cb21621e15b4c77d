//! Slash command definitions and runners.
//!
//! Each command lives in its own module providing `register()` (the
//! `CreateCommand` builder used during startup) and `run()` (the handler
//! invoked on dispatch). Shared response and option-extraction helpers live
//! here.
//!
//! Admin-only commands carry `default_member_permissions(MANAGE_GUILD)` on
//! their definitions, so Discord enforces the permission check before the
//! invocation ever reaches the bot.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseMessage,
    ResolvedOption, ResolvedValue, User,
};

use crate::error::AppError;

pub mod leaderboard;
pub mod rank;
pub mod settings;
pub mod xp_admin;
pub mod xp_table;

/// Responds to an interaction with a plain text message.
///
/// # Arguments
/// - `ctx` - Discord context for API access
/// - `command` - The interaction to respond to
/// - `content` - Message content
///
/// # Returns
/// - `Ok(())` - Response sent
/// - `Err(AppError::DiscordErr)` - Discord API rejected the response
pub async fn respond_text(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(content),
            ),
        )
        .await?;

    Ok(())
}

/// Responds to an interaction with an ephemeral text message.
///
/// Used for errors and admin feedback that should not clutter the channel.
///
/// # Arguments
/// - `ctx` - Discord context for API access
/// - `command` - The interaction to respond to
/// - `content` - Message content
///
/// # Returns
/// - `Ok(())` - Response sent
/// - `Err(AppError::DiscordErr)` - Discord API rejected the response
pub async fn respond_ephemeral(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(content)
                    .ephemeral(true),
            ),
        )
        .await?;

    Ok(())
}

/// Extracts a user option by name.
pub fn user_arg<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a User> {
    options.iter().find_map(|opt| match &opt.value {
        ResolvedValue::User(user, _) if opt.name == name => Some(*user),
        _ => None,
    })
}

/// Extracts an integer option by name.
pub fn integer_arg(options: &[ResolvedOption<'_>], name: &str) -> Option<i64> {
    options.iter().find_map(|opt| match opt.value {
        ResolvedValue::Integer(value) if opt.name == name => Some(value),
        _ => None,
    })
}

/// Extracts a string option by name.
pub fn string_arg<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a str> {
    options.iter().find_map(|opt| match opt.value {
        ResolvedValue::String(value) if opt.name == name => Some(value),
        _ => None,
    })
}

/// Extracts a channel option by name, returning its ID.
pub fn channel_arg(options: &[ResolvedOption<'_>], name: &str) -> Option<u64> {
    options.iter().find_map(|opt| match &opt.value {
        ResolvedValue::Channel(channel) if opt.name == name => Some(channel.id.get()),
        _ => None,
    })
}
