//! `/xptable` - show the cumulative XP required to be at each level.

use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::bot::command::integer_arg;
use crate::error::AppError;
use crate::level::xp_threshold;

/// Most levels one invocation may display.
const MAX_ROWS: i64 = 30;

/// Builds the `/xptable` command definition.
///
/// # Returns
/// - `CreateCommand` - Command with optional start level and row count options
pub fn register() -> CreateCommand {
    CreateCommand::new("xptable")
        .description("View the XP required for each level")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "start",
                "First level to display (default 1)",
            )
            .min_int_value(1)
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "levels",
                "Number of levels to show (1-30, default 20)",
            )
            .min_int_value(1)
            .max_int_value(MAX_ROWS as u64)
            .required(false),
        )
}

/// Runs the `/xptable` command.
///
/// Pure presentation over the level function; touches no state.
///
/// # Arguments
/// - `ctx` - Discord context for API access
/// - `command` - The invoking interaction
///
/// # Returns
/// - `Ok(())` - Response sent
/// - `Err(AppError)` - Response could not be delivered
pub async fn run(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    let options = command.data.options();
    let start = integer_arg(&options, "start").unwrap_or(1).max(1) as i32;
    let rows = integer_arg(&options, "levels").unwrap_or(20).clamp(1, MAX_ROWS) as i32;

    let mut lines = String::new();
    for level in start..start + rows {
        lines.push_str(&format!("**Level {}:** {} XP\n", level, xp_threshold(level)));
    }

    let embed = CreateEmbed::new()
        .title("XP Requirements")
        .colour(Colour::TEAL)
        .description(lines)
        .field(
            "How it works",
            "Chat to earn XP. Each level requires more total XP than the last.",
            false,
        );

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().embed(embed),
            ),
        )
        .await?;

    Ok(())
}
