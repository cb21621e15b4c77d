//! `/leaderboard` - ranked view of the guild's XP ledger.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::bot::command::{integer_arg, respond_ephemeral, respond_text};
use crate::error::AppError;
use crate::service::leaderboard::LeaderboardService;

/// Builds the `/leaderboard` command definition.
///
/// # Returns
/// - `CreateCommand` - Command with an optional entry-count option
pub fn register() -> CreateCommand {
    CreateCommand::new("leaderboard")
        .description("View the top members by XP")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "entries",
                "Number of entries to show (1-25, default 10)",
            )
            .min_int_value(1)
            .max_int_value(25)
            .required(false),
        )
}

/// Runs the `/leaderboard` command.
///
/// Reads the guild's top entries ordered by XP and responds with an embed.
/// An empty ledger yields a plain message instead of an empty embed.
///
/// # Arguments
/// - `db` - Database connection
/// - `ctx` - Discord context for API access
/// - `command` - The invoking interaction
///
/// # Returns
/// - `Ok(())` - Response sent
/// - `Err(AppError)` - Response could not be delivered
pub async fn run(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let Some(guild_id) = command.guild_id else {
        return respond_ephemeral(ctx, command, "This command only works in a server.").await;
    };

    let options = command.data.options();
    let limit = integer_arg(&options, "entries").map(|value| value.clamp(1, 25) as u8);

    let entries = LeaderboardService::new(db).top(guild_id.get(), limit).await?;

    if entries.is_empty() {
        return respond_text(ctx, command, "No one has earned XP yet. Start chatting!").await;
    }

    let mut lines = String::new();
    for (index, entry) in entries.iter().enumerate() {
        lines.push_str(&format!(
            "**{}.** {} - Level {} ({} XP)\n",
            index + 1,
            entry.display_name,
            entry.level,
            entry.xp
        ));
    }

    let embed = CreateEmbed::new()
        .title("XP Leaderboard")
        .colour(Colour::GOLD)
        .description(lines);

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
