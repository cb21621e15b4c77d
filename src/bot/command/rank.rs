//! `/rank` - show a member's level, XP, and message activity.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::bot::command::{respond_ephemeral, user_arg};
use crate::error::{progression::ProgressionError, AppError};
use crate::level::xp_threshold;
use crate::service::progression::ProgressionService;

/// Builds the `/rank` command definition.
///
/// # Returns
/// - `CreateCommand` - Command with an optional member option
pub fn register() -> CreateCommand {
    CreateCommand::new("rank")
        .description("Check your level and XP, or another member's")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::User,
                "member",
                "Member to check (defaults to you)",
            )
            .required(false),
        )
}

/// Runs the `/rank` command.
///
/// Looks up the target member's progression entry and responds with an embed
/// of level, XP, message count, and the XP remaining to the next level. A
/// member with no entry yet gets a friendly not-found message rather than an
/// error.
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
    let target = user_arg(&options, "member").unwrap_or(&command.user);

    let progress = match ProgressionService::new(db)
        .get_stats(target.id.get(), guild_id.get())
        .await
    {
        Ok(progress) => progress,
        Err(ProgressionError::NotFound) => {
            return respond_ephemeral(
                ctx,
                command,
                format!("{} has not earned any XP yet.", target.display_name()),
            )
            .await;
        }
        Err(e) => return Err(e.into()),
    };

    let to_next = (xp_threshold(progress.level + 1) - progress.xp).max(0);

    let embed = CreateEmbed::new()
        .title(format!("Rank for {}", progress.display_name))
        .colour(Colour::BLURPLE)
        .field("Level", progress.level.to_string(), true)
        .field("Total XP", progress.xp.to_string(), true)
        .field("Messages", progress.message_count.to_string(), true)
        .field("XP to next level", to_next.to_string(), true);

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
