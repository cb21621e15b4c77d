//! `/xpsettings` - per-guild progression configuration.
//!
//! Subcommands: `show`, `enable`, `disable`, `rate`, `channel`, `message`.
//! Gated to members with the Manage Server permission through the command
//! definition.

use sea_orm::DatabaseConnection;
use serenity::all::{
    Colour, CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage, Permissions,
    ResolvedValue,
};

use crate::bot::command::{channel_arg, integer_arg, respond_ephemeral, respond_text, string_arg};
use crate::error::{progression::ProgressionError, AppError};
use crate::model::settings::{
    SetBaseXpRateParam, SetLevelUpChannelParam, SetLevelUpMessageParam,
};
use crate::service::settings::SettingsService;

/// Builds the `/xpsettings` command definition.
///
/// # Returns
/// - `CreateCommand` - Admin command with one subcommand per setting
pub fn register() -> CreateCommand {
    CreateCommand::new("xpsettings")
        .description("Configure XP progression for this server")
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "show",
            "Show the current XP settings",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "enable",
            "Enable XP gain",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "disable",
            "Disable XP gain",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "rate",
                "Set the base XP per message",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "amount", "Base XP per message")
                    .min_int_value(1)
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "channel",
                "Set the level-up announcement channel",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Announcement channel (omit to announce where the message was sent)",
                )
                .required(false),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "message",
                "Set the level-up message template",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "template",
                    "Template with {user} and {level} placeholders (omit to restore the default)",
                )
                .required(false),
            ),
        )
}

/// Runs the `/xpsettings` command.
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
    let guild_id = guild_id.get();

    let options = command.data.options();
    let Some(sub) = options.first() else {
        return respond_ephemeral(ctx, command, "Missing subcommand.").await;
    };

    let ResolvedValue::SubCommand(args) = &sub.value else {
        return respond_ephemeral(ctx, command, "Missing subcommand.").await;
    };

    let service = SettingsService::new(db);

    let outcome = match sub.name {
        "show" => return run_show(db, ctx, command, guild_id).await,
        "enable" => service
            .set_xp_enabled(guild_id, true)
            .await
            .map(|_| "XP gain is now enabled.".to_string()),
        "disable" => service
            .set_xp_enabled(guild_id, false)
            .await
            .map(|_| "XP gain is now disabled.".to_string()),
        "rate" => {
            let Some(amount) = integer_arg(args, "amount") else {
                return respond_ephemeral(ctx, command, "An amount is required.").await;
            };

            service
                .set_base_xp_rate(SetBaseXpRateParam {
                    guild_id,
                    base_xp_rate: amount as i32,
                })
                .await
                .map(|_| format!("Base XP rate set to {}.", amount))
        }
        "channel" => {
            let channel_id = channel_arg(args, "channel");
            let description = match channel_id {
                Some(id) => format!("Level-up announcements will go to <#{}>.", id),
                None => "Level-up announcements will go to the channel the message was sent in."
                    .to_string(),
            };

            service
                .set_level_up_channel(SetLevelUpChannelParam {
                    guild_id,
                    channel_id,
                })
                .await
                .map(|_| description)
        }
        "message" => {
            let message = string_arg(args, "template").map(|s| s.to_string());
            let description = match &message {
                Some(_) => "Level-up message template updated.".to_string(),
                None => "Level-up message template restored to the default.".to_string(),
            };

            service
                .set_level_up_message(SetLevelUpMessageParam { guild_id, message })
                .await
                .map(|_| description)
        }
        other => {
            tracing::warn!("Received unknown /xpsettings subcommand {}", other);
            return respond_ephemeral(ctx, command, "Unknown subcommand.").await;
        }
    };

    match outcome {
        Ok(confirmation) => respond_text(ctx, command, confirmation).await,
        Err(e @ ProgressionError::InvalidAmount(_)) => {
            respond_ephemeral(ctx, command, e.to_string()).await
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs the `show` subcommand.
async fn run_show(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: u64,
) -> Result<(), AppError> {
    let settings = SettingsService::new(db).get(guild_id).await?;

    let channel = match settings.level_up_channel_id {
        Some(id) => format!("<#{}>", id),
        None => "Originating channel".to_string(),
    };

    let embed = CreateEmbed::new()
        .title("XP Settings")
        .colour(Colour::DARK_GREEN)
        .field(
            "XP gain",
            if settings.xp_enabled { "Enabled" } else { "Disabled" },
            true,
        )
        .field("Base XP rate", settings.base_xp_rate.to_string(), true)
        .field("Announcement channel", channel, true)
        .field(
            "Level-up message",
            settings.level_up_template().to_string(),
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
