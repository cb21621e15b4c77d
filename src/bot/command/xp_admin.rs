//! `/xp` - administrative XP adjustments.
//!
//! Subcommands: `add`, `remove`, `set`, `reset` target one member;
//! `resetall` wipes the whole guild's XP. Gated to members with the
//! Manage Server permission through the command definition.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    Permissions, ResolvedValue, User,
};

use crate::bot::command::{integer_arg, respond_ephemeral, respond_text, user_arg};
use crate::error::{progression::ProgressionError, AppError};
use crate::model::progress::{AdjustXpParam, SetXpParam};
use crate::service::progression::ProgressionService;

/// Builds the `/xp` command definition.
///
/// # Returns
/// - `CreateCommand` - Admin command with one subcommand per operation
pub fn register() -> CreateCommand {
    CreateCommand::new("xp")
        .description("Manage member XP")
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Add XP to a member")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::User, "member", "Target member")
                        .required(true),
                )
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "amount", "XP to add")
                        .min_int_value(1)
                        .required(true),
                ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "remove",
                "Remove XP from a member",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Target member")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "amount", "XP to remove")
                    .min_int_value(1)
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "set",
                "Set a member's total XP",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Target member")
                    .required(true),
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "amount", "New total XP")
                    .min_int_value(0)
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "reset",
                "Reset a member's XP to zero",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "member", "Target member")
                    .required(true),
            ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "resetall",
            "Reset every member's XP in this server",
        ))
}

/// Runs the `/xp` command.
///
/// Dispatches on the invoked subcommand. Domain failures (invalid amounts,
/// ineligible targets, missing entries) and storage failures are all surfaced
/// to the invoking admin; the reply is ephemeral so moderation noise stays
/// out of the channel.
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

    let service = ProgressionService::new(db);

    match sub.name {
        "add" | "remove" | "set" => {
            let Some(target) = user_arg(args, "member") else {
                return respond_ephemeral(ctx, command, "A target member is required.").await;
            };
            let Some(amount) = integer_arg(args, "amount") else {
                return respond_ephemeral(ctx, command, "An amount is required.").await;
            };

            // Automated accounts are excluded from progression; reject before
            // the ledger is touched.
            if target.bot {
                return respond_ephemeral(
                    ctx,
                    command,
                    ProgressionError::IneligibleActor.to_string(),
                )
                .await;
            }

            let result = match sub.name {
                "add" => {
                    service
                        .add_xp(AdjustXpParam {
                            user_id: target.id.get(),
                            guild_id,
                            display_name: target.display_name().to_string(),
                            amount,
                        })
                        .await
                }
                "remove" => {
                    service
                        .remove_xp(AdjustXpParam {
                            user_id: target.id.get(),
                            guild_id,
                            display_name: target.display_name().to_string(),
                            amount,
                        })
                        .await
                }
                _ => {
                    service
                        .set_xp(SetXpParam {
                            user_id: target.id.get(),
                            guild_id,
                            display_name: target.display_name().to_string(),
                            xp: amount,
                        })
                        .await
                }
            };

            match result {
                Ok(updated) => {
                    respond_text(
                        ctx,
                        command,
                        format!(
                            "{} now has {} XP (level {}).",
                            updated.display_name, updated.xp, updated.level
                        ),
                    )
                    .await
                }
                Err(e @ ProgressionError::InvalidAmount(_)) => {
                    respond_ephemeral(ctx, command, e.to_string()).await
                }
                Err(e) => Err(e.into()),
            }
        }
        "reset" => {
            let Some(target) = user_arg(args, "member") else {
                return respond_ephemeral(ctx, command, "A target member is required.").await;
            };

            run_reset(db, ctx, command, guild_id, target).await
        }
        "resetall" => {
            let count = service.reset_guild_xp(guild_id).await?;
            respond_text(ctx, command, format!("Reset XP for {} members.", count)).await
        }
        other => {
            tracing::warn!("Received unknown /xp subcommand {}", other);
            respond_ephemeral(ctx, command, "Unknown subcommand.").await
        }
    }
}

/// Runs the `reset` subcommand for one member.
async fn run_reset(
    db: &DatabaseConnection,
    ctx: &Context,
    command: &CommandInteraction,
    guild_id: u64,
    target: &User,
) -> Result<(), AppError> {
    match ProgressionService::new(db)
        .reset_xp(target.id.get(), guild_id)
        .await
    {
        Ok(()) => {
            respond_text(
                ctx,
                command,
                format!("Reset {}'s XP to zero.", target.display_name()),
            )
            .await
        }
        Err(ProgressionError::NotFound) => {
            respond_ephemeral(
                ctx,
                command,
                format!("{} has no XP to reset.", target.display_name()),
            )
            .await
        }
        Err(e) => Err(e.into()),
    }
}
