use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, CreateInteractionResponse, CreateInteractionResponseMessage, Interaction,
};

use crate::bot::command::{leaderboard, rank, settings, xp_admin, xp_table};

/// Handle an interaction from the Discord gateway.
///
/// Routes slash-command invocations to their command runners by name. Other
/// interaction kinds (components, modals, autocomplete) are ignored; nothing
/// in this bot creates them.
///
/// Command runners respond to the expected outcomes themselves and propagate
/// unexpected failures here, where they are logged and answered with a
/// generic ephemeral error so the invoking admin always sees that the
/// operation did not complete.
pub async fn handle_interaction(db: &DatabaseConnection, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let name = command.data.name.clone();

    let result = match name.as_str() {
        "rank" => rank::run(db, &ctx, &command).await,
        "leaderboard" => leaderboard::run(db, &ctx, &command).await,
        "xptable" => xp_table::run(&ctx, &command).await,
        "xp" => xp_admin::run(db, &ctx, &command).await,
        "xpsettings" => settings::run(db, &ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::error!("Command /{} failed: {}", name, e);

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("Something went wrong running that command, please try again.")
                .ephemeral(true),
        );

        // Best-effort: fails when the command already sent its response
        // before erroring, which is fine.
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::debug!("Failed to deliver error response for /{}: {:?}", name, e);
        }
    }
}
