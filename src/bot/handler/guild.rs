use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild};

use crate::service::settings::SettingsService;

/// Handle a guild becoming available or the bot joining a new guild.
///
/// Ensures the guild has a settings row so later reads on the hot message
/// path find it in place. Creation is lazy elsewhere too; this just front-runs
/// it at join time.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    match SettingsService::new(db).get(guild_id).await {
        Ok(settings) => tracing::debug!(
            "Settings ready for guild {} ({}) - xp_enabled: {}, is_new: {:?}",
            guild.name,
            guild_id,
            settings.xp_enabled,
            is_new
        ),
        Err(e) => tracing::error!("Failed to ensure settings for guild {}: {:?}", guild_id, e),
    }
}
