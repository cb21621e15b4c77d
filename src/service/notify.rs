//! Level-up notification delivery.
//!
//! Sends the level-up announcement produced by an accepted grant. Delivery is
//! best-effort: the grant has already committed by the time this runs, so a
//! failed send is logged and swallowed, never rolled back or retried.

use serenity::all::ChannelId;
use serenity::http::Http;

use crate::model::{progress::LevelUpEvent, settings::GuildSettings};

/// Delivers level-up announcements to the configured channel.
pub struct LevelUpNotifier<'a> {
    http: &'a Http,
}

impl<'a> LevelUpNotifier<'a> {
    /// Creates a new LevelUpNotifier instance.
    ///
    /// # Arguments
    /// - `http` - Discord HTTP client used to send messages
    ///
    /// # Returns
    /// - `LevelUpNotifier` - New notifier instance
    pub fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Announces a level-up crossing.
    ///
    /// Resolves the target from the guild's configured announcement channel,
    /// falling back to the channel the triggering message was sent in, and
    /// renders the guild's template. A delivery failure (deleted channel,
    /// missing permissions, transport error) is logged and swallowed.
    ///
    /// # Arguments
    /// - `settings` - Guild settings carrying the channel and template
    /// - `origin_channel` - Channel of the message that triggered the grant
    /// - `event` - The level-up crossing to announce
    pub async fn notify(
        &self,
        settings: &GuildSettings,
        origin_channel: ChannelId,
        event: &LevelUpEvent,
    ) {
        let channel = settings
            .level_up_channel_id
            .map(ChannelId::new)
            .unwrap_or(origin_channel);

        let content = render_level_up_message(settings.level_up_template(), event);

        if let Err(e) = channel.say(self.http, content).await {
            tracing::error!(
                "Failed to deliver level-up notification for user {} in guild {}: {:?}",
                event.user_id,
                event.guild_id,
                e
            );
        }
    }
}

/// Renders a level-up template for an event.
///
/// Substitutes `{user}` with a mention of the member and `{level}` with the
/// new level. Unknown placeholders are left as-is.
///
/// # Arguments
/// - `template` - Template with `{user}` and `{level}` placeholders
/// - `event` - The level-up crossing being announced
///
/// # Returns
/// - `String` - Rendered announcement content
pub fn render_level_up_message(template: &str, event: &LevelUpEvent) -> String {
    template
        .replace("{user}", &format!("<@{}>", event.user_id))
        .replace("{level}", &event.new_level.to_string())
}
