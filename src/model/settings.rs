//! Guild settings domain model and parameters.

use crate::{error::progression::ProgressionError, util::parse::parse_u64_from_string};

/// Default lower bound of the per-message XP roll.
pub const DEFAULT_BASE_XP_RATE: i32 = 15;

/// Default level-up announcement template.
pub const DEFAULT_LEVEL_UP_MESSAGE: &str = "Congratulations {user}! You reached level {level}!";

/// Per-guild progression configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// When false, no XP is granted anywhere in the guild.
    pub xp_enabled: bool,
    /// Lower bound of the per-message XP roll.
    pub base_xp_rate: i32,
    /// Channel for level-up announcements. None means the originating channel.
    pub level_up_channel_id: Option<u64>,
    /// Level-up message template. None means `DEFAULT_LEVEL_UP_MESSAGE`.
    pub level_up_message: Option<String>,
}

impl GuildSettings {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - The converted domain model
    /// - `Err(ProgressionError::ParseStoredId)` - A stored snowflake could not
    ///   be parsed back into a u64
    pub fn from_entity(entity: entity::guild_settings::Model) -> Result<Self, ProgressionError> {
        let guild_id = parse_u64_from_string(entity.guild_id)?;
        let level_up_channel_id = entity
            .level_up_channel_id
            .map(parse_u64_from_string)
            .transpose()?;

        Ok(Self {
            guild_id,
            xp_enabled: entity.xp_enabled,
            base_xp_rate: entity.base_xp_rate,
            level_up_channel_id,
            level_up_message: entity.level_up_message,
        })
    }

    /// The announcement template for this guild, falling back to the default.
    ///
    /// # Returns
    /// - `&str` - Template with `{user}` and `{level}` placeholders
    pub fn level_up_template(&self) -> &str {
        self.level_up_message
            .as_deref()
            .unwrap_or(DEFAULT_LEVEL_UP_MESSAGE)
    }
}

/// Parameters for updating the base XP rate of a guild.
#[derive(Debug, Clone)]
pub struct SetBaseXpRateParam {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// New lower bound of the per-message XP roll. Must be positive.
    pub base_xp_rate: i32,
}

/// Parameters for updating the level-up announcement channel of a guild.
#[derive(Debug, Clone)]
pub struct SetLevelUpChannelParam {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// New announcement channel; None restores the originating-channel default.
    pub channel_id: Option<u64>,
}

/// Parameters for updating the level-up message template of a guild.
#[derive(Debug, Clone)]
pub struct SetLevelUpMessageParam {
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// New template; None restores the built-in default.
    pub message: Option<String>,
}
