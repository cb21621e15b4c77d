//! Settings service for guild progression configuration.

use sea_orm::DatabaseConnection;

use crate::{
    data::settings::GuildSettingsRepository,
    error::progression::ProgressionError,
    model::settings::{
        GuildSettings, SetBaseXpRateParam, SetLevelUpChannelParam, SetLevelUpMessageParam,
    },
};

/// Service providing business logic for guild settings management.
pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    /// Creates a new SettingsService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `SettingsService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings for a guild, creating defaults on first access.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Existing or freshly created settings
    /// - `Err(ProgressionError::Db)` - Database error during query or insert
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, ProgressionError> {
        GuildSettingsRepository::new(self.db).get_or_create(guild_id).await
    }

    /// Enables or disables XP gain for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `enabled` - Whether members earn XP from messages
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_xp_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
    ) -> Result<(), ProgressionError> {
        GuildSettingsRepository::new(self.db)
            .set_xp_enabled(guild_id, enabled)
            .await
    }

    /// Sets the base XP rate for a guild.
    ///
    /// # Arguments
    /// - `param` - Parameters carrying the guild and the new rate
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated
    /// - `Err(ProgressionError::InvalidAmount)` - Non-positive rate
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_base_xp_rate(&self, param: SetBaseXpRateParam) -> Result<(), ProgressionError> {
        if param.base_xp_rate <= 0 {
            return Err(ProgressionError::InvalidAmount(param.base_xp_rate as i64));
        }

        GuildSettingsRepository::new(self.db)
            .set_base_xp_rate(param.guild_id, param.base_xp_rate)
            .await
    }

    /// Sets or clears the level-up announcement channel for a guild.
    ///
    /// # Arguments
    /// - `param` - Parameters carrying the guild and the new channel
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_level_up_channel(
        &self,
        param: SetLevelUpChannelParam,
    ) -> Result<(), ProgressionError> {
        GuildSettingsRepository::new(self.db)
            .set_level_up_channel(param.guild_id, param.channel_id)
            .await
    }

    /// Sets or clears the level-up message template for a guild.
    ///
    /// # Arguments
    /// - `param` - Parameters carrying the guild and the new template
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_level_up_message(
        &self,
        param: SetLevelUpMessageParam,
    ) -> Result<(), ProgressionError> {
        GuildSettingsRepository::new(self.db)
            .set_level_up_message(param.guild_id, param.message)
            .await
    }
}
