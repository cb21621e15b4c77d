//! Guild settings repository for database operations.
//!
//! This module provides the `GuildSettingsRepository` for managing per-guild
//! progression configuration. Settings rows are created lazily with defaults
//! on first access; setters ensure the row exists before updating it.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter,
};

use crate::{
    error::progression::ProgressionError,
    model::settings::{GuildSettings, DEFAULT_BASE_XP_RATE},
};

/// Repository providing database operations for guild settings.
pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    /// Creates a new GuildSettingsRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GuildSettingsRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the settings for a guild, creating the row with defaults if absent.
    ///
    /// Defaults: XP enabled, base rate 15, announcements in the originating
    /// channel with the built-in template.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Existing or freshly created settings
    /// - `Err(ProgressionError::Db)` - Database error during query or insert
    pub async fn get_or_create(&self, guild_id: u64) -> Result<GuildSettings, ProgressionError> {
        let existing = self.find_model(guild_id).await?;

        if let Some(model) = existing {
            return GuildSettings::from_entity(model);
        }

        let inserted = entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            xp_enabled: ActiveValue::Set(true),
            base_xp_rate: ActiveValue::Set(DEFAULT_BASE_XP_RATE),
            level_up_channel_id: ActiveValue::Set(None),
            level_up_message: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(model) => GuildSettings::from_entity(model),
            // Another handler may have created the row between the check and
            // the insert; the unique key rejects ours, so read theirs.
            Err(err) => {
                let model = self.find_model(guild_id).await?;
                match model {
                    Some(model) => GuildSettings::from_entity(model),
                    None => Err(ProgressionError::Db(err)),
                }
            }
        }
    }

    /// Enables or disables XP gain for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `enabled` - Whether members earn XP from messages
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated (row created first if needed)
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_xp_enabled(
        &self,
        guild_id: u64,
        enabled: bool,
    ) -> Result<(), ProgressionError> {
        self.get_or_create(guild_id).await?;

        entity::prelude::GuildSettings::update_many()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(entity::guild_settings::Column::XpEnabled, Expr::value(enabled))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets the base XP rate for a guild.
    ///
    /// Rate validation happens in the service layer; this method assumes a
    /// positive rate.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `base_xp_rate` - New lower bound of the per-message XP roll
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated (row created first if needed)
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_base_xp_rate(
        &self,
        guild_id: u64,
        base_xp_rate: i32,
    ) -> Result<(), ProgressionError> {
        self.get_or_create(guild_id).await?;

        entity::prelude::GuildSettings::update_many()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(
                entity::guild_settings::Column::BaseXpRate,
                Expr::value(base_xp_rate),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets or clears the level-up announcement channel for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `channel_id` - New channel, or None to announce in the originating channel
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated (row created first if needed)
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_level_up_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<(), ProgressionError> {
        self.get_or_create(guild_id).await?;

        entity::prelude::GuildSettings::update_many()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(
                entity::guild_settings::Column::LevelUpChannelId,
                Expr::value(channel_id.map(|id| id.to_string())),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sets or clears the level-up message template for a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `message` - New template, or None to restore the built-in default
    ///
    /// # Returns
    /// - `Ok(())` - Setting updated (row created first if needed)
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn set_level_up_message(
        &self,
        guild_id: u64,
        message: Option<String>,
    ) -> Result<(), ProgressionError> {
        self.get_or_create(guild_id).await?;

        entity::prelude::GuildSettings::update_many()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(
                entity::guild_settings::Column::LevelUpMessage,
                Expr::value(message),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the raw settings row for a guild.
    async fn find_model(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_settings::Model>, ProgressionError> {
        let model = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(model)
    }
}
