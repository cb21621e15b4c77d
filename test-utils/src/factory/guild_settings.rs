//! Guild settings factory for creating test configuration rows.
//!
//! Provides factory methods mirroring the defaults the application applies when
//! lazily creating a settings row for a guild.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db)
///     .guild_id("42")
///     .xp_enabled(false)
///     .base_xp_rate(25)
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    xp_enabled: bool,
    base_xp_rate: i32,
    level_up_channel_id: Option<String>,
    level_up_message: Option<String>,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new GuildSettingsFactory with default values.
    ///
    /// Defaults match the application's lazy-creation defaults:
    /// - guild_id: auto-incremented unique ID
    /// - xp_enabled: `true`
    /// - base_xp_rate: `15`
    /// - level_up_channel_id: `None`, level_up_message: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildSettingsFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            xp_enabled: true,
            base_xp_rate: 15,
            level_up_channel_id: None,
            level_up_message: None,
        }
    }

    /// Sets the Discord guild ID for the settings row.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets whether XP gain is enabled for the guild.
    ///
    /// # Arguments
    /// - `xp_enabled` - Whether members earn XP from messages
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn xp_enabled(mut self, xp_enabled: bool) -> Self {
        self.xp_enabled = xp_enabled;
        self
    }

    /// Sets the base XP rate for the guild.
    ///
    /// # Arguments
    /// - `base_xp_rate` - Lower bound of the per-message XP roll
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn base_xp_rate(mut self, base_xp_rate: i32) -> Self {
        self.base_xp_rate = base_xp_rate;
        self
    }

    /// Sets the level-up announcement channel for the guild.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn level_up_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.level_up_channel_id = Some(channel_id.into());
        self
    }

    /// Sets the level-up message template for the guild.
    ///
    /// # Arguments
    /// - `message` - Template with `{user}` and `{level}` placeholders
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn level_up_message(mut self, message: impl Into<String>) -> Self {
        self.level_up_message = Some(message.into());
        self
    }

    /// Builds and inserts the guild settings entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            xp_enabled: ActiveValue::Set(self.xp_enabled),
            base_xp_rate: ActiveValue::Set(self.base_xp_rate),
            level_up_channel_id: ActiveValue::Set(self.level_up_channel_id),
            level_up_message: ActiveValue::Set(self.level_up_message),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild settings row with default values.
///
/// Shorthand for `GuildSettingsFactory::new(db).guild_id(guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
///
/// # Returns
/// - `Ok(entity::guild_settings::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_settings(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).guild_id(guild_id).build().await
}
