//! Member progress factory for creating test XP ledger entries.
//!
//! This module provides factory methods for creating member progress entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test member progress rows with customizable fields.
///
/// Provides a builder pattern for creating XP ledger entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::member_progress::MemberProgressFactory;
///
/// let progress = MemberProgressFactory::new(&db)
///     .user_id("123456789")
///     .guild_id("42")
///     .xp(350)
///     .level(2)
///     .build()
///     .await?;
/// ```
pub struct MemberProgressFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    display_name: String,
    xp: i64,
    level: i32,
    message_count: i64,
    last_gain_at: Option<DateTime<Utc>>,
}

impl<'a> MemberProgressFactory<'a> {
    /// Creates a new MemberProgressFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented unique ID
    /// - guild_id: `"1"`
    /// - display_name: `"Member {id}"`
    /// - xp: `0`, level: `1`, message_count: `0`, last_gain_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `MemberProgressFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            guild_id: "1".to_string(),
            display_name: format!("Member {}", id),
            xp: 0,
            level: 1,
            message_count: 0,
            last_gain_at: None,
        }
    }

    /// Sets the Discord user ID for the entry.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the Discord guild ID for the entry.
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

    /// Sets the display name for the entry.
    ///
    /// # Arguments
    /// - `display_name` - Display name for the member
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the cumulative XP for the entry.
    ///
    /// The level is not derived automatically; set it explicitly when the
    /// test depends on a consistent pair.
    ///
    /// # Arguments
    /// - `xp` - Cumulative XP value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    /// Sets the level for the entry.
    ///
    /// # Arguments
    /// - `level` - Level value
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the message count for the entry.
    ///
    /// # Arguments
    /// - `message_count` - Number of accepted XP-granting messages
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn message_count(mut self, message_count: i64) -> Self {
        self.message_count = message_count;
        self
    }

    /// Sets the last gain timestamp for the entry.
    ///
    /// # Arguments
    /// - `last_gain_at` - Timestamp of the last accepted XP gain
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn last_gain_at(mut self, last_gain_at: DateTime<Utc>) -> Self {
        self.last_gain_at = Some(last_gain_at);
        self
    }

    /// Builds and inserts the member progress entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member_progress::Model)` - Created entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member_progress::Model, DbErr> {
        entity::member_progress::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            display_name: ActiveValue::Set(self.display_name),
            xp: ActiveValue::Set(self.xp),
            level: ActiveValue::Set(self.level),
            message_count: ActiveValue::Set(self.message_count),
            last_gain_at: ActiveValue::Set(self.last_gain_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a member progress row with default values in the given guild.
///
/// Shorthand for `MemberProgressFactory::new(db).guild_id(guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
///
/// # Returns
/// - `Ok(entity::member_progress::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_progress(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::member_progress::Model, DbErr> {
    MemberProgressFactory::new(db).guild_id(guild_id).build().await
}

/// Creates a member progress row with a specific XP value and matching level.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `xp` - Cumulative XP value
/// - `level` - Level consistent with `xp`
///
/// # Returns
/// - `Ok(entity::member_progress::Model)` - Created entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_progress_with_xp(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    xp: i64,
    level: i32,
) -> Result<entity::member_progress::Model, DbErr> {
    MemberProgressFactory::new(db)
        .guild_id(guild_id)
        .xp(xp)
        .level(level)
        .build()
        .await
}
