//! Progression service for XP grants and administrative adjustments.
//!
//! This module provides the `ProgressionService`, the single entry point for
//! everything that changes or reads a member's XP. The passive chat path runs
//! here: settings gate, cooldown admission, the random XP roll, and the atomic
//! grant whose result drives level-up detection. Administrative operations
//! validate their amounts here before touching the repository.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    cooldown::CooldownGate,
    data::progress::ProgressRepository,
    error::progression::ProgressionError,
    model::progress::{
        AdjustXpParam, ChatMessageParam, GrantXpParam, LevelUpEvent, MemberProgress, SetXpParam,
    },
};

use super::settings::SettingsService;

/// Width of the per-message XP roll above the configured base rate.
///
/// A message earns `base..=base + XP_ROLL_SPREAD` XP, so the default rate of
/// 15 yields 15 to 25 XP per accepted message.
const XP_ROLL_SPREAD: i32 = 10;

/// Service providing business logic for XP progression.
pub struct ProgressionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressionService<'a> {
    /// Creates a new ProgressionService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProgressionService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs the passive XP path for one inbound chat message.
    ///
    /// In order: reads the guild settings (created with defaults on first
    /// contact), stops if XP is disabled, asks the cooldown gate for
    /// admission, rolls the XP amount, and applies the grant atomically.
    /// The level-up decision comes from the grant result itself, never from
    /// a re-read.
    ///
    /// Eligibility is the caller's job: automated accounts must be filtered
    /// before this method.
    ///
    /// # Arguments
    /// - `gate` - Cooldown gate owned by the bot event handler
    /// - `param` - Message parameters (author, guild, display name, time)
    ///
    /// # Returns
    /// - `Ok(Some(LevelUpEvent))` - Grant applied and a level threshold crossed
    /// - `Ok(None)` - Nothing to announce: XP disabled, on cooldown, or no crossing
    /// - `Err(ProgressionError)` - Storage failure; the message earns nothing
    pub async fn handle_chat_message(
        &self,
        gate: &CooldownGate,
        param: ChatMessageParam,
    ) -> Result<Option<LevelUpEvent>, ProgressionError> {
        let settings = SettingsService::new(self.db).get(param.guild_id).await?;
        if !settings.xp_enabled {
            return Ok(None);
        }

        if !gate.try_admit(param.user_id, param.guild_id, param.now) {
            return Ok(None);
        }

        let amount = roll_xp_amount(settings.base_xp_rate);
        let grant = ProgressRepository::new(self.db)
            .grant_xp(GrantXpParam {
                user_id: param.user_id,
                guild_id: param.guild_id,
                display_name: param.display_name,
                amount,
                now: param.now,
            })
            .await?;

        if !grant.leveled_up {
            return Ok(None);
        }

        Ok(Some(LevelUpEvent {
            user_id: param.user_id,
            guild_id: param.guild_id,
            previous_level: grant.previous_level,
            new_level: grant.new_level,
            new_xp: grant.new_xp,
        }))
    }

    /// Retrieves a member's progression stats.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The member's entry
    /// - `Err(ProgressionError::NotFound)` - The member has no entry yet
    /// - `Err(ProgressionError::Db)` - Database error during query
    pub async fn get_stats(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<MemberProgress, ProgressionError> {
        ProgressRepository::new(self.db)
            .find_by_member(user_id, guild_id)
            .await?
            .ok_or(ProgressionError::NotFound)
    }

    /// Adds XP to a member as an administrative adjustment.
    ///
    /// # Arguments
    /// - `param` - Adjustment parameters; the amount must be positive
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The updated entry
    /// - `Err(ProgressionError::InvalidAmount)` - Non-positive amount
    /// - `Err(ProgressionError)` - Storage failure during the update
    pub async fn add_xp(&self, param: AdjustXpParam) -> Result<MemberProgress, ProgressionError> {
        if param.amount <= 0 {
            return Err(ProgressionError::InvalidAmount(param.amount));
        }

        ProgressRepository::new(self.db).add_xp(param).await
    }

    /// Removes XP from a member as an administrative adjustment.
    ///
    /// The member's XP is floored at 0.
    ///
    /// # Arguments
    /// - `param` - Adjustment parameters; the amount must be positive
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The updated entry
    /// - `Err(ProgressionError::InvalidAmount)` - Non-positive amount
    /// - `Err(ProgressionError)` - Storage failure during the update
    pub async fn remove_xp(
        &self,
        param: AdjustXpParam,
    ) -> Result<MemberProgress, ProgressionError> {
        if param.amount <= 0 {
            return Err(ProgressionError::InvalidAmount(param.amount));
        }

        ProgressRepository::new(self.db).remove_xp(param).await
    }

    /// Overrides a member's cumulative XP.
    ///
    /// # Arguments
    /// - `param` - Override parameters; the XP value must be non-negative
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The updated entry
    /// - `Err(ProgressionError::InvalidAmount)` - Negative XP value
    /// - `Err(ProgressionError)` - Storage failure during the update
    pub async fn set_xp(&self, param: SetXpParam) -> Result<MemberProgress, ProgressionError> {
        if param.xp < 0 {
            return Err(ProgressionError::InvalidAmount(param.xp));
        }

        ProgressRepository::new(self.db).set_xp(param).await
    }

    /// Resets a member's XP to zero.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(())` - Entry reset
    /// - `Err(ProgressionError::NotFound)` - The member has no entry
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn reset_xp(&self, user_id: u64, guild_id: u64) -> Result<(), ProgressionError> {
        ProgressRepository::new(self.db).reset_xp(user_id, guild_id).await
    }

    /// Resets every member's XP in a guild to zero.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries reset
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn reset_guild_xp(&self, guild_id: u64) -> Result<u64, ProgressionError> {
        ProgressRepository::new(self.db).reset_guild_xp(guild_id).await
    }
}

/// Rolls the XP amount for one accepted message.
///
/// Uniform in `base..=base + XP_ROLL_SPREAD`.
fn roll_xp_amount(base_xp_rate: i32) -> i64 {
    rand::rng().random_range(base_xp_rate..=base_xp_rate + XP_ROLL_SPREAD) as i64
}
