//! XP ledger repository for database operations.
//!
//! This module provides the `ProgressRepository` for managing per-member XP
//! records. The write path is built around a conditional update keyed on the
//! previously observed XP value: a grant re-reads and retries when another
//! writer got there first, so concurrent grants for the same member never
//! lose updates regardless of how event handlers interleave. The level column
//! is always recomputed from the resulting XP inside the same statement's
//! values; it is never written independently.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    error::progression::ProgressionError,
    level::level_for,
    model::progress::{AdjustXpParam, GrantXpParam, MemberProgress, SetXpParam, XpGrant},
};

/// Attempts before a contended conditional update gives up.
///
/// Each failed attempt means another grant for the same member committed
/// between our read and our write; the re-read picks up their result, so a
/// handful of retries outlasts any realistic chat burst.
const MAX_UPDATE_ATTEMPTS: usize = 8;

/// Repository providing database operations for the XP ledger.
///
/// This struct holds a reference to the database connection and provides
/// methods for granting XP, administrative adjustments, and progression
/// queries.
pub struct ProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressRepository<'a> {
    /// Creates a new ProgressRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProgressRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants XP to a member for an accepted chat message.
    ///
    /// Lazily creates the ledger entry on first activity, then applies the
    /// grant through the conditional-update loop. The grant adds `amount` to
    /// XP, recomputes the level, increments the message count, and stamps
    /// `last_gain_at`. The returned pre/post levels come from the same atomic
    /// update, so the caller can detect a level-up without re-reading.
    ///
    /// Amount validation happens in the service layer; this method assumes a
    /// positive amount.
    ///
    /// # Arguments
    /// - `param` - Grant parameters including member identity, display name,
    ///   amount, and the gain timestamp
    ///
    /// # Returns
    /// - `Ok(XpGrant)` - Pre/post levels, new XP, and the level-up flag
    /// - `Err(ProgressionError::Contention)` - Retry budget exhausted
    /// - `Err(ProgressionError::Db)` - Database error during insert or update
    pub async fn grant_xp(&self, param: GrantXpParam) -> Result<XpGrant, ProgressionError> {
        let mut current = self
            .ensure_entry(param.user_id, param.guild_id, &param.display_name)
            .await?;

        use sea_orm::ExprTrait;

        for _ in 0..MAX_UPDATE_ATTEMPTS {
            let previous_level = current.level;
            let new_xp = current.xp + param.amount;
            let new_level = level_for(new_xp);

            let result = entity::prelude::MemberProgress::update_many()
                .filter(entity::member_progress::Column::UserId.eq(param.user_id.to_string()))
                .filter(entity::member_progress::Column::GuildId.eq(param.guild_id.to_string()))
                .filter(entity::member_progress::Column::Xp.eq(current.xp))
                .col_expr(entity::member_progress::Column::Xp, Expr::value(new_xp))
                .col_expr(entity::member_progress::Column::Level, Expr::value(new_level))
                .col_expr(
                    entity::member_progress::Column::MessageCount,
                    Expr::col(entity::member_progress::Column::MessageCount).add(1),
                )
                .col_expr(
                    entity::member_progress::Column::LastGainAt,
                    Expr::value(param.now),
                )
                .exec(self.db)
                .await?;

            if result.rows_affected > 0 {
                return Ok(XpGrant {
                    previous_level,
                    new_level,
                    new_xp,
                    leveled_up: new_level > previous_level,
                });
            }

            // Another grant for this member committed first; re-read and retry.
            current = self
                .find_entity(param.user_id, param.guild_id)
                .await?
                .ok_or(ProgressionError::NotFound)?;
        }

        Err(ProgressionError::Contention)
    }

    /// Adds XP to a member as an administrative adjustment.
    ///
    /// Lazily creates the entry, then applies the delta through the
    /// conditional-update loop. Does not touch the message count or the gain
    /// timestamp; those only move on chat grants.
    ///
    /// # Arguments
    /// - `param` - Adjustment parameters with a positive amount
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The updated entry
    /// - `Err(ProgressionError::Contention)` - Retry budget exhausted
    /// - `Err(ProgressionError::Db)` - Database error during insert or update
    pub async fn add_xp(&self, param: AdjustXpParam) -> Result<MemberProgress, ProgressionError> {
        let amount = param.amount;
        self.apply_xp_override(param.user_id, param.guild_id, &param.display_name, |xp| {
            xp + amount
        })
        .await
    }

    /// Removes XP from a member as an administrative adjustment.
    ///
    /// The result is floored at 0: removing more XP than a member has leaves
    /// the entry at 0 XP, level 1.
    ///
    /// # Arguments
    /// - `param` - Adjustment parameters with a positive amount
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The updated entry
    /// - `Err(ProgressionError::Contention)` - Retry budget exhausted
    /// - `Err(ProgressionError::Db)` - Database error during insert or update
    pub async fn remove_xp(&self, param: AdjustXpParam) -> Result<MemberProgress, ProgressionError> {
        let amount = param.amount;
        self.apply_xp_override(param.user_id, param.guild_id, &param.display_name, |xp| {
            xp - amount
        })
        .await
    }

    /// Overrides a member's cumulative XP.
    ///
    /// # Arguments
    /// - `param` - Override parameters with a non-negative XP value
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The updated entry
    /// - `Err(ProgressionError::Contention)` - Retry budget exhausted
    /// - `Err(ProgressionError::Db)` - Database error during insert or update
    pub async fn set_xp(&self, param: SetXpParam) -> Result<MemberProgress, ProgressionError> {
        let xp = param.xp;
        self.apply_xp_override(param.user_id, param.guild_id, &param.display_name, |_| xp)
            .await
    }

    /// Resets a member's XP to zero.
    ///
    /// The reset does not depend on the previous value, so a single
    /// unconditional update suffices. Message count is left as activity
    /// history.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(())` - Entry reset to 0 XP, level 1
    /// - `Err(ProgressionError::NotFound)` - No entry exists for the member
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn reset_xp(&self, user_id: u64, guild_id: u64) -> Result<(), ProgressionError> {
        let result = entity::prelude::MemberProgress::update_many()
            .filter(entity::member_progress::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_progress::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(entity::member_progress::Column::Xp, Expr::value(0i64))
            .col_expr(
                entity::member_progress::Column::Level,
                Expr::value(level_for(0)),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ProgressionError::NotFound);
        }

        Ok(())
    }

    /// Resets every member's XP in a guild to zero.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of entries reset (0 when the guild has none)
    /// - `Err(ProgressionError::Db)` - Database error during update
    pub async fn reset_guild_xp(&self, guild_id: u64) -> Result<u64, ProgressionError> {
        let result = entity::prelude::MemberProgress::update_many()
            .filter(entity::member_progress::Column::GuildId.eq(guild_id.to_string()))
            .col_expr(entity::member_progress::Column::Xp, Expr::value(0i64))
            .col_expr(
                entity::member_progress::Column::Level,
                Expr::value(level_for(0)),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Finds a member's progression entry.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `guild_id` - Discord ID of the guild
    ///
    /// # Returns
    /// - `Ok(Some(MemberProgress))` - Entry found
    /// - `Ok(None)` - No entry exists for the member
    /// - `Err(ProgressionError::Db)` - Database error during query
    pub async fn find_by_member(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<MemberProgress>, ProgressionError> {
        let entity = self.find_entity(user_id, guild_id).await?;

        entity.map(MemberProgress::from_entity).transpose()
    }

    /// Gets the top entries of a guild ordered by XP.
    ///
    /// Ordered by XP descending; ties break by row id ascending, which is
    /// insertion order and therefore deterministic for a fixed store state.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `limit` - Maximum number of entries to return
    ///
    /// # Returns
    /// - `Ok(Vec<MemberProgress>)` - Ranked entries (empty when the guild has none)
    /// - `Err(ProgressionError::Db)` - Database error during query
    pub async fn top_by_guild(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<MemberProgress>, ProgressionError> {
        let entities = entity::prelude::MemberProgress::find()
            .filter(entity::member_progress::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::member_progress::Column::Xp)
            .order_by_asc(entity::member_progress::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(MemberProgress::from_entity)
            .collect()
    }

    /// Inserts the member's ledger entry if it does not exist yet.
    ///
    /// Uses an upsert on the `(user_id, guild_id)` unique key: a fresh entry
    /// starts at 0 XP, level 1; an existing entry only gets its advisory
    /// display name refreshed. Either way the current row is returned.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `guild_id` - Discord ID of the guild
    /// - `display_name` - Current display name of the member
    ///
    /// # Returns
    /// - `Ok(Model)` - The current ledger row
    /// - `Err(ProgressionError::Db)` - Database error during upsert
    async fn ensure_entry(
        &self,
        user_id: u64,
        guild_id: u64,
        display_name: &str,
    ) -> Result<entity::member_progress::Model, ProgressionError> {
        let entity = entity::prelude::MemberProgress::insert(entity::member_progress::ActiveModel {
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            display_name: ActiveValue::Set(display_name.to_string()),
            xp: ActiveValue::Set(0),
            level: ActiveValue::Set(1),
            message_count: ActiveValue::Set(0),
            last_gain_at: ActiveValue::Set(None),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::member_progress::Column::UserId,
                entity::member_progress::Column::GuildId,
            ])
            .update_column(entity::member_progress::Column::DisplayName)
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(entity)
    }

    /// Finds the raw entity row for a member.
    async fn find_entity(
        &self,
        user_id: u64,
        guild_id: u64,
    ) -> Result<Option<entity::member_progress::Model>, ProgressionError> {
        let entity = entity::prelude::MemberProgress::find()
            .filter(entity::member_progress::Column::UserId.eq(user_id.to_string()))
            .filter(entity::member_progress::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?;

        Ok(entity)
    }

    /// Applies an XP override through the conditional-update loop.
    ///
    /// Shared by the administrative operations: computes the new XP from the
    /// observed value, floors it at 0, recomputes the level, and commits only
    /// if the observed value is still current. Message count and gain
    /// timestamp are untouched.
    async fn apply_xp_override<F>(
        &self,
        user_id: u64,
        guild_id: u64,
        display_name: &str,
        compute: F,
    ) -> Result<MemberProgress, ProgressionError>
    where
        F: Fn(i64) -> i64,
    {
        let mut current = self.ensure_entry(user_id, guild_id, display_name).await?;

        for _ in 0..MAX_UPDATE_ATTEMPTS {
            let new_xp = compute(current.xp).max(0);
            let new_level = level_for(new_xp);

            let result = entity::prelude::MemberProgress::update_many()
                .filter(entity::member_progress::Column::UserId.eq(user_id.to_string()))
                .filter(entity::member_progress::Column::GuildId.eq(guild_id.to_string()))
                .filter(entity::member_progress::Column::Xp.eq(current.xp))
                .col_expr(entity::member_progress::Column::Xp, Expr::value(new_xp))
                .col_expr(entity::member_progress::Column::Level, Expr::value(new_level))
                .exec(self.db)
                .await?;

            if result.rows_affected > 0 {
                // The conditional update proved xp was still `current.xp`;
                // message count and gain timestamp only move together with
                // xp, so the rest of the observed row is equally current.
                return Ok(MemberProgress {
                    user_id,
                    guild_id,
                    display_name: current.display_name,
                    xp: new_xp,
                    level: new_level,
                    message_count: current.message_count,
                    last_gain_at: current.last_gain_at,
                });
            }

            current = self
                .find_entity(user_id, guild_id)
                .await?
                .ok_or(ProgressionError::NotFound)?;
        }

        Err(ProgressionError::Contention)
    }
}
