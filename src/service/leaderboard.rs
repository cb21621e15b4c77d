//! Leaderboard service providing the ranked read-only view over the ledger.

use sea_orm::DatabaseConnection;

use crate::{
    data::progress::ProgressRepository, error::progression::ProgressionError,
    model::progress::MemberProgress,
};

/// Smallest number of entries a leaderboard request may ask for.
const MIN_LIMIT: u8 = 1;
/// Largest number of entries a leaderboard request may ask for.
const MAX_LIMIT: u8 = 25;
/// Entries returned when the request does not specify a limit.
const DEFAULT_LIMIT: u8 = 10;

/// Service providing the ranked leaderboard projection.
///
/// Read-only: never mutates the ledger.
pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    /// Creates a new LeaderboardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `LeaderboardService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the top members of a guild ordered by XP descending.
    ///
    /// The limit is clamped to 1..=25 and defaults to 10. Ties break by
    /// insertion order, so the ranking is deterministic for a fixed store
    /// state. An empty guild yields an empty list, not an error.
    ///
    /// # Arguments
    /// - `guild_id` - Discord ID of the guild
    /// - `limit` - Requested number of entries, or None for the default
    ///
    /// # Returns
    /// - `Ok(Vec<MemberProgress>)` - Ranked entries, at most `limit`
    /// - `Err(ProgressionError::Db)` - Database error during query
    pub async fn top(
        &self,
        guild_id: u64,
        limit: Option<u8>,
    ) -> Result<Vec<MemberProgress>, ProgressionError> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(MIN_LIMIT, MAX_LIMIT);

        ProgressRepository::new(self.db)
            .top_by_guild(guild_id, limit as u64)
            .await
    }
}
