//! XP ledger entity: one row per member within one guild.
//!
//! Tracks cumulative XP, the level derived from it, and message activity.
//! `(user_id, guild_id)` is unique (enforced by a composite index in the
//! migration); `id` doubles as the deterministic leaderboard tiebreaker
//! since it reflects insertion order.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "member_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord user ID as a string snowflake.
    pub user_id: String,
    /// Discord guild ID as a string snowflake.
    pub guild_id: String,
    /// Last-observed display name. Advisory only, not identity-bearing.
    pub display_name: String,
    /// Cumulative XP. Non-negative; only admin overrides may decrease it.
    pub xp: i64,
    /// Level derived from `xp`. Must equal `level_for(xp)` after every write.
    pub level: i32,
    /// Number of accepted XP-granting messages.
    pub message_count: i64,
    /// Timestamp of the last accepted XP gain.
    pub last_gain_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
