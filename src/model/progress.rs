//! XP ledger domain models and parameters.
//!
//! Provides the domain view of a member's progression entry, the result type
//! of an atomic XP grant, and the parameter structs for grant and adjustment
//! operations.

use chrono::{DateTime, Utc};

use crate::{error::progression::ProgressionError, util::parse::parse_u64_from_string};

/// A member's progression entry within one guild.
///
/// Mirrors one ledger row: cumulative XP, the level derived from it, and
/// message activity metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProgress {
    /// Discord ID of the member.
    pub user_id: u64,
    /// Discord ID of the guild the entry belongs to.
    pub guild_id: u64,
    /// Last-observed display name. Advisory, not identity-bearing.
    pub display_name: String,
    /// Cumulative XP.
    pub xp: i64,
    /// Level derived from `xp`.
    pub level: i32,
    /// Number of accepted XP-granting messages.
    pub message_count: i64,
    /// Timestamp of the last accepted XP gain.
    pub last_gain_at: Option<DateTime<Utc>>,
}

impl MemberProgress {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(MemberProgress)` - The converted domain model
    /// - `Err(ProgressionError::ParseStoredId)` - A stored snowflake could not
    ///   be parsed back into a u64
    pub fn from_entity(entity: entity::member_progress::Model) -> Result<Self, ProgressionError> {
        let user_id = parse_u64_from_string(entity.user_id)?;
        let guild_id = parse_u64_from_string(entity.guild_id)?;

        Ok(Self {
            user_id,
            guild_id,
            display_name: entity.display_name,
            xp: entity.xp,
            level: entity.level,
            message_count: entity.message_count,
            last_gain_at: entity.last_gain_at,
        })
    }
}

/// Outcome of a single atomic XP grant.
///
/// Both levels come from the same conditional update, so a level-up decision
/// made from this struct can never be confused by a concurrent grant landing
/// between the write and a re-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpGrant {
    /// Level before the grant was applied.
    pub previous_level: i32,
    /// Level after the grant was applied.
    pub new_level: i32,
    /// Cumulative XP after the grant was applied.
    pub new_xp: i64,
    /// Whether this grant crossed at least one level threshold.
    pub leveled_up: bool,
}

/// Parameters for granting XP from an accepted chat message.
#[derive(Debug, Clone)]
pub struct GrantXpParam {
    /// Discord ID of the member.
    pub user_id: u64,
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Current display name of the member.
    pub display_name: String,
    /// XP to add. Must be positive.
    pub amount: i64,
    /// Time of the accepted gain, recorded as `last_gain_at`.
    pub now: DateTime<Utc>,
}

/// Parameters for an administrative XP adjustment (add or remove).
#[derive(Debug, Clone)]
pub struct AdjustXpParam {
    /// Discord ID of the member.
    pub user_id: u64,
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Current display name of the member, used if the entry must be created.
    pub display_name: String,
    /// XP delta to apply. Must be positive; the operation decides direction.
    pub amount: i64,
}

/// Parameters for an administrative XP override.
#[derive(Debug, Clone)]
pub struct SetXpParam {
    /// Discord ID of the member.
    pub user_id: u64,
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Current display name of the member, used if the entry must be created.
    pub display_name: String,
    /// New cumulative XP value. Must be non-negative.
    pub xp: i64,
}

/// Parameters describing an inbound chat message on the passive XP path.
#[derive(Debug, Clone)]
pub struct ChatMessageParam {
    /// Discord ID of the author.
    pub user_id: u64,
    /// Discord ID of the guild the message was sent in.
    pub guild_id: u64,
    /// Current display name of the author.
    pub display_name: String,
    /// Time the message was observed; drives the cooldown gate and
    /// `last_gain_at`.
    pub now: DateTime<Utc>,
}

/// A level-up crossing produced by an accepted grant.
///
/// Carries everything the notifier needs; constructed only when
/// `XpGrant::leveled_up` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpEvent {
    /// Discord ID of the member who leveled up.
    pub user_id: u64,
    /// Discord ID of the guild.
    pub guild_id: u64,
    /// Level before the crossing.
    pub previous_level: i32,
    /// Level after the crossing.
    pub new_level: i32,
    /// Cumulative XP after the grant.
    pub new_xp: i64,
}
