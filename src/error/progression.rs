use std::num::ParseIntError;
use thiserror::Error;

/// Errors from the XP progression core.
///
/// Covers the grant/adjust paths of the ledger, stats lookups, and the
/// storage-layer failure modes of the atomic update loop. Notification
/// delivery failures are deliberately absent: they are logged where they
/// happen and never propagate into the grant path.
#[derive(Error, Debug)]
pub enum ProgressionError {
    /// A non-positive XP delta was requested.
    ///
    /// Rejected before any write; grants and adjustments must carry a
    /// positive amount.
    #[error("XP amount must be positive, got {0}")]
    InvalidAmount(i64),

    /// A grant was attempted for an actor excluded from progression,
    /// such as an automated account.
    #[error("Actor is not eligible for XP progression")]
    IneligibleActor,

    /// No ledger entry exists for the requested member.
    ///
    /// Distinguished from a zero-XP entry: once a row exists it is never
    /// reported as missing.
    #[error("No progression entry for this member")]
    NotFound,

    /// The conditional-update retry budget was exhausted.
    ///
    /// The store stayed contended across every attempt; the event is treated
    /// as not granted with no partial mutation.
    #[error("Storage contention exhausted the update retry budget")]
    Contention,

    /// A stored Discord snowflake could not be parsed back into an integer.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStoredId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Database error during a ledger operation.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
