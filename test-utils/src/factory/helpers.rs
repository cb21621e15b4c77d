//! Shared helper utilities for factory methods.
//!
//! Currently just ID generation: member and guild snowflakes in tests come
//! from one counter so factory-created identities never collide.

/// Counter backing unique test identities.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories for the lifetime of the
/// test process.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
