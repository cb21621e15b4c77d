//! XP-to-level mapping.
//!
//! Defines the progression curve as a pure step function of cumulative XP.
//! `xp_threshold` gives the minimum cumulative XP required to *be at* a level;
//! `level_for` inverts it by climbing from level 1. Level 1 is the XP-free
//! baseline: every entry starts at level 1 with 0 XP, so `level_for` never
//! returns less than 1 even though `xp_threshold(1)` is 100.

/// Minimum cumulative XP required to be at `level`.
///
/// Computed as `floor(100 * level^1.5)`. Strictly increasing for `level >= 1`.
///
/// # Arguments
/// - `level` - Level to look up, clamped to a minimum of 1
///
/// # Returns
/// - `i64` - Minimum cumulative XP for that level
pub fn xp_threshold(level: i32) -> i64 {
    let level = level.max(1) as f64;
    (100.0 * level.powf(1.5)).floor() as i64
}

/// Level reached with `xp` cumulative XP.
///
/// Climbs from level 1 while the next level's threshold is within `xp`. The
/// walk keeps the result an exact inverse of `xp_threshold` at every
/// boundary; a closed-form inverse would drift at thresholds through float
/// rounding.
///
/// # Arguments
/// - `xp` - Cumulative XP; values below `xp_threshold(2)` all map to level 1
///
/// # Returns
/// - `i32` - Level, always at least 1
pub fn level_for(xp: i64) -> i32 {
    let mut level = 1;
    while xp_threshold(level + 1) <= xp {
        level += 1;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_increasing() {
        for level in 1..=200 {
            assert!(
                xp_threshold(level) < xp_threshold(level + 1),
                "threshold({}) >= threshold({})",
                level,
                level + 1
            );
        }
    }

    #[test]
    fn known_threshold_values() {
        assert_eq!(xp_threshold(1), 100);
        assert_eq!(xp_threshold(2), 282); // floor(100 * 2^1.5)
        assert_eq!(xp_threshold(4), 800);
        assert_eq!(xp_threshold(9), 2700);
    }

    #[test]
    fn level_one_is_the_zero_xp_baseline() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(99), 1);
        // xp_threshold(1) == 100 does not gate the minimum level.
        assert_eq!(level_for(100), 1);
        assert_eq!(level_for(150), 1);
        assert_eq!(level_for(281), 1);
    }

    #[test]
    fn level_for_crosses_exactly_at_thresholds() {
        assert_eq!(level_for(282), 2);
        assert_eq!(level_for(283), 2);
        assert_eq!(level_for(xp_threshold(3) - 1), 2);
        assert_eq!(level_for(xp_threshold(3)), 3);
    }

    #[test]
    fn round_trips_with_xp_threshold() {
        for level in 2..=120 {
            assert_eq!(level_for(xp_threshold(level)), level);
            assert_eq!(level_for(xp_threshold(level + 1) - 1), level);
        }
    }

    #[test]
    fn level_for_is_non_decreasing() {
        let mut previous = level_for(0);
        for xp in 1..=5_000 {
            let current = level_for(xp);
            assert!(current >= previous, "level_for decreased at xp {}", xp);
            previous = current;
        }
    }

    #[test]
    fn negative_xp_maps_to_level_one() {
        // The ledger rejects negative XP before it gets here; the function
        // still degrades to the baseline rather than panicking.
        assert_eq!(level_for(-50), 1);
    }
}
