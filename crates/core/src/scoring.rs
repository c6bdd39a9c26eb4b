//! Scoring module - points, level and gravity speed
//!
//! Score only comes from cleared rows. The level is derived from the
//! cumulative score and the tick interval is derived from the level.

use std::time::Duration;

use crate::types::{
    ScoringProfile, MAX_LEVEL, POINTS_PER_LEVEL, POINTS_PER_LINE, SPEED_FLOOR_MS, SPEED_TABLE_MS,
    START_LEVEL,
};

/// Points for clearing `lines` rows in one imprint
pub fn line_clear_points(lines: usize, profile: ScoringProfile) -> u32 {
    let n = lines as u32;
    let units = match profile {
        ScoringProfile::Linear => n,
        ScoringProfile::Triangular => n * (n + 1) / 2,
    };
    POINTS_PER_LINE.saturating_mul(units)
}

/// Level for a cumulative score: one level per 100 points, capped
pub fn level_for_score(score: u32) -> u32 {
    (START_LEVEL + score / POINTS_PER_LEVEL).min(MAX_LEVEL)
}

/// Tick interval for a level in milliseconds
pub fn tick_interval_ms(level: u32) -> u64 {
    level
        .checked_sub(1)
        .and_then(|i| SPEED_TABLE_MS.get(i as usize))
        .copied()
        .unwrap_or(SPEED_FLOOR_MS)
}

/// Tick interval for a level
pub fn tick_interval(level: u32) -> Duration {
    Duration::from_millis(tick_interval_ms(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scores() {
        let p = ScoringProfile::Linear;
        assert_eq!(line_clear_points(0, p), 0);
        assert_eq!(line_clear_points(1, p), 10);
        assert_eq!(line_clear_points(2, p), 20);
        assert_eq!(line_clear_points(3, p), 30);
        assert_eq!(line_clear_points(4, p), 40);
    }

    #[test]
    fn test_triangular_scores() {
        let p = ScoringProfile::Triangular;
        assert_eq!(line_clear_points(0, p), 0);
        assert_eq!(line_clear_points(1, p), 10);
        assert_eq!(line_clear_points(2, p), 30);
        assert_eq!(line_clear_points(3, p), 60);
        assert_eq!(line_clear_points(4, p), 100);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_score(0), 1);
        assert_eq!(level_for_score(99), 1);
        assert_eq!(level_for_score(100), 2);
        assert_eq!(level_for_score(250), 3);
        assert_eq!(level_for_score(500), 6);
        assert_eq!(level_for_score(10_000), 6);
    }

    #[test]
    fn test_tick_intervals() {
        assert_eq!(tick_interval_ms(1), 1000);
        assert_eq!(tick_interval_ms(2), 900);
        assert_eq!(tick_interval_ms(5), 600);
        assert_eq!(tick_interval_ms(6), 500);
        assert_eq!(tick_interval_ms(7), 500);
        assert_eq!(tick_interval_ms(0), 500);
        assert_eq!(tick_interval(3), Duration::from_millis(800));
    }

    #[test]
    fn test_intervals_never_increase_with_level() {
        let mut prev = tick_interval_ms(1);
        for level in 2..=MAX_LEVEL + 2 {
            let cur = tick_interval_ms(level);
            assert!(cur <= prev, "level {} slowed down", level);
            prev = cur;
        }
    }

    proptest::proptest! {
        #[test]
        fn prop_level_and_speed_stay_in_table(score in proptest::num::u32::ANY) {
            let level = level_for_score(score);
            proptest::prop_assert!((START_LEVEL..=MAX_LEVEL).contains(&level));
            proptest::prop_assert!(level_for_score(score.saturating_add(POINTS_PER_LEVEL)) >= level);

            let ms = tick_interval_ms(level);
            proptest::prop_assert!((SPEED_FLOOR_MS..=SPEED_TABLE_MS[0]).contains(&ms));
        }
    }
}
