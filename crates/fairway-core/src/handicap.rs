//! Course and playing handicap computation

#![allow(clippy::cast_possible_truncation)] // rounded f64 handicaps fit in i32

use serde::Serialize;

/// Highest course handicap an entry can play off
const MAX_COURSE_HANDICAP: i32 = 18;

/// Derived handicap numbers for one entry on one course
///
/// Recomputed on demand; never persisted independently of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandicapCalculation {
    pub handicap_index: f64,
    pub course_handicap: i32,
    pub playing_handicap: i32,
}

/// Compute course and playing handicap from rating inputs.
///
/// `course_handicap = round(index * slope / 113 + (rating - par))`, capped at
/// 18 but not floored: negative (plus) handicaps are valid and preserved.
/// `playing_handicap` applies the net allowance percentage to the capped
/// course handicap. Rounding is standard arithmetic rounding (half away from
/// zero), applied once per formula step, not on intermediate sub-expressions.
///
/// Inputs are assumed numeric and pre-validated by the caller; pure, no side
/// effects.
#[must_use]
pub fn compute_handicap(
    handicap_index: f64,
    slope: u32,
    rating: f64,
    par: u32,
    net_allowance_percent: f64,
) -> HandicapCalculation {
    let raw = handicap_index * (f64::from(slope) / 113.0) + (rating - f64::from(par));
    let course_handicap = (raw.round() as i32).min(MAX_COURSE_HANDICAP);
    let playing_handicap =
        (f64::from(course_handicap) * net_allowance_percent / 100.0).round() as i32;

    HandicapCalculation {
        handicap_index,
        course_handicap,
        playing_handicap,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_course_handicap_capped_at_eighteen() {
        // 20 * (130/113) + (72 - 70) = 25.01, rounds to 25, capped to 18
        let calc = compute_handicap(20.0, 130, 72.0, 70, 100.0);
        assert_eq!(calc.course_handicap, 18);
        assert_eq!(calc.playing_handicap, 18);
    }

    #[test]
    fn test_uncapped_mid_range_handicap() {
        // 10 * (113/113) + (70 - 72) = 8.0
        let calc = compute_handicap(10.0, 113, 70.0, 72, 100.0);
        assert_eq!(calc.course_handicap, 8);
    }

    #[test]
    fn test_negative_course_handicap_preserved() {
        // +3.2 index on a gentle course: -3.2 * 1 + (-1) = -4.2, rounds to -4
        let calc = compute_handicap(-3.2, 113, 71.0, 72, 100.0);
        assert_eq!(calc.course_handicap, -4);
        assert_eq!(calc.playing_handicap, -4);
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 4.5 * (113/113) + 0 = 4.5, rounds up to 5 (not banker's 4)
        let calc = compute_handicap(4.5, 113, 72.0, 72, 100.0);
        assert_eq!(calc.course_handicap, 5);

        // -4.5 rounds away from zero to -5
        let negative = compute_handicap(-4.5, 113, 72.0, 72, 100.0);
        assert_eq!(negative.course_handicap, -5);
    }

    #[test]
    fn test_allowance_applied_to_capped_course_handicap() {
        // Course handicap 15, 85% allowance: 12.75 rounds to 13
        let calc = compute_handicap(15.0, 113, 72.0, 72, 85.0);
        assert_eq!(calc.course_handicap, 15);
        assert_eq!(calc.playing_handicap, 13);
    }

    #[test]
    fn test_allowance_rounds_once_at_the_end() {
        // Course handicap rounds to 11 first, then 50% of 11 = 5.5 rounds to 6.
        // Rounding the raw 10.6 * 0.5 = 5.3 instead would give 5.
        let calc = compute_handicap(10.6, 113, 72.0, 72, 50.0);
        assert_eq!(calc.course_handicap, 11);
        assert_eq!(calc.playing_handicap, 6);
    }
}
