//! Property-based tests for the astronomical arithmetic using proptest.
//!
//! These tests verify that the odometer functions keep their documented
//! properties across the whole supported date range.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use proptest::prelude::*;

use super::lunar::{MOON_PHASE_TABLE, MoonPhase, moon_age, moon_phase};
use super::orbit::{
    estimated_milestone_date, next_billion_milestone, orbital_distance_traveled,
    remaining_to_milestone,
};
use super::solar::{current_solar_distance, solar_distance_bounds};
use super::zodiac::{ZODIAC_TABLE, zodiac_sign};
use crate::types::{BirthInstant, MILESTONE_STEP_KM, SECONDS_PER_DAY, SYNODIC_MONTH_DAYS};

/// 1900-01-01T00:00:00Z
const MIN_UNIX: i64 = -2_208_988_800;
/// 2100-01-01T00:00:00Z
const MAX_UNIX: i64 = 4_102_444_800;

fn instant(unix: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix, 0).unwrap()
}

fn phase_index(phase: MoonPhase) -> usize {
    MoonPhase::ALL.iter().position(|p| *p == phase).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Distance since birth is non-negative and never shrinks as time moves on.
    #[test]
    fn prop_distance_monotonic(
        birth_days in 0i64..60_000,
        offset_secs in 0i64..(120 * 365 * 86_400),
        step_secs in 0i64..(10 * 86_400),
    ) {
        let birth_date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + TimeDelta::days(birth_days);
        let birth = BirthInstant::from_date(birth_date);
        let now = birth.instant() + TimeDelta::seconds(offset_secs);
        let later = now + TimeDelta::seconds(step_secs);

        let d1 = orbital_distance_traveled(&birth, &now);
        let d2 = orbital_distance_traveled(&birth, &later);
        prop_assert!(d1 >= 0.0, "negative distance {}", d1);
        prop_assert!(d2 >= d1, "distance decreased: {} -> {}", d1, d2);
    }

    /// Once on a milestone, the milestone function is a fixed point.
    #[test]
    fn prop_milestone_idempotent(total in 0.0f64..1e12) {
        let m = next_billion_milestone(total);
        prop_assert_eq!(next_billion_milestone(m), m);
        prop_assert!(m >= total);
        prop_assert!(m - total <= MILESTONE_STEP_KM);
        prop_assert_eq!(m % MILESTONE_STEP_KM, 0.0);
    }

    /// Remaining plus traveled gives back the milestone exactly (whole km).
    #[test]
    fn prop_remaining_round_trip(total_km in 0u64..1_000_000_000_000u64) {
        let total = total_km as f64;
        let milestone = next_billion_milestone(total);
        let remaining = remaining_to_milestone(total, milestone);
        prop_assert_eq!(remaining + total, milestone);
    }

    /// Nothing remaining means the milestone date is now.
    #[test]
    fn prop_zero_remaining_is_now(unix in MIN_UNIX..MAX_UNIX) {
        let now = instant(unix);
        prop_assert_eq!(estimated_milestone_date(&now, 0.0), now);
    }

    /// The estimated date never precedes now.
    #[test]
    fn prop_estimated_date_not_before_now(unix in MIN_UNIX..MAX_UNIX, remaining in 0.0f64..1e9) {
        let now = instant(unix);
        prop_assert!(estimated_milestone_date(&now, remaining) >= now);
    }

    /// The Earth-Sun distance stays inside [a(1-e), a(1+e)].
    #[test]
    fn prop_solar_distance_in_band(unix in MIN_UNIX..MAX_UNIX) {
        let (closest, farthest) = solar_distance_bounds();
        let d = current_solar_distance(&instant(unix));
        prop_assert!(d >= closest && d <= farthest, "distance {} out of band", d);
    }

    /// Moon age is always inside one synodic month.
    #[test]
    fn prop_moon_age_in_cycle(unix in MIN_UNIX..MAX_UNIX) {
        let age = moon_age(&instant(unix));
        prop_assert!((0.0..SYNODIC_MONTH_DAYS).contains(&age), "age {}", age);
    }

    /// Phase repeats after one synodic month, allowing one bucket of slip at a seam.
    #[test]
    fn prop_moon_phase_periodic(unix in MIN_UNIX..MAX_UNIX) {
        let now = instant(unix);
        let period_ms = (SYNODIC_MONTH_DAYS * SECONDS_PER_DAY * 1000.0).round() as i64;
        let next = now + TimeDelta::milliseconds(period_ms);

        let a = phase_index(moon_phase(&now));
        let b = phase_index(moon_phase(&next));
        let n = MOON_PHASE_TABLE.len();
        let distance = (a + n - b) % n;
        prop_assert!(
            distance <= 1 || distance == n - 1,
            "{:?} vs {:?}",
            moon_phase(&now),
            moon_phase(&next)
        );
    }

    /// Every valid calendar date gets the sign whose rule contains it.
    #[test]
    fn prop_zodiac_total(days in 0i64..73_000) {
        let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + TimeDelta::days(days);
        let sign = zodiac_sign(date);
        let rule = ZODIAC_TABLE.iter().find(|r| r.sign == sign).unwrap();
        prop_assert!(rule.contains(date.month(), date.day()), "{} -> {}", date, sign);
    }
}
