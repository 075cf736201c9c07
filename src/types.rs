//! Core constants and value types for the orbital odometer.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

// Physical constants (kilometres, seconds, days)

/// Earth's mean orbital speed around the Sun in km/h.
///
/// Treated as constant; eccentricity effects on speed are ignored.
pub const ORBITAL_SPEED_KM_PER_H: f64 = 107_226.0;

/// Earth's mean orbital speed around the Sun in km/s.
pub const ORBITAL_SPEED_KM_PER_S: f64 = ORBITAL_SPEED_KM_PER_H / 3600.0;

/// Mean Earth-Sun distance (1 AU) in kilometres.
pub const AVERAGE_SUN_DISTANCE_KM: f64 = 149_597_870.7;

/// Eccentricity of Earth's orbit used by the first-order distance model.
pub const EARTH_ECCENTRICITY: f64 = 0.0167;

/// Days per Julian year, used as the period of the distance model.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Sidereal month: one lunar orbit relative to the fixed stars, in days.
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321661;

/// Synodic month: new moon to new moon, in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Distance between consecutive milestones in kilometres.
pub const MILESTONE_STEP_KM: f64 = 1_000_000_000.0;

/// Earliest birth year the odometer accepts.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Fixed UTC hour attached to every birth date.
pub const BIRTH_HOUR_UTC: u32 = 8;

/// Known new moon: 2000-01-06 18:14 UTC, as Unix seconds.
pub const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;

/// The reference new moon as an instant.
pub fn reference_new_moon() -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_NEW_MOON_UNIX, 0).unwrap_or_default()
}

/// A birth date pinned to 08:00 UTC.
///
/// All "since birth" quantities are measured from this instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthInstant(DateTime<Utc>);

impl BirthInstant {
    /// Attach the fixed 08:00 UTC time-of-day to a calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        let time = NaiveTime::from_hms_opt(BIRTH_HOUR_UTC, 0, 0).unwrap_or_default();
        Self(Utc.from_utc_datetime(&date.and_time(time)))
    }

    /// The absolute instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    /// The calendar date this instant was built from.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }
}

/// Seconds from `earlier` to `later` at millisecond resolution.
///
/// Negative when `later` precedes `earlier`.
pub fn seconds_between<A: TimeZone, B: TimeZone>(
    earlier: &DateTime<A>,
    later: &DateTime<B>,
) -> f64 {
    let delta = later.with_timezone(&Utc) - earlier.with_timezone(&Utc);
    delta.num_milliseconds() as f64 / 1000.0
}

/// Days from `earlier` to `later`, fractional.
pub fn days_between<A: TimeZone, B: TimeZone>(earlier: &DateTime<A>, later: &DateTime<B>) -> f64 {
    seconds_between(earlier, later) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_reference_new_moon() {
        let moon = reference_new_moon();
        assert_eq!(moon.year(), 2000);
        assert_eq!(moon.month(), 1);
        assert_eq!(moon.day(), 6);
        assert_eq!(moon.hour(), 18);
        assert_eq!(moon.minute(), 14);
    }

    #[test]
    fn test_birth_instant_is_eight_utc() {
        let date = NaiveDate::from_ymd_opt(1967, 6, 18).unwrap();
        let birth = BirthInstant::from_date(date);
        assert_eq!(birth.instant().hour(), 8);
        assert_eq!(birth.instant().minute(), 0);
        assert_eq!(birth.date(), date);
    }

    #[test]
    fn test_seconds_between_one_day() {
        let a = Utc.with_ymd_and_hms(2020, 2, 28, 8, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2020, 2, 29, 8, 0, 0).unwrap();
        assert_eq!(seconds_between(&a, &b), SECONDS_PER_DAY);
        assert_eq!(seconds_between(&b, &a), -SECONDS_PER_DAY);
        assert_eq!(days_between(&a, &b), 1.0);
    }

    #[test]
    fn test_seconds_between_ignores_offsets() {
        // Same absolute instant expressed in two zones
        let utc = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let sao_paulo = utc.with_timezone(&chrono::FixedOffset::west_opt(3 * 3600).unwrap());
        assert_eq!(seconds_between(&utc, &sao_paulo), 0.0);
    }

    #[test]
    fn test_orbital_speed_conversion() {
        // 107226 km/h over one hour
        assert!((ORBITAL_SPEED_KM_PER_S * 3600.0 - ORBITAL_SPEED_KM_PER_H).abs() < 1e-9);
        // Roughly 30 km/s
        assert!((ORBITAL_SPEED_KM_PER_S - 29.785).abs() < 1e-9);
    }
}
