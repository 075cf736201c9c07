//! Test utilities for odometer tests.
//!
//! Provides fixtures for building dates and instants without clock access,
//! and assertions for the snapshot invariants.

/// Fixtures for creating test dates and instants.
pub mod fixtures {
    use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

    use crate::types::BirthInstant;

    /// A calendar date. Panics on an invalid date.
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
    }

    /// A birth instant (08:00 UTC on the given date).
    pub fn birth(year: i32, month: u32, day: u32) -> BirthInstant {
        BirthInstant::from_date(date(year, month, day))
    }

    /// A UTC instant.
    pub fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("valid fixture instant")
    }

    /// A local wall-clock instant at a whole-hour UTC offset.
    ///
    /// `offset_hours` is signed: -3 is UTC-3.
    pub fn local(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
        offset_hours: i32,
    ) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_hours * 3600)
            .expect("valid fixture offset")
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .single()
            .expect("valid fixture instant")
    }
}

/// Assertions for verifying snapshot invariants.
pub mod assertions {
    use crate::astro::solar_distance_bounds;
    use crate::snapshot::OrbitalSnapshot;
    use crate::types::{MILESTONE_STEP_KM, ORBITAL_SPEED_KM_PER_S, SECONDS_PER_DAY};

    /// Assert every field of a snapshot sits inside its documented range.
    ///
    /// # Panics
    /// Panics naming the first field out of range.
    pub fn assert_snapshot_in_range(snapshot: &OrbitalSnapshot) {
        assert!(snapshot.total_distance_km >= 0.0, "negative total: {snapshot:?}");
        assert!(snapshot.today_distance_km >= 0.0, "negative today: {snapshot:?}");
        assert!(
            snapshot.today_distance_km < SECONDS_PER_DAY * ORBITAL_SPEED_KM_PER_S,
            "today exceeds one day of travel: {snapshot:?}"
        );
        assert!(snapshot.remaining_to_goal_km >= 0.0, "negative remaining: {snapshot:?}");
        assert!(snapshot.goal_distance_km > 0.0, "non-positive goal: {snapshot:?}");
        assert_eq!(
            snapshot.goal_distance_km % MILESTONE_STEP_KM,
            0.0,
            "goal is not a whole milestone: {snapshot:?}"
        );
        assert!(
            snapshot.estimated_goal_date >= snapshot.evaluated_at,
            "goal date precedes evaluation: {snapshot:?}"
        );

        let (closest, farthest) = solar_distance_bounds();
        assert!(
            (closest..=farthest).contains(&snapshot.earth_sun_distance_km),
            "sun distance out of band: {snapshot:?}"
        );
        assert!(
            (0.0..=1.0).contains(&snapshot.moon_illumination),
            "illumination out of range: {snapshot:?}"
        );
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_local_fixture_offset() {
        let t = fixtures::local(2024, 1, 1, 21, 0, 0, -3);
        assert_eq!(t.hour(), 21);
        assert_eq!(t.with_timezone(&chrono::Utc).hour(), 0);
    }

    #[test]
    fn test_birth_fixture_is_eight_utc() {
        assert_eq!(fixtures::birth(1967, 6, 18).instant(), fixtures::utc(1967, 6, 18, 8, 0, 0));
    }
}
