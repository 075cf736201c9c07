//! Per-tick recomputation of the odometer readings.
//!
//! [`recompute`] is a pure function of the birth date and "now". It never reads
//! a previous snapshot, so calling it any number of times with the same inputs
//! yields the same value.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::astro::{
    MoonPhase, ZodiacSign, current_solar_distance, distance_traveled_today,
    estimated_milestone_date, illuminated_fraction, moon_age, moon_orbits_since,
    next_billion_milestone, orbital_distance_traveled, phase_for_age, remaining_to_milestone,
    zodiac_sign,
};
use crate::birth::{BirthDateError, validate_birth_date};
use crate::types::BirthInstant;

/// Everything the display shows for one tick, as raw numbers and instants.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitalSnapshot {
    /// When this snapshot was computed.
    pub evaluated_at: DateTime<Utc>,
    /// Kilometres traveled around the Sun since birth.
    pub total_distance_km: f64,
    /// Kilometres traveled since local midnight.
    pub today_distance_km: f64,
    /// Kilometres left to the next milestone.
    pub remaining_to_goal_km: f64,
    /// The next milestone, a whole multiple of one billion kilometres.
    pub goal_distance_km: f64,
    /// When the milestone will be reached at orbital speed.
    pub estimated_goal_date: DateTime<Utc>,
    /// Approximate Earth-Sun distance right now.
    pub earth_sun_distance_km: f64,
    /// Completed lunar orbits since birth.
    pub moon_orbit_count: u64,
    pub moon_phase: MoonPhase,
    /// Lit fraction of the lunar disc, 0 to 1.
    pub moon_illumination: f64,
    /// Sign of the birth date, independent of `now`.
    pub zodiac_sign: ZodiacSign,
}

/// Compute a fresh snapshot for `birth_date` as seen at `now`.
///
/// `now` carries the evaluator's local zone, which decides where "today"
/// starts. Fails without computing anything when the birth date is before
/// 1900 or after `now`'s calendar date.
pub fn recompute<Tz: TimeZone>(
    birth_date: NaiveDate,
    now: &DateTime<Tz>,
) -> Result<OrbitalSnapshot, BirthDateError> {
    let birth_date = validate_birth_date(birth_date, now.date_naive())?;
    let birth = BirthInstant::from_date(birth_date);

    // A birth date of today evaluated before 08:00 UTC puts `now` before
    // the birth instant; clamp rather than show negative distances.
    let total_distance_km = orbital_distance_traveled(&birth, now).max(0.0);
    let today_distance_km = distance_traveled_today(now).max(0.0);

    let goal_distance_km = next_billion_milestone(total_distance_km);
    let remaining_to_goal_km = remaining_to_milestone(total_distance_km, goal_distance_km);
    let estimated_goal_date = estimated_milestone_date(now, remaining_to_goal_km);

    let earth_sun_distance_km = current_solar_distance(now);

    let moon_orbit_count = moon_orbits_since(&birth, now).max(0.0).trunc() as u64;
    let age = moon_age(now);

    Ok(OrbitalSnapshot {
        evaluated_at: now.with_timezone(&Utc),
        total_distance_km,
        today_distance_km,
        remaining_to_goal_km,
        goal_distance_km,
        estimated_goal_date,
        earth_sun_distance_km,
        moon_orbit_count,
        moon_phase: phase_for_age(age),
        moon_illumination: illuminated_fraction(age),
        zodiac_sign: zodiac_sign(birth.date()),
    })
}
