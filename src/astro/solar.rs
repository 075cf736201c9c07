//! First-order Earth-Sun distance model.

use std::f64::consts::TAU;

use chrono::{DateTime, Datelike, TimeZone};

use crate::types::{AVERAGE_SUN_DISTANCE_KM, DAYS_PER_YEAR, EARTH_ECCENTRICITY};

/// Approximate Earth-Sun distance in kilometres at `now`.
///
/// `r = a * (1 - e * cos(2π * d / 365.25))`, where `d` counts full days since
/// January 1 of `now`'s calendar year. Perihelion lands at the start of the
/// year and aphelion half a year later, which is close enough for display.
pub fn current_solar_distance<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    let day_of_year = now.ordinal0() as f64;
    AVERAGE_SUN_DISTANCE_KM * (1.0 - EARTH_ECCENTRICITY * (TAU * day_of_year / DAYS_PER_YEAR).cos())
}

/// Closest and farthest distances the model can produce: `a(1-e)` and `a(1+e)`.
pub fn solar_distance_bounds() -> (f64, f64) {
    (
        AVERAGE_SUN_DISTANCE_KM * (1.0 - EARTH_ECCENTRICITY),
        AVERAGE_SUN_DISTANCE_KM * (1.0 + EARTH_ECCENTRICITY),
    )
}
