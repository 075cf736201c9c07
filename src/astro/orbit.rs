//! Distance Earth carries a person along its orbit.

use chrono::{DateTime, TimeDelta, TimeZone, Timelike, Utc};

use crate::types::{BirthInstant, MILESTONE_STEP_KM, ORBITAL_SPEED_KM_PER_S, seconds_between};

/// Kilometres traveled around the Sun between `birth` and `now`.
///
/// Plain arithmetic: negative when `now` precedes `birth`. Clamping is the
/// orchestrator's job.
pub fn orbital_distance_traveled<Tz: TimeZone>(birth: &BirthInstant, now: &DateTime<Tz>) -> f64 {
    seconds_between(&birth.instant(), now) * ORBITAL_SPEED_KM_PER_S
}

/// Kilometres traveled since local midnight of `now`.
///
/// "Local" is whatever zone `now` carries. Always below one day's travel.
pub fn distance_traveled_today<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    let time = now.time();
    // Leap-second nanos can exceed one second; fold them into the last second.
    let nanos = time.nanosecond().min(999_999_999);
    let seconds = time.num_seconds_from_midnight() as f64 + nanos as f64 * 1e-9;
    seconds * ORBITAL_SPEED_KM_PER_S
}

/// Smallest multiple of one billion kilometres that is at least `total_km`.
///
/// Ceiling semantics: an exact multiple maps to itself. The first milestone is
/// one billion, so zero (or a negative pass-through) maps to one step.
pub fn next_billion_milestone(total_km: f64) -> f64 {
    let steps = (total_km / MILESTONE_STEP_KM).ceil().max(1.0);
    steps * MILESTONE_STEP_KM
}

/// Kilometres still to go before `milestone_km`, never negative.
pub fn remaining_to_milestone(total_km: f64, milestone_km: f64) -> f64 {
    (milestone_km - total_km).max(0.0)
}

/// Instant at which the remaining distance is covered at orbital speed.
///
/// Returns `now` unchanged when nothing remains.
pub fn estimated_milestone_date<Tz: TimeZone>(
    now: &DateTime<Tz>,
    remaining_km: f64,
) -> DateTime<Utc> {
    let now = now.with_timezone(&Utc);
    if remaining_km <= 0.0 || !remaining_km.is_finite() {
        return now;
    }

    let millis = (remaining_km / ORBITAL_SPEED_KM_PER_S * 1000.0).round() as i64;
    now.checked_add_signed(TimeDelta::milliseconds(millis)).unwrap_or(now)
}
