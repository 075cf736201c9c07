//! Moon orbit counting and phase classification.
//!
//! Phases come from the moon's age: days since a known new moon, wrapped by
//! the synodic month. Orbit counts use the sidereal month instead, since they
//! measure full trips around Earth rather than Sun-relative phase.

use std::f64::consts::TAU;
use std::fmt;

use chrono::{DateTime, TimeZone};

use crate::types::{
    BirthInstant, SIDEREAL_MONTH_DAYS, SYNODIC_MONTH_DAYS, days_between, reference_new_moon,
};

/// The eight named phases of the lunar cycle, in cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// English display name.
    pub fn label(&self) -> &'static str {
        match self {
            MoonPhase::New => "New",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Moon emoji for the phase.
    pub fn emoji(&self) -> &'static str {
        match self {
            MoonPhase::New => "\u{1F311}",
            MoonPhase::WaxingCrescent => "\u{1F312}",
            MoonPhase::FirstQuarter => "\u{1F313}",
            MoonPhase::WaxingGibbous => "\u{1F314}",
            MoonPhase::Full => "\u{1F315}",
            MoonPhase::WaningGibbous => "\u{1F316}",
            MoonPhase::LastQuarter => "\u{1F317}",
            MoonPhase::WaningCrescent => "\u{1F318}",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bound (exclusive, in days of moon age) of each phase bucket.
///
/// Ages at or past the last bound wrap back to `New`.
pub const MOON_PHASE_TABLE: [(f64, MoonPhase); 8] = [
    (1.84566, MoonPhase::New),
    (5.53699, MoonPhase::WaxingCrescent),
    (9.22831, MoonPhase::FirstQuarter),
    (12.91963, MoonPhase::WaxingGibbous),
    (16.61096, MoonPhase::Full),
    (20.30228, MoonPhase::WaningGibbous),
    (23.99361, MoonPhase::LastQuarter),
    (27.68493, MoonPhase::WaningCrescent),
];

/// Lunar orbits completed between `birth` and `now`, fractional.
pub fn moon_orbits_since<Tz: TimeZone>(birth: &BirthInstant, now: &DateTime<Tz>) -> f64 {
    days_between(&birth.instant(), now) / SIDEREAL_MONTH_DAYS
}

/// Days since the most recent new moon, in `[0, SYNODIC_MONTH_DAYS)`.
pub fn moon_age<Tz: TimeZone>(now: &DateTime<Tz>) -> f64 {
    let age = days_between(&reference_new_moon(), now).rem_euclid(SYNODIC_MONTH_DAYS);
    // rem_euclid can round up to the divisor for tiny negative inputs
    if age >= SYNODIC_MONTH_DAYS { 0.0 } else { age }
}

/// Classify a moon age (days) into one of the eight phases.
pub fn phase_for_age(age_days: f64) -> MoonPhase {
    MOON_PHASE_TABLE
        .iter()
        .find(|(upper, _)| age_days < *upper)
        .map_or(MoonPhase::New, |(_, phase)| *phase)
}

/// Current moon phase at `now`.
pub fn moon_phase<Tz: TimeZone>(now: &DateTime<Tz>) -> MoonPhase {
    phase_for_age(moon_age(now))
}

/// Fraction of the lunar disc that is lit, in `[0, 1]`.
pub fn illuminated_fraction(age_days: f64) -> f64 {
    (1.0 - (TAU * age_days / SYNODIC_MONTH_DAYS).cos()) / 2.0
}
