//! Astronomical arithmetic behind the odometer.
//!
//! Every function here is pure: identical inputs give bit-identical outputs,
//! and "now" is always a parameter, never read from a clock.
//!
//! - [`orbit`]: distance traveled since birth and today, billion-km milestones.
//! - [`solar`]: cosine approximation of the Earth-Sun distance.
//! - [`lunar`]: lunar orbit count, moon age, phase and illumination.
//! - [`zodiac`]: sign lookup by birth month and day.

pub mod lunar;
pub mod orbit;
pub mod solar;
pub mod zodiac;

#[cfg(test)]
mod proptest_astro;

pub use lunar::{
    MOON_PHASE_TABLE, MoonPhase, illuminated_fraction, moon_age, moon_orbits_since, moon_phase,
    phase_for_age,
};
pub use orbit::{
    distance_traveled_today, estimated_milestone_date, next_billion_milestone,
    orbital_distance_traveled, remaining_to_milestone,
};
pub use solar::{current_solar_distance, solar_distance_bounds};
pub use zodiac::{ZODIAC_TABLE, ZodiacRule, ZodiacSign, zodiac_sign};
