//! Orbit Odometer - how far the Earth has carried you
//!
//! A library crate providing the date and astronomy arithmetic behind the
//! odometer page, plus the Bevy plugins that refresh and display it.

pub mod astro;
pub mod birth;
pub mod format;
pub mod settings;
pub mod snapshot;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
