//! Periodic refresh of the odometer snapshot.
//!
//! Recomputes once on the first frame, then every refresh interval of real
//! time, and immediately whenever the birth input or the clock changes.

use bevy::prelude::*;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};

use crate::birth::{BirthDateError, parse_birth_date};
use crate::settings::OdometerSettings;
use crate::snapshot::{OrbitalSnapshot, recompute};

/// Plugin providing the periodic snapshot refresh.
pub struct RefreshPlugin;

impl Plugin for RefreshPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OdometerSettings>()
            .init_resource::<EvaluationClock>()
            .init_resource::<BirthInput>()
            .init_resource::<RefreshTimer>()
            .init_resource::<CurrentSnapshot>()
            .add_systems(Update, refresh_snapshot);
    }
}

/// Where "now" comes from on each refresh.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub enum EvaluationClock {
    /// The system wall clock in the local zone.
    #[default]
    System,
    /// A frozen instant, for tests and screenshots.
    Fixed(DateTime<FixedOffset>),
}

impl EvaluationClock {
    /// Sample the current instant.
    pub fn now(&self) -> DateTime<FixedOffset> {
        match self {
            EvaluationClock::System => Local::now().fixed_offset(),
            EvaluationClock::Fixed(instant) => *instant,
        }
    }
}

/// Raw form input. Replaced as a whole when the user edits the form.
#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct BirthInput {
    /// Display name, passed through untouched.
    pub name: String,
    /// Birth date as typed.
    pub birth_text: String,
}

impl BirthInput {
    pub fn new(name: impl Into<String>, birth_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_text: birth_text.into(),
        }
    }
}

impl FromWorld for BirthInput {
    fn from_world(world: &mut World) -> Self {
        let settings = world.get_resource::<OdometerSettings>().cloned().unwrap_or_default();
        Self::new(settings.display_name, settings.birth_date.format("%Y-%m-%d").to_string())
    }
}

/// Repeating timer driving the periodic refresh.
#[derive(Resource, Debug)]
pub struct RefreshTimer(pub Timer);

impl RefreshTimer {
    /// Shortest accepted interval, in seconds.
    pub const MIN_INTERVAL_SECS: f32 = 0.05;

    pub fn new(interval_secs: f32) -> Self {
        Self(Timer::from_seconds(
            interval_secs.max(Self::MIN_INTERVAL_SECS),
            TimerMode::Repeating,
        ))
    }
}

impl FromWorld for RefreshTimer {
    fn from_world(world: &mut World) -> Self {
        let secs = world
            .get_resource::<OdometerSettings>()
            .map_or(1.0, |s| s.refresh_interval_secs);
        Self::new(secs)
    }
}

/// The snapshot on display and the state of the last refresh.
#[derive(Resource, Debug, Default)]
pub struct CurrentSnapshot {
    /// Last successful snapshot. Survives later failed refreshes.
    pub snapshot: Option<OrbitalSnapshot>,
    /// Birth date `snapshot` was computed for.
    pub birth_date: Option<NaiveDate>,
    /// Error from the most recent refresh, if it failed.
    pub error: Option<BirthDateError>,
    /// Refreshes attempted so far, failed ones included.
    pub ticks: u64,
}

impl CurrentSnapshot {
    /// Whether the value on display is out of date because of bad input.
    pub fn is_stale(&self) -> bool {
        self.error.is_some()
    }
}

/// Recompute the snapshot when the timer fires or an input changed.
///
/// Runs on real time so the readings keep pace with the wall clock.
pub fn refresh_snapshot(
    time: Res<Time<Real>>,
    mut timer: ResMut<RefreshTimer>,
    input: Res<BirthInput>,
    clock: Res<EvaluationClock>,
    mut current: ResMut<CurrentSnapshot>,
) {
    timer.0.tick(time.delta());

    if !(timer.0.just_finished() || input.is_changed() || clock.is_changed()) {
        return;
    }

    let now = clock.now();
    current.ticks += 1;

    let result = parse_birth_date(&input.birth_text)
        .and_then(|date| recompute(date, &now).map(|snapshot| (date, snapshot)));

    match result {
        Ok((date, snapshot)) => {
            if current.error.take().is_some() || current.birth_date != Some(date) {
                info!("Odometer set to birth date {}", date);
            }
            current.snapshot = Some(snapshot);
            current.birth_date = Some(date);
        }
        Err(e) => {
            // Warn once per distinct error; the timer keeps retrying quietly
            if current.error.as_ref() != Some(&e) {
                warn!("Keeping last snapshot: {}", e);
            } else {
                debug!("Refresh skipped: {}", e);
            }
            current.error = Some(e);
        }
    }
}
