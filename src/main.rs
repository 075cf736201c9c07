//! Orbit Odometer - how far the Earth has carried you
//!
//! A desktop page showing distance traveled around the Sun since birth,
//! refreshed every second, alongside a few lunar and solar curiosities.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use orbit_odometer::settings::OdometerSettings;
use orbit_odometer::time::RefreshPlugin;
use orbit_odometer::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orbit Odometer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Settings go in before the plugins that seed their resources from them
        .insert_resource(OdometerSettings::from_env())
        .add_plugins((RefreshPlugin, UiPlugin))
        .add_systems(Startup, spawn_camera)
        .run();
}

/// egui attaches its primary context to the first camera.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
