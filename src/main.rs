use bevy::prelude::*;

mod actions;
mod config;
mod environment;
mod forest;
mod input;
mod setup;
mod textures;

use actions::ActionState;
use config::SceneConfig;
use environment::EnvironmentPlugin;
use forest::ForestPlugin;
use input::{
    camera_mode_toggle_system, fly_camera_controller, input_mapping_system,
    orbit_camera_controller, CameraMode,
};

fn main() {
    // `seascape`, `forest`, or a path to a `.ron` scene file.
    let arg = std::env::args().nth(1);
    let config = match SceneConfig::from_arg(arg.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("seascape: {e}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: format!("Seascape ({})", config.label()),
                ..default()
            }),
            ..default()
        }))
        // plugins below read the config while building
        .insert_resource(config)
        .add_plugins(EnvironmentPlugin) // ocean, sky, sun
        .add_plugins(ForestPlugin)      // ground + trees (forest scenes only)
        .init_resource::<ActionState>()
        .init_resource::<CameraMode>()
        .add_systems(Startup, setup::setup)
        .add_systems(
            Update,
            (
                input_mapping_system,
                camera_mode_toggle_system,
                orbit_camera_controller.run_if(resource_equals(CameraMode::Orbit)),
                fly_camera_controller.run_if(resource_equals(CameraMode::Fly)),
            )
                .chain(),
        )
        .run();
}
