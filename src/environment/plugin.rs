// src/environment/plugin.rs
use bevy::prelude::*;

use super::sky::{spawn_sky, spawn_sun};
use super::water::{advance_water_clock, animate_ocean, spawn_ocean, WaterClock};

pub struct EnvironmentPlugin;

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<WaterClock>()
            .add_systems(Startup, (spawn_sky, spawn_sun, spawn_ocean))
            // Clock first, then push it into the material.
            .add_systems(Update, (advance_water_clock, animate_ocean).chain());
    }
}
