// src/forest/plugin.rs
use bevy::prelude::*;

use crate::config::SceneConfig;

use super::random::SceneRng;
use super::systems::{forest_enabled, load_forest_palette, populate_forest};

/// Palette must exist before the populator spawns anything.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ForestStartupSet {
    Palette,
    Populate,
}

pub struct ForestPlugin;

impl Plugin for ForestPlugin {
    fn build(&self, app: &mut App) {
        let seed = app
            .world()
            .get_resource::<SceneConfig>()
            .and_then(|c| c.seed)
            .unwrap_or_else(rand::random::<u64>);
        info!("forest: scene seed {seed}");

        app
            .insert_resource(SceneRng::seeded(seed))
            .configure_sets(
                Startup,
                (
                    ForestStartupSet::Palette,
                    ForestStartupSet::Populate.after(ForestStartupSet::Palette),
                ),
            )
            .add_systems(
                Startup,
                load_forest_palette
                    .run_if(forest_enabled)
                    .in_set(ForestStartupSet::Palette),
            )
            .add_systems(
                Startup,
                populate_forest
                    .run_if(forest_enabled)
                    .in_set(ForestStartupSet::Populate),
            );
    }
}
