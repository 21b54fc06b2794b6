// src/forest/systems.rs
use bevy::prelude::*;

use crate::config::{color_from_hex, SceneConfig};
use crate::textures::load_repeating;

use super::graph::{EntityGraph, ForestPalette};
use super::populator::ScenePopulator;
use super::random::SceneRng;

pub fn forest_enabled(config: Res<SceneConfig>) -> bool {
    config.forest.is_some()
}

/// Startup: one material per forest part, textures tiled by UV.
pub fn load_forest_palette(
    mut commands: Commands,
    assets: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let Some(forest) = config.forest.as_ref() else { return };

    let ground = materials.add(StandardMaterial {
        base_color_texture: Some(load_repeating(&assets, &forest.ground_texture, true)),
        perceptual_roughness: 0.95,
        ..default()
    });
    let bark = materials.add(StandardMaterial {
        base_color: color_from_hex(forest.bark_color),
        base_color_texture: Some(load_repeating(&assets, &forest.bark_texture, true)),
        perceptual_roughness: 0.9,
        ..default()
    });
    let foliage = materials.add(StandardMaterial {
        base_color: color_from_hex(forest.foliage_color),
        base_color_texture: Some(load_repeating(&assets, &forest.foliage_texture, true)),
        perceptual_roughness: 0.8,
        ..default()
    });

    commands.insert_resource(ForestPalette { ground, bark, foliage });
    debug!(
        "forest: palette from '{}', '{}', '{}'",
        forest.ground_texture, forest.bark_texture, forest.foliage_texture
    );
}

/// Startup: generate ground + trees once and spawn them.
pub fn populate_forest(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    palette: Res<ForestPalette>,
    mut rng: ResMut<SceneRng>,
    config: Res<SceneConfig>,
) {
    let inclusive = config.forest.as_ref().is_none_or(|f| f.inclusive_counts);

    let mut graph = EntityGraph {
        commands: &mut commands,
        meshes: &mut meshes,
        palette: &palette,
    };
    ScenePopulator::new(rng.0.as_mut())
        .with_inclusive_counts(inclusive)
        .populate(&mut graph);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::core::ForestPart;
    use crate::forest::random::testing::FixedUniform;

    fn headless_app(config: SceneConfig) -> App {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<ForestPalette>()
            .insert_resource(SceneRng::new(FixedUniform(0.0)))
            .insert_resource(config)
            .add_systems(Startup, populate_forest.run_if(forest_enabled));
        app
    }

    fn count(app: &mut App, part: ForestPart) -> usize {
        let mut q = app.world_mut().query::<&ForestPart>();
        q.iter(app.world()).filter(|p| **p == part).count()
    }

    #[test]
    fn spawns_tree_hierarchy_as_entities() {
        let mut app = headless_app(SceneConfig::forest());
        app.update();

        assert_eq!(count(&mut app, ForestPart::Ground), 1);
        assert_eq!(count(&mut app, ForestPart::Trunk), 11);
        assert_eq!(count(&mut app, ForestPart::LeafCluster), 11);
        assert_eq!(count(&mut app, ForestPart::LeafBlob), 33);

        let mut trunks = app.world_mut().query::<(&ForestPart, &Children, &Transform)>();
        for (part, children, tf) in trunks.iter(app.world()) {
            match part {
                ForestPart::Trunk => {
                    assert_eq!(children.len(), 1);
                    assert_eq!(tf.translation, Vec3::new(-500.0, 14.0, 500.0));
                }
                ForestPart::LeafCluster => assert_eq!(children.len(), 3),
                other => panic!("{other:?} should have no children"),
            }
        }
    }

    #[test]
    fn exclusive_counts_come_from_config() {
        let mut config = SceneConfig::forest();
        if let Some(forest) = config.forest.as_mut() {
            forest.inclusive_counts = false;
        }
        let mut app = headless_app(config);
        app.update();

        assert_eq!(count(&mut app, ForestPart::Trunk), 10);
        assert_eq!(count(&mut app, ForestPart::LeafBlob), 20);
    }

    #[test]
    fn seascape_spawns_no_forest() {
        let mut app = headless_app(SceneConfig::seascape());
        app.update();
        assert_eq!(count(&mut app, ForestPart::Trunk), 0);
        assert_eq!(count(&mut app, ForestPart::Ground), 0);
    }
}
