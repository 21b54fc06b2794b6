// src/environment/water.rs

use bevy::math::Affine2;
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::config::{color_from_hex, SceneConfig};
use crate::forest::graph::scale_uvs;
use crate::textures::load_repeating;

/// Marker for the ocean plane.
#[derive(Component)]
pub struct Ocean;

/// Ocean material handle, for the per-frame update.
#[derive(Resource)]
pub struct OceanMaterial(pub Handle<StandardMaterial>);

/// Advances by a fixed step every rendered frame, not by wall time.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct WaterClock(pub f32);

/// Spawn a flat ocean across the whole view, with a tiled normal map.
pub fn spawn_ocean(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    assets: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let ocean = &config.ocean;

    let mut water_mesh = Mesh::from(Rectangle::from_length(ocean.size));
    scale_uvs(&mut water_mesh, Vec2::splat(ocean.normal_repeat));
    // The normal map needs tangents; without them it is simply ignored.
    let water_mesh = match water_mesh.with_generated_tangents() {
        Ok(mesh) => mesh,
        Err(e) => {
            warn!("ocean: could not generate tangents ({e}), normal map disabled");
            Mesh::from(Rectangle::from_length(ocean.size))
        }
    };
    let mesh_h = meshes.add(water_mesh);

    let mat_h = materials.add(StandardMaterial {
        base_color: color_from_hex(ocean.water_color),
        normal_map_texture: Some(load_repeating(&assets, &ocean.normals_texture, false)),
        perceptual_roughness: 0.08,
        reflectance: 0.6,
        ..Default::default()
    });

    commands.spawn((
        Mesh3d(mesh_h),
        MeshMaterial3d(mat_h.clone()),
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        Name::new("Ocean"),
        Ocean,
    ));
    commands.insert_resource(OceanMaterial(mat_h));

    info!("ocean: {}x{} plane", ocean.size, ocean.size);
}

/// UV offset of the normal map for a given clock value.
#[inline]
pub fn ripple_offset(clock: f32, drift: f32) -> Vec2 {
    Vec2::new(clock * drift, clock * drift * 0.5)
}

pub fn advance_water_clock(mut clock: ResMut<WaterClock>, config: Res<SceneConfig>) {
    clock.0 += config.ocean.time_step;
}

pub fn animate_ocean(
    clock: Res<WaterClock>,
    ocean: Option<Res<OceanMaterial>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let Some(ocean) = ocean else { return };
    let Some(mat) = materials.get_mut(&ocean.0) else { return };
    mat.uv_transform = Affine2::from_translation(ripple_offset(clock.0, config.ocean.drift));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_one_step_per_frame() {
        let mut app = App::new();
        app.init_resource::<WaterClock>()
            .insert_resource(SceneConfig::seascape())
            .add_systems(Update, advance_water_clock);

        for _ in 0..60 {
            app.update();
        }
        let clock = app.world().resource::<WaterClock>();
        assert!((clock.0 - 0.30).abs() < 1e-4, "clock {}", clock.0);
    }

    #[test]
    fn ripple_starts_at_rest() {
        assert_eq!(ripple_offset(0.0, 0.05), Vec2::ZERO);
        assert_eq!(ripple_offset(2.0, 0.5), Vec2::new(1.0, 0.5));
    }
}
