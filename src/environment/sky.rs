// src/environment/sky.rs
//! Sky dome + sun. The sun direction is stored so lights and anything else
//! that cares can read one value.

use bevy::prelude::*;
use bevy::render::render_resource::Face;

use crate::config::{color_from_hex, SceneConfig};

#[derive(Component)]
pub struct SkyDome;

#[derive(Component)]
pub struct Sun;

/// Unit vector from the origin towards the sun.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SunDirection(pub Vec3);

/// Spherical -> cartesian with Y up: polar angle `phi = 90° - elevation`
/// measured from +Y, azimuth `theta` measured from +Z towards +X.
pub fn sun_direction(elevation_deg: f32, azimuth_deg: f32) -> Vec3 {
    let phi = (90.0 - elevation_deg).to_radians();
    let theta = azimuth_deg.to_radians();
    Vec3::new(phi.sin() * theta.sin(), phi.cos(), phi.sin() * theta.cos())
}

pub fn spawn_sky(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<SceneConfig>,
) {
    let mat = materials.add(StandardMaterial {
        base_color: color_from_hex(config.sky.color),
        unlit: true,
        // Seen from inside.
        cull_mode: Some(Face::Front),
        fog_enabled: false,
        ..default()
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(1.0).mesh().uv(48, 24))),
        MeshMaterial3d(mat),
        Transform::from_scale(Vec3::splat(config.sky.scale)),
        Name::new("Sky"),
        SkyDome,
    ));
    commands.insert_resource(ClearColor(color_from_hex(config.sky.color)));
}

pub fn spawn_sun(mut commands: Commands, config: Res<SceneConfig>) {
    let dir = sun_direction(config.sky.elevation, config.sky.azimuth).normalize_or_zero();

    commands.spawn((
        DirectionalLight {
            illuminance: config.light.sun_illuminance,
            shadows_enabled: config.light.shadows,
            ..default()
        },
        // Directional lights shine along their local -Z.
        Transform::from_translation(dir).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Sun"),
        Sun,
    ));
    commands.insert_resource(AmbientLight {
        brightness: config.light.ambient_brightness,
        ..default()
    });
    commands.insert_resource(SunDirection(dir));

    info!(
        "sky: sun at elevation {}°, azimuth {}° -> {:?}",
        config.sky.elevation, config.sky.azimuth, dir
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overhead_sun_points_up() {
        assert!(sun_direction(90.0, 0.0).abs_diff_eq(Vec3::Y, 1e-6));
        assert!(sun_direction(90.0, 123.0).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn low_southern_sun_points_along_negative_z() {
        let d = sun_direction(2.0, 180.0);
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!(d.x.abs() < 1e-5);
        assert!(d.y > 0.0 && d.y < 0.05);
        assert!(d.z < -0.99);
    }

    #[test]
    fn azimuth_ninety_points_along_positive_x() {
        let d = sun_direction(0.0, 90.0);
        assert!(d.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn sun_light_faces_the_origin() {
        let mut app = App::new();
        app.insert_resource(SceneConfig::seascape())
            .add_systems(Startup, spawn_sun);
        app.update();

        let dir = app.world().resource::<SunDirection>().0;
        let mut q = app.world_mut().query_filtered::<&Transform, With<Sun>>();
        let tf = q.single(app.world()).unwrap();
        // Light travels from the sun towards the origin.
        assert!(tf.forward().as_vec3().abs_diff_eq(-dir, 1e-4));
    }
}
