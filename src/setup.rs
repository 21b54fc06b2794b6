use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;

use crate::config::SceneConfig;
use crate::input::{CameraOrbit, FlyCamera, OrbitLimits};

#[derive(Component)]
pub struct MainCamera;

pub fn setup(mut commands: Commands, config: Res<SceneConfig>) {
    let cam = &config.camera;
    let limits = OrbitLimits::from_config(cam);

    // Orbit state is the source of truth; the transform follows it.
    let mut orbit = CameraOrbit::from_eye(cam.eye(), cam.focus());
    limits.clamp(&mut orbit);
    let transform = Transform::from_translation(orbit.eye()).looking_at(orbit.focus, Vec3::Y);
    let (yaw, pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: cam.fov_deg.to_radians(),
            near: cam.near,
            far: cam.far,
            ..default()
        }),
        Tonemapping::AcesFitted,
        transform,
        MainCamera,
        orbit,
        FlyCamera { speed: cam.fly_speed, yaw, pitch },
    ));
    commands.insert_resource(limits);

    info!("Scene '{}': camera at {:?}", config.label(), orbit.eye());
}
