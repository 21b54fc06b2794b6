use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::input::{keyboard::KeyCode, ButtonInput};
use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::actions::{ActionState, PlayerAction};
use crate::config::{CameraConfig, SceneConfig};
use crate::setup::MainCamera;

pub const ROTATE_SPEED: f32 = 0.005; // radians per pixel of mouse motion
pub const ZOOM_STEP: f32 = 0.9; // radius factor per wheel line
pub const MAX_CAMERA_DT: f32 = 0.05; // never use a dt larger than 50ms

/// Keeps the orbit camera off the pole.
const POLE_MARGIN: f32 = 0.01;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CameraOrbit {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    /// Elevation above the focus' horizontal plane.
    pub pitch: f32,
}

impl CameraOrbit {
    pub fn from_eye(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            focus,
            radius,
            yaw: offset.z.atan2(offset.x),
            pitch: (offset.y / radius).clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn offset(&self) -> Vec3 {
        let xz_radius = self.radius * self.pitch.cos();
        Vec3::new(
            xz_radius * self.yaw.cos(),
            self.radius * self.pitch.sin(),
            xz_radius * self.yaw.sin(),
        )
    }

    pub fn eye(&self) -> Vec3 {
        self.focus + self.offset()
    }

    /// Angle between +Y and the eye offset.
    pub fn polar_angle(&self) -> f32 {
        FRAC_PI_2 - self.pitch
    }
}

/// Distance and angle clamps for the orbit controller.
#[derive(Resource, Debug, Clone, Copy)]
pub struct OrbitLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
}

impl OrbitLimits {
    pub fn from_config(cfg: &CameraConfig) -> Self {
        Self {
            min_distance: cfg.min_distance,
            max_distance: cfg.max_distance.max(cfg.min_distance),
            min_pitch: FRAC_PI_2 - cfg.max_polar_angle,
            max_pitch: FRAC_PI_2 - POLE_MARGIN,
        }
    }

    pub fn clamp(&self, orbit: &mut CameraOrbit) {
        orbit.radius = orbit.radius.clamp(self.min_distance, self.max_distance);
        orbit.pitch = orbit.pitch.clamp(self.min_pitch, self.max_pitch);
    }
}

#[derive(Component, Debug, Clone, Copy)]
pub struct FlyCamera {
    pub speed: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl FlyCamera {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    #[default]
    Orbit,
    Fly,
}

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(PlayerAction::MoveForward, keys.pressed(KeyCode::KeyW));
    action_state.set(PlayerAction::MoveBackward, keys.pressed(KeyCode::KeyS));
    action_state.set(PlayerAction::MoveLeft, keys.pressed(KeyCode::KeyA));
    action_state.set(PlayerAction::MoveRight, keys.pressed(KeyCode::KeyD));
    action_state.set(PlayerAction::Ascend, keys.pressed(KeyCode::Space));
    action_state.set(PlayerAction::Descend, keys.pressed(KeyCode::ShiftLeft));
}

/// `F` switches between orbit and fly (when the scene enables fly controls).
pub fn camera_mode_toggle_system(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<SceneConfig>,
    limits: Res<OrbitLimits>,
    mut mode: ResMut<CameraMode>,
    mut query: Query<(&Transform, &mut CameraOrbit, &mut FlyCamera), With<MainCamera>>,
) {
    if !config.camera.fly || !keys.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Ok((tf, mut orbit, mut fly)) = query.single_mut() else { return; };

    match *mode {
        CameraMode::Orbit => {
            let (yaw, pitch, _) = tf.rotation.to_euler(EulerRot::YXZ);
            fly.yaw = yaw;
            fly.pitch = pitch;
            *mode = CameraMode::Fly;
            info!("Camera: fly");
        }
        CameraMode::Fly => {
            *orbit = CameraOrbit::from_eye(tf.translation, orbit.focus);
            limits.clamp(&mut orbit);
            *mode = CameraMode::Orbit;
            info!("Camera: orbit");
        }
    }
}

pub fn orbit_camera_controller(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_evr: EventReader<MouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
    limits: Res<OrbitLimits>,
    mut query: Query<(&mut Transform, &mut CameraOrbit), With<MainCamera>>,
) {
    let motion: Vec2 = motion_evr.read().map(|ev| ev.delta).sum();
    let Ok((mut tf, mut orbit)) = query.single_mut() else { return; };

    // 1) Zoom
    for ev in scroll_evr.read() {
        let lines = match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.02,
        };
        orbit.radius *= ZOOM_STEP.powf(lines);
    }

    // 2) Orbit
    if mouse_buttons.pressed(MouseButton::Left) || mouse_buttons.pressed(MouseButton::Middle) {
        orbit.yaw += motion.x * ROTATE_SPEED;
        orbit.pitch += motion.y * ROTATE_SPEED;
    }

    limits.clamp(&mut orbit);

    // 3) Position camera
    tf.translation = orbit.eye();
    tf.look_at(orbit.focus, Vec3::Y);
}

pub fn fly_camera_controller(
    time: Res<Time>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut motion_evr: EventReader<MouseMotion>,
    action_state: Res<ActionState>,
    mut query: Query<(&mut Transform, &mut FlyCamera), With<MainCamera>>,
) {
    let dt = time.delta_secs().min(MAX_CAMERA_DT);
    let motion: Vec2 = motion_evr.read().map(|ev| ev.delta).sum();
    let Ok((mut tf, mut fly)) = query.single_mut() else { return; };

    // 1) Look
    if mouse_buttons.pressed(MouseButton::Right) {
        fly.yaw -= motion.x * ROTATE_SPEED;
        fly.pitch = (fly.pitch - motion.y * ROTATE_SPEED)
            .clamp(-FRAC_PI_2 + POLE_MARGIN, FRAC_PI_2 - POLE_MARGIN);
    }
    tf.rotation = fly.rotation();

    // 2) Move
    let axes = action_state.move_axes();
    let dir = tf.right() * axes.x + Vec3::Y * axes.y + tf.forward() * axes.z;
    tf.translation += dir.normalize_or_zero() * fly.speed * dt;
}
