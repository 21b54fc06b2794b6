// src/config.rs
//! Scene configuration (`.ron`) + the two built-in presets.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::path::Path;

// ---------- Sections ----------

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OceanConfig {
    /// Side length of the square ocean plane.
    pub size: f32,
    pub normals_texture: String,
    /// How many times the normal map repeats across the plane.
    pub normal_repeat: f32,
    pub water_color: u32,
    /// Added to the water clock once per rendered frame.
    pub time_step: f32,
    /// UV drift of the normal map per unit of water clock.
    pub drift: f32,
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            size: 10_000.0,
            normals_texture: "textures/waternormals.png".to_string(),
            normal_repeat: 40.0,
            water_color: 0x001e0f,
            time_step: 0.30 / 60.0,
            drift: 0.05,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub scale: f32,
    /// Sun elevation above the horizon, degrees.
    pub elevation: f32,
    /// Sun azimuth, degrees.
    pub azimuth: f32,
    pub color: u32,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self { scale: 10_000.0, elevation: 2.0, azimuth: 180.0, color: 0x87b5d8 }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub min_distance: f32,
    pub max_distance: f32,
    /// Largest angle between +Y and the eye offset (radians).
    pub max_polar_angle: f32,
    /// Enables the fly controller and the orbit/fly toggle.
    pub fly: bool,
    pub fly_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 55.0,
            near: 1.0,
            far: 20_000.0,
            position: [30.0, 30.0, 100.0],
            target: [0.0, 10.0, 0.0],
            min_distance: 40.0,
            max_distance: 200.0,
            max_polar_angle: PI * 0.495,
            fly: false,
            fly_speed: 120.0,
        }
    }
}

impl CameraConfig {
    pub fn eye(&self) -> Vec3 { Vec3::from_array(self.position) }
    pub fn focus(&self) -> Vec3 { Vec3::from_array(self.target) }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub sun_illuminance: f32,
    pub ambient_brightness: f32,
    pub shadows: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self { sun_illuminance: 3_000.0, ambient_brightness: 400.0, shadows: false }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ForestConfig {
    pub ground_texture: String,
    pub bark_texture: String,
    pub foliage_texture: String,
    pub bark_color: u32,
    pub foliage_color: u32,
    /// Tree and leaf loops run `0..=count` (count + 1 items).
    /// Set to false for exactly `count` items.
    pub inclusive_counts: bool,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            ground_texture: "textures/grass.png".to_string(),
            bark_texture: "textures/bark.png".to_string(),
            foliage_texture: "textures/leaves.png".to_string(),
            bark_color: 0x8b5a2b,
            foliage_color: 0x2e8b3a,
            inclusive_counts: true,
        }
    }
}

// ---------- Whole scene ----------

/// Everything the app needs to build the scene. Inserted as a resource.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// `None` draws a fresh seed at startup (and logs it).
    pub seed: Option<u64>,
    pub ocean: OceanConfig,
    pub sky: SkyConfig,
    pub camera: CameraConfig,
    pub light: LightConfig,
    /// Ground + trees. `None` is the plain seascape.
    pub forest: Option<ForestConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self { Self::seascape() }
}

impl SceneConfig {
    /// Ocean and sky only.
    pub fn seascape() -> Self {
        Self {
            seed: None,
            ocean: OceanConfig::default(),
            sky: SkyConfig::default(),
            camera: CameraConfig::default(),
            light: LightConfig::default(),
            forest: None,
        }
    }

    /// Seascape plus ground, trees, a shadowing sun and fly controls.
    pub fn forest() -> Self {
        Self {
            seed: None,
            ocean: OceanConfig { size: 100_000.0, normal_repeat: 400.0, ..Default::default() },
            sky: SkyConfig::default(),
            camera: CameraConfig {
                min_distance: 10.0,
                max_distance: 1_500.0,
                fly: true,
                ..Default::default()
            },
            light: LightConfig {
                sun_illuminance: 10_000.0,
                ambient_brightness: 600.0,
                shadows: true,
            },
            forest: Some(ForestConfig::default()),
        }
    }

    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "seascape" => Ok(Self::seascape()),
            "forest" => Ok(Self::forest()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        ron::from_str(text).map_err(|e| ConfigError::Ron(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_ron_str(&text)
    }

    /// Resolve the first CLI argument: nothing, a preset name or a `.ron` path.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, ConfigError> {
        match arg {
            None => Ok(Self::seascape()),
            Some(a) if a.ends_with(".ron") => Self::load(a),
            Some(name) => Self::preset(name),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.forest.is_some() { "forest" } else { "seascape" }
    }
}

/// `0xRRGGBB` -> sRGB colour.
pub fn color_from_hex(hex: u32) -> Color {
    let [_, r, g, b] = hex.to_be_bytes();
    Color::srgb_u8(r, g, b)
}

// ---------- Errors ----------

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O while reading scene config '{path}': {source}")]
    Io { path: String, source: std::io::Error },
    #[error("RON parse error: {0}")]
    Ron(String),
    #[error("Unknown scene preset '{0}' (expected 'seascape' or 'forest')")]
    UnknownPreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ron_keeps_defaults() {
        let cfg = SceneConfig::from_ron_str("(seed: Some(7), sky: (elevation: 10.0))").unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.sky.elevation, 10.0);
        assert_eq!(cfg.sky.azimuth, 180.0);
        assert_eq!(cfg.ocean.size, 10_000.0);
        assert!(cfg.forest.is_none());
    }

    #[test]
    fn ron_can_enable_forest() {
        let cfg = SceneConfig::from_ron_str("(forest: Some((inclusive_counts: false)))").unwrap();
        let forest = cfg.forest.unwrap();
        assert!(!forest.inclusive_counts);
        assert_eq!(forest.ground_texture, "textures/grass.png");
    }

    #[test]
    fn shipped_scene_files_parse() {
        let forest = SceneConfig::from_ron_str(include_str!("../assets/scenes/forest.ron")).unwrap();
        assert_eq!(forest.label(), "forest");
        assert_eq!(forest.seed, Some(1337));
        assert_eq!(forest.camera.max_distance, 1_500.0);

        let sea = SceneConfig::from_ron_str(include_str!("../assets/scenes/seascape.ron")).unwrap();
        assert_eq!(sea.label(), "seascape");
        assert_eq!(sea.sky.elevation, 2.0);
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let err = SceneConfig::from_ron_str("(seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Ron(_)));
    }

    #[test]
    fn presets_resolve_by_name() {
        assert_eq!(SceneConfig::from_arg(None).unwrap().label(), "seascape");
        let forest = SceneConfig::from_arg(Some("forest")).unwrap();
        assert_eq!(forest.label(), "forest");
        assert_eq!(forest.ocean.size, 100_000.0);
        assert!(forest.camera.fly);
        assert!(matches!(
            SceneConfig::from_arg(Some("jungle")),
            Err(ConfigError::UnknownPreset(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::from_arg(Some("does/not/exist.ron")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => assert_eq!(path, "does/not/exist.ron"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn hex_colors_map_to_srgb_bytes() {
        let c = color_from_hex(0x001e0f).to_srgba();
        assert_eq!((c.red * 255.0).round() as u8, 0x00);
        assert_eq!((c.green * 255.0).round() as u8, 0x1e);
        assert_eq!((c.blue * 255.0).round() as u8, 0x0f);
    }
}
