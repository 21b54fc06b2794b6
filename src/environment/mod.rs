// src/environment/mod.rs

mod plugin;
pub mod sky;
pub mod water;

pub use plugin::EnvironmentPlugin;
