// src/forest/mod.rs

pub mod core;
pub mod graph;
pub mod populator;
pub mod random;
mod plugin;
mod systems;

pub use plugin::ForestPlugin;
