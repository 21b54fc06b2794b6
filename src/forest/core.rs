// src/forest/core.rs
//! Plain data for the ground and the forest. Nothing here touches the ECS;
//! `graph` turns it into scene nodes.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

// ---------- Fixed dimensions ----------

/// Tree roots land in [-PLACEMENT_HALF_EXTENT, PLACEMENT_HALF_EXTENT] on X and Z.
pub const PLACEMENT_HALF_EXTENT: f64 = 500.0;

pub const GROUND_SIZE: Vec2 = Vec2::splat(1000.0);
pub const GROUND_TILING: Vec2 = Vec2::splat(100.0);
pub const GROUND_OFFSET: Vec3 = Vec3::ONE;

pub const TRUNK_SIZE: Vec3 = Vec3::new(7.34, 26.67, 6.0);
pub const TRUNK_HEIGHT: f32 = 14.0;

pub const CLUSTER_SIZE: Vec3 = Vec3::new(17.34, 16.67, 12.67);
/// Relative to the trunk.
pub const CLUSTER_HEIGHT: f32 = 12.67;

/// Leaf blob magnitudes are drawn large and divided by this.
pub const LEAF_SCALE: f64 = 30.0;

// ---------- Parts ----------

/// What a scene node is; picks its material.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ForestPart {
    Ground,
    Trunk,
    LeafCluster,
    LeafBlob,
}

impl ForestPart {
    pub const fn label(self) -> &'static str {
        match self {
            ForestPart::Ground => "Ground",
            ForestPart::Trunk => "Tree",
            ForestPart::LeafCluster => "Leaf Cluster",
            ForestPart::LeafBlob => "Leaf Blob",
        }
    }
}

// ---------- Ground ----------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ground {
    pub size: Vec2,
    /// Surface pattern repeats.
    pub tiling: Vec2,
    pub transform: Transform,
    pub receive_shadows: bool,
}

impl Default for Ground {
    fn default() -> Self {
        Self {
            size: GROUND_SIZE,
            tiling: GROUND_TILING,
            // Rectangles face +Z; lay it flat so the normal points up.
            transform: Transform::from_translation(GROUND_OFFSET)
                .with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            receive_shadows: true,
        }
    }
}

impl Ground {
    pub fn normal(&self) -> Vec3 {
        self.transform.rotation * Vec3::Z
    }
}

// ---------- Trees ----------

/// One randomly sized, randomly offset box inside a cluster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafBlob {
    pub size: Vec3,
    /// Relative to the cluster.
    pub offset: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LeafCluster {
    pub size: Vec3,
    /// Relative to the trunk.
    pub offset: Vec3,
    pub blobs: Vec<LeafBlob>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    /// World position of the trunk centre.
    pub position: Vec3,
    pub trunk_size: Vec3,
    pub cluster: LeafCluster,
}

impl Tree {
    pub fn blob_count(&self) -> usize {
        self.cluster.blobs.len()
    }
}

/// Every tree of one scene, in generation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forest {
    /// The count drawn before the loop ran (see `ForestConfig::inclusive_counts`).
    pub drawn_count: u32,
    pub trees: Vec<Tree>,
}

impl Forest {
    pub fn len(&self) -> usize { self.trees.len() }
    pub fn is_empty(&self) -> bool { self.trees.is_empty() }

    pub fn blob_count(&self) -> usize {
        self.trees.iter().map(Tree::blob_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ground_lies_flat_at_offset() {
        let g = Ground::default();
        assert_eq!(g.size, Vec2::new(1000.0, 1000.0));
        assert_eq!(g.tiling, Vec2::new(100.0, 100.0));
        assert_eq!(g.transform.translation, Vec3::new(1.0, 1.0, 1.0));
        assert!(g.normal().abs_diff_eq(Vec3::Y, 1e-6));
        assert!(g.receive_shadows);
    }
}
