// src/forest/populator.rs
//! Randomly parameterised ground + forest generation.
//!
//! Every draw goes through the injected [`UniformSource`], in a fixed order, so
//! a scripted source reproduces a scene exactly.

use bevy::prelude::*;

use super::core::*;
use super::graph::SceneGraph;
use super::random::{draw_int, random_sign, UniformSource};

/// Ground and forest of one populated scene.
#[derive(Clone, Debug, PartialEq)]
pub struct PopulatedScene {
    pub ground: Ground,
    pub forest: Forest,
}

pub struct ScenePopulator<'a> {
    rng: &'a mut dyn UniformSource,
    inclusive_counts: bool,
}

impl<'a> ScenePopulator<'a> {
    pub fn new(rng: &'a mut dyn UniformSource) -> Self {
        Self { rng, inclusive_counts: true }
    }

    /// `true` (default) builds `count + 1` trees/blobs for a drawn `count`.
    pub fn with_inclusive_counts(mut self, inclusive: bool) -> Self {
        self.inclusive_counts = inclusive;
        self
    }

    #[inline]
    fn loop_len(&self, count: f64) -> usize {
        let n = count as usize;
        if self.inclusive_counts { n + 1 } else { n }
    }

    pub fn build_ground(&self) -> Ground {
        Ground::default()
    }

    pub fn build_trees(&mut self) -> Forest {
        let tree_count = draw_int(self.rng, 50.0, 10.0);
        let len = self.loop_len(tree_count);

        let mut trees = Vec::with_capacity(len);
        for _ in 0..len {
            let random_x = -(draw_int(self.rng, PLACEMENT_HALF_EXTENT, 0.0) - PLACEMENT_HALF_EXTENT)
                * random_sign(self.rng);
            let random_z = (draw_int(self.rng, PLACEMENT_HALF_EXTENT, 0.0) - PLACEMENT_HALF_EXTENT)
                * random_sign(self.rng);
            trees.push(self.build_tree(random_x as f32, random_z as f32));
        }

        Forest { drawn_count: tree_count as u32, trees }
    }

    /// Trunk at ground level with one leaf cluster on top.
    pub fn build_tree(&mut self, x: f32, z: f32) -> Tree {
        Tree {
            position: Vec3::new(x, TRUNK_HEIGHT, z),
            trunk_size: TRUNK_SIZE,
            cluster: self.build_tree_leaves(),
        }
    }

    pub fn build_tree_leaves(&mut self) -> LeafCluster {
        let leaves_to_add = draw_int(self.rng, 8.0, 2.0);
        let len = self.loop_len(leaves_to_add);
        let blobs = (0..len).map(|_| self.build_tree_leaves_random()).collect();

        LeafCluster {
            size: CLUSTER_SIZE,
            offset: Vec3::new(0.0, CLUSTER_HEIGHT, 0.0),
            blobs,
        }
    }

    pub fn build_tree_leaves_random(&mut self) -> LeafBlob {
        let mag_x = draw_int(self.rng, 300.0, 150.0);
        let mag_y = draw_int(self.rng, 400.0, 200.0);
        let mag_z = draw_int(self.rng, 400.0, 200.0);

        let off_y = draw_int(self.rng, 260.0 / LEAF_SCALE, 0.0) * random_sign(self.rng);
        let off_x = draw_int(self.rng, 260.0 / LEAF_SCALE, 0.0) * random_sign(self.rng);
        let off_z = draw_int(self.rng, 180.0 / LEAF_SCALE, 0.0) * random_sign(self.rng);

        LeafBlob {
            size: Vec3::new(
                (mag_x / LEAF_SCALE) as f32,
                (mag_y / LEAF_SCALE) as f32,
                (mag_z / LEAF_SCALE) as f32,
            ),
            offset: Vec3::new(off_x as f32, off_y as f32, off_z as f32),
        }
    }

    /// Build ground + forest and attach both to `scene`.
    pub fn populate<G: SceneGraph>(&mut self, scene: &mut G) -> PopulatedScene {
        let ground = self.build_ground();
        let forest = self.build_trees();

        ground.attach(scene);
        for tree in &forest.trees {
            tree.attach(scene);
        }

        info!(
            "forest: drew {} trees, built {} with {} leaf blobs",
            forest.drawn_count,
            forest.len(),
            forest.blob_count()
        );

        PopulatedScene { ground, forest }
    }
}
