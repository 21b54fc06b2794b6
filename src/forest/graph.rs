// src/forest/graph.rs
//! Scene-graph seam: the populator only needs "make a box", "make a plane" and
//! "add child". `EntityGraph` answers those with Bevy entities.

use bevy::pbr::NotShadowReceiver;
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;

use super::core::{ForestPart, Ground, Tree};

pub trait SceneGraph {
    type Node: Copy;

    /// Box of `size` at `translation` (relative to its future parent).
    fn cuboid(&mut self, part: ForestPart, size: Vec3, translation: Vec3) -> Self::Node;

    /// Rectangle in its local XY plane, surface pattern repeated `tiling` times.
    fn plane(
        &mut self,
        part: ForestPart,
        size: Vec2,
        tiling: Vec2,
        transform: Transform,
        receive_shadows: bool,
    ) -> Self::Node;

    fn add_child(&mut self, parent: Self::Node, child: Self::Node);
}

impl Ground {
    pub fn attach<G: SceneGraph>(&self, scene: &mut G) -> G::Node {
        scene.plane(ForestPart::Ground, self.size, self.tiling, self.transform, self.receive_shadows)
    }
}

impl Tree {
    /// Trunk -> cluster -> blobs. Returns the trunk (the tree's root node).
    pub fn attach<G: SceneGraph>(&self, scene: &mut G) -> G::Node {
        let trunk = scene.cuboid(ForestPart::Trunk, self.trunk_size, self.position);
        let cluster = scene.cuboid(ForestPart::LeafCluster, self.cluster.size, self.cluster.offset);
        for blob in &self.cluster.blobs {
            let node = scene.cuboid(ForestPart::LeafBlob, blob.size, blob.offset);
            scene.add_child(cluster, node);
        }
        scene.add_child(trunk, cluster);
        trunk
    }
}

// ---------- Bevy side ----------

/// Materials per part, filled at startup from `ForestConfig`.
#[derive(Resource, Default, Clone)]
pub struct ForestPalette {
    pub ground: Handle<StandardMaterial>,
    pub bark: Handle<StandardMaterial>,
    pub foliage: Handle<StandardMaterial>,
}

impl ForestPalette {
    pub fn material(&self, part: ForestPart) -> Handle<StandardMaterial> {
        match part {
            ForestPart::Ground => self.ground.clone(),
            ForestPart::Trunk => self.bark.clone(),
            ForestPart::LeafCluster | ForestPart::LeafBlob => self.foliage.clone(),
        }
    }
}

pub struct EntityGraph<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub palette: &'a ForestPalette,
}

impl SceneGraph for EntityGraph<'_, '_, '_> {
    type Node = Entity;

    fn cuboid(&mut self, part: ForestPart, size: Vec3, translation: Vec3) -> Entity {
        let mesh = self.meshes.add(Cuboid::from_size(size));
        self.commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(self.palette.material(part)),
                Transform::from_translation(translation),
                Name::new(part.label()),
                part,
            ))
            .id()
    }

    fn plane(
        &mut self,
        part: ForestPart,
        size: Vec2,
        tiling: Vec2,
        transform: Transform,
        receive_shadows: bool,
    ) -> Entity {
        let mut mesh = Mesh::from(Rectangle::from_size(size));
        scale_uvs(&mut mesh, tiling);
        let mesh = self.meshes.add(mesh);

        let mut ec = self.commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(self.palette.material(part)),
            transform,
            Name::new(part.label()),
            part,
        ));
        if !receive_shadows {
            ec.insert(NotShadowReceiver);
        }
        ec.id()
    }

    fn add_child(&mut self, parent: Entity, child: Entity) {
        self.commands.entity(parent).add_child(child);
    }
}

/// Multiply UVs so a repeat-sampled texture tiles `tiling` times.
pub fn scale_uvs(mesh: &mut Mesh, tiling: Vec2) {
    if let Some(VertexAttributeValues::Float32x2(uvs)) = mesh.attribute_mut(Mesh::ATTRIBUTE_UV_0) {
        for uv in uvs.iter_mut() {
            uv[0] *= tiling.x;
            uv[1] *= tiling.y;
        }
    }
}
