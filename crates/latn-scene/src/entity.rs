//! Scene entities: atomic objects and named assemblies.

use latn_core::{Dimension, GroundedEntity, SemanticVector};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An atomic scene object: a named shape with position, rotation, scale,
/// color and surface features carried in its vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneObject {
    /// Base noun this object answers to, e.g. `"cube"`.
    pub name: String,
    /// Unique identifier, e.g. `"red_cube_1"`.
    pub object_id: String,
    pub vector: SemanticVector,
}

impl SceneObject {
    /// Create an object whose id equals its name.
    #[must_use]
    pub fn new(name: impl Into<String>, vector: SemanticVector) -> Self {
        let name = name.into();
        Self {
            object_id: name.clone(),
            name,
            vector,
        }
    }

    /// Create an object with an explicit unique id.
    #[must_use]
    pub fn with_id(
        name: impl Into<String>,
        vector: SemanticVector,
        object_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            object_id: object_id.into(),
            vector,
        }
    }

    #[must_use]
    pub fn position(&self) -> [f32; 3] {
        [
            self.vector.get(Dimension::LocX),
            self.vector.get(Dimension::LocY),
            self.vector.get(Dimension::LocZ),
        ]
    }

    /// Scale per axis; an unset (zero) scale dimension reads as `1.0`.
    #[must_use]
    pub fn scale(&self) -> [f32; 3] {
        let component = |dim| {
            let value = self.vector.get(dim);
            if value == 0.0 { 1.0 } else { value }
        };
        [
            component(Dimension::ScaleX),
            component(Dimension::ScaleY),
            component(Dimension::ScaleZ),
        ]
    }

    /// Bounding half-extents per axis. Cube scales are edge lengths (half =
    /// scale/2); sphere scales are radii (half = max scale on every axis);
    /// anything else is treated as full dimensions.
    #[must_use]
    pub fn half_extents(&self) -> [f32; 3] {
        let [sx, sy, sz] = self.scale();
        if self.name.to_lowercase().contains("sphere") {
            let radius = sx.max(sy).max(sz);
            [radius, radius, radius]
        } else {
            [sx / 2.0, sy / 2.0, sz / 2.0]
        }
    }
}

/// A named grouping of objects that behaves like a single object: it has an
/// id, a name matching compound nouns in the vocabulary, a centroid position
/// and an aggregate bounding box.
#[derive(Debug, Clone)]
pub struct SceneAssembly {
    pub name: String,
    pub assembly_id: String,
    members: Vec<Arc<SceneEntity>>,
    vector: SemanticVector,
}

impl SceneAssembly {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut vector = SemanticVector::from_features(&[Dimension::Noun, Dimension::Assembly]);
        vector.word = Some(name.clone());
        Self {
            assembly_id: name.clone(),
            name,
            members: Vec::new(),
            vector,
        }
    }

    #[must_use]
    pub fn with_id(name: impl Into<String>, assembly_id: impl Into<String>) -> Self {
        let mut assembly = Self::new(name);
        assembly.assembly_id = assembly_id.into();
        assembly
    }

    /// Add a member object and recompute the centroid vector.
    pub fn add_object(&mut self, object: SceneObject) {
        self.members.push(Arc::new(SceneEntity::Object(object)));
        self.recompute();
    }

    /// Remove a member by id; returns whether anything was removed.
    pub fn remove_object(&mut self, object_id: &str) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m.entity_id() != object_id);
        let removed = self.members.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Member objects, in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[Arc<SceneEntity>] {
        &self.members
    }

    #[must_use]
    pub fn vector(&self) -> &SemanticVector {
        &self.vector
    }

    /// Centroid of member positions.
    #[must_use]
    pub fn position(&self) -> [f32; 3] {
        [
            self.vector.get(Dimension::LocX),
            self.vector.get(Dimension::LocY),
            self.vector.get(Dimension::LocZ),
        ]
    }

    /// Half-extents of the aggregate bounding box around all members.
    #[must_use]
    pub fn half_extents(&self) -> [f32; 3] {
        if self.members.is_empty() {
            return [0.0; 3];
        }
        let mut lo = [f32::INFINITY; 3];
        let mut hi = [f32::NEG_INFINITY; 3];
        for member in &self.members {
            let pos = member.position();
            let half = member.half_extents();
            for axis in 0..3 {
                lo[axis] = lo[axis].min(pos[axis] - half[axis]);
                hi[axis] = hi[axis].max(pos[axis] + half[axis]);
            }
        }
        [
            (hi[0] - lo[0]) / 2.0,
            (hi[1] - lo[1]) / 2.0,
            (hi[2] - lo[2]) / 2.0,
        ]
    }

    fn recompute(&mut self) {
        let count = self.members.len().max(1) as f32;
        let mut centroid = [0.0f32; 3];
        for member in &self.members {
            let pos = member.position();
            for axis in 0..3 {
                centroid[axis] += pos[axis];
            }
        }
        self.vector.set(Dimension::LocX, centroid[0] / count);
        self.vector.set(Dimension::LocY, centroid[1] / count);
        self.vector.set(Dimension::LocZ, centroid[2] / count);
    }
}

/// Either an atomic object or an assembly, behind one interface.
#[derive(Debug, Clone)]
pub enum SceneEntity {
    Object(SceneObject),
    Assembly(SceneAssembly),
}

impl SceneEntity {
    #[must_use]
    pub fn entity_id(&self) -> &str {
        match self {
            SceneEntity::Object(o) => &o.object_id,
            SceneEntity::Assembly(a) => &a.assembly_id,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            SceneEntity::Object(o) => &o.name,
            SceneEntity::Assembly(a) => &a.name,
        }
    }

    #[must_use]
    pub fn vector(&self) -> &SemanticVector {
        match self {
            SceneEntity::Object(o) => &o.vector,
            SceneEntity::Assembly(a) => a.vector(),
        }
    }

    #[must_use]
    pub fn position(&self) -> [f32; 3] {
        match self {
            SceneEntity::Object(o) => o.position(),
            SceneEntity::Assembly(a) => a.position(),
        }
    }

    #[must_use]
    pub fn half_extents(&self) -> [f32; 3] {
        match self {
            SceneEntity::Object(o) => o.half_extents(),
            SceneEntity::Assembly(a) => a.half_extents(),
        }
    }

    #[must_use]
    pub fn is_assembly(&self) -> bool {
        matches!(self, SceneEntity::Assembly(_))
    }
}

impl GroundedEntity for SceneEntity {
    fn entity_id(&self) -> &str {
        SceneEntity::entity_id(self)
    }

    fn name(&self) -> &str {
        SceneEntity::name(self)
    }

    fn vector(&self) -> &SemanticVector {
        SceneEntity::vector(self)
    }

    fn position(&self) -> [f32; 3] {
        SceneEntity::position(self)
    }

    fn half_extents(&self) -> [f32; 3] {
        SceneEntity::half_extents(self)
    }

    fn is_assembly(&self) -> bool {
        SceneEntity::is_assembly(self)
    }
}
