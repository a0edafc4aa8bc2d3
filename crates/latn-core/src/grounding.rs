//! The seam between phrases and an externally-owned scene.
//!
//! The parser never mutates a scene; it only needs to read identity, feature
//! vector and geometry from whatever entity a noun phrase was bound to. That
//! read surface is the [`GroundedEntity`] trait, implemented by the scene
//! crate's concrete entity type.

use crate::SemanticVector;
use std::sync::Arc;

/// Read-only view of a scene entity, as needed by grounding and spatial
/// validation.
pub trait GroundedEntity: std::fmt::Debug + Send + Sync {
    /// Unique identifier within the scene.
    fn entity_id(&self) -> &str;

    /// Base noun this entity answers to (e.g. `"cube"`).
    fn name(&self) -> &str;

    /// The entity's feature vector (position, scale, rotation, color).
    fn vector(&self) -> &SemanticVector;

    /// World position.
    fn position(&self) -> [f32; 3];

    /// Half-extents of the bounding box, per axis.
    fn half_extents(&self) -> [f32; 3];

    /// True for assemblies (named groupings of objects).
    fn is_assembly(&self) -> bool {
        false
    }
}

/// A successful binding of a noun phrase to a scene entity.
#[derive(Debug, Clone)]
pub struct Grounding {
    /// Semantic similarity between the phrase and the entity, in `(0, 1]`.
    pub similarity: f32,
    /// Shared handle to the bound entity.
    pub entity: Arc<dyn GroundedEntity>,
}

impl Grounding {
    #[must_use]
    pub fn new(similarity: f32, entity: Arc<dyn GroundedEntity>) -> Self {
        Self { similarity, entity }
    }

    /// Identifier of the bound entity.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        self.entity.entity_id()
    }
}
