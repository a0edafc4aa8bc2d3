// latn-scene: scene entity model and spatial validation

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! # latn-scene
//!
//! The 3D scene the parser grounds against: atomic [`SceneObject`]s, named
//! [`SceneAssembly`] groupings, and the [`SceneModel`] that answers
//! noun-phrase and pronoun queries. The parser only ever reads a scene;
//! hosts own and mutate it between parses.
//!
//! The [`spatial`] module is the shared spatial validator: given a
//! preposition vector and two entities it computes the expected placement
//! and a banded plausibility score. Layer 3 grounding scores hypotheses with
//! it; a host's object mover can apply the same expected placement.
//!
//! ## Example
//!
//! ```rust
//! use latn_core::{Dimension, SemanticVector};
//! use latn_scene::{SceneModel, SceneObject};
//!
//! let mut scene = SceneModel::new();
//! let vector = SemanticVector::from_values(&[(Dimension::Noun, 1.0), (Dimension::Red, 1.0)]);
//! scene.add_object(SceneObject::with_id("box", vector, "red_box_1"));
//!
//! assert_eq!(scene.resolve_pronoun("it").unwrap()[0].entity_id(), "red_box_1");
//! ```

pub mod entity;
pub mod history;
pub mod model;
pub mod spatial;
pub mod transform;

use thiserror::Error;

/// Errors raised by scene queries.
#[derive(Error, Debug)]
pub enum SceneError {
    /// A pronoun the scene cannot resolve (`it`, `they` and `them` are the
    /// recognized forms).
    #[error("unrecognized pronoun: {0}")]
    UnknownPronoun(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

pub use entity::{SceneAssembly, SceneEntity, SceneObject};
pub use history::SceneTimeline;
pub use model::SceneModel;
pub use transform::TransformMatrix;
