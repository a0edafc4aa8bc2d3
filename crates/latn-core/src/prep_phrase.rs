//! Prepositional phrases: `prep NP`.

use crate::conjunction::{Constituent, Phrase};
use crate::noun_phrase::NpConstituent;
use crate::{Dimension, SemanticVector};
use std::sync::Arc;

/// A prepositional phrase or a coordination of them.
pub type PpConstituent = Constituent<PrepPhrase>;

/// A preposition applied to a noun-phrase object.
///
/// The combined vector carries the preposition's relation/direction features
/// plus the referent features of the child noun phrase. `spatial_score` is
/// filled in by Layer 3 grounding when a scene is attached.
#[derive(Debug, Clone)]
pub struct PrepPhrase {
    pub preposition: SemanticVector,
    pub object: Arc<NpConstituent>,
    pub vector: SemanticVector,
    pub spatial_score: Option<f32>,
}

impl PrepPhrase {
    #[must_use]
    pub fn new(preposition: SemanticVector, object: Arc<NpConstituent>) -> Self {
        let mut vector = preposition.clone();
        vector += object.vector();
        vector.set(Dimension::Pp, 1.0);
        vector.set(Dimension::Np, 0.0);
        Self {
            preposition,
            object,
            vector,
            spatial_score: None,
        }
    }

    /// The preposition's surface form.
    #[must_use]
    pub fn preposition_word(&self) -> Option<&str> {
        self.preposition.word()
    }

    /// A copy of this phrase annotated with a spatial plausibility score.
    #[must_use]
    pub fn with_spatial_score(&self, score: f32) -> Self {
        let mut pp = self.clone();
        pp.spatial_score = Some(score);
        pp
    }

    /// True when the object is a `[x,y,z]` literal rather than a referring
    /// expression.
    #[must_use]
    pub fn has_literal_object(&self) -> bool {
        self.object
            .parts()
            .iter()
            .all(|np| np.vector.isa(Dimension::VectorLit))
    }
}

impl Phrase for PrepPhrase {
    fn vector(&self) -> &SemanticVector {
        &self.vector
    }

    fn describe(&self) -> String {
        format!(
            "PP({} {})",
            self.preposition_word().unwrap_or("?"),
            self.object.describe()
        )
    }
}
