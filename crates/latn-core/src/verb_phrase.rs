//! Verb phrases: `verb NP? (PP | adjective-complement)*`.

use crate::conjunction::{Constituent, Phrase};
use crate::noun_phrase::NpConstituent;
use crate::prep_phrase::PpConstituent;
use crate::{Dimension, SemanticVector};
use std::sync::Arc;

/// A verb phrase or a coordination of them.
pub type VpConstituent = Constituent<VerbPhrase>;

/// Verb sub-kinds driving downstream attachment rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbKind {
    /// `create, draw, make, build, place` — require a direct object; PPs are
    /// locations.
    Create,
    /// `move, rotate, scale, ...` — require a direct object; PPs are
    /// destinations or parameters.
    Transform,
    /// `color, texture` — direct object plus adjective complement or color NP.
    Style,
    /// `copy, delete, remove, paste`.
    Edit,
    /// `align, group, position, ungroup`.
    Organize,
    /// `select`.
    Select,
    /// `undo, redo`, modals — no object required.
    Generic,
}

impl VerbKind {
    /// Classify a verb token by its verb-semantic dimensions.
    #[must_use]
    pub fn of(vector: &SemanticVector) -> Self {
        if vector.isa(Dimension::Create) {
            VerbKind::Create
        } else if vector.isa(Dimension::Move)
            || vector.isa(Dimension::Rotate)
            || vector.isa(Dimension::ScaleVerb)
            || vector.isa(Dimension::Transform)
        {
            VerbKind::Transform
        } else if vector.isa(Dimension::Style) {
            VerbKind::Style
        } else if vector.isa(Dimension::Edit) {
            VerbKind::Edit
        } else if vector.isa(Dimension::Organize) {
            VerbKind::Organize
        } else if vector.isa(Dimension::Select) {
            VerbKind::Select
        } else {
            VerbKind::Generic
        }
    }

    /// Whether this kind of verb takes a direct object.
    #[must_use]
    pub fn takes_object(self) -> bool {
        !matches!(self, VerbKind::Generic)
    }
}

/// A parsed verb phrase.
#[derive(Debug, Clone)]
pub struct VerbPhrase {
    pub verb: SemanticVector,
    pub kind: VerbKind,
    pub object: Option<Arc<NpConstituent>>,
    pub preps: Vec<Arc<PpConstituent>>,
    /// Adjective complements, e.g. `bigger` in "make it bigger".
    pub adjective_complements: Vec<SemanticVector>,
    /// Set when a movement verb ended up with no destination: no directional
    /// or spatial PP and no adjective complement. The phrase is still
    /// emitted; hosts may reject it.
    pub lacks_directional_pp: bool,
    pub vector: SemanticVector,
}

impl VerbPhrase {
    #[must_use]
    pub fn new(verb: SemanticVector) -> Self {
        let kind = VerbKind::of(&verb);
        let mut vector = verb.clone();
        vector.set(Dimension::Vp, 1.0);
        Self {
            verb,
            kind,
            object: None,
            preps: Vec::new(),
            adjective_complements: Vec::new(),
            lacks_directional_pp: false,
            vector,
        }
    }

    /// The verb's surface form.
    #[must_use]
    pub fn verb_word(&self) -> Option<&str> {
        self.verb.word()
    }

    pub fn set_object(&mut self, object: Arc<NpConstituent>) {
        self.vector += object.vector();
        self.vector.set(Dimension::Np, 0.0);
        self.object = Some(object);
    }

    pub fn add_prep(&mut self, pp: Arc<PpConstituent>) {
        self.preps.push(pp);
    }

    pub fn add_adjective_complement(&mut self, adj: SemanticVector) {
        self.adjective_complements.push(adj);
    }

    /// Re-derive the destination flag after all adjuncts are attached.
    pub fn finish(&mut self) {
        self.lacks_directional_pp = self.kind == VerbKind::Transform
            && self.verb.isa(Dimension::Move)
            && self.adjective_complements.is_empty()
            && !self.preps.iter().any(|pp| Self::is_locational(pp));
    }

    fn is_locational(pp: &PpConstituent) -> bool {
        let v = pp.vector();
        v.isa(Dimension::DirectionalTarget)
            || v.isa(Dimension::SpatialVertical)
            || v.isa(Dimension::SpatialLocation)
            || v.isa(Dimension::SpatialProximity)
            || v.get(Dimension::DirX) != 0.0
            || v.get(Dimension::DirY) != 0.0
            || v.get(Dimension::DirZ) != 0.0
    }
}

impl Phrase for VerbPhrase {
    fn vector(&self) -> &SemanticVector {
        &self.vector
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.verb_word().unwrap_or("?").to_string()];
        if let Some(object) = &self.object {
            parts.push(object.describe());
        }
        for pp in &self.preps {
            parts.push(pp.describe());
        }
        for adj in &self.adjective_complements {
            parts.push(adj.word().unwrap_or("?").to_string());
        }
        format!("VP({})", parts.join(" "))
    }
}
