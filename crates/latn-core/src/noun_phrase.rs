//! Noun phrases, with optional grounding to a scene entity.

use crate::conjunction::{Constituent, Phrase};
use crate::grounding::{GroundedEntity, Grounding};
use crate::prep_phrase::PrepPhrase;
use crate::{Dimension, SemanticVector};
use std::sync::Arc;

/// A noun phrase or a coordination of noun phrases.
pub type NpConstituent = Constituent<NounPhrase>;

/// A parsed noun phrase: `det? adv* adj* noun`, a pronoun, a vector literal,
/// or a quoted identifier.
///
/// The combined `vector` accumulates the determiner, each adjective (already
/// pre-scaled by any preceding adverbs) and the head noun; attached
/// prepositional phrases are kept separate. A grounded noun phrase carries
/// the `so` dimension and a [`Grounding`] handle to its scene entity.
#[derive(Debug, Clone, Default)]
pub struct NounPhrase {
    pub determiner: Option<SemanticVector>,
    pub pronoun: Option<SemanticVector>,
    pub proper_noun: Option<String>,
    pub adjectives: Vec<SemanticVector>,
    pub noun: Option<SemanticVector>,
    pub preps: Vec<PrepPhrase>,
    /// Surface words consumed by this phrase, in order.
    pub consumed: Vec<String>,
    /// Derived from the determiner's `number` dimension, which is
    /// authoritative.
    pub scale_factor: Option<f32>,
    pub vector: SemanticVector,
    pub grounding: Option<Grounding>,
}

impl NounPhrase {
    #[must_use]
    pub fn new() -> Self {
        let mut np = Self::default();
        np.vector.set(Dimension::Np, 1.0);
        np
    }

    /// The head noun's surface form, if any.
    #[must_use]
    pub fn head_noun(&self) -> Option<&str> {
        self.noun.as_ref().and_then(SemanticVector::word)
    }

    fn consume(&mut self, vector: &SemanticVector) {
        if let Some(word) = vector.word() {
            self.consumed.push(word.to_string());
        }
    }

    pub fn apply_determiner(&mut self, det: &SemanticVector) {
        self.consume(det);
        self.vector += det;
        let number = det.get(Dimension::Number);
        if number != 0.0 {
            self.scale_factor = Some(number);
        }
        self.determiner = Some(det.clone());
    }

    /// Add an adjective whose semantic dimensions have been pre-scaled by the
    /// running adverb intensity (`1.0` when no adverb preceded it).
    pub fn apply_adjective(&mut self, adj: &SemanticVector, intensity: f32) {
        self.consume(adj);
        let mut scaled = adj.clone();
        scaled.scale_dims(Dimension::ADJECTIVE_SEMANTICS, intensity);
        self.vector += &scaled;
        self.adjectives.push(scaled);
    }

    /// Record an adverb's surface form; its intensity is folded into the next
    /// adjective by the caller.
    pub fn apply_adverb(&mut self, adv: &SemanticVector) {
        self.consume(adv);
    }

    pub fn apply_noun(&mut self, noun: &SemanticVector) {
        self.consume(noun);
        self.vector += noun;
        self.noun = Some(noun.clone());
    }

    pub fn apply_pronoun(&mut self, pronoun: &SemanticVector) {
        self.consume(pronoun);
        self.vector += pronoun;
        self.pronoun = Some(pronoun.clone());
    }

    /// A `[x,y,z]` literal standing in as a complete noun phrase whose head
    /// noun is the literal word `vector`.
    pub fn apply_vector_literal(&mut self, literal: &SemanticVector) {
        self.consume(literal);
        self.vector += literal;
        let mut head = SemanticVector::from_features(&[Dimension::Noun]).with_word("vector");
        head.set(Dimension::LocX, literal.get(Dimension::LocX));
        head.set(Dimension::LocY, literal.get(Dimension::LocY));
        head.set(Dimension::LocZ, literal.get(Dimension::LocZ));
        self.noun = Some(head);
    }

    /// A quoted identifier. After a determiner it is a type designation
    /// (`a 'sun'`); bare, it is a proper noun (`'Charlie'`).
    pub fn apply_quoted(&mut self, quoted: &SemanticVector) {
        self.consume(quoted);
        let name = quoted.word().unwrap_or_default().to_string();
        let head = SemanticVector::from_features(&[Dimension::Noun]).with_word(name.clone());
        self.vector += &head;
        if self.determiner.is_none() {
            self.proper_noun = Some(name);
        }
        self.noun = Some(head);
    }

    /// Bind this phrase to a scene entity (the SceneObjectPhrase conversion).
    pub fn resolve_to(&mut self, entity: Arc<dyn GroundedEntity>, similarity: f32) {
        self.vector.set(Dimension::So, 1.0);
        self.grounding = Some(Grounding::new(similarity, entity));
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.grounding.is_some()
    }

    /// The bound entity, when [`is_resolved`](Self::is_resolved) holds.
    #[must_use]
    pub fn resolved_entity(&self) -> Option<&Arc<dyn GroundedEntity>> {
        self.grounding.as_ref().map(|g| &g.entity)
    }

    /// The surface text this phrase was parsed from.
    #[must_use]
    pub fn source_text(&self) -> String {
        self.consumed.join(" ")
    }
}

impl Phrase for NounPhrase {
    fn vector(&self) -> &SemanticVector {
        &self.vector
    }

    fn describe(&self) -> String {
        match &self.grounding {
            Some(g) => format!("SO({} -> {})", self.source_text(), g.entity_id()),
            None => format!("NP({})", self.source_text()),
        }
    }
}
