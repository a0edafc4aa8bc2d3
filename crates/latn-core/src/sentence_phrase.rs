//! Top-level sentence constructs.

use crate::conjunction::{Constituent, Phrase};
use crate::noun_phrase::NpConstituent;
use crate::prep_phrase::PpConstituent;
use crate::verb_phrase::VpConstituent;
use crate::{Dimension, SemanticVector};
use std::sync::Arc;

/// A sentence or a coordination of sentences.
pub type SpConstituent = Constituent<SentencePhrase>;

/// The recognized sentence forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceKind {
    /// A bare verb phrase: most commands.
    Imperative,
    /// `NP tobe (NP | adj)` or `NP VP`.
    Declarative,
    /// A bare noun phrase, used for selection and query contexts.
    Identification,
    /// `quoted tobe phrase` — extends the vocabulary at runtime.
    Definition,
}

/// Payload of a definition sentence: the new word and the vector computed
/// from the right-hand phrase. The host feeds this back into the vocabulary.
#[derive(Debug, Clone)]
pub struct DefinitionPayload {
    pub word: String,
    pub vector: SemanticVector,
}

/// A fully-folded sentence.
#[derive(Debug, Clone)]
pub struct SentencePhrase {
    pub kind: SentenceKind,
    pub subject: Option<Arc<NpConstituent>>,
    pub predicate: Option<Arc<VpConstituent>>,
    pub preps: Vec<Arc<PpConstituent>>,
    /// The adjective of a `NP tobe adj` declarative.
    pub predicate_adjective: Option<SemanticVector>,
    /// The right-hand noun phrase of a `NP tobe NP` declarative.
    pub predicate_nominal: Option<Arc<NpConstituent>>,
    pub definition: Option<DefinitionPayload>,
    pub vector: SemanticVector,
}

impl SentencePhrase {
    #[must_use]
    pub fn imperative(predicate: Arc<VpConstituent>) -> Self {
        let mut vector = predicate.vector().clone();
        Self::mark(&mut vector);
        Self {
            kind: SentenceKind::Imperative,
            subject: None,
            predicate: Some(predicate),
            preps: Vec::new(),
            predicate_adjective: None,
            predicate_nominal: None,
            definition: None,
            vector,
        }
    }

    #[must_use]
    pub fn declarative(subject: Arc<NpConstituent>, predicate: Option<Arc<VpConstituent>>) -> Self {
        let mut vector = subject.vector().clone();
        if let Some(vp) = &predicate {
            vector += vp.vector();
        }
        Self::mark(&mut vector);
        Self {
            kind: SentenceKind::Declarative,
            subject: Some(subject),
            predicate,
            preps: Vec::new(),
            predicate_adjective: None,
            predicate_nominal: None,
            definition: None,
            vector,
        }
    }

    #[must_use]
    pub fn identification(subject: Arc<NpConstituent>) -> Self {
        let mut vector = subject.vector().clone();
        Self::mark(&mut vector);
        Self {
            kind: SentenceKind::Identification,
            subject: Some(subject),
            predicate: None,
            preps: Vec::new(),
            predicate_adjective: None,
            predicate_nominal: None,
            definition: None,
            vector,
        }
    }

    #[must_use]
    pub fn definition(payload: DefinitionPayload) -> Self {
        let mut vector = payload.vector.clone();
        vector.set(Dimension::Naming, 1.0);
        Self::mark(&mut vector);
        Self {
            kind: SentenceKind::Definition,
            subject: None,
            predicate: None,
            preps: Vec::new(),
            predicate_adjective: None,
            predicate_nominal: None,
            definition: Some(payload),
            vector,
        }
    }

    fn mark(vector: &mut SemanticVector) {
        vector.set(Dimension::Sp, 1.0);
        vector.set(Dimension::Vp, 0.0);
        vector.set(Dimension::Np, 0.0);
    }
}

impl Phrase for SentencePhrase {
    fn vector(&self) -> &SemanticVector {
        &self.vector
    }

    fn describe(&self) -> String {
        let inner = match self.kind {
            SentenceKind::Imperative => self
                .predicate
                .as_ref()
                .map(|vp| vp.describe())
                .unwrap_or_default(),
            SentenceKind::Declarative => {
                let subject = self
                    .subject
                    .as_ref()
                    .map(|np| np.describe())
                    .unwrap_or_default();
                match (&self.predicate, &self.predicate_adjective) {
                    (Some(vp), _) => format!("{subject} {}", vp.describe()),
                    (None, Some(adj)) => {
                        format!("{subject} is {}", adj.word().unwrap_or("?"))
                    }
                    (None, None) => subject,
                }
            }
            SentenceKind::Identification => self
                .subject
                .as_ref()
                .map(|np| np.describe())
                .unwrap_or_default(),
            SentenceKind::Definition => self
                .definition
                .as_ref()
                .map(|d| format!("'{}' :=", d.word))
                .unwrap_or_default(),
        };
        format!("SP({inner})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conjunction::Constituent;
    use crate::noun_phrase::NounPhrase;
    use crate::verb_phrase::VerbPhrase;

    #[test]
    fn imperative_carries_vp_semantics() {
        let verb = SemanticVector::from_features(&[Dimension::Verb, Dimension::Create])
            .with_word("draw");
        let vp = Arc::new(Constituent::Single(VerbPhrase::new(verb)));
        let sp = SentencePhrase::imperative(vp);
        assert_eq!(sp.kind, SentenceKind::Imperative);
        assert!(sp.vector.isa(Dimension::Sp));
        assert!(!sp.vector.isa(Dimension::Vp));
        assert!(sp.vector.isa(Dimension::Create));
    }

    #[test]
    fn definition_marks_naming() {
        let payload = DefinitionPayload {
            word: "huge".to_string(),
            vector: SemanticVector::from_values(&[(Dimension::ScaleX, 3.0)]),
        };
        let sp = SentencePhrase::definition(payload);
        assert_eq!(sp.kind, SentenceKind::Definition);
        assert!(sp.vector.isa(Dimension::Naming));
        assert_eq!(sp.definition.as_ref().unwrap().word, "huge");
    }

    #[test]
    fn identification_is_a_bare_np() {
        let mut np = NounPhrase::new();
        np.apply_noun(&SemanticVector::from_features(&[Dimension::Noun]).with_word("cube"));
        let sp = SentencePhrase::identification(Arc::new(Constituent::Single(np)));
        assert_eq!(sp.kind, SentenceKind::Identification);
        assert!(sp.subject.is_some());
        assert!(sp.predicate.is_none());
    }
}
