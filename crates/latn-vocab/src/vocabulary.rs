//! The word → vector mapping, with inflection-aware lookup.

use crate::inflection::{self, VerbInflection};
use crate::{VocabError, VocabResult};
use indexmap::IndexMap;
use latn_core::{Dimension, SemanticVector};
use serde::{Deserialize, Serialize};

/// A mutable mapping from (possibly multi-word) surface keys to semantic
/// vectors.
///
/// Keys are stored lowercased; lookup is case-insensitive and always returns
/// a copy with the copy's `word` set to the surface form that was looked up,
/// so callers own what they get back. Insertion order is preserved, which
/// keeps ranking ties deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    entries: IndexMap<String, SemanticVector>,
}

impl Vocabulary {
    /// An empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry. Multi-word keys are allowed and drive the
    /// Layer 1 compound matcher.
    pub fn insert(&mut self, word: &str, vector: SemanticVector) {
        let key = word.to_lowercase();
        tracing::debug!(word = %key, "vocabulary entry added");
        self.entries.insert(key, vector);
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_lowercase())
    }

    /// Borrow the stored vector for a key, without inflection.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&SemanticVector> {
        self.entries.get(&word.to_lowercase())
    }

    /// Copy-on-lookup without inflection: the returned vector's `word` is the
    /// surface form that was asked for.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<SemanticVector> {
        self.get(word).map(|stored| {
            let mut copy = stored.clone();
            copy.word = Some(word.to_string());
            copy
        })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word count of the longest key; bounds the Layer 1 compound window.
    #[must_use]
    pub fn max_key_words(&self) -> usize {
        self.entries
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(1)
    }

    /// Resolve a surface word to an owned vector, trying in order: direct
    /// lookup, plural-noun stripping, comparative/superlative adjective
    /// stripping (with the degree boost applied to the semantic dimensions),
    /// and verb participle stripping.
    pub fn vector_from_word(&self, word: &str) -> VocabResult<SemanticVector> {
        if let Some(found) = self.lookup(word) {
            return Ok(found);
        }

        if let Some(singular) = inflection::singularize(word) {
            if let Some(stored) = self.get(&singular) {
                if stored.isa(Dimension::Noun) {
                    let mut v = stored.clone();
                    v.word = Some(word.to_string());
                    v.set(Dimension::Plural, 1.0);
                    v.set(Dimension::Singular, 0.0);
                    return Ok(v);
                }
            }
        }

        if let Some((candidates, degree)) = inflection::adjective_candidates(word) {
            for base in &candidates {
                if let Some(stored) = self.get(base) {
                    if stored.isa(Dimension::Adj) {
                        let mut v = stored.clone();
                        v.word = Some(word.to_string());
                        v.scale_dims(Dimension::ADJECTIVE_SEMANTICS, degree.boost());
                        match degree {
                            inflection::Degree::Comparative => v.set(Dimension::Comp, 1.0),
                            inflection::Degree::Superlative => v.set(Dimension::Super, 1.0),
                        }
                        return Ok(v);
                    }
                }
            }
        }

        if let Some((candidates, verb_inflection)) = inflection::verb_candidates(word) {
            for base in &candidates {
                if let Some(stored) = self.get(base) {
                    if stored.isa(Dimension::Verb) || stored.isa(Dimension::Tobe) {
                        let mut v = stored.clone();
                        v.word = Some(word.to_string());
                        let dim = match verb_inflection {
                            VerbInflection::Past => Dimension::VerbPast,
                            VerbInflection::PastParticiple => Dimension::VerbPastPart,
                            VerbInflection::PresentParticiple => Dimension::VerbPresentPart,
                        };
                        v.set(dim, 1.0);
                        return Ok(v);
                    }
                }
            }
        }

        Err(VocabError::UnknownToken(word.to_string()))
    }
}
