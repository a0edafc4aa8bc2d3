//! Layer 5: sentence recognition.
//!
//! Dispatches on the first token: a VP token opens an imperative, an NP
//! token opens a declarative (copular or verbal), a bare NP alone is an
//! identification. A copular sentence whose subject is a bare quoted proper
//! noun is a vocabulary definition: `'huge' is very large`.

use crate::atn::Atn;
use crate::fold::PhraseRecognizer;
use crate::{AtnError, AtnResult};
use latn_core::{
    Constituent, DefinitionPayload, Dimension, NounPhrase, NpConstituent, PhraseHandle,
    SemanticVector, SentencePhrase, Token,
};
use std::sync::Arc;

/// Builder threaded through the sentence ATN.
pub struct SpBuilder {
    subject: Option<Arc<NpConstituent>>,
    predicate: Option<Arc<latn_core::VpConstituent>>,
    preps: Vec<Arc<latn_core::PpConstituent>>,
    predicate_adjective: Option<SemanticVector>,
    predicate_nominal: Option<Arc<NpConstituent>>,
    saw_copula: bool,
    pending_adverb: f32,
}

impl Default for SpBuilder {
    fn default() -> Self {
        Self {
            subject: None,
            predicate: None,
            preps: Vec::new(),
            predicate_adjective: None,
            predicate_nominal: None,
            saw_copula: false,
            pending_adverb: 1.0,
        }
    }
}

impl SpBuilder {
    fn absorb_adjective(&mut self, token: &Token) {
        let mut adj = token.vector.clone();
        adj.scale_dims(Dimension::ADJECTIVE_SEMANTICS, self.pending_adverb);
        self.pending_adverb = 1.0;
        match &mut self.predicate_adjective {
            Some(existing) => *existing += &adj,
            None => self.predicate_adjective = Some(adj),
        }
    }

    fn finish(mut self) -> Option<SentencePhrase> {
        if let Some(subject) = self.subject.take() {
            if self.saw_copula {
                if let Some(word) = definition_word(&subject) {
                    let vector = self.definition_vector()?;
                    return Some(SentencePhrase::definition(DefinitionPayload {
                        word,
                        vector,
                    }));
                }
                let mut sentence = SentencePhrase::declarative(subject, None);
                sentence.predicate_adjective = self.predicate_adjective;
                sentence.predicate_nominal = self.predicate_nominal;
                return Some(sentence);
            }
            if self.predicate.is_some() {
                let mut sentence = SentencePhrase::declarative(subject, self.predicate);
                sentence.preps = self.preps;
                return Some(sentence);
            }
            let mut sentence = SentencePhrase::identification(subject);
            sentence.preps = self.preps;
            return Some(sentence);
        }
        if let Some(predicate) = self.predicate {
            let mut sentence = SentencePhrase::imperative(predicate);
            sentence.preps = self.preps;
            return Some(sentence);
        }
        None
    }

    /// The vector stored under a defined word: the accumulated right-hand
    /// semantics with its part-of-speech membership normalized.
    fn definition_vector(&self) -> Option<SemanticVector> {
        if let Some(adj) = &self.predicate_adjective {
            let mut v = adj.clone();
            v.word = None;
            v.set(Dimension::Adj, 1.0);
            return Some(v);
        }
        if let Some(nominal) = &self.predicate_nominal {
            let mut v = SemanticVector::new();
            v.merge_nonzero(latn_core::Phrase::vector(nominal.as_ref()));
            v.set(Dimension::Np, 0.0);
            v.set(Dimension::So, 0.0);
            v.set(Dimension::Det, 0.0);
            v.set(Dimension::Def, 0.0);
            v.set(Dimension::Number, 0.0);
            v.set(Dimension::Noun, 1.0);
            return Some(v);
        }
        None
    }
}

/// A definition subject is a bare quoted proper noun: no determiner, no
/// adjectives, nothing but the quoted word.
fn definition_word(subject: &Arc<NpConstituent>) -> Option<String> {
    match subject.as_ref() {
        Constituent::Single(np) => is_bare_proper(np).then(|| np.proper_noun.clone())?,
        Constituent::Coordinated(_) => None,
    }
}

fn is_bare_proper(np: &NounPhrase) -> bool {
    np.proper_noun.is_some() && np.determiner.is_none() && np.adjectives.is_empty()
}

fn build_sp_atn() -> Atn<SpBuilder> {
    let mut atn = Atn::new();
    let start = atn.state("sp:start", false);
    let imperative = atn.state("sp:imperative", true);
    let subject = atn.state("sp:subject", true);
    let declarative = atn.state("sp:declarative", true);
    let copula = atn.state("sp:copula", false);
    let predicated = atn.state("sp:predicated", true);

    atn.arc(
        start,
        imperative,
        |_, t: &Token| t.verb_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.predicate = t.verb_phrase().cloned();
            Ok(())
        },
    );
    atn.arc(
        start,
        subject,
        |_, t: &Token| t.noun_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.subject = t.noun_phrase().cloned();
            Ok(())
        },
    );

    atn.arc(
        imperative,
        imperative,
        |_, t: &Token| t.prep_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.preps.push(t.prep_phrase().cloned().ok_or(AtnError::Dead)?);
            Ok(())
        },
    );

    atn.arc(
        subject,
        copula,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Tobe),
        |b: &mut SpBuilder, _| {
            b.saw_copula = true;
            Ok(())
        },
    );
    // Top-level PPs of a bare identification: "the box above the table".
    atn.arc(
        subject,
        subject,
        |_, t: &Token| t.prep_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.preps.push(t.prep_phrase().cloned().ok_or(AtnError::Dead)?);
            Ok(())
        },
    );
    atn.arc(
        subject,
        declarative,
        |_, t: &Token| t.verb_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.predicate = t.verb_phrase().cloned();
            Ok(())
        },
    );

    atn.arc(
        declarative,
        declarative,
        |_, t: &Token| t.prep_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.preps.push(t.prep_phrase().cloned().ok_or(AtnError::Dead)?);
            Ok(())
        },
    );

    atn.arc(
        copula,
        predicated,
        |_, t: &Token| t.noun_phrase().is_some(),
        |b: &mut SpBuilder, t| {
            b.predicate_nominal = t.noun_phrase().cloned();
            Ok(())
        },
    );
    atn.arc(
        copula,
        copula,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Adv),
        |b: &mut SpBuilder, t| {
            b.pending_adverb *= t.vector.get(Dimension::Adverb);
            Ok(())
        },
    );
    atn.arc(
        copula,
        predicated,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Adj),
        |b: &mut SpBuilder, t| {
            b.absorb_adjective(t);
            Ok(())
        },
    );

    // Further adjectives, optionally joined by a coordinator: "blue and
    // green".
    atn.arc(
        predicated,
        predicated,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Adj),
        |b: &mut SpBuilder, t| {
            b.absorb_adjective(t);
            Ok(())
        },
    );
    atn.arc(
        predicated,
        copula,
        |b: &SpBuilder, t: &Token| {
            b.predicate_nominal.is_none()
                && t.phrase.is_none()
                && (t.isa(Dimension::Conj) || t.isa(Dimension::Disj))
        },
        |_, _| Ok(()),
    );

    atn
}

/// The Layer 5 recognizer.
pub struct SpRecognizer {
    atn: Atn<SpBuilder>,
}

impl SpRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self { atn: build_sp_atn() }
    }
}

impl Default for SpRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseRecognizer for SpRecognizer {
    type Output = SentencePhrase;

    fn layer(&self) -> u8 {
        5
    }

    fn kind_name(&self) -> &'static str {
        "sentence"
    }

    fn marker(&self) -> Dimension {
        Dimension::Sp
    }

    fn parse(&self, tokens: &[Token]) -> AtnResult<(SentencePhrase, usize)> {
        let (builder, consumed) = self.atn.run(tokens, SpBuilder::default())?;
        let sentence = builder.finish().ok_or(AtnError::NoMatch {
            state: "sp:start",
            position: 0,
        })?;
        Ok((sentence, consumed))
    }

    fn handle(&self, constituent: Arc<Constituent<SentencePhrase>>) -> PhraseHandle {
        PhraseHandle::Sp(constituent)
    }
}
