//! Layer 4: verb phrase recognition.
//!
//! Grammar: `verb NP? (PP | adjective-complement)*`. NP and PP operands are
//! opaque tokens from the layers below; adjective complements (`bigger`,
//! `smaller`) may be intensified by a preceding adverb.

use crate::atn::Atn;
use crate::fold::PhraseRecognizer;
use crate::{AtnError, AtnResult};
use latn_core::{
    Constituent, Dimension, PhraseHandle, Token, VerbPhrase, VpConstituent,
};
use std::sync::Arc;

/// Builder threaded through the VP ATN.
pub struct VpBuilder {
    vp: Option<VerbPhrase>,
    pending_adverb: f32,
}

impl Default for VpBuilder {
    fn default() -> Self {
        Self {
            vp: None,
            pending_adverb: 1.0,
        }
    }
}

fn build_vp_atn() -> Atn<VpBuilder> {
    let mut atn = Atn::new();
    let start = atn.state("vp:start", false);
    let body = atn.state("vp:body", true);

    atn.arc(
        start,
        body,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Verb),
        |b: &mut VpBuilder, t| {
            b.vp = Some(VerbPhrase::new(t.vector.clone()));
            Ok(())
        },
    );

    // Direct object: the first NP token after the verb.
    atn.arc(
        body,
        body,
        |b: &VpBuilder, t: &Token| {
            t.noun_phrase().is_some() && b.vp.as_ref().is_some_and(|vp| vp.object.is_none())
        },
        |b: &mut VpBuilder, t| {
            let object = t.noun_phrase().cloned().ok_or(AtnError::Dead)?;
            b.vp.as_mut().ok_or(AtnError::Dead)?.set_object(object);
            Ok(())
        },
    );

    // PP adjuncts.
    atn.arc(
        body,
        body,
        |_, t: &Token| t.prep_phrase().is_some(),
        |b: &mut VpBuilder, t| {
            let pp = t.prep_phrase().cloned().ok_or(AtnError::Dead)?;
            b.vp.as_mut().ok_or(AtnError::Dead)?.add_prep(pp);
            Ok(())
        },
    );

    // Adverb intensifiers ahead of adjective complements.
    atn.arc(
        body,
        body,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Adv),
        |b: &mut VpBuilder, t| {
            b.pending_adverb *= t.vector.get(Dimension::Adverb);
            Ok(())
        },
    );

    // Adjective complements: "make it bigger".
    atn.arc(
        body,
        body,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Adj) && !t.isa(Dimension::Noun),
        |b: &mut VpBuilder, t| {
            let mut adj = t.vector.clone();
            adj.scale_dims(Dimension::ADJECTIVE_SEMANTICS, b.pending_adverb);
            b.pending_adverb = 1.0;
            b.vp.as_mut().ok_or(AtnError::Dead)?.add_adjective_complement(adj);
            Ok(())
        },
    );

    atn
}

/// The Layer 4 recognizer.
pub struct VpRecognizer {
    atn: Atn<VpBuilder>,
}

impl VpRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self { atn: build_vp_atn() }
    }
}

impl Default for VpRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseRecognizer for VpRecognizer {
    type Output = VerbPhrase;

    fn layer(&self) -> u8 {
        4
    }

    fn kind_name(&self) -> &'static str {
        "verb"
    }

    fn marker(&self) -> Dimension {
        Dimension::Vp
    }

    fn parse(&self, tokens: &[Token]) -> AtnResult<(VerbPhrase, usize)> {
        let (builder, consumed) = self.atn.run(tokens, VpBuilder::default())?;
        let mut vp = builder.vp.ok_or(AtnError::NoMatch {
            state: "vp:start",
            position: 0,
        })?;
        vp.finish();
        Ok((vp, consumed))
    }

    fn handle(&self, constituent: Arc<Constituent<VerbPhrase>>) -> PhraseHandle {
        PhraseHandle::Vp(constituent)
    }
}

/// Rebuild the stream token for a VP constituent.
#[must_use]
pub fn vp_token(constituent: &Arc<VpConstituent>) -> Token {
    crate::fold::nonterminal_token(&VpRecognizer::new(), constituent)
}
