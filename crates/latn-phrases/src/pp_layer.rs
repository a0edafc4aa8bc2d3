//! Layer 3: prepositional phrase recognition.
//!
//! Grammar: `prep NP`. Deliberately trivial — by the time this layer runs,
//! every noun phrase is a single opaque token.

use crate::atn::Atn;
use crate::fold::PhraseRecognizer;
use crate::{AtnError, AtnResult};
use latn_core::{
    Constituent, Dimension, NpConstituent, PhraseHandle, PpConstituent, PrepPhrase, SemanticVector,
    Token,
};
use std::sync::Arc;

/// Builder threaded through the PP ATN.
#[derive(Default)]
pub struct PpBuilder {
    preposition: Option<SemanticVector>,
    object: Option<Arc<NpConstituent>>,
}

fn build_pp_atn() -> Atn<PpBuilder> {
    let mut atn = Atn::new();
    let start = atn.state("pp:start", false);
    let have_prep = atn.state("pp:have-preposition", false);
    let done = atn.state("pp:done", true);

    atn.arc(
        start,
        have_prep,
        |_, t: &Token| t.phrase.is_none() && t.isa(Dimension::Prep),
        |b: &mut PpBuilder, t| {
            b.preposition = Some(t.vector.clone());
            Ok(())
        },
    );
    atn.arc(
        have_prep,
        done,
        |_, t: &Token| t.noun_phrase().is_some(),
        |b: &mut PpBuilder, t| {
            b.object = t.noun_phrase().cloned();
            Ok(())
        },
    );

    atn
}

/// The Layer 3 recognizer.
pub struct PpRecognizer {
    atn: Atn<PpBuilder>,
}

impl PpRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self { atn: build_pp_atn() }
    }
}

impl Default for PpRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseRecognizer for PpRecognizer {
    type Output = PrepPhrase;

    fn layer(&self) -> u8 {
        3
    }

    fn kind_name(&self) -> &'static str {
        "prepositional"
    }

    fn marker(&self) -> Dimension {
        Dimension::Pp
    }

    fn parse(&self, tokens: &[Token]) -> AtnResult<(PrepPhrase, usize)> {
        let (builder, consumed) = self.atn.run(tokens, PpBuilder::default())?;
        let preposition = builder.preposition.ok_or(AtnError::NoMatch {
            state: "pp:start",
            position: 0,
        })?;
        let object = builder.object.ok_or(AtnError::NoMatch {
            state: "pp:have-preposition",
            position: 1,
        })?;
        Ok((PrepPhrase::new(preposition, object), consumed))
    }

    fn handle(&self, constituent: Arc<Constituent<PrepPhrase>>) -> PhraseHandle {
        PhraseHandle::Pp(constituent)
    }
}

/// Rebuild the stream token for a (possibly re-scored) PP constituent.
#[must_use]
pub fn pp_token(constituent: &Arc<PpConstituent>) -> Token {
    crate::fold::nonterminal_token(&PpRecognizer::new(), constituent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold::fold_layer;
    use crate::np_layer::NpRecognizer;
    use latn_core::Phrase;
    use latn_lexer::tokenize_layer1;
    use latn_vocab::Vocabulary;

    fn layer2(input: &str) -> Vec<latn_core::Hypothesis> {
        let vocab = Vocabulary::builtin();
        let hyps = tokenize_layer1(input, &vocab).unwrap();
        fold_layer(&NpRecognizer::new(), &hyps)
    }

    #[test]
    fn prep_plus_np_token_folds() {
        let hyps = layer2("above the table");
        let (pp, consumed) = PpRecognizer::new().parse(&hyps[0].tokens).unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(pp.preposition_word(), Some("above"));
        assert_eq!(pp.describe(), "PP(above NP(the table))");
    }

    #[test]
    fn vector_literal_object() {
        let hyps = layer2("to [3,4,5]");
        let (pp, _) = PpRecognizer::new().parse(&hyps[0].tokens).unwrap();
        assert!(pp.has_literal_object());
        assert_eq!(pp.vector.get(Dimension::LocY), 4.0);
    }

    #[test]
    fn compound_preposition() {
        let hyps = layer2("right of the pyramid");
        let best = &hyps[0];
        let (pp, _) = PpRecognizer::new().parse(&best.tokens).unwrap();
        assert_eq!(pp.preposition_word(), Some("right of"));
        assert_eq!(pp.vector.get(Dimension::DirX), 1.0);
    }

    #[test]
    fn bare_preposition_is_no_pp() {
        let hyps = layer2("above");
        assert!(PpRecognizer::new().parse(&hyps[0].tokens).is_err());
    }

    #[test]
    fn pp_layer_folds_within_hypotheses() {
        let hyps = layer2("move the box above the table");
        let folded = fold_layer(&PpRecognizer::new(), &hyps);
        let best = &folded[0];
        let pp_tokens: Vec<_> = best
            .tokens
            .iter()
            .filter(|t| t.isa(Dimension::Pp))
            .collect();
        assert_eq!(pp_tokens.len(), 1);
        assert_eq!(best.replacements.len(), 1);
        assert!(pp_tokens[0].prep_phrase().is_some());
    }
}
