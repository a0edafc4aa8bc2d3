//! Layer 2: noun phrase recognition.
//!
//! Grammar: `det? adv* adj* noun`, a bare pronoun, a `[x,y,z]` literal, a
//! quoted identifier (proper noun), or `det quoted` (type designation).
//! Adverbs multiply into the following adjective's intensity.

use crate::atn::Atn;
use crate::fold::PhraseRecognizer;
use crate::AtnResult;
use latn_core::{Constituent, Dimension, NounPhrase, NpConstituent, PhraseHandle, Token};
use std::sync::Arc;

/// Builder threaded through the NP ATN.
pub struct NpBuilder {
    np: NounPhrase,
    pending_adverb: f32,
}

impl Default for NpBuilder {
    fn default() -> Self {
        Self {
            np: NounPhrase::new(),
            pending_adverb: 1.0,
        }
    }
}

/// True for raw word tokens (not folded phrase tokens) carrying `dim`.
fn word(dim: Dimension) -> impl Fn(&NpBuilder, &Token) -> bool {
    move |_, t| t.phrase.is_none() && t.isa(dim)
}

fn build_np_atn() -> Atn<NpBuilder> {
    let mut atn = Atn::new();
    let start = atn.state("np:start", false);
    let after_det = atn.state("np:after-determiner", false);
    let mods = atn.state("np:modifiers", false);
    let done = atn.state("np:done", true);

    let consume_det = |b: &mut NpBuilder, t: &Token| {
        b.np.apply_determiner(&t.vector);
        Ok(())
    };
    let consume_adv = |b: &mut NpBuilder, t: &Token| {
        b.pending_adverb *= t.vector.get(Dimension::Adverb);
        b.np.apply_adverb(&t.vector);
        Ok(())
    };
    let consume_adj = |b: &mut NpBuilder, t: &Token| {
        b.np.apply_adjective(&t.vector, b.pending_adverb);
        b.pending_adverb = 1.0;
        Ok(())
    };
    let consume_noun = |b: &mut NpBuilder, t: &Token| {
        b.np.apply_noun(&t.vector);
        Ok(())
    };
    let consume_quoted = |b: &mut NpBuilder, t: &Token| {
        b.np.apply_quoted(&t.vector);
        Ok(())
    };

    // Most specific first: pronouns, literals and quoted identifiers are
    // complete NPs on their own.
    atn.arc(start, done, word(Dimension::Pronoun), |b, t| {
        b.np.apply_pronoun(&t.vector);
        Ok(())
    });
    atn.arc(start, done, word(Dimension::VectorLit), |b, t| {
        b.np.apply_vector_literal(&t.vector);
        Ok(())
    });
    atn.arc(start, done, word(Dimension::Quoted), consume_quoted);
    atn.arc(start, after_det, word(Dimension::Det), consume_det);
    atn.arc(start, mods, word(Dimension::Adv), consume_adv);
    // A token that is both adjective and noun reads as the head noun.
    atn.arc(
        start,
        mods,
        |b: &NpBuilder, t: &Token| word(Dimension::Adj)(b, t) && !t.isa(Dimension::Noun),
        consume_adj,
    );
    atn.arc(start, done, word(Dimension::Noun), consume_noun);

    atn.arc(after_det, done, word(Dimension::Quoted), consume_quoted);
    atn.arc(after_det, mods, word(Dimension::Adv), consume_adv);
    atn.arc(
        after_det,
        mods,
        |b: &NpBuilder, t: &Token| word(Dimension::Adj)(b, t) && !t.isa(Dimension::Noun),
        consume_adj,
    );
    atn.arc(after_det, done, word(Dimension::Noun), consume_noun);

    atn.arc(mods, mods, word(Dimension::Adv), consume_adv);
    atn.arc(
        mods,
        mods,
        |b: &NpBuilder, t: &Token| word(Dimension::Adj)(b, t) && !t.isa(Dimension::Noun),
        consume_adj,
    );
    atn.arc(mods, done, word(Dimension::Noun), consume_noun);

    atn
}

/// The Layer 2 recognizer.
pub struct NpRecognizer {
    atn: Atn<NpBuilder>,
}

impl NpRecognizer {
    #[must_use]
    pub fn new() -> Self {
        Self { atn: build_np_atn() }
    }
}

impl Default for NpRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseRecognizer for NpRecognizer {
    type Output = NounPhrase;

    fn layer(&self) -> u8 {
        2
    }

    fn kind_name(&self) -> &'static str {
        "noun"
    }

    fn marker(&self) -> Dimension {
        Dimension::Np
    }

    fn parse(&self, tokens: &[Token]) -> AtnResult<(NounPhrase, usize)> {
        let (builder, consumed) = self.atn.run(tokens, NpBuilder::default())?;
        Ok((builder.np, consumed))
    }

    fn handle(&self, constituent: Arc<Constituent<NounPhrase>>) -> PhraseHandle {
        PhraseHandle::Np(constituent)
    }
}

/// Rebuild the stream token for a (possibly re-grounded) NP constituent.
#[must_use]
pub fn np_token(constituent: &Arc<NpConstituent>) -> Token {
    crate::fold::nonterminal_token(&NpRecognizer::new(), constituent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use latn_core::Phrase;
    use latn_lexer::tokenize_layer1;
    use latn_vocab::Vocabulary;

    fn parse(input: &str) -> Option<(NounPhrase, usize)> {
        let vocab = Vocabulary::builtin();
        let hyp = tokenize_layer1(input, &vocab).unwrap().remove(0);
        NpRecognizer::new().parse(&hyp.tokens).ok()
    }

    #[test]
    fn det_adj_noun() {
        let (np, consumed) = parse("the red box").unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(np.head_noun(), Some("box"));
        assert_eq!(np.vector.get(Dimension::Red), 1.0);
        assert!(np.vector.isa(Dimension::Def));
    }

    #[test]
    fn bare_noun() {
        let (np, consumed) = parse("sphere").unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(np.head_noun(), Some("sphere"));
    }

    #[test]
    fn adverb_scales_following_adjective() {
        let (np, _) = parse("a very large cube").unwrap();
        // large is 2.0 per axis, very is 1.5
        assert!((np.vector.get(Dimension::ScaleX) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn stacked_adverbs_compose_multiplicatively() {
        let (np, _) = parse("a very very large cube").unwrap();
        assert!((np.vector.get(Dimension::ScaleX) - 4.5).abs() < 1e-6);
    }

    #[test]
    fn numeric_determiner_fills_scale_factor() {
        let (np, _) = parse("three red spheres").unwrap();
        assert_eq!(np.scale_factor, Some(3.0));
        assert!(np.vector.isa(Dimension::Plural));
    }

    #[test]
    fn pronoun_is_a_complete_np() {
        let (np, consumed) = parse("it").unwrap();
        assert_eq!(consumed, 1);
        assert!(np.pronoun.is_some());
    }

    #[test]
    fn vector_literal_is_a_complete_np() {
        let (np, consumed) = parse("[3,4,5]").unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(np.head_noun(), Some("vector"));
        assert_eq!(np.vector.get(Dimension::LocZ), 5.0);
    }

    #[test]
    fn quoted_after_determiner_is_a_type_designation() {
        let (np, consumed) = parse("a 'sun'").unwrap();
        assert_eq!(consumed, 2);
        assert_eq!(np.head_noun(), Some("sun"));
        assert!(np.proper_noun.is_none());
    }

    #[test]
    fn bare_quoted_is_a_proper_noun() {
        let (np, consumed) = parse("'Charlie'").unwrap();
        assert_eq!(consumed, 1);
        assert_eq!(np.proper_noun.as_deref(), Some("Charlie"));
    }

    #[test]
    fn verb_initial_input_is_no_np() {
        let vocab = Vocabulary::builtin();
        let hyp = tokenize_layer1("draw a box", &vocab).unwrap().remove(0);
        assert!(NpRecognizer::new().parse(&hyp.tokens).is_err());
    }

    #[test]
    fn dangling_modifier_is_no_np() {
        assert!(parse("the very large").is_none());
    }

    #[test]
    fn np_token_is_opaque_and_described() {
        let (np, _) = parse("the red box").unwrap();
        let constituent = Arc::new(Constituent::Single(np));
        let token = np_token(&constituent);
        assert!(token.isa(Dimension::Np));
        assert!(token.isa(Dimension::Singular));
        assert_eq!(token.surface(), Some("NP(the red box)"));
        assert_eq!(
            token.noun_phrase().unwrap().describe(),
            "NP(the red box)"
        );
    }
}
