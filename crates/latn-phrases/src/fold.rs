//! The shared folding skeleton for layers 2–5.
//!
//! Each layer sweeps every hypothesis left-to-right, runs its ATN at each
//! position, lifts conjunction/comma runs of same-kind phrases into
//! coordinations, and splices the parsed phrases back into the stream as
//! opaque phrase tokens.

use crate::AtnResult;
use latn_core::{
    ConjunctionPhrase, Constituent, Coordinator, Dimension, Hypothesis, Phrase, PhraseHandle,
    Replacement, SemanticVector, Token, dedup_hypotheses, sort_hypotheses,
};
use std::sync::Arc;

/// One layer's phrase recognizer: the ATN plus the glue that turns a parsed
/// constituent back into a stream token.
pub trait PhraseRecognizer {
    /// The structured phrase this layer folds.
    type Output: Phrase + Clone + 'static;

    /// Layer number, for provenance descriptions.
    fn layer(&self) -> u8;

    /// Human name of the phrase kind, e.g. `"noun"`.
    fn kind_name(&self) -> &'static str;

    /// The phrase-marker dimension this layer introduces.
    fn marker(&self) -> Dimension;

    /// Attempt to parse one phrase at the front of `tokens`.
    fn parse(&self, tokens: &[Token]) -> AtnResult<(Self::Output, usize)>;

    /// Wrap a finished constituent in a [`PhraseHandle`].
    fn handle(&self, constituent: Arc<Constituent<Self::Output>>) -> PhraseHandle;
}

/// Create the opaque stream token for a folded constituent: the layer's
/// marker dimension, singular/plural agreement, the phrase's merged
/// semantics, a display word, and the back-pointer to the phrase itself.
pub fn nonterminal_token<R: PhraseRecognizer>(
    recognizer: &R,
    constituent: &Arc<Constituent<R::Output>>,
) -> Token {
    let mut vector = SemanticVector::new();
    vector.merge_nonzero(constituent.vector());
    match constituent.as_ref() {
        Constituent::Single(_) => {
            vector.set(Dimension::Singular, 1.0);
        }
        Constituent::Coordinated(_) => {
            vector.set(Dimension::Plural, 1.0);
            vector.set(Dimension::Singular, 0.0);
        }
    }
    vector.set(recognizer.marker(), 1.0);
    vector.word = Some(constituent.describe());

    Token {
        vector,
        phrase: Some(recognizer.handle(Arc::clone(constituent))),
    }
}

/// A folded span: the token positions it covers and the parsed constituent.
struct Fold<P> {
    start: usize,
    end: usize,
    constituent: Arc<Constituent<P>>,
}

/// Fold one layer over ranked hypotheses. Hypotheses in which nothing parses
/// survive unchanged; per-position parse failures are local.
pub fn fold_layer<R: PhraseRecognizer>(
    recognizer: &R,
    hypotheses: &[Hypothesis],
) -> Vec<Hypothesis> {
    let mut folded = Vec::with_capacity(hypotheses.len());

    for hypothesis in hypotheses {
        let sequences = find_sequences(recognizer, &hypothesis.tokens);
        if sequences.is_empty() {
            let mut unchanged = hypothesis.clone();
            unchanged.description = format!(
                "Layer {}: no {} phrases",
                recognizer.layer(),
                recognizer.kind_name()
            );
            unchanged.replacements = Vec::new();
            folded.push(unchanged);
            continue;
        }

        let mut tokens = Vec::new();
        let mut replacements = Vec::new();
        let mut cursor = 0;
        for fold in &sequences {
            while cursor < fold.start {
                tokens.push(hypothesis.tokens[cursor].clone());
                cursor += 1;
            }
            let token = nonterminal_token(recognizer, &fold.constituent);
            replacements.push(Replacement {
                start: fold.start,
                end: fold.end,
                token: token.clone(),
            });
            tokens.push(token);
            cursor = fold.end + 1;
        }
        while cursor < hypothesis.tokens.len() {
            tokens.push(hypothesis.tokens[cursor].clone());
            cursor += 1;
        }

        let mut next = Hypothesis::new(
            tokens,
            hypothesis.confidence,
            format!(
                "Layer {}: {} {} phrase(s)",
                recognizer.layer(),
                sequences.len(),
                recognizer.kind_name()
            ),
        );
        next.replacements = replacements;
        folded.push(next);
    }

    dedup_hypotheses(&mut folded);
    sort_hypotheses(&mut folded);
    folded
}

/// Greedy left-to-right scan: parse a phrase wherever the ATN succeeds, then
/// keep extending it across coordinators while further phrases of the same
/// kind follow.
fn find_sequences<R: PhraseRecognizer>(recognizer: &R, tokens: &[Token]) -> Vec<Fold<R::Output>> {
    let mut sequences = Vec::new();
    let mut position = 0;

    while position < tokens.len() {
        match recognizer.parse(&tokens[position..]) {
            Ok((phrase, consumed)) => {
                let mut constituent = Constituent::Single(phrase);
                let mut cursor = position + consumed;

                loop {
                    let Some((coordinator, skip)) = read_coordinator(&tokens[cursor..]) else {
                        break;
                    };
                    match recognizer.parse(&tokens[cursor + skip..]) {
                        Ok((next_phrase, next_consumed)) => {
                            let extended = match constituent {
                                Constituent::Single(first) => Ok(Constituent::Coordinated(
                                    ConjunctionPhrase::pair(coordinator, first, next_phrase),
                                )),
                                Constituent::Coordinated(mut conj) => {
                                    match conj.try_extend(coordinator, next_phrase) {
                                        Ok(()) => Ok(Constituent::Coordinated(conj)),
                                        Err(_) => Err(Constituent::Coordinated(conj)),
                                    }
                                }
                            };
                            match extended {
                                Ok(next) => {
                                    constituent = next;
                                    cursor += skip + next_consumed;
                                }
                                Err(unchanged) => {
                                    // Mixed coordinator: rewind and stop
                                    // extending; the coordination so far
                                    // stands.
                                    constituent = unchanged;
                                    break;
                                }
                            }
                        }
                        Err(_) => break,
                    }
                }

                sequences.push(Fold {
                    start: position,
                    end: cursor - 1,
                    constituent: Arc::new(constituent),
                });
                position = cursor;
            }
            Err(_) => {
                position += 1;
            }
        }
    }

    sequences
}

/// Read a coordinator at the front of `tokens`: a conjunction/disjunction
/// token, or a comma optionally followed by one. Returns the coordinator (or
/// `None` for a bare comma) and how many tokens it occupies.
fn read_coordinator(tokens: &[Token]) -> Option<(Option<Coordinator>, usize)> {
    let first = tokens.first()?;
    if let Some(coordinator) = Coordinator::from_vector(&first.vector) {
        return Some((Some(coordinator), 1));
    }
    if first.isa(Dimension::Comma) {
        if let Some(second) = tokens.get(1) {
            if let Some(coordinator) = Coordinator::from_vector(&second.vector) {
                return Some((Some(coordinator), 2));
            }
        }
        return Some((None, 1));
    }
    None
}
