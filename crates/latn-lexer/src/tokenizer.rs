//! Layer 1: multi-hypothesis lexical tokenization.
//!
//! Word runs are matched against the vocabulary longest-first. A compound
//! match branches into its split alternatives only when a genuine ambiguity
//! exists — some proper prefix or constituent word of the compound resolves
//! on its own. Unambiguous input therefore yields exactly one hypothesis.

use crate::scanner::{Lexeme, scan};
use crate::LexerResult;
use latn_core::{Hypothesis, Token, dedup_hypotheses, sort_hypotheses};
use latn_vocab::Vocabulary;

/// Confidence factor of a known single word.
const WORD_FACTOR: f32 = 0.9;
/// Confidence factor of a compound token; flat, so a compound always ranks
/// strictly above the product of its split words.
const COMPOUND_FACTOR: f32 = 0.95;
/// Confidence factor of an unresolvable word.
const UNKNOWN_FACTOR: f32 = 0.6;

/// Tokenize `input` into ranked hypotheses.
///
/// Empty (or whitespace-only) input produces an empty list; any other input
/// produces at least one hypothesis, with unresolvable words marked
/// `unknown` rather than failing the parse.
pub fn tokenize_layer1(input: &str, vocabulary: &Vocabulary) -> LexerResult<Vec<Hypothesis>> {
    let lexemes = scan(input)?;
    if lexemes.is_empty() {
        return Ok(Vec::new());
    }

    // Alternative token sequences with their confidence products.
    let mut branches: Vec<(Vec<Token>, f32, usize)> = vec![(Vec::new(), 1.0, 0)];

    let mut idx = 0;
    while idx < lexemes.len() {
        match &lexemes[idx] {
            Lexeme::Number(value) => {
                for (tokens, _, _) in &mut branches {
                    tokens.push(Token::number(*value));
                }
                idx += 1;
            }
            Lexeme::VectorLiteral(x, y, z) => {
                for (tokens, _, _) in &mut branches {
                    tokens.push(Token::vector_literal(*x, *y, *z));
                }
                idx += 1;
            }
            Lexeme::Quoted(contents) => {
                for (tokens, _, _) in &mut branches {
                    tokens.push(Token::quoted(contents));
                }
                idx += 1;
            }
            Lexeme::Comma => {
                for (tokens, _, _) in &mut branches {
                    tokens.push(Token::comma());
                }
                idx += 1;
            }
            Lexeme::Word(_) => {
                // Take the maximal run of consecutive words and expand its
                // segmentations.
                let start = idx;
                while idx < lexemes.len() && matches!(lexemes[idx], Lexeme::Word(_)) {
                    idx += 1;
                }
                let words: Vec<&str> = lexemes[start..idx]
                    .iter()
                    .map(|l| match l {
                        Lexeme::Word(w) => w.as_str(),
                        _ => unreachable!("run contains only words"),
                    })
                    .collect();
                let segmentations = expand_word_run(&words, vocabulary);

                let mut next = Vec::with_capacity(branches.len() * segmentations.len());
                for (tokens, confidence, compounds) in &branches {
                    for (segment, factor, segment_compounds) in &segmentations {
                        let mut merged = tokens.clone();
                        merged.extend(segment.iter().cloned());
                        next.push((
                            merged,
                            confidence * factor,
                            compounds + segment_compounds,
                        ));
                    }
                }
                branches = next;
            }
        }
    }

    let mut hypotheses: Vec<Hypothesis> = branches
        .into_iter()
        .map(|(tokens, confidence, compounds)| {
            let description = format!(
                "Layer 1: {} tokens, {} compound(s)",
                tokens.len(),
                compounds
            );
            Hypothesis::new(tokens, confidence, description)
        })
        .collect();

    dedup_hypotheses(&mut hypotheses);
    sort_hypotheses(&mut hypotheses);
    tracing::debug!(input, hypotheses = hypotheses.len(), "layer 1 tokenization");
    Ok(hypotheses)
}

/// All segmentations of a run of adjacent words, as
/// `(tokens, confidence factor, compound count)` triples. Compound-first
/// ordering keeps split alternatives behind their compound on ties.
fn expand_word_run(words: &[&str], vocabulary: &Vocabulary) -> Vec<(Vec<Token>, f32, usize)> {
    if words.is_empty() {
        return vec![(Vec::new(), 1.0, 0)];
    }

    let window = vocabulary.max_key_words().min(words.len());
    let mut heads: Vec<(Token, f32, usize, usize)> = Vec::new();

    // Compound matches, longest first.
    for n in (2..=window).rev() {
        let phrase = words[..n].join(" ");
        if let Some(vector) = vocabulary.lookup(&phrase) {
            heads.push((Token::word(vector), COMPOUND_FACTOR, 1, n));
        }
    }

    // The longest compound commits without alternatives unless some proper
    // prefix or constituent of it is independently known.
    let committed = match heads.first() {
        Some((_, _, _, longest)) => !is_genuine_ambiguity(&words[..*longest], vocabulary),
        None => false,
    };

    if !committed {
        let token = match vocabulary.vector_from_word(words[0]) {
            Ok(vector) => (Token::word(vector), WORD_FACTOR, 0, 1),
            Err(_) => (Token::unknown(words[0]), UNKNOWN_FACTOR, 0, 1),
        };
        heads.push(token);
    }

    let mut segmentations = Vec::new();
    for (token, factor, compounds, consumed) in heads {
        for (rest, rest_factor, rest_compounds) in expand_word_run(&words[consumed..], vocabulary) {
            let mut tokens = Vec::with_capacity(rest.len() + 1);
            tokens.push(token.clone());
            tokens.extend(rest);
            segmentations.push((tokens, factor * rest_factor, compounds + rest_compounds));
        }
    }
    segmentations
}

/// A compound is a genuine ambiguity only when some proper prefix of it, or
/// some constituent word, independently resolves in the vocabulary.
fn is_genuine_ambiguity(compound: &[&str], vocabulary: &Vocabulary) -> bool {
    for end in 2..compound.len() {
        if vocabulary.contains(&compound[..end].join(" ")) {
            return true;
        }
    }
    compound
        .iter()
        .any(|word| vocabulary.vector_from_word(word).is_ok())
}
