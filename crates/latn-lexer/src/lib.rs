// latn-lexer: Layer 1 multi-hypothesis lexical tokenization

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! # latn-lexer
//!
//! Layer 1 of the latn pipeline: segment a raw command string into ranked
//! tokenization hypotheses.
//!
//! The scanner first decomposes the string into surface lexemes (words,
//! numbers, `[x,y,z]` vector literals, quoted spans, commas). Word runs are
//! then matched against the vocabulary, exploring multi-word compounds and
//! morphological inflection; where a compound genuinely competes with its
//! constituent words, one hypothesis per reading is emitted, compound
//! readings ranked first.
//!
//! ## Example
//!
//! ```rust
//! use latn_lexer::tokenize_layer1;
//! use latn_vocab::Vocabulary;
//!
//! let vocab = Vocabulary::builtin();
//! let hypotheses = tokenize_layer1("move the box to [3,4,5]", &vocab).unwrap();
//! assert_eq!(hypotheses.len(), 1);
//! assert_eq!(
//!     hypotheses[0].words(),
//!     ["move", "the", "box", "to", "[3,4,5]"]
//! );
//! ```

pub mod scanner;
pub mod tokenizer;

use thiserror::Error;

/// Errors raised while scanning the surface string. These are input errors,
/// not per-hypothesis conditions: a malformed literal fails the whole scan.
#[derive(Error, Debug)]
pub enum LexerError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("unterminated quote starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("malformed number '{text}' at position {position}")]
    MalformedNumber { text: String, position: usize },

    #[error("malformed vector literal starting at position {position}")]
    MalformedVectorLiteral { position: usize },
}

/// Result type for lexer operations.
pub type LexerResult<T> = Result<T, LexerError>;

pub use scanner::{Lexeme, scan};
pub use tokenizer::tokenize_layer1;
