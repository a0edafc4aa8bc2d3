// latn-vocab: vocabulary and morphological inflection

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! # latn-vocab
//!
//! The word → vector mapping behind the Layer 1 tokenizer, plus the
//! morphological inflection that lets plural nouns, comparative and
//! superlative adjectives, and verb participles resolve to their base-form
//! entries.
//!
//! Lookup always returns owned copies with the copy's `word` set to the
//! surface form, so mutating a returned vector never touches the stored
//! entry. The mapping itself is mutable at runtime: definition sentences
//! (`'huge' is very large`) feed new entries back in through the host.
//!
//! ## Example
//!
//! ```rust
//! use latn_core::Dimension;
//! use latn_vocab::Vocabulary;
//!
//! let vocab = Vocabulary::builtin();
//! let spheres = vocab.vector_from_word("spheres").unwrap();
//! assert!(spheres.isa(Dimension::Plural));
//! assert_eq!(spheres.word(), Some("spheres"));
//! ```

pub mod builtin;
pub mod inflection;
pub mod vocabulary;

use thiserror::Error;

/// Errors raised by vocabulary lookup.
#[derive(Error, Debug)]
pub enum VocabError {
    /// The word resolved to nothing, directly or through inflection. The
    /// tokenizer catches this and substitutes an `unknown` token.
    #[error("unknown token: {0}")]
    UnknownToken(String),
}

/// Result type for vocabulary operations.
pub type VocabResult<T> = Result<T, VocabError>;

pub use inflection::{Degree, VerbInflection, adjective_candidates, singularize, verb_candidates};
pub use vocabulary::Vocabulary;
