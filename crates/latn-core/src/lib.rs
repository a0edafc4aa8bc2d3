// latn-core: core semantic types for the latn workspace

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! # latn-core
//!
//! Core types for latn — a layered, ambiguity-preserving parser that turns
//! natural-language commands into scene-grounded sentence structures.
//!
//! This crate provides the shared data model every layer speaks:
//!
//! - [`Dimension`] / [`SemanticVector`]: the fixed-width feature vector
//!   carried by vocabulary entries, tokens, phrases and scene entities
//! - [`Token`] / [`Hypothesis`]: the uniform stream currency between layers
//! - structured phrases ([`NounPhrase`], [`PrepPhrase`], [`VerbPhrase`],
//!   [`SentencePhrase`]) and their coordination wrapper
//!   ([`ConjunctionPhrase`])
//! - the [`GroundedEntity`] seam to an externally-owned scene
//!
//! ## Example
//!
//! ```rust
//! use latn_core::{Dimension, SemanticVector};
//!
//! let mut red = SemanticVector::from_features(&[Dimension::Adj]).with_word("red");
//! red.set(Dimension::Red, 1.0);
//!
//! assert!(red.isa(Dimension::Adj));
//! assert!(red.isa(Dimension::Red));
//! assert_eq!(red.word(), Some("red"));
//! ```

pub mod conjunction;
pub mod dimension;
pub mod grounding;
pub mod hypothesis;
pub mod noun_phrase;
pub mod prep_phrase;
pub mod sentence_phrase;
pub mod token;
pub mod vector;
pub mod verb_phrase;

use thiserror::Error;

/// Errors raised by the core data model.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A string named no dimension of the closed enumeration. Only reachable
    /// from the parsing boundary, never from indexed access.
    #[error("unknown dimension name: {0}")]
    UnknownDimension(String),

    /// A coordination was extended with a different coordinator than the one
    /// it is committed to.
    #[error("mixed coordinators: coordination uses '{existing}', got '{new}'")]
    MixedCoordinator {
        existing: &'static str,
        new: &'static str,
    },
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub use conjunction::{ConjunctionPhrase, Constituent, Coordinator, Phrase};
pub use dimension::Dimension;
pub use grounding::{GroundedEntity, Grounding};
pub use hypothesis::{Hypothesis, Replacement, dedup_hypotheses, sort_hypotheses};
pub use noun_phrase::{NounPhrase, NpConstituent};
pub use prep_phrase::{PpConstituent, PrepPhrase};
pub use sentence_phrase::{DefinitionPayload, SentenceKind, SentencePhrase, SpConstituent};
pub use token::{PhraseHandle, Token};
pub use vector::SemanticVector;
pub use verb_phrase::{VerbKind, VerbPhrase, VpConstituent};
