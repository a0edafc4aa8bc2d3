// latn-phrases: ATN recognizers, folding layers and grounding

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! # latn-phrases
//!
//! Layers 2–5 of the latn pipeline. All four share one skeleton: sweep each
//! hypothesis left-to-right, run this layer's ATN wherever it can start,
//! lift conjunction runs into coordinations, and splice the parsed phrases
//! back into the stream as opaque tokens. Because folded phrases are atomic
//! tokens, each upper layer's grammar stays trivial: the PP recognizer sees
//! `NP` as one token, the VP recognizer sees `NP` and `PP` as one token
//! each, and so on.
//!
//! The scene-dependent stages live in [`grounding`]: Layer 2 binds noun
//! phrases to scene entities (multiplying hypotheses across matches) and
//! Layer 3 scores prepositional phrases for spatial plausibility.
//!
//! ## Example
//!
//! ```rust
//! use latn_lexer::tokenize_layer1;
//! use latn_phrases::{NpRecognizer, fold_layer};
//! use latn_vocab::Vocabulary;
//!
//! let vocab = Vocabulary::builtin();
//! let hypotheses = tokenize_layer1("the red box", &vocab).unwrap();
//! let folded = fold_layer(&NpRecognizer::new(), &hypotheses);
//! assert_eq!(folded[0].tokens.len(), 1);
//! assert_eq!(folded[0].tokens[0].surface(), Some("NP(the red box)"));
//! ```

pub mod atn;
pub mod fold;
pub mod grounding;
pub mod np_layer;
pub mod pp_layer;
pub mod sp_layer;
pub mod vp_layer;

use thiserror::Error;

/// Errors internal to a single ATN run. Both are per-hypothesis conditions:
/// they kill one candidate parse at one position, never the pipeline.
#[derive(Error, Debug)]
pub enum AtnError {
    /// No arc matched and the current state does not accept.
    #[error("no parse at state {state}, token {position}")]
    NoMatch { state: &'static str, position: usize },

    /// An arc fired against an inconsistent builder; the branch is dead.
    #[error("dead branch")]
    Dead,
}

/// Result type for ATN runs.
pub type AtnResult<T> = Result<T, AtnError>;

pub use atn::{Atn, StateId};
pub use fold::{PhraseRecognizer, fold_layer, nonterminal_token};
pub use grounding::{
    NpGroundingRecord, PpGroundingRecord, ground_noun_phrases, ground_prep_phrases,
};
pub use np_layer::{NpRecognizer, np_token};
pub use pp_layer::{PpRecognizer, pp_token};
pub use sp_layer::SpRecognizer;
pub use vp_layer::{VpRecognizer, vp_token};
