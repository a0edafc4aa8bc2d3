// latn-pipeline: the host-facing layer executor

#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

//! # latn-pipeline
//!
//! Central orchestration for the latn pipeline: one façade that runs
//! `string → L1 → L2 → L3 → L4 → L5 → ranked sentences`, stopping at
//! whatever layer the host asked for.
//!
//! ```text
//! text → Layer 1 (lexical) → Layer 2 (NP) → Layer 3 (PP) → Layer 4 (VP) → Layer 5 (SP)
//!                              ↓ grounding     ↓ spatial scoring
//!                            [scene]          [scene]
//! ```
//!
//! Each entry point returns a layer result that nests every lower layer's
//! result, so hosts can always diagnose where a parse degraded. Grounding
//! stages run only when a scene is attached.
//!
//! ## Example
//!
//! ```rust
//! use latn_pipeline::LatnExecutor;
//!
//! let executor = LatnExecutor::new();
//! let result = executor.execute_layer5("draw a red cube", false);
//! assert!(result.success);
//! assert_eq!(result.sentence_phrases.len(), 1);
//! ```

pub mod config;
pub mod executor;
pub mod results;
pub mod validate;

use thiserror::Error;

/// Hard input errors surfaced through [`results::Layer1Result`]. Everything
/// else in the pipeline is a per-hypothesis condition and never an error.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Empty or whitespace-only input.
    #[error("empty input")]
    EmptyInput,

    /// The surface scanner rejected the input.
    #[error(transparent)]
    Lexer(#[from] latn_lexer::LexerError),
}

pub use config::ExecutorConfig;
pub use executor::LatnExecutor;
pub use results::{
    Layer1Result, Layer2Result, Layer3Result, Layer4Result, Layer5Result, LayerSummary,
};
pub use validate::{IssueSeverity, ValidationIssue, ValidationReport, validate_sentence};

// Re-export the types hosts touch when consuming results.
pub use latn_core::{
    Dimension, Hypothesis, NounPhrase, PrepPhrase, SemanticVector, SentenceKind, SentencePhrase,
    Token, VerbKind, VerbPhrase,
};
pub use latn_phrases::{NpGroundingRecord, PpGroundingRecord};
pub use latn_scene::{SceneAssembly, SceneModel, SceneObject};
pub use latn_vocab::Vocabulary;
