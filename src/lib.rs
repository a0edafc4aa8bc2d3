//! # latn
//!
//! Layered ambiguity-preserving parsing of natural-language commands for 3D
//! scene manipulation.
//!
//! An utterance like `move the red box above the table to [3,4,5]` runs
//! through five layers — lexical tokenization, noun phrases, prepositional
//! phrases, verb phrases, sentences — each consuming and producing ranked
//! hypotheses. Ambiguity is preserved and scored rather than resolved
//! early: multi-word compounds, competing tokenizations and multiple scene
//! bindings all survive as separate hypotheses until evidence (confidence,
//! scene grounding, spatial plausibility) ranks them.
//!
//! The usual entry point is [`LatnExecutor`]:
//!
//! ```rust
//! use latn::LatnExecutor;
//!
//! let executor = LatnExecutor::new();
//! let result = executor.execute_layer5("draw a red cube", false);
//! assert!(result.success);
//! ```
//!
//! The member crates are re-exported for hosts that need direct access:
//! [`latn_core`] (vector space and phrase types), [`latn_vocab`]
//! (vocabulary and inflection), [`latn_lexer`] (Layer 1), [`latn_scene`]
//! (scene model and spatial validation), [`latn_phrases`] (ATN folding and
//! grounding) and [`latn_pipeline`] (the executor).

pub use latn_core;
pub use latn_lexer;
pub use latn_phrases;
pub use latn_pipeline;
pub use latn_scene;
pub use latn_vocab;

pub use latn_pipeline::{
    ExecutorConfig, LatnExecutor, Layer1Result, Layer2Result, Layer3Result, Layer4Result,
    Layer5Result, SceneModel, SceneObject, Vocabulary,
};
