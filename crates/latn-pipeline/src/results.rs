//! Per-layer result types. Each layer's result nests the one below it, so a
//! host can diagnose exactly where a parse degraded.

use crate::PipelineError;
use latn_core::{Hypothesis, NpConstituent, PpConstituent, SpConstituent, VpConstituent};
use latn_phrases::{NpGroundingRecord, PpGroundingRecord};
use std::sync::Arc;

/// Layer 1: lexical tokenization.
#[derive(Debug, Default)]
pub struct Layer1Result {
    pub success: bool,
    /// Confidence of the best hypothesis, `0.0` on failure.
    pub confidence: f32,
    /// Ranked tokenization hypotheses.
    pub hypotheses: Vec<Hypothesis>,
    pub description: String,
    /// The input error behind a failure, when there was one.
    pub error: Option<PipelineError>,
}

/// Layer 2: noun phrase folding and optional grounding.
#[derive(Debug, Default)]
pub struct Layer2Result {
    pub success: bool,
    pub confidence: f32,
    pub hypotheses: Vec<Hypothesis>,
    pub description: String,
    /// Noun phrases of the best hypothesis, in stream order.
    pub noun_phrases: Vec<Arc<NpConstituent>>,
    /// Grounding attempts from the most recent run.
    pub grounding_results: Vec<NpGroundingRecord>,
    pub layer1: Layer1Result,
}

/// Layer 3: prepositional phrase folding and optional spatial validation.
#[derive(Debug, Default)]
pub struct Layer3Result {
    pub success: bool,
    pub confidence: f32,
    pub hypotheses: Vec<Hypothesis>,
    pub description: String,
    /// Prepositional phrases of the best hypothesis, in stream order.
    pub prepositional_phrases: Vec<Arc<PpConstituent>>,
    /// Spatial validations from the most recent run.
    pub spatial_results: Vec<PpGroundingRecord>,
    pub layer2: Layer2Result,
}

/// Layer 4: verb phrase folding.
#[derive(Debug, Default)]
pub struct Layer4Result {
    pub success: bool,
    pub confidence: f32,
    pub hypotheses: Vec<Hypothesis>,
    pub description: String,
    /// Verb phrases of the best hypothesis, in stream order.
    pub verb_phrases: Vec<Arc<VpConstituent>>,
    pub layer3: Layer3Result,
}

/// Layer 5: sentence folding.
#[derive(Debug, Default)]
pub struct Layer5Result {
    pub success: bool,
    pub confidence: f32,
    pub hypotheses: Vec<Hypothesis>,
    pub description: String,
    /// Sentences of the best hypothesis, in stream order.
    pub sentence_phrases: Vec<Arc<SpConstituent>>,
    pub layer4: Layer4Result,
}

/// Compact per-layer summary, for diagnostics across a whole parse.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LayerSummary {
    pub layer: u8,
    pub success: bool,
    pub hypothesis_count: usize,
    /// Phrases of the layer's own kind in the best hypothesis (token count
    /// for Layer 1).
    pub phrase_count: usize,
    pub confidence: f32,
}

/// Pull the typed phrases of one kind out of the best hypothesis.
pub(crate) fn best_hypothesis_phrases<T, F>(hypotheses: &[Hypothesis], extract: F) -> Vec<T>
where
    F: Fn(&latn_core::Token) -> Option<T>,
{
    hypotheses
        .first()
        .map(|best| best.tokens.iter().filter_map(&extract).collect())
        .unwrap_or_default()
}

/// Confidence of the best hypothesis.
pub(crate) fn best_confidence(hypotheses: &[Hypothesis]) -> f32 {
    hypotheses.first().map_or(0.0, |h| h.confidence)
}
