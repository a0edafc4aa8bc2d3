//! The layer executor: the host-facing entry point of the pipeline.

use crate::config::ExecutorConfig;
use crate::results::{
    Layer1Result, Layer2Result, Layer3Result, Layer4Result, Layer5Result, LayerSummary,
    best_confidence, best_hypothesis_phrases,
};
use crate::validate::{ValidationReport, validate_sentence};
use latn_core::{DefinitionPayload, SemanticVector, Token};
use latn_lexer::tokenize_layer1;
use latn_phrases::{
    NpRecognizer, PpRecognizer, SpRecognizer, VpRecognizer, fold_layer, ground_noun_phrases,
    ground_prep_phrases,
};
use latn_scene::SceneModel;
use latn_vocab::Vocabulary;

/// Orchestrates layers 1–5 over an owned vocabulary and an optionally
/// attached scene.
///
/// A parse is a pure function of the input string, the attached scene
/// snapshot and the configuration; the executor mutates nothing during a
/// parse. Vocabulary writes happen between parses, typically to apply a
/// definition sentence the previous parse produced.
pub struct LatnExecutor {
    vocabulary: Vocabulary,
    scene: Option<SceneModel>,
    config: ExecutorConfig,
    np: NpRecognizer,
    pp: PpRecognizer,
    vp: VpRecognizer,
    sp: SpRecognizer,
}

impl Default for LatnExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl LatnExecutor {
    /// An executor over the built-in vocabulary, no scene attached.
    #[must_use]
    pub fn new() -> Self {
        Self::with_vocabulary(Vocabulary::builtin())
    }

    /// An executor over a caller-supplied vocabulary.
    #[must_use]
    pub fn with_vocabulary(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            scene: None,
            config: ExecutorConfig::default(),
            np: NpRecognizer::new(),
            pp: PpRecognizer::new(),
            vp: VpRecognizer::new(),
            sp: SpRecognizer::new(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach the scene grounding will run against.
    pub fn attach_scene(&mut self, scene: SceneModel) {
        self.scene = Some(scene);
    }

    /// Detach and return the current scene.
    pub fn detach_scene(&mut self) -> Option<SceneModel> {
        self.scene.take()
    }

    #[must_use]
    pub fn scene(&self) -> Option<&SceneModel> {
        self.scene.as_ref()
    }

    /// Add or replace a vocabulary entry (runtime learning).
    pub fn add_vocabulary_entry(&mut self, word: &str, vector: SemanticVector) {
        self.vocabulary.insert(word, vector);
    }

    /// Store a definition sentence's payload in the vocabulary.
    pub fn apply_definition(&mut self, payload: &DefinitionPayload) {
        self.add_vocabulary_entry(&payload.word, payload.vector.clone());
    }

    /// Copy-on-lookup into the vocabulary.
    #[must_use]
    pub fn lookup_vocabulary(&self, word: &str) -> Option<SemanticVector> {
        self.vocabulary.lookup(word)
    }

    /// Layer 1: lexical tokenization.
    #[must_use]
    pub fn execute_layer1(&self, input: &str) -> Layer1Result {
        match tokenize_layer1(input, &self.vocabulary) {
            Ok(mut hypotheses) => {
                self.config.cap(&mut hypotheses);
                if hypotheses.is_empty() {
                    Layer1Result {
                        success: false,
                        confidence: 0.0,
                        hypotheses,
                        description: format!("Layer 1: empty input \"{input}\""),
                        error: Some(crate::PipelineError::EmptyInput),
                    }
                } else {
                    Layer1Result {
                        success: true,
                        confidence: best_confidence(&hypotheses),
                        description: format!(
                            "Layer 1: {} hypothesis(es) for \"{input}\"",
                            hypotheses.len()
                        ),
                        hypotheses,
                        error: None,
                    }
                }
            }
            Err(error) => Layer1Result {
                success: false,
                confidence: 0.0,
                hypotheses: Vec::new(),
                description: format!("Layer 1: {error}"),
                error: Some(error.into()),
            },
        }
    }

    /// Layer 2: noun phrase folding, with optional scene grounding.
    #[must_use]
    pub fn execute_layer2(
        &self,
        input: &str,
        enable_grounding: bool,
        return_all_matches: bool,
    ) -> Layer2Result {
        let layer1 = self.execute_layer1(input);
        if !layer1.success {
            return Layer2Result {
                description: format!("Layer 2: Layer 1 failure ({})", layer1.description),
                layer1,
                ..Layer2Result::default()
            };
        }

        let mut hypotheses = fold_layer(&self.np, &layer1.hypotheses);
        let mut grounding_results = Vec::new();
        if enable_grounding {
            if let Some(scene) = &self.scene {
                (hypotheses, grounding_results) = ground_noun_phrases(
                    &hypotheses,
                    scene,
                    return_all_matches,
                    self.config.max_matches_per_np,
                );
            }
        }
        self.config.cap(&mut hypotheses);

        let noun_phrases =
            best_hypothesis_phrases(&hypotheses, |t: &Token| t.noun_phrase().cloned());
        Layer2Result {
            success: !hypotheses.is_empty(),
            confidence: best_confidence(&hypotheses),
            description: format!(
                "Layer 2: {} noun phrase(s), {} grounding attempt(s)",
                noun_phrases.len(),
                grounding_results.len()
            ),
            hypotheses,
            noun_phrases,
            grounding_results,
            layer1,
        }
    }

    /// Layer 3: prepositional phrase folding, with optional spatial
    /// validation. Grounding at this layer implies grounding at Layer 2.
    #[must_use]
    pub fn execute_layer3(&self, input: &str, enable_grounding: bool) -> Layer3Result {
        let layer2 = self.execute_layer2(input, enable_grounding, true);
        if !layer2.success {
            return Layer3Result {
                description: format!("Layer 3: Layer 2 failure ({})", layer2.description),
                layer2,
                ..Layer3Result::default()
            };
        }

        let mut hypotheses = fold_layer(&self.pp, &layer2.hypotheses);
        let mut spatial_results = Vec::new();
        if enable_grounding && self.scene.is_some() {
            (hypotheses, spatial_results) =
                ground_prep_phrases(&hypotheses, self.config.pp_score_cutoff);
        }
        self.config.cap(&mut hypotheses);

        let prepositional_phrases =
            best_hypothesis_phrases(&hypotheses, |t: &Token| t.prep_phrase().cloned());
        Layer3Result {
            success: !hypotheses.is_empty(),
            confidence: best_confidence(&hypotheses),
            description: format!(
                "Layer 3: {} prepositional phrase(s), {} spatial validation(s)",
                prepositional_phrases.len(),
                spatial_results.len()
            ),
            hypotheses,
            prepositional_phrases,
            spatial_results,
            layer2,
        }
    }

    /// Layer 4: verb phrase folding. Grounds layers 2 and 3 whenever a
    /// scene is attached.
    #[must_use]
    pub fn execute_layer4(&self, input: &str) -> Layer4Result {
        let layer3 = self.execute_layer3(input, self.scene.is_some());
        if !layer3.success {
            return Layer4Result {
                description: format!("Layer 4: Layer 3 failure ({})", layer3.description),
                layer3,
                ..Layer4Result::default()
            };
        }

        let mut hypotheses = fold_layer(&self.vp, &layer3.hypotheses);
        self.config.cap(&mut hypotheses);

        let verb_phrases =
            best_hypothesis_phrases(&hypotheses, |t: &Token| t.verb_phrase().cloned());
        Layer4Result {
            success: !hypotheses.is_empty(),
            confidence: best_confidence(&hypotheses),
            description: format!("Layer 4: {} verb phrase(s)", verb_phrases.len()),
            hypotheses,
            verb_phrases,
            layer3,
        }
    }

    /// Layer 5: sentence folding. With `report`, the description carries
    /// per-hypothesis provenance.
    #[must_use]
    pub fn execute_layer5(&self, input: &str, report: bool) -> Layer5Result {
        let layer4 = self.execute_layer4(input);
        if !layer4.success {
            return Layer5Result {
                description: format!("Layer 5: Layer 4 failure ({})", layer4.description),
                layer4,
                ..Layer5Result::default()
            };
        }

        let mut hypotheses = fold_layer(&self.sp, &layer4.hypotheses);
        self.config.cap(&mut hypotheses);

        let sentence_phrases =
            best_hypothesis_phrases(&hypotheses, |t: &Token| t.sentence().cloned());
        let description = if report {
            let lines: Vec<String> = hypotheses
                .iter()
                .map(|h| format!("[{:.3}] {}", h.confidence, h.description))
                .collect();
            format!(
                "Layer 5: {} sentence(s)\n{}",
                sentence_phrases.len(),
                lines.join("\n")
            )
        } else {
            format!("Layer 5: {} sentence(s)", sentence_phrases.len())
        };

        Layer5Result {
            success: !hypotheses.is_empty() && !sentence_phrases.is_empty(),
            confidence: best_confidence(&hypotheses),
            description,
            hypotheses,
            sentence_phrases,
            layer4,
        }
    }

    /// Validate each sentence of a Layer 5 result for execution.
    #[must_use]
    pub fn validate(&self, result: &Layer5Result) -> Vec<ValidationReport> {
        result
            .sentence_phrases
            .iter()
            .flat_map(|constituent| constituent.parts())
            .map(|sentence| validate_sentence(sentence, self.scene.is_some()))
            .collect()
    }

    /// Per-layer diagnostic summary for a parse up to `target_layer`
    /// (clamped to 1..=5).
    #[must_use]
    pub fn layer_analysis(&self, input: &str, target_layer: u8) -> Vec<LayerSummary> {
        let target = target_layer.clamp(1, 5);
        let mut summaries = Vec::with_capacity(target as usize);

        match target {
            1 => {
                let r1 = self.execute_layer1(input);
                push_layer1(&mut summaries, &r1);
            }
            2 => {
                let r2 = self.execute_layer2(input, self.scene.is_some(), true);
                push_layer1(&mut summaries, &r2.layer1);
                push_layer2(&mut summaries, &r2);
            }
            3 => {
                let r3 = self.execute_layer3(input, self.scene.is_some());
                push_layer1(&mut summaries, &r3.layer2.layer1);
                push_layer2(&mut summaries, &r3.layer2);
                push_layer3(&mut summaries, &r3);
            }
            4 => {
                let r4 = self.execute_layer4(input);
                push_layer1(&mut summaries, &r4.layer3.layer2.layer1);
                push_layer2(&mut summaries, &r4.layer3.layer2);
                push_layer3(&mut summaries, &r4.layer3);
                push_layer4(&mut summaries, &r4);
            }
            _ => {
                let r5 = self.execute_layer5(input, false);
                push_layer1(&mut summaries, &r5.layer4.layer3.layer2.layer1);
                push_layer2(&mut summaries, &r5.layer4.layer3.layer2);
                push_layer3(&mut summaries, &r5.layer4.layer3);
                push_layer4(&mut summaries, &r5.layer4);
                summaries.push(LayerSummary {
                    layer: 5,
                    success: r5.success,
                    hypothesis_count: r5.hypotheses.len(),
                    phrase_count: r5.sentence_phrases.len(),
                    confidence: r5.confidence,
                });
            }
        }

        summaries
    }
}

fn push_layer1(summaries: &mut Vec<LayerSummary>, result: &Layer1Result) {
    summaries.push(LayerSummary {
        layer: 1,
        success: result.success,
        hypothesis_count: result.hypotheses.len(),
        phrase_count: result.hypotheses.first().map_or(0, |h| h.tokens.len()),
        confidence: result.confidence,
    });
}

fn push_layer2(summaries: &mut Vec<LayerSummary>, result: &Layer2Result) {
    summaries.push(LayerSummary {
        layer: 2,
        success: result.success,
        hypothesis_count: result.hypotheses.len(),
        phrase_count: result.noun_phrases.len(),
        confidence: result.confidence,
    });
}

fn push_layer3(summaries: &mut Vec<LayerSummary>, result: &Layer3Result) {
    summaries.push(LayerSummary {
        layer: 3,
        success: result.success,
        hypothesis_count: result.hypotheses.len(),
        phrase_count: result.prepositional_phrases.len(),
        confidence: result.confidence,
    });
}

fn push_layer4(summaries: &mut Vec<LayerSummary>, result: &Layer4Result) {
    summaries.push(LayerSummary {
        layer: 4,
        success: result.success,
        hypothesis_count: result.hypotheses.len(),
        phrase_count: result.verb_phrases.len(),
        confidence: result.confidence,
    });
}
