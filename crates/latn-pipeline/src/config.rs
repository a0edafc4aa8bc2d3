//! Executor configuration.

use serde::{Deserialize, Serialize};

/// Cost and pruning knobs for a parse. All default to "unbounded": the
/// pipeline itself only multiplies hypotheses where a genuine ambiguity or a
/// real scene match exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutorConfig {
    /// Top-K cap on the hypothesis list retained between layers.
    pub max_hypotheses: Option<usize>,

    /// Cap on scene matches considered per noun phrase during grounding.
    pub max_matches_per_np: Option<usize>,

    /// Prune hypotheses whose prepositional phrases score below this during
    /// Layer 3 grounding. Unset: scores only annotate and down-rank.
    pub pp_score_cutoff: Option<f32>,
}

impl ExecutorConfig {
    /// Apply the top-K cap to a hypothesis list.
    pub(crate) fn cap(&self, hypotheses: &mut Vec<latn_core::Hypothesis>) {
        if let Some(cap) = self.max_hypotheses {
            if hypotheses.len() > cap {
                tracing::debug!(
                    dropped = hypotheses.len() - cap,
                    cap,
                    "hypothesis cap applied"
                );
                hypotheses.truncate(cap);
            }
        }
    }
}
