//! Tokenization hypotheses: one candidate interpretation per entry.

use crate::token::Token;

/// A span of lower-level tokens that a layer collapsed into one phrase token.
#[derive(Debug, Clone)]
pub struct Replacement {
    /// First replaced position in the input token sequence.
    pub start: usize,
    /// Last replaced position, inclusive.
    pub end: usize,
    /// The folded phrase token spliced in place of the span.
    pub token: Token,
}

/// One candidate interpretation at some stage of the pipeline: a token
/// sequence, a confidence in `(0, 1]`, a provenance description, and the log
/// of spans folded by the layer that produced it.
#[derive(Debug, Clone)]
pub struct Hypothesis {
    pub tokens: Vec<Token>,
    pub confidence: f32,
    pub description: String,
    pub replacements: Vec<Replacement>,
}

impl Hypothesis {
    #[must_use]
    pub fn new(tokens: Vec<Token>, confidence: f32, description: impl Into<String>) -> Self {
        Self {
            tokens,
            confidence,
            description: description.into(),
            replacements: Vec::new(),
        }
    }

    /// The surface words of the token sequence, in order.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .map(|t| t.surface().unwrap_or(""))
            .collect()
    }

    /// A key identifying this hypothesis up to token spelling and grounding:
    /// two hypotheses with equal signatures are duplicates.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut sig = String::new();
        for token in &self.tokens {
            sig.push_str(token.surface().unwrap_or(""));
            if let Some(np) = token.noun_phrase() {
                for part in np.parts() {
                    if let Some(grounding) = &part.grounding {
                        sig.push('@');
                        sig.push_str(grounding.entity_id());
                    }
                }
            }
            sig.push('\u{1f}');
        }
        sig
    }
}

/// Stable sort by descending confidence. Stability preserves insertion order
/// on ties, which by construction ranks compound interpretations before
/// their split alternatives.
pub fn sort_hypotheses(hypotheses: &mut [Hypothesis]) {
    hypotheses.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}

/// Drop hypotheses whose token spelling and grounding match an earlier one.
pub fn dedup_hypotheses(hypotheses: &mut Vec<Hypothesis>) {
    let mut seen = std::collections::HashSet::new();
    hypotheses.retain(|h| {
        let fresh = seen.insert(h.signature());
        if !fresh {
            tracing::trace!(description = %h.description, "dropping duplicate hypothesis");
        }
        fresh
    });
}
