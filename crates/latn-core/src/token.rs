//! Stream tokens: the uniform currency between pipeline layers.

use crate::noun_phrase::NpConstituent;
use crate::prep_phrase::PpConstituent;
use crate::sentence_phrase::SpConstituent;
use crate::verb_phrase::VpConstituent;
use crate::{Dimension, SemanticVector};
use std::sync::Arc;

/// Back-pointer from a folded phrase token to the structured phrase that
/// produced it. The tagged variants replace the original system's dynamic
/// attribute attachment, so every use site is statically checked.
#[derive(Debug, Clone)]
pub enum PhraseHandle {
    Np(Arc<NpConstituent>),
    Pp(Arc<PpConstituent>),
    Vp(Arc<VpConstituent>),
    Sp(Arc<SpConstituent>),
}

/// One element of a layer's token stream.
///
/// Lower layers produce word/literal tokens; each folding layer splices in
/// opaque phrase tokens carrying a [`PhraseHandle`]. Upper layers treat both
/// uniformly through the vector.
#[derive(Debug, Clone)]
pub struct Token {
    pub vector: SemanticVector,
    pub phrase: Option<PhraseHandle>,
}

impl Token {
    /// A plain word token from a vocabulary vector.
    #[must_use]
    pub fn word(vector: SemanticVector) -> Self {
        Self {
            vector,
            phrase: None,
        }
    }

    /// A numeric literal acting as a definite numeric determiner.
    #[must_use]
    pub fn number(value: f32) -> Self {
        let vector = SemanticVector::from_values(&[
            (Dimension::Det, 1.0),
            (Dimension::Def, 1.0),
            (Dimension::Number, value),
        ])
        .with_word(format_number(value));
        Self::word(vector)
    }

    /// A `[x,y,z]` vector literal.
    #[must_use]
    pub fn vector_literal(x: f32, y: f32, z: f32) -> Self {
        let vector = SemanticVector::from_values(&[
            (Dimension::VectorLit, 1.0),
            (Dimension::LocX, x),
            (Dimension::LocY, y),
            (Dimension::LocZ, z),
        ])
        .with_word(format!(
            "[{},{},{}]",
            format_number(x),
            format_number(y),
            format_number(z)
        ));
        Self::word(vector)
    }

    /// A single-quoted identifier; the contents are preserved verbatim.
    #[must_use]
    pub fn quoted(contents: &str) -> Self {
        let vector = SemanticVector::from_features(&[Dimension::Quoted]).with_word(contents);
        Self::word(vector)
    }

    #[must_use]
    pub fn comma() -> Self {
        let vector = SemanticVector::from_features(&[Dimension::Comma]).with_word(",");
        Self::word(vector)
    }

    /// A word the vocabulary could not resolve. Unknown tokens never merge
    /// into compounds.
    #[must_use]
    pub fn unknown(word: &str) -> Self {
        let vector = SemanticVector::from_features(&[Dimension::Unknown]).with_word(word);
        Self::word(vector)
    }

    /// The surface form, if any.
    #[must_use]
    pub fn surface(&self) -> Option<&str> {
        self.vector.word()
    }

    #[must_use]
    pub fn isa(&self, dim: Dimension) -> bool {
        self.vector.isa(dim)
    }

    /// The noun-phrase behind an `np` token.
    #[must_use]
    pub fn noun_phrase(&self) -> Option<&Arc<NpConstituent>> {
        match &self.phrase {
            Some(PhraseHandle::Np(np)) => Some(np),
            _ => None,
        }
    }

    /// The prepositional phrase behind a `pp` token.
    #[must_use]
    pub fn prep_phrase(&self) -> Option<&Arc<PpConstituent>> {
        match &self.phrase {
            Some(PhraseHandle::Pp(pp)) => Some(pp),
            _ => None,
        }
    }

    /// The verb phrase behind a `vp` token.
    #[must_use]
    pub fn verb_phrase(&self) -> Option<&Arc<VpConstituent>> {
        match &self.phrase {
            Some(PhraseHandle::Vp(vp)) => Some(vp),
            _ => None,
        }
    }

    /// The sentence behind an `sp` token.
    #[must_use]
    pub fn sentence(&self) -> Option<&Arc<SpConstituent>> {
        match &self.phrase {
            Some(PhraseHandle::Sp(sp)) => Some(sp),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.surface().unwrap_or("<token>"))
    }
}

/// Render a float without a trailing `.0` for whole numbers.
fn format_number(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
