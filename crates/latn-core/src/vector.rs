//! The fixed-dimension semantic feature vector.

use crate::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{AddAssign, Index, IndexMut};

/// A real-valued feature vector over the closed [`Dimension`] enumeration,
/// optionally tagged with the surface word it came from.
///
/// All vocabulary entries, stream tokens, phrases and scene entities carry
/// one. Lookup always hands out copies, so a `SemanticVector` is owned by
/// whoever holds it and is safe to mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VectorRepr", into = "VectorRepr")]
pub struct SemanticVector {
    values: [f32; Dimension::COUNT],
    /// The surface form this vector was produced from, if any.
    pub word: Option<String>,
}

impl Default for SemanticVector {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticVector {
    /// The zero vector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: [0.0; Dimension::COUNT],
            word: None,
        }
    }

    /// A zero vector with the given dimensions set to `1.0`.
    #[must_use]
    pub fn from_features(features: &[Dimension]) -> Self {
        let mut v = Self::new();
        for &dim in features {
            v.values[dim as usize] = 1.0;
        }
        v
    }

    /// A vector built from explicit `(dimension, value)` entries.
    #[must_use]
    pub fn from_values(entries: &[(Dimension, f32)]) -> Self {
        let mut v = Self::new();
        for &(dim, value) in entries {
            v.values[dim as usize] = value;
        }
        v
    }

    /// Attach a surface word.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }

    /// The surface word, if any.
    #[must_use]
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    #[must_use]
    pub fn get(&self, dim: Dimension) -> f32 {
        self.values[dim as usize]
    }

    pub fn set(&mut self, dim: Dimension, value: f32) {
        self.values[dim as usize] = value;
    }

    /// Membership predicate: true iff the dimension's value is strictly
    /// positive. `v[Red]` is the intensity; `v.isa(Red)` is intensity > 0.
    #[must_use]
    pub fn isa(&self, dim: Dimension) -> bool {
        self.values[dim as usize] > 0.0
    }

    /// Multiply the listed dimensions by `factor`, leaving the rest alone.
    pub fn scale_dims(&mut self, dims: &[Dimension], factor: f32) {
        for &dim in dims {
            self.values[dim as usize] *= factor;
        }
    }

    /// Copy every non-zero dimension of `other` into `self`, overwriting.
    pub fn merge_nonzero(&mut self, other: &SemanticVector) {
        for &dim in Dimension::ALL {
            let value = other.values[dim as usize];
            if value != 0.0 {
                self.values[dim as usize] = value;
            }
        }
    }

    /// Iterate the non-zero `(dimension, value)` entries in index order.
    pub fn nonzero(&self) -> impl Iterator<Item = (Dimension, f32)> + '_ {
        Dimension::ALL
            .iter()
            .filter_map(|&dim| {
                let value = self.values[dim as usize];
                (value != 0.0).then_some((dim, value))
            })
    }

    /// Normalized dot product restricted to [`Dimension::SIMILARITY`].
    ///
    /// Returns a value in `[-1, 1]`; `0.0` when either sub-vector is zero.
    #[must_use]
    pub fn semantic_similarity(&self, other: &SemanticVector) -> f32 {
        let mut dot = 0.0f32;
        let mut norm_a = 0.0f32;
        let mut norm_b = 0.0f32;
        for &dim in Dimension::SIMILARITY {
            let a = self.values[dim as usize];
            let b = other.values[dim as usize];
            dot += a * b;
            norm_a += a * a;
            norm_b += b * b;
        }
        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }
        dot / (norm_a.sqrt() * norm_b.sqrt())
    }
}

impl Index<Dimension> for SemanticVector {
    type Output = f32;

    fn index(&self, dim: Dimension) -> &f32 {
        &self.values[dim as usize]
    }
}

impl IndexMut<Dimension> for SemanticVector {
    fn index_mut(&mut self, dim: Dimension) -> &mut f32 {
        &mut self.values[dim as usize]
    }
}

impl AddAssign<&SemanticVector> for SemanticVector {
    /// Component-wise addition; the word tag is left untouched.
    fn add_assign(&mut self, other: &SemanticVector) {
        for (slot, value) in self.values.iter_mut().zip(other.values.iter()) {
            *slot += value;
        }
    }
}

impl std::fmt::Display for SemanticVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[", self.word.as_deref().unwrap_or("_"))?;
        for (i, (dim, value)) in self.nonzero().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{dim}={value}")?;
        }
        write!(f, "]")
    }
}

/// Sparse wire representation: only non-zero dimensions are written out.
#[derive(Serialize, Deserialize)]
struct VectorRepr {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    word: Option<String>,
    dims: BTreeMap<String, f32>,
}

impl From<SemanticVector> for VectorRepr {
    fn from(v: SemanticVector) -> Self {
        let dims = v
            .nonzero()
            .map(|(dim, value)| (dim.name().to_string(), value))
            .collect();
        Self { word: v.word, dims }
    }
}

impl TryFrom<VectorRepr> for SemanticVector {
    type Error = crate::CoreError;

    fn try_from(repr: VectorRepr) -> Result<Self, Self::Error> {
        let mut v = SemanticVector::new();
        v.word = repr.word;
        for (name, value) in repr.dims {
            let dim: Dimension = name.parse()?;
            v.set(dim, value);
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn from_features_sets_membership() {
        let v = SemanticVector::from_features(&[Dimension::Noun, Dimension::Singular]);
        assert!(v.isa(Dimension::Noun));
        assert!(v.isa(Dimension::Singular));
        assert!(!v.isa(Dimension::Verb));
        assert_eq!(v.get(Dimension::Noun), 1.0);
    }

    #[test]
    fn isa_distinguishes_intensity_from_membership() {
        let mut v = SemanticVector::new();
        v.set(Dimension::Red, 0.4);
        assert!(v.isa(Dimension::Red));
        v.set(Dimension::Red, 0.0);
        assert!(!v.isa(Dimension::Red));
        v.set(Dimension::Red, -0.5);
        assert!(!v.isa(Dimension::Red));
    }

    #[test]
    fn add_assign_is_component_wise() {
        let mut a = SemanticVector::from_values(&[(Dimension::Red, 1.0), (Dimension::ScaleX, 2.0)]);
        let b = SemanticVector::from_values(&[(Dimension::Red, 0.5), (Dimension::Green, 1.0)]);
        a += &b;
        assert_eq!(a.get(Dimension::Red), 1.5);
        assert_eq!(a.get(Dimension::Green), 1.0);
        assert_eq!(a.get(Dimension::ScaleX), 2.0);
    }

    #[test]
    fn merge_nonzero_overwrites_only_set_dims() {
        let mut a = SemanticVector::from_values(&[(Dimension::Red, 1.0), (Dimension::Noun, 1.0)]);
        let b = SemanticVector::from_values(&[(Dimension::Red, 0.2), (Dimension::Blue, 1.0)]);
        a.merge_nonzero(&b);
        assert_eq!(a.get(Dimension::Red), 0.2);
        assert_eq!(a.get(Dimension::Blue), 1.0);
        assert_eq!(a.get(Dimension::Noun), 1.0);
    }

    #[test]
    fn similarity_of_identical_subvectors_is_one() {
        let a = SemanticVector::from_values(&[
            (Dimension::Noun, 1.0),
            (Dimension::Red, 1.0),
            (Dimension::ScaleY, 2.0),
        ]);
        let sim = a.semantic_similarity(&a.clone());
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn similarity_ignores_non_semantic_dims() {
        let a = SemanticVector::from_values(&[(Dimension::Noun, 1.0), (Dimension::Det, 1.0)]);
        let b = SemanticVector::from_values(&[(Dimension::Noun, 1.0), (Dimension::Prep, 5.0)]);
        let sim = a.semantic_similarity(&b);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_subvector_similarity_is_zero() {
        let a = SemanticVector::from_features(&[Dimension::Det]);
        let b = SemanticVector::from_features(&[Dimension::Noun]);
        assert_eq!(a.semantic_similarity(&b), 0.0);
    }

    #[test]
    fn serde_round_trip_is_sparse() {
        let v = SemanticVector::from_values(&[(Dimension::Noun, 1.0), (Dimension::LocY, -2.5)])
            .with_word("box");
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("loc_y"));
        assert!(!json.contains("scale_x"));
        let back: SemanticVector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }

    proptest! {
        #[test]
        fn scale_dims_then_unscale_is_identity(value in -10.0f32..10.0, factor in 0.1f32..4.0) {
            let mut v = SemanticVector::from_values(&[(Dimension::ScaleX, value)]);
            v.scale_dims(Dimension::ADJECTIVE_SEMANTICS, factor);
            v.scale_dims(Dimension::ADJECTIVE_SEMANTICS, 1.0 / factor);
            prop_assert!((v.get(Dimension::ScaleX) - value).abs() < 1e-3);
        }

        #[test]
        fn add_assign_commutes(x in -5.0f32..5.0, y in -5.0f32..5.0) {
            let a = SemanticVector::from_values(&[(Dimension::Red, x)]);
            let b = SemanticVector::from_values(&[(Dimension::Red, y)]);
            let mut ab = a.clone();
            ab += &b;
            let mut ba = b.clone();
            ba += &a;
            prop_assert_eq!(ab.get(Dimension::Red), ba.get(Dimension::Red));
        }
    }
}
