//! The built-in vocabulary: the closed-class words and core content words
//! the scene-command language ships with. Hosts extend it at runtime through
//! definition sentences.

use crate::Vocabulary;
use latn_core::{Dimension, SemanticVector};

use Dimension as D;

fn noun() -> SemanticVector {
    SemanticVector::from_features(&[D::Noun, D::Singular])
}

fn unit_noun() -> SemanticVector {
    let mut v = SemanticVector::from_features(&[D::Noun, D::Singular, D::Unit]);
    v.set(D::Number, 1.0);
    v
}

fn color(r: f32, g: f32, b: f32) -> SemanticVector {
    SemanticVector::from_values(&[(D::Adj, 1.0), (D::Red, r), (D::Green, g), (D::Blue, b)])
}

fn size(x: f32, y: f32, z: f32) -> SemanticVector {
    SemanticVector::from_values(&[
        (D::Adj, 1.0),
        (D::ScaleX, x),
        (D::ScaleY, y),
        (D::ScaleZ, z),
    ])
}

fn surface(dim: Dimension, value: f32) -> SemanticVector {
    SemanticVector::from_values(&[(D::Adj, 1.0), (dim, value)])
}

fn adverb(intensity: f32) -> SemanticVector {
    SemanticVector::from_values(&[(D::Adv, 1.0), (D::Adverb, intensity)])
}

fn determiner(features: &[Dimension], number: f32) -> SemanticVector {
    let mut v = SemanticVector::from_features(features);
    v.set(D::Det, 1.0);
    v.set(D::Number, number);
    v
}

fn verb(semantics: &[Dimension]) -> SemanticVector {
    let mut v = SemanticVector::from_features(&[D::Verb, D::Action]);
    for &dim in semantics {
        v.set(dim, 1.0);
    }
    v
}

fn prep(entries: &[(Dimension, f32)]) -> SemanticVector {
    let mut v = SemanticVector::from_features(&[D::Prep]);
    for &(dim, value) in entries {
        v.set(dim, value);
    }
    v
}

impl Vocabulary {
    /// The built-in vocabulary of the scene-command language.
    #[must_use]
    pub fn builtin() -> Self {
        let mut v = Vocabulary::new();

        // Shape nouns. "object" additionally acts as the universal name in
        // scene matching.
        for shape in [
            "cube",
            "box",
            "sphere",
            "ellipsoid",
            "arch",
            "table",
            "object",
            "square",
            "rectangle",
            "triangle",
            "circle",
            "cylinder",
            "cone",
            "tetrahedron",
            "pyramid",
            "prism",
        ] {
            v.insert(shape, noun());
        }

        // Unit nouns
        for unit in ["degree", "unit", "pixel", "meter", "inch", "foot", "yard"] {
            v.insert(unit, unit_noun());
        }

        // Pronouns
        v.insert(
            "it",
            SemanticVector::from_features(&[D::Pronoun, D::Singular]),
        );
        v.insert(
            "they",
            SemanticVector::from_features(&[D::Pronoun, D::Plural]),
        );
        v.insert(
            "them",
            SemanticVector::from_features(&[D::Pronoun, D::Plural]),
        );

        // Color adjectives
        v.insert("red", color(1.0, 0.0, 0.0));
        v.insert("green", color(0.0, 1.0, 0.0));
        v.insert("blue", color(0.0, 0.0, 1.0));
        v.insert("yellow", color(1.0, 1.0, 0.0));
        v.insert("purple", color(0.5, 0.0, 0.5));
        v.insert("orange", color(1.0, 0.5, 0.0));
        v.insert("black", color(0.0, 0.0, 0.0));
        v.insert("white", color(1.0, 1.0, 1.0));
        v.insert("gray", color(0.5, 0.5, 0.5));
        v.insert("brown", color(0.6, 0.3, 0.1));

        // Size adjectives
        v.insert("large", size(2.0, 2.0, 2.0));
        v.insert("big", size(2.0, 2.0, 2.0));
        v.insert("huge", size(3.0, 3.0, 3.0));
        v.insert("small", size(-0.5, -0.5, -0.5));
        v.insert("tiny", size(-0.7, -0.7, -0.7));
        v.insert("tall", size(0.0, 1.5, 0.0));
        v.insert("short", size(0.0, -0.5, 0.0));
        v.insert("wide", size(1.5, 0.0, 0.0));
        v.insert("deep", size(0.0, 0.0, 1.5));

        // Surface adjectives
        v.insert("rough", surface(D::Texture, 2.0));
        v.insert("smooth", surface(D::Texture, 0.5));
        v.insert("shiny", surface(D::Texture, 0.1));
        v.insert("clear", surface(D::Transparency, 2.0));
        v.insert("transparent", surface(D::Transparency, 2.0));
        v.insert("opaque", surface(D::Transparency, 0.0));

        // Adverb intensifiers
        v.insert("very", adverb(1.5));
        v.insert("much", adverb(1.5));
        v.insert("extremely", adverb(2.0));
        v.insert("slightly", adverb(0.75));
        v.insert("a little bit", adverb(1.15));

        // Determiners
        v.insert("the", determiner(&[D::Def, D::Singular], 1.0));
        v.insert("a", determiner(&[D::Singular], 1.0));
        v.insert("an", determiner(&[D::Singular], 1.0));
        v.insert("one", determiner(&[D::Def, D::Singular], 1.0));
        for (idx, word) in [
            "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        ]
        .iter()
        .enumerate()
        {
            v.insert(word, determiner(&[D::Def, D::Plural], idx as f32 + 2.0));
        }

        // Create verbs
        v.insert("create", verb(&[D::Create]));
        v.insert("draw", verb(&[D::Create]));
        v.insert("build", verb(&[D::Create]));
        v.insert("place", verb(&[D::Create]));
        v.insert("make", verb(&[D::Create, D::ScaleVerb, D::Style]));

        // Edit verbs
        v.insert("copy", verb(&[D::Edit]));
        v.insert("delete", verb(&[D::Edit]));
        v.insert("remove", verb(&[D::Edit]));
        v.insert("paste", verb(&[D::Edit]));

        // Organize verbs
        v.insert("align", verb(&[D::Organize]));
        v.insert("group", verb(&[D::Organize]));
        v.insert("position", verb(&[D::Organize]));
        v.insert("ungroup", verb(&[D::Organize]));

        // Selection
        v.insert("select", verb(&[D::Select]));

        // Style verbs
        v.insert("color", verb(&[D::Style]));
        v.insert("texture", verb(&[D::Style]));

        // Transform verbs
        v.insert("move", verb(&[D::Move]));
        v.insert("scale", verb(&[D::ScaleVerb]));
        v.insert("rotate", verb(&[D::Rotate]));
        {
            let mut x = verb(&[D::Rotate]);
            x.set(D::RotX, 1.0);
            v.insert("xrotate", x);
            let mut y = verb(&[D::Rotate]);
            y.set(D::RotY, 1.0);
            v.insert("yrotate", y);
            let mut z = verb(&[D::Rotate]);
            z.set(D::RotZ, 1.0);
            v.insert("zrotate", z);
        }

        // Generic verbs
        v.insert("undo", verb(&[]));
        v.insert("redo", verb(&[]));
        v.insert("go", verb(&[]));
        v.insert("name", verb(&[D::Naming]));

        // Modal verbs
        for modal in [
            "can", "could", "may", "might", "must", "shall", "should", "will", "would",
        ] {
            v.insert(
                modal,
                SemanticVector::from_features(&[D::Verb, D::Modal]),
            );
        }

        // Spatial prepositions: vertical family
        v.insert(
            "above",
            prep(&[(D::SpatialLocation, 1.0), (D::SpatialVertical, 1.0), (D::DirY, 1.0)]),
        );
        v.insert(
            "over",
            prep(&[(D::SpatialLocation, 1.0), (D::SpatialVertical, 1.0), (D::DirY, 1.0)]),
        );
        v.insert(
            "on",
            prep(&[(D::SpatialLocation, 1.0), (D::SpatialVertical, 0.5), (D::DirY, 0.5)]),
        );
        v.insert(
            "under",
            prep(&[(D::SpatialLocation, 1.0), (D::SpatialVertical, -1.0), (D::DirY, -1.0)]),
        );
        v.insert(
            "below",
            prep(&[(D::SpatialLocation, 1.0), (D::SpatialVertical, -1.0), (D::DirY, -1.0)]),
        );

        // Spatial prepositions: lateral and depth families
        v.insert(
            "right of",
            prep(&[(D::SpatialLocation, 1.0), (D::DirX, 1.0)]),
        );
        v.insert(
            "left of",
            prep(&[(D::SpatialLocation, 1.0), (D::DirX, -1.0)]),
        );
        v.insert(
            "beside",
            prep(&[(D::SpatialLocation, 1.0), (D::DirX, 1.0)]),
        );
        v.insert(
            "behind",
            prep(&[(D::SpatialLocation, 1.0), (D::DirZ, 1.0)]),
        );
        v.insert(
            "in front of",
            prep(&[(D::SpatialLocation, 1.0), (D::DirZ, -1.0)]),
        );

        // Proximity prepositions
        v.insert("near", prep(&[(D::SpatialProximity, 1.0)]));
        v.insert("at", prep(&[(D::SpatialProximity, 0.5)]));
        v.insert("in", prep(&[(D::SpatialProximity, 0.3)]));

        // Directional prepositions
        v.insert("to", prep(&[(D::DirectionalTarget, 1.0)]));
        v.insert("from", prep(&[(D::DirectionalTarget, -1.0)]));

        // Agency / instrumentality
        v.insert("by", prep(&[(D::DirectionalAgency, 1.0)]));
        v.insert("with", prep(&[(D::DirectionalAgency, 0.7)]));

        // Relational prepositions
        v.insert("of", prep(&[(D::RelationalPossession, 1.0)]));
        v.insert("than", prep(&[(D::RelationalComparison, 1.0)]));
        v.insert("as", prep(&[(D::Naming, 1.0)]));

        // Coordination, negation, questions, copulas
        v.insert("and", SemanticVector::from_features(&[D::Conj]));
        v.insert("or", SemanticVector::from_features(&[D::Disj]));
        v.insert("not", SemanticVector::from_features(&[D::Neg]));
        v.insert("no", SemanticVector::from_features(&[D::Neg]));
        for question in ["who", "what", "where", "when", "why", "how", "which"] {
            v.insert(question, SemanticVector::from_features(&[D::Question]));
        }
        for copula in ["is", "are", "was", "were", "be", "been"] {
            v.insert(copula, SemanticVector::from_features(&[D::Tobe]));
        }

        v
    }
}
