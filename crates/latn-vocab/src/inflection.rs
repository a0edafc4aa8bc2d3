//! Morphological inflection: plural nouns, comparative/superlative
//! adjectives, and verb participles.
//!
//! Each analyzer returns base-form *candidates*; the vocabulary decides which
//! candidate actually exists. Irregular forms are handled by explicit tables
//! before any suffix rule runs.

use regex::Regex;
use std::sync::OnceLock;

/// Degree of an inflected adjective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Degree {
    Comparative,
    Superlative,
}

impl Degree {
    /// Scalar boost applied to the base adjective's semantic dimensions.
    #[must_use]
    pub fn boost(self) -> f32 {
        match self {
            Degree::Comparative => 1.2,
            Degree::Superlative => 1.5,
        }
    }
}

/// Inflection dimension of a resolved verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbInflection {
    Past,
    PastParticiple,
    PresentParticiple,
}

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("mice", "mouse"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("men", "man"),
    ("women", "woman"),
    ("geese", "goose"),
];

/// Singular candidate for a plural noun form, or `None` when the word does
/// not look plural.
#[must_use]
pub fn singularize(word: &str) -> Option<String> {
    let word = word.to_lowercase();
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return Some((*singular).to_string());
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return Some(format!("{stem}y"));
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with('s')
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return Some(stem.to_string());
        }
    }
    if let Some(stem) = word.strip_suffix('s') {
        if !stem.is_empty() && !stem.ends_with('s') {
            return Some(stem.to_string());
        }
    }
    None
}

const IRREGULAR_ADJECTIVES: &[(&str, &str, Degree)] = &[
    ("better", "good", Degree::Comparative),
    ("best", "good", Degree::Superlative),
    ("worse", "bad", Degree::Comparative),
    ("worst", "bad", Degree::Superlative),
    ("more", "much", Degree::Comparative),
    ("most", "much", Degree::Superlative),
    ("further", "far", Degree::Comparative),
    ("furthest", "far", Degree::Superlative),
    ("farther", "far", Degree::Comparative),
    ("farthest", "far", Degree::Superlative),
];

fn ends_with_doubled_consonant(stem: &str) -> bool {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) => a == b && a.is_ascii_alphabetic() && !"aeiou".contains(a),
        _ => false,
    }
}

/// Base-form candidates for a comparative/superlative adjective, or `None`
/// when the word carries neither suffix.
#[must_use]
pub fn adjective_candidates(word: &str) -> Option<(Vec<String>, Degree)> {
    let word = word.to_lowercase();
    if let Some((_, base, degree)) = IRREGULAR_ADJECTIVES.iter().find(|(form, _, _)| *form == word)
    {
        return Some((vec![(*base).to_string()], *degree));
    }

    if let Some(stem) = word.strip_suffix("est") {
        if stem.len() >= 2 {
            let mut candidates = vec![stem.to_string()];
            // largest -> large
            candidates.push(format!("{stem}e"));
            if ends_with_doubled_consonant(stem) {
                // biggest -> big, reddest -> red
                candidates.push(stem[..stem.len() - 1].to_string());
            }
            return Some((candidates, Degree::Superlative));
        }
    }
    if let Some(stem) = word.strip_suffix("er") {
        if stem.len() >= 2 {
            let mut candidates = vec![stem.to_string()];
            // larger -> large
            candidates.push(format!("{stem}e"));
            if ends_with_doubled_consonant(stem) {
                // bigger -> big, redder -> red
                candidates.push(stem[..stem.len() - 1].to_string());
            }
            return Some((candidates, Degree::Comparative));
        }
    }
    None
}

const IRREGULAR_VERBS: &[(&str, &str, VerbInflection)] = &[
    ("gone", "go", VerbInflection::PastParticiple),
    ("done", "do", VerbInflection::PastParticiple),
    ("seen", "see", VerbInflection::PastParticiple),
    ("taken", "take", VerbInflection::PastParticiple),
    ("given", "give", VerbInflection::PastParticiple),
    ("made", "make", VerbInflection::PastParticiple),
    ("said", "say", VerbInflection::PastParticiple),
    ("told", "tell", VerbInflection::PastParticiple),
    ("found", "find", VerbInflection::PastParticiple),
    ("drawn", "draw", VerbInflection::PastParticiple),
    ("went", "go", VerbInflection::Past),
    ("gave", "give", VerbInflection::Past),
    ("saw", "see", VerbInflection::Past),
    ("took", "take", VerbInflection::Past),
    ("did", "do", VerbInflection::Past),
    ("had", "have", VerbInflection::Past),
    ("drew", "draw", VerbInflection::Past),
];

fn past_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)ed$").expect("valid pattern"))
}

fn present_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+)ing$").expect("valid pattern"))
}

fn stem_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string()];
    // moved -> move, rotating -> rotate
    candidates.push(format!("{stem}e"));
    if ends_with_doubled_consonant(stem) {
        // putting -> put
        candidates.push(stem[..stem.len() - 1].to_string());
    }
    candidates
}

/// Base-form candidates for a participle, or `None` when the word matches no
/// verb pattern. The irregular table takes precedence over the suffix
/// regexes.
#[must_use]
pub fn verb_candidates(word: &str) -> Option<(Vec<String>, VerbInflection)> {
    let word = word.to_lowercase();
    if let Some((_, base, inflection)) = IRREGULAR_VERBS.iter().find(|(form, _, _)| *form == word) {
        return Some((vec![(*base).to_string()], *inflection));
    }
    if let Some(captures) = past_pattern().captures(&word) {
        let stem = &captures[1];
        return Some((stem_candidates(stem), VerbInflection::PastParticiple));
    }
    if let Some(captures) = present_pattern().captures(&word) {
        let stem = &captures[1];
        return Some((stem_candidates(stem), VerbInflection::PresentParticiple));
    }
    None
}
