//! Semantic validation of parsed sentences.
//!
//! The parser emits every sentence it can build; this pass tells a host
//! which ones are actually executable and why the rest are not. Validation
//! never mutates anything and is safe to run on any parse result.

use latn_core::{Constituent, NpConstituent, SentenceKind, SentencePhrase, VerbKind, VerbPhrase};

/// How bad a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    /// The sentence cannot be executed as parsed.
    Error,
    /// Execution is possible but likely not what the speaker meant.
    Warning,
}

/// One finding about a sentence.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub message: String,
}

/// All findings for one sentence.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no error-severity issue was found.
    #[must_use]
    pub fn is_executable(&self) -> bool {
        self.issues
            .iter()
            .all(|i| i.severity != IssueSeverity::Error)
    }

    fn error(&mut self, message: String) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Error,
            message,
        });
    }

    fn warning(&mut self, message: String) {
        self.issues.push(ValidationIssue {
            severity: IssueSeverity::Warning,
            message,
        });
    }
}

/// Validate a sentence for execution. `scene_attached` enables the
/// grounding checks; without a scene an unresolved referent is expected,
/// not suspicious.
#[must_use]
pub fn validate_sentence(sentence: &SentencePhrase, scene_attached: bool) -> ValidationReport {
    let mut report = ValidationReport::default();

    match sentence.kind {
        SentenceKind::Imperative => {
            if let Some(predicate) = &sentence.predicate {
                for vp in predicate.parts() {
                    validate_verb_phrase(vp, scene_attached, &mut report);
                }
            }
        }
        SentenceKind::Declarative => {
            if let Some(predicate) = &sentence.predicate {
                for vp in predicate.parts() {
                    validate_verb_phrase(vp, scene_attached, &mut report);
                }
            }
            if let (Some(subject), true) = (&sentence.subject, scene_attached) {
                warn_unresolved(subject, "subject", &mut report);
            }
        }
        SentenceKind::Identification => {
            if let (Some(subject), true) = (&sentence.subject, scene_attached) {
                warn_unresolved(subject, "subject", &mut report);
            }
        }
        SentenceKind::Definition => {
            if let Some(definition) = &sentence.definition {
                if definition.vector.nonzero().count() == 0 {
                    report.warning(format!(
                        "definition of '{}' carries no semantic content",
                        definition.word
                    ));
                }
            }
        }
    }

    report
}

fn validate_verb_phrase(vp: &VerbPhrase, scene_attached: bool, report: &mut ValidationReport) {
    let verb = vp.verb_word().unwrap_or("?");

    if vp.kind.takes_object() && vp.object.is_none() {
        report.error(format!("verb '{verb}' requires a direct object"));
    }

    if vp.lacks_directional_pp {
        report.error(format!("movement verb '{verb}' has no destination"));
    }

    // A create verb's object names a new entity; every other kind refers to
    // something that should already exist.
    if scene_attached && vp.kind != VerbKind::Create {
        if let Some(object) = &vp.object {
            warn_unresolved(object, "object", report);
        }
    }

    for pp_constituent in &vp.preps {
        for pp in pp_constituent.parts() {
            if let Some(score) = pp.spatial_score {
                if score < 0.5 {
                    report.warning(format!(
                        "spatial relation '{}' is implausible in the current scene (score {score:.1})",
                        pp.preposition_word().unwrap_or("?"),
                    ));
                }
            }
        }
    }
}

fn warn_unresolved(constituent: &NpConstituent, role: &str, report: &mut ValidationReport) {
    let unresolved = match constituent {
        Constituent::Single(np) => !np.is_resolved() && np.pronoun.is_none(),
        Constituent::Coordinated(conj) => conj
            .children
            .iter()
            .any(|np| !np.is_resolved() && np.pronoun.is_none()),
    };
    if unresolved {
        report.warning(format!(
            "{role} '{}' did not match any scene entity",
            latn_core::Phrase::describe(constituent)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use latn_core::{Dimension, SemanticVector};
    use std::sync::Arc;

    fn verb(word: &str, dims: &[Dimension]) -> SemanticVector {
        let mut v = SemanticVector::from_features(&[Dimension::Verb, Dimension::Action]);
        for &dim in dims {
            v.set(dim, 1.0);
        }
        v.with_word(word)
    }

    fn np(noun: &str) -> Arc<NpConstituent> {
        let mut p = latn_core::NounPhrase::new();
        p.apply_noun(&SemanticVector::from_features(&[Dimension::Noun]).with_word(noun));
        Arc::new(Constituent::Single(p))
    }

    #[test]
    fn create_without_object_is_an_error() {
        let vp = VerbPhrase::new(verb("draw", &[Dimension::Create]));
        let sentence = SentencePhrase::imperative(Arc::new(Constituent::Single(vp)));
        let report = validate_sentence(&sentence, false);
        assert!(!report.is_executable());
        assert!(report.issues[0].message.contains("direct object"));
    }

    #[test]
    fn flagged_movement_verb_is_an_error() {
        let mut vp = VerbPhrase::new(verb("move", &[Dimension::Move]));
        vp.set_object(np("cube"));
        vp.finish();
        let sentence = SentencePhrase::imperative(Arc::new(Constituent::Single(vp)));
        let report = validate_sentence(&sentence, false);
        assert!(!report.is_executable());
        assert!(report.issues[0].message.contains("destination"));
    }

    #[test]
    fn ungrounded_object_is_only_a_warning_with_a_scene() {
        let mut vp = VerbPhrase::new(verb("delete", &[Dimension::Edit]));
        vp.set_object(np("cube"));
        vp.finish();
        let sentence = SentencePhrase::imperative(Arc::new(Constituent::Single(vp)));

        let without_scene = validate_sentence(&sentence, false);
        assert!(without_scene.issues.is_empty());

        let with_scene = validate_sentence(&sentence, true);
        assert!(with_scene.is_executable());
        assert_eq!(with_scene.issues.len(), 1);
        assert_eq!(with_scene.issues[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn create_objects_do_not_need_grounding() {
        let mut vp = VerbPhrase::new(verb("draw", &[Dimension::Create]));
        vp.set_object(np("cube"));
        vp.finish();
        let sentence = SentencePhrase::imperative(Arc::new(Constituent::Single(vp)));
        let report = validate_sentence(&sentence, true);
        assert!(report.issues.is_empty());
    }

    #[test]
    fn empty_definition_is_flagged() {
        let sentence = SentencePhrase::definition(latn_core::DefinitionPayload {
            word: "blorp".to_string(),
            vector: SemanticVector::new(),
        });
        let report = validate_sentence(&sentence, false);
        assert!(report.is_executable());
        assert_eq!(report.issues.len(), 1);
    }
}
