//! Coordination of same-kind phrases (`and` / `or` / comma lists).

use crate::{CoreError, Dimension, SemanticVector};

/// Common surface of every structured phrase type.
pub trait Phrase {
    /// The phrase's combined semantic vector.
    fn vector(&self) -> &SemanticVector;

    /// Human-readable rendering, e.g. `NP(the red box)`.
    fn describe(&self) -> String;
}

/// The coordinating token of a conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinator {
    And,
    Or,
}

impl Coordinator {
    /// Classify a stream token vector as a coordinator, if it is one.
    /// Commas are list continuations, not coordinators, and return `None`.
    #[must_use]
    pub fn from_vector(vector: &SemanticVector) -> Option<Self> {
        if vector.isa(Dimension::Conj) {
            Some(Coordinator::And)
        } else if vector.isa(Dimension::Disj) {
            Some(Coordinator::Or)
        } else {
            None
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Coordinator::And => "and",
            Coordinator::Or => "or",
        }
    }
}

/// A coordination of two or more phrases of the same kind.
///
/// Behaves at the hypothesis level as a single plural phrase of that kind.
/// The coordinator starts out undecided for comma-only lists (`a, b`) and is
/// fixed by the first `and`/`or`; once fixed, extending with the other
/// coordinator is a structural error.
#[derive(Debug, Clone)]
pub struct ConjunctionPhrase<P> {
    pub coordinator: Option<Coordinator>,
    pub children: Vec<P>,
    pub vector: SemanticVector,
}

impl<P: Phrase> ConjunctionPhrase<P> {
    /// Start a coordination from its first two children.
    #[must_use]
    pub fn pair(coordinator: Option<Coordinator>, first: P, second: P) -> Self {
        let mut phrase = Self {
            coordinator: None,
            children: Vec::new(),
            vector: SemanticVector::new(),
        };
        phrase.absorb(first);
        phrase.absorb(second);
        phrase.mark(coordinator);
        phrase
    }

    /// Append another child under `coordinator`.
    ///
    /// Fails with [`CoreError::MixedCoordinator`] when the coordination is
    /// already committed to the other coordinator; the caller treats that as
    /// a dead ATN branch.
    pub fn try_extend(&mut self, coordinator: Option<Coordinator>, phrase: P) -> Result<(), CoreError> {
        if let (Some(existing), Some(new)) = (self.coordinator, coordinator) {
            if existing != new {
                return Err(CoreError::MixedCoordinator {
                    existing: existing.name(),
                    new: new.name(),
                });
            }
        }
        self.absorb(phrase);
        self.mark(coordinator);
        Ok(())
    }

    fn absorb(&mut self, phrase: P) {
        self.vector += phrase.vector();
        self.children.push(phrase);
    }

    fn mark(&mut self, coordinator: Option<Coordinator>) {
        if self.coordinator.is_none() {
            self.coordinator = coordinator;
        }
        self.vector.set(Dimension::Plural, 1.0);
        self.vector.set(Dimension::Singular, 0.0);
        match self.coordinator {
            Some(Coordinator::And) => self.vector.set(Dimension::Conj, 1.0),
            Some(Coordinator::Or) => self.vector.set(Dimension::Disj, 1.0),
            None => {}
        }
    }
}

impl<P: Phrase> Phrase for ConjunctionPhrase<P> {
    fn vector(&self) -> &SemanticVector {
        &self.vector
    }

    fn describe(&self) -> String {
        let sep = match self.coordinator {
            Some(c) => format!(" {} ", c.name()),
            None => ", ".to_string(),
        };
        self.children
            .iter()
            .map(Phrase::describe)
            .collect::<Vec<_>>()
            .join(&sep)
    }
}

/// Either a single phrase or a coordination of phrases of the same kind.
/// Upper layers treat both uniformly through the [`Phrase`] trait.
#[derive(Debug, Clone)]
pub enum Constituent<P> {
    Single(P),
    Coordinated(ConjunctionPhrase<P>),
}

impl<P> Constituent<P> {
    /// All leaf phrases, in surface order.
    #[must_use]
    pub fn parts(&self) -> Vec<&P> {
        match self {
            Constituent::Single(p) => vec![p],
            Constituent::Coordinated(conj) => conj.children.iter().collect(),
        }
    }

    /// Mutable access to all leaf phrases, in surface order.
    pub fn parts_mut(&mut self) -> Vec<&mut P> {
        match self {
            Constituent::Single(p) => vec![p],
            Constituent::Coordinated(conj) => conj.children.iter_mut().collect(),
        }
    }

    #[must_use]
    pub fn is_coordinated(&self) -> bool {
        matches!(self, Constituent::Coordinated(_))
    }
}

impl<P: Phrase> Phrase for Constituent<P> {
    fn vector(&self) -> &SemanticVector {
        match self {
            Constituent::Single(p) => p.vector(),
            Constituent::Coordinated(conj) => &conj.vector,
        }
    }

    fn describe(&self) -> String {
        match self {
            Constituent::Single(p) => p.describe(),
            Constituent::Coordinated(conj) => conj.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Leaf(SemanticVector);

    impl Phrase for Leaf {
        fn vector(&self) -> &SemanticVector {
            &self.0
        }

        fn describe(&self) -> String {
            self.0.word().unwrap_or("leaf").to_string()
        }
    }

    fn leaf(word: &str, value: f32) -> Leaf {
        Leaf(SemanticVector::from_values(&[(Dimension::Red, value)]).with_word(word))
    }

    #[test]
    fn pair_merges_vectors_and_marks_plural() {
        let conj = ConjunctionPhrase::pair(Some(Coordinator::And), leaf("a", 1.0), leaf("b", 0.5));
        assert_eq!(conj.vector.get(Dimension::Red), 1.5);
        assert!(conj.vector.isa(Dimension::Plural));
        assert!(conj.vector.isa(Dimension::Conj));
        assert!(!conj.vector.isa(Dimension::Disj));
    }

    #[test]
    fn mixed_coordinators_are_rejected() {
        let mut conj =
            ConjunctionPhrase::pair(Some(Coordinator::And), leaf("a", 1.0), leaf("b", 1.0));
        let err = conj
            .try_extend(Some(Coordinator::Or), leaf("c", 1.0))
            .unwrap_err();
        assert!(matches!(err, CoreError::MixedCoordinator { .. }));
        assert_eq!(conj.children.len(), 2);
    }

    #[test]
    fn comma_list_adopts_first_real_coordinator() {
        let mut conj = ConjunctionPhrase::pair(None, leaf("a", 1.0), leaf("b", 1.0));
        assert!(conj.coordinator.is_none());
        conj.try_extend(Some(Coordinator::Or), leaf("c", 1.0)).unwrap();
        assert_eq!(conj.coordinator, Some(Coordinator::Or));
        assert!(conj.vector.isa(Dimension::Disj));
    }

    #[test]
    fn describe_joins_children() {
        let conj = ConjunctionPhrase::pair(Some(Coordinator::Or), leaf("a", 1.0), leaf("b", 1.0));
        assert_eq!(conj.describe(), "a or b");
    }
}
