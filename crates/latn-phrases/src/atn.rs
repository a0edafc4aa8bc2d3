//! The generic ATN runner.
//!
//! An ATN is a directed graph of states with guarded arcs. Each arc tests
//! the next input token and, when taken, applies a side effect to the phrase
//! builder and consumes the token. The runner is a non-backtracking
//! left-to-right walker: within a state, guards are tried in construction
//! order, so each ATN orders its arcs most-specific-first. A run succeeds
//! when no arc matches in an accepting state; it fails with
//! [`AtnError::NoMatch`] everywhere else.

use crate::{AtnError, AtnResult};
use latn_core::Token;

type Guard<B> = Box<dyn Fn(&B, &Token) -> bool>;
type Action<B> = Box<dyn Fn(&mut B, &Token) -> AtnResult<()>>;

struct AtnArc<B> {
    guard: Guard<B>,
    action: Action<B>,
    target: StateId,
}

struct AtnState<B> {
    name: &'static str,
    accepting: bool,
    arcs: Vec<AtnArc<B>>,
}

/// Handle to a state within an [`Atn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateId(usize);

/// A recognizer network over a phrase builder `B`.
pub struct Atn<B> {
    states: Vec<AtnState<B>>,
    start: StateId,
}

impl<B> Atn<B> {
    /// Create an empty network; the first state added becomes the start
    /// state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            start: StateId(0),
        }
    }

    /// Add a state.
    pub fn state(&mut self, name: &'static str, accepting: bool) -> StateId {
        self.states.push(AtnState {
            name,
            accepting,
            arcs: Vec::new(),
        });
        StateId(self.states.len() - 1)
    }

    /// Add a consuming arc from `from` to `to`. Guards are evaluated in the
    /// order arcs were added.
    pub fn arc(
        &mut self,
        from: StateId,
        to: StateId,
        guard: impl Fn(&B, &Token) -> bool + 'static,
        action: impl Fn(&mut B, &Token) -> AtnResult<()> + 'static,
    ) {
        self.states[from.0].arcs.push(AtnArc {
            guard: Box::new(guard),
            action: Box::new(action),
            target: to,
        });
    }

    /// Run the network against the front of `tokens`.
    ///
    /// On success returns the builder and the number of tokens consumed
    /// (at least one: an empty match is reported as [`AtnError::NoMatch`]).
    pub fn run(&self, tokens: &[Token], builder: B) -> AtnResult<(B, usize)> {
        let mut state = self.start;
        let mut builder = builder;
        let mut consumed = 0;

        loop {
            let current = &self.states[state.0];
            let arc = tokens
                .get(consumed)
                .and_then(|token| current.arcs.iter().find(|arc| (arc.guard)(&builder, token)));

            match arc {
                Some(arc) => {
                    (arc.action)(&mut builder, &tokens[consumed])?;
                    consumed += 1;
                    state = arc.target;
                }
                None if current.accepting && consumed > 0 => {
                    return Ok((builder, consumed));
                }
                None => {
                    return Err(AtnError::NoMatch {
                        state: current.name,
                        position: consumed,
                    });
                }
            }
        }
    }
}

impl<B> Default for Atn<B> {
    fn default() -> Self {
        Self::new()
    }
}
