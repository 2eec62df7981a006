//! Builder for constructing automata.

use crate::automaton::{Automaton, Delta, Transition};
use crate::builder::error::BuildError;
use crate::core::{State, Symbol};
use crate::validation::ConflictPolicy;

/// Builder for constructing automata with a fluent API.
///
/// # Example
///
/// ```rust
/// use minidfa::builder::AutomatonBuilder;
/// use minidfa::validation::ConflictPolicy;
/// use minidfa::{TaggedState, TaggedSymbol};
///
/// let locked = TaggedState::accepting(0);
/// let unlocked = TaggedState::simple(1);
/// let coin = TaggedSymbol::new(0);
/// let push = TaggedSymbol::new(1);
///
/// let mut turnstile = AutomatonBuilder::new()
///     .start(locked)
///     .transition(locked, coin, unlocked)
///     .transition(unlocked, push, locked)
///     .on_conflict(ConflictPolicy::Reject)
///     .build()
///     .unwrap();
///
/// assert!(turnstile.accepts([coin, push]));
/// ```
pub struct AutomatonBuilder<S: State, A: Symbol> {
    start: Option<S>,
    delta: Delta<S, A>,
    on_conflict: ConflictPolicy,
}

impl<S: State, A: Symbol> AutomatonBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            start: None,
            delta: Delta::new(),
            on_conflict: ConflictPolicy::default(),
        }
    }

    /// Set the start state (required).
    pub fn start(mut self, state: S) -> Self {
        self.start = Some(state);
        self
    }

    /// Add a single transition.
    pub fn transition(mut self, source: S, symbol: A, target: S) -> Self {
        self.delta.push(Transition::new(source, symbol, target));
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Transition<S, A>>,
    {
        self.delta.extend(transitions.into_iter().map(Into::into));
        self
    }

    /// Append every transition of an existing relation.
    pub fn delta(self, delta: Delta<S, A>) -> Self {
        self.transitions(delta)
    }

    /// Set how determinism conflicts are handled (defaults to warn).
    pub fn on_conflict(mut self, policy: ConflictPolicy) -> Self {
        self.on_conflict = policy;
        self
    }

    /// Build the automaton.
    /// Returns an error if the start state is missing or the relation is
    /// rejected by the conflict policy. An empty relation is allowed.
    pub fn build(self) -> Result<Automaton<S, A>, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        Automaton::with_policy(start, self.delta, self.on_conflict)
    }
}

impl<S: State, A: Symbol> Default for AutomatonBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
