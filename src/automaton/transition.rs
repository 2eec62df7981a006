//! Transitions and the transition relation.

use crate::core::{State, Symbol};

/// Errors that can occur when a step is required to succeed.
///
/// [`Automaton::step`](crate::Automaton::step) never returns this; it is only
/// produced by [`Automaton::try_step`](crate::Automaton::try_step).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition available from state '{state}' on symbol '{symbol}'")]
    NoTransition { state: String, symbol: String },
}

/// A single rule `(source, symbol) -> target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<S: State, A: Symbol> {
    pub source: S,
    pub symbol: A,
    pub target: S,
}

impl<S: State, A: Symbol> Transition<S, A> {
    pub fn new(source: S, symbol: A, target: S) -> Self {
        Self {
            source,
            symbol,
            target,
        }
    }

    /// Check if this transition fires from `current` on `symbol` (pure)
    pub fn matches(&self, current: &S, symbol: &A) -> bool {
        self.source == *current && self.symbol == *symbol
    }
}

impl<S: State, A: Symbol> From<(S, A, S)> for Transition<S, A> {
    fn from((source, symbol, target): (S, A, S)) -> Self {
        Self::new(source, symbol, target)
    }
}

/// Ordered transition relation.
///
/// Order matters: lookups return the first matching entry, which decides
/// what fires when the relation is not deterministic.
///
/// # Example
///
/// ```rust
/// use minidfa::automaton::Delta;
/// use minidfa::core::{TaggedState, TaggedSymbol};
///
/// let idle = TaggedState::simple(0);
/// let busy = TaggedState::accepting(1);
/// let go = TaggedSymbol::new(0);
///
/// let delta: Delta<_, _> = vec![(idle, go, busy), (busy, go, busy)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(delta.len(), 2);
/// assert_eq!(delta.lookup(&idle, &go).map(|t| t.target), Some(busy));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Delta<S: State, A: Symbol> {
    transitions: Vec<Transition<S, A>>,
}

impl<S: State, A: Symbol> Delta<S, A> {
    /// Create an empty relation.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn push(&mut self, transition: impl Into<Transition<S, A>>) {
        self.transitions.push(transition.into());
    }

    /// Append a transition, returning the relation for chaining.
    pub fn with(mut self, source: S, symbol: A, target: S) -> Self {
        self.push(Transition::new(source, symbol, target));
        self
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transition<S, A>> {
        self.transitions.iter()
    }

    pub fn transitions(&self) -> &[Transition<S, A>] {
        &self.transitions
    }

    /// Find the first transition leaving `state` on `symbol` (pure)
    pub fn lookup(&self, state: &S, symbol: &A) -> Option<&Transition<S, A>> {
        self.transitions.iter().find(|t| t.matches(state, symbol))
    }
}

impl<S: State, A: Symbol> Default for Delta<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Symbol> From<Vec<Transition<S, A>>> for Delta<S, A> {
    fn from(transitions: Vec<Transition<S, A>>) -> Self {
        Self { transitions }
    }
}

impl<S: State, A: Symbol> FromIterator<Transition<S, A>> for Delta<S, A> {
    fn from_iter<I: IntoIterator<Item = Transition<S, A>>>(iter: I) -> Self {
        Self {
            transitions: iter.into_iter().collect(),
        }
    }
}

impl<S: State, A: Symbol> FromIterator<(S, A, S)> for Delta<S, A> {
    fn from_iter<I: IntoIterator<Item = (S, A, S)>>(iter: I) -> Self {
        iter.into_iter().map(Transition::from).collect()
    }
}

impl<S: State, A: Symbol> Extend<Transition<S, A>> for Delta<S, A> {
    fn extend<I: IntoIterator<Item = Transition<S, A>>>(&mut self, iter: I) {
        self.transitions.extend(iter);
    }
}

impl<S: State, A: Symbol> IntoIterator for Delta<S, A> {
    type Item = Transition<S, A>;
    type IntoIter = std::vec::IntoIter<Transition<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.into_iter()
    }
}

impl<'a, S: State, A: Symbol> IntoIterator for &'a Delta<S, A> {
    type Item = &'a Transition<S, A>;
    type IntoIter = std::slice::Iter<'a, Transition<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.transitions.iter()
    }
}
