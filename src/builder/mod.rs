//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and macros for declaring states,
//! symbols and transition relations with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::AutomatonBuilder;

use crate::automaton::{Delta, Transition};
use crate::core::{State, Symbol};

/// Create a transition from `source` to `target` on `symbol`.
///
/// # Example
///
/// ```
/// use minidfa::builder::transition;
/// use minidfa::{Delta, TaggedState, TaggedSymbol};
///
/// let a = TaggedState::simple(0);
/// let b = TaggedState::accepting(1);
/// let x = TaggedSymbol::new(0);
///
/// let delta: Delta<_, _> = [transition(a, x, b)].into_iter().collect();
/// assert_eq!(delta.lookup(&a, &x).map(|t| t.target), Some(b));
/// ```
pub fn transition<S: State, A: Symbol>(source: S, symbol: A, target: S) -> Transition<S, A> {
    Transition::new(source, symbol, target)
}

/// Create the relation of a linear chain: `states[i]` moves to
/// `states[i + 1]` on `symbols[i]`.
///
/// Stops as soon as either the states or the symbols run out.
///
/// # Example
///
/// ```
/// use minidfa::builder::chain;
/// use minidfa::{Automaton, TaggedState};
///
/// let states = [
///     TaggedState::simple(0),
///     TaggedState::simple(1),
///     TaggedState::accepting(2),
/// ];
/// let mut ab = Automaton::new(states[0], chain(&states, &['a', 'b']));
///
/// assert!(ab.accepts("ab".chars()));
/// ```
pub fn chain<S: State, A: Symbol>(states: &[S], symbols: &[A]) -> Delta<S, A> {
    states
        .windows(2)
        .zip(symbols)
        .map(|(pair, symbol)| Transition::new(pair[0].clone(), symbol.clone(), pair[1].clone()))
        .collect()
}
