//! Build errors for automata.

use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error(
        "Transition relation is not deterministic ({count} conflicting pairs): {}",
        .conflicts.join("; ")
    )]
    NonDeterministic { count: usize, conflicts: Vec<String> },
}
