//! Determinism conflicts and how construction reacts to them.

use crate::core::{State, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two transitions that share a source and a symbol but disagree on the
/// target.
///
/// Indices refer to positions in the relation; `first_index < second_index`,
/// so `first_target` is the one that fires at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct DeterminismConflict<S: State, A: Symbol> {
    pub from: S,
    pub symbol: A,
    pub first_target: S,
    pub second_target: S,
    pub first_index: usize,
    pub second_index: usize,
}

impl<S: State, A: Symbol> fmt::Display for DeterminismConflict<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state {:?} on symbol {:?} leads to both {:?} (transition #{}) and {:?} (transition #{})",
            self.from,
            self.symbol,
            self.first_target,
            self.first_index,
            self.second_target,
            self.second_index
        )
    }
}

/// What automaton construction does when the relation is not deterministic
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Log every conflict and build anyway; the first matching transition wins
    #[default]
    Warn,

    /// Refuse to build
    Reject,
}
