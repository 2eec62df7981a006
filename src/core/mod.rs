//! Identity model for states and symbols.
//!
//! This module contains the leaf types of the crate:
//! - The `State` trait and the integer-tagged `TaggedState`
//! - The `Symbol` trait and the integer-tagged `TaggedSymbol`
//!
//! Everything here is an immutable value with no side effects.

mod state;
mod symbol;

pub use state::{State, StateId, TaggedState};
pub use symbol::{Symbol, SymbolId, TaggedSymbol};
