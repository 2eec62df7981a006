//! The automaton engine.
//!
//! # Key Concepts
//!
//! - **Transition**: a `(source, symbol, target)` rule
//! - **Delta**: the ordered transition relation, shared read-only via `Arc`
//! - **Automaton**: start state, relation and a current-state cursor
//!
//! `step` is the primitive: it either follows a transition and returns
//! `true`, or leaves the cursor alone and returns `false`. `consume` applies
//! `step` to a whole sequence without stopping at failures, so streaming and
//! batch input go through the same code path.

mod machine;
mod transition;

pub use machine::Automaton;
pub use transition::{Delta, Transition, TransitionError};
