//! minidfa: a minimal deterministic finite automaton engine
//!
//! An automaton holds a start state, an ordered transition relation and a
//! current-state cursor. Symbols are consumed one at a time; a symbol with no
//! transition from the current state is reported as `false` and leaves the
//! cursor where it was. Whether the consumed input is accepted is a question
//! about the current state: is it final?
//!
//! # Core Concepts
//!
//! - **State / Symbol**: comparable identities; states carry a fixed final flag
//! - **Delta**: the ordered `(source, symbol, target)` relation
//! - **Automaton**: `step`, `consume`, `current_state`, `is_accepting`
//! - **Validation**: every determinism conflict is found when an automaton is
//!   created and is either logged or turned into a `BuildError`
//!
//! # Example
//!
//! ```rust
//! use minidfa::{Automaton, Delta, TaggedState, TaggedSymbol};
//!
//! let eat = TaggedState::simple(0);
//! let sleep = TaggedState::accepting(1);
//! let work = TaggedState::simple(2);
//!
//! let tired = TaggedSymbol::new(0);
//! let hungry = TaggedSymbol::new(1);
//! let bored = TaggedSymbol::new(2);
//!
//! let delta = Delta::new()
//!     .with(eat, tired, sleep)
//!     .with(eat, hungry, eat)
//!     .with(eat, bored, work)
//!     .with(sleep, tired, sleep)
//!     .with(sleep, hungry, eat)
//!     .with(sleep, bored, work)
//!     .with(work, tired, sleep)
//!     .with(work, hungry, eat)
//!     .with(work, bored, work);
//!
//! let mut mood = Automaton::new(sleep, delta);
//!
//! assert!(mood.consume([tired, hungry, bored, tired]));
//! assert_eq!(mood.current_state(), &sleep);
//! assert!(mood.is_accepting());
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use crate::automaton::{Automaton, Delta, Transition, TransitionError};
pub use crate::builder::{AutomatonBuilder, BuildError};
pub use crate::core::{State, Symbol, TaggedState, TaggedSymbol};
pub use crate::validation::{ConflictPolicy, DeterminismConflict};
