//! Construction-time determinism checking.
//!
//! A transition relation is deterministic when no `(state, symbol)` pair maps
//! to two different targets. The check uses Stillwater's `Validation` type to
//! accumulate ALL conflicts instead of stopping at the first one, so a single
//! pass reports everything wrong with a relation.
//!
//! # Example
//!
//! ```rust
//! use minidfa::automaton::Delta;
//! use minidfa::core::{TaggedState, TaggedSymbol};
//! use minidfa::validation::{check_determinism, find_conflicts};
//!
//! let s = TaggedState::simple(0);
//! let t = TaggedState::simple(1);
//! let u = TaggedState::accepting(2);
//! let a = TaggedSymbol::new(0);
//!
//! let delta = Delta::new().with(s, a, t).with(s, a, u);
//!
//! assert!(check_determinism(&delta).is_failure());
//! assert_eq!(find_conflicts(&delta).len(), 1);
//! ```

pub mod conflict;
pub mod rules;

pub use conflict::{ConflictPolicy, DeterminismConflict};
pub use rules::{check_determinism, find_conflicts};
