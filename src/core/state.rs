//! State identities for automata.
//!
//! A state is anything comparable that can tell whether it is final
//! (accepting). The engine never inspects a state beyond `==` and
//! [`State::is_final`].

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

/// Integer identity carried by a [`TaggedState`].
pub type StateId = i64;

/// Trait for automaton states.
///
/// All methods are pure. States are immutable values; two states denote the
/// same position of an automaton iff they compare equal.
///
/// # Example
///
/// ```rust
/// use minidfa::core::State;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Locked)
///     }
/// }
///
/// assert!(Door::Locked.is_final());
/// assert!(!Door::Open.is_final());
/// ```
pub trait State: Clone + PartialEq + Debug + Send + Sync {
    /// Check if this is a final (accepting) state.
    ///
    /// Finality is a fixed property of the state, not of where an automaton
    /// currently is. Reaching a final state does not stop consumption.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// A state identified by an integer tag plus a fixed finality flag.
///
/// Equality and hashing look at the `id` only: two separately constructed
/// states with the same `id` are the same state.
///
/// # Example
///
/// ```rust
/// use minidfa::core::{State, TaggedState};
///
/// let eat = TaggedState::simple(0);
/// let sleep = TaggedState::accepting(1);
///
/// assert!(!eat.is_final());
/// assert!(sleep.is_final());
/// assert_eq!(sleep, TaggedState::new(1, true));
/// assert_ne!(eat, sleep);
/// ```
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TaggedState {
    id: StateId,
    is_final: bool,
}

impl TaggedState {
    /// Create a state with identity `id` and the given finality.
    pub const fn new(id: StateId, is_final: bool) -> Self {
        Self { id, is_final }
    }

    /// Create a non-final state.
    pub const fn simple(id: StateId) -> Self {
        Self::new(id, false)
    }

    /// Create a final (accepting) state.
    pub const fn accepting(id: StateId) -> Self {
        Self::new(id, true)
    }

    /// The identity tag.
    pub const fn id(&self) -> StateId {
        self.id
    }
}

impl PartialEq for TaggedState {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TaggedState {}

impl Hash for TaggedState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl State for TaggedState {
    fn is_final(&self) -> bool {
        self.is_final
    }
}

impl Display for TaggedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_final {
            write!(f, "q{}*", self.id)
        } else {
            write!(f, "q{}", self.id)
        }
    }
}
