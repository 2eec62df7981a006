//! Input symbols.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Integer identity carried by a [`TaggedSymbol`].
pub type SymbolId = i64;

/// Marker trait for input symbols.
///
/// Symbols have no attributes beyond their identity; the engine only ever
/// compares them with `==`.
pub trait Symbol: Clone + PartialEq + Debug + Send + Sync {}

/// A symbol identified by an integer tag.
///
/// # Example
///
/// ```rust
/// use minidfa::core::TaggedSymbol;
///
/// let tired = TaggedSymbol::new(0);
/// assert_eq!(tired, TaggedSymbol::new(0));
/// assert_ne!(tired, TaggedSymbol::new(1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaggedSymbol(SymbolId);

impl TaggedSymbol {
    pub const fn new(id: SymbolId) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> SymbolId {
        self.0
    }
}

impl Display for TaggedSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl Symbol for TaggedSymbol {}

// Text input can be fed character by character or byte by byte.
impl Symbol for char {}
impl Symbol for u8 {}
