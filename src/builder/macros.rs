//! Macros for declaring states, symbols and relations with little boilerplate.

/// Generate a fieldless enum implementing [`State`](crate::core::State).
///
/// Variants listed under `final:` are accepting states.
///
/// # Example
///
/// ```
/// use minidfa::core::State;
/// use minidfa::state_enum;
///
/// state_enum! {
///     pub enum Mood {
///         Eat,
///         Sleep,
///         Work,
///     }
///     final: [Sleep]
/// }
///
/// assert!(Mood::Sleep.is_final());
/// assert!(!Mood::Work.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate a fieldless enum implementing [`Symbol`](crate::core::Symbol).
///
/// # Example
///
/// ```
/// use minidfa::symbol_enum;
///
/// symbol_enum! {
///     pub enum Need {
///         Tired,
///         Hungry,
///         Bored,
///     }
/// }
///
/// assert_ne!(Need::Tired, Need::Bored);
/// ```
#[macro_export]
macro_rules! symbol_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Symbol for $name {}
    };
}

/// Build a [`Delta`](crate::automaton::Delta) from `(source, symbol) => target` rules.
///
/// Rules keep their written order.
///
/// # Example
///
/// ```
/// use minidfa::{delta, TaggedState, TaggedSymbol};
///
/// let off = TaggedState::simple(0);
/// let on = TaggedState::accepting(1);
/// let toggle = TaggedSymbol::new(0);
///
/// let delta = delta![
///     (off, toggle) => on,
///     (on, toggle) => off,
/// ];
///
/// assert_eq!(delta.len(), 2);
/// ```
#[macro_export]
macro_rules! delta {
    ($(($source:expr, $symbol:expr) => $target:expr),* $(,)?) => {
        $crate::automaton::Delta::from(::std::vec![
            $($crate::automaton::Transition::new($source, $symbol, $target)),*
        ])
    };
}
