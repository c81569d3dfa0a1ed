use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as transition symbols in an automaton.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: transitions store symbols by value
/// - `Eq + Ord`: comparing symbols and keeping transition lists sorted
/// - `Hash`: equivalence-class lookups during construction
/// - `Debug`: debug printing of states and build errors
pub trait Symbol: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> Symbol for T {}
