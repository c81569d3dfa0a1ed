//! Construction-time registry of canonical states.
//!
//! The register maps each equivalence-class signature to the one state chosen
//! as the canonical representative of that class. It exists only while an
//! automaton is being built and is dropped when construction finishes.

use hashbrown::HashMap;

use super::state::{Signature, State, StateId};
use super::symbol::Symbol;

/// Index from equivalence-class signature to canonical state id.
///
/// At most one state per signature is ever stored; folding replaces fresh
/// duplicates with the stored representative instead of registering them.
pub(crate) struct Register<C: Symbol> {
    classes: HashMap<Signature<C>, StateId>,
}

impl<C: Symbol> Register<C> {
    pub(crate) fn new() -> Self {
        Register {
            classes: HashMap::new(),
        }
    }

    /// Returns the canonical state equivalent to `state`, if one exists.
    pub(crate) fn find(&self, state: &State<C>) -> Option<StateId> {
        self.classes.get(&state.signature()).copied()
    }

    /// Records `id` as the canonical state for `state`'s equivalence class.
    ///
    /// All of the state's children must already be canonical, so that the
    /// child ids baked into the signature never change again.
    pub(crate) fn add(&mut self, state: &State<C>, id: StateId) {
        let previous = self.classes.insert(state.signature(), id);
        debug_assert!(previous.is_none(), "class already has a canonical state");
    }

    /// Number of distinct equivalence classes registered so far.
    pub(crate) fn len(&self) -> usize {
        self.classes.len()
    }
}
