//! A growable store that owns every state of one automaton.
//!
//! Parents reference children by [`StateId`] index rather than by ownership,
//! so the same state can be reached from any number of parents. That identity
//! aliasing is the mechanism by which minimization shares suffixes.

use std::ops::{Index, IndexMut};

use super::state::{State, StateId};
use super::symbol::Symbol;

/// Arena of states addressed by stable `StateId` indices.
///
/// Ids are assigned at allocation and never reused within one arena, so they
/// double as the unique identity of each state. An arena belongs to exactly
/// one automaton; ids from different arenas must never be mixed.
#[derive(Debug)]
pub(crate) struct StateArena<C: Symbol> {
    states: Vec<State<C>>,
}

impl<C: Symbol> StateArena<C> {
    pub(crate) fn new() -> Self {
        StateArena { states: Vec::new() }
    }

    /// Allocates a fresh, empty, non-terminal state.
    pub(crate) fn alloc(&mut self) -> StateId {
        let id = StateId::from_index(self.states.len());
        self.states.push(State::new());
        id
    }

    /// Returns the existing child of `parent` for `symbol`, or installs a
    /// fresh state as the unique transition for that symbol.
    ///
    /// Idempotent with respect to repeated calls for the same symbol.
    pub(crate) fn add_child(&mut self, parent: StateId, symbol: C) -> StateId {
        if let Some(existing) = self[parent].get(symbol) {
            return existing;
        }
        let child = self.alloc();
        self[parent].add_transition(symbol, child);
        child
    }

    /// Total number of states ever allocated, including duplicates abandoned
    /// by folding. Reachable-state counts are the automaton's concern.
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}

impl<C: Symbol> Index<StateId> for StateArena<C> {
    type Output = State<C>;

    #[inline]
    fn index(&self, id: StateId) -> &State<C> {
        &self.states[id.index()]
    }
}

impl<C: Symbol> IndexMut<StateId> for StateArena<C> {
    #[inline]
    fn index_mut(&mut self, id: StateId) -> &mut State<C> {
        &mut self.states[id.index()]
    }
}
