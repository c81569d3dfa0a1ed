use smallvec::SmallVec;

use super::symbol::Symbol;

/// Identifier of a state within the arena of the automaton that owns it.
///
/// Ids are arena indices: stable and unique for the lifetime of the automaton,
/// and meaningful only within the automaton that produced them. They identify
/// states for sharing and equivalence purposes; they carry no language
/// semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    pub(crate) fn from_index(index: usize) -> Self {
        StateId(u32::try_from(index).expect("state arena exceeded u32::MAX entries"))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw numeric value of this id.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Most states in a word graph have very few outgoing transitions, so the
/// first two live inline without a heap allocation.
type TransitionList<C> = SmallVec<[(C, StateId); 2]>;

/// A single automaton state: a terminal flag plus deterministic transitions
/// to child states.
///
/// Transitions are kept sorted by symbol at all times, so there is at most
/// one transition per symbol and the [`Signature`] derived from them is
/// canonical no matter in which order the transitions were installed.
#[derive(Clone, Debug)]
pub struct State<C: Symbol> {
    terminal: bool,
    registered: bool,
    transitions: TransitionList<C>,
}

impl<C: Symbol> State<C> {
    pub(crate) fn new() -> Self {
        State {
            terminal: false,
            registered: false,
            transitions: TransitionList::new(),
        }
    }

    /// Returns the state that `symbol`'s transition leads to, if any.
    #[inline]
    pub fn get(&self, symbol: C) -> Option<StateId> {
        // Transition lists are tiny; a scan beats binary search here.
        self.transitions
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, child)| child)
    }

    /// True if this state marks the end of at least one accepted word.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub(crate) fn mark_terminal(&mut self) {
        self.terminal = true;
    }

    /// True once this state has been finalized and is eligible for sharing.
    ///
    /// Only meaningful during construction; every state of a finished
    /// automaton is registered.
    #[inline]
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub(crate) fn mark_registered(&mut self) {
        self.registered = true;
    }

    /// True if this state has at least one outgoing transition.
    #[inline]
    pub fn has_transitions(&self) -> bool {
        !self.transitions.is_empty()
    }

    /// Returns the number of outgoing transitions.
    #[inline]
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Iterates over the outgoing transitions in ascending symbol order.
    #[inline]
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = (C, StateId)> + '_ {
        self.transitions.iter().copied()
    }

    /// Installs a transition for `symbol` in sorted position.
    ///
    /// The caller must ensure no transition for `symbol` exists yet; the
    /// automaton is deterministic.
    pub(crate) fn add_transition(&mut self, symbol: C, child: StateId) {
        debug_assert!(self.get(symbol).is_none(), "duplicate transition symbol");
        let pos = self.transitions.partition_point(|&(s, _)| s < symbol);
        self.transitions.insert(pos, (symbol, child));
    }

    /// The transition with the greatest symbol, i.e. the one extended most
    /// recently when words arrive in sorted order.
    pub(crate) fn last_transition(&self) -> Option<(C, StateId)> {
        self.transitions.last().copied()
    }

    /// Redirects the greatest-symbol transition to `child`.
    ///
    /// During folding, only the rightmost chain of the previous word is ever
    /// rewritten, and its edge out of each ancestor is always the greatest
    /// symbol installed so far.
    pub(crate) fn replace_last_transition(&mut self, child: StateId) {
        let last = self
            .transitions
            .last_mut()
            .expect("replace_last_transition on a state with no transitions");
        last.1 = child;
    }

    /// Returns the equivalence-class signature of this state.
    ///
    /// The signature is only stable once all children referenced by it are
    /// canonical (their ids will never change again); the builder folds
    /// bottom-up to guarantee this.
    pub(crate) fn signature(&self) -> Signature<C> {
        Signature {
            terminal: self.terminal,
            transitions: self.transitions.clone(),
        }
    }
}

/// Equivalence-class signature of a state.
///
/// Two states are interchangeable if and only if they are both terminal or
/// both non-terminal, and their symbol-ordered `(symbol, child id)` transition
/// lists are identical. Since transition lists are kept sorted by symbol, two
/// states with the same outgoing set produce equal signatures regardless of
/// the order the transitions were added in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Signature<C: Symbol> {
    terminal: bool,
    transitions: TransitionList<C>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_transitions() {
        let state = State::<char>::new();
        assert!(!state.has_transitions());
        assert_eq!(state.transition_count(), 0);
        assert_eq!(state.get('a'), None);
        assert_eq!(state.last_transition(), None);
    }

    #[test]
    fn transitions_are_kept_sorted_by_symbol() {
        let mut state = State::new();
        state.add_transition('c', StateId::from_index(3));
        state.add_transition('a', StateId::from_index(1));
        state.add_transition('b', StateId::from_index(2));
        let symbols: Vec<char> = state.transitions().map(|(s, _)| s).collect();
        assert_eq!(symbols, vec!['a', 'b', 'c']);
        assert_eq!(state.get('b'), Some(StateId::from_index(2)));
        assert_eq!(state.get('d'), None);
    }

    #[test]
    fn last_transition_is_the_greatest_symbol() {
        let mut state = State::new();
        state.add_transition('b', StateId::from_index(2));
        state.add_transition('z', StateId::from_index(26));
        state.add_transition('j', StateId::from_index(10));
        assert_eq!(state.last_transition(), Some(('z', StateId::from_index(26))));

        state.replace_last_transition(StateId::from_index(99));
        assert_eq!(state.get('z'), Some(StateId::from_index(99)));
        assert_eq!(state.get('j'), Some(StateId::from_index(10)));
    }

    #[test]
    fn signature_is_insertion_order_independent() {
        let mut first = State::new();
        first.add_transition('a', StateId::from_index(1));
        first.add_transition('b', StateId::from_index(2));

        let mut second = State::new();
        second.add_transition('b', StateId::from_index(2));
        second.add_transition('a', StateId::from_index(1));

        assert_eq!(first.signature(), second.signature());
    }

    #[test]
    fn signature_distinguishes_terminal_flag_and_children() {
        let mut plain = State::<char>::new();
        let mut terminal = State::<char>::new();
        terminal.mark_terminal();
        assert_ne!(plain.signature(), terminal.signature());

        plain.add_transition('a', StateId::from_index(1));
        let mut other_child = State::<char>::new();
        other_child.add_transition('a', StateId::from_index(2));
        assert_ne!(plain.signature(), other_child.signature());
    }
}
