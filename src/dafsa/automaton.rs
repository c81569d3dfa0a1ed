use hashbrown::HashSet;

use std::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::arena::StateArena;
use super::builder::{BuildError, Builder, IntoWord};
use super::state::{State, StateId};
use super::symbol::Symbol;

/// A minimal deterministic acyclic finite-state automaton over words.
///
/// Built exactly once, through [`Automaton::from_words`],
/// [`Automaton::from_file`] or [`Builder`](super::Builder); immutable
/// afterwards. Queries never mutate, so a finished automaton is safe to share
/// between any number of concurrent readers.
///
/// The automaton owns an arena of [`State`]s addressed by [`StateId`]; the
/// graph reachable from [`root`](Automaton::root) is a DAG in which
/// minimization lets several parents point at one shared child.
#[derive(Debug)]
pub struct Automaton<C: Symbol> {
    arena: StateArena<C>,
    root: StateId,
}

impl<C: Symbol> Automaton<C> {
    pub(crate) fn new(arena: StateArena<C>, root: StateId) -> Self {
        Automaton { arena, root }
    }

    /// Builds an automaton from an iterator of words.
    ///
    /// Each word must implement [`IntoWord`], so `&str`, `String`, slices,
    /// vectors and arrays are all accepted. Words **must** be in strictly
    /// increasing lexicographic order; this is what allows a minimal
    /// automaton to be constructed in a single pass.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the iterator is empty, a word is empty, or
    /// the words are out of order.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let automaton = Automaton::from_words(["bake", "cake", "fake", "lake"]).unwrap();
    /// assert!(automaton.contains("cake"));
    /// assert!(!automaton.contains("ake"));
    /// ```
    pub fn from_words<W>(words: impl IntoIterator<Item = W>) -> Result<Self, BuildError<C>>
    where
        W: IntoWord<C>,
    {
        let mut builder = Builder::new();
        for word in words {
            builder.add_word(word)?;
        }
        builder.finish()
    }

    /// Checks whether `word` is accepted by the automaton.
    ///
    /// Walks from the root consuming one symbol at a time; an unmatched
    /// symbol means the word is absent. The empty word is never accepted.
    /// Queries cannot fail, they only answer `false`.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        word.collect_word()
            .iter()
            .try_fold(self.root, |id, &symbol| self.state(id).get(symbol))
            .is_some_and(|id| self.state(id).is_terminal())
    }

    /// Checks whether any accepted word starts with `prefix`.
    ///
    /// The empty prefix is a prefix of every word, so it always answers
    /// `true`.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        prefix
            .collect_word()
            .iter()
            .try_fold(self.root, |id, &symbol| self.state(id).get(symbol))
            .is_some()
    }

    /// Returns the id of the root state.
    pub fn root(&self) -> StateId {
        self.root
    }

    /// Returns the state with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not originate from this automaton.
    pub fn state(&self, id: StateId) -> &State<C> {
        &self.arena[id]
    }

    /// Number of distinct live states reachable from the root.
    ///
    /// Deduplicated by state identity: minimization gives states multiple
    /// incoming edges, so this is a DAG walk with a visited set, not a tree
    /// count. Duplicate states abandoned during folding are not counted.
    pub fn state_count(&self) -> usize {
        self.states().count()
    }

    /// Iterates over the distinct states reachable from the root.
    ///
    /// Every live state is yielded exactly once, even when several parents
    /// share it. This, together with [`State::transitions`], is the full
    /// structural enumeration surface: exporters can rebuild the entire DAG
    /// from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let automaton = Automaton::from_words(["ais", "ait"]).unwrap();
    /// let terminals = automaton.states().filter(|(_, s)| s.is_terminal()).count();
    /// assert_eq!(terminals, 1); // "s" and "t" share their terminal state
    /// ```
    pub fn states(&self) -> States<'_, C> {
        States {
            automaton: self,
            stack: vec![self.root],
            seen: HashSet::new(),
        }
    }

    /// Ids of every terminal state reachable from the root.
    pub fn terminal_ids(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states()
            .filter(|(_, state)| state.is_terminal())
            .map(|(id, _)| id)
    }
}

impl Automaton<char> {
    /// Builds an automaton from a sorted dictionary file, one word per line.
    ///
    /// Lines starting with `#` are treated as comments and ignored, and empty
    /// lines are skipped. The remaining words must be sorted, exactly as for
    /// [`Automaton::from_words`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use libdafsa::dafsa::Automaton;
    ///
    /// let automaton = Automaton::from_file("dictionary.txt").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let mut builder = Builder::new();
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        // Calling read_line in a loop instead of using BufReader::lines lets
        // us reuse one buffer rather than allocating a string per line.
        let mut words = 0usize;
        let mut buf = String::with_capacity(80);
        loop {
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Err(e) => return Err(e.into()),
                _ => {}
            }
            let word = buf.trim_end();
            if !word.is_empty() && !is_comment(word) {
                builder.add_word(word)?;
                words += 1;
            }
            buf.clear();
        }
        tracing::debug!(path = %path.display(), words, "loaded dictionary file");
        Ok(builder.finish()?)
    }
}

/// Returns true if this dictionary-file line is a comment.
fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Iterator over the distinct states reachable from an automaton's root.
///
/// Yields `(id, state)` pairs in depth-first order, each state exactly once.
pub struct States<'a, C: Symbol> {
    automaton: &'a Automaton<C>,
    stack: Vec<StateId>,
    seen: HashSet<StateId>,
}

impl<'a, C: Symbol> Iterator for States<'a, C> {
    type Item = (StateId, &'a State<C>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            if !self.seen.insert(id) {
                continue;
            }
            let state = self.automaton.state(id);
            self.stack.extend(state.transitions().map(|(_, child)| child));
            return Some((id, state));
        }
    }
}
