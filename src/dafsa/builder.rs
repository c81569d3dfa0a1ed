use smallvec::SmallVec;

use std::error::Error;

use super::arena::StateArena;
use super::automaton::Automaton;
use super::register::Register;
use super::state::StateId;
use super::symbol::Symbol;

/// Trait for types that can be used as a word when building an automaton.
///
/// Implemented for common string and sequence types so that
/// [`Builder::add_word`] and [`Automaton::from_words`] accept them directly
/// without manual conversion.
pub trait IntoWord<C: Symbol> {
    /// Collects this word into a symbol buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: Symbol> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: Symbol> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: Symbol> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: Symbol, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: Symbol, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// Errors that can occur while building an automaton.
#[derive(Debug, PartialEq, Eq)]
pub enum BuildError<C: Symbol> {
    /// [`Builder::finish`] was called before any word was added.
    EmptyInput,
    /// A supplied word contained no symbols. The root is never terminal, so
    /// the empty word cannot be represented.
    EmptyWord,
    /// Words were not in strictly increasing lexicographic order.
    ///
    /// Contains the two offending words (previous word, current word).
    /// Duplicates are reported through this variant as well.
    OutOfOrder(Vec<C>, Vec<C>),
}

impl<C: Symbol> std::fmt::Display for BuildError<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyInput => write!(f, "no words were supplied"),
            BuildError::EmptyWord => write!(f, "words must contain at least one symbol"),
            BuildError::OutOfOrder(prev, cur) => {
                write!(f, "words out of order: {prev:?} came before {cur:?}")
            }
        }
    }
}

impl<C: Symbol> Error for BuildError<C> {}

/// Incremental builder for a minimal automaton.
///
/// Words must be added in strictly increasing lexicographic order; the
/// builder validates this and fails fast on violations instead of silently
/// producing a mis-minimized graph. Sorted input is what allows each
/// insertion to touch only the rightmost, still-open suffix chain of the
/// previous word.
///
/// # Examples
///
/// ```
/// use libdafsa::dafsa::Builder;
///
/// let mut builder = Builder::new();
/// builder.add_word("bake").unwrap();
/// builder.add_word("cake").unwrap();
/// builder.add_word("lake").unwrap();
/// let automaton = builder.finish().unwrap();
///
/// assert!(automaton.contains("cake"));
/// assert!(!automaton.contains("ake"));
/// ```
pub struct Builder<C: Symbol> {
    arena: StateArena<C>,
    register: Register<C>,
    /// Path of the previous word: `path[0]` is the root and `path[i + 1]` the
    /// state reached after consuming `prev_word[i]`. Entries above the common
    /// prefix with the next word form the unregistered suffix chain pending
    /// minimization.
    path: Vec<StateId>,
    prev_word: SmallVec<[C; 32]>,
    word_count: usize,
}

impl<C: Symbol> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Symbol> Builder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        let mut arena = StateArena::new();
        let root = arena.alloc();
        Builder {
            arena,
            register: Register::new(),
            path: vec![root],
            prev_word: SmallVec::new(),
            word_count: 0,
        }
    }

    /// Adds a word to the automaton being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including
    /// `&str`, `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyWord`] for a word with no symbols, and
    /// [`BuildError::OutOfOrder`] if the word does not sort strictly after
    /// the previously added one.
    pub fn add_word(&mut self, word: impl IntoWord<C>) -> Result<(), BuildError<C>> {
        let word = word.collect_word();
        self.add_word_slice(&word)
    }

    fn add_word_slice(&mut self, word: &[C]) -> Result<(), BuildError<C>> {
        if word.is_empty() {
            return Err(BuildError::EmptyWord);
        }
        // Descend: the part of the tree this word shares with what is already
        // built is, thanks to sorted input, exactly its common prefix with
        // the previous word, and that path is still on the stack.
        let prefix_len = self.common_prefix(word)?;
        // Fold: the previous word's chain below the divergence point is now
        // closed off and can be minimized.
        self.fold_chain(prefix_len);
        // Extend: append fresh states for the remaining symbols.
        let mut last = self.path[prefix_len];
        for &symbol in &word[prefix_len..] {
            last = self.arena.add_child(last, symbol);
            self.path.push(last);
        }
        self.arena[last].mark_terminal();
        self.prev_word.clear();
        self.prev_word.extend_from_slice(word);
        self.word_count += 1;
        Ok(())
    }

    /// Length of the common prefix of `word` and the previous word, after
    /// checking that `word` sorts strictly after it.
    fn common_prefix(&self, word: &[C]) -> Result<usize, BuildError<C>> {
        let mut n = 0;
        while word.get(n).is_some() && word.get(n) == self.prev_word.get(n) {
            n += 1;
        }
        let in_order = match (word.get(n), self.prev_word.get(n)) {
            // Diverging symbol must grow.
            (Some(w), Some(p)) => w > p,
            // The previous word is a proper prefix of this one.
            (Some(_), None) => true,
            // This word is a duplicate or a proper prefix of the previous one.
            (None, _) => false,
        };
        if in_order {
            Ok(n)
        } else {
            Err(BuildError::OutOfOrder(
                self.prev_word.to_vec(),
                word.to_vec(),
            ))
        }
    }

    /// Folds the suffix chain of the previous word bottom-up until only
    /// `prefix_len` edges of it remain on the stack.
    ///
    /// Iterative on the ancestor path collected during descent, so folding
    /// depth never grows the call stack no matter how long the word was.
    fn fold_chain(&mut self, prefix_len: usize) {
        while self.path.len() > prefix_len + 1 {
            let child = self.path.pop().expect("path always contains the root");
            let parent = *self.path.last().expect("path always contains the root");
            self.replace_or_register(parent, child);
        }
    }

    /// Replaces `child` with its canonical equivalent if one is registered,
    /// or registers `child` as the canonical state of its class.
    fn replace_or_register(&mut self, parent: StateId, child: StateId) {
        debug_assert!(!self.arena[child].is_registered());
        debug_assert!(
            self.arena[child]
                .transitions()
                .all(|(_, c)| self.arena[c].is_registered()),
            "children must be canonical before their parent is folded"
        );
        if let Some(canonical) = self.register.find(&self.arena[child]) {
            // Point the chain at the canonical state; the freshly built
            // duplicate stays in the arena, unreachable.
            self.arena[parent].replace_last_transition(canonical);
        } else {
            self.register.add(&self.arena[child], child);
            self.arena[child].mark_registered();
        }
    }

    /// Finalizes construction and returns the finished automaton.
    ///
    /// Consumes the builder, folds the last word's suffix chain (there is no
    /// subsequent word to trigger it) and discards the register.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::EmptyInput`] if no word was ever added.
    pub fn finish(mut self) -> Result<Automaton<C>, BuildError<C>> {
        if self.word_count == 0 {
            return Err(BuildError::EmptyInput);
        }
        self.fold_chain(0);
        let root = self.path[0];
        self.arena[root].mark_registered();
        tracing::debug!(
            words = self.word_count,
            classes = self.register.len(),
            arena_states = self.arena.len(),
            "automaton construction finished"
        );
        Ok(Automaton::new(self.arena, root))
    }
}
