//! # libdafsa
//!
//! A compact exact-membership dictionary backed by a minimal
//! [DAFSA](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton)
//! (deterministic acyclic finite-state automaton).
//!
//! A DAFSA is essentially a trie with shared suffixes: a DAG-shaped automaton
//! recognizing exactly a finite set of words, with O(word length) lookups.
//! The automaton is built online from a sorted word list using the algorithm
//! described in [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1),
//! folding structurally-equivalent suffixes into shared states as each word
//! is inserted, so the finished graph is the unique minimal automaton for the
//! input language.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any
//!   type implementing [`Symbol`](dafsa::Symbol)
//! - **Compact**: suffix sharing minimizes the number of states
//! - **Safe sharing**: states live in an index-addressed arena, so one state
//!   can be the child of many parents without aliasing tricks
//! - **Read-only after construction**: queries never mutate, so a finished
//!   automaton can be shared freely between threads
//!
//! ## Quick start
//!
//! ```
//! use libdafsa::dafsa::Automaton;
//!
//! let automaton = Automaton::from_words(["aient", "ais", "ait", "zoo"]).unwrap();
//!
//! assert!(automaton.contains("ais"));
//! assert!(automaton.contains("zoo"));
//! assert!(!automaton.contains("ai"));
//! assert!(!automaton.contains(""));
//! ```
//!
//! Words must be supplied in strictly increasing lexicographic order;
//! anything else is rejected up front:
//!
//! ```
//! use libdafsa::dafsa::Automaton;
//!
//! let result = Automaton::<char>::from_words(["zoo", "ais"]);
//! assert!(result.is_err());
//! ```
//!
//! ## Generic usage
//!
//! The automaton is generic over the transition symbol type:
//!
//! ```
//! use libdafsa::dafsa::Automaton;
//!
//! let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
//! let automaton = Automaton::from_words(words).unwrap();
//!
//! assert!(automaton.contains([1u8, 2, 3]));
//! assert!(!automaton.contains([1u8, 2, 5]));
//! ```

#![warn(missing_docs)]

/// Core DAFSA data structures: states, builder, automaton, and symbol trait.
pub mod dafsa;
