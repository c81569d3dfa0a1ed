//! Example: building a Wordlist wrapper around Automaton.
//!
//! This shows how to layer a convenient dictionary API on top of the
//! automaton's query and enumeration surface: word lookup, prefix checking,
//! and listing every stored word.
//!
//! Run with: cargo run --example wordlist

use libdafsa::dafsa::{Automaton, StateId};

/// A convenient wrapper around an automaton for word validation.
struct Wordlist {
    automaton: Automaton<char>,
}

impl Wordlist {
    fn new(automaton: Automaton<char>) -> Self {
        Wordlist { automaton }
    }

    /// Returns true if the word is in the wordlist.
    fn is_word(&self, word: &str) -> bool {
        self.automaton.contains(word)
    }

    /// Returns true if any word in the wordlist starts with the given prefix.
    fn has_prefix(&self, prefix: &str) -> bool {
        self.automaton.has_prefix(prefix)
    }

    /// Returns all words in the wordlist.
    fn all_words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut prefix = String::new();
        self.collect_words(self.automaton.root(), &mut prefix, &mut words);
        words
    }

    fn collect_words(&self, id: StateId, prefix: &mut String, words: &mut Vec<String>) {
        let state = self.automaton.state(id);
        if state.is_terminal() {
            words.push(prefix.clone());
        }
        for (symbol, child) in state.transitions() {
            prefix.push(symbol);
            self.collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

fn main() {
    let words = ["bake", "baked", "baker", "cake", "caked", "fake", "lake"];
    let automaton = Automaton::from_words(words).unwrap();
    let wordlist = Wordlist::new(automaton);

    // Word lookup
    println!("Word lookup:");
    for word in ["bake", "baker", "bakes", "cake", "lake", "make"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    // Prefix checking
    println!("\nPrefix checking:");
    for prefix in ["ba", "cak", "ma", "fak"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    // List all words
    println!("\nAll words: {:?}", wordlist.all_words());
}
