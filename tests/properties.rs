//! Randomized properties of automaton construction and membership.

use proptest::prelude::*;

use libdafsa::dafsa::Automaton;

fn word() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,12}").unwrap()
}

/// Sorted, duplicate-free word lists, as the builder requires.
fn sorted_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::btree_set(word(), 1..64).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn accepts_exactly_the_input_words(
        words in sorted_words(),
        probes in proptest::collection::vec(word(), 0..32),
    ) {
        let automaton = Automaton::from_words(&words).unwrap();
        for word in &words {
            prop_assert!(automaton.contains(word.as_str()), "missing {word:?}");
        }
        for probe in &probes {
            let expected = words.binary_search(probe).is_ok();
            prop_assert_eq!(automaton.contains(probe.as_str()), expected, "probe {:?}", probe);
        }
        prop_assert!(!automaton.contains(""));
    }

    #[test]
    fn state_count_is_bounded_by_total_symbols(words in sorted_words()) {
        let total_symbols: usize = words.iter().map(|w| w.chars().count()).sum();
        let automaton = Automaton::from_words(&words).unwrap();
        prop_assert!(automaton.state_count() <= total_symbols + 1);
    }

    #[test]
    fn construction_is_deterministic(words in sorted_words()) {
        let first = Automaton::from_words(&words).unwrap();
        let second = Automaton::from_words(&words).unwrap();
        prop_assert_eq!(first.state_count(), second.state_count());
    }

    #[test]
    fn no_two_live_states_are_structurally_equal(words in sorted_words()) {
        let automaton = Automaton::from_words(&words).unwrap();
        // A state's shape is its terminal flag plus its ordered transition
        // list; minimality means every live state has a distinct shape.
        let shapes: std::collections::HashSet<_> = automaton
            .states()
            .map(|(_, state)| {
                (
                    state.is_terminal(),
                    state
                        .transitions()
                        .map(|(symbol, child)| (symbol, child.as_u32()))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
        prop_assert_eq!(shapes.len(), automaton.state_count());
    }

    #[test]
    fn every_path_through_the_graph_spells_an_input_word(words in sorted_words()) {
        let automaton = Automaton::from_words(&words).unwrap();
        // Enumerate the accepted language from the structural API and compare
        // it with the input set.
        let mut accepted = Vec::new();
        let mut prefix = String::new();
        collect(&automaton, automaton.root(), &mut prefix, &mut accepted);
        accepted.sort();
        prop_assert_eq!(accepted, words);
    }
}

fn collect(
    automaton: &Automaton<char>,
    id: libdafsa::dafsa::StateId,
    prefix: &mut String,
    out: &mut Vec<String>,
) {
    let state = automaton.state(id);
    if state.is_terminal() {
        out.push(prefix.clone());
    }
    for (symbol, child) in state.transitions() {
        prefix.push(symbol);
        collect(automaton, child, prefix, out);
        prefix.pop();
    }
}
