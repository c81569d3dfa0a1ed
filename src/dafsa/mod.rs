/// Arena that owns every state of an automaton, addressed by stable indices.
pub(crate) mod arena;
/// The finished automaton and its query surface.
pub mod automaton;
/// Incremental builder that constructs a minimal automaton from sorted words.
pub mod builder;
/// Construction-time registry of canonical equivalence-class representatives.
pub(crate) mod register;
/// Automaton states and their equivalence-class signatures.
pub mod state;
/// Trait for types that can serve as transition symbols.
pub mod symbol;

pub use automaton::Automaton;
pub use builder::{BuildError, Builder, IntoWord};
pub use state::{State, StateId};
pub use symbol::Symbol;

#[cfg(test)]
mod test {
    use super::Automaton;

    fn is_word(automaton: &Automaton<char>, word: &str) -> bool {
        automaton.contains(word)
    }

    #[test]
    fn dictionary_round_trip() {
        let words = [
            "aient", "aimer", "ais", "ait", "sont", "zoo", "zoologie", "zoologiste",
        ];
        let automaton = Automaton::from_words(words).unwrap();
        for word in words {
            assert!(is_word(&automaton, word), "{word}");
        }
        // Prefixes and near-misses are not words.
        assert!(!is_word(&automaton, "aien"));
        assert!(!is_word(&automaton, "aiment"));
        assert!(!is_word(&automaton, "zoologis"));
        assert!(!is_word(&automaton, "zoologistes"));
    }

    #[test]
    fn built_twice_gives_the_same_language_and_size() {
        let words = ["alfa", "bravo", "charlie", "delta", "echo"];
        let first = Automaton::from_words(words).unwrap();
        let second = Automaton::from_words(words).unwrap();
        assert_eq!(first.state_count(), second.state_count());
        for word in words {
            assert_eq!(first.contains(word), second.contains(word));
        }
    }
}
