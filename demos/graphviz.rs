//! Example: rendering an automaton as Graphviz DOT source.
//!
//! Uses the structural enumeration API (`states`, `terminal_ids`,
//! `State::transitions`) to emit a graph description of the DAFSA built from
//! a small French word list. Terminal states are drawn as double circles.
//!
//! Run with: cargo run --example graphviz | dot -Tpng -o dafsa.png

use libdafsa::dafsa::Automaton;

const WORDS: [&str; 6] = ["ai", "aient", "aime", "aimer", "ais", "ait"];

fn main() {
    let automaton = Automaton::from_words(WORDS).unwrap();

    println!("digraph dafsa {{");
    println!("    rankdir=LR;");
    print!("    node [shape = doublecircle];");
    for id in automaton.terminal_ids() {
        print!(" {}", id.as_u32());
    }
    println!(";");
    println!("    node [shape = circle];");
    for (id, state) in automaton.states() {
        for (symbol, child) in state.transitions() {
            println!(
                "    {} -> {} [label=\"{}\"];",
                id.as_u32(),
                child.as_u32(),
                symbol
            );
        }
    }
    println!("}}");
}
