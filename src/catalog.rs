//! Built-in example automata.
//!
//! The same library the editor offers from its examples menu. State ids are
//! the editor's numeric ids; labels carry the familiar `q0`, `q1` names.

use crate::core::{AutomatonKind, AutomatonModel, StateNode, Symbol, TransitionEdge};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How much background an example assumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// A catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Example {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AutomatonKind,
    pub difficulty: Difficulty,
    pub automaton: AutomatonModel,
}

/// Every example, in menu order.
pub fn all() -> Vec<Example> {
    vec![
        even_zeros(),
        contains_01(),
        divisible_by_3(),
        ends_with_01(),
        third_from_end_is_1(),
        epsilon_a_or_ab(),
        starts_and_ends_same(),
    ]
}

pub fn by_id(id: &str) -> Option<Example> {
    all().into_iter().find(|example| example.id == id)
}

pub fn by_category(category: AutomatonKind) -> Vec<Example> {
    all()
        .into_iter()
        .filter(|example| example.category == category)
        .collect()
}

pub fn by_difficulty(difficulty: Difficulty) -> Vec<Example> {
    all()
        .into_iter()
        .filter(|example| example.difficulty == difficulty)
        .collect()
}

fn state(id: &str, label: &str, x: f64, y: f64) -> StateNode {
    StateNode::new(id).labeled(label).at(x, y)
}

type EdgeSpec<'a> = (&'a str, &'a str, &'a str, &'a [&'a str]);

fn model(kind: AutomatonKind, states: Vec<StateNode>, edges: &[EdgeSpec<'_>]) -> AutomatonModel {
    AutomatonModel {
        kind,
        states,
        transitions: edges
            .iter()
            .map(|&(id, from, to, symbols)| {
                TransitionEdge::new(id, from, to, symbols.iter().copied())
            })
            .collect(),
        alphabet: vec![Symbol::from("0"), Symbol::from("1")],
    }
}

fn even_zeros() -> Example {
    Example {
        id: "dfa-even-zeros",
        name: "Even number of 0s",
        description: "Accepts strings with an even number of 0s",
        category: AutomatonKind::Deterministic,
        difficulty: Difficulty::Beginner,
        automaton: model(
            AutomatonKind::Deterministic,
            vec![
                state("1", "q0", 200.0, 200.0).initial().accept(),
                state("2", "q1", 400.0, 200.0),
            ],
            &[
                ("t1", "1", "2", &["0"]),
                ("t2", "2", "1", &["0"]),
                ("t3", "1", "1", &["1"]),
                ("t4", "2", "2", &["1"]),
            ],
        ),
    }
}

fn contains_01() -> Example {
    Example {
        id: "dfa-contains-01",
        name: "Contains substring \"01\"",
        description: "Accepts strings that contain \"01\" as a substring",
        category: AutomatonKind::Deterministic,
        difficulty: Difficulty::Beginner,
        automaton: model(
            AutomatonKind::Deterministic,
            vec![
                state("1", "q0", 150.0, 200.0).initial(),
                state("2", "q1", 300.0, 200.0),
                state("3", "q2", 450.0, 200.0).accept(),
            ],
            &[
                ("t1", "1", "1", &["1"]),
                ("t2", "1", "2", &["0"]),
                ("t3", "2", "2", &["0"]),
                ("t4", "2", "3", &["1"]),
                ("t5", "3", "3", &["0", "1"]),
            ],
        ),
    }
}

fn divisible_by_3() -> Example {
    Example {
        id: "dfa-divisible-by-3",
        name: "Binary divisible by 3",
        description: "Accepts binary numbers divisible by 3",
        category: AutomatonKind::Deterministic,
        difficulty: Difficulty::Intermediate,
        automaton: model(
            AutomatonKind::Deterministic,
            vec![
                state("1", "q0", 250.0, 150.0).initial().accept(),
                state("2", "q1", 400.0, 100.0),
                state("3", "q2", 400.0, 250.0),
            ],
            &[
                ("t1", "1", "1", &["0"]),
                ("t2", "1", "2", &["1"]),
                ("t3", "2", "3", &["0"]),
                ("t4", "2", "1", &["1"]),
                ("t5", "3", "2", &["0"]),
                ("t6", "3", "3", &["1"]),
            ],
        ),
    }
}

fn ends_with_01() -> Example {
    Example {
        id: "nfa-ends-with-01",
        name: "Ends with \"01\"",
        description: "NFA that accepts strings ending with \"01\"",
        category: AutomatonKind::Nondeterministic,
        difficulty: Difficulty::Beginner,
        automaton: model(
            AutomatonKind::Nondeterministic,
            vec![
                state("1", "q0", 150.0, 200.0).initial(),
                state("2", "q1", 300.0, 200.0),
                state("3", "q2", 450.0, 200.0).accept(),
            ],
            &[
                ("t1", "1", "1", &["0", "1"]),
                ("t2", "1", "2", &["0"]),
                ("t3", "2", "3", &["1"]),
            ],
        ),
    }
}

fn third_from_end_is_1() -> Example {
    Example {
        id: "nfa-third-from-end-is-1",
        name: "Third symbol from end is 1",
        description: "NFA that accepts strings where the third symbol from the end is 1",
        category: AutomatonKind::Nondeterministic,
        difficulty: Difficulty::Intermediate,
        automaton: model(
            AutomatonKind::Nondeterministic,
            vec![
                state("1", "q0", 100.0, 200.0).initial(),
                state("2", "q1", 250.0, 200.0),
                state("3", "q2", 400.0, 200.0),
                state("4", "q3", 550.0, 200.0).accept(),
            ],
            &[
                ("t1", "1", "1", &["0", "1"]),
                ("t2", "1", "2", &["1"]),
                ("t3", "2", "3", &["0", "1"]),
                ("t4", "3", "4", &["0", "1"]),
            ],
        ),
    }
}

fn epsilon_a_or_ab() -> Example {
    let mut automaton = model(
        AutomatonKind::Nondeterministic,
        vec![
            state("1", "q0", 150.0, 200.0).initial(),
            state("2", "q1", 300.0, 200.0).accept(),
            state("3", "q2", 450.0, 200.0).accept(),
        ],
        &[
            ("t1", "1", "2", &["a"]),
            ("t2", "2", "3", &["ε"]),
            ("t3", "3", "3", &["b"]),
        ],
    );
    automaton.alphabet = vec![Symbol::from("a"), Symbol::from("b")];

    Example {
        id: "nfa-epsilon",
        name: "NFA with ε-transitions",
        description: "Demonstrates epsilon transitions (accepts \"a\" or \"ab\")",
        category: AutomatonKind::Nondeterministic,
        difficulty: Difficulty::Intermediate,
        automaton,
    }
}

fn starts_and_ends_same() -> Example {
    Example {
        id: "dfa-starts-and-ends-same",
        name: "Starts and ends with same symbol",
        description: "DFA accepting strings that start and end with the same symbol",
        category: AutomatonKind::Deterministic,
        difficulty: Difficulty::Advanced,
        automaton: model(
            AutomatonKind::Deterministic,
            vec![
                state("1", "q0", 200.0, 200.0).initial(),
                state("2", "q1", 350.0, 100.0).accept(),
                state("3", "q2", 500.0, 100.0),
                state("4", "q3", 350.0, 300.0).accept(),
                state("5", "q4", 500.0, 300.0),
            ],
            &[
                ("t1", "1", "2", &["0"]),
                ("t2", "1", "4", &["1"]),
                ("t3", "2", "2", &["0"]),
                ("t4", "2", "3", &["1"]),
                ("t5", "3", "2", &["0"]),
                ("t6", "3", "3", &["1"]),
                ("t7", "4", "5", &["0"]),
                ("t8", "4", "4", &["1"]),
                ("t9", "5", "5", &["0"]),
                ("t10", "5", "4", &["1"]),
            ],
        ),
    }
}
