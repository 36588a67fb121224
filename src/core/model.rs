//! The automaton data model.
//!
//! `AutomatonModel` is the whole declarative description the editor hands
//! over on every call. The engine only ever borrows it.

use super::state::StateNode;
use super::symbol::{StateId, Symbol, TransitionId, EPSILON};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Which kind of machine a model describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutomatonKind {
    #[serde(rename = "DFA")]
    Deterministic,
    #[serde(rename = "NFA")]
    Nondeterministic,
    /// Declared by the document format but not executable.
    #[serde(rename = "PDA")]
    Pushdown,
}

impl AutomatonKind {
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Deterministic => "DFA",
            Self::Nondeterministic => "NFA",
            Self::Pushdown => "PDA",
        }
    }
}

impl fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// A labelled edge between two states.
///
/// One edge may carry several symbols. Parallel edges between the same pair of
/// states are kept separate; their symbol lists are never merged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionEdge {
    pub id: TransitionId,
    pub from: StateId,
    pub to: StateId,
    pub symbols: Vec<Symbol>,
}

impl TransitionEdge {
    pub fn new<I, S>(id: &str, from: &str, to: &str, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Self {
            id: TransitionId::from(id),
            from: StateId::from(from),
            to: StateId::from(to),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    pub fn has_epsilon(&self) -> bool {
        self.symbols.iter().any(Symbol::is_epsilon)
    }

    /// Does this edge consume the given input character?
    pub fn consumes(&self, c: char) -> bool {
        self.symbols.iter().any(|s| s.matches_char(c))
    }
}

/// A complete automaton as edited by the user.
///
/// Serializes to the editor's document format:
/// `{"type": "DFA", "states": [...], "transitions": [...], "alphabet": [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutomatonModel {
    #[serde(rename = "type")]
    pub kind: AutomatonKind,
    pub states: Vec<StateNode>,
    pub transitions: Vec<TransitionEdge>,
    /// Declared input symbols, excluding ε. Empty means unconstrained.
    #[serde(default)]
    pub alphabet: Vec<Symbol>,
}

impl AutomatonModel {
    /// Create an empty model of the given kind.
    pub fn new(kind: AutomatonKind) -> Self {
        Self {
            kind,
            states: Vec::new(),
            transitions: Vec::new(),
            alphabet: Vec::new(),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        self.kind == AutomatonKind::Deterministic
    }

    /// Look up a state by id. The first declaration wins for duplicate ids.
    pub fn state(&self, id: &str) -> Option<&StateNode> {
        self.states.iter().find(|s| s.id == id)
    }

    pub fn has_state(&self, id: &str) -> bool {
        self.state(id).is_some()
    }

    pub fn transition(&self, id: &str) -> Option<&TransitionEdge> {
        self.transitions.iter().find(|t| t.id == id)
    }

    /// All states flagged as initial, in declaration order.
    pub fn initial_states(&self) -> impl Iterator<Item = &StateNode> {
        self.states.iter().filter(|s| s.is_initial)
    }

    /// All accepting states, in declaration order.
    pub fn accept_states(&self) -> impl Iterator<Item = &StateNode> {
        self.states.iter().filter(|s| s.is_accept)
    }

    /// Outgoing edges of a state, in declaration order.
    pub fn outgoing<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a TransitionEdge> {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    pub fn is_accepting(&self, id: &str) -> bool {
        self.state(id).is_some_and(|s| s.is_accept)
    }

    /// Ids declared more than once, each reported once in order of first repeat.
    pub fn duplicate_state_ids(&self) -> Vec<&StateId> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for state in &self.states {
            if !seen.insert(state.id.as_str()) && reported.insert(state.id.as_str()) {
                duplicates.push(&state.id);
            }
        }
        duplicates
    }

    pub fn in_alphabet(&self, symbol: &Symbol) -> bool {
        self.alphabet.contains(symbol)
    }

    /// Add a symbol to the declared alphabet.
    ///
    /// The input is trimmed. Empty strings, `ε` and symbols already declared are
    /// ignored. Returns whether the alphabet changed.
    pub fn add_symbol(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim();
        if symbol.is_empty() || symbol == EPSILON {
            return false;
        }
        let symbol = Symbol::from(symbol);
        if self.in_alphabet(&symbol) {
            return false;
        }
        self.alphabet.push(symbol);
        true
    }

    /// Remove a symbol from the declared alphabet. Returns whether it was present.
    pub fn remove_symbol(&mut self, symbol: &str) -> bool {
        let before = self.alphabet.len();
        self.alphabet.retain(|s| s != symbol);
        self.alphabet.len() != before
    }
}
