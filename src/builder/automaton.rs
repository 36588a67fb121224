//! Builder for constructing automaton models.

use crate::builder::error::BuildError;
use crate::core::{AutomatonKind, AutomatonModel, StateNode, Symbol, TransitionEdge};
use std::collections::HashSet;

/// Builder for automaton models with a fluent API.
///
/// The builder only enforces what the engine cannot work without (unique ids).
/// Dangling edges, missing initial states and the like are left for the
/// validator to report, since the editor produces such models mid-edit.
pub struct AutomatonBuilder {
    kind: AutomatonKind,
    states: Vec<StateNode>,
    transitions: Vec<TransitionEdge>,
    alphabet: Vec<Symbol>,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new(kind: AutomatonKind) -> Self {
        Self {
            kind,
            states: Vec::new(),
            transitions: Vec::new(),
            alphabet: Vec::new(),
        }
    }

    pub fn dfa() -> Self {
        Self::new(AutomatonKind::Deterministic)
    }

    pub fn nfa() -> Self {
        Self::new(AutomatonKind::Nondeterministic)
    }

    /// Declare the alphabet. Replaces any previous declaration.
    pub fn alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.alphabet = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Add a state.
    pub fn state(mut self, state: StateNode) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = StateNode>) -> Self {
        self.states.extend(states);
        self
    }

    /// Add a transition.
    pub fn transition<I, S>(mut self, id: &str, from: &str, to: &str, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.transitions
            .push(TransitionEdge::new(id, from, to, symbols));
        self
    }

    /// Add a pre-built edge.
    pub fn edge(mut self, edge: TransitionEdge) -> Self {
        self.transitions.push(edge);
        self
    }

    /// Build the model.
    /// Returns an error if there are no states or ids repeat.
    pub fn build(self) -> Result<AutomatonModel, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut state_ids = HashSet::new();
        for state in &self.states {
            if !state_ids.insert(&state.id) {
                return Err(BuildError::DuplicateStateId {
                    id: state.id.clone(),
                });
            }
        }

        let mut transition_ids = HashSet::new();
        for edge in &self.transitions {
            if !transition_ids.insert(&edge.id) {
                return Err(BuildError::DuplicateTransitionId {
                    id: edge.id.clone(),
                });
            }
        }

        Ok(AutomatonModel {
            kind: self.kind,
            states: self.states,
            transitions: self.transitions,
            alphabet: self.alphabet,
        })
    }
}
