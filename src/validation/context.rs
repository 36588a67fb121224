//! Context provided to validation checks.

use crate::core::{AutomatonModel, StateNode};
use std::collections::HashMap;

/// Borrowed model plus a state index, built once per `validate` call.
#[derive(Clone, Debug)]
pub struct ValidationContext<'a> {
    pub model: &'a AutomatonModel,
    states: HashMap<&'a str, &'a StateNode>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(model: &'a AutomatonModel) -> Self {
        let mut states = HashMap::with_capacity(model.states.len());
        for state in &model.states {
            states.entry(state.id.as_str()).or_insert(state);
        }
        Self { model, states }
    }

    pub fn state(&self, id: &str) -> Option<&'a StateNode> {
        self.states.get(id).copied()
    }

    /// Display name of a state: its label when declared, the raw id otherwise.
    pub fn display_name(&self, id: &str) -> String {
        self.state(id)
            .map(|s| s.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}
