//! Simulation traces.
//!
//! A trace is the full, eagerly computed record of one simulation run. The
//! editor walks it by index for step/play controls, so every configuration
//! carries everything needed to render that step on its own.

use super::symbol::{StateId, Symbol, TransitionId};
use serde::{Deserialize, Serialize};

/// The edge shown to the user as "taken" on a step.
///
/// In nondeterministic mode several edges may fire at once; this is the first
/// one in declaration order and only serves narration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionUsed {
    pub edge: TransitionId,
    pub from: StateId,
    pub to: StateId,
    pub symbol: Symbol,
}

/// One snapshot of simulation progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Active states in the model's declared order. Empty once stuck.
    pub active_states: Vec<StateId>,
    pub consumed_prefix: String,
    pub remaining_suffix: String,
    #[serde(default)]
    pub transition_used: Option<TransitionUsed>,
}

impl Configuration {
    pub fn is_stuck(&self) -> bool {
        self.active_states.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_suffix.is_empty()
    }

    pub fn is_active(&self, state: &str) -> bool {
        self.active_states.iter().any(|s| s == state)
    }
}

/// Ordered configurations of one run. Index 0 precedes any input.
///
/// # Example
///
/// ```rust
/// use automata_sim::automaton;
/// use automata_sim::simulation::SimulationEngine;
///
/// let model = automaton! {
///     DFA alphabet ["a"];
///     states { q0: initial accept; }
///     transitions { t1: q0 -> q0 ["a"]; }
/// };
/// let engine = SimulationEngine::new(&model).unwrap();
/// let trace = engine.simulate("aa").unwrap();
///
/// assert_eq!(trace.len(), 3);
/// assert_eq!(trace.path().len(), 3);
/// assert!(engine.is_accepted(&trace));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Configuration>,
}

impl Trace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, configuration: Configuration) {
        self.steps.push(configuration);
    }

    pub fn steps(&self) -> &[Configuration] {
        &self.steps
    }

    pub fn get(&self, index: usize) -> Option<&Configuration> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Configuration> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Configuration> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.steps.iter()
    }

    /// Index of the configuration at which the run got stuck, if it did.
    pub fn stuck_at(&self) -> Option<usize> {
        self.steps.iter().position(Configuration::is_stuck)
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck_at().is_some()
    }

    /// Active state sets in step order.
    pub fn path(&self) -> Vec<&[StateId]> {
        self.steps.iter().map(|c| c.active_states.as_slice()).collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
