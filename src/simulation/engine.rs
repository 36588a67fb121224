//! The simulation engine.

use crate::config::{EngineConfig, InvalidModelPolicy};
use crate::core::{
    AutomatonKind, AutomatonModel, Configuration, StateId, Symbol, Trace, TransitionEdge,
    TransitionUsed,
};
use crate::error::{EngineError, InvalidModel};
use crate::simulation::closure::{epsilon_closure, StateSet};
use crate::simulation::is_accepted;
use crate::validation::{validate, ValidationReport};

/// Runs inputs against a borrowed model.
///
/// The engine keeps no state between calls; it only holds the model reference
/// and its configuration. Every `simulate` call computes the whole trace up
/// front, so stepping back and forth through it needs no further calls.
#[derive(Debug, Clone)]
pub struct SimulationEngine<'a> {
    model: &'a AutomatonModel,
    config: EngineConfig,
}

impl<'a> SimulationEngine<'a> {
    /// Create an engine with the default configuration.
    ///
    /// Fails if the model declares the same state id twice.
    pub fn new(model: &'a AutomatonModel) -> Result<Self, EngineError> {
        Self::with_config(model, EngineConfig::default())
    }

    pub fn with_config(model: &'a AutomatonModel, config: EngineConfig) -> Result<Self, EngineError> {
        if let Some(id) = model.duplicate_state_ids().first() {
            return Err(InvalidModel::DuplicateStateId { id: (*id).clone() }.into());
        }
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &'a AutomatonModel {
        self.model
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate the bound model with the built-in checks.
    pub fn validate(&self) -> ValidationReport {
        validate(self.model)
    }

    /// Epsilon closure of `seeds` over the bound model.
    pub fn closure<I>(&self, seeds: I) -> StateSet
    where
        I: IntoIterator<Item = StateId>,
    {
        epsilon_closure(self.model, seeds)
    }

    /// Simulate `input`, one character per symbol.
    ///
    /// Running out of transitions is not an error: the trace then ends with a
    /// configuration that has no active states and still holds the symbol that
    /// could not be consumed.
    pub fn simulate(&self, input: &str) -> Result<Trace, EngineError> {
        let _span = tracing::debug_span!("simulate", kind = %self.model.kind).entered();

        let deterministic = match self.model.kind {
            AutomatonKind::Deterministic => true,
            AutomatonKind::Nondeterministic => false,
            kind @ AutomatonKind::Pushdown => {
                return Err(InvalidModel::UnsupportedKind { kind }.into());
            }
        };

        if let Some(max) = self.config.max_input_len {
            let len = input.chars().count();
            if len > max {
                return Err(EngineError::InputTooLong { len, max });
            }
        }

        if self.config.on_invalid == InvalidModelPolicy::Refuse {
            let report = self.validate();
            if !report.valid {
                return Err(EngineError::ValidationFailed {
                    errors: report.errors().cloned().collect(),
                });
            }
        }

        // Several initial states: start from the first declared one.
        let Some(initial) = self.model.initial_states().next() else {
            tracing::debug!("no initial state, run is stuck before any input");
            let mut trace = Trace::new();
            trace.push(stuck(input, 0));
            return Ok(trace);
        };

        let trace = if deterministic {
            self.run_deterministic(input, &initial.id)
        } else {
            self.run_nondeterministic(input, &initial.id)
        };

        tracing::debug!(
            steps = trace.len(),
            stuck = trace.is_stuck(),
            accepted = self.is_accepted(&trace),
            "simulation finished"
        );
        Ok(trace)
    }

    /// True iff all input was consumed and an accepting state is active.
    pub fn is_accepted(&self, trace: &Trace) -> bool {
        is_accepted(self.model, trace)
    }

    /// Simulate and return only the verdict.
    pub fn accepts(&self, input: &str) -> Result<bool, EngineError> {
        let trace = self.simulate(input)?;
        Ok(self.is_accepted(&trace))
    }

    /// First edge in declaration order leaving `state` that consumes `c`.
    ///
    /// On a malformed deterministic model with several candidates this is the
    /// tie-break: first match wins.
    fn first_edge(&self, state: &str, c: char) -> Option<&'a TransitionEdge> {
        self.model
            .transitions
            .iter()
            .find(|t| t.from == state && t.consumes(c))
    }

    fn run_deterministic(&self, input: &str, start: &StateId) -> Trace {
        let mut trace = Trace::new();
        let mut current = start.clone();
        trace.push(Configuration {
            active_states: vec![current.clone()],
            consumed_prefix: String::new(),
            remaining_suffix: input.to_string(),
            transition_used: None,
        });

        for (offset, c) in input.char_indices() {
            let Some(edge) = self.first_edge(current.as_str(), c) else {
                tracing::debug!(state = %current, symbol = %c, "no transition, run is stuck");
                trace.push(stuck(input, offset));
                return trace;
            };

            let next = offset + c.len_utf8();
            trace.push(Configuration {
                active_states: vec![edge.to.clone()],
                consumed_prefix: input[..next].to_string(),
                remaining_suffix: input[next..].to_string(),
                transition_used: Some(used(edge, c)),
            });
            tracing::trace!(from = %current, to = %edge.to, symbol = %c, "step");
            current = edge.to.clone();
        }

        trace
    }

    fn run_nondeterministic(&self, input: &str, start: &StateId) -> Trace {
        let mut trace = Trace::new();
        let mut active = self.closure([start.clone()]);
        trace.push(Configuration {
            active_states: self.ordered(&active),
            consumed_prefix: String::new(),
            remaining_suffix: input.to_string(),
            transition_used: None,
        });

        for (offset, c) in input.char_indices() {
            let mut targets = StateSet::new();
            let mut narrated = None;
            for edge in &self.model.transitions {
                if active.contains(edge.from.as_str()) && edge.consumes(c) {
                    narrated.get_or_insert_with(|| used(edge, c));
                    targets.insert(edge.to.clone());
                }
            }

            if targets.is_empty() {
                tracing::debug!(symbol = %c, active = active.len(), "no transition, run is stuck");
                trace.push(stuck(input, offset));
                return trace;
            }

            active = self.closure(targets);
            let next = offset + c.len_utf8();
            trace.push(Configuration {
                active_states: self.ordered(&active),
                consumed_prefix: input[..next].to_string(),
                remaining_suffix: input[next..].to_string(),
                transition_used: narrated,
            });
            tracing::trace!(symbol = %c, active = active.len(), "step");
        }

        trace
    }

    /// Declared states first, in model order; undeclared targets after them.
    fn ordered(&self, set: &StateSet) -> Vec<StateId> {
        let mut ordered: Vec<StateId> = self
            .model
            .states
            .iter()
            .filter(|s| set.contains(s.id.as_str()))
            .map(|s| s.id.clone())
            .collect();
        ordered.extend(
            set.iter()
                .filter(|id| !self.model.has_state(id.as_str()))
                .cloned(),
        );
        ordered
    }
}

fn stuck(input: &str, offset: usize) -> Configuration {
    Configuration {
        active_states: Vec::new(),
        consumed_prefix: input[..offset].to_string(),
        remaining_suffix: input[offset..].to_string(),
        transition_used: None,
    }
}

fn used(edge: &TransitionEdge, c: char) -> TransitionUsed {
    TransitionUsed {
        edge: edge.id.clone(),
        from: edge.from.clone(),
        to: edge.to.clone(),
        symbol: Symbol::from(c.to_string()),
    }
}
