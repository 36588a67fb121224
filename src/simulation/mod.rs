//! Step-by-step simulation of deterministic and nondeterministic automata.
//!
//! Deterministic models track one active state; nondeterministic models track
//! a set, saturated with ε-moves before the first symbol and after every step.
//!
//! # Example
//!
//! ```rust
//! use automata_sim::automaton;
//! use automata_sim::simulation::SimulationEngine;
//!
//! let model = automaton! {
//!     NFA alphabet ["a", "b"];
//!     states { q0: initial; q1: accept; q2: accept; }
//!     transitions {
//!         t1: q0 -> q1 ["a"];
//!         t2: q1 -> q2 ["ε"];
//!         t3: q2 -> q2 ["b"];
//!     }
//! };
//!
//! let engine = SimulationEngine::new(&model).unwrap();
//! assert!(engine.accepts("ab").unwrap());
//! assert!(!engine.accepts("b").unwrap());
//! ```

pub mod closure;
pub mod engine;

pub use closure::{epsilon_closure, StateSet};
pub use engine::SimulationEngine;

use crate::core::{AutomatonModel, Trace};
use crate::error::EngineError;

/// Simulate `input` on `model` with the default configuration.
pub fn simulate(model: &AutomatonModel, input: &str) -> Result<Trace, EngineError> {
    SimulationEngine::new(model)?.simulate(input)
}

/// Acceptance verdict of a trace produced for `model`.
pub fn is_accepted(model: &AutomatonModel, trace: &Trace) -> bool {
    trace.last().is_some_and(|last| {
        last.is_complete()
            && last
                .active_states
                .iter()
                .any(|s| model.is_accepting(s.as_str()))
    })
}
