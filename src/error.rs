//! Engine error types.

use crate::core::{AutomatonKind, StateId};
use crate::validation::Diagnostic;
use thiserror::Error;

/// Contract violations that make a model unusable for simulation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidModel {
    #[error("State id '{id}' is declared more than once")]
    DuplicateStateId { id: StateId },

    #[error("{kind} automata cannot be simulated")]
    UnsupportedKind { kind: AutomatonKind },
}

/// Errors returned by the simulation engine.
///
/// Getting stuck on an input is not an error; it is a normal trace ending.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid model: {0}")]
    InvalidModel(#[from] InvalidModel),

    #[error("Input has {len} symbols, limit is {max}")]
    InputTooLong { len: usize, max: usize },

    /// Carries the error-severity diagnostics that blocked the run.
    #[error("Model failed validation with {} error(s)", .errors.len())]
    ValidationFailed { errors: Vec<Diagnostic> },
}
