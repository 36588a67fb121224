//! Build errors for the automaton builder.

use crate::core::{StateId, TransitionId};
use thiserror::Error;

/// Errors that can occur when building an automaton model.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No states defined. Add at least one state with .state(...)")]
    NoStates,

    #[error("State id '{id}' is used more than once")]
    DuplicateStateId { id: StateId },

    #[error("Transition id '{id}' is used more than once")]
    DuplicateTransitionId { id: TransitionId },
}
