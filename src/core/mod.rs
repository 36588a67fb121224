//! Core automaton types.
//!
//! This module contains the plain data the rest of the crate works over:
//! - Identifiers and symbols (`StateId`, `TransitionId`, `Symbol`)
//! - The declarative model (`AutomatonModel`, `StateNode`, `TransitionEdge`)
//! - Simulation output (`Configuration`, `Trace`)
//!
//! Nothing here performs analysis; the types are owned by the caller and
//! only borrowed by the validator and the simulation engine.

mod model;
mod state;
mod symbol;
mod trace;

pub use model::{AutomatonKind, AutomatonModel, TransitionEdge};
pub use state::{Position, StateNode};
pub use symbol::{StateId, Symbol, TransitionId, EPSILON};
pub use trace::{Configuration, Trace, TransitionUsed};
