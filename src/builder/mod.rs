//! Builder API for ergonomic model construction.
//!
//! This module provides a fluent builder and the `automaton!` macro for
//! creating models with minimal boilerplate.

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::BuildError;
