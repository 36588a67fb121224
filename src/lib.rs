//! automata-sim: validation and step-by-step simulation of finite automata
//!
//! Models are plain data: states, labelled edges and an optional alphabet,
//! exactly as an editor would export them. Everything that reasons about a
//! model is a pure function of it. Validation collects every problem instead
//! of stopping at the first, and simulation returns the complete trace of
//! configurations so a caller can step through it at leisure.
//!
//! # Core Concepts
//!
//! - **Model**: `AutomatonModel`, a DFA, ε-NFA or (stored only) PDA
//! - **Validation**: Structural diagnostics with error/warning severity
//! - **Closure**: ε-closure of a state set
//! - **Simulation**: A `Trace` of configurations, one per consumed symbol
//!
//! # Example
//!
//! ```rust
//! use automata_sim::{automaton, is_accepted, simulate, validate};
//!
//! let even_zeros = automaton! {
//!     DFA alphabet ["0", "1"];
//!     states {
//!         q0: initial accept;
//!         q1;
//!     }
//!     transitions {
//!         t1: q0 -> q1 ["0"];
//!         t2: q1 -> q0 ["0"];
//!         t3: q0 -> q0 ["1"];
//!         t4: q1 -> q1 ["1"];
//!     }
//! };
//!
//! assert!(validate(&even_zeros).valid);
//!
//! let trace = simulate(&even_zeros, "1001").unwrap();
//! assert_eq!(trace.len(), 5);
//! assert!(is_accepted(&even_zeros, &trace));
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;
pub mod simulation;
pub mod suite;
pub mod validation;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use config::{EngineConfig, InvalidModelPolicy};
pub use crate::core::{
    AutomatonKind, AutomatonModel, Configuration, StateId, StateNode, Symbol, Trace,
    TransitionEdge, TransitionId, EPSILON,
};
pub use error::{EngineError, InvalidModel};
pub use simulation::{epsilon_closure, is_accepted, simulate, SimulationEngine};
pub use validation::{validate, Diagnostic, Severity, ValidationReport, Validator};
