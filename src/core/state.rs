//! State nodes of an automaton.
//!
//! A state carries the two flags the engine cares about (`is_initial`,
//! `is_accept`) plus display-only data the editor attaches to it. The label and
//! position never influence validation or simulation.

use super::symbol::StateId;
use serde::{Deserialize, Serialize};

/// On-screen position of a state. View-only; carried through persistence.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single state of an automaton.
///
/// # Example
///
/// ```rust
/// use automata_sim::core::StateNode;
///
/// let q0 = StateNode::new("q0").initial().accept();
/// assert!(q0.is_initial);
/// assert!(q0.is_accept);
/// assert_eq!(q0.label, "q0");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateNode {
    pub id: StateId,
    pub label: String,
    pub is_initial: bool,
    pub is_accept: bool,
    #[serde(default)]
    pub position: Option<Position>,
}

impl StateNode {
    /// Create a non-initial, non-accepting state whose label equals its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id: StateId::new(id),
            is_initial: false,
            is_accept: false,
            position: None,
        }
    }

    /// Set the display label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Mark as the initial state.
    pub fn initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    /// Mark as an accepting state.
    pub fn accept(mut self) -> Self {
        self.is_accept = true;
        self
    }

    /// Attach an on-screen position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position { x, y });
        self
    }
}
