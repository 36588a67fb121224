//! Import, export and local storage of automata.
//!
//! The document format is the one the editor exports:
//! `{"type": "DFA" | "NFA" | "PDA", "states": [...], "transitions": [...], "alphabet": [...]}`.
//! JSON is the interchange format; bincode gives a compact binary form.
//! View-only data such as state positions travels along untouched.

use crate::core::AutomatonModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;
pub mod store;

pub use error::PersistenceError;
pub use store::AutomatonStore;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Export a model as compact JSON.
pub fn to_json(model: &AutomatonModel) -> Result<String, PersistenceError> {
    serde_json::to_string(model).map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Export a model as indented JSON.
pub fn to_json_pretty(model: &AutomatonModel) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(model)
        .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Import a model from JSON.
pub fn from_json(json: &str) -> Result<AutomatonModel, PersistenceError> {
    serde_json::from_str(json).map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))
}

/// Encode a model in the compact binary form.
pub fn to_bytes(model: &AutomatonModel) -> Result<Vec<u8>, PersistenceError> {
    bincode::serialize(model).map_err(|e| PersistenceError::SerializationFailed(e.to_string()))
}

/// Decode a model from the compact binary form.
pub fn from_bytes(bytes: &[u8]) -> Result<AutomatonModel, PersistenceError> {
    bincode::deserialize(bytes).map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))
}

/// A stored model together with when it was saved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedAutomaton {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,

    pub automaton: AutomatonModel,
}

impl SavedAutomaton {
    pub fn new(automaton: AutomatonModel) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            saved_at: Utc::now(),
            automaton,
        }
    }

    /// Reject snapshots written by an incompatible version.
    pub fn check_version(&self) -> Result<(), PersistenceError> {
        if self.version == SNAPSHOT_VERSION {
            Ok(())
        } else {
            Err(PersistenceError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            })
        }
    }
}
