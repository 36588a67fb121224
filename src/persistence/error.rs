//! Errors raised while importing, exporting or storing automata.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The model could not be encoded as JSON or bincode
    #[error("Could not encode automaton: {0}")]
    SerializationFailed(String),

    /// The document is malformed or not an automaton
    #[error("Could not decode automaton: {0}")]
    DeserializationFailed(String),

    /// Snapshot written by an incompatible format revision
    #[error("Snapshot format {found} is not supported (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Automaton store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
