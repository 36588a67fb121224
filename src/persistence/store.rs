//! File-backed storage for the working automaton.
//!
//! Holds a single snapshot, the way the editor keeps its one autosave slot.

use super::{PersistenceError, SavedAutomaton};
use crate::core::AutomatonModel;
use chrono::{DateTime, Utc};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A single-slot store at a fixed path.
#[derive(Clone, Debug)]
pub struct AutomatonStore {
    path: PathBuf,
}

impl AutomatonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Save a model, replacing whatever was stored before.
    ///
    /// The snapshot is written to a sibling temp file and renamed into place,
    /// so a crash mid-write leaves the previous snapshot intact.
    pub fn save(&self, model: &AutomatonModel) -> Result<SavedAutomaton, PersistenceError> {
        let snapshot = SavedAutomaton::new(model.clone());
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| PersistenceError::SerializationFailed(e.to_string()))?;

        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let temp_path = self.temp_path();
        let written = fs::write(&temp_path, json).and_then(|()| fs::rename(&temp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), id = %snapshot.id, "saved automaton");
        Ok(snapshot)
    }

    /// Load the stored snapshot. `Ok(None)` when nothing has been saved.
    pub fn load_snapshot(&self) -> Result<Option<SavedAutomaton>, PersistenceError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let snapshot: SavedAutomaton = serde_json::from_str(&json)
            .map_err(|e| PersistenceError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()?;
        Ok(Some(snapshot))
    }

    /// Load the stored model. `Ok(None)` when nothing has been saved.
    pub fn load(&self) -> Result<Option<AutomatonModel>, PersistenceError> {
        Ok(self.load_snapshot()?.map(|snapshot| snapshot.automaton))
    }

    /// When the stored model was saved, if any.
    pub fn last_saved(&self) -> Result<Option<DateTime<Utc>>, PersistenceError> {
        Ok(self.load_snapshot()?.map(|snapshot| snapshot.saved_at))
    }

    /// Remove the stored model. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn has_saved_data(&self) -> bool {
        self.path.is_file()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
