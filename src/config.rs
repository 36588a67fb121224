//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What `simulate` does with a model that has validation errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidModelPolicy {
    /// Run anyway: no initial state yields an immediately stuck trace, several
    /// initial states start from the first, and the first matching edge wins.
    #[default]
    Degrade,
    /// Fail with `EngineError::ValidationFailed`.
    Refuse,
}

/// Settings for a `SimulationEngine`.
///
/// # Example
///
/// ```rust
/// use automata_sim::config::{EngineConfig, InvalidModelPolicy};
///
/// let config = EngineConfig::from_toml_str(
///     r#"
///     on_invalid = "refuse"
///     max_input_len = 64
///     "#,
/// )
/// .unwrap();
///
/// assert_eq!(config.on_invalid, InvalidModelPolicy::Refuse);
/// assert_eq!(config.max_input_len, Some(64));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub on_invalid: InvalidModelPolicy,
    /// Longest accepted input, counted in symbols. `None` means unbounded.
    pub max_input_len: Option<usize>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_invalid(mut self, policy: InvalidModelPolicy) -> Self {
        self.on_invalid = policy;
        self
    }

    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = Some(len);
        self
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

/// Errors reading or writing configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse engine config: {0}")]
    Parse(String),

    #[error("Failed to serialize engine config: {0}")]
    Serialize(String),
}
