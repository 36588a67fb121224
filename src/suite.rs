//! Saved test strings for exploring a model's language.
//!
//! A suite keeps the strings a user has tried together with the verdict each
//! one got. After the model is edited, `rerun` brings every verdict up to date.

use crate::config::EngineConfig;
use crate::core::AutomatonModel;
use crate::simulation::SimulationEngine;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Outcome of running one string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accepted,
    Rejected,
    /// The engine refused the model or the input.
    Error,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
            Verdict::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub input: String,
    #[serde(rename = "result")]
    pub verdict: Verdict,
}

/// Verdict counts over a suite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub accepted: usize,
    pub rejected: usize,
    pub errors: usize,
}

impl SuiteSummary {
    pub fn total(&self) -> usize {
        self.accepted + self.rejected + self.errors
    }
}

/// Run one string against a model.
pub fn evaluate(model: &AutomatonModel, config: &EngineConfig, input: &str) -> Verdict {
    let outcome = SimulationEngine::with_config(model, config.clone())
        .and_then(|engine| engine.accepts(input));

    match outcome {
        Ok(true) => Verdict::Accepted,
        Ok(false) => Verdict::Rejected,
        Err(error) => {
            tracing::debug!(input, %error, "test string could not be evaluated");
            Verdict::Error
        }
    }
}

/// Ordered collection of test strings, unique by input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    cases: Vec<TestCase>,
    #[serde(skip)]
    config: EngineConfig,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate cases under a non-default engine configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            cases: Vec::new(),
            config,
        }
    }

    /// Add a string and record its verdict.
    ///
    /// Surrounding whitespace is trimmed, so the empty string is a valid case.
    /// Returns `None` when the trimmed input is already in the suite.
    pub fn add(&mut self, model: &AutomatonModel, input: &str) -> Option<&TestCase> {
        let input = input.trim();
        if self.contains(input) {
            return None;
        }

        let verdict = evaluate(model, &self.config, input);
        self.cases.push(TestCase {
            id: Uuid::new_v4(),
            input: input.to_string(),
            verdict,
        });
        self.cases.last()
    }

    pub fn remove(&mut self, id: Uuid) -> Option<TestCase> {
        let index = self.cases.iter().position(|case| case.id == id)?;
        Some(self.cases.remove(index))
    }

    /// Re-evaluate every case against `model`, keeping ids and order.
    pub fn rerun(&mut self, model: &AutomatonModel) {
        for case in &mut self.cases {
            case.verdict = evaluate(model, &self.config, &case.input);
        }
        tracing::debug!(cases = self.cases.len(), "reran test suite");
    }

    pub fn summary(&self) -> SuiteSummary {
        self.cases
            .iter()
            .fold(SuiteSummary::default(), |mut summary, case| {
                match case.verdict {
                    Verdict::Accepted => summary.accepted += 1,
                    Verdict::Rejected => summary.rejected += 1,
                    Verdict::Error => summary.errors += 1,
                }
                summary
            })
    }

    pub fn contains(&self, input: &str) -> bool {
        self.cases.iter().any(|case| case.input == input)
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
