//! Builder API for assembling a validator.

use crate::validation::context::ValidationContext;
use crate::validation::diagnostics::{Diagnostic, DiagnosticKind, Severity};
use crate::validation::rules::{builtin_checks, findings, CheckResult, ValidationCheck};
use crate::validation::Validator;
use stillwater::validation::Validation;

/// Builder for a `Validator`. Starts with the built-in checks.
pub struct ValidatorBuilder {
    checks: Vec<ValidationCheck>,
}

impl ValidatorBuilder {
    pub fn new() -> Self {
        Self {
            checks: builtin_checks(),
        }
    }

    /// Start without any checks.
    pub fn empty() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a check that runs after those already registered.
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&ValidationContext<'_>) -> CheckResult + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a check that reports `message` at `severity` when `predicate` is false.
    pub fn require_pred<F>(self, predicate: F, message: String, severity: Severity) -> Self
    where
        F: Fn(&ValidationContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.require(move |ctx| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                findings(vec![Diagnostic::new(DiagnosticKind::Custom {
                    message: message.clone(),
                })
                .with_severity(severity)])
            }
        })
    }

    /// Build the validator
    pub fn build(self) -> Validator {
        Validator {
            checks: self.checks,
        }
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
