//! Structural validation of automata.
//!
//! Validation never fails and never stops at the first problem. Every check
//! returns a stillwater `Validation`, and the results are combined so the
//! editor can show all findings at once.
//!
//! # Example
//!
//! ```rust
//! use automata_sim::automaton;
//! use automata_sim::validation::validate;
//!
//! let model = automaton! {
//!     DFA alphabet ["0", "1"];
//!     states { q0: initial; q1: accept; }
//!     transitions {
//!         t1: q0 -> q1 ["0"];
//!         t2: q0 -> q0 ["0"];
//!     }
//! };
//!
//! let report = validate(&model);
//! assert!(!report.valid);
//! assert_eq!(report.errors().count(), 1);
//! ```

pub mod builder;
pub mod context;
pub mod diagnostics;
pub mod rules;

pub use builder::ValidatorBuilder;
pub use context::ValidationContext;
pub use diagnostics::{Diagnostic, DiagnosticKind, Severity};
pub use rules::{CheckResult, ValidationCheck};

use crate::core::AutomatonModel;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Result of validating a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff no diagnostic is an error. Warnings never block validity.
    pub valid: bool,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            valid: !diagnostics.iter().any(Diagnostic::is_error),
            diagnostics,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning())
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A set of checks run against a model.
pub struct Validator {
    pub(crate) checks: Vec<ValidationCheck>,
}

impl Validator {
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Run every check, accumulating ALL diagnostics.
    pub fn validate(&self, model: &AutomatonModel) -> ValidationReport {
        let _span = tracing::debug_span!("validate", kind = %model.kind).entered();
        let context = ValidationContext::new(model);

        let results: Vec<CheckResult> = self.checks.iter().map(|check| check(&context)).collect();
        let diagnostics = match Validation::all_vec(results) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(found) => found.iter().cloned().collect(),
        };

        let report = ValidationReport::from_diagnostics(diagnostics);
        tracing::debug!(
            valid = report.valid,
            diagnostics = report.diagnostics.len(),
            "validation finished"
        );
        report
    }
}

impl Default for Validator {
    fn default() -> Self {
        ValidatorBuilder::new().build()
    }
}

/// Validate a model with the built-in checks.
pub fn validate(model: &AutomatonModel) -> ValidationReport {
    Validator::default().validate(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AutomatonKind, StateNode, TransitionEdge};

    fn even_zeros() -> AutomatonModel {
        AutomatonModel {
            kind: AutomatonKind::Deterministic,
            states: vec![
                StateNode::new("q0").initial().accept(),
                StateNode::new("q1"),
            ],
            transitions: vec![
                TransitionEdge::new("t1", "q0", "q1", ["0"]),
                TransitionEdge::new("t2", "q1", "q0", ["0"]),
                TransitionEdge::new("t3", "q0", "q0", ["1"]),
                TransitionEdge::new("t4", "q1", "q1", ["1"]),
            ],
            alphabet: vec!["0".into(), "1".into()],
        }
    }

    #[test]
    fn well_formed_model_is_clean() {
        let report = validate(&even_zeros());
        assert!(report.valid);
        assert!(report.is_clean());
    }

    #[test]
    fn warnings_do_not_block_validity() {
        let mut model = even_zeros();
        model.states[0].is_accept = false;

        let report = validate(&model);
        assert!(report.valid);
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(report.errors().count(), 0);
    }

    #[test]
    fn all_findings_are_reported_in_check_order() {
        let mut model = even_zeros();
        model.states[0].is_initial = false;
        model.transitions.push(TransitionEdge::new("t5", "q1", "q9", ["x"]));

        let report = validate(&model);
        assert!(!report.valid);
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| &d.kind).collect();
        assert!(matches!(kinds[0], DiagnosticKind::MissingInitialState));
        assert!(matches!(kinds[1], DiagnosticKind::SymbolsOutsideAlphabet { .. }));
        assert!(matches!(kinds[2], DiagnosticKind::DanglingTarget { .. }));
        assert_eq!(kinds.len(), 3);
    }

    #[test]
    fn custom_predicate_check_reports_with_given_severity() {
        let validator = Validator::builder()
            .require_pred(
                |ctx| ctx.model.states.len() <= 1,
                "Keep it tiny".to_string(),
                Severity::Warning,
            )
            .build();

        let report = validator.validate(&even_zeros());
        assert!(report.valid);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].message, "Keep it tiny");
        assert!(report.diagnostics[0].is_warning());
    }

    #[test]
    fn custom_check_can_fail_validation() {
        let validator = ValidatorBuilder::empty()
            .require(|ctx: &ValidationContext<'_>| {
                if ctx.model.alphabet.len() > 1 {
                    rules::findings(vec![Diagnostic::new(DiagnosticKind::Custom {
                        message: "Binary alphabets are not allowed here".to_string(),
                    })])
                } else {
                    Validation::success(())
                }
            })
            .build();

        let report = validator.validate(&even_zeros());
        assert!(!report.valid);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn validation_is_idempotent() {
        let mut model = even_zeros();
        model.transitions.push(TransitionEdge::new("t5", "q0", "q1", ["1"]));
        let validator = Validator::default();

        assert_eq!(validator.validate(&model), validator.validate(&model));
    }
}
