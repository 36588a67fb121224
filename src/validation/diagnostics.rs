//! Diagnostics produced by validation.

use crate::core::{StateId, Symbol, TransitionId};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How serious a finding is. Only errors make a model invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// What a diagnostic is about. The `Display` text is the user-facing message.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum DiagnosticKind {
    #[error("No initial state defined")]
    MissingInitialState,

    #[error("Multiple initial states defined ({count}, only one allowed)")]
    MultipleInitialStates { count: usize },

    #[error("No accept states defined")]
    NoAcceptStates,

    #[error("DFA cannot have ε-transitions (found {count})")]
    EpsilonInDeterministic { count: usize },

    #[error("State {state} has {count} transitions for symbol \"{symbol}\" (DFA allows only one)")]
    NondeterministicChoice {
        state: String,
        symbol: Symbol,
        count: usize,
    },

    #[error("Transition {from} → {to} uses symbols not in alphabet: {}", quoted(.symbols))]
    SymbolsOutsideAlphabet {
        from: String,
        to: String,
        symbols: Vec<Symbol>,
    },

    #[error("Transition references invalid source state: {state}")]
    DanglingSource { state: StateId },

    #[error("Transition references invalid target state: {state}")]
    DanglingTarget { state: StateId },

    #[error("Transition from {from} to {to} has no symbols")]
    EmptyTransition { from: String, to: String },

    #[error("State id '{id}' is declared more than once")]
    DuplicateStateId { id: StateId },

    #[error("Symbol \"{symbol}\" is longer than one character and never matches input")]
    MultiCharacterSymbol { symbol: Symbol },

    #[error("{message}")]
    Custom { message: String },
}

fn quoted(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

impl DiagnosticKind {
    /// Built-in severity of this kind of finding.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::NoAcceptStates | Self::MultiCharacterSymbol { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A structured validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub severity: Severity,
    pub affected_states: IndexSet<StateId>,
    pub affected_transitions: IndexSet<TransitionId>,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            message: kind.to_string(),
            severity: kind.default_severity(),
            kind,
            affected_states: IndexSet::new(),
            affected_transitions: IndexSet::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        self.affected_states.extend(states);
        self
    }

    pub fn with_transitions<I>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = TransitionId>,
    {
        self.affected_transitions.extend(transitions);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}
