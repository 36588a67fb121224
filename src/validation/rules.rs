//! Built-in structural checks.
//!
//! Each check inspects the whole model and reports every finding of its kind.
//! Checks never stop early; `Validation` accumulates all of them.

use crate::core::{StateId, Symbol, TransitionEdge, TransitionId};
use crate::validation::context::ValidationContext;
use crate::validation::diagnostics::{Diagnostic, DiagnosticKind};
use indexmap::{IndexMap, IndexSet};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check.
pub type CheckResult = Validation<(), NonEmptyVec<Diagnostic>>;

/// Type alias for validation check functions
pub type ValidationCheck = Box<dyn Fn(&ValidationContext<'_>) -> CheckResult + Send + Sync>;

/// Turn a list of findings into a check result.
pub fn findings(diagnostics: Vec<Diagnostic>) -> CheckResult {
    let checks: Vec<CheckResult> = diagnostics.into_iter().map(Validation::fail).collect();
    Validation::all_vec(checks).map(|_| ())
}

/// Exactly one state must be initial, for every kind of automaton.
pub fn initial_state_cardinality(ctx: &ValidationContext<'_>) -> CheckResult {
    let initial: Vec<StateId> = ctx.model.initial_states().map(|s| s.id.clone()).collect();
    match initial.len() {
        0 => findings(vec![Diagnostic::new(DiagnosticKind::MissingInitialState)]),
        1 => Validation::success(()),
        count => findings(vec![
            Diagnostic::new(DiagnosticKind::MultipleInitialStates { count }).with_states(initial)
        ]),
    }
}

/// A model without accepting states rejects everything. Warn only.
pub fn accept_state_presence(ctx: &ValidationContext<'_>) -> CheckResult {
    if ctx.model.accept_states().next().is_some() {
        Validation::success(())
    } else {
        findings(vec![Diagnostic::new(DiagnosticKind::NoAcceptStates)])
    }
}

/// Deterministic automata may not use ε. All offenders go in one diagnostic.
pub fn no_epsilon_in_deterministic(ctx: &ValidationContext<'_>) -> CheckResult {
    if !ctx.model.is_deterministic() {
        return Validation::success(());
    }

    let offending: Vec<_> = ctx
        .model
        .transitions
        .iter()
        .filter(|t| t.has_epsilon())
        .collect();
    if offending.is_empty() {
        return Validation::success(());
    }

    findings(vec![Diagnostic::new(DiagnosticKind::EpsilonInDeterministic {
        count: offending.len(),
    })
    .with_states(offending.iter().map(|t| t.from.clone()))
    .with_transitions(offending.iter().map(|t| t.id.clone()))])
}

/// In a deterministic automaton every state has at most one edge per symbol.
///
/// Checked per state: the same symbol on edges leaving different states is
/// fine. An edge listing a symbol twice still counts as one edge.
pub fn determinism(ctx: &ValidationContext<'_>) -> CheckResult {
    if !ctx.model.is_deterministic() {
        return Validation::success(());
    }

    let mut diagnostics = Vec::new();
    let mut visited = HashSet::new();

    for state in &ctx.model.states {
        if !visited.insert(state.id.as_str()) {
            continue;
        }

        let mut by_symbol: IndexMap<&Symbol, IndexSet<&TransitionId>> = IndexMap::new();
        for edge in ctx.model.outgoing(state.id.as_str()) {
            for symbol in &edge.symbols {
                by_symbol.entry(symbol).or_default().insert(&edge.id);
            }
        }

        for (symbol, edges) in by_symbol {
            if edges.len() > 1 {
                diagnostics.push(
                    Diagnostic::new(DiagnosticKind::NondeterministicChoice {
                        state: state.label.clone(),
                        symbol: symbol.clone(),
                        count: edges.len(),
                    })
                    .with_states([state.id.clone()])
                    .with_transitions(edges.into_iter().cloned()),
                );
            }
        }
    }

    findings(diagnostics)
}

/// With a declared alphabet, every non-ε symbol must belong to it.
pub fn alphabet_conformance(ctx: &ValidationContext<'_>) -> CheckResult {
    if ctx.model.alphabet.is_empty() {
        return Validation::success(());
    }

    let diagnostics = ctx
        .model
        .transitions
        .iter()
        .filter_map(|edge| {
            let invalid: Vec<Symbol> = edge
                .symbols
                .iter()
                .filter(|s| !s.is_epsilon() && !ctx.model.in_alphabet(s))
                .cloned()
                .collect();
            if invalid.is_empty() {
                return None;
            }
            Some(
                Diagnostic::new(DiagnosticKind::SymbolsOutsideAlphabet {
                    from: ctx.display_name(edge.from.as_str()),
                    to: ctx.display_name(edge.to.as_str()),
                    symbols: invalid,
                })
                .with_states([edge.from.clone()])
                .with_transitions([edge.id.clone()]),
            )
        })
        .collect();

    findings(diagnostics)
}

/// Edge endpoints must name declared states. Each dangling end is reported.
pub fn referential_integrity(ctx: &ValidationContext<'_>) -> CheckResult {
    let mut diagnostics = Vec::new();
    for edge in &ctx.model.transitions {
        if ctx.state(edge.from.as_str()).is_none() {
            diagnostics.push(
                Diagnostic::new(DiagnosticKind::DanglingSource {
                    state: edge.from.clone(),
                })
                .with_transitions([edge.id.clone()]),
            );
        }
        if ctx.state(edge.to.as_str()).is_none() {
            diagnostics.push(
                Diagnostic::new(DiagnosticKind::DanglingTarget {
                    state: edge.to.clone(),
                })
                .with_transitions([edge.id.clone()]),
            );
        }
    }
    findings(diagnostics)
}

/// Every edge needs at least one symbol.
pub fn non_empty_edges(ctx: &ValidationContext<'_>) -> CheckResult {
    let diagnostics = ctx
        .model
        .transitions
        .iter()
        .filter(|edge| edge.symbols.is_empty())
        .map(|edge| {
            Diagnostic::new(DiagnosticKind::EmptyTransition {
                from: ctx.display_name(edge.from.as_str()),
                to: ctx.display_name(edge.to.as_str()),
            })
            .with_transitions([edge.id.clone()])
        })
        .collect();
    findings(diagnostics)
}

/// State ids must be unique; the engine refuses models where they are not.
pub fn unique_state_ids(ctx: &ValidationContext<'_>) -> CheckResult {
    let diagnostics = ctx
        .model
        .duplicate_state_ids()
        .into_iter()
        .map(|id| {
            Diagnostic::new(DiagnosticKind::DuplicateStateId { id: id.clone() })
                .with_states([id.clone()])
        })
        .collect();
    findings(diagnostics)
}

/// Input is read one character at a time, so longer symbols are dead. Warn only.
///
/// One finding per symbol, naming every edge that lists it.
pub fn single_character_symbols(ctx: &ValidationContext<'_>) -> CheckResult {
    let mut dead: IndexMap<&Symbol, Vec<&TransitionEdge>> = IndexMap::new();
    for symbol in &ctx.model.alphabet {
        if symbol.as_str().chars().count() > 1 {
            dead.entry(symbol).or_default();
        }
    }
    for edge in &ctx.model.transitions {
        for symbol in &edge.symbols {
            if symbol.as_str().chars().count() > 1 {
                let edges = dead.entry(symbol).or_default();
                if !edges.iter().any(|e| e.id == edge.id) {
                    edges.push(edge);
                }
            }
        }
    }

    let diagnostics = dead
        .into_iter()
        .map(|(symbol, edges)| {
            Diagnostic::new(DiagnosticKind::MultiCharacterSymbol {
                symbol: symbol.clone(),
            })
            .with_states(edges.iter().map(|e| e.from.clone()))
            .with_transitions(edges.iter().map(|e| e.id.clone()))
        })
        .collect();
    findings(diagnostics)
}

/// The built-in checks in reporting order.
pub fn builtin_checks() -> Vec<ValidationCheck> {
    let checks: [ValidationCheck; 9] = [
        Box::new(initial_state_cardinality),
        Box::new(accept_state_presence),
        Box::new(no_epsilon_in_deterministic),
        Box::new(determinism),
        Box::new(alphabet_conformance),
        Box::new(referential_integrity),
        Box::new(non_empty_edges),
        Box::new(unique_state_ids),
        Box::new(single_character_symbols),
    ];
    Vec::from(checks)
}
