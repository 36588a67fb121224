//! End-to-end scenarios: build a model, validate it, run inputs through it.

use automata_sim::validation::{validate, DiagnosticKind, Severity};
use automata_sim::{automaton, catalog, is_accepted, simulate, AutomatonModel, SimulationEngine};

fn even_zeros() -> AutomatonModel {
    automaton! {
        DFA alphabet ["0", "1"];
        states {
            q0: initial accept;
            q1;
        }
        transitions {
            t1: q0 -> q1 ["0"];
            t2: q1 -> q0 ["0"];
            t3: q0 -> q0 ["1"];
            t4: q1 -> q1 ["1"];
        }
    }
}

fn a_or_ab() -> AutomatonModel {
    automaton! {
        NFA alphabet ["a", "b"];
        states {
            q0: initial;
            q1: accept;
            q2: accept;
        }
        transitions {
            t1: q0 -> q1 ["a"];
            t2: q1 -> q2 ["ε"];
            t3: q2 -> q2 ["b"];
        }
    }
}

#[test]
fn deterministic_even_zeros() {
    let model = even_zeros();
    assert!(validate(&model).is_clean());

    let trace = simulate(&model, "1010").unwrap();
    let last = trace.last().unwrap();
    assert_eq!(last.active_states, vec!["q0"]);
    assert!(last.remaining_suffix.is_empty());
    assert!(is_accepted(&model, &trace));

    let trace = simulate(&model, "101").unwrap();
    assert_eq!(trace.last().unwrap().active_states, vec!["q1"]);
    assert!(!is_accepted(&model, &trace));
}

#[test]
fn deterministic_path_follows_edges() {
    let model = even_zeros();
    let trace = simulate(&model, "0110").unwrap();

    let edges: Vec<&str> = trace
        .iter()
        .filter_map(|c| c.transition_used.as_ref())
        .map(|t| t.edge.as_str())
        .collect();
    assert_eq!(edges, vec!["t1", "t4", "t4", "t2"]);
}

#[test]
fn nondeterministic_epsilon_language() {
    let model = a_or_ab();
    assert!(validate(&model).valid);

    let trace = simulate(&model, "a").unwrap();
    assert_eq!(trace.last().unwrap().active_states, vec!["q1", "q2"]);
    assert!(is_accepted(&model, &trace));

    assert!(is_accepted(&model, &simulate(&model, "ab").unwrap()));

    let trace = simulate(&model, "b").unwrap();
    assert_eq!(trace.stuck_at(), Some(1));
    let stuck = trace.last().unwrap();
    assert_eq!(stuck.consumed_prefix, "");
    assert_eq!(stuck.remaining_suffix, "b");
    assert!(!is_accepted(&model, &trace));
}

#[test]
fn determinism_and_epsilon_violations() {
    let model = automaton! {
        DFA alphabet ["0"];
        states {
            q0: initial;
            q1: accept;
            q2: accept;
        }
        transitions {
            t1: q0 -> q1 ["0"];
            t2: q0 -> q2 ["0"];
            t3: q1 -> q2 ["ε"];
        }
    };

    let report = validate(&model);
    assert!(!report.valid);

    let choices: Vec<_> = report
        .errors()
        .filter(|d| matches!(d.kind, DiagnosticKind::NondeterministicChoice { .. }))
        .collect();
    assert_eq!(choices.len(), 1);
    assert!(choices[0].affected_states.contains("q0"));
    assert!(choices[0].affected_transitions.contains("t1"));
    assert!(choices[0].affected_transitions.contains("t2"));

    let epsilons: Vec<_> = report
        .errors()
        .filter(|d| matches!(d.kind, DiagnosticKind::EpsilonInDeterministic { .. }))
        .collect();
    assert_eq!(epsilons.len(), 1);
    assert_eq!(epsilons[0].affected_transitions.len(), 1);
    assert!(epsilons[0].affected_transitions.contains("t3"));
}

#[test]
fn alphabet_violations_exempt_epsilon() {
    let model = automaton! {
        NFA alphabet ["0", "1"];
        states { q0: initial; q1: accept; }
        transitions {
            t1: q0 -> q1 ["x"];
            t2: q1 -> q0 ["ε"];
        }
    };

    let report = validate(&model);
    let alphabet: Vec<_> = report
        .diagnostics
        .iter()
        .filter(|d| matches!(d.kind, DiagnosticKind::SymbolsOutsideAlphabet { .. }))
        .collect();

    assert_eq!(alphabet.len(), 1);
    assert!(alphabet[0].message.contains("\"x\""));
    assert!(alphabet[0].affected_transitions.contains("t1"));
}

#[test]
fn missing_accept_state_only_warns() {
    let model = automaton! {
        DFA;
        states { q0: initial; }
        transitions { t1: q0 -> q0 ["a"]; }
    };

    let report = validate(&model);
    assert!(report.valid);
    assert_eq!(report.warnings().count(), 1);
    assert_eq!(report.diagnostics[0].severity, Severity::Warning);
}

#[test]
fn multi_character_symbols_warn_and_never_fire() {
    let model = automaton! {
        DFA alphabet ["ab"];
        states { q0: initial; q1: accept; }
        transitions { t1: q0 -> q1 ["ab"]; }
    };

    let report = validate(&model);
    assert!(report.valid);
    let warnings: Vec<_> = report.warnings().collect();
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0].kind, DiagnosticKind::MultiCharacterSymbol { .. }));
    assert!(warnings[0].affected_transitions.contains("t1"));

    let engine = SimulationEngine::new(&model).unwrap();
    assert!(!engine.accepts("ab").unwrap());
}

#[test]
fn invalid_models_still_simulate_by_default() {
    let model = automaton! {
        DFA;
        states { q0: initial accept; q1: initial; }
        transitions {
            t1: q0 -> q0 ["a"];
            t2: q0 -> q1 ["a"];
        }
    };
    assert!(!validate(&model).valid);

    let engine = SimulationEngine::new(&model).unwrap();
    let trace = engine.simulate("aa").unwrap();
    assert_eq!(trace.last().unwrap().active_states, vec!["q0"]);
    assert!(engine.is_accepted(&trace));
}

#[test]
fn catalog_examples_run_end_to_end() {
    for example in catalog::all() {
        let engine = SimulationEngine::new(&example.automaton).unwrap();
        let trace = engine.simulate("0101").unwrap();
        assert!(!trace.is_empty(), "{} produced no trace", example.id);
    }
}
