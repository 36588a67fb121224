//! Property-based tests for validation, closure and simulation.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated models and inputs.

use automata_sim::core::{AutomatonKind, AutomatonModel, StateId, StateNode, Symbol, TransitionEdge};
use automata_sim::persistence::{from_bytes, from_json, to_bytes, to_json};
use automata_sim::simulation::{epsilon_closure, is_accepted, SimulationEngine};
use automata_sim::validation::{validate, DiagnosticKind};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

prop_compose! {
    fn arbitrary_kind()(nondeterministic in any::<bool>()) -> AutomatonKind {
        if nondeterministic {
            AutomatonKind::Nondeterministic
        } else {
            AutomatonKind::Deterministic
        }
    }
}

prop_compose! {
    // Edge endpoints may point one past the declared states to exercise
    // dangling references.
    fn arbitrary_model()(
        kind in arbitrary_kind(),
        flags in prop::collection::vec((any::<bool>(), any::<bool>()), 1..5),
        edges in prop::collection::vec(
            (0..6usize, 0..6usize, prop::sample::subsequence(vec!["a", "b", "ε"], 0..=3)),
            0..12,
        ),
        declare_alphabet in any::<bool>(),
    ) -> AutomatonModel {
        let states = flags
            .iter()
            .enumerate()
            .map(|(i, &(initial, accept))| {
                let mut state = StateNode::new(format!("q{}", i));
                state.is_initial = initial;
                state.is_accept = accept;
                state
            })
            .collect();

        let transitions = edges
            .into_iter()
            .enumerate()
            .map(|(i, (from, to, symbols))| {
                TransitionEdge::new(
                    &format!("t{}", i),
                    &format!("q{}", from),
                    &format!("q{}", to),
                    symbols,
                )
            })
            .collect();

        let alphabet = if declare_alphabet {
            vec![Symbol::from("a")]
        } else {
            Vec::new()
        };

        AutomatonModel { kind, states, transitions, alphabet }
    }
}

fn arbitrary_input() -> impl Strategy<Value = String> {
    "[abc]{0,8}"
}

/// Seed sets drawn from declared ids, one id past the largest model and one
/// that never exists. Empty sets included.
fn arbitrary_seeds() -> impl Strategy<Value = Vec<StateId>> {
    prop::sample::subsequence(vec!["q0", "q1", "q2", "q3", "q4", "zz"], 0..=6)
        .prop_map(|ids| ids.into_iter().map(StateId::from).collect())
}

/// Any of the structural errors, found by looking at the edges directly.
fn has_edge_violation(model: &AutomatonModel) -> bool {
    let declared: HashSet<&str> = model.states.iter().map(|s| s.id.as_str()).collect();
    let deterministic = model.kind == AutomatonKind::Deterministic;

    let dangling = model
        .transitions
        .iter()
        .any(|t| !declared.contains(t.from.as_str()) || !declared.contains(t.to.as_str()));
    let empty = model.transitions.iter().any(|t| t.symbols.is_empty());
    let epsilon_in_dfa = deterministic
        && model
            .transitions
            .iter()
            .any(|t| t.symbols.iter().any(|s| s.as_str() == "ε"));
    let outside_alphabet = !model.alphabet.is_empty()
        && model.transitions.iter().any(|t| {
            t.symbols
                .iter()
                .any(|s| s.as_str() != "ε" && !model.alphabet.contains(s))
        });

    let mut edges_per_choice: HashMap<(&str, &str), HashSet<&str>> = HashMap::new();
    for t in &model.transitions {
        if declared.contains(t.from.as_str()) {
            for s in &t.symbols {
                edges_per_choice
                    .entry((t.from.as_str(), s.as_str()))
                    .or_default()
                    .insert(t.id.as_str());
            }
        }
    }
    let nondeterministic = deterministic && edges_per_choice.values().any(|edges| edges.len() > 1);

    dangling || empty || epsilon_in_dfa || outside_alphabet || nondeterministic
}

proptest! {
    #[test]
    fn validation_is_idempotent(model in arbitrary_model()) {
        prop_assert_eq!(validate(&model), validate(&model));
    }

    #[test]
    fn valid_iff_no_errors(model in arbitrary_model()) {
        let report = validate(&model);
        prop_assert_eq!(report.valid, report.errors().count() == 0);
    }

    #[test]
    fn single_initial_model_is_valid_iff_edges_are_sound(model in arbitrary_model()) {
        prop_assume!(model.initial_states().count() == 1);
        let report = validate(&model);
        prop_assert_eq!(report.valid, !has_edge_violation(&model));
    }

    #[test]
    fn initial_state_error_matches_count(model in arbitrary_model()) {
        let initial = model.initial_states().count();
        let report = validate(&model);
        let flagged = report
            .errors()
            .any(|d| matches!(
                d.kind,
                DiagnosticKind::MissingInitialState | DiagnosticKind::MultipleInitialStates { .. }
            ));
        prop_assert_eq!(flagged, initial != 1);
    }

    #[test]
    fn closure_contains_seeds_and_is_a_fixpoint(
        model in arbitrary_model(),
        seeds in arbitrary_seeds(),
    ) {
        let once = epsilon_closure(&model, seeds.clone());
        let twice = epsilon_closure(&model, once.iter().cloned());

        prop_assert!(seeds.iter().all(|s| once.contains(s)));
        let once: HashSet<StateId> = once.into_iter().collect();
        let twice: HashSet<StateId> = twice.into_iter().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn closure_of_nothing_is_empty(model in arbitrary_model()) {
        prop_assert!(epsilon_closure(&model, Vec::<StateId>::new()).is_empty());
    }

    #[test]
    fn every_step_splits_the_input(model in arbitrary_model(), input in arbitrary_input()) {
        let engine = SimulationEngine::new(&model).unwrap();
        let trace = engine.simulate(&input).unwrap();

        prop_assert!(!trace.is_empty());
        prop_assert!(trace.len() <= input.chars().count() + 1);

        let first = trace.first().unwrap();
        prop_assert_eq!(first.consumed_prefix.as_str(), "");
        prop_assert_eq!(first.remaining_suffix.as_str(), input.as_str());

        for step in &trace {
            let joined = format!("{}{}", step.consumed_prefix, step.remaining_suffix);
            prop_assert_eq!(joined, input.clone());
        }
    }

    #[test]
    fn trace_ends_at_input_end_or_first_stuck_step(
        model in arbitrary_model(),
        input in arbitrary_input(),
    ) {
        let trace = SimulationEngine::new(&model).unwrap().simulate(&input).unwrap();
        let expected = trace.stuck_at().map_or(input.chars().count() + 1, |i| i + 1);
        prop_assert_eq!(trace.len(), expected);

        let live = trace.stuck_at().unwrap_or(trace.len());
        for step in trace.iter().take(live) {
            prop_assert!(!step.active_states.is_empty());
        }
    }

    #[test]
    fn only_the_last_step_can_be_stuck(model in arbitrary_model(), input in arbitrary_input()) {
        let trace = SimulationEngine::new(&model).unwrap().simulate(&input).unwrap();
        let last = trace.len() - 1;

        for (i, step) in trace.iter().enumerate() {
            if step.is_stuck() {
                prop_assert_eq!(i, last);
            }
        }
        if trace.len() > 1 && trace.is_stuck() {
            prop_assert!(!trace.last().unwrap().remaining_suffix.is_empty());
        }
    }

    #[test]
    fn leftover_input_means_rejection(model in arbitrary_model(), input in arbitrary_input()) {
        let trace = SimulationEngine::new(&model).unwrap().simulate(&input).unwrap();
        let last = trace.last().unwrap();

        if !last.remaining_suffix.is_empty() || last.is_stuck() {
            prop_assert!(!is_accepted(&model, &trace));
        }
    }

    #[test]
    fn deterministic_runs_track_one_state(model in arbitrary_model(), input in arbitrary_input()) {
        prop_assume!(model.kind == AutomatonKind::Deterministic);
        let trace = SimulationEngine::new(&model).unwrap().simulate(&input).unwrap();

        for (i, step) in trace.iter().enumerate() {
            if step.is_stuck() {
                prop_assert_eq!(step.consumed_prefix.chars().count() + 1, i.max(1));
            } else {
                prop_assert_eq!(step.active_states.len(), 1);
                prop_assert_eq!(step.consumed_prefix.chars().count(), i);
            }
        }
    }

    #[test]
    fn nondeterministic_steps_are_closed(model in arbitrary_model(), input in arbitrary_input()) {
        prop_assume!(model.kind == AutomatonKind::Nondeterministic);
        let trace = SimulationEngine::new(&model).unwrap().simulate(&input).unwrap();

        for step in &trace {
            let closed = epsilon_closure(&model, step.active_states.iter().cloned());
            prop_assert_eq!(closed.len(), step.active_states.len());
        }
    }

    #[test]
    fn simulation_is_deterministic(model in arbitrary_model(), input in arbitrary_input()) {
        let engine = SimulationEngine::new(&model).unwrap();
        prop_assert_eq!(engine.simulate(&input).unwrap(), engine.simulate(&input).unwrap());
    }

    #[test]
    fn documents_roundtrip(model in arbitrary_model()) {
        let json = to_json(&model).unwrap();
        prop_assert_eq!(from_json(&json).unwrap(), model.clone());

        let bytes = to_bytes(&model).unwrap();
        prop_assert_eq!(from_bytes(&bytes).unwrap(), model);
    }
}
