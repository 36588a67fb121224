//! Validation Report
//!
//! This example validates a deliberately broken automaton and prints every
//! finding, then adds a custom rule on top of the built-in checks.
//!
//! Key concepts:
//! - All problems are reported at once, not just the first
//! - Errors block validity, warnings do not
//! - Custom checks with `ValidatorBuilder::require_pred`
//! - Refusing to simulate invalid models via `EngineConfig`
//!
//! Run with: cargo run --example validation_report

use automata_sim::validation::{Severity, ValidationReport, Validator};
use automata_sim::{automaton, EngineConfig, InvalidModelPolicy, SimulationEngine};

fn print_report(report: &ValidationReport) {
    println!("  valid: {}", report.valid);
    for diagnostic in &report.diagnostics {
        let tag = match diagnostic.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let states: Vec<&str> = diagnostic.affected_states.iter().map(|s| s.as_str()).collect();
        let edges: Vec<&str> = diagnostic
            .affected_transitions
            .iter()
            .map(|t| t.as_str())
            .collect();
        println!(
            "  [{}] {} (states: {:?}, transitions: {:?})",
            tag, diagnostic.message, states, edges
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Validation Report ===\n");

    let broken = automaton! {
        DFA alphabet ["0", "1"];
        states {
            q0: initial;
            q1: initial;
            q2;
        }
        transitions {
            t1: q0 -> q1 ["0"];
            t2: q0 -> q2 ["0"];
            t3: q1 -> q2 ["ε"];
            t4: q2 -> q3 ["x"];
        }
    };

    println!("Built-in checks:");
    let report = Validator::default().validate(&broken);
    print_report(&report);

    println!("\nWith a custom rule (at most two states):");
    let strict = Validator::builder()
        .require_pred(
            |ctx| ctx.model.states.len() <= 2,
            "Keep it small: at most two states".to_string(),
            Severity::Warning,
        )
        .build();
    print_report(&strict.validate(&broken));

    println!("\nSimulating under the refuse policy:");
    let config = EngineConfig::new().on_invalid(InvalidModelPolicy::Refuse);
    match SimulationEngine::with_config(&broken, config).and_then(|e| e.simulate("01")) {
        Ok(trace) => println!("  ran {} steps", trace.len()),
        Err(e) => println!("  refused: {}", e),
    }

    println!("\nKey Takeaways:");
    println!("- Every check runs, so the report lists every problem");
    println!("- A missing accept state is only a warning");
    println!("- Invalid models still simulate unless the config says otherwise");
}
