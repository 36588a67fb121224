//! Even Number of Zeros
//!
//! This example steps through a deterministic automaton one symbol at a time.
//!
//! Key concepts:
//! - Building a model with the `automaton!` macro
//! - Validating before simulating
//! - Walking the trace configuration by configuration
//! - What a stuck run looks like
//!
//! Run with: cargo run --example even_zeros

use automata_sim::{automaton, validate, SimulationEngine, Trace};

fn print_trace(trace: &Trace) {
    for (step, config) in trace.iter().enumerate() {
        let active: Vec<&str> = config.active_states.iter().map(|s| s.as_str()).collect();
        let via = config
            .transition_used
            .as_ref()
            .map(|t| format!(" via {} on '{}'", t.edge, t.symbol))
            .unwrap_or_default();
        println!(
            "  step {}: [{}] | consumed \"{}\" | remaining \"{}\"{}",
            step,
            active.join(", "),
            config.consumed_prefix,
            config.remaining_suffix,
            via
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Even Number of Zeros ===\n");

    let model = automaton! {
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
    };

    let report = validate(&model);
    println!("Model valid: {}\n", report.valid);

    let engine = SimulationEngine::new(&model).expect("state ids are unique");

    for input in ["1010", "101", "10x1"] {
        println!("Input \"{}\":", input);
        match engine.simulate(input) {
            Ok(trace) => {
                print_trace(&trace);
                if let Some(at) = trace.stuck_at() {
                    println!("  -> stuck at step {}", at);
                }
                let verdict = if engine.is_accepted(&trace) {
                    "ACCEPTED"
                } else {
                    "REJECTED"
                };
                println!("  -> {}\n", verdict);
            }
            Err(e) => println!("  -> error: {}\n", e),
        }
    }

    println!("Key Takeaways:");
    println!("- Step 0 is the start configuration, before any input");
    println!("- Each later step consumes exactly one symbol");
    println!("- A stuck run keeps the symbol it could not consume and is rejected");
}
