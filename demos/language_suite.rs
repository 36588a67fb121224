//! Language Test Suite
//!
//! This example explores the language of a catalog automaton with a suite of
//! test strings, edits the model, reruns the suite and saves the result.
//!
//! Key concepts:
//! - Loading a built-in example from the catalog
//! - Recording verdicts with `TestSuite`
//! - Re-evaluating after an edit
//! - Saving and restoring through `AutomatonStore`
//!
//! Run with: cargo run --example language_suite

use automata_sim::catalog;
use automata_sim::persistence::AutomatonStore;
use automata_sim::suite::TestSuite;

fn print_suite(suite: &TestSuite) {
    for case in suite.cases() {
        let shown = if case.input.is_empty() { "ε" } else { &case.input };
        println!("  {:>8}  {}", shown, case.verdict);
    }
    let summary = suite.summary();
    println!(
        "  {} accepted, {} rejected, {} errors\n",
        summary.accepted, summary.rejected, summary.errors
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Language Test Suite ===\n");

    let example = catalog::by_id("dfa-divisible-by-3").expect("catalog entry exists");
    println!("{}: {}\n", example.name, example.description);
    let mut model = example.automaton;

    let mut suite = TestSuite::new();
    for input in ["", "0", "11", "110", "111", "1001", "  11  "] {
        if suite.add(&model, input).is_none() {
            println!("  (skipped duplicate \"{}\")", input.trim());
        }
    }
    print_suite(&suite);

    println!("Making q1 accepting and rerunning:");
    if let Some(q1) = model.states.iter_mut().find(|s| s.label == "q1") {
        q1.is_accept = true;
    }
    suite.rerun(&model);
    print_suite(&suite);

    let dir = std::env::temp_dir().join("automata-sim-demo");
    let store = AutomatonStore::new(dir.join("automaton.json"));
    match store.save(&model) {
        Ok(snapshot) => println!("Saved snapshot {} at {}", snapshot.id, snapshot.saved_at),
        Err(e) => println!("Save failed: {}", e),
    }
    if let Ok(Some(restored)) = store.load() {
        println!("Restored model has {} states", restored.states.len());
    }

    // Cleanup
    store.clear().ok();
    std::fs::remove_dir_all(&dir).ok();

    println!("\nKey Takeaways:");
    println!("- Inputs are trimmed and duplicates are ignored");
    println!("- rerun keeps case ids and order, only verdicts change");
    println!("- The store writes atomically and loads back the same model");
}
