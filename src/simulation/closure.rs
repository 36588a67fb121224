//! Epsilon closure.

use crate::core::{AutomatonModel, StateId};
use indexmap::IndexSet;

/// A set of states that remembers discovery order.
pub type StateSet = IndexSet<StateId>;

/// All states reachable from `seeds` through zero or more ε-edges.
///
/// Worklist fixpoint: the visited set doubles as the result, so cycles of
/// ε-edges terminate. Seeds come first in the result, followed by states in
/// discovery order. Applying the closure to its own result changes nothing.
pub fn epsilon_closure<I>(model: &AutomatonModel, seeds: I) -> StateSet
where
    I: IntoIterator<Item = StateId>,
{
    let mut closure: StateSet = seeds.into_iter().collect();
    let mut stack: Vec<StateId> = closure.iter().cloned().collect();

    while let Some(state) = stack.pop() {
        for edge in model.outgoing(state.as_str()) {
            if edge.has_epsilon() && closure.insert(edge.to.clone()) {
                stack.push(edge.to.clone());
            }
        }
    }

    closure
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AutomatonKind, StateNode, TransitionEdge};
    use std::collections::BTreeSet;

    fn model(transitions: Vec<TransitionEdge>) -> AutomatonModel {
        AutomatonModel {
            kind: AutomatonKind::Nondeterministic,
            states: ["q0", "q1", "q2", "q3"].into_iter().map(StateNode::new).collect(),
            transitions,
            alphabet: Vec::new(),
        }
    }

    fn ids(set: &StateSet) -> BTreeSet<&str> {
        set.iter().map(StateId::as_str).collect()
    }

    #[test]
    fn closure_without_epsilon_edges_is_the_seed() {
        let model = model(vec![TransitionEdge::new("t1", "q0", "q1", ["a"])]);
        let closure = epsilon_closure(&model, [StateId::from("q0")]);
        assert_eq!(ids(&closure), BTreeSet::from(["q0"]));
    }

    #[test]
    fn closure_follows_epsilon_chains() {
        let model = model(vec![
            TransitionEdge::new("t1", "q0", "q1", ["ε"]),
            TransitionEdge::new("t2", "q1", "q2", ["a", "ε"]),
            TransitionEdge::new("t3", "q2", "q3", ["b"]),
        ]);
        let closure = epsilon_closure(&model, [StateId::from("q0")]);
        assert_eq!(ids(&closure), BTreeSet::from(["q0", "q1", "q2"]));
    }

    #[test]
    fn closure_terminates_on_cycles() {
        let model = model(vec![
            TransitionEdge::new("t1", "q0", "q1", ["ε"]),
            TransitionEdge::new("t2", "q1", "q0", ["ε"]),
            TransitionEdge::new("t3", "q1", "q1", ["ε"]),
        ]);
        let closure = epsilon_closure(&model, [StateId::from("q1")]);
        assert_eq!(ids(&closure), BTreeSet::from(["q0", "q1"]));
    }

    #[test]
    fn closure_of_nothing_is_empty() {
        let model = model(vec![TransitionEdge::new("t1", "q0", "q1", ["ε"])]);
        assert!(epsilon_closure(&model, Vec::new()).is_empty());
    }

    #[test]
    fn seeds_come_first() {
        let model = model(vec![TransitionEdge::new("t1", "q2", "q0", ["ε"])]);
        let closure = epsilon_closure(&model, [StateId::from("q2")]);
        let order: Vec<_> = closure.iter().map(StateId::as_str).collect();
        assert_eq!(order, vec!["q2", "q0"]);
    }
}
