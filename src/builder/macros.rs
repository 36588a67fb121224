//! Macros for concise automaton literals.

/// Build an `AutomatonModel` literal.
///
/// State and edge ids are written as identifiers; symbols as string literals.
/// State flags are `initial` and `accept`. The `alphabet` clause and the
/// `transitions` block are optional.
///
/// # Example
///
/// ```
/// use automata_sim::automaton;
/// use automata_sim::core::AutomatonKind;
///
/// let model = automaton! {
///     DFA alphabet ["0", "1"];
///     states {
///         q0: initial accept;
///         q1;
///     }
///     transitions {
///         t1: q0 -> q1 ["0"];
///         t2: q1 -> q0 ["0"];
///         t3: q0 -> q0 ["1"];
///         t4: q1 -> q1 ["1"];
///     }
/// };
///
/// assert_eq!(model.kind, AutomatonKind::Deterministic);
/// assert_eq!(model.states.len(), 2);
/// assert!(model.states[0].is_initial);
/// ```
#[macro_export]
macro_rules! automaton {
    (@kind DFA) => {
        $crate::core::AutomatonKind::Deterministic
    };
    (@kind NFA) => {
        $crate::core::AutomatonKind::Nondeterministic
    };
    (@kind PDA) => {
        $crate::core::AutomatonKind::Pushdown
    };
    (
        $kind:ident $(alphabet [$($symbol:literal),* $(,)?])?;
        states {
            $($state:ident $(: $($flag:ident)+)?;)*
        }
        $(transitions {
            $($edge:ident : $from:ident -> $to:ident [$($edge_symbol:literal),+ $(,)?];)*
        })?
    ) => {
        $crate::core::AutomatonModel {
            kind: $crate::automaton!(@kind $kind),
            states: vec![
                $($crate::core::StateNode::new(stringify!($state))$($(.$flag())+)?),*
            ],
            transitions: vec![
                $($($crate::core::TransitionEdge::new(
                    stringify!($edge),
                    stringify!($from),
                    stringify!($to),
                    [$($edge_symbol),+],
                )),*)?
            ],
            alphabet: vec![$($($crate::core::Symbol::from($symbol)),*)?],
        }
    };
}
