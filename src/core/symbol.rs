//! Identifier and symbol value types.
//!
//! State ids, transition ids and input symbols are all opaque strings on the
//! wire. Each gets its own newtype so the compiler keeps them apart.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// The reserved epsilon symbol. Legal only in nondeterministic automata.
pub const EPSILON: &str = "ε";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id! {
    /// Identifier of a state, unique within one automaton.
    StateId
}

string_id! {
    /// Identifier of a transition edge.
    TransitionId
}

string_id! {
    /// An input token. `ε` marks an epsilon move.
    Symbol
}

impl Symbol {
    /// The epsilon symbol.
    pub fn epsilon() -> Self {
        Self(EPSILON.to_string())
    }

    pub fn is_epsilon(&self) -> bool {
        self.0 == EPSILON
    }

    /// Does this symbol consume the given input character?
    ///
    /// Epsilon never consumes input, even if the input literally contains `ε`.
    pub fn matches_char(&self, c: char) -> bool {
        if self.is_epsilon() {
            return false;
        }
        let mut buf = [0u8; 4];
        self.0 == *c.encode_utf8(&mut buf)
    }
}
