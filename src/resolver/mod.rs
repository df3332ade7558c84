//! Redirection chain resolution.
//!
//! Redirections form a functional graph: every number has at most one
//! outgoing edge. Following edges from a start number either reaches a
//! number with no entry or revisits a target already produced, which
//! means the chain is a cycle.

use crate::domain::PhoneNumber;
use crate::store::Directory;
use std::collections::HashSet;

/// How a resolution terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The start number has no entry.
    Unmapped,
    /// The chain ended after `hops` redirections.
    Redirected { hops: usize },
    /// The chain revisited a target; the start number is reported unchanged.
    Cycle,
}

/// Result of following a redirection chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub number: PhoneNumber,
    pub outcome: Outcome,
}

impl Resolution {
    pub fn is_cycle(&self) -> bool {
        self.outcome == Outcome::Cycle
    }
}

/// Follow redirections from `src` until a number with no entry is reached.
///
/// A detected cycle resolves to `src` itself, not to the number where the
/// cycle was noticed. Terminates in at most `directory.len() + 1` lookups:
/// each iteration either stops or adds a new target to `visited`.
pub fn resolve(directory: &Directory, src: &PhoneNumber) -> Resolution {
    let mut visited: HashSet<&PhoneNumber> = HashSet::new();
    let mut current = src;

    while let Some(next) = directory.get(current.as_str()) {
        if !visited.insert(next) {
            return Resolution {
                number: src.clone(),
                outcome: Outcome::Cycle,
            };
        }
        current = next;
    }

    let outcome = match visited.len() {
        0 => Outcome::Unmapped,
        hops => Outcome::Redirected { hops },
    };

    Resolution {
        number: current.clone(),
        outcome,
    }
}
