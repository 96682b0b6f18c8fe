//! Folding independently built predicates into one.
//!
//! Call sites assemble filter fragments without knowing about each other — a
//! price range here, a brand list there — and a [`PredicateCombiner`] merges
//! whatever actually arrived into a single [`Predicate`].

use crate::spec::Predicate;

/// Boolean operator used to fold collected fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolOp {
    And,
    Or,
}

/// Collects predicate fragments and folds them with one boolean operator.
///
/// Folding is left-associative in insertion order:
/// `op(op(op(f1, f2), f3), ... fn)`. AND/OR are commutative for the truth
/// value, so the result is order-independent; insertion order is still
/// preserved because it fixes short-circuit evaluation order, which keeps
/// evaluation cost reproducible and testable.
///
/// An empty combiner folds to `None` — "no filtering applies" — which is
/// distinct from a predicate that matches nothing. Callers branch on this
/// before hitting a repository: `None` means use the unfiltered specification.
#[derive(Debug)]
pub struct PredicateCombiner<T> {
    fragments: Vec<Predicate<T>>,
}

impl<T: 'static> Default for PredicateCombiner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> PredicateCombiner<T> {
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Appends a fragment.
    pub fn add(&mut self, predicate: Predicate<T>) {
        self.fragments.push(predicate);
    }

    /// Appends a fragment when present; `None` is "no constraint" and is
    /// silently ignored.
    pub fn add_opt(&mut self, predicate: Option<Predicate<T>>) {
        if let Some(p) = predicate {
            self.fragments.push(p);
        }
    }

    /// Number of collected fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment was collected.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Folds the collected fragments left-to-right with `op`.
    ///
    /// Zero fragments return `None`; a single fragment is returned unchanged.
    pub fn combine(self, op: BoolOp) -> Option<Predicate<T>> {
        self.fragments.into_iter().reduce(|acc, next| match op {
            BoolOp::And => acc.and(next),
            BoolOp::Or => acc.or(next),
        })
    }
}
