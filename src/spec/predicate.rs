//! Opaque, composable boolean conditions over a single entity type.

use std::fmt;
use std::sync::Arc;

/// A single boolean condition over an entity.
///
/// A predicate is an opaque callable: once constructed it is never mutated,
/// only combined into new predicates via [`and`](Predicate::and) /
/// [`or`](Predicate::or). Cloning is cheap (the closure is shared). Where a
/// caller needs to know that *no* predicate applies — as opposed to one that
/// rejects everything — the convention throughout this crate is
/// `Option<Predicate<T>>` with `None` meaning "no constraint"; see
/// [`PredicateCombiner`](crate::combine::PredicateCombiner).
pub struct Predicate<T: ?Sized> {
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps a boolean function as a predicate.
    pub fn new(test: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            test: Arc::new(test),
        }
    }

    /// Evaluates the predicate against one entity.
    pub fn matches(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// Conjunction: the result matches when both inputs match.
    ///
    /// Evaluation short-circuits left to right.
    pub fn and(self, other: Self) -> Self
    where
        T: 'static,
    {
        Self::new(move |value| self.matches(value) && other.matches(value))
    }

    /// Disjunction: the result matches when either input matches.
    ///
    /// Evaluation short-circuits left to right.
    pub fn or(self, other: Self) -> Self
    where
        T: 'static,
    {
        Self::new(move |value| self.matches(value) || other.matches(value))
    }
}
