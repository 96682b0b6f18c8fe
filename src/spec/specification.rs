//! The aggregate query descriptor.

use std::cmp::Ordering;

use super::{OrderClause, PageWindow, Predicate};

/// A storage-agnostic description of one query: filter, order, page window.
///
/// Predicates are implicitly conjunctive; an empty predicate list means
/// "match all". Builder methods consume and return the specification so call
/// sites can chain; once handed to a repository the value is treated as an
/// immutable descriptor and never mutated again.
pub struct Specification<T> {
    predicates: Vec<Predicate<T>>,
    orders: Vec<OrderClause<T>>,
    page: Option<PageWindow>,
}

impl<T> Default for Specification<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Specification<T> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            orders: self.orders.clone(),
            page: self.page,
        }
    }
}

impl<T> std::fmt::Debug for Specification<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Specification")
            .field("predicates", &self.predicates.len())
            .field("orders", &self.orders.len())
            .field("page", &self.page)
            .finish()
    }
}

impl<T> Specification<T> {
    /// An unfiltered, unsorted, unpaginated specification.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
            orders: Vec::new(),
            page: None,
        }
    }

    /// Adds a predicate; all predicates must match (AND).
    pub fn filter(mut self, predicate: Predicate<T>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds a predicate only when one is present; `None` adds no constraint.
    pub fn filter_opt(self, predicate: Option<Predicate<T>>) -> Self {
        match predicate {
            Some(p) => self.filter(p),
            None => self,
        }
    }

    /// Appends a sort clause; earlier clauses win, later ones break ties.
    pub fn order_by(mut self, clause: OrderClause<T>) -> Self {
        self.orders.push(clause);
        self
    }

    /// Appends all given sort clauses in order.
    pub fn order_by_all(mut self, clauses: impl IntoIterator<Item = OrderClause<T>>) -> Self {
        self.orders.extend(clauses);
        self
    }

    /// Sets the page window.
    pub fn page(mut self, window: PageWindow) -> Self {
        self.page = Some(window);
        self
    }

    /// Drops any page window, keeping filter and order.
    ///
    /// Used to compute pagination-independent totals for a paginated query.
    pub fn without_page(mut self) -> Self {
        self.page = None;
        self
    }

    /// Whether no predicate was added (the specification matches everything).
    pub fn is_unfiltered(&self) -> bool {
        self.predicates.is_empty()
    }

    /// The configured page window, if any.
    pub fn page_window(&self) -> Option<PageWindow> {
        self.page
    }

    /// The configured sort clauses.
    pub fn orders(&self) -> &[OrderClause<T>] {
        &self.orders
    }

    /// Evaluates the effective composite predicate: AND of every added
    /// predicate, or "match all" when none were added.
    pub fn matches(&self, value: &T) -> bool {
        self.predicates.iter().all(|p| p.matches(value))
    }

    /// Compares two entities under the sort clauses, first difference wins.
    ///
    /// With no clauses everything compares equal, so a stable sort leaves the
    /// repository's natural order untouched.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for clause in &self.orders {
            match clause.ordering(a, b) {
                Ordering::Equal => continue,
                decided => return decided,
            }
        }
        Ordering::Equal
    }
}
