//! In-memory repository: the crate's own execution engine.
//!
//! Backs tests and demo wiring, and doubles as the reference implementation of
//! the [`Repository`](super::Repository) contract: filter, then sort, then
//! page, with pagination-independent counts.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use super::{Repository, RepositoryError};
use crate::model::Entity;
use crate::spec::Specification;

/// Rows in insertion order plus an id index.
///
/// The flat `Vec` is the repository's natural ordering; the index keeps
/// `find_by_id` cheap without imposing hash order on scans. Parent/child links
/// between rows stay id references, never pointers.
struct Store<T: Entity> {
    rows: Vec<T>,
    index: HashMap<T::Id, usize>,
}

/// A thread-safe in-memory [`Repository`].
///
/// Every operation takes the lock for the duration of one synchronous scan and
/// never holds it across an await, so concurrent calls on one instance are
/// each independently consistent.
pub struct MemoryRepository<T: Entity> {
    store: RwLock<Store<T>>,
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                rows: Vec::new(),
                index: HashMap::new(),
            }),
        }
    }

    /// Creates a repository seeded with the given rows.
    pub fn with_rows(rows: impl IntoIterator<Item = T>) -> Self {
        let repo = Self::new();
        repo.insert_all(rows);
        repo
    }

    /// Inserts a row, replacing any row with the same id in place.
    ///
    /// Replacement keeps the original position so the natural ordering stays
    /// stable under updates.
    pub fn insert(&self, row: T) {
        let mut store = self.write();
        match store.index.get(row.id()) {
            Some(&pos) => store.rows[pos] = row,
            None => {
                let pos = store.rows.len();
                store.index.insert(row.id().clone(), pos);
                store.rows.push(row);
            }
        }
    }

    /// Inserts every row in order.
    pub fn insert_all(&self, rows: impl IntoIterator<Item = T>) {
        for row in rows {
            self.insert(row);
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Store<T>> {
        // A poisoned lock means a writer panicked mid-insert; the read data is
        // still structurally sound for this store, so recover the guard.
        self.store.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Store<T>> {
        self.store.write().unwrap_or_else(|e| e.into_inner())
    }

    fn entity_type() -> &'static str {
        std::any::type_name::<T>().split("::").last().unwrap_or("?")
    }

    /// Filtered rows in natural order, then sorted by the specification.
    ///
    /// The sort is stable, so rows the clauses consider equal keep their
    /// natural order.
    fn filtered_sorted(&self, spec: &Specification<T>) -> Vec<T> {
        let store = self.read();
        let mut matches: Vec<T> = store
            .rows
            .iter()
            .filter(|row| spec.matches(row))
            .cloned()
            .collect();
        drop(store);

        if !spec.orders().is_empty() {
            matches.sort_by(|a, b| spec.compare(a, b));
        }
        matches
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, RepositoryError> {
        let store = self.read();
        let row = store.index.get(id).map(|&pos| store.rows[pos].clone());
        debug!(entity_type = Self::entity_type(), %id, found = row.is_some(), "find_by_id");
        Ok(row)
    }

    async fn find_first(&self, spec: &Specification<T>) -> Result<Option<T>, RepositoryError> {
        let first = self.filtered_sorted(spec).into_iter().next();
        debug!(
            entity_type = Self::entity_type(),
            found = first.is_some(),
            "find_first"
        );
        Ok(first)
    }

    async fn query_by_spec(&self, spec: &Specification<T>) -> Result<Vec<T>, RepositoryError> {
        let sorted = self.filtered_sorted(spec);
        let rows = match spec.page_window() {
            Some(window) => window.apply(sorted),
            None => sorted,
        };
        debug!(
            entity_type = Self::entity_type(),
            returned = rows.len(),
            paged = spec.page_window().is_some(),
            "query_by_spec"
        );
        Ok(rows)
    }

    async fn count_by_spec(&self, spec: &Specification<T>) -> Result<usize, RepositoryError> {
        let store = self.read();
        let count = store.rows.iter().filter(|row| spec.matches(row)).count();
        debug!(entity_type = Self::entity_type(), count, "count_by_spec");
        Ok(count)
    }

    async fn count_all(&self) -> Result<usize, RepositoryError> {
        let count = self.read().rows.len();
        debug!(entity_type = Self::entity_type(), count, "count_all");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::spec::{Direction, OrderClause, PageWindow, Predicate};

    fn priced(id: &str, price: f64) -> Product {
        Product::new(id, format!("product {id}"), price, 0, "brand_1", "cat_1")
    }

    fn price_asc() -> OrderClause<Product> {
        OrderClause::by_cmp(|a: &Product, b: &Product| a.price.total_cmp(&b.price), Direction::Asc)
    }

    #[tokio::test]
    async fn filter_then_sort_then_page() {
        // Prices [30, 10, 20], filter price > 5, sort asc, window (0, 2)
        // must yield [10, 20].
        let repo = MemoryRepository::with_rows([
            priced("p1", 30.0),
            priced("p2", 10.0),
            priced("p3", 20.0),
        ]);

        let spec = Specification::new()
            .filter(Predicate::new(|p: &Product| p.price > 5.0))
            .order_by(price_asc())
            .page(PageWindow::new(0, 2).unwrap());

        let rows = repo.query_by_spec(&spec).await.unwrap();
        let prices: Vec<f64> = rows.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 20.0]);
    }

    #[tokio::test]
    async fn unpaged_query_returns_all_matches_sorted() {
        let repo = MemoryRepository::with_rows([
            priced("p1", 30.0),
            priced("p2", 10.0),
            priced("p3", 20.0),
        ]);

        let spec = Specification::new().order_by(price_asc());
        let rows = repo.query_by_spec(&spec).await.unwrap();
        let prices: Vec<f64> = rows.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![10.0, 20.0, 30.0]);
    }

    #[tokio::test]
    async fn count_ignores_order_and_page() {
        let repo = MemoryRepository::with_rows([
            priced("p1", 30.0),
            priced("p2", 10.0),
            priced("p3", 20.0),
        ]);

        let spec = Specification::new()
            .filter(Predicate::new(|p: &Product| p.price > 15.0))
            .order_by(price_asc())
            .page(PageWindow::new(0, 1).unwrap());

        assert_eq!(repo.count_by_spec(&spec).await.unwrap(), 2);
        // Unchanged spec and data: same count again.
        assert_eq!(repo.count_by_spec(&spec).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn count_all_is_total_rows() {
        let repo = MemoryRepository::with_rows([priced("p1", 1.0), priced("p2", 2.0)]);
        assert_eq!(repo.count_all().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn find_by_id_absent_is_ok_none() {
        let repo = MemoryRepository::<Product>::new();
        assert!(repo.find_by_id(&"nope".to_string()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_first_respects_order_and_ignores_page() {
        let repo = MemoryRepository::with_rows([
            priced("p1", 30.0),
            priced("p2", 10.0),
        ]);

        // Window skipping everything must not affect the probe.
        let spec = Specification::new()
            .order_by(price_asc())
            .page(PageWindow::new(10, 5).unwrap());

        let first = repo.find_first(&spec).await.unwrap().unwrap();
        assert_eq!(first.id, "p2");
    }

    #[tokio::test]
    async fn find_first_no_match_is_ok_none() {
        let repo = MemoryRepository::with_rows([priced("p1", 1.0)]);
        let spec = Specification::new().filter(Predicate::new(|p: &Product| p.price > 99.0));
        assert!(repo.find_first(&spec).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn replacing_a_row_keeps_its_position() {
        let repo = MemoryRepository::with_rows([priced("p1", 1.0), priced("p2", 2.0)]);
        repo.insert(priced("p1", 9.0));

        let rows = repo.query_by_spec(&Specification::new()).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "p1");
        assert_eq!(rows[0].price, 9.0);
    }

    #[tokio::test]
    async fn stable_sort_preserves_natural_order_on_ties() {
        let repo = MemoryRepository::with_rows([
            priced("p1", 5.0),
            priced("p2", 5.0),
            priced("p3", 5.0),
        ]);

        let spec = Specification::new().order_by(price_asc());
        let rows = repo.query_by_spec(&spec).await.unwrap();
        let ids: Vec<&str> = rows.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
    }
}
