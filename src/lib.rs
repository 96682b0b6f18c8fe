//! # catalog-core
//!
//! Storage-agnostic data access for an e-commerce catalog, built around the
//! **Specification pattern**: reusable, composable query objects describing
//! filtering, sorting, and pagination independently of any storage engine.
//!
//! ## Design Philosophy
//!
//! Queries are *described*, then *executed*. Call sites build plain-data
//! [`Specification`](spec::Specification)s — predicates, order clauses, a page
//! window — without touching storage; a [`Repository`](repository::Repository)
//! executes them later. Because descriptions are just values, they compose:
//! fragments authored at unrelated call sites (a price range here, a brand
//! list there) are folded into one predicate by a
//! [`PredicateCombiner`](combine::PredicateCombiner), and they test without a
//! database.
//!
//! ## Module Tour
//!
//! ### 1. The Model ([`spec`], [`combine`])
//! [`Predicate`](spec::Predicate) is an opaque boolean condition; zero or more
//! of them (AND-ed), plus [`OrderClause`](spec::OrderClause)s and an optional
//! [`PageWindow`](spec::PageWindow), make a specification. The combiner folds
//! independently built fragments with AND or OR, where an empty fold means
//! "no constraint" — explicitly distinct from a predicate matching nothing.
//!
//! ### 2. The Contract ([`repository`])
//! The [`Repository`](repository::Repository) trait fixes what any execution
//! engine must honor: filter, then sort, then page; counts that ignore
//! pagination; absence as success, infrastructure failure as
//! [`StorageUnavailable`](repository::RepositoryError::StorageUnavailable).
//! [`MemoryRepository`](repository::MemoryRepository) is the in-crate engine
//! used by tests and demos.
//!
//! ### 3. The Tree ([`hierarchy`])
//! Catalog nodes reference their parents by id;
//! [`HierarchyWalker`](hierarchy::HierarchyWalker) flattens subtrees
//! (depth-first, depth-limited) and ancestor chains (innermost-first), failing
//! fast on cycles instead of looping.
//!
//! ### 4. The Facade ([`catalog`])
//! [`CatalogService`](catalog::CatalogService) is what an HTTP layer calls:
//! subtree-scoped product listings with pagination metadata, brand and
//! price-range summaries, attribute groupings, and catalog search.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use catalog_core::catalog::{CatalogService, ProductFilter};
//! use catalog_core::model::{Brand, CatalogNode, Product};
//! use catalog_core::repository::MemoryRepository;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let products = Arc::new(MemoryRepository::with_rows([
//!     Product::new("p1", "Hammer", 12.5, 0, "acme", "tools"),
//! ]));
//! let catalogs = Arc::new(MemoryRepository::with_rows([
//!     CatalogNode::root("tools", "Tools"),
//! ]));
//! let brands = Arc::new(MemoryRepository::with_rows([
//!     Brand::new("acme", "Acme"),
//! ]));
//!
//! let service = CatalogService::new(products, catalogs, brands);
//! let page = service
//!     .products_page(Some("tools"), &ProductFilter::default(), Vec::new(), 1, 10)
//!     .await
//!     .unwrap();
//! assert_eq!(page.total_items, 1);
//! # }
//! ```

pub mod catalog;
pub mod combine;
pub mod hierarchy;
pub mod model;
pub mod repository;
pub mod spec;
pub mod telemetry;
