//! The composable query-description model.
//!
//! A [`Specification`] describes *which* entities to select ([`Predicate`]s,
//! implicitly AND-ed), *how* to order them ([`OrderClause`]s, applied in list
//! order with later clauses breaking ties), and *what* window to return
//! ([`PageWindow`]). It never touches storage: a
//! [`Repository`](crate::repository::Repository) executes it.
//!
//! Specifications are cheap, per-request values. Build one with the chaining
//! methods, hand it to a repository call, drop it. They are not shared across
//! tasks mid-build, so no internal locking exists.

mod error;
mod order;
mod page;
mod predicate;
mod specification;

pub use error::ValidationError;
pub use order::{Direction, OrderClause};
pub use page::{Page, PageWindow};
pub use predicate::Predicate;
pub use specification::Specification;
