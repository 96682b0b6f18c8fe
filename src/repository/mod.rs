//! The query-by-specification repository contract.

mod error;
mod memory;

pub use error::RepositoryError;
pub use memory::MemoryRepository;

use async_trait::async_trait;

use crate::model::Entity;
use crate::spec::Specification;

/// Abstract read capability over one entity type.
///
/// The execution engine behind an implementation is an external collaborator;
/// this trait only fixes the contract it must honor:
///
/// - `query_by_spec` applies filter, then order, then page window, in that
///   fixed order. An absent window returns all matches, sorted.
/// - `count_by_spec` counts matches to the predicate only, ignoring order and
///   window, so totals are pagination-independent.
/// - Absent rows are success outcomes (`Ok(None)`, empty `Vec`, zero count),
///   never errors. Only infrastructure failure errors, as
///   [`RepositoryError::StorageUnavailable`], and it is propagated unchanged —
///   retry policy belongs to the collaborator, not this core.
///
/// Implementations must be callable concurrently on one instance, each call
/// independently consistent. Timeouts and cancellation on the storage side
/// surface as `StorageUnavailable` rather than hanging.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Looks up one entity by id. `Ok(None)` when no such row exists.
    async fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, RepositoryError>;

    /// Returns the first result respecting the specification's order, or
    /// `Ok(None)` when nothing matches. Any page window is ignored: the
    /// window describes listing output, not existence probes.
    async fn find_first(&self, spec: &Specification<T>) -> Result<Option<T>, RepositoryError>;

    /// Runs the specification: filter, sort, page.
    async fn query_by_spec(&self, spec: &Specification<T>) -> Result<Vec<T>, RepositoryError>;

    /// Counts matches to the specification's predicate only.
    async fn count_by_spec(&self, spec: &Specification<T>) -> Result<usize, RepositoryError>;

    /// Total row count; fast path when no predicate applies.
    async fn count_all(&self) -> Result<usize, RepositoryError>;
}
