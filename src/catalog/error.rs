//! Error type for catalog service operations.

use thiserror::Error;

use crate::hierarchy::HierarchyError;
use crate::repository::RepositoryError;
use crate::spec::ValidationError;

/// Errors surfaced by [`CatalogService`](super::CatalogService) operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Malformed request input (bad page number, unknown strict sort field).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage engine failed; propagated unchanged.
    #[error(transparent)]
    Storage(#[from] RepositoryError),

    /// The catalog tree walk failed.
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
}
