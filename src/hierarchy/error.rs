//! Error types for hierarchy traversal.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors a traversal can fail with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HierarchyError {
    /// The node the walk was asked to start from does not exist.
    #[error("Catalog node not found: {0}")]
    NotFound(String),

    /// A cycle or depth-limit violation was detected mid-walk.
    ///
    /// Fatal for the request; the walk is never silently truncated.
    #[error("Corrupt hierarchy at node {node_id}: cycle or depth limit exceeded after {hops} hops")]
    CorruptHierarchy { node_id: String, hops: u32 },

    /// The underlying repository failed; propagated unchanged.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
