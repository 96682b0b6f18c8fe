//! Error type for repository operations.

use thiserror::Error;

/// Errors a repository operation can fail with.
///
/// Empty and zero-match results are success outcomes; the only failure this
/// contract knows is the storage engine being unreachable or broken. The core
/// never retries — it propagates the error unchanged to the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    /// The external storage engine failed (connection loss, timeout,
    /// cancellation, corruption — whatever the collaborator reports).
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}
