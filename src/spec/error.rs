//! Error type for malformed specification inputs.

use thiserror::Error;

/// Errors raised while building a specification from caller input.
///
/// These are boundary errors: the offending fragment is rejected at
/// construction and never reaches a partially built specification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Page size (`take`) must be positive.
    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    /// Page numbers are 1-based.
    #[error("Invalid page number: {0}")]
    InvalidPageNumber(u32),

    /// A sort parameter named a field this entity does not expose.
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// A sort parameter carried an unrecognized direction token.
    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),
}
