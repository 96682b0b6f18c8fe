//! Traversal over the self-referencing catalog tree.
//!
//! Catalog nodes live in flat storage and point at their parents by id; the
//! [`HierarchyWalker`] turns those back-references into flattened descendant
//! and ancestor listings, defending against cycles the data should not — but
//! might — contain.

mod error;
mod walker;

pub use error::HierarchyError;
pub use walker::{HierarchyWalker, DEFAULT_MAX_ANCESTOR_DEPTH};
