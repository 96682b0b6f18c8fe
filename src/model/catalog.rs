use serde::{Deserialize, Serialize};

use super::Entity;

/// A node in the catalog hierarchy.
///
/// Nodes form a tree through `parent_id` back-references only — no node owns
/// another, which keeps traversal a matter of repeated id lookups (see
/// [`HierarchyWalker`](crate::hierarchy::HierarchyWalker)). Root nodes have no
/// parent. Well-formed data has no cycles; the walker defends against them
/// anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogNode {
    pub id: String,
    pub parent_id: Option<String>,
    pub title: String,
}

impl CatalogNode {
    /// Creates a root node (no parent).
    pub fn root(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            title: title.into(),
        }
    }

    /// Creates a child node under the given parent.
    pub fn child(
        id: impl Into<String>,
        parent_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: Some(parent_id.into()),
            title: title.into(),
        }
    }

    /// Whether this node is a root of the hierarchy.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl Entity for CatalogNode {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
