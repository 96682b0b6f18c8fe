//! Depth-first descendant and ancestor walks.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::HierarchyError;
use crate::model::CatalogNode;
use crate::repository::Repository;
use crate::spec::{Predicate, Specification};

/// Upper bound on parent hops before an ancestor walk is declared corrupt.
///
/// Well-formed catalog trees are a handful of levels deep; a chain longer than
/// this is a cycle in practice.
pub const DEFAULT_MAX_ANCESTOR_DEPTH: u32 = 64;

/// Generic recursive traversal over the catalog tree.
///
/// Traversal is a pure read: each call resolves nodes through the repository
/// by id and holds no state between calls. Child reads are issued one level
/// at a time; what the contract fixes is the deterministic depth-first output
/// order, not the I/O schedule.
pub struct HierarchyWalker<R> {
    repo: Arc<R>,
    max_ancestor_depth: u32,
}

impl<R> Clone for HierarchyWalker<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            max_ancestor_depth: self.max_ancestor_depth,
        }
    }
}

impl<R: Repository<CatalogNode>> HierarchyWalker<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self {
            repo,
            max_ancestor_depth: DEFAULT_MAX_ANCESTOR_DEPTH,
        }
    }

    /// Overrides the ancestor hop bound.
    pub fn with_max_ancestor_depth(mut self, depth: u32) -> Self {
        self.max_ancestor_depth = depth;
        self
    }

    fn roots_spec() -> Specification<CatalogNode> {
        Specification::new().filter(Predicate::new(CatalogNode::is_root))
    }

    fn children_spec(parent_id: &str) -> Specification<CatalogNode> {
        let parent_id = parent_id.to_string();
        Specification::new().filter(Predicate::new(move |n: &CatalogNode| {
            n.parent_id.as_deref() == Some(parent_id.as_str())
        }))
    }

    /// Flattens a subtree in depth-first preorder: each node, then each of its
    /// children's own expansions in turn. Siblings appear in the repository's
    /// natural order for their level.
    ///
    /// With `root_id` absent the walk starts from every parent-less node; with
    /// it present, from that node alone (a nonexistent root yields an empty
    /// sequence). `max_depth` counts parent-to-child hops from the starting
    /// level: `Some(0)` returns only the roots, or only the node itself.
    ///
    /// A node encountered twice means the parent links loop; the walk fails
    /// with [`HierarchyError::CorruptHierarchy`] instead of running forever.
    #[instrument(skip(self))]
    pub async fn descendants(
        &self,
        root_id: Option<&str>,
        max_depth: Option<u32>,
    ) -> Result<Vec<CatalogNode>, HierarchyError> {
        let level0 = match root_id {
            Some(id) => match self.repo.find_by_id(&id.to_string()).await? {
                Some(node) => vec![node],
                None => {
                    debug!(root_id = id, "descendants root missing");
                    return Ok(Vec::new());
                }
            },
            None => self.repo.query_by_spec(&Self::roots_spec()).await?,
        };

        let mut out = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        // Pushing each level's children in reverse keeps pop order equal to
        // natural order, giving preorder output from an explicit stack.
        let mut stack: Vec<(CatalogNode, u32)> =
            level0.into_iter().rev().map(|n| (n, 0)).collect();

        while let Some((node, depth)) = stack.pop() {
            if !seen.insert(node.id.clone()) {
                warn!(node_id = %node.id, "cycle detected during descendant walk");
                return Err(HierarchyError::CorruptHierarchy {
                    node_id: node.id,
                    hops: depth,
                });
            }

            let expand = max_depth.is_none_or(|limit| depth < limit);
            let node_id = node.id.clone();
            out.push(node);

            if expand {
                let children = self
                    .repo
                    .query_by_spec(&Self::children_spec(&node_id))
                    .await?;
                for child in children.into_iter().rev() {
                    stack.push((child, depth + 1));
                }
            }
        }

        debug!(count = out.len(), "descendants resolved");
        Ok(out)
    }

    /// Walks parent links upward from `node_id` to the root.
    ///
    /// The result is innermost-first: the node (or, with
    /// `include_self = false`, its immediate parent) first, the root last.
    /// A nonexistent starting node is [`HierarchyError::NotFound`]. A parent
    /// id that resolves to no row ends the walk at the last node found;
    /// exceeding the hop bound is [`HierarchyError::CorruptHierarchy`], since
    /// a cycle would otherwise loop forever.
    #[instrument(skip(self))]
    pub async fn ancestors(
        &self,
        node_id: &str,
        include_self: bool,
    ) -> Result<Vec<CatalogNode>, HierarchyError> {
        let start = self
            .repo
            .find_by_id(&node_id.to_string())
            .await?
            .ok_or_else(|| HierarchyError::NotFound(node_id.to_string()))?;

        let mut next_parent = start.parent_id.clone();
        let mut chain = vec![start];
        let mut hops = 0u32;

        while let Some(parent_id) = next_parent {
            hops += 1;
            if hops > self.max_ancestor_depth {
                warn!(node_id, hops, "ancestor walk exceeded depth bound");
                return Err(HierarchyError::CorruptHierarchy {
                    node_id: node_id.to_string(),
                    hops,
                });
            }

            match self.repo.find_by_id(&parent_id).await? {
                Some(parent) => {
                    next_parent = parent.parent_id.clone();
                    chain.push(parent);
                }
                // Dangling parent reference: tolerated, the walk just ends.
                None => break,
            }
        }

        if !include_self {
            chain.remove(0);
        }
        debug!(count = chain.len(), "ancestors resolved");
        Ok(chain)
    }
}
