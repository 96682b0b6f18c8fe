//! Hierarchy walks through the service-level wiring.

use std::sync::Arc;

use catalog_core::hierarchy::{HierarchyError, HierarchyWalker};
use catalog_core::model::CatalogNode;
use catalog_core::repository::MemoryRepository;

/// root -> a -> b -> c, plus a sibling subtree root -> d.
fn deep_tree() -> Arc<MemoryRepository<CatalogNode>> {
    Arc::new(MemoryRepository::with_rows([
        CatalogNode::root("root", "Root"),
        CatalogNode::child("a", "root", "A"),
        CatalogNode::child("b", "a", "B"),
        CatalogNode::child("c", "b", "C"),
        CatalogNode::child("d", "root", "D"),
    ]))
}

fn ids(nodes: &[CatalogNode]) -> Vec<&str> {
    nodes.iter().map(|n| n.id.as_str()).collect()
}

#[tokio::test]
async fn full_subtree_is_preorder_with_siblings_in_natural_order() {
    let walker = HierarchyWalker::new(deep_tree());
    let nodes = walker.descendants(Some("root"), None).await.unwrap();
    assert_eq!(ids(&nodes), vec!["root", "a", "b", "c", "d"]);
}

#[tokio::test]
async fn depth_counts_hops_from_the_starting_level() {
    let walker = HierarchyWalker::new(deep_tree());

    assert_eq!(
        ids(&walker.descendants(Some("root"), Some(1)).await.unwrap()),
        vec!["root", "a", "d"]
    );
    assert_eq!(
        ids(&walker.descendants(Some("root"), Some(2)).await.unwrap()),
        vec!["root", "a", "b", "d"]
    );
    // From a deeper start the same limit reaches different absolute levels.
    assert_eq!(
        ids(&walker.descendants(Some("a"), Some(1)).await.unwrap()),
        vec!["a", "b"]
    );
}

#[tokio::test]
async fn breadcrumb_chain_is_innermost_first() {
    let walker = HierarchyWalker::new(deep_tree());

    let crumbs = walker.ancestors("c", true).await.unwrap();
    assert_eq!(ids(&crumbs), vec!["c", "b", "a", "root"]);

    let parents_only = walker.ancestors("c", false).await.unwrap();
    assert_eq!(ids(&parents_only), vec!["b", "a", "root"]);

    // A root has no parents.
    assert!(walker.ancestors("root", false).await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_start_node_is_not_found() {
    let walker = HierarchyWalker::new(deep_tree());
    let err = walker.ancestors("ghost", true).await.unwrap_err();
    assert_eq!(err, HierarchyError::NotFound("ghost".to_string()));
}

#[tokio::test]
async fn self_parenting_node_is_reported_corrupt() {
    let repo = Arc::new(MemoryRepository::with_rows([CatalogNode::child(
        "loop", "loop", "Loop",
    )]));
    let walker = HierarchyWalker::new(repo).with_max_ancestor_depth(4);

    assert!(matches!(
        walker.ancestors("loop", true).await.unwrap_err(),
        HierarchyError::CorruptHierarchy { .. }
    ));
    assert!(matches!(
        walker.descendants(Some("loop"), None).await.unwrap_err(),
        HierarchyError::CorruptHierarchy { .. }
    ));
}

#[tokio::test]
async fn three_node_cycle_is_reported_corrupt() {
    let repo = Arc::new(MemoryRepository::with_rows([
        CatalogNode::child("x", "z", "X"),
        CatalogNode::child("y", "x", "Y"),
        CatalogNode::child("z", "y", "Z"),
    ]));
    let walker = HierarchyWalker::new(repo).with_max_ancestor_depth(8);

    let err = walker.ancestors("y", true).await.unwrap_err();
    assert!(matches!(err, HierarchyError::CorruptHierarchy { .. }));
}

#[tokio::test]
async fn walks_over_two_roots_keep_subtrees_contiguous() {
    let repo = deep_tree();
    repo.insert(CatalogNode::root("root2", "Second"));
    repo.insert(CatalogNode::child("e", "root2", "E"));
    let walker = HierarchyWalker::new(repo);

    let all = walker.descendants(None, None).await.unwrap();
    assert_eq!(ids(&all), vec!["root", "a", "b", "c", "d", "root2", "e"]);
}
