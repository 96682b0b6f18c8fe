//! Named predicate fragments for catalog queries.
//!
//! Each constructor captures its inputs and returns an opaque
//! [`Predicate`] ready for a [`PredicateCombiner`](crate::combine::PredicateCombiner).
//! Callers that have nothing to constrain simply build no fragment.

use std::collections::HashSet;

use crate::model::{CatalogNode, Product};
use crate::spec::Predicate;

/// Products filed under any of the given catalog nodes.
///
/// Typically fed the flattened subtree of one node, so a query against a
/// catalog matches products anywhere below it.
pub fn by_catalog_ids(ids: impl IntoIterator<Item = String>) -> Predicate<Product> {
    let ids: HashSet<String> = ids.into_iter().collect();
    Predicate::new(move |p: &Product| ids.contains(&p.catalog_id))
}

/// Products from any of the given brands.
pub fn by_brand_ids(ids: impl IntoIterator<Item = String>) -> Predicate<Product> {
    let ids: HashSet<String> = ids.into_iter().collect();
    Predicate::new(move |p: &Product| ids.contains(&p.brand_id))
}

/// Products priced inside the given bounds, either side open-ended.
///
/// `(None, None)` matches everything; build no fragment instead when both
/// bounds are absent.
pub fn by_price_range(from: Option<f64>, to: Option<f64>) -> Predicate<Product> {
    Predicate::new(move |p: &Product| {
        from.is_none_or(|lo| p.price >= lo) && to.is_none_or(|hi| p.price <= hi)
    })
}

/// Products carrying every one of the given attribute key/value pairs.
pub fn by_attrs(pairs: Vec<(String, String)>) -> Predicate<Product> {
    Predicate::new(move |p: &Product| {
        pairs.iter().all(|(key, value)| p.has_attr(key, value))
    })
}

/// Catalog nodes whose title contains the needle, case-insensitively.
pub fn title_contains(needle: &str) -> Predicate<CatalogNode> {
    let needle = needle.to_lowercase();
    Predicate::new(move |n: &CatalogNode| n.title.to_lowercase().contains(&needle))
}
