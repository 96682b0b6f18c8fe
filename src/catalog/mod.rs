//! Catalog read paths: named filter fragments, sort parsing, and the service
//! that stitches walker, combiner, and repositories together.
//!
//! This is the layer an HTTP boundary talks to. It turns request-shaped input
//! (optional catalog id, optional price range, brand id lists, attribute
//! pairs, sort parameters, 1-based page numbers) into specifications and paged
//! results, without knowing anything about transport or storage.

mod error;
pub mod filters;
mod service;
mod sort;

pub use error::CatalogError;
pub use service::{
    AttributeGroup, CatalogService, PriceRange, ProductFilter, DEFAULT_PAGE_SIZE,
};
pub use sort::{parse_sorts, ProductSortField};
