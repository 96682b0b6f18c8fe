//! Persistent entity types and the [`Entity`] contract repositories require.
//!
//! Entities here are plain data: they are owned by whatever storage engine backs
//! a [`Repository`](crate::repository::Repository) and are read-only from this
//! crate's perspective. Writes happen through external collaborators.

mod brand;
mod catalog;
mod product;

pub use brand::Brand;
pub use catalog::CatalogNode;
pub use product::{Product, ProductAttr};

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for any entity type a repository can manage.
///
/// The associated `Id` carries the same bounds the rest of the crate relies on:
/// hashing for index lookups, `Display` for log fields, `Clone`/`Send`/`Sync`
/// so queries can cross task boundaries.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Borrow this entity's identifier.
    fn id(&self) -> &Self::Id;
}
