use serde::{Deserialize, Serialize};

use super::Entity;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub price: f64,
    /// Listing date as unix seconds.
    pub date: i64,
    pub brand_id: String,
    /// The catalog node this product is filed under.
    pub catalog_id: String,
    /// Free-form specification attributes (e.g. "color" = "red").
    pub attrs: Vec<ProductAttr>,
}

/// A single specification attribute attached to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttr {
    pub key: String,
    pub value: String,
}

impl Product {
    /// Creates a new product with no specification attributes.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: f64,
        date: i64,
        brand_id: impl Into<String>,
        catalog_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            date,
            brand_id: brand_id.into(),
            catalog_id: catalog_id.into(),
            attrs: Vec::new(),
        }
    }

    /// Attaches a specification attribute, returning the product for chaining.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push(ProductAttr {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    /// Whether this product carries the given attribute key/value pair.
    pub fn has_attr(&self, key: &str, value: &str) -> bool {
        self.attrs.iter().any(|a| a.key == key && a.value == value)
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
