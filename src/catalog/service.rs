//! The catalog read service.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{filters, CatalogError};
use crate::combine::{BoolOp, PredicateCombiner};
use crate::hierarchy::HierarchyWalker;
use crate::model::{Brand, CatalogNode, Product};
use crate::repository::Repository;
use crate::spec::{Direction, OrderClause, Page, PageWindow, Predicate, Specification};

/// Page size applied when the boundary supplies none.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Optional product constraints as they arrive from a request.
///
/// Every field is independent; absent fields contribute no predicate fragment
/// at all, so an empty filter folds to "no constraint".
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub price_from: Option<f64>,
    pub price_to: Option<f64>,
    pub brand_ids: Vec<String>,
    /// Required specification attribute key/value pairs; a product must carry
    /// all of them.
    pub attrs: Vec<(String, String)>,
}

impl ProductFilter {
    fn has_price_bound(&self) -> bool {
        self.price_from.is_some() || self.price_to.is_some()
    }
}

/// Minimum and maximum product price over a catalog subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub from: f64,
    pub to: f64,
}

/// One attribute key with every distinct value seen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub name: String,
    pub values: Vec<String>,
}

/// Read-side catalog operations over product, catalog, and brand repositories.
///
/// Each operation scoped to a catalog resolves the node's whole subtree
/// through the [`HierarchyWalker`] first, so "products of a catalog" always
/// means the catalog and everything below it. A `catalog_id` of `None` means
/// no catalog constraint; a catalog id that resolves to nothing yields empty
/// results, not errors.
pub struct CatalogService<P, C, B> {
    products: Arc<P>,
    catalogs: Arc<C>,
    brands: Arc<B>,
    walker: HierarchyWalker<C>,
}

impl<P, C, B> CatalogService<P, C, B>
where
    P: Repository<Product>,
    C: Repository<CatalogNode>,
    B: Repository<Brand>,
{
    pub fn new(products: Arc<P>, catalogs: Arc<C>, brands: Arc<B>) -> Self {
        let walker = HierarchyWalker::new(Arc::clone(&catalogs));
        Self {
            products,
            catalogs,
            brands,
            walker,
        }
    }

    /// The walker this service traverses the catalog tree with.
    pub fn walker(&self) -> &HierarchyWalker<C> {
        &self.walker
    }

    /// Resolves the subtree a request is scoped to.
    ///
    /// `Ok(None)` means unscoped; `Ok(Some(ids))` constrains to those nodes,
    /// and an empty list means the scope matched nothing.
    async fn subtree_ids(&self, catalog_id: Option<&str>) -> Result<Option<Vec<String>>, CatalogError> {
        match catalog_id {
            None => Ok(None),
            Some(id) => {
                let nodes = self.walker.descendants(Some(id), None).await?;
                Ok(Some(nodes.into_iter().map(|n| n.id).collect()))
            }
        }
    }

    /// Folds subtree scope and request filters into one predicate, or `None`
    /// when nothing constrains the query.
    fn fold_filters(
        subtree: Option<&[String]>,
        filter: &ProductFilter,
    ) -> Option<Predicate<Product>> {
        let mut combiner = PredicateCombiner::new();
        combiner.add_opt(subtree.map(|ids| filters::by_catalog_ids(ids.iter().cloned())));
        combiner.add_opt(
            (!filter.brand_ids.is_empty())
                .then(|| filters::by_brand_ids(filter.brand_ids.iter().cloned())),
        );
        combiner.add_opt(
            filter
                .has_price_bound()
                .then(|| filters::by_price_range(filter.price_from, filter.price_to)),
        );
        combiner
            .add_opt((!filter.attrs.is_empty()).then(|| filters::by_attrs(filter.attrs.clone())));
        combiner.combine(BoolOp::And)
    }

    /// Lists every matching product, sorted, unpaginated.
    #[instrument(skip(self, filter, sorts))]
    pub async fn products(
        &self,
        catalog_id: Option<&str>,
        filter: &ProductFilter,
        sorts: Vec<OrderClause<Product>>,
    ) -> Result<Vec<Product>, CatalogError> {
        let subtree = self.subtree_ids(catalog_id).await?;
        if matches!(&subtree, Some(ids) if ids.is_empty()) {
            debug!("catalog scope matched no nodes");
            return Ok(Vec::new());
        }

        let spec = Specification::new()
            .filter_opt(Self::fold_filters(subtree.as_deref(), filter))
            .order_by_all(sorts);
        Ok(self.products.query_by_spec(&spec).await?)
    }

    /// Lists one page of matching products plus pagination metadata.
    ///
    /// The total is computed against the predicate only, so it is identical
    /// for every page of the same query. When the fold yields no constraint
    /// the total short-cuts to `count_all`.
    #[instrument(skip(self, filter, sorts))]
    pub async fn products_page(
        &self,
        catalog_id: Option<&str>,
        filter: &ProductFilter,
        sorts: Vec<OrderClause<Product>>,
        page: u32,
        page_size: usize,
    ) -> Result<Page<Product>, CatalogError> {
        let window = PageWindow::from_page(page, page_size)?;

        let subtree = self.subtree_ids(catalog_id).await?;
        if matches!(&subtree, Some(ids) if ids.is_empty()) {
            debug!("catalog scope matched no nodes");
            return Ok(Page::empty(page));
        }

        let folded = Self::fold_filters(subtree.as_deref(), filter);
        let total = match &folded {
            None => self.products.count_all().await?,
            Some(p) => {
                let count_spec = Specification::new().filter(p.clone());
                self.products.count_by_spec(&count_spec).await?
            }
        };

        let spec = Specification::new()
            .filter_opt(folded)
            .order_by_all(sorts)
            .page(window);
        let items = self.products.query_by_spec(&spec).await?;

        debug!(total, returned = items.len(), page, "product page resolved");
        Ok(Page::new(items, total as u64, page, page_size))
    }

    /// Distinct brands with at least one product in the subtree, in product
    /// natural order.
    #[instrument(skip(self))]
    pub async fn brands(&self, catalog_id: Option<&str>) -> Result<Vec<Brand>, CatalogError> {
        let subtree = self.subtree_ids(catalog_id).await?;
        if matches!(&subtree, Some(ids) if ids.is_empty()) {
            return Ok(Vec::new());
        }

        let spec = Specification::new().filter_opt(
            subtree
                .as_deref()
                .map(|ids| filters::by_catalog_ids(ids.iter().cloned())),
        );
        let products = self.products.query_by_spec(&spec).await?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut brands = Vec::new();
        for product in products {
            if seen.insert(product.brand_id.clone()) {
                if let Some(brand) = self.brands.find_by_id(&product.brand_id).await? {
                    brands.push(brand);
                }
            }
        }
        Ok(brands)
    }

    /// Minimum and maximum product price in the subtree; `None` when the
    /// subtree has no products.
    #[instrument(skip(self))]
    pub async fn price_range(
        &self,
        catalog_id: Option<&str>,
    ) -> Result<Option<PriceRange>, CatalogError> {
        let subtree = self.subtree_ids(catalog_id).await?;
        if matches!(&subtree, Some(ids) if ids.is_empty()) {
            return Ok(None);
        }

        let spec = Specification::new().filter_opt(
            subtree
                .as_deref()
                .map(|ids| filters::by_catalog_ids(ids.iter().cloned())),
        );
        let products = self.products.query_by_spec(&spec).await?;

        let mut range: Option<PriceRange> = None;
        for product in &products {
            range = Some(match range {
                None => PriceRange {
                    from: product.price,
                    to: product.price,
                },
                Some(r) => PriceRange {
                    from: r.from.min(product.price),
                    to: r.to.max(product.price),
                },
            });
        }
        Ok(range)
    }

    /// Attribute keys used in the subtree, each with its distinct values in
    /// first-seen order.
    #[instrument(skip(self))]
    pub async fn attributes(
        &self,
        catalog_id: Option<&str>,
    ) -> Result<Vec<AttributeGroup>, CatalogError> {
        let subtree = self.subtree_ids(catalog_id).await?;
        if matches!(&subtree, Some(ids) if ids.is_empty()) {
            return Ok(Vec::new());
        }

        let spec = Specification::new().filter_opt(
            subtree
                .as_deref()
                .map(|ids| filters::by_catalog_ids(ids.iter().cloned())),
        );
        let products = self.products.query_by_spec(&spec).await?;

        let mut groups: Vec<AttributeGroup> = Vec::new();
        for product in &products {
            for attr in &product.attrs {
                match groups.iter_mut().find(|g| g.name == attr.key) {
                    Some(group) => {
                        if !group.values.contains(&attr.value) {
                            group.values.push(attr.value.clone());
                        }
                    }
                    None => groups.push(AttributeGroup {
                        name: attr.key.clone(),
                        values: vec![attr.value.clone()],
                    }),
                }
            }
        }
        Ok(groups)
    }

    /// Whether the subtree contains at least one product.
    #[instrument(skip(self))]
    pub async fn has_products(&self, catalog_id: Option<&str>) -> Result<bool, CatalogError> {
        let subtree = self.subtree_ids(catalog_id).await?;
        if matches!(&subtree, Some(ids) if ids.is_empty()) {
            return Ok(false);
        }

        let spec = Specification::new().filter_opt(
            subtree
                .as_deref()
                .map(|ids| filters::by_catalog_ids(ids.iter().cloned())),
        );
        Ok(self.products.find_first(&spec).await?.is_some())
    }

    /// One page of catalog nodes with optional title search and title sort.
    ///
    /// The total follows the search predicate only; with no search it
    /// short-cuts to `count_all`.
    #[instrument(skip(self))]
    pub async fn catalog_page(
        &self,
        search: Option<&str>,
        sort_title: Option<Direction>,
        page: u32,
        page_size: usize,
    ) -> Result<Page<CatalogNode>, CatalogError> {
        let window = PageWindow::from_page(page, page_size)?;

        let search_fragment = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(filters::title_contains);

        let total = match &search_fragment {
            None => self.catalogs.count_all().await?,
            Some(p) => {
                let count_spec = Specification::new().filter(p.clone());
                self.catalogs.count_by_spec(&count_spec).await?
            }
        };

        let mut spec = Specification::new().filter_opt(search_fragment).page(window);
        if let Some(direction) = sort_title {
            spec = spec.order_by(OrderClause::by(
                |n: &CatalogNode| n.title.to_lowercase(),
                direction,
            ));
        }

        let items = self.catalogs.query_by_spec(&spec).await?;
        Ok(Page::new(items, total as u64, page, page_size))
    }

    /// The top-level catalog nodes, unpaginated.
    pub async fn root_catalogs(&self) -> Result<Vec<CatalogNode>, CatalogError> {
        Ok(self.walker.descendants(None, Some(0)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn service() -> CatalogService<
        MemoryRepository<Product>,
        MemoryRepository<CatalogNode>,
        MemoryRepository<Brand>,
    > {
        let catalogs = Arc::new(MemoryRepository::with_rows([
            CatalogNode::root("c_root", "Everything"),
            CatalogNode::child("c_tools", "c_root", "Tools"),
        ]));
        let brands = Arc::new(MemoryRepository::with_rows([
            Brand::new("acme", "Acme"),
            Brand::new("globex", "Globex"),
        ]));
        let products = Arc::new(MemoryRepository::with_rows([
            Product::new("p1", "Hammer", 12.0, 10, "acme", "c_tools"),
            Product::new("p2", "Vase", 30.0, 20, "globex", "c_root"),
        ]));
        CatalogService::new(products, catalogs, brands)
    }

    #[tokio::test]
    async fn unscoped_unfiltered_query_returns_everything() {
        let svc = service();
        let all = svc
            .products(None, &ProductFilter::default(), Vec::new())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn scope_covers_the_whole_subtree() {
        let svc = service();
        let under_root = svc
            .products(Some("c_root"), &ProductFilter::default(), Vec::new())
            .await
            .unwrap();
        assert_eq!(under_root.len(), 2);

        let under_tools = svc
            .products(Some("c_tools"), &ProductFilter::default(), Vec::new())
            .await
            .unwrap();
        assert_eq!(under_tools.len(), 1);
        assert_eq!(under_tools[0].id, "p1");
    }

    #[tokio::test]
    async fn unknown_catalog_scope_is_empty_not_an_error() {
        let svc = service();
        let none = svc
            .products(Some("ghost"), &ProductFilter::default(), Vec::new())
            .await
            .unwrap();
        assert!(none.is_empty());

        assert!(!svc.has_products(Some("ghost")).await.unwrap());
        assert!(svc.price_range(Some("ghost")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn invalid_page_number_is_rejected_up_front() {
        let svc = service();
        let err = svc
            .products_page(None, &ProductFilter::default(), Vec::new(), 0, 10)
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
    }
}
