//! Brand repository
//!
//! All queries are linear, unindexed scans. That is deliberate: the dataset
//! is bounded and immutable, and a secondary index would be more machinery
//! than the scan it replaces. The reverse lookup is O(number of brands) with
//! result size up to O(brands x stores-per-brand); this is the documented
//! scaling limit of the catalog.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::datastore::BrandDataset;
use crate::errors::RepositoryResult;
use crate::models::Brand;

/// Read-only query operations over the dataset store.
///
/// `Ok(None)` signals a legitimately empty result (unknown id, brand with no
/// stores); `Err` is reserved for the store being unreachable. Aggregating
/// queries return raw, undeduplicated lists — deduplication is the lookup
/// service's job, so cached entries hold exactly what the repository
/// produced.
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Full brand collection, dataset order preserved.
    async fn find_all(&self) -> RepositoryResult<Vec<Brand>>;

    /// The matching brand, if any.
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Brand>>;

    /// Concatenation of the brand's `products` and `consolidated_products`.
    /// `None` if the brand is missing or both lists are empty.
    async fn find_products_by_brand(&self, id: Uuid) -> RepositoryResult<Option<Vec<Uuid>>>;

    /// The brand's stores, `None` if the brand is missing or has none.
    async fn find_stores_by_brand(&self, id: Uuid) -> RepositoryResult<Option<Vec<String>>>;

    /// Stores of every brand whose `products` or `consolidated_products`
    /// contains the given product id. `None` if no brand matches.
    async fn find_stores_by_product(
        &self,
        product_id: Uuid,
    ) -> RepositoryResult<Option<Vec<String>>>;
}

/// Repository over the in-memory dataset store.
#[derive(Debug, Clone)]
pub struct InMemoryBrandRepository {
    dataset: Arc<BrandDataset>,
}

impl InMemoryBrandRepository {
    pub fn new(dataset: Arc<BrandDataset>) -> Self {
        Self { dataset }
    }

    fn lookup(&self, id: Uuid) -> Option<&Brand> {
        self.dataset.brands().iter().find(|brand| brand.id == id)
    }
}

#[async_trait]
impl BrandRepository for InMemoryBrandRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Brand>> {
        Ok(self.dataset.brands().to_vec())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Brand>> {
        Ok(self.lookup(id).cloned())
    }

    async fn find_products_by_brand(&self, id: Uuid) -> RepositoryResult<Option<Vec<Uuid>>> {
        let products = self.lookup(id).map(|brand| {
            let mut products = brand.products.clone();
            products.extend(brand.consolidated_products.iter().copied());
            products
        });

        Ok(products.filter(|p| !p.is_empty()))
    }

    async fn find_stores_by_brand(&self, id: Uuid) -> RepositoryResult<Option<Vec<String>>> {
        Ok(self
            .lookup(id)
            .filter(|brand| !brand.stores.is_empty())
            .map(|brand| brand.stores.clone()))
    }

    async fn find_stores_by_product(
        &self,
        product_id: Uuid,
    ) -> RepositoryResult<Option<Vec<String>>> {
        // No early exit: every matching brand contributes its stores.
        let mut stores = Vec::new();
        for brand in self.dataset.brands() {
            if brand.products.contains(&product_id)
                || brand.consolidated_products.contains(&product_id)
            {
                stores.extend(brand.stores.iter().cloned());
            }
        }

        Ok(if stores.is_empty() { None } else { Some(stores) })
    }
}
