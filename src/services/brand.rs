//! Brand lookup service
//!
//! Cache-first orchestration of the five catalog lookups. Each query derives
//! a deterministic cache key, consults the cache, falls back to a repository
//! scan on a miss, and caches non-empty results for the configured TTL.
//!
//! Cached entries hold the raw repository output; the list-aggregation
//! lookups deduplicate on every read, cached or fresh, so both paths are
//! observably identical. Concurrent misses for the same key each scan and
//! redundantly overwrite the same entry — harmless, since repository output
//! for a fixed key never changes.
//!
//! No operation raises past this boundary: repository failures are logged
//! with operation and parameter, then converted to a generic internal-error
//! envelope.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error};
use uuid::Uuid;

use crate::cache::TtlCache;
use crate::models::Brand;
use crate::repositories::BrandRepository;
use crate::services::ServiceResponse;

/// Raw repository output, as stored in the cache.
#[derive(Debug, Clone)]
pub enum CachedLookup {
    Brands(Vec<Brand>),
    Brand(Box<Brand>),
    Products(Vec<Uuid>),
    Stores(Vec<String>),
}

/// Lookup orchestration over an injected repository and cache.
///
/// Dependencies are constructed once at process start and passed in; tests
/// substitute a counting fake through the same trait.
#[derive(Clone)]
pub struct BrandService {
    repository: Arc<dyn BrandRepository>,
    cache: TtlCache<CachedLookup>,
    ttl: Duration,
}

impl BrandService {
    pub fn new(
        repository: Arc<dyn BrandRepository>,
        cache: TtlCache<CachedLookup>,
        ttl: Duration,
    ) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }

    /// All brands in the catalog, dataset order.
    pub async fn find_all(&self) -> ServiceResponse<Vec<Brand>> {
        const KEY: &str = "brands:all";

        if let Some(CachedLookup::Brands(brands)) = self.cache.get(KEY).await {
            debug!("Cache hit for {}", KEY);
            return ServiceResponse::success("Brands found", brands);
        }

        match self.repository.find_all().await {
            Ok(brands) if !brands.is_empty() => {
                self.cache
                    .insert(KEY, CachedLookup::Brands(brands.clone()), self.ttl)
                    .await;
                ServiceResponse::success("Brands found", brands)
            }
            Ok(_) => ServiceResponse::not_found("No Brands found"),
            Err(err) => {
                error!(operation = "find_all", error = %err, "Repository failure");
                ServiceResponse::internal_error("An error occurred while retrieving brands.")
            }
        }
    }

    /// A single brand by id.
    pub async fn find_by_id(&self, id: Uuid) -> ServiceResponse<Brand> {
        let key = format!("brands:{id}");

        if let Some(CachedLookup::Brand(brand)) = self.cache.get(&key).await {
            debug!("Cache hit for {}", key);
            return ServiceResponse::success("Brand found", *brand);
        }

        match self.repository.find_by_id(id).await {
            Ok(Some(brand)) => {
                self.cache
                    .insert(key, CachedLookup::Brand(Box::new(brand.clone())), self.ttl)
                    .await;
                ServiceResponse::success("Brand found", brand)
            }
            Ok(None) => ServiceResponse::not_found("Brand not found"),
            Err(err) => {
                error!(operation = "find_by_id", brand_id = %id, error = %err, "Repository failure");
                ServiceResponse::internal_error("An error occurred while finding brand.")
            }
        }
    }

    /// Deduplicated union of a brand's direct and consolidated products.
    pub async fn find_products_by_brand(&self, id: Uuid) -> ServiceResponse<Vec<Uuid>> {
        let key = format!("brands:{id}:products");

        if let Some(CachedLookup::Products(raw)) = self.cache.get(&key).await {
            debug!("Cache hit for {}", key);
            return ServiceResponse::success("Products found", dedupe(raw));
        }

        match self.repository.find_products_by_brand(id).await {
            Ok(Some(raw)) => {
                self.cache
                    .insert(key, CachedLookup::Products(raw.clone()), self.ttl)
                    .await;
                ServiceResponse::success("Products found", dedupe(raw))
            }
            Ok(None) => ServiceResponse::not_found("Products not found"),
            Err(err) => {
                error!(operation = "find_products_by_brand", brand_id = %id, error = %err, "Repository failure");
                ServiceResponse::internal_error("An error occurred while finding products.")
            }
        }
    }

    /// Deduplicated stores of a single brand.
    pub async fn find_stores_by_brand(&self, id: Uuid) -> ServiceResponse<Vec<String>> {
        let key = format!("brands:{id}:stores");

        if let Some(CachedLookup::Stores(raw)) = self.cache.get(&key).await {
            debug!("Cache hit for {}", key);
            return ServiceResponse::success("Stores found", dedupe(raw));
        }

        match self.repository.find_stores_by_brand(id).await {
            Ok(Some(raw)) => {
                self.cache
                    .insert(key, CachedLookup::Stores(raw.clone()), self.ttl)
                    .await;
                ServiceResponse::success("Stores found", dedupe(raw))
            }
            Ok(None) => ServiceResponse::not_found("Stores not found"),
            Err(err) => {
                error!(operation = "find_stores_by_brand", brand_id = %id, error = %err, "Repository failure");
                ServiceResponse::internal_error("An error occurred while finding stores.")
            }
        }
    }

    /// Deduplicated stores across every brand carrying the given product.
    pub async fn find_stores_by_product(&self, product_id: Uuid) -> ServiceResponse<Vec<String>> {
        let key = format!("products:{product_id}:stores");

        if let Some(CachedLookup::Stores(raw)) = self.cache.get(&key).await {
            debug!("Cache hit for {}", key);
            return ServiceResponse::success("Stores found", dedupe(raw));
        }

        match self.repository.find_stores_by_product(product_id).await {
            Ok(Some(raw)) => {
                self.cache
                    .insert(key, CachedLookup::Stores(raw.clone()), self.ttl)
                    .await;
                ServiceResponse::success("Stores found", dedupe(raw))
            }
            Ok(None) => ServiceResponse::not_found("Stores not found"),
            Err(err) => {
                error!(operation = "find_stores_by_product", product_id = %product_id, error = %err, "Repository failure");
                ServiceResponse::internal_error("An error occurred while finding stores.")
            }
        }
    }
}

/// Drop duplicates, keeping the first occurrence of each value.
fn dedupe<T: Eq + Hash + Clone>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
