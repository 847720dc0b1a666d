//! Immutable dataset store
//!
//! The brand collection is loaded exactly once, synchronously, before the
//! service accepts traffic, and is never mutated or reloaded for the life of
//! the process. Readers share it by reference (`Arc<BrandDataset>`).

use std::path::Path;

use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::models::Brand;

/// Document shape of the dataset file.
#[derive(Debug, Deserialize)]
struct BrandDocument {
    data: Vec<Brand>,
}

/// The fully-loaded, immutable brand collection.
#[derive(Debug)]
pub struct BrandDataset {
    brands: Vec<Brand>,
}

impl BrandDataset {
    /// Parse a dataset from its JSON document form (`{ "data": [...] }`).
    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let document: BrandDocument =
            serde_json::from_str(raw).map_err(|e| AppError::Dataset {
                message: format!("failed to parse dataset: {}", e),
            })?;
        Ok(Self {
            brands: document.data,
        })
    }

    /// Read and parse the dataset file. Fatal at startup if it fails.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| AppError::Dataset {
            message: format!("failed to read {:?}: {}", path, e),
        })?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::info!("Dataset loaded: {} brands from {:?}", dataset.len(), path);
        Ok(dataset)
    }

    /// Build a dataset directly from records (used by tests and fakes).
    pub fn from_brands(brands: Vec<Brand>) -> Self {
        Self { brands }
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dataset_document() {
        let raw = r#"{
            "data": [
                {
                    "id": "5a4e6d14-53d4-4583-bd6b-49f81b021d24",
                    "name": "Vue Cinemas",
                    "products": ["5a3fe6f7-7796-44ca-84fe-70d4f751527d"],
                    "consolidated_products": [],
                    "stores": ["15af2cdc-f352-11e8-80cd-02e611b48058"]
                }
            ]
        }"#;

        let dataset = BrandDataset::from_json_str(raw).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.brands()[0].name, "Vue Cinemas");
        assert_eq!(dataset.brands()[0].products.len(), 1);
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(BrandDataset::from_json_str("{\"data\": 42}").is_err());
        assert!(BrandDataset::from_json_str("not json").is_err());
    }
}
