//! Application configuration
//!
//! Loaded from a TOML file at startup; every section has defaults so the
//! service runs without a config file. CLI flags override individual fields
//! after loading (see `main.rs`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: WebConfig,
    pub dataset: DatasetConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the brand dataset file, read once at startup
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// How long a cached lookup result stays valid
    pub ttl_seconds: u64,
    /// How often the background sweep reclaims expired entries.
    /// Independent of (and normally coarser than) the TTL.
    pub sweep_interval_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web: WebConfig::default(),
            dataset: DatasetConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/brands.json"),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 300,
            sweep_interval_seconds: 60,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| AppError::Configuration {
            message: format!("failed to read {:?}: {}", path, e),
        })?;
        toml::from_str(&contents).map_err(|e| AppError::Configuration {
            message: format!("failed to parse {:?}: {}", path, e),
        })
    }
}
