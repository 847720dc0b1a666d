//! Brand catalog lookup service
//!
//! Answers read-only queries over a catalog of merchant brands, their
//! redeemable products, and the stores where those products can be
//! redeemed. The dataset is loaded once at startup and never mutated;
//! lookups are memoized in a TTL-bounded cache to avoid repeated
//! full-dataset scans.

pub mod cache;
pub mod config;
pub mod datastore;
pub mod errors;
pub mod models;
pub mod repositories;
pub mod services;
pub mod web;
