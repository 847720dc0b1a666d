//! Repository layer for brand catalog queries
//!
//! Deterministic, side-effect-free read queries over the dataset store,
//! behind a trait so the lookup service can be tested against fakes with
//! invocation counting.

pub mod brand;

pub use brand::{BrandRepository, InMemoryBrandRepository};
