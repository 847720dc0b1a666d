//! Data models for the brand catalog

pub mod brand;

pub use brand::Brand;
