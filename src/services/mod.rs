//! Service layer
//!
//! Orchestrates cache and repository per lookup, classifies outcomes, and
//! wraps every result in the uniform [`ServiceResponse`] envelope.

pub mod brand;
pub mod response;

pub use brand::{BrandService, CachedLookup};
pub use response::ServiceResponse;
