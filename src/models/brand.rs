//! Brand catalog record
//!
//! Mirrors the upstream dataset shape. Everything except `id`, `products`,
//! `consolidated_products` and `stores` is descriptive metadata the lookup
//! core carries verbatim and never interprets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A merchant brand offering redeemable products.
///
/// Records are immutable once the dataset is loaded. A product id may appear
/// under several brands' `products`/`consolidated_products` lists; brand ids
/// are unique across the dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub id: Uuid,
    // Timestamps are kept as opaque strings: the dataset uses a
    // non-RFC3339 format and the core never interprets them.
    pub created_at: String,
    pub updated_at: String,
    pub name: String,
    pub internal_name: Option<String>,
    pub logo: Option<String>,
    pub colour: Option<String>,
    pub success: String,
    pub share: String,
    pub weight: i64,
    pub deleted_at: Option<String>,
    pub expiry: i64,
    pub website: Option<String>,
    pub integration_id: i64,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub vat: i64,
    pub faq: Option<String>,
    pub description: Option<String>,
    pub redeem: Option<String>,
    pub location_text: String,
    pub map_pin_url: Option<String>,
    pub consolidated: i64,
    pub default_location_description_markdown: Option<String>,
    /// Product ids directly owned by this brand
    pub products: Vec<Uuid>,
    /// Product ids linked through a secondary grouping; equivalent to
    /// direct ownership for lookup purposes
    pub consolidated_products: Vec<Uuid>,
    /// Location identifiers where this brand's products are redeemable
    pub stores: Vec<String>,
    pub logo_url: String,
}
