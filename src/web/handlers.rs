//! HTTP request handlers
//!
//! Thin by design: each handler extracts its path parameter and delegates to
//! the service layer, which owns outcome classification and the envelope.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::web::AppState;

/// Liveness endpoint reporting dataset size.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "brands": state.dataset.len(),
        "timestamp": chrono::Utc::now(),
    }))
}

pub async fn list_brands(State(state): State<AppState>) -> impl IntoResponse {
    state.brand_service.find_all().await
}

pub async fn get_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    state.brand_service.find_by_id(id).await
}

pub async fn get_products_by_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    state.brand_service.find_products_by_brand(id).await
}

pub async fn get_stores_by_brand(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    state.brand_service.find_stores_by_brand(id).await
}

pub async fn get_stores_by_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    state.brand_service.find_stores_by_product(id).await
}
