//! API route tests
//!
//! Exercises the envelope over HTTP against the real router wired to an
//! in-memory dataset.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use brand_catalog::cache::TtlCache;
use brand_catalog::datastore::BrandDataset;
use brand_catalog::repositories::{BrandRepository, InMemoryBrandRepository};
use brand_catalog::services::BrandService;
use brand_catalog::web::{router, AppState};

const VUE: &str = "5a4e6d14-53d4-4583-bd6b-49f81b021d24";
const CROSSTOWN: &str = "a715b837-f4fc-48ba-ba0a-7f53b6dc59c5";
const SHARED_PRODUCT: &str = "26f7a82a-30a8-44e4-93cb-499a256d0ce9";

fn test_dataset() -> &'static str {
    r#"{
        "data": [
            {
                "id": "5a4e6d14-53d4-4583-bd6b-49f81b021d24",
                "name": "Vue Cinemas",
                "products": ["5a3fe6f7-7796-44ca-84fe-70d4f751527d"],
                "consolidated_products": [],
                "stores": [
                    "15af2cdc-f352-11e8-80cd-02e611b48058",
                    "15af31b3-f352-11e8-80cd-02e611b48058"
                ]
            },
            {
                "id": "a715b837-f4fc-48ba-ba0a-7f53b6dc59c5",
                "name": "Crosstown Doughnuts",
                "products": [
                    "f5c72f41-972d-42b6-9ac5-51bad2afd01f",
                    "57186a73-7857-4684-bf82-b2bc7b8a1040"
                ],
                "consolidated_products": ["26f7a82a-30a8-44e4-93cb-499a256d0ce9"],
                "stores": ["1236a970-8e75-4c35-8aa6-1e37e204f334"]
            },
            {
                "id": "61c2e927-bd37-4f1c-a7eb-a7b7d4310928",
                "name": "Grind",
                "products": ["26f7a82a-30a8-44e4-93cb-499a256d0ce9"],
                "consolidated_products": [],
                "stores": [
                    "7e0ec05b-4e1a-4b27-9a84-3d16fa0ca0d5",
                    "d95937bc-1f3f-426d-a8ae-57efa0e4b838"
                ]
            }
        ]
    }"#
}

fn test_app() -> Router {
    let dataset = Arc::new(BrandDataset::from_json_str(test_dataset()).unwrap());
    let repository: Arc<dyn BrandRepository> =
        Arc::new(InMemoryBrandRepository::new(dataset.clone()));
    let brand_service = Arc::new(BrandService::new(
        repository,
        TtlCache::new(),
        Duration::from_secs(300),
    ));

    router(AppState {
        brand_service,
        dataset,
    })
}

async fn send_request(app: &Router, method: Method, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json: Value = if body_bytes.is_empty() {
        json!({})
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(json!({}))
    };

    (status, json)
}

#[tokio::test]
async fn health_endpoint_reports_dataset_size() {
    let app = test_app();

    let (status, body) = send_request(&app, Method::GET, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["brands"], 3);
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn list_brands_returns_success_envelope() {
    let app = test_app();

    let (status, body) = send_request(&app, Method::GET, "/api/v1/brands").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Brands found");
    assert_eq!(body["status_code"], 200);

    let brands = body["payload"].as_array().unwrap();
    assert_eq!(brands.len(), 3);
    assert_eq!(brands[0]["name"], "Vue Cinemas");
}

#[tokio::test]
async fn get_brand_by_id() {
    let app = test_app();

    let uri = format!("/api/v1/brands/{}", VUE);
    let (status, body) = send_request(&app, Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Brand found");
    assert_eq!(body["payload"]["id"], VUE);
    assert_eq!(body["payload"]["name"], "Vue Cinemas");
}

#[tokio::test]
async fn unknown_brand_id_yields_not_found_envelope() {
    let app = test_app();

    let (status, body) = send_request(
        &app,
        Method::GET,
        "/api/v1/brands/00000000-0000-0000-0000-000000000000",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Brand not found");
    assert_eq!(body["payload"], Value::Null);
}

#[tokio::test]
async fn malformed_brand_id_is_rejected_before_the_core() {
    let app = test_app();

    let (status, _body) = send_request(&app, Method::GET, "/api/v1/brands/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn products_by_brand_unions_direct_and_consolidated() {
    let app = test_app();

    let uri = format!("/api/v1/brands/{}/products", CROSSTOWN);
    let (status, body) = send_request(&app, Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Products found");

    let products = body["payload"].as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.contains(&json!(SHARED_PRODUCT)));
}

#[tokio::test]
async fn stores_by_brand() {
    let app = test_app();

    let uri = format!("/api/v1/brands/{}/stores", VUE);
    let (status, body) = send_request(&app, Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Stores found");
    assert_eq!(body["payload"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn stores_by_product_aggregates_across_brands() {
    let app = test_app();

    // Shared product: Crosstown carries it as consolidated, Grind directly.
    let uri = format!("/api/v1/products/{}/stores", SHARED_PRODUCT);
    let (status, body) = send_request(&app, Method::GET, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let mut stores: Vec<String> = body["payload"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    stores.sort();
    assert_eq!(
        stores,
        vec![
            "1236a970-8e75-4c35-8aa6-1e37e204f334",
            "7e0ec05b-4e1a-4b27-9a84-3d16fa0ca0d5",
            "d95937bc-1f3f-426d-a8ae-57efa0e4b838"
        ]
    );
}

#[tokio::test]
async fn stores_by_unknown_product_is_not_found() {
    let app = test_app();

    let (status, body) = send_request(
        &app,
        Method::GET,
        "/api/v1/products/11111111-1111-1111-1111-111111111111/stores",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Stores not found");
}
