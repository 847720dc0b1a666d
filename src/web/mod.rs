//! Web layer
//!
//! Thin HTTP glue over the service layer: handlers delegate straight to
//! [`BrandService`](crate::services::BrandService) and return its envelope.
//! Path parameters are extracted as `Uuid`, so malformed identifiers are
//! rejected at this boundary before the core is invoked.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::WebConfig;
use crate::datastore::BrandDataset;
use crate::errors::{AppError, AppResult};
use crate::services::BrandService;

pub mod handlers;
pub mod responses;

/// Shared handler state, wired once at startup.
#[derive(Clone)]
pub struct AppState {
    pub brand_service: Arc<BrandService>,
    pub dataset: Arc<BrandDataset>,
}

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/brands", get(handlers::list_brands))
        .route("/brands/{id}", get(handlers::get_brand))
        .route("/brands/{id}/products", get(handlers::get_products_by_brand))
        .route("/brands/{id}/stores", get(handlers::get_stores_by_brand))
        .route("/products/{id}/stores", get(handlers::get_stores_by_product))
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: &WebConfig, state: AppState) -> AppResult<Self> {
        let addr: SocketAddr = format!("{}:{}", config.host, config.port)
            .parse()
            .map_err(|e| AppError::Configuration {
                message: format!("invalid listen address: {}", e),
            })?;

        Ok(Self {
            app: router(state),
            addr,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Serve until ctrl-c.
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        info!("Web server listening on {}", self.addr);

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
