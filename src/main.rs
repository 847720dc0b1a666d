use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brand_catalog::{
    cache::TtlCache,
    config::Config,
    datastore::BrandDataset,
    repositories::{BrandRepository, InMemoryBrandRepository},
    services::BrandService,
    web::{AppState, WebServer},
};

#[derive(Parser)]
#[command(name = "brand-catalog")]
#[command(about = "Read-only brand catalog lookup service with TTL response caching")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Dataset file path (overrides config file)
    #[arg(short, long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_filter = format!("brand_catalog={},tower_http={}", cli.log_level, cli.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting brand catalog service v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }

    // The dataset is loaded once, before the service accepts traffic, and
    // shared read-only for the life of the process.
    let dataset = Arc::new(BrandDataset::load_from_file(&config.dataset.path)?);

    let repository: Arc<dyn BrandRepository> =
        Arc::new(InMemoryBrandRepository::new(dataset.clone()));
    let cache = TtlCache::new();
    let sweeper = cache.spawn_sweeper(Duration::from_secs(config.cache.sweep_interval_seconds));
    let brand_service = Arc::new(BrandService::new(
        repository,
        cache,
        Duration::from_secs(config.cache.ttl_seconds),
    ));
    info!(
        "Brand service initialized (cache ttl: {}s, sweep interval: {}s)",
        config.cache.ttl_seconds, config.cache.sweep_interval_seconds
    );

    let server = WebServer::new(
        &config.web,
        AppState {
            brand_service,
            dataset,
        },
    )?;
    info!("Starting web server on {}", server.addr());

    server.serve().await?;

    sweeper.shutdown().await;
    info!("Cache sweeper stopped, exiting");

    Ok(())
}
