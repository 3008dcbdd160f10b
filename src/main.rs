use actix::prelude::*;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod actors;
mod agent;
mod api;
mod config;
mod domain;
mod metrics;

use actors::KitchenActor;
use agent::InventoryTools;
use config::Config;
use domain::kitchen::{CookingEngine, InventoryStore};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.default_log_filter))
        )
        .init();

    tracing::info!("🍕 Starting Cooking Agent");

    // === 1. Initialize Prometheus metrics ===
    let metrics = Arc::new(metrics::Metrics::new()?);
    let metrics_registry = Arc::new(metrics.registry().clone());

    // === 2. Process-wide inventory, owned by the kitchen engine ===
    let inventory = Arc::new(InventoryStore::new());
    let engine = CookingEngine::new(inventory);

    // === 3. Start the kitchen actor; agent tools cook through it too ===
    let kitchen = KitchenActor::new(engine, metrics.clone()).start();
    let tools = InventoryTools::new(kitchen.clone());

    // === 4. Serve the API and metrics ===
    tracing::info!("🚀 Serving kitchen API on http://{}", config.api_addr);

    let kitchen_data = web::Data::new(kitchen);
    let tools_data = web::Data::new(tools);
    let api_server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(kitchen_data.clone())
            .app_data(tools_data.clone())
            .configure(api::configure)
    })
    .bind(config.api_addr)?
    .run();

    tokio::try_join!(
        api_server,
        metrics::start_metrics_server(metrics_registry, config.metrics_addr),
    )?;

    tracing::info!("Cooking Agent stopped");
    Ok(())
}
