// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Loyalty Engine API Server
//!
//! Serves loyalty program data from the data store API, or from built-in
//! fixtures when `DATA_SOURCE=fixture`.

use loyalty_engine::{config::Config, services::LoyaltyStore, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        port = config.port,
        data_source = %config.data_source,
        "Starting the loyalty engine"
    );

    let store = LoyaltyStore::from_config(&config)?;
    if let LoyaltyStore::Upstream(client) = &store {
        tracing::info!(base_url = %client.base_url(), "Data store client initialized");
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = loyalty_engine::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("loyalty_engine=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
