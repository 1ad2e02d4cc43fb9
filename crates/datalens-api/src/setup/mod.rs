//! Application setup and initialization
//!
//! All startup logic lives here so main.rs stays a thin entry point.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use datalens_core::AppConfig;
use datalens_storage::LocalStorage;

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: AppConfig) -> Result<(Arc<AppState>, axum::Router)> {
    // Initialize telemetry first
    crate::telemetry::init_tracing();

    // Validate configuration - fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;
    tracing::info!("Configuration loaded and validated successfully");

    // Create the upload and processed-output directories
    let uploads = LocalStorage::new(&config.upload_dir).await?;
    let processed = LocalStorage::new(&config.processed_dir).await?;

    let state = Arc::new(AppState {
        config: config.clone(),
        uploads: Arc::new(uploads),
        processed: Arc::new(processed),
    });

    // Setup routes
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
