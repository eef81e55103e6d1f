// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use helm_take_ownership::app;
use helm_take_ownership::config::Config;
use helm_take_ownership::kubernetes::create_client;
use helm_take_ownership::storage::Storage;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: release={} storage_namespace={} driver={:?}",
        config.release_name, config.storage_namespace, config.driver
    );

    let client = create_client().await.inspect_err(|e| error!("{}", e))?;
    info!("Connected to Kubernetes cluster");

    let storage = Storage::for_config(&config, client);
    app::run(&config, &storage)
        .await
        .inspect_err(|e| error!("Failed to record release: {}", e))?;

    Ok(())
}
