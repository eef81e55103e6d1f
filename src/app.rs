// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Build the adopting release and hand it to storage.

use crate::config::Config;
use crate::error::Result;
use crate::release::{build_release, Release};
use crate::storage::Storage;
use tracing::info;

/// Construct the release from `config` and persist it with a single create call
pub async fn run(config: &Config, storage: &Storage) -> Result<Release> {
    info!("Constructing Helm Release...");
    let release = build_release(config);
    info!(
        "Release {} built from chart {}-{} with {} templates",
        release.name,
        release.chart.metadata.name,
        release.chart.metadata.version,
        release.chart.templates.len()
    );

    info!("Installing Helm Chart...");
    storage.create(&release).await?;
    info!(
        "Release {} (revision {}) recorded by {} storage",
        release.name,
        release.version,
        storage.driver_name()
    );

    Ok(release)
}
