// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client for the cluster the release is adopted into

use crate::error::{OwnershipError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a client from the local kubeconfig or the in-cluster environment
#[instrument]
pub async fn create_client() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| OwnershipError::KubeconfigError(format!("Failed to infer config: {}", e)))?;

    debug!("Using cluster {}", config.cluster_url);

    Client::try_from(config)
        .map_err(|e| OwnershipError::KubeconfigError(format!("Failed to create client: {}", e)))
}
