// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OwnershipError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to create Kubernetes client: {0}")]
    KubeconfigError(String),

    #[error("release {0} already exists")]
    ReleaseExists(String),

    #[error("Failed to encode release: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, OwnershipError>;
