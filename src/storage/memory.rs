// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-process storage driver, for tests and dry runs.

use super::Driver;
use crate::error::{OwnershipError, Result};
use crate::release::Release;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Keeps releases in memory. Clones share the same store.
#[derive(Clone, Default)]
pub struct MemoryDriver {
    store: Arc<RwLock<HashMap<String, Release>>>,
    create_attempts: Arc<RwLock<usize>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Driver pre-populated with releases under their storage keys
    pub fn with_releases(releases: Vec<Release>) -> Self {
        let driver = Self::new();
        {
            let mut store = driver.store.write().unwrap_or_else(|e| e.into_inner());
            for release in releases {
                store.insert(release.storage_key(), release);
            }
        }
        driver
    }

    pub fn get(&self, key: &str) -> Option<Release> {
        self.store
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.store.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of create calls seen, successful or not
    pub fn create_attempts(&self) -> usize {
        *self.create_attempts.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    fn name(&self) -> &'static str {
        "Memory"
    }

    async fn create(&self, key: &str, release: &Release) -> Result<()> {
        *self
            .create_attempts
            .write()
            .unwrap_or_else(|e| e.into_inner()) += 1;

        let mut store = self.store.write().unwrap_or_else(|e| e.into_inner());
        if store.contains_key(key) {
            return Err(OwnershipError::ReleaseExists(key.to_string()));
        }

        debug!("Stored release {} in memory", key);
        store.insert(key.to_string(), release.clone());
        Ok(())
    }
}
