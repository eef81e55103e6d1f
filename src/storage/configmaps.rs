// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ConfigMap storage driver, Tiller's default.

use super::{encode_release, storage_labels, Driver};
use crate::constants::storage::RELEASE_KEY;
use crate::error::{OwnershipError, Result};
use crate::release::Release;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

pub struct ConfigMapsDriver {
    client: Client,
    namespace: String,
}

impl ConfigMapsDriver {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    fn api(&self) -> Api<ConfigMap> {
        Api::namespaced(self.client.clone(), &self.namespace)
    }

    fn build_config_map(&self, key: &str, release: &Release) -> Result<ConfigMap> {
        let encoded = encode_release(release)?;

        Ok(ConfigMap {
            metadata: ObjectMeta {
                name: Some(key.to_string()),
                namespace: Some(self.namespace.clone()),
                labels: Some(storage_labels(release)),
                ..Default::default()
            },
            data: Some(BTreeMap::from([(RELEASE_KEY.to_string(), encoded)])),
            ..Default::default()
        })
    }
}

#[async_trait]
impl Driver for ConfigMapsDriver {
    fn name(&self) -> &'static str {
        "ConfigMap"
    }

    #[instrument(skip(self, release), fields(namespace = %self.namespace))]
    async fn create(&self, key: &str, release: &Release) -> Result<()> {
        let config_map = self.build_config_map(key, release).inspect_err(|e| {
            error!("create: failed to encode release {}: {}", release.name, e);
        })?;

        match self.api().create(&PostParams::default(), &config_map).await {
            Ok(_) => {
                info!("Stored release {} in configmap {}/{}", release.name, self.namespace, key);
                Ok(())
            }
            Err(kube::Error::Api(err)) if err.code == 409 => {
                Err(OwnershipError::ReleaseExists(key.to_string()))
            }
            Err(e) => {
                error!("create: failed to create: {}", e);
                Err(e.into())
            }
        }
    }
}
