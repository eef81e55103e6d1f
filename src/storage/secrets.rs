// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Secret storage driver. Same record layout as the ConfigMap driver, but
//! the payload is kept in an Opaque Secret.

use super::{encode_release, storage_labels, Driver};
use crate::constants::storage::RELEASE_KEY;
use crate::error::{OwnershipError, Result};
use crate::release::Release;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use tracing::{error, info, instrument};

pub struct SecretsDriver {
    client: Client,
    namespace: String,
}

impl SecretsDriver {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    fn build_secret(&self, key: &str, release: &Release) -> Result<Secret> {
        let encoded = encode_release(release)?;

        Ok(Secret {
            metadata: ObjectMeta {
                name: Some(key.to_string()),
                namespace: Some(self.namespace.clone()),
                labels: Some(storage_labels(release)),
                ..Default::default()
            },
            type_: Some("Opaque".to_string()),
            data: Some(BTreeMap::from([(
                RELEASE_KEY.to_string(),
                ByteString(encoded.into_bytes()),
            )])),
            ..Default::default()
        })
    }
}

#[async_trait]
impl Driver for SecretsDriver {
    fn name(&self) -> &'static str {
        "Secret"
    }

    #[instrument(skip(self, release), fields(namespace = %self.namespace))]
    async fn create(&self, key: &str, release: &Release) -> Result<()> {
        let secret = self.build_secret(key, release).inspect_err(|e| {
            error!("create: failed to encode release {}: {}", release.name, e);
        })?;

        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), &self.namespace);
        match secrets.create(&PostParams::default(), &secret).await {
            Ok(_) => {
                info!("Stored release {} in secret {}/{}", release.name, self.namespace, key);
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
