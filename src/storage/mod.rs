// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Release persistence.
//!
//! Releases are written the way Tiller keeps them: one object per revision,
//! named `<release>.v<revision>` in the storage namespace, labelled with the
//! release name, owner, status and revision. The payload under the `release`
//! key is the `hapi.release.Release` protobuf message, gzip compressed and
//! base64 encoded.

mod configmaps;
pub mod hapi;
mod memory;
mod secrets;

pub use configmaps::ConfigMapsDriver;
pub use memory::MemoryDriver;
pub use secrets::SecretsDriver;

use crate::config::{Config, DriverKind};
use crate::constants::{labels, storage::OWNER};
use crate::error::{OwnershipError, Result};
use crate::release::Release;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use kube::Client;
use prost::Message;
use std::collections::BTreeMap;
use std::io::{Read, Write};
use tracing::info;

/// Backend that persists encoded releases
#[async_trait]
pub trait Driver: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Store a new release under `key`, failing if the key is taken
    async fn create(&self, key: &str, release: &Release) -> Result<()>;
}

/// Front for a storage driver
pub struct Storage {
    driver: Box<dyn Driver>,
}

impl Storage {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self { driver }
    }

    /// Storage backed by the driver selected in `config`
    pub fn for_config(config: &Config, client: Client) -> Self {
        let driver: Box<dyn Driver> = match config.driver {
            DriverKind::ConfigMap => {
                Box::new(ConfigMapsDriver::new(client, &config.storage_namespace))
            }
            DriverKind::Secret => Box::new(SecretsDriver::new(client, &config.storage_namespace)),
        };
        Self::new(driver)
    }

    pub fn driver_name(&self) -> &'static str {
        self.driver.name()
    }

    /// Persist the first record of a release
    pub async fn create(&self, release: &Release) -> Result<()> {
        let key = release.storage_key();
        info!("creating release \"{}\"", key);
        self.driver.create(&key, release).await
    }
}

/// Marshal, compress and base64 encode a release
pub fn encode_release(release: &Release) -> Result<String> {
    let message = hapi::Release::from(release).encode_to_vec();

    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder
        .write_all(&message)
        .map_err(|e| OwnershipError::Encode(e.to_string()))?;
    let compressed = encoder
        .finish()
        .map_err(|e| OwnershipError::Encode(e.to_string()))?;

    Ok(STANDARD.encode(compressed))
}

/// Inverse of [`encode_release`]
pub fn decode_release(data: &str) -> Result<Release> {
    let compressed = STANDARD
        .decode(data)
        .map_err(|e| OwnershipError::Encode(format!("base64 decode error: {}", e)))?;

    let mut message = Vec::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut message)
        .map_err(|e| OwnershipError::Encode(format!("gzip decode error: {}", e)))?;

    let release = hapi::Release::decode(message.as_slice())
        .map_err(|e| OwnershipError::Encode(format!("protobuf decode error: {}", e)))?;
    Release::try_from(release)
}

/// Labels Tiller uses to find and filter release records
pub fn storage_labels(release: &Release) -> BTreeMap<String, String> {
    BTreeMap::from([
        (labels::NAME.to_string(), release.name.clone()),
        (labels::OWNER.to_string(), OWNER.to_string()),
        (labels::STATUS.to_string(), release.info.status.code.to_string()),
        (labels::VERSION.to_string(), release.version.to_string()),
        (labels::CREATED_AT.to_string(), Utc::now().timestamp().to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::build_release;

    #[test]
    fn test_encode_decode_release() {
        let release = build_release(&Config::default());

        let encoded = encode_release(&release).unwrap();
        let decoded = decode_release(&encoded).unwrap();

        assert_eq!(decoded, release);
    }

    #[test]
    fn test_encoded_release_is_gzip() {
        let encoded = encode_release(&build_release(&Config::default())).unwrap();
        let raw = STANDARD.decode(encoded).unwrap();

        assert_eq!(&raw[..2], &[0x1f, 0x8b]);
    }

    fn unpack(encoded: &str) -> Vec<u8> {
        let mut message = Vec::new();
        GzDecoder::new(STANDARD.decode(encoded).unwrap().as_slice())
            .read_to_end(&mut message)
            .unwrap();
        message
    }

    #[test]
    fn test_payload_is_hapi_release_protobuf() {
        let release = build_release(&Config::default());
        let message = unpack(&encode_release(&release).unwrap());

        // field 1 (name), length delimited
        assert_eq!(message[0], 0x0a);

        let stored = hapi::Release::decode(message.as_slice()).unwrap();
        assert_eq!(stored.name, "core-paas-namespaces");
        assert_eq!(stored.namespace, "core-paas");
        assert_eq!(stored.version, 1);
        assert_eq!(stored.manifest, release.manifest);

        let info = stored.info.unwrap();
        assert_eq!(info.status.unwrap().code, hapi::Code::Deployed as i32);
        assert_eq!(
            info.first_deployed.unwrap().seconds,
            release.info.first_deployed.timestamp()
        );
        assert_eq!(info.description, "Transferred ownership to Helm via helm-take-ownership");

        let chart = stored.chart.unwrap();
        let metadata = chart.metadata.unwrap();
        assert_eq!(metadata.name, "core-paas-namespaces");
        assert_eq!(metadata.version, "0.4.0-pre.1");
        assert_eq!(metadata.api_version, "v1");
        assert_eq!(chart.templates.len(), 7);
        assert_eq!(chart.templates[0].name, "core-paas-namespaces/templates/namespaces.yaml");
        assert_eq!(chart.templates[0].data, release.chart.templates[0].data);
    }

    #[test]
    fn test_decode_invalid_base64() {
        let err = decode_release("not base64!!!").unwrap_err();
        assert!(matches!(err, OwnershipError::Encode(_)));
    }

    #[test]
    fn test_decode_uncompressed_payload_rejected() {
        let err = decode_release(&STANDARD.encode(b"\x0a\x01a")).unwrap_err();
        assert!(matches!(err, OwnershipError::Encode(msg) if msg.contains("gzip")));
    }

    #[test]
    fn test_storage_labels() {
        let release = build_release(&Config::default());
        let labels = storage_labels(&release);

        assert_eq!(labels.get("NAME").unwrap(), "core-paas-namespaces");
        assert_eq!(labels.get("OWNER").unwrap(), "TILLER");
        assert_eq!(labels.get("STATUS").unwrap(), "DEPLOYED");
        assert_eq!(labels.get("VERSION").unwrap(), "1");
        assert!(labels.get("CREATED_AT").unwrap().parse::<i64>().is_ok());
    }

    #[tokio::test]
    async fn test_storage_create_uses_release_key() {
        let driver = MemoryDriver::new();
        let storage = Storage::new(Box::new(driver.clone()));
        let release = build_release(&Config::default());

        storage.create(&release).await.unwrap();

        assert_eq!(driver.get("core-paas-namespaces.v1"), Some(release));
        assert_eq!(storage.driver_name(), "Memory");
    }
}
