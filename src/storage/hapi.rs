// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tiller's `hapi` protobuf messages, limited to the fields this program writes.
//!
//! Field numbers follow `hapi/release/*.proto` and `hapi/chart/*.proto`; fields
//! that are never set (hooks, values, dependencies, ...) are left out and
//! decode as their defaults on Tiller's side.

use crate::error::{OwnershipError, Result};
use crate::release::types;
use chrono::{DateTime, Utc};
use prost_types::Timestamp;

#[derive(Clone, PartialEq, prost::Message)]
pub struct Release {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(message, optional, tag = "2")]
    pub info: Option<Info>,
    #[prost(message, optional, tag = "3")]
    pub chart: Option<Chart>,
    #[prost(string, tag = "5")]
    pub manifest: String,
    #[prost(int32, tag = "7")]
    pub version: i32,
    #[prost(string, tag = "8")]
    pub namespace: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Info {
    #[prost(message, optional, tag = "1")]
    pub status: Option<Status>,
    #[prost(message, optional, tag = "2")]
    pub first_deployed: Option<Timestamp>,
    #[prost(message, optional, tag = "3")]
    pub last_deployed: Option<Timestamp>,
    #[prost(string, tag = "5")]
    pub description: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Status {
    #[prost(enumeration = "Code", tag = "1")]
    pub code: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum Code {
    Unknown = 0,
    Deployed = 1,
    Deleted = 2,
    Superseded = 3,
    Failed = 4,
    Deleting = 5,
    PendingInstall = 6,
    PendingUpgrade = 7,
    PendingRollback = 8,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Chart {
    #[prost(message, optional, tag = "1")]
    pub metadata: Option<Metadata>,
    #[prost(message, repeated, tag = "2")]
    pub templates: Vec<Template>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Metadata {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "4")]
    pub version: String,
    #[prost(string, tag = "5")]
    pub description: String,
    #[prost(string, tag = "10")]
    pub api_version: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Template {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: Vec<u8>,
}

impl From<types::StatusCode> for Code {
    fn from(code: types::StatusCode) -> Self {
        use types::StatusCode as S;
        match code {
            S::Unknown => Code::Unknown,
            S::Deployed => Code::Deployed,
            S::Deleted => Code::Deleted,
            S::Superseded => Code::Superseded,
            S::Failed => Code::Failed,
            S::Deleting => Code::Deleting,
            S::PendingInstall => Code::PendingInstall,
            S::PendingUpgrade => Code::PendingUpgrade,
            S::PendingRollback => Code::PendingRollback,
        }
    }
}

impl From<Code> for types::StatusCode {
    fn from(code: Code) -> Self {
        use types::StatusCode as S;
        match code {
            Code::Unknown => S::Unknown,
            Code::Deployed => S::Deployed,
            Code::Deleted => S::Deleted,
            Code::Superseded => S::Superseded,
            Code::Failed => S::Failed,
            Code::Deleting => S::Deleting,
            Code::PendingInstall => S::PendingInstall,
            Code::PendingUpgrade => S::PendingUpgrade,
            Code::PendingRollback => S::PendingRollback,
        }
    }
}

fn to_timestamp(time: &DateTime<Utc>) -> Timestamp {
    Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}

fn from_timestamp(ts: Option<Timestamp>, field: &str) -> Result<DateTime<Utc>> {
    let ts = ts.ok_or_else(|| OwnershipError::Encode(format!("release has no {}", field)))?;
    DateTime::from_timestamp(ts.seconds, ts.nanos.max(0) as u32)
        .ok_or_else(|| OwnershipError::Encode(format!("{} out of range", field)))
}

impl From<&types::Release> for Release {
    fn from(release: &types::Release) -> Self {
        let info = &release.info;
        let metadata = &release.chart.metadata;

        Release {
            name: release.name.clone(),
            info: Some(Info {
                status: Some(Status {
                    code: Code::from(info.status.code) as i32,
                }),
                first_deployed: Some(to_timestamp(&info.first_deployed)),
                last_deployed: Some(to_timestamp(&info.last_deployed)),
                description: info.description.clone(),
            }),
            chart: Some(Chart {
                metadata: Some(Metadata {
                    name: metadata.name.clone(),
                    version: metadata.version.clone(),
                    description: metadata.description.clone(),
                    api_version: metadata.api_version.clone(),
                }),
                templates: release
                    .chart
                    .templates
                    .iter()
                    .map(|t| Template {
                        name: t.name.clone(),
                        data: t.data.clone(),
                    })
                    .collect(),
            }),
            manifest: release.manifest.clone(),
            version: release.version as i32,
            namespace: release.namespace.clone(),
        }
    }
}

impl TryFrom<Release> for types::Release {
    type Error = OwnershipError;

    fn try_from(release: Release) -> Result<Self> {
        let info = release
            .info
            .ok_or_else(|| OwnershipError::Encode("release has no info".to_string()))?;
        let chart = release
            .chart
            .ok_or_else(|| OwnershipError::Encode("release has no chart".to_string()))?;
        let metadata = chart.metadata.unwrap_or_default();
        let code = info
            .status
            .map(|s| Code::try_from(s.code).unwrap_or(Code::Unknown))
            .unwrap_or(Code::Unknown);
        let version = u32::try_from(release.version)
            .map_err(|_| OwnershipError::Encode(format!("invalid revision {}", release.version)))?;

        Ok(types::Release {
            name: release.name,
            info: types::Info {
                status: types::Status { code: code.into() },
                first_deployed: from_timestamp(info.first_deployed, "first_deployed")?,
                last_deployed: from_timestamp(info.last_deployed, "last_deployed")?,
                description: info.description,
            },
            chart: types::Chart {
                metadata: types::Metadata {
                    name: metadata.name,
                    version: metadata.version,
                    description: metadata.description,
                    api_version: metadata.api_version,
                },
                templates: chart
                    .templates
                    .into_iter()
                    .map(|t| types::Template::new(t.name, t.data))
                    .collect(),
            },
            manifest: release.manifest,
            version,
            namespace: release.namespace,
        })
    }
}
