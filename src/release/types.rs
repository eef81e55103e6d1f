// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Release and chart records.

use chrono::{DateTime, Utc};
use std::fmt;

/// A single template file of a chart. Names may repeat within one chart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub data: Vec<u8>,
}

impl Template {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub api_version: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chart {
    pub metadata: Metadata,
    pub templates: Vec<Template>,
}

/// Lifecycle state of a release revision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusCode {
    Unknown,
    Deployed,
    Deleted,
    Superseded,
    Failed,
    Deleting,
    PendingInstall,
    PendingUpgrade,
    PendingRollback,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::Deployed => "DEPLOYED",
            StatusCode::Deleted => "DELETED",
            StatusCode::Superseded => "SUPERSEDED",
            StatusCode::Failed => "FAILED",
            StatusCode::Deleting => "DELETING",
            StatusCode::PendingInstall => "PENDING_INSTALL",
            StatusCode::PendingUpgrade => "PENDING_UPGRADE",
            StatusCode::PendingRollback => "PENDING_ROLLBACK",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub code: StatusCode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Info {
    pub status: Status,
    pub first_deployed: DateTime<Utc>,
    pub last_deployed: DateTime<Utc>,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub info: Info,
    pub chart: Chart,
    pub manifest: String,
    /// Revision number
    pub version: u32,
    pub namespace: String,
}

impl Release {
    /// Key the release is stored under
    pub fn storage_key(&self) -> String {
        format!("{}.v{}", self.name, self.version)
    }
}
