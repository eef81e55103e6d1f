// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants;
use std::env;

/// Hard limits written into every ResourceQuota
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaLimits {
    pub requests_cpu: String,
    pub requests_memory: String,
    pub limits_cpu: String,
    pub limits_memory: String,
}

impl Default for QuotaLimits {
    fn default() -> Self {
        Self {
            requests_cpu: "2".to_string(),
            requests_memory: "8Gi".to_string(),
            limits_cpu: "5".to_string(),
            limits_memory: "10Gi".to_string(),
        }
    }
}

/// Kubernetes object kind the release record is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverKind {
    ConfigMap,
    Secret,
}

/// Everything the release is built from
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespaces that get a Namespace object
    pub namespaces: Vec<String>,
    pub release_name: String,
    /// Namespace the release is recorded in; also receives the registry secret
    pub release_namespace: String,
    /// Extra namespace that only receives a ResourceQuota
    pub quota_namespace: String,
    pub chart_name: String,
    pub chart_version: String,
    pub chart_description: String,
    /// Base64 `.dockercfg` payload of the registry secret
    pub dockercfg: String,
    /// Generate ResourceQuota objects as well
    pub resource_quotas: bool,
    pub quota_limits: QuotaLimits,
    /// Namespace the release record is stored in
    pub storage_namespace: String,
    pub driver: DriverKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespaces: constants::NAMESPACES.iter().map(|s| s.to_string()).collect(),
            release_name: constants::release::NAME.to_string(),
            release_namespace: constants::release::NAMESPACE.to_string(),
            quota_namespace: constants::QUOTA_EXTRA_NAMESPACE.to_string(),
            chart_name: constants::chart::NAME.to_string(),
            chart_version: constants::chart::VERSION.to_string(),
            chart_description: constants::chart::DESCRIPTION.to_string(),
            dockercfg: constants::DOCKERCFG.to_string(),
            resource_quotas: false,
            quota_limits: QuotaLimits::default(),
            storage_namespace: constants::storage::DEFAULT_NAMESPACE.to_string(),
            driver: DriverKind::ConfigMap,
        }
    }
}

impl Config {
    /// Compiled-in configuration, with Tiller's namespace taken from
    /// `TILLER_NAMESPACE` when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(ns) = lookup("TILLER_NAMESPACE").filter(|v| !v.is_empty()) {
            config.storage_namespace = ns;
        }

        config
    }

    /// Path of a template file inside the chart
    pub fn template_path(&self, file: &str) -> String {
        format!("{}/{}", self.chart_name, file)
    }
}
