// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Identity of the chart that adopts the resources
pub mod chart {
    pub const NAME: &str = "core-paas-namespaces";
    pub const VERSION: &str = "0.4.0-pre.1";
    pub const DESCRIPTION: &str = "Chart built by helm-take-ownership";
    pub const API_VERSION: &str = "v1";
}

/// Release placement defaults
pub mod release {
    pub const NAME: &str = "core-paas-namespaces";
    pub const NAMESPACE: &str = "core-paas";
    pub const DESCRIPTION: &str = "Transferred ownership to Helm via helm-take-ownership";
    /// Revision of a freshly adopted release
    pub const INITIAL_VERSION: u32 = 1;
}

/// Template file names, relative to the chart directory
pub mod templates {
    pub const NAMESPACES: &str = "templates/namespaces.yaml";
    pub const DOCKER_REGISTRY_SECRET: &str = "templates/docker-registry-secret.yaml";
    pub const RESOURCE_QUOTAS: &str = "templates/resource-quotas.yaml";
}

/// Namespaces that get a Namespace object
pub const NAMESPACES: &[&str] = &["api-tooling", "design-center", "exchange"];

/// Default extra namespace that only receives resource quotas
pub const QUOTA_EXTRA_NAMESPACE: &str = "default";

/// Name of the registry pull secret created in every namespace
pub const REGISTRY_SECRET_NAME: &str = "devdocker-registrykey";

/// Base64 `.dockercfg` payload for the registry secret
pub const DOCKERCFG: &str = "eyJkZXZkb2NrZXIubXVsZXNvZnQuY29tOjE4MDc4Ijp7InVzZXJuYW1lIjoiYXJtLXB1Ymxpc2hlciIsInBhc3N3b3JkIjoiQWV3Nndlczl0aGFoNHdhIiwiZW1haWwiOiJ2YWxreXJAbXVsZXNvZnQuY29tIiwiYXV0aCI6IllYSnRMWEIxWW14cGMyaGxjanBCWlhjMmQyVnpPWFJvWVdnMGQyRT0ifX0=";

/// Name of the ResourceQuota object
pub const RESOURCE_QUOTA_NAME: &str = "compute-resources";

/// Release storage settings
pub mod storage {
    /// Namespace Tiller keeps its release records in
    pub const DEFAULT_NAMESPACE: &str = "kube-system";
    /// Data key holding the encoded release
    pub const RELEASE_KEY: &str = "release";
    /// Owner label value Tiller filters on
    pub const OWNER: &str = "TILLER";
}

/// Storage label keys
pub mod labels {
    pub const NAME: &str = "NAME";
    pub const OWNER: &str = "OWNER";
    pub const STATUS: &str = "STATUS";
    pub const VERSION: &str = "VERSION";
    pub const CREATED_AT: &str = "CREATED_AT";
}
