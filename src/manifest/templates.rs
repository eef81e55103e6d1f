// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! YAML documents for the adopted resources

use crate::config::QuotaLimits;
use crate::constants::{REGISTRY_SECRET_NAME, RESOURCE_QUOTA_NAME};

/// Namespace object named `name`
pub fn namespace_template(name: &str) -> String {
    format!(
        "apiVersion: v1\n\
         kind: Namespace\n\
         metadata:\n  \
         name: \"{}\"",
        name
    )
}

/// Docker registry pull secret placed in namespace `namespace`
pub fn secret_template(namespace: &str, dockercfg: &str) -> String {
    format!(
        "apiVersion: v1\n\
         kind: Secret\n\
         type: kubernetes.io/dockercfg\n\
         \n\
         metadata:\n  \
         name: \"{}\"\n  \
         namespace: \"{}\"\n\
         \n\
         data:\n  \
         .dockercfg: {}",
        REGISTRY_SECRET_NAME, namespace, dockercfg
    )
}

/// Compute ResourceQuota placed in namespace `namespace`
pub fn resource_quota_template(namespace: &str, limits: &QuotaLimits) -> String {
    format!(
        "apiVersion: v1\n\
         kind: ResourceQuota\n\
         metadata:\n  \
         name: {}\n  \
         namespace: \"{}\"\n\
         spec:\n  \
         hard:\n    \
         requests.cpu: {}\n    \
         requests.memory: {}\n    \
         limits.cpu: {}\n    \
         limits.memory: {}",
        RESOURCE_QUOTA_NAME,
        namespace,
        limits.requests_cpu,
        limits.requests_memory,
        limits.limits_cpu,
        limits.limits_memory
    )
}
