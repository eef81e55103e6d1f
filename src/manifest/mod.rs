// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifest generation for the adopted namespaces, registry secrets and quotas.

pub mod templates;

pub use templates::{namespace_template, resource_quota_template, secret_template};

use crate::config::Config;
use crate::constants;
use crate::release::Template;
use tracing::debug;

/// Collects chart templates together with the concatenated release manifest
pub struct ManifestBuilder<'a> {
    config: &'a Config,
    templates: Vec<Template>,
    manifest: String,
}

impl<'a> ManifestBuilder<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            templates: Vec::new(),
            manifest: String::new(),
        }
    }

    pub fn add_namespace(&mut self, name: &str) -> String {
        let content = namespace_template(name);
        self.push(constants::templates::NAMESPACES, content)
    }

    pub fn add_secret(&mut self, namespace: &str) -> String {
        let content = secret_template(namespace, &self.config.dockercfg);
        self.push(constants::templates::DOCKER_REGISTRY_SECRET, content)
    }

    pub fn add_resource_quota(&mut self, namespace: &str) -> String {
        let content = resource_quota_template(namespace, &self.config.quota_limits);
        self.push(constants::templates::RESOURCE_QUOTAS, content)
    }

    /// Record a template and append it to the manifest, returning the appended section
    fn push(&mut self, file: &str, content: String) -> String {
        let filename = self.config.template_path(file);
        let section = format!("\n---\n# Source: {}\n{}", filename, content);
        debug!("Generated template {}", filename);

        self.manifest.push_str(&section);
        self.templates.push(Template::new(filename, content));
        section
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn manifest(&self) -> &str {
        &self.manifest
    }

    pub fn finish(self) -> (Vec<Template>, String) {
        (self.templates, self.manifest)
    }
}

/// Generate every template of the release in order: namespaces, registry
/// secrets (release namespace included), then quotas when enabled.
pub fn build_templates(config: &Config) -> (Vec<Template>, String) {
    let mut builder = ManifestBuilder::new(config);
    let mut namespaces = config.namespaces.clone();

    for name in &namespaces {
        builder.add_namespace(name);
    }

    namespaces.push(config.release_namespace.clone());

    for name in &namespaces {
        builder.add_secret(name);
    }

    if config.resource_quotas {
        namespaces.push(config.quota_namespace.clone());

        for name in &namespaces {
            builder.add_resource_quota(name);
        }
    }

    builder.finish()
}
