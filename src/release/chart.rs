// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

use super::types::{Chart, Metadata, Template};
use crate::config::Config;
use crate::constants;

/// Wrap generated templates into the chart that owns them
pub fn build_chart(config: &Config, templates: Vec<Template>) -> Chart {
    Chart {
        metadata: Metadata {
            name: config.chart_name.clone(),
            version: config.chart_version.clone(),
            description: config.chart_description.clone(),
            api_version: constants::chart::API_VERSION.to_string(),
        },
        templates,
    }
}
