// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Release assembly: chart metadata, deployment info and placement.

pub mod chart;
pub mod types;

pub use chart::build_chart;
pub use types::{Chart, Info, Metadata, Release, Status, StatusCode, Template};

use crate::config::Config;
use crate::constants;
use crate::manifest::build_templates;
use chrono::Utc;

/// Build the release that adopts the generated resources
pub fn build_release(config: &Config) -> Release {
    let (templates, manifest) = build_templates(config);

    Release {
        name: config.release_name.clone(),
        info: build_info(),
        chart: build_chart(config, templates),
        manifest,
        version: constants::release::INITIAL_VERSION,
        namespace: config.release_namespace.clone(),
    }
}

fn build_info() -> Info {
    Info {
        status: Status {
            code: StatusCode::Deployed,
        },
        first_deployed: Utc::now(),
        last_deployed: Utc::now(),
        description: constants::release::DESCRIPTION.to_string(),
    }
}
