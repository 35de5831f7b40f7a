// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::default_str;
use crate::blueprints;
use crate::error::ValidationError;
use bc_config_types::AppConfig;

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let workload = &mut config.workload;
    default_str(&mut workload.kind, blueprints::DEFAULT_TYPE);
    default_str(&mut workload.version, blueprints::DEFAULT_VERSION);

    let types = blueprints::types();
    if !types.contains(&workload.kind.as_str()) {
        return Err(ValidationError::new(
            "workload.type",
            format!("workload.type must be one of: {}", types.join(", ")),
        ));
    }

    let unsupported = match blueprints::resolve(&workload.kind, &workload.version) {
        Ok(blueprint) => {
            tracing::debug!(kind = blueprint.kind, version = blueprint.version, "Workload resolved");
            return Ok(());
        }
        Err(err) => err,
    };

    let versions: Vec<_> = blueprints::list()
        .into_iter()
        .filter(|b| b.kind == unsupported.kind)
        .map(|b| b.version)
        .collect();
    let message = match versions.as_slice() {
        [only] => format!("workload.version must be '{only}'"),
        many => format!("workload.version must be one of: {}", many.join(", ")),
    };
    Err(ValidationError::new("workload.version", message))
}
