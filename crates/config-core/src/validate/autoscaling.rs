// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::{default_num, ensure};
use crate::error::ValidationError;
use bc_config_types::AppConfig;

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let instance_count = config.lb.instance_count.unwrap_or(1);

    if !config.app_scaling.enabled {
        return ensure(
            config.lb.enabled || instance_count <= 1,
            "lb.instance_count",
            "lb.instance_count>1 requires lb.enabled=true",
        );
    }

    ensure(
        config.lb.enabled,
        "app_scaling.enabled",
        "app_scaling.enabled requires lb.enabled=true",
    )?;

    let scaling = &mut config.app_scaling;
    if scaling.subnet_ids.is_empty() {
        scaling.subnet_ids = if config.infrastructure.subnet_ids.len() >= 2 {
            config.infrastructure.subnet_ids.clone()
        } else {
            config.lb.subnet_ids.clone()
        };
    }
    ensure(
        scaling.subnet_ids.len() >= 2,
        "app_scaling.subnet_ids",
        "app_scaling.subnet_ids must have at least 2 subnets for multi-AZ",
    )?;

    let min = default_num(&mut scaling.min_size, 2);
    let max = default_num(&mut scaling.max_size, 4);
    let desired = default_num(&mut scaling.desired_capacity, min);
    default_num(&mut scaling.cpu_target, 60.0);

    ensure(
        min <= max,
        "app_scaling.min_size",
        "app_scaling.min_size must be <= app_scaling.max_size",
    )?;
    ensure(
        (min..=max).contains(&desired),
        "app_scaling.desired_capacity",
        "app_scaling.desired_capacity must be between min_size and max_size",
    )?;
    ensure(
        instance_count == 1,
        "lb.instance_count",
        "lb.instance_count cannot be used when app_scaling.enabled=true",
    )
}
