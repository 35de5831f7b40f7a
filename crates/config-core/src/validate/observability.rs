// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::{default_num, ensure};
use crate::error::ValidationError;
use bc_config_types::AppConfig;

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let obs = &mut config.observability;
    obs.enabled.default_to(true);
    obs.enable_ssm_endpoints.default_to(false);
    obs.enable_ssm_private_dns.default_to(false);
    // Interface endpoints follow the SSM endpoints unless set explicitly.
    let ssm_endpoints = obs.enable_ssm_endpoints.is_on();
    obs.enable_private_endpoints.default_to(ssm_endpoints);

    let threshold = default_num(&mut obs.cpu_high_threshold, 80);
    ensure(
        (1..=100).contains(&threshold),
        "observability.cpu_high_threshold",
        "observability.cpu_high_threshold must be between 1 and 100",
    )?;
    ensure(
        obs.alert_email.is_empty() || obs.alert_email.contains('@'),
        "observability.alert_email",
        "observability.alert_email must be a valid email",
    )?;

    let enabled = obs.enabled.is_on();
    let private_endpoints = obs.enable_private_endpoints.is_on();
    ensure(
        !ssm_endpoints || enabled,
        "observability.enable_ssm_endpoints",
        "observability.enable_ssm_endpoints=true requires observability.enabled=true",
    )?;
    ensure(
        !private_endpoints || enabled,
        "observability.enable_private_endpoints",
        "observability.enable_private_endpoints=true requires observability.enabled=true",
    )?;
    ensure(
        !ssm_endpoints || private_endpoints,
        "observability.enable_ssm_endpoints",
        "observability.enable_ssm_endpoints=true requires observability.enable_private_endpoints=true",
    )?;
    ensure(
        !obs.enable_ssm_private_dns.is_on() || private_endpoints,
        "observability.enable_ssm_private_dns",
        "observability.enable_ssm_private_dns=true requires observability.enable_private_endpoints=true",
    )?;

    if private_endpoints && obs.endpoint_subnet_ids.is_empty() {
        let infra = &config.infrastructure;
        obs.endpoint_subnet_ids = if infra.subnet_ids.is_empty() {
            vec![infra.subnet_id.clone()]
        } else {
            infra.subnet_ids.clone()
        };
    }
    Ok(())
}
