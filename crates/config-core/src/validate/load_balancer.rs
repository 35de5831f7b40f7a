// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::{default_num, default_str, ensure};
use crate::error::ValidationError;
use bc_config_types::{AppConfig, LbScheme};

/// Listener ports the load balancer may expose
pub const LISTENER_PORTS: &[u16] = &[80, 443];

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let lb = &mut config.lb;
    let count = default_num(&mut lb.instance_count, 1);
    ensure(count >= 1, "lb.instance_count", "lb.instance_count must be >= 1")?;

    if !lb.enabled {
        return Ok(());
    }

    default_str(&mut lb.scheme, LbScheme::Private.as_str());
    ensure(
        lb.scheme.parse::<LbScheme>().is_ok(),
        "lb.scheme",
        "lb.scheme must be 'public' or 'private'",
    )?;
    let listener = default_num(&mut lb.listener_port, 80);
    ensure(
        LISTENER_PORTS.contains(&listener),
        "lb.listener_port",
        "lb.listener_port must be 80 or 443",
    )?;
    default_num(&mut lb.target_port, 80);
    default_str(&mut lb.allowed_cidr, "0.0.0.0/0");
    ensure(
        lb.subnet_ids.len() >= 2,
        "lb.subnet_ids",
        "lb.subnet_ids must have at least 2 subnets",
    )
}
