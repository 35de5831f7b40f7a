// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Observability section: dashboards, alarms, alert delivery and private endpoints.

use crate::toggle::Toggle;
use serde::{Deserialize, Serialize};

/// Observability settings.
///
/// The switches nest: private endpoints and SSM endpoints need observability itself,
/// SSM endpoints and SSM private DNS need private endpoints. `enabled` defaults to on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct ObservabilityConfig {
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enabled: Toggle,
    /// CPU alarm threshold, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_high_threshold: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alert_email: String,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enable_private_endpoints: Toggle,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enable_ssm_endpoints: Toggle,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enable_ssm_private_dns: Toggle,
    /// Subnets hosting the interface endpoints
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoint_subnet_ids: Vec<String>,
}
