// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Root document, identity, network placement and compute sections.

use crate::db::DbConfig;
use crate::ingress::RuntimeOverrides;
use crate::k8s::K8sWorkersConfig;
use crate::lb::{AppScalingConfig, LbConfig};
use crate::observability::ObservabilityConfig;
use crate::recovery::RecoveryConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The resolved configuration tree for one application environment.
///
/// Deserialization is permissive: unknown keys are ignored and every section may be
/// omitted. The tree is only meaningful after `config_core::validate` has filled in
/// defaults and checked cross-field rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    pub workload: Workload,
    pub app: AppIdentity,
    pub infrastructure: Infrastructure,
    pub ec2: Ec2Config,
    pub db: DbConfig,
    pub lb: LbConfig,
    pub app_scaling: AppScalingConfig,
    pub observability: ObservabilityConfig,
    pub recovery: RecoveryConfig,
    pub k8s: K8sWorkersConfig,

    /// Rules appended by the overrides document; never read from `app.yaml`
    #[serde(skip_deserializing, skip_serializing_if = "RuntimeOverrides::is_empty")]
    pub runtime_overrides: RuntimeOverrides,
}

/// Selects the blueprint used to generate the stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Workload {
    /// Blueprint type, e.g. `ec2-app` or `k8s-workers`
    #[serde(rename = "type")]
    pub kind: String,
    /// Blueprint version
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct AppIdentity {
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub name: String,
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub environment: String,
    pub region: String,
}

/// Network placement of the stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Infrastructure {
    pub vpc_id: String,
    /// Primary subnet for single-instance resources
    pub subnet_id: String,
    /// Additional subnets for multi-AZ features (load balancer, RDS, autoscaling)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnet_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct Ec2Config {
    pub instance_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os: String,
    /// Machine image override
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ami: String,
    /// Startup script text, or a reference resolved to file contents before validation
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_data: String,
    /// One of `default`, `custom`, `merge`
    pub user_data_mode: String,
    pub imds_v2_required: bool,
}

/// How a user-supplied startup script combines with the generated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserDataMode {
    /// Generated script only
    Default,
    /// User script replaces the generated one
    Custom,
    /// User script runs after the generated one
    Merge,
}

impl UserDataMode {
    pub const ALL: [UserDataMode; 3] = [Self::Default, Self::Custom, Self::Merge];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
            Self::Merge => "merge",
        }
    }
}

impl FromStr for UserDataMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown user data mode: {s}"))
    }
}

impl std::fmt::Display for UserDataMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_data_mode_parsing() {
        assert_eq!("merge".parse::<UserDataMode>(), Ok(UserDataMode::Merge));
        assert!("Custom".parse::<UserDataMode>().is_err());
        assert!("".parse::<UserDataMode>().is_err());
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_runtime_overrides_are_not_read_from_document() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "runtime_overrides": {"app_extra_ingress": [{"cidr_blocks": ["0.0.0.0/0"]}]}
        }))
        .unwrap();
        assert!(config.runtime_overrides.is_empty());
    }
}
