// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Optional database section.
//!
//! A database runs in one of two mutually exclusive modes: a self-managed EC2 instance
//! (`ec2`) or a managed engine (`rds`). The self-managed fields (`instance_type`, `ami`,
//! `os`, `user_data`) are rejected in `rds` mode, and the `rds` block is only read in
//! `rds` mode.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct DbConfig {
    pub enabled: bool,
    /// `ec2` or `rds`
    pub mode: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub os: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ami: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_data: String,
    pub user_data_mode: String,
    pub rds: RdsConfig,
}

impl DbConfig {
    /// Parsed mode; `None` until validation has defaulted and checked it
    pub fn db_mode(&self) -> Option<DbMode> {
        self.mode.parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct RdsConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance_class: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub engine: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub engine_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocated_storage: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub storage_type: String,
    pub multi_az: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub db_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention_days: Option<u32>,
    pub publicly_accessible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbMode {
    /// Self-managed database on an EC2 instance
    Ec2,
    /// Managed database engine
    Rds,
}

impl DbMode {
    pub const ALL: [DbMode; 2] = [Self::Ec2, Self::Rds];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ec2 => "ec2",
            Self::Rds => "rds",
        }
    }
}

impl FromStr for DbMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("unknown database mode: {s}"))
    }
}

impl std::fmt::Display for DbMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
