// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Recovery section: scheduled snapshots, runbooks and recovery drills.

use crate::toggle::Toggle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct RecoveryConfig {
    pub enabled: bool,
    /// Daily snapshot time, `HH:MM` in UTC
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snapshot_time_utc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub backup_app: Toggle,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub backup_db: Toggle,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enable_runbooks: Toggle,
    pub drill: RecoveryDrillConfig,
}

/// Periodic restore rehearsal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct RecoveryDrillConfig {
    pub enabled: bool,
    /// EventBridge schedule expression
    #[serde(skip_serializing_if = "String::is_empty")]
    pub schedule_expression: String,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub register_to_target_group: Toggle,
}
