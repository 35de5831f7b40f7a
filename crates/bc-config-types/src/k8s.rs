// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Settings for the self-managed Kubernetes (kubeadm on EC2) workload.
//!
//! Only read when `workload.type` is `k8s-workers`; the EC2 application sections are
//! ignored on that path.

use crate::toggle::Toggle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct K8sWorkersConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub control_plane_instance_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub worker_instance_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub control_plane_ami: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub worker_ami: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_count: Option<u32>,
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(deserialize_with = "crate::scalar::scalar_text")]
    pub kubernetes_version: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pod_cidr: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub admin_cidr: String,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enable_ssm: Toggle,
    #[serde(skip_serializing_if = "Toggle::is_unset")]
    pub enable_detailed_monitoring: Toggle,
}
