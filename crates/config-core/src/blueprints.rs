// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Catalog of workload blueprints the generator knows how to render.

pub const EC2_APP: &str = "ec2-app";
pub const K8S_WORKERS: &str = "k8s-workers";

pub const DEFAULT_TYPE: &str = EC2_APP;
pub const DEFAULT_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Blueprint {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

const CATALOG: &[Blueprint] = &[
    Blueprint {
        kind: K8S_WORKERS,
        version: "v1",
        description: "Self-managed Kubernetes (kubeadm) control plane and workers on EC2",
    },
    Blueprint {
        kind: EC2_APP,
        version: "v1",
        description: "EC2 application with optional ALB/ASG, database, observability and recovery",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported workload {kind:?} version {version:?}")]
pub struct UnsupportedWorkload {
    pub kind: String,
    pub version: String,
}

/// Every blueprint, sorted by type then version.
pub fn list() -> Vec<Blueprint> {
    let mut out = CATALOG.to_vec();
    out.sort_by(|a, b| a.kind.cmp(b.kind).then_with(|| a.version.cmp(b.version)));
    out
}

/// Distinct workload types, sorted.
pub fn types() -> Vec<&'static str> {
    let mut kinds: Vec<_> = list().into_iter().map(|b| b.kind).collect();
    kinds.dedup();
    kinds
}

/// Find the blueprint for a workload; empty inputs take the defaults.
pub fn resolve(kind: &str, version: &str) -> Result<Blueprint, UnsupportedWorkload> {
    let kind = if kind.is_empty() { DEFAULT_TYPE } else { kind };
    let version = if version.is_empty() {
        DEFAULT_VERSION
    } else {
        version
    };

    CATALOG
        .iter()
        .find(|b| b.kind == kind && b.version == version)
        .copied()
        .ok_or_else(|| UnsupportedWorkload {
            kind: kind.to_string(),
            version: version.to_string(),
        })
}
