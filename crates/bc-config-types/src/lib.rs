// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Strongly-typed configuration tree for brainctl application documents.
//!
//! This crate provides the in-memory representation of an `app.yaml` document. The
//! structs are plain data: they deserialize permissively (unknown keys are ignored),
//! keep "unset" distinguishable from explicit values, and carry no validation logic.
//! Defaulting and cross-field checks live in `config-core`, which mutates an
//! [`AppConfig`] in place before handing it to the generator.
//!
//! Sections map one-to-one onto the top-level keys of the document:
//!
//! ```yaml
//! workload: { type: ec2-app, version: v1 }
//! app: { name: billing, environment: dev, region: us-east-1 }
//! infrastructure: { vpc_id: vpc-123, subnet_id: subnet-a }
//! ec2: { instance_type: t3.micro }
//! ```

pub mod app;
pub mod db;
pub mod ingress;
pub mod k8s;
pub mod lb;
pub mod observability;
pub mod recovery;
pub mod scalar;
pub mod toggle;

pub use app::{AppConfig, AppIdentity, Ec2Config, Infrastructure, UserDataMode, Workload};
pub use db::{DbConfig, DbMode, RdsConfig};
pub use ingress::{IngressRule, IngressRuleError, RuntimeOverrides};
pub use k8s::K8sWorkersConfig;
pub use lb::{AppScalingConfig, LbConfig, LbScheme};
pub use observability::ObservabilityConfig;
pub use recovery::{RecoveryConfig, RecoveryDrillConfig};
pub use toggle::Toggle;
