// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Defaulting and cross-field validation.
//!
//! Validation is an ordered pipeline of stages. Each stage fills in the defaults for
//! the fields it owns and then checks its rules, so later stages always see a fully
//! defaulted view of the sections before them. The first violated rule aborts the
//! pipeline; the tree may be partially defaulted at that point.
//!
//! Running the pipeline on an already validated tree is a no-op: every default is only
//! applied to an unset field and every check passes again.

mod autoscaling;
mod compute;
mod database;
mod identity;
mod k8s;
mod load_balancer;
mod observability;
mod recovery;
mod workload;

use crate::blueprints;
use crate::error::ValidationError;
use bc_config_types::AppConfig;

pub type Stage = fn(&mut AppConfig) -> Result<(), ValidationError>;

/// Stages shared by every workload
pub const COMMON_STAGES: &[(&str, Stage)] = &[
    ("identity", identity::check_identity),
    ("network", identity::check_network),
    ("workload", workload::check),
];

pub const K8S_WORKERS_STAGES: &[(&str, Stage)] = &[("k8s", k8s::check)];

pub const EC2_APP_STAGES: &[(&str, Stage)] = &[
    ("compute", compute::check),
    ("database", database::check),
    ("load-balancer", load_balancer::check),
    ("autoscaling", autoscaling::check),
    ("observability", observability::check),
    ("recovery", recovery::check),
];

/// Fill in defaults and check every rule, stopping at the first violation.
pub fn validate(config: &mut AppConfig) -> Result<(), ValidationError> {
    run(COMMON_STAGES, config)?;
    let stages = match config.workload.kind.as_str() {
        blueprints::K8S_WORKERS => K8S_WORKERS_STAGES,
        _ => EC2_APP_STAGES,
    };
    run(stages, config)
}

fn run(stages: &[(&str, Stage)], config: &mut AppConfig) -> Result<(), ValidationError> {
    for (name, stage) in stages {
        tracing::debug!(stage = name, "Running validation stage");
        stage(config).inspect_err(|err| {
            tracing::debug!(stage = name, field = err.field, "Validation failed");
        })?;
    }
    Ok(())
}

fn default_str(field: &mut String, value: &str) {
    if field.is_empty() {
        *field = value.to_string();
    }
}

fn default_num<T: Copy>(field: &mut Option<T>, value: T) -> T {
    *field.get_or_insert(value)
}

fn ensure(ok: bool, field: &'static str, message: &str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(field, message))
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::minimal;
    use super::*;

    #[test]
    fn test_minimal_document_resolves() {
        let mut config = minimal();
        validate(&mut config).unwrap();

        assert_eq!(config.workload.kind, "ec2-app");
        assert_eq!(config.workload.version, "v1");
        assert_eq!(config.ec2.instance_type, "t3.micro");
        assert_eq!(config.ec2.user_data_mode, "default");
        assert_eq!(config.db.mode, "ec2");
        assert_eq!(config.lb.instance_count, Some(1));
        assert!(config.observability.enabled.is_on());
        assert_eq!(config.observability.cpu_high_threshold, Some(80));
        assert_eq!(config.recovery.snapshot_time_utc, "03:00");
        assert_eq!(config.recovery.retention_days, Some(7));
        assert_eq!(config.recovery.drill.schedule_expression, "cron(0 3 1 * ? *)");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let mut once = minimal();
        validate(&mut once).unwrap();
        let mut twice = once.clone();
        validate(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_k8s_branch_skips_ec2_stages() {
        let mut config = minimal();
        config.workload.kind = "k8s-workers".into();
        config.lb.scheme = "internal".into();
        config.lb.enabled = true;
        validate(&mut config).unwrap();

        assert_eq!(config.k8s.worker_count, Some(2));
        assert!(config.ec2.instance_type.is_empty());
        assert!(config.observability.enabled.is_unset());
    }

    #[test]
    fn test_default_num_keeps_explicit_zero() {
        let mut field = Some(0u32);
        assert_eq!(default_num(&mut field, 7), 0);
        let mut unset = None;
        assert_eq!(default_num(&mut unset, 7u32), 7);
        assert_eq!(unset, Some(7));
    }
}
