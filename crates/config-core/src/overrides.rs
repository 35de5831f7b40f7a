// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Whitelisted runtime overrides.
//!
//! An overrides document is a list of operations:
//!
//! ```yaml
//! overrides:
//!   - op: append
//!     path: security_groups.app.ingress
//!     value: { description: rdp, from_port: 3389, to_port: 3389, cidr_blocks: [10.0.0.0/8] }
//! ```
//!
//! Only the paths in [`WHITELIST`] are accepted and only `append` is supported.
//! Operations apply in document order; when one fails, the ones before it stay applied.

use crate::error::{ConfigError, OverrideError, OverrideRejection, Result};
use bc_config_types::{AppConfig, IngressRule, RuntimeOverrides};
use serde::Deserialize;
use std::path::Path;

pub const APPEND: &str = "append";

/// Override destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideTarget {
    AppIngress,
    DbIngress,
    AlbIngress,
}

/// Every path an override may touch
pub const WHITELIST: &[(&str, OverrideTarget)] = &[
    ("security_groups.app.ingress", OverrideTarget::AppIngress),
    ("security_groups.db.ingress", OverrideTarget::DbIngress),
    ("security_groups.alb.ingress", OverrideTarget::AlbIngress),
];

impl OverrideTarget {
    pub fn lookup(path: &str) -> Option<Self> {
        WHITELIST.iter().find(|(p, _)| *p == path).map(|(_, target)| *target)
    }

    pub fn path(self) -> &'static str {
        WHITELIST
            .iter()
            .find(|(_, target)| *target == self)
            .map(|(p, _)| *p)
            .unwrap_or_default()
    }

    fn slot(self, overrides: &mut RuntimeOverrides) -> &mut Vec<IngressRule> {
        match self {
            Self::AppIngress => &mut overrides.app_extra_ingress,
            Self::DbIngress => &mut overrides.db_extra_ingress,
            Self::AlbIngress => &mut overrides.alb_extra_ingress,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct OverridesDocument {
    #[serde(default)]
    overrides: Vec<OverrideOp>,
}

#[derive(Debug, Deserialize)]
struct OverrideOp {
    #[serde(default)]
    op: String,
    #[serde(default)]
    path: String,
    #[serde(default)]
    value: serde_yaml::Value,
}

/// Wire shape of an ingress rule inside an override value
#[derive(Debug, Deserialize)]
struct RawIngressRule {
    #[serde(default)]
    description: String,
    #[serde(default)]
    from_port: u16,
    #[serde(default)]
    to_port: u16,
    #[serde(default)]
    protocol: Option<String>,
    #[serde(default)]
    cidr_blocks: Vec<String>,
}

/// Apply the overrides document at `path`. A missing file is not an error.
pub fn apply_overrides(config: &mut AppConfig, path: &Path) -> Result<()> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No overrides document, skipping");
            return Ok(());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    apply_overrides_str(config, &contents, path)
}

/// Apply an overrides document held in memory; `origin` is only used in error messages.
pub fn apply_overrides_str(config: &mut AppConfig, contents: &str, origin: &Path) -> Result<()> {
    let invalid = |message: String| ConfigError::InvalidOverrides {
        path: origin.to_path_buf(),
        message,
    };
    let value: serde_yaml::Value =
        serde_yaml::from_str(contents).map_err(|err| invalid(err.to_string()))?;
    let document = if value.is_null() {
        OverridesDocument::default()
    } else {
        serde_yaml::from_value::<OverridesDocument>(value).map_err(|err| invalid(err.to_string()))?
    };

    for (index, op) in document.overrides.into_iter().enumerate() {
        let target = apply_one(&mut config.runtime_overrides, &op).map_err(|reason| {
            OverrideError {
                index,
                op: op.op.clone(),
                path: op.path.clone(),
                reason,
            }
        })?;
        tracing::debug!(index, path = target.path(), "Applied override");
    }

    tracing::info!(
        app_extra_ingress = config.runtime_overrides.app_extra_ingress.len(),
        db_extra_ingress = config.runtime_overrides.db_extra_ingress.len(),
        alb_extra_ingress = config.runtime_overrides.alb_extra_ingress.len(),
        "Runtime overrides applied"
    );
    Ok(())
}

fn apply_one(
    overrides: &mut RuntimeOverrides,
    op: &OverrideOp,
) -> std::result::Result<OverrideTarget, OverrideRejection> {
    let target = OverrideTarget::lookup(&op.path).ok_or(OverrideRejection::PathNotAllowed)?;
    if op.op != APPEND {
        return Err(OverrideRejection::OperationNotAllowed(target.path()));
    }

    let raw: RawIngressRule = serde_yaml::from_value(op.value.clone())
        .map_err(|err| OverrideRejection::InvalidRule(err.to_string()))?;
    let rule = IngressRule::new(
        raw.description,
        raw.from_port,
        raw.to_port,
        raw.protocol,
        raw.cidr_blocks,
    )?;

    target.slot(overrides).push(rule);
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("overrides.yaml")
    }

    #[test]
    fn test_whitelist_round_trip() {
        for (path, target) in WHITELIST {
            assert_eq!(OverrideTarget::lookup(path), Some(*target));
            assert_eq!(target.path(), *path);
        }
        assert_eq!(OverrideTarget::lookup("security_groups.app.egress"), None);
        assert_eq!(OverrideTarget::lookup("ec2.instance_type"), None);
    }

    #[test]
    fn test_path_is_checked_before_operation() {
        let mut config = AppConfig::default();
        let doc = "overrides:\n  - op: replace\n    path: ec2.instance_type\n    value: m5.large\n";
        let err = apply_overrides_str(&mut config, doc, &origin()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "override[0] (replace ec2.instance_type): path not allowed"
        );
    }

    #[test]
    fn test_empty_document_is_noop() {
        let mut config = AppConfig::default();
        apply_overrides_str(&mut config, "", &origin()).unwrap();
        apply_overrides_str(&mut config, "overrides: []\n", &origin()).unwrap();
        assert!(config.runtime_overrides.is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let mut config = AppConfig::default();
        let err = apply_overrides_str(&mut config, "overrides: nope\n", &origin()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverrides { .. }));
        assert!(err.to_string().starts_with("invalid overrides file overrides.yaml: "));
    }

    #[test]
    fn test_missing_file_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &dir.path().join("overrides.yaml")).unwrap();
        assert!(config.runtime_overrides.is_empty());
    }
}
