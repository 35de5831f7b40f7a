// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Plan scanning and risk classification.
//!
//! The scanner reads the machine-readable plan emitted by the provisioning executor
//! and keeps only the subset it needs: every resource change with its address, type
//! and ordered action list.

use crate::error::Result;
use serde::Deserialize;

/// Resource types whose in-place update or replacement restarts a running machine
pub const RISK_BEARING_TYPES: &[&str] = &["aws_instance", "aws_db_instance"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub resource_changes: Vec<ResourceChange>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceChange {
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub change: Change,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub actions: Vec<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    NoOp,
    Create,
    Read,
    Update,
    Delete,
    #[serde(other)]
    Unknown,
}

/// How a flagged resource would be disrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disruption {
    Update,
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlaggedResource {
    pub address: String,
    pub kind: String,
    pub disruption: Disruption,
}

impl Plan {
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Risky changes, in plan order
    pub fn flagged(&self) -> Vec<FlaggedResource> {
        self.resource_changes.iter().filter_map(classify).collect()
    }
}

/// Parse a plan and return its risky changes.
///
/// A malformed plan is an error; nothing is classified from a partial parse.
pub fn scan(raw: &[u8]) -> Result<Vec<FlaggedResource>> {
    let plan = Plan::from_slice(raw)?;
    let flagged = plan.flagged();
    tracing::debug!(
        changes = plan.resource_changes.len(),
        flagged = flagged.len(),
        "Scanned plan"
    );
    Ok(flagged)
}

pub fn classify(change: &ResourceChange) -> Option<FlaggedResource> {
    if !RISK_BEARING_TYPES.contains(&change.kind.as_str()) {
        return None;
    }
    disruption(&change.change.actions).map(|disruption| FlaggedResource {
        address: change.address.clone(),
        kind: change.kind.clone(),
        disruption,
    })
}

fn disruption(actions: &[Action]) -> Option<Disruption> {
    use Action::{Create, Delete};

    if actions.contains(&Action::Update) {
        return Some(Disruption::Update);
    }
    match actions {
        [Delete, Create] | [Create, Delete] => Some(Disruption::Replace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardrailError;

    fn change(kind: &str, actions: &[Action]) -> ResourceChange {
        ResourceChange {
            address: format!("{kind}.this"),
            kind: kind.to_string(),
            change: Change {
                actions: actions.to_vec(),
            },
        }
    }

    #[test]
    fn test_classification_table() {
        use Action::*;

        let cases: &[(&str, &[Action], Option<Disruption>)] = &[
            ("aws_instance", &[Update], Some(Disruption::Update)),
            ("aws_db_instance", &[Delete, Create], Some(Disruption::Replace)),
            ("aws_instance", &[Create, Delete], Some(Disruption::Replace)),
            ("aws_instance", &[Create], None),
            ("aws_instance", &[Delete], None),
            ("aws_instance", &[NoOp], None),
            ("aws_instance", &[Read], None),
            ("aws_instance", &[Delete, Create, Delete], None),
            ("aws_security_group", &[Update], None),
            ("aws_lb", &[Delete, Create], None),
        ];
        for (kind, actions, expected) in cases {
            let flagged = classify(&change(kind, actions));
            assert_eq!(flagged.map(|f| f.disruption), *expected, "{kind} {actions:?}");
        }
    }

    #[test]
    fn test_scan_keeps_plan_order() {
        let raw = br#"{
          "format_version": "1.2",
          "resource_changes": [
            {"address":"aws_instance.app[0]","type":"aws_instance","change":{"actions":["update"]}},
            {"address":"aws_db_instance.db[0]","type":"aws_db_instance","change":{"actions":["delete","create"]}},
            {"address":"aws_security_group.app_sg","type":"aws_security_group","change":{"actions":["update"]}}
          ]
        }"#;
        let flagged = scan(raw).unwrap();
        let addresses: Vec<_> = flagged.iter().map(|f| f.address.as_str()).collect();
        assert_eq!(addresses, vec!["aws_instance.app[0]", "aws_db_instance.db[0]"]);
    }

    #[test]
    fn test_unknown_actions_are_tolerated() {
        let raw = br#"{"resource_changes":[{"address":"aws_instance.a","type":"aws_instance","change":{"actions":["forget"]}}]}"#;
        assert!(scan(raw).unwrap().is_empty());
    }

    #[test]
    fn test_empty_plan() {
        assert!(scan(b"{}").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_plan_is_fatal() {
        let err = scan(b"{\"resource_changes\": [").unwrap_err();
        assert!(matches!(err, GuardrailError::Plan(_)));
    }
}
