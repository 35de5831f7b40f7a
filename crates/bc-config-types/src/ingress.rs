// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Ingress rules and the runtime-override slots they are appended to.

use serde::Serialize;
use thiserror::Error;

/// Protocol applied when a rule omits one
pub const DEFAULT_PROTOCOL: &str = "tcp";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngressRuleError {
    #[error("cidr_blocks is required")]
    MissingCidrBlocks,
}

/// An allowed inbound network path.
///
/// Rules are immutable once built. [`IngressRule::new`] is the only constructor and it
/// refuses an empty CIDR set, so every rule stored in [`RuntimeOverrides`] opens a
/// concrete source range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, schemars::JsonSchema)]
pub struct IngressRule {
    description: String,
    from_port: u16,
    to_port: u16,
    protocol: String,
    cidr_blocks: Vec<String>,
}

impl IngressRule {
    pub fn new(
        description: impl Into<String>,
        from_port: u16,
        to_port: u16,
        protocol: Option<String>,
        cidr_blocks: Vec<String>,
    ) -> Result<Self, IngressRuleError> {
        if cidr_blocks.is_empty() {
            return Err(IngressRuleError::MissingCidrBlocks);
        }
        let protocol = protocol
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());

        Ok(Self {
            description: description.into(),
            from_port,
            to_port,
            protocol,
            cidr_blocks,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn from_port(&self) -> u16 {
        self.from_port
    }

    pub fn to_port(&self) -> u16 {
        self.to_port
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn cidr_blocks(&self) -> &[String] {
        &self.cidr_blocks
    }
}

/// Extra ingress rules collected from the overrides document.
///
/// These lists are never populated from `app.yaml`; only the override patcher appends
/// to them, and it only ever appends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, schemars::JsonSchema)]
pub struct RuntimeOverrides {
    pub app_extra_ingress: Vec<IngressRule>,
    pub db_extra_ingress: Vec<IngressRule>,
    pub alb_extra_ingress: Vec<IngressRule>,
}

impl RuntimeOverrides {
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn total(&self) -> usize {
        self.app_extra_ingress.len() + self.db_extra_ingress.len() + self.alb_extra_ingress.len()
    }
}
