// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Change-risk guardrail for provisioning plans.
//!
//! Before an apply or destroy the caller hands the executor's JSON plan to
//! [`Guardrail::check`]. Changes that would update or replace a running instance are
//! listed on the operator stream and need an approval from one of the configured
//! providers. The check is one-shot: it never retries and never times out.

pub mod approval;
pub mod error;
pub mod plan;

pub use approval::{
    ApprovalProvider, ApprovalSource, Console, Decision, EnvSignalProvider,
    InteractivePromptProvider, StdinConsole, APPROVAL_ENV,
};
pub use error::{GuardrailError, Result};
pub use plan::{scan, Disruption, FlaggedResource};

use std::io::Write;

/// Terminal state of a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing risky in the plan
    Clear,
    Approved {
        resources: Vec<String>,
        source: ApprovalSource,
    },
    Denied { resources: Vec<String> },
}

impl Outcome {
    pub fn may_proceed(&self) -> bool {
        !matches!(self, Outcome::Denied { .. })
    }
}

/// Ordered chain of approval providers
pub struct Guardrail {
    providers: Vec<Box<dyn ApprovalProvider>>,
}

impl Guardrail {
    pub fn new(providers: Vec<Box<dyn ApprovalProvider>>) -> Self {
        Self { providers }
    }

    /// Environment signal first, then the operator prompt on standard input.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(EnvSignalProvider::from_env()),
            Box::new(InteractivePromptProvider::new(StdinConsole)),
        ])
    }

    /// Scan `plan_json` and, when it holds risky changes, obtain a decision.
    pub fn check(&mut self, plan_json: &[u8], out: &mut dyn Write) -> Result<Outcome> {
        let flagged = scan(plan_json)?;
        self.decide(&flagged, out)
    }

    pub fn decide(&mut self, flagged: &[FlaggedResource], out: &mut dyn Write) -> Result<Outcome> {
        if flagged.is_empty() {
            return Ok(Outcome::Clear);
        }

        let resources: Vec<String> = flagged.iter().map(|f| f.address.clone()).collect();
        report(flagged, out)?;

        for provider in &mut self.providers {
            let Some(decision) = provider.decide(flagged, out)? else {
                continue;
            };
            tracing::debug!(provider = provider.name(), ?decision, "Guardrail decision");
            return Ok(match decision {
                Decision::Approve(source) => Outcome::Approved { resources, source },
                Decision::Deny => Outcome::Denied { resources },
            });
        }

        tracing::warn!(resources = ?resources, "Guardrail blocked: no approval available");
        Err(GuardrailError::Blocked { resources })
    }
}

impl Default for Guardrail {
    fn default() -> Self {
        Self::standard()
    }
}

fn report(flagged: &[FlaggedResource], out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "[guardrail] Changes detected on stateful instances:")?;
    for resource in flagged {
        let how = match resource.disruption {
            Disruption::Update => "update",
            Disruption::Replace => "replace",
        };
        writeln!(out, "  - {} ({how})", resource.address)?;
    }
    writeln!(out, "[guardrail] These changes may restart or replace the instances.")
}
