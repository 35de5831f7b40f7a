// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Plan gate run before an apply or destroy

use anyhow::{Context, Result};
use bc_guardrail::{Guardrail, Outcome};
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Clone, Debug)]
pub struct GuardArgs {
    /// Plan rendered as JSON by the provisioning executor
    #[arg(long, value_name = "FILE")]
    pub plan: PathBuf,

    /// Proceed without asking for approval
    #[arg(long)]
    pub force_instance_modify: bool,
}

impl GuardArgs {
    /// `out` is the operator stream; the outcome decides the exit code.
    pub fn run(&self, guardrail: &mut Guardrail, out: &mut dyn Write) -> Result<Outcome> {
        let plan = std::fs::read(&self.plan)
            .with_context(|| format!("failed to read plan {}", self.plan.display()))?;

        if self.force_instance_modify {
            let flagged = bc_guardrail::scan(&plan)?;
            if !flagged.is_empty() {
                let resources: Vec<_> = flagged.iter().map(|f| f.address.as_str()).collect();
                tracing::warn!(?resources, "Instance changes forced, approval skipped");
            }
            return Ok(Outcome::Clear);
        }

        let outcome = guardrail.check(&plan, out)?;
        match &outcome {
            Outcome::Clear => tracing::debug!("No instance changes in plan"),
            Outcome::Approved { .. } => writeln!(out, "[guardrail] Approved.")?,
            Outcome::Denied { .. } => writeln!(out, "[guardrail] Cancelled by operator.")?,
        }
        Ok(outcome)
    }
}
