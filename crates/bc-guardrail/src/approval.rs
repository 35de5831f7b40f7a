// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Approval providers.
//!
//! Providers are consulted in order. Each either returns a [`Decision`] or abstains,
//! and the first decision wins.

use crate::error::Result;
use crate::plan::FlaggedResource;
use std::io::{self, BufRead, IsTerminal, Write};

/// Environment variable carrying the automatic approval signal
pub const APPROVAL_ENV: &str = "BRAINCTL_INSTANCE_MODIFY_APPROVED";

/// Values of [`APPROVAL_ENV`] that count as approval (trimmed, case-insensitive)
pub const APPROVED_VALUES: &[&str] = &["yes", "y", "true", "1", "sim"];

/// Token the operator must type at the prompt
pub const CONFIRMATION_TOKEN: &str = "yes";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalSource {
    EnvSignal,
    Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve(ApprovalSource),
    Deny,
}

pub trait ApprovalProvider {
    fn name(&self) -> &'static str;

    /// `Ok(None)` means the provider abstains.
    fn decide(&mut self, flagged: &[FlaggedResource], out: &mut dyn Write)
        -> Result<Option<Decision>>;
}

/// Approves when [`APPROVAL_ENV`] holds an affirmative value; never denies.
#[derive(Debug, Clone, Default)]
pub struct EnvSignalProvider {
    value: Option<String>,
}

impl EnvSignalProvider {
    pub fn new(value: Option<String>) -> Self {
        Self { value }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(APPROVAL_ENV).ok())
    }
}

pub fn is_affirmative(value: &str) -> bool {
    let value = value.trim();
    APPROVED_VALUES.iter().any(|v| v.eq_ignore_ascii_case(value))
}

impl ApprovalProvider for EnvSignalProvider {
    fn name(&self) -> &'static str {
        "env-signal"
    }

    fn decide(&mut self, flagged: &[FlaggedResource], out: &mut dyn Write) -> Result<Option<Decision>> {
        if !self.value.as_deref().is_some_and(is_affirmative) {
            return Ok(None);
        }
        tracing::warn!(
            env = APPROVAL_ENV,
            resources = flagged.len(),
            "Instance changes approved through environment signal"
        );
        writeln!(out, "[guardrail] Automatic approval received via {APPROVAL_ENV}.")?;
        Ok(Some(Decision::Approve(ApprovalSource::EnvSignal)))
    }
}

/// Operator terminal seam
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    /// Whether a person can answer a prompt
    fn is_interactive(&self) -> bool;

    /// One line of input, without limit on how long it takes
    fn read_line(&mut self) -> io::Result<String>;
}

/// Console backed by the process's standard input
#[derive(Debug, Default)]
pub struct StdinConsole;

impl Console for StdinConsole {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Asks the operator to type [`CONFIRMATION_TOKEN`]. Abstains without a terminal.
#[derive(Debug)]
pub struct InteractivePromptProvider<C> {
    console: C,
}

impl<C: Console> InteractivePromptProvider<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
}

impl<C: Console> ApprovalProvider for InteractivePromptProvider<C> {
    fn name(&self) -> &'static str {
        "interactive-prompt"
    }

    fn decide(&mut self, _flagged: &[FlaggedResource], out: &mut dyn Write) -> Result<Option<Decision>> {
        if !self.console.is_interactive() {
            tracing::debug!("Console is not interactive, prompt skipped");
            return Ok(None);
        }

        write!(out, "[guardrail] Type '{CONFIRMATION_TOKEN}' to continue: ")?;
        out.flush()?;
        let answer = self.console.read_line()?;

        if answer.trim().eq_ignore_ascii_case(CONFIRMATION_TOKEN) {
            tracing::warn!("Instance changes approved by operator");
            Ok(Some(Decision::Approve(ApprovalSource::Operator)))
        } else {
            tracing::info!("Instance changes denied by operator");
            Ok(Some(Decision::Deny))
        }
    }
}
