// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

pub type Result<T> = std::result::Result<T, GuardrailError>;

#[derive(Debug, thiserror::Error)]
pub enum GuardrailError {
    #[error("invalid plan: {0}")]
    Plan(#[from] serde_json::Error),

    /// Risky changes were found and no provider could obtain a decision
    #[error(
        "guardrail requires manual confirmation for {}, but no approval was available; set {env}=yes or pass --force-instance-modify",
        .resources.join(", "),
        env = crate::approval::APPROVAL_ENV
    )]
    Blocked { resources: Vec<String> },

    #[error("guardrail I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
