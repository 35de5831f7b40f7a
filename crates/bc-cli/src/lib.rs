// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! brainctl command tree
//!
//! Every command except `blueprints` and `schema` starts by resolving the stack named
//! by [`StackArgs`]. Command output goes to stdout; logs and guardrail prompts go to
//! stderr.

pub mod catalog;
pub mod guard;
pub mod show;
pub mod stack;
pub mod status;

use bc_logging::CliLoggingArgs;
use clap::Subcommand;

pub use clap::Parser;
pub use stack::StackArgs;

/// Exit code for a guardrail denial by the operator
pub const EXIT_DENIED: u8 = 2;

#[derive(Parser)]
#[command(
    name = "brainctl",
    about = "Resolve and guard declarative application stacks",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub stack: StackArgs,

    #[command(flatten)]
    pub logging: CliLoggingArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve and validate the stack, reporting the first problem found
    Validate,
    /// Print the resolved configuration tree
    Show(show::ShowArgs),
    /// Summarise the resolved stack
    Status,
    /// List the workload blueprints this build supports
    Blueprints(catalog::BlueprintsArgs),
    /// Print the JSON schema of the application document
    Schema,
    /// Check a provisioning plan for changes to running instances
    Guard(guard::GuardArgs),
}
