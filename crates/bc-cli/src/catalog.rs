// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Commands that describe what this build understands, without reading a stack

use anyhow::Result;
use clap::Args;
use config_core::{blueprints, schema};
use std::io::Write;

#[derive(Args, Clone, Debug, Default)]
pub struct BlueprintsArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl BlueprintsArgs {
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let catalog = blueprints::list();
        if self.json {
            serde_json::to_writer_pretty(&mut *out, &catalog)?;
            writeln!(out)?;
            return Ok(());
        }

        for blueprint in catalog {
            let marker = if blueprint.kind == blueprints::DEFAULT_TYPE {
                " (default)"
            } else {
                ""
            };
            writeln!(
                out,
                "{}@{}{marker}\t{}",
                blueprint.kind, blueprint.version, blueprint.description
            )?;
        }
        Ok(())
    }
}

pub fn print_schema(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", schema::app_config_schema_json()?)?;
    Ok(())
}
