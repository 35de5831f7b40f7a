// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use anyhow::Result;
use bc_config_types::AppConfig;
use clap::Args;
use serde_json::Value;
use std::io::Write;

#[derive(Args, Clone, Debug, Default)]
pub struct ShowArgs {
    /// Print JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(&self, config: &AppConfig, out: &mut impl Write) -> Result<()> {
        let tree = redacted(config)?;
        if self.json {
            serde_json::to_writer_pretty(&mut *out, &tree)?;
            writeln!(out)?;
        } else {
            out.write_all(serde_yaml::to_string(&tree)?.as_bytes())?;
        }
        Ok(())
    }
}

/// The resolved tree with secrets masked
pub fn redacted(config: &AppConfig) -> serde_json::Result<Value> {
    let mut tree = serde_json::to_value(config)?;
    if let Some(password) = tree.pointer_mut("/db/rds/password") {
        if password.as_str().is_some_and(|p| !p.is_empty()) {
            *password = Value::from(bc_logging::redact(&*password));
        }
    }
    Ok(tree)
}
