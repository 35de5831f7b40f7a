// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Flags that locate a stack on disk

use clap::Args;
use config_core::paths::{DEFAULT_APP_FILE, DEFAULT_OVERRIDES_FILE};
use config_core::{load_runtime_config, RuntimeConfig, RuntimeOptions};
use std::path::PathBuf;

#[derive(Args, Clone, Debug)]
pub struct StackArgs {
    /// Application document, relative to the stack directory unless absolute
    #[arg(
        short = 'f',
        long,
        global = true,
        env = "BRAINCTL_FILE",
        default_value = DEFAULT_APP_FILE
    )]
    pub file: PathBuf,

    /// Directory holding the application document and its startup scripts
    #[arg(long, global = true, env = "BRAINCTL_STACK_DIR", default_value = ".")]
    pub stack_dir: PathBuf,

    /// Overrides document; pass an empty value to disable overrides
    #[arg(
        long,
        global = true,
        env = "BRAINCTL_OVERRIDES",
        default_value = DEFAULT_OVERRIDES_FILE
    )]
    pub overrides: String,
}

impl Default for StackArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_APP_FILE),
            stack_dir: PathBuf::from("."),
            overrides: DEFAULT_OVERRIDES_FILE.to_string(),
        }
    }
}

impl StackArgs {
    pub fn to_runtime_options(&self) -> RuntimeOptions {
        RuntimeOptions {
            file: self.file.clone(),
            stack_dir: self.stack_dir.clone(),
            overrides: (!self.overrides.is_empty()).then(|| PathBuf::from(&self.overrides)),
        }
    }

    pub fn resolve(&self) -> config_core::Result<RuntimeConfig> {
        load_runtime_config(self.to_runtime_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides_disables_them() {
        let args = StackArgs {
            overrides: String::new(),
            ..Default::default()
        };
        let options = args.to_runtime_options();
        assert_eq!(options.overrides, None);
        assert_eq!(options.overrides_path(), None);
    }

    #[test]
    fn test_defaults_match_runtime_options() {
        assert_eq!(StackArgs::default().to_runtime_options(), RuntimeOptions::default());
    }
}
