// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Stack file path resolution

use bc_config_types::AppConfig;
use std::path::{Path, PathBuf};

pub const DEFAULT_APP_FILE: &str = "app.yaml";
pub const DEFAULT_OVERRIDES_FILE: &str = "overrides.yaml";

/// Root of the per-application generator workspaces, relative to the working directory
pub const WORKSPACE_ROOT: &str = ".brainctl/apps";

/// Where a stack's documents live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Application document; relative paths are taken from `stack_dir`
    pub file: PathBuf,
    /// Directory holding the document and any startup scripts it references
    pub stack_dir: PathBuf,
    /// Overrides document; `None` disables overrides
    pub overrides: Option<PathBuf>,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_APP_FILE),
            stack_dir: PathBuf::from("."),
            overrides: Some(PathBuf::from(DEFAULT_OVERRIDES_FILE)),
        }
    }
}

impl RuntimeOptions {
    pub fn app_path(&self) -> PathBuf {
        anchor(&self.file, &self.stack_dir)
    }

    pub fn overrides_path(&self) -> Option<PathBuf> {
        self.overrides
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| anchor(p, &self.stack_dir))
    }
}

/// Join relative paths onto `base`; absolute paths pass through
pub fn anchor(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Directory the generator renders this application into
pub fn workspace_dir(config: &AppConfig) -> PathBuf {
    PathBuf::from(WORKSPACE_ROOT)
        .join(&config.app.name)
        .join(&config.app.environment)
}
