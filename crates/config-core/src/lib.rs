// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Configuration resolver for brainctl application documents.
//!
//! Resolution runs in a fixed order:
//!
//! 1. [`loader::load`] decodes `app.yaml` into an [`AppConfig`]
//! 2. [`user_data::resolve_user_data`] swaps startup-script references for file contents
//! 3. [`overrides::apply_overrides`] appends whitelisted ingress rules
//! 4. [`validate::validate`] fills in defaults and checks cross-field rules
//!
//! [`load_runtime_config`] runs the whole sequence for a stack directory.

pub mod blueprints;
pub mod error;
pub mod loader;
pub mod overrides;
pub mod paths;
pub mod schema;
pub mod user_data;
pub mod validate;

pub use bc_config_types::AppConfig;
pub use error::{
    ConfigError, OverrideError, OverrideRejection, ParseError, Result, UserDataError,
    ValidationError,
};
pub use paths::RuntimeOptions;
pub use validate::validate;

use std::path::PathBuf;

/// A resolved tree together with the files it was built from
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub app: AppConfig,
    pub options: RuntimeOptions,
    pub app_path: PathBuf,
    /// Overrides document that was consulted, if overrides were enabled
    pub overrides_path: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn workspace_dir(&self) -> PathBuf {
        paths::workspace_dir(&self.app)
    }
}

/// Load, resolve, patch and validate the stack described by `options`.
pub fn load_runtime_config(options: RuntimeOptions) -> Result<RuntimeConfig> {
    let app_path = options.app_path();
    let overrides_path = options.overrides_path();

    let mut app = loader::load(&app_path)?;
    user_data::resolve_user_data(&mut app, &options.stack_dir)?;
    if let Some(path) = &overrides_path {
        overrides::apply_overrides(&mut app, path)?;
    }
    validate(&mut app)?;

    tracing::info!(
        app = %app.app.name,
        environment = %app.app.environment,
        workload = %app.workload.kind,
        overrides = app.runtime_overrides.total(),
        "Configuration resolved"
    );

    Ok(RuntimeConfig {
        app,
        options,
        app_path,
        overrides_path,
    })
}
