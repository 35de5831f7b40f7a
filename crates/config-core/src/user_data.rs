// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Startup-script resolution.
//!
//! `ec2.user_data` and `db.user_data` may hold either the script text itself or a
//! reference to a file next to the stack. References are replaced by the file contents
//! before validation runs, so the validator only ever sees script text.

use crate::error::{ConfigError, UserDataError};
use crate::paths;
use bc_config_types::AppConfig;
use std::path::Path;

const FILE_SCHEME: &str = "file://";

/// Resolve both startup-script fields in place.
pub fn resolve_user_data(config: &mut AppConfig, stack_dir: &Path) -> Result<(), ConfigError> {
    let ec2 = resolve_value(&config.ec2.user_data, stack_dir).map_err(|source| {
        ConfigError::UserData {
            field: "ec2.user_data",
            source,
        }
    })?;
    let db = resolve_value(&config.db.user_data, stack_dir).map_err(|source| {
        ConfigError::UserData {
            field: "db.user_data",
            source,
        }
    })?;

    config.ec2.user_data = ec2;
    config.db.user_data = db;
    Ok(())
}

/// Resolve a single value.
///
/// * blank → empty string
/// * multi-line → kept verbatim
/// * `file://<path>` → contents of the file, which must exist
/// * any other single line → contents of the file if it exists, otherwise kept verbatim
///
/// Relative paths are taken from `stack_dir`. A path naming a directory is an error in
/// both reference forms.
pub fn resolve_value(raw: &str, stack_dir: &Path) -> Result<String, UserDataError> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(String::new());
    }
    if value.contains('\n') {
        return Ok(raw.to_string());
    }

    let (explicit, reference) = match value.strip_prefix(FILE_SCHEME) {
        Some(rest) => (true, rest),
        None => (false, value),
    };
    let candidate = paths::anchor(Path::new(reference), stack_dir);

    let metadata = match std::fs::metadata(&candidate) {
        Ok(metadata) => metadata,
        Err(_) if explicit => return Err(UserDataError::NotFound(candidate)),
        Err(_) => return Ok(raw.to_string()),
    };
    if metadata.is_dir() {
        return Err(UserDataError::IsDirectory(candidate));
    }

    tracing::debug!(path = %candidate.display(), "Reading startup script from file");
    std::fs::read_to_string(&candidate).map_err(|source| UserDataError::Read {
        path: candidate,
        source,
    })
}
