// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! YAML document loading

use crate::error::{ConfigError, ParseError, Result};
use bc_config_types::AppConfig;
use std::path::Path;

/// Read and decode an application document.
///
/// Unknown keys are ignored. A blank document (or one holding only comments) decodes to
/// [`AppConfig::default`]; the resolver's required-field rules reject it later.
pub fn load(path: &Path) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Loaded application document");
    Ok(parse_str(&contents, path)?)
}

/// Decode a document held in memory; `origin` is only used in error messages.
///
/// Fields are decoded straight from the event stream rather than from a
/// `serde_yaml::Value`, so a bare scalar such as `1.30` in a text field keeps its source
/// text.
pub fn parse_str(contents: &str, origin: &Path) -> std::result::Result<AppConfig, ParseError> {
    let value: serde_yaml::Value = serde_yaml::from_str(contents)
        .map_err(|err| ParseError::syntax(origin.to_path_buf(), err))?;
    if value.is_null() {
        return Ok(AppConfig::default());
    }
    serde_path_to_error::deserialize(serde_yaml::Deserializer::from_str(contents))
        .map_err(|err| ParseError::new(origin.to_path_buf(), err))
}
