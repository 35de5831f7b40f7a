// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Error types surfaced by the resolver.
//!
//! Every failure is returned to the caller verbatim; nothing here is retried or
//! downgraded to a warning.

use bc_config_types::IngressRuleError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{field}: {source}")]
    UserData {
        field: &'static str,
        #[source]
        source: UserDataError,
    },

    #[error("invalid overrides file {}: {message}", .path.display())]
    InvalidOverrides { path: PathBuf, message: String },

    #[error(transparent)]
    Override(#[from] OverrideError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// The document could not be decoded into the configuration tree.
#[derive(Debug, thiserror::Error)]
#[error("failed to parse {}: {message}", .path.display())]
pub struct ParseError {
    pub path: PathBuf,
    /// Dotted location of the offending value, `.` for the document root
    pub location: String,
    pub message: String,
}

impl ParseError {
    pub(crate) fn new(path: PathBuf, err: serde_path_to_error::Error<serde_yaml::Error>) -> Self {
        let location = err.path().to_string();
        let inner = err.into_inner();
        let message = if location == "." {
            inner.to_string()
        } else {
            format!("{location}: {inner}")
        };
        Self {
            path,
            location,
            message,
        }
    }

    pub(crate) fn syntax(path: PathBuf, err: serde_yaml::Error) -> Self {
        Self {
            path,
            location: ".".to_string(),
            message: err.to_string(),
        }
    }
}

/// First violated invariant found by [`crate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Dotted path of the field the rule is attached to
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// `<field> is required`
    pub fn required(field: &'static str) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

/// A single rejected override, addressed by its position in the document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("override[{index}] ({op} {path}): {reason}")]
pub struct OverrideError {
    pub index: usize,
    pub op: String,
    pub path: String,
    pub reason: OverrideRejection,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OverrideRejection {
    #[error("path not allowed")]
    PathNotAllowed,
    #[error("operation not allowed: only 'append' is allowed for {0}")]
    OperationNotAllowed(&'static str),
    #[error("invalid ingress rule: {0}")]
    InvalidRule(String),
    #[error(transparent)]
    Rule(#[from] IngressRuleError),
}

#[derive(Debug, thiserror::Error)]
pub enum UserDataError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("path points to directory, expected file: {}", .0.display())]
    IsDirectory(PathBuf),
    #[error("read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
