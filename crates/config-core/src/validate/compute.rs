// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use super::default_str;
use crate::error::ValidationError;
use bc_config_types::{AppConfig, UserDataMode};

pub const DEFAULT_INSTANCE_TYPE: &str = "t3.micro";

pub(super) fn check(config: &mut AppConfig) -> Result<(), ValidationError> {
    let ec2 = &mut config.ec2;
    default_str(&mut ec2.instance_type, DEFAULT_INSTANCE_TYPE);
    check_user_data_mode(
        &mut ec2.user_data_mode,
        &ec2.user_data,
        ("ec2.user_data_mode", "ec2.user_data"),
    )
}

/// Default and check a `user_data_mode`/`user_data` pair.
///
/// `custom` replaces the generated script, so it needs a script to replace it with.
pub(super) fn check_user_data_mode(
    mode: &mut String,
    user_data: &str,
    (mode_field, data_field): (&'static str, &'static str),
) -> Result<(), ValidationError> {
    default_str(mode, UserDataMode::Default.as_str());

    let parsed: UserDataMode = mode.parse().map_err(|_| {
        let allowed: Vec<_> = UserDataMode::ALL.iter().map(|m| m.as_str()).collect();
        ValidationError::new(
            mode_field,
            format!("{mode_field} must be one of: {}", allowed.join(", ")),
        )
    })?;

    if parsed == UserDataMode::Custom && user_data.trim().is_empty() {
        return Err(ValidationError::new(
            data_field,
            format!("{data_field} is required when {mode_field}=custom"),
        ));
    }
    Ok(())
}
