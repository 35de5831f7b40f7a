// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use crate::error::ValidationError;
use bc_config_types::AppConfig;

fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}

pub(super) fn check_identity(config: &mut AppConfig) -> Result<(), ValidationError> {
    required(&config.app.name, "app.name")?;
    required(&config.app.environment, "app.environment")?;
    required(&config.app.region, "app.region")
}

pub(super) fn check_network(config: &mut AppConfig) -> Result<(), ValidationError> {
    required(&config.infrastructure.vpc_id, "infrastructure.vpc_id")?;
    required(&config.infrastructure.subnet_id, "infrastructure.subnet_id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::fixtures::minimal;

    #[test]
    fn test_identity_fields_checked_in_order() {
        let mut config = minimal();
        config.app.environment.clear();
        config.app.region.clear();
        let err = check_identity(&mut config).unwrap_err();
        assert_eq!(err.field, "app.environment");
        assert_eq!(err.to_string(), "app.environment is required");
    }

    #[test]
    fn test_network_requires_subnet() {
        let mut config = minimal();
        config.infrastructure.subnet_id.clear();
        let err = check_network(&mut config).unwrap_err();
        assert_eq!(err.to_string(), "infrastructure.subnet_id is required");
    }
}
