// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON schema of the application document.
//!
//! The schema is derived from [`AppConfig`] and is meant for editor tooling. It
//! describes shape only; the cross-field rules live in [`crate::validate`].

use bc_config_types::AppConfig;
use schemars::schema::RootSchema;

pub fn app_config_schema() -> RootSchema {
    schemars::schema_for!(AppConfig)
}

/// Pretty-printed schema document
pub fn app_config_schema_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&app_config_schema())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_top_level_sections() {
        let schema = serde_json::to_value(app_config_schema()).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for key in ["workload", "app", "infrastructure", "ec2", "db", "lb", "recovery"] {
            assert!(properties.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_toggle_is_nullable_boolean() {
        let schema = serde_json::to_value(app_config_schema()).unwrap();
        let enabled = &schema["definitions"]["ObservabilityConfig"]["properties"]["enabled"];
        assert_eq!(enabled["type"], serde_json::json!(["boolean", "null"]));
    }
}
