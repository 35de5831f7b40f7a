// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Text fields that authors often write as bare numbers.
//!
//! `kubernetes_version: 1.30` is a float to a YAML resolver, but the value the stack
//! needs is the text `1.30`. Fields tagged with [`scalar_text`] take any scalar and keep
//! its source text when the deserializer provides it. `null` and `~` read as empty.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

pub fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<ScalarText>::deserialize(deserializer)?;
    Ok(text.map(|t| t.0).unwrap_or_default())
}

struct ScalarText(String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ScalarTextVisitor).map(ScalarText)
    }
}

struct ScalarTextVisitor;

impl Visitor<'_> for ScalarTextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or boolean")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{K8sWorkersConfig, RdsConfig, Workload};

    #[test]
    fn test_bare_numbers_keep_their_text() {
        let k8s: K8sWorkersConfig = serde_yaml::from_str("kubernetes_version: 1.30\n").unwrap();
        assert_eq!(k8s.kubernetes_version, "1.30");

        let rds: RdsConfig =
            serde_yaml::from_str("engine_version: 16.3\npassword: 0123\nusername: true\n").unwrap();
        assert_eq!(rds.engine_version, "16.3");
        assert_eq!(rds.password, "0123");
        assert_eq!(rds.username, "true");
    }

    #[test]
    fn test_null_reads_as_empty() {
        let workload: Workload = serde_yaml::from_str("type: ec2-app\nversion: ~\n").unwrap();
        assert_eq!(workload.version, "");

        let k8s: K8sWorkersConfig = serde_yaml::from_str("kubernetes_version:\n").unwrap();
        assert_eq!(k8s.kubernetes_version, "");
    }

    #[test]
    fn test_quoted_values_unchanged() {
        let k8s: K8sWorkersConfig = serde_yaml::from_str("kubernetes_version: \"1.29\"\n").unwrap();
        assert_eq!(k8s.kubernetes_version, "1.29");
    }

    #[test]
    fn test_collections_are_rejected() {
        assert!(serde_yaml::from_str::<Workload>("version: [1, 2]\n").is_err());
    }

    #[test]
    fn test_json_numbers_are_not_strings() {
        // serde_json only hands strings to a string request
        assert!(serde_json::from_str::<Workload>(r#"{"version": 1}"#).is_err());
        let workload: Workload = serde_json::from_str(r#"{"version": "v1"}"#).unwrap();
        assert_eq!(workload.version, "v1");
    }
}
