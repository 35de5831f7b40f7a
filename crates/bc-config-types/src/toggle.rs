// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Tri-state boolean used for optional feature switches.
//!
//! Several document keys must distinguish "the user did not say" from "the user said
//! false": an unset switch receives a computed default during validation, while an
//! explicit `false` must survive untouched. In YAML a `Toggle` is written as a plain
//! boolean; an absent key or `null` reads as [`Toggle::Unset`].

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Toggle {
    /// Not present in the document
    #[default]
    Unset,
    On,
    Off,
}

impl Toggle {
    pub fn is_unset(&self) -> bool {
        matches!(self, Toggle::Unset)
    }

    /// True only for an explicit or defaulted `On`. Unset counts as disabled.
    pub fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }

    /// Fill an unset switch with `default`; explicit values are left alone.
    pub fn default_to(&mut self, default: bool) {
        if self.is_unset() {
            *self = Toggle::from(default);
        }
    }
}

impl From<bool> for Toggle {
    fn from(value: bool) -> Self {
        if value {
            Toggle::On
        } else {
            Toggle::Off
        }
    }
}

impl From<Option<bool>> for Toggle {
    fn from(value: Option<bool>) -> Self {
        value.map(Toggle::from).unwrap_or(Toggle::Unset)
    }
}

impl From<Toggle> for Option<bool> {
    fn from(value: Toggle) -> Self {
        match value {
            Toggle::Unset => None,
            Toggle::On => Some(true),
            Toggle::Off => Some(false),
        }
    }
}

impl std::fmt::Display for Toggle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toggle::Unset => write!(f, "unset"),
            Toggle::On => write!(f, "true"),
            Toggle::Off => write!(f, "false"),
        }
    }
}

impl JsonSchema for Toggle {
    fn is_referenceable() -> bool {
        false
    }

    fn schema_name() -> String {
        "Toggle".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Option<bool>>::json_schema(generator)
    }
}
