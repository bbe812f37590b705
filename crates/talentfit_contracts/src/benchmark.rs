#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::Serialize;

use crate::report::DiscProfile;

/// Literal used when a benchmark says nothing about a values category.
pub const VALUE_LEVEL_DEFAULT: &str = "medio";

/// A values preference is either a number (0-10 or 0-100) or a qualitative level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValuePreference {
    Numeric(f64),
    Level(String),
}

impl ValuePreference {
    pub fn default_level() -> Self {
        ValuePreference::Level(VALUE_LEVEL_DEFAULT.to_string())
    }
}

/// Target profile for one job role.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Benchmark {
    /// Attribute name -> target on the native 0-10 scale.
    pub attributes: BTreeMap<String, f64>,
    /// `None` when the role carries no DISC preference at all.
    pub disc: Option<DiscProfile>,
    pub values: BTreeMap<String, ValuePreference>,
}
