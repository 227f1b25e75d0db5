//! Serde shapes of the config file.
//!
//! Enumerated fields are kept as strings here so that unknown values can be
//! reported with a span instead of a bare deserializer message.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub languages: Vec<RawTarget>,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
}

/// A target is either a bare language name or a table with overrides.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum RawTarget {
    Name(String),
    Detailed {
        language: String,
        #[serde(default)]
        file_name: Option<String>,
        #[serde(default)]
        type_name: Option<String>,
        #[serde(default)]
        property_naming: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: RawValue,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub naming_convention: Option<String>,
    #[serde(default)]
    pub hidden: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<RawValue> for bear_core::PropertyValue {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Bool(b) => bear_core::PropertyValue::Bool(b),
            RawValue::Int(i) => bear_core::PropertyValue::Int(i),
            RawValue::Float(f) => bear_core::PropertyValue::Float(f),
            RawValue::String(s) => bear_core::PropertyValue::String(s),
        }
    }
}
