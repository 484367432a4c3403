//! Typed configuration values.

use serde::{Deserialize, Serialize};

/// A single configuration value.
///
/// Values keep their natural type until they are rendered into the
/// generated documents; rendering rules are fixed per variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl ConfigValue {
    /// Render the value into its textual form for the output documents.
    ///
    /// Lists render JSON-style (`["0.0.0.0/0"]`), booleans as the
    /// lowercase literals, integers as bare decimal digits.
    pub fn render(&self) -> String {
        match self {
            ConfigValue::Str(s) => s.clone(),
            ConfigValue::Int(i) => i.to_string(),
            ConfigValue::Bool(b) => b.to_string(),
            ConfigValue::List(items) => {
                serde_json::to_string(items).expect("a list of strings always serializes")
            }
        }
    }

    /// Whether this value is the empty string.
    pub fn is_empty_str(&self) -> bool {
        matches!(self, ConfigValue::Str(s) if s.is_empty())
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Str(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Str(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Int(i)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(items: Vec<&str>) -> Self {
        ConfigValue::List(items.into_iter().map(String::from).collect())
    }
}
