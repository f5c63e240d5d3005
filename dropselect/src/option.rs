//! Option values offered by a dropdown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The discriminating key of an option, either numeric or textual.
///
/// Deserializes untagged, so `value = 3` and `value = "three"` both work in
/// config files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Int(i64),
    Str(String),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

/// A single selectable item: display text plus a value key.
///
/// Uniqueness of `value` within a list is assumed but not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: OptionValue,
}

impl SelectOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// Whether two options share the same value key, regardless of label.
    pub fn same_value(&self, other: &SelectOption) -> bool {
        self.value == other.value
    }
}
