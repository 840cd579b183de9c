//! Declared setting types and the values they admit.

use crate::xs::CrossSectionSettings;
use serde::Serialize;
use std::fmt;

/// The declared type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingType {
    Bool,
    Int,
    Float,
    Str,
    FloatList,
    /// A list of floats, or null.
    OptionalFloatList,
    /// A scalar float, a list of floats, or null.
    FloatOrList,
    CrossSections,
}

impl SettingType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::FloatList => "float list",
            Self::OptionalFloatList => "float list or null",
            Self::FloatOrList => "float, float list, or null",
            Self::CrossSections => "cross sections",
        }
    }

    /// Check `value` against this type.
    ///
    /// Integers are widened where a float is admitted. On mismatch the kind
    /// of the rejected value is returned.
    pub fn coerce(self, value: SettingValue) -> Result<SettingValue, &'static str> {
        use SettingValue as V;
        match (self, value) {
            (Self::Bool, v @ V::Bool(_))
            | (Self::Int, v @ V::Int(_))
            | (Self::Float, v @ V::Float(_))
            | (Self::Str, v @ V::Str(_))
            | (Self::FloatList, v @ V::FloatList(_))
            | (Self::OptionalFloatList, v @ (V::Null | V::FloatList(_)))
            | (Self::FloatOrList, v @ (V::Null | V::Float(_) | V::FloatList(_)))
            | (Self::CrossSections, v @ V::CrossSections(_)) => Ok(v),
            (Self::Float | Self::FloatOrList, V::Int(i)) => Ok(V::Float(i as f64)),
            (_, other) => Err(other.kind()),
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A setting value.
///
/// Serializes as its bare payload, with `Null` as a YAML null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    FloatList(Vec<f64>),
    CrossSections(CrossSectionSettings),
}

impl SettingValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::FloatList(_) => "float list",
            Self::CrossSections(_) => "cross sections",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::FloatList(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item:?}")?;
                }
                f.write_str("]")
            }
            Self::CrossSections(xs) => write!(f, "<{} cross-section IDs>", xs.len()),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for SettingValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<f64>> for SettingValue {
    fn from(value: Vec<f64>) -> Self {
        Self::FloatList(value)
    }
}

impl From<CrossSectionSettings> for SettingValue {
    fn from(value: CrossSectionSettings) -> Self {
        Self::CrossSections(value)
    }
}

impl<T: Into<SettingValue>> From<Option<T>> for SettingValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
