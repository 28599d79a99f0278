//! Generated scalar values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One generated cell.
///
/// Serializes as a bare JSON scalar (`null`, `true`, `42`, `3.5`, `"text"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            GeneratedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(i) => Some(*i as f64),
            GeneratedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratedValue::Null => f.write_str("null"),
            GeneratedValue::Bool(b) => write!(f, "{b}"),
            GeneratedValue::Int(i) => write!(f, "{i}"),
            GeneratedValue::Float(v) => write!(f, "{v}"),
            GeneratedValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for GeneratedValue {
    fn from(value: bool) -> Self {
        GeneratedValue::Bool(value)
    }
}

impl From<i64> for GeneratedValue {
    fn from(value: i64) -> Self {
        GeneratedValue::Int(value)
    }
}

impl From<f64> for GeneratedValue {
    fn from(value: f64) -> Self {
        GeneratedValue::Float(value)
    }
}

impl From<String> for GeneratedValue {
    fn from(value: String) -> Self {
        GeneratedValue::String(value)
    }
}

impl From<&str> for GeneratedValue {
    fn from(value: &str) -> Self {
        GeneratedValue::String(value.to_string())
    }
}
