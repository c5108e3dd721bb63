//! Package values and nested mappings.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A value in a snapshot tree
///
/// Category maps only ever hold `Null`, `Scalar` or `Set`. `Map` is what
/// lets the same differ run over a whole snapshot (category → category map).
///
/// Serializes untagged: `null`, a string, a sorted array, or an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Scalar(String),
    Set(BTreeSet<String>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Shape the non-key fields of a record: none → `Null`, one → `Scalar`,
    /// more → `Set`.
    pub fn from_fields(mut fields: Vec<String>) -> Self {
        match fields.len() {
            0 => Value::Null,
            1 => Value::Scalar(fields.remove(0)),
            _ => Value::Set(fields.into_iter().collect()),
        }
    }

    pub fn scalar(s: impl Into<String>) -> Self {
        Value::Scalar(s.into())
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Short shape name used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Scalar(_) => "scalar",
            Value::Set(_) => "set",
            Value::Map(_) => "mapping",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}
