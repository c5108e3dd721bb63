//! Differential output types.
//!
//! Serialized field names match the report format: `_add`, `_delete`,
//! `_change`, and inside a change `_diff` or `_from`/`_to`.

use crate::model::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Difference between two mappings at one level
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffNode {
    /// Keys only in the target, with the target value
    #[serde(rename = "_add")]
    pub add: BTreeMap<String, Value>,
    /// Keys only in the source, with the source value
    #[serde(rename = "_delete")]
    pub delete: BTreeMap<String, Value>,
    /// Keys in both with differing values
    #[serde(rename = "_change")]
    pub change: BTreeMap<String, Change>,
}

/// How a key present on both sides changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Change {
    /// Both sides are mappings; the nested difference
    Nested {
        #[serde(rename = "_diff")]
        diff: DiffNode,
    },
    /// At least one side is not a mapping
    Replaced {
        #[serde(rename = "_from")]
        from: Value,
        #[serde(rename = "_to")]
        to: Value,
    },
}

impl DiffNode {
    /// True when nothing was added, deleted or changed
    pub fn is_empty(&self) -> bool {
        self.add.is_empty() && self.delete.is_empty() && self.change.is_empty()
    }

    /// Nested node under `_change[key]`, if that change is a nested diff
    pub fn nested(&self, key: &str) -> Option<&DiffNode> {
        match self.change.get(key) {
            Some(Change::Nested { diff }) => Some(diff),
            _ => None,
        }
    }

    pub fn nested_mut(&mut self, key: &str) -> Option<&mut DiffNode> {
        match self.change.get_mut(key) {
            Some(Change::Nested { diff }) => Some(diff),
            _ => None,
        }
    }
}
