//! Differential renderers and counts.

use crate::diff::model::{Change, DiffNode};
use crate::errors::{AptDiffError, Result};
use crate::model::Value;
use serde::Serialize;
use std::collections::BTreeMap;

const INDENT: &str = "  ";

/// Render a differential as pretty-printed JSON
///
/// # Errors
///
/// - `Serialization`: JSON encoding failed
pub fn render_json(node: &DiffNode) -> Result<String> {
    serde_json::to_string_pretty(node).map_err(|e| AptDiffError::from(e).into())
}

/// Render a differential as an indented tree, one key per line
///
/// Empty mappings print inline as `{}`, sets as `[a, b]`.
pub fn render_text(node: &DiffNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &DiffNode, depth: usize) {
    write_entries(out, "_add", &node.add, depth);
    write_entries(out, "_delete", &node.delete, depth);

    let pad = INDENT.repeat(depth);
    if node.change.is_empty() {
        out.push_str(&format!("{pad}_change: {{}}\n"));
        return;
    }
    out.push_str(&format!("{pad}_change:\n"));
    let inner = INDENT.repeat(depth + 1);
    for (key, change) in &node.change {
        out.push_str(&format!("{inner}{key}:\n"));
        match change {
            Change::Nested { diff } => {
                out.push_str(&format!("{inner}{INDENT}_diff:\n"));
                write_node(out, diff, depth + 3);
            }
            Change::Replaced { from, to } => {
                write_value(out, "_from", from, depth + 2);
                write_value(out, "_to", to, depth + 2);
            }
        }
    }
}

fn write_entries(out: &mut String, label: &str, entries: &BTreeMap<String, Value>, depth: usize) {
    let pad = INDENT.repeat(depth);
    if entries.is_empty() {
        out.push_str(&format!("{pad}{label}: {{}}\n"));
        return;
    }
    out.push_str(&format!("{pad}{label}:\n"));
    for (key, value) in entries {
        write_value(out, key, value, depth + 1);
    }
}

fn write_value(out: &mut String, key: &str, value: &Value, depth: usize) {
    let pad = INDENT.repeat(depth);
    match value {
        Value::Null => out.push_str(&format!("{pad}{key}: null\n")),
        Value::Scalar(s) => out.push_str(&format!("{pad}{key}: {s}\n")),
        Value::Set(items) => {
            let joined = items.iter().cloned().collect::<Vec<_>>().join(", ");
            out.push_str(&format!("{pad}{key}: [{joined}]\n"));
        }
        Value::Map(map) => write_entries(out, key, map, depth),
    }
}

/// Entry counts for one category of a snapshot-level differential
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CategoryStats {
    pub adds: usize,
    pub deletes: usize,
    pub changes: usize,
}

impl CategoryStats {
    pub fn total(&self) -> usize {
        self.adds + self.deletes + self.changes
    }
}

/// Per-category counts for a snapshot-level differential
///
/// A category present on one side only counts all of its entries as adds
/// or deletes.
pub fn diff_stats(node: &DiffNode) -> BTreeMap<String, CategoryStats> {
    let mut stats: BTreeMap<String, CategoryStats> = BTreeMap::new();

    for (category, change) in &node.change {
        if let Change::Nested { diff } = change {
            stats.insert(
                category.clone(),
                CategoryStats {
                    adds: diff.add.len(),
                    deletes: diff.delete.len(),
                    changes: diff.change.len(),
                },
            );
        }
    }
    for (category, value) in &node.add {
        let adds = value.as_map().map_or(1, BTreeMap::len);
        stats.entry(category.clone()).or_default().adds += adds;
    }
    for (category, value) in &node.delete {
        let deletes = value.as_map().map_or(1, BTreeMap::len);
        stats.entry(category.clone()).or_default().deletes += deletes;
    }

    stats
}
