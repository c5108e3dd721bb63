//! Differential computation engine.
//!
//! The core entry point is [`diff`], which accepts two values that must
//! both be mappings and produces a [`DiffNode`].

use crate::diff::model::{Change, DiffNode};
use crate::errors::{AptDiffError, Result};
use crate::model::{Snapshot, Value};
use std::collections::BTreeMap;

/// Compare two mappings
///
/// # Errors
///
/// - `TypeMismatch`: either side is not a mapping
pub fn diff(from: &Value, to: &Value) -> Result<DiffNode> {
    let from_map = expect_map("from", from)?;
    let to_map = expect_map("to", to)?;
    Ok(diff_maps(from_map, to_map))
}

/// Compare two mappings that are already known to be mappings
///
/// Values that differ recurse when both sides are mappings and are
/// recorded as `_from`/`_to` otherwise. Equal values are left out.
pub fn diff_maps(from: &BTreeMap<String, Value>, to: &BTreeMap<String, Value>) -> DiffNode {
    let mut node = DiffNode::default();

    for (key, to_value) in to {
        match from.get(key) {
            None => {
                node.add.insert(key.clone(), to_value.clone());
            }
            Some(from_value) if from_value != to_value => {
                let change = match (from_value, to_value) {
                    (Value::Map(f), Value::Map(t)) => Change::Nested {
                        diff: diff_maps(f, t),
                    },
                    _ => Change::Replaced {
                        from: from_value.clone(),
                        to: to_value.clone(),
                    },
                };
                node.change.insert(key.clone(), change);
            }
            Some(_) => {}
        }
    }

    for (key, from_value) in from {
        if !to.contains_key(key) {
            node.delete.insert(key.clone(), from_value.clone());
        }
    }

    node
}

/// Compare two snapshots category by category
///
/// A category missing on one side shows up as a whole-category add or
/// delete.
pub fn diff_snapshots(from: &Snapshot, to: &Snapshot) -> DiffNode {
    let node = diff_maps(&from.to_map(), &to.to_map());
    tracing::debug!(
        add_count = node.add.len(),
        delete_count = node.delete.len(),
        change_count = node.change.len(),
        "diffed snapshots"
    );
    node
}

fn expect_map<'a>(side: &str, value: &'a Value) -> Result<&'a BTreeMap<String, Value>> {
    value.as_map().ok_or_else(|| {
        AptDiffError::NotAMapping {
            side: side.to_string(),
            found: value.kind_name().to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;
    use crate::model::Category;

    fn map(entries: &[(&str, Value)]) -> BTreeMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_add_delete_change_are_disjoint() {
        let from = map(&[
            ("kept", Value::Null),
            ("gone", Value::Null),
            ("bumped", Value::scalar("1.0")),
        ]);
        let to = map(&[
            ("kept", Value::Null),
            ("new", Value::scalar("2.0")),
            ("bumped", Value::scalar("1.1")),
        ]);

        let node = diff_maps(&from, &to);

        assert_eq!(node.add, map(&[("new", Value::scalar("2.0"))]));
        assert_eq!(node.delete, map(&[("gone", Value::Null)]));
        assert_eq!(
            node.change.get("bumped"),
            Some(&Change::Replaced {
                from: Value::scalar("1.0"),
                to: Value::scalar("1.1"),
            })
        );
        assert_eq!(node.change.len(), 1);
    }

    #[test]
    fn test_nested_maps_recurse() {
        let from = map(&[("autos", Value::Map(map(&[("foo", Value::Null)])))]);
        let to = map(&[("autos", Value::Map(map(&[("bar", Value::Null)])))]);

        let node = diff_maps(&from, &to);
        let autos = node.nested("autos").unwrap();

        assert!(autos.add.contains_key("bar"));
        assert!(autos.delete.contains_key("foo"));
    }

    #[test]
    fn test_mapping_against_scalar_is_replacement() {
        let from = map(&[("x", Value::Map(BTreeMap::new()))]);
        let to = map(&[("x", Value::scalar("flat"))]);

        let node = diff_maps(&from, &to);
        assert!(matches!(node.change.get("x"), Some(Change::Replaced { .. })));
    }

    #[test]
    fn test_set_equality_ignores_insertion_order() {
        let a = Value::from_fields(vec!["ii".into(), "1.0".into(), "amd64".into()]);
        let b = Value::from_fields(vec!["amd64".into(), "ii".into(), "1.0".into()]);
        let node = diff_maps(&map(&[("vim", a)]), &map(&[("vim", b)]));
        assert!(node.is_empty());
    }

    #[test]
    fn test_null_against_missing_is_add() {
        let node = diff_maps(&BTreeMap::new(), &map(&[("foo", Value::Null)]));
        assert_eq!(node.add.get("foo"), Some(&Value::Null));
        assert!(node.change.is_empty());
    }

    #[test]
    fn test_non_mapping_input_is_type_error() {
        let err = diff(&Value::scalar("x"), &Value::Map(BTreeMap::new())).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::TypeMismatch);

        let err = diff(&Value::Map(BTreeMap::new()), &Value::Null).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::TypeMismatch);
        assert!(err.message().contains("to"));
    }

    #[test]
    fn test_snapshot_missing_category_is_whole_delete() {
        let mut from = Snapshot::new();
        from.insert(Category::Holds, map(&[("vim", Value::Null)]));
        let to = Snapshot::new();

        let node = diff_snapshots(&from, &to);
        assert_eq!(
            node.delete.get("holds"),
            Some(&Value::Map(map(&[("vim", Value::Null)])))
        );
    }
}
