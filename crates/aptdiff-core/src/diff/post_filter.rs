//! Mark-change reclassification.
//!
//! A package moving between the automatic and manual marks shows up as a
//! delete in one category and an add in the other. This pass folds such
//! pairs into a marker on the `manuals` side.

use crate::diff::model::{Change, DiffNode};
use crate::model::{Category, Value};

/// Marker for a package that went from automatic to manual
pub const WAS_AUTO: &str = "Was Auto";
/// Marker for a package that went from manual to automatic
pub const NOW_AUTO: &str = "Now Auto";

/// Reclassify auto/manual mark flips in a snapshot-level diff
///
/// No-op unless `_change.autos` holds a nested diff. Nothing moves when
/// `_change.manuals` is absent. The `autos` entry stays even if emptied.
pub fn reclassify_mark_changes(node: &mut DiffNode) {
    let autos_key = Category::Autos.as_str();
    let mut autos = match node.change.remove(autos_key) {
        Some(Change::Nested { diff }) => diff,
        Some(other) => {
            node.change.insert(autos_key.to_string(), other);
            return;
        }
        None => return,
    };

    if let Some(manuals) = node.nested_mut(Category::Manuals.as_str()) {
        let now_manual: Vec<String> = autos
            .delete
            .keys()
            .filter(|package| manuals.add.contains_key(*package))
            .cloned()
            .collect();
        for package in now_manual {
            autos.delete.remove(&package);
            manuals.add.insert(package, Value::scalar(WAS_AUTO));
        }

        let now_auto: Vec<String> = autos
            .add
            .keys()
            .filter(|package| manuals.delete.contains_key(*package))
            .cloned()
            .collect();
        for package in now_auto {
            autos.add.remove(&package);
            manuals.delete.insert(package, Value::scalar(NOW_AUTO));
        }
    }

    node.change
        .insert(autos_key.to_string(), Change::Nested { diff: autos });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::engine::diff_snapshots;
    use crate::model::{CategoryMap, Snapshot};

    fn marks(names: &[&str]) -> CategoryMap {
        names.iter().map(|n| (n.to_string(), Value::Null)).collect()
    }

    fn snapshot(autos: &[&str], manuals: &[&str]) -> Snapshot {
        let mut s = Snapshot::new();
        s.insert(Category::Autos, marks(autos));
        s.insert(Category::Manuals, marks(manuals));
        s
    }

    #[test]
    fn test_auto_to_manual_becomes_was_auto() {
        let mut node = diff_snapshots(&snapshot(&["foo"], &[]), &snapshot(&[], &["foo"]));

        reclassify_mark_changes(&mut node);

        assert!(node.nested("autos").unwrap().delete.is_empty());
        assert_eq!(
            node.nested("manuals").unwrap().add.get("foo"),
            Some(&Value::scalar(WAS_AUTO))
        );
    }

    #[test]
    fn test_manual_to_auto_becomes_now_auto() {
        let mut node = diff_snapshots(&snapshot(&[], &["bar"]), &snapshot(&["bar"], &[]));

        reclassify_mark_changes(&mut node);

        assert!(node.nested("autos").unwrap().add.is_empty());
        assert_eq!(
            node.nested("manuals").unwrap().delete.get("bar"),
            Some(&Value::scalar(NOW_AUTO))
        );
    }

    #[test]
    fn test_real_removals_are_left_alone() {
        let mut node = diff_snapshots(
            &snapshot(&["gone", "foo"], &["keep"]),
            &snapshot(&[], &["keep", "foo"]),
        );

        reclassify_mark_changes(&mut node);

        let autos = node.nested("autos").unwrap();
        assert!(autos.delete.contains_key("gone"));
        assert!(!autos.delete.contains_key("foo"));
    }

    #[test]
    fn test_without_autos_change_is_noop() {
        let mut node = diff_snapshots(&snapshot(&["a"], &[]), &snapshot(&["a"], &["b"]));
        let before = node.clone();

        reclassify_mark_changes(&mut node);

        assert_eq!(node, before);
    }

    #[test]
    fn test_without_manuals_change_keeps_autos() {
        let mut node = diff_snapshots(&snapshot(&["a"], &["m"]), &snapshot(&[], &["m"]));
        let before = node.clone();

        reclassify_mark_changes(&mut node);

        assert_eq!(node, before);
    }
}
