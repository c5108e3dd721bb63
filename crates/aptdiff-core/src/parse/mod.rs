//! Snapshot parser
//!
//! Turns the line-oriented output of the package queries into category maps.
//!
//! - Advanced layouts split each line on a separator (runs collapse, ends
//!   are trimmed) and key the record on one column.
//! - Simple layouts take each line verbatim as a package name.
//!
//! Blank lines are skipped, so a trailing newline never adds an entry.

use crate::errors::{AptDiffError, Result};
use crate::model::{Category, CategoryMap, FieldLayout, RawSnapshot, Snapshot, Value};

/// Parse one category's raw text using that category's layout
///
/// # Errors
///
/// - `MalformedLine`: a record has fewer fields than the key index needs
pub fn parse_category(category: Category, text: &str) -> Result<CategoryMap> {
    let map = parse_with_layout(category.as_str(), category.layout(), text)?;
    tracing::debug!(category = %category, entry_count = map.len(), "parsed category");
    Ok(map)
}

/// Parse raw text with an explicit layout
///
/// `name` is only used to label errors.
///
/// # Errors
///
/// - `MalformedLine`: a record has fewer fields than the key index needs
pub fn parse_with_layout(name: &str, layout: FieldLayout, text: &str) -> Result<CategoryMap> {
    match layout {
        FieldLayout::Simple => Ok(parse_simple(text)),
        FieldLayout::Advanced {
            separator,
            key_index,
            max_fields,
            discard,
        } => {
            let mut map = CategoryMap::new();
            for (idx, line) in text.lines().enumerate() {
                let fields = split_record(line, separator);
                if fields.is_empty() {
                    continue;
                }
                if fields.len() <= key_index {
                    return Err(AptDiffError::MalformedLine {
                        category: name.to_string(),
                        line: idx + 1,
                        expected: key_index + 1,
                        found: fields.len(),
                    }
                    .into());
                }

                let key = fields[key_index].to_string();
                let rest: Vec<String> = fields
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != key_index && !discard.contains(i))
                    .filter(|(i, _)| max_fields.is_none_or(|max| *i < max))
                    .map(|(_, f)| f.to_string())
                    .collect();

                map.insert(key, Value::from_fields(rest));
            }
            Ok(map)
        }
    }
}

/// Parse every category present in a raw snapshot
///
/// # Errors
///
/// - `MalformedLine`: propagated from the first category that fails
pub fn parse_snapshot(raw: &RawSnapshot) -> Result<Snapshot> {
    let mut snapshot = Snapshot::new();
    for (category, text) in raw.iter() {
        snapshot.insert(category, parse_category(category, text)?);
    }
    Ok(snapshot)
}

fn parse_simple(text: &str) -> CategoryMap {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|name| (name.to_string(), Value::Null))
        .collect()
}

/// Split on `separator`, treating runs as one and ignoring leading/trailing
/// separators. A separator-only line yields no fields.
fn split_record(line: &str, separator: char) -> Vec<&str> {
    line.trim_matches(separator)
        .split(separator)
        .filter(|field| !field.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExErrorKind;

    #[test]
    fn test_split_record_collapses_runs() {
        assert_eq!(
            split_record("vim\t\t\t\t\tinstall", '\t'),
            vec!["vim", "install"]
        );
        assert_eq!(split_record("  a  b ", ' '), vec!["a", "b"]);
        assert!(split_record("\t\t", '\t').is_empty());
    }

    #[test]
    fn test_selections_scalar_values() {
        let map = parse_category(
            Category::Selections,
            "vim\t\t\t\t\tinstall\nnano\t\t\t\t\thold\n",
        )
        .unwrap();

        assert_eq!(map.get("vim"), Some(&Value::scalar("install")));
        assert_eq!(map.get("nano"), Some(&Value::scalar("hold")));
    }

    #[test]
    fn test_seldetails_drops_description_columns() {
        let text = "ii  vim   2:9.0.1378-2  amd64  Vi IMproved - enhanced vi editor\n";
        let map = parse_category(Category::Seldetails, text).unwrap();

        let expected: std::collections::BTreeSet<String> = ["ii", "2:9.0.1378-2", "amd64"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(map.get("vim"), Some(&Value::Set(expected)));
    }

    #[test]
    fn test_obsconffiles_keep_checksum() {
        let text = " /etc/old.conf 0123456789abcdef obsolete\n";
        let map = parse_category(Category::Obsconffiles, text).unwrap();
        assert_eq!(
            map.get("/etc/old.conf"),
            Some(&Value::scalar("0123456789abcdef"))
        );
    }

    #[test]
    fn test_key_only_record_is_null() {
        let map = parse_category(Category::Selversions, "virtual-pkg\n").unwrap();
        assert_eq!(map.get("virtual-pkg"), Some(&Value::Null));
    }

    #[test]
    fn test_simple_lines_are_presence_only() {
        let map = parse_category(Category::Autos, "libc6\nzlib1g\n\n").unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.values().all(|v| *v == Value::Null));
    }

    #[test]
    fn test_simple_lines_are_kept_verbatim() {
        let map = parse_category(Category::Holds, "vim \n nano\n").unwrap();
        assert!(map.contains_key("vim "));
        assert!(map.contains_key(" nano"));
    }

    #[test]
    fn test_trailing_newline_makes_no_difference() {
        for category in Category::ALL {
            let text = match category.layout() {
                FieldLayout::Simple => "a\nb",
                FieldLayout::Advanced { .. } => "ii a 1.0 amd64\nii b 2.0 amd64",
            };
            let with = parse_category(category, &format!("{}\n", text)).unwrap();
            let without = parse_category(category, text).unwrap();
            assert_eq!(with, without, "category {}", category);
        }
    }

    #[test]
    fn test_empty_text_yields_empty_map() {
        for category in Category::ALL {
            assert!(parse_category(category, "").unwrap().is_empty());
        }
    }

    #[test]
    fn test_short_record_is_malformed() {
        let err = parse_category(Category::Seldetails, "ii vim 1.0 amd64\nii\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MalformedLine);
        assert_eq!(err.category(), Some("seldetails"));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_parse_snapshot_covers_each_raw_category() {
        let mut raw = RawSnapshot::new();
        raw.insert(Category::Holds, "vim\n");
        raw.insert(Category::Selections, "vim\thold\n");

        let snapshot = parse_snapshot(&raw).unwrap();
        assert_eq!(snapshot.categories().count(), 2);
        assert!(snapshot.get(Category::Holds).unwrap().contains_key("vim"));
    }
}
