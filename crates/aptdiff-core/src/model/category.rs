use crate::errors::AptDiffError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven fixed snapshot sub-records
///
/// Declaration order is the order categories are captured, saved and loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// `dpkg --get-selections`: package → selection state
    Selections,
    /// `dpkg -l` rows: package → {status, version, architecture}
    Seldetails,
    /// `dpkg-query -W`: package → version
    Selversions,
    /// Obsolete conffiles: path → checksum
    Obsconffiles,
    /// Packages marked as automatically installed
    Autos,
    /// Packages marked as manually installed
    Manuals,
    /// Packages on hold
    Holds,
}

/// How a category's raw text is split into key and value fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLayout {
    /// Separator-delimited records with a key column
    Advanced {
        separator: char,
        key_index: usize,
        /// Field indices at or beyond this cutoff are ignored
        max_fields: Option<usize>,
        discard: &'static [usize],
    },
    /// One package name per line, presence only
    Simple,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Selections,
        Category::Seldetails,
        Category::Selversions,
        Category::Obsconffiles,
        Category::Autos,
        Category::Manuals,
        Category::Holds,
    ];

    /// Categories dropped by summary mode
    pub const DETAIL: [Category; 2] = [Category::Seldetails, Category::Selversions];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Selections => "selections",
            Category::Seldetails => "seldetails",
            Category::Selversions => "selversions",
            Category::Obsconffiles => "obsconffiles",
            Category::Autos => "autos",
            Category::Manuals => "manuals",
            Category::Holds => "holds",
        }
    }

    pub fn layout(&self) -> FieldLayout {
        match self {
            Category::Selections | Category::Selversions => FieldLayout::Advanced {
                separator: '\t',
                key_index: 0,
                max_fields: None,
                discard: &[],
            },
            Category::Seldetails => FieldLayout::Advanced {
                separator: ' ',
                key_index: 1,
                max_fields: Some(4),
                discard: &[],
            },
            Category::Obsconffiles => FieldLayout::Advanced {
                separator: ' ',
                key_index: 0,
                max_fields: None,
                discard: &[2],
            },
            Category::Autos | Category::Manuals | Category::Holds => FieldLayout::Simple,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AptDiffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AptDiffError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "packages".parse::<Category>().unwrap_err();
        assert_eq!(
            err,
            AptDiffError::UnknownCategory {
                name: "packages".to_string()
            }
        );
    }

    #[test]
    fn test_mark_categories_are_simple() {
        assert_eq!(Category::Autos.layout(), FieldLayout::Simple);
        assert_eq!(Category::Manuals.layout(), FieldLayout::Simple);
        assert_eq!(Category::Holds.layout(), FieldLayout::Simple);
    }

    #[test]
    fn test_seldetails_keys_on_second_field() {
        match Category::Seldetails.layout() {
            FieldLayout::Advanced {
                separator,
                key_index,
                max_fields,
                ..
            } => {
                assert_eq!(separator, ' ');
                assert_eq!(key_index, 1);
                assert_eq!(max_fields, Some(4));
            }
            FieldLayout::Simple => panic!("seldetails must be an advanced layout"),
        }
    }
}
