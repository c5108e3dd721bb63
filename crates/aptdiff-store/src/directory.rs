//! Snapshot directories
//!
//! A saved snapshot is a directory holding one file per category, named
//! after the category, with the verbatim output of its query.

use crate::errors::{io_error, Result};
use aptdiff_core::{Category, PackageStateSource};
use std::fs;
use std::path::{Path, PathBuf};

/// File holding one category inside a snapshot directory
pub fn category_path(dir: &Path, category: Category) -> PathBuf {
    dir.join(category.as_str())
}

/// Source reading a previously saved snapshot directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PackageStateSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn read_category(&self, category: Category) -> Result<String> {
        let path = category_path(&self.root, category);
        let text = fs::read_to_string(&path).map_err(|e| {
            io_error("read_category", &path, e).with_category(category.as_str())
        })?;
        tracing::debug!(
            category = %category,
            path = %path.display(),
            size_bytes = text.len(),
            "read snapshot file"
        );
        Ok(text)
    }
}
