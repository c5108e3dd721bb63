//! Package state sources
//!
//! A [`PackageStateSource`] yields the raw text of one category at a time.
//! The live system and saved directories implement it in `aptdiff-store`;
//! [`CannedSource`] serves fixed text for tests and tooling.

use crate::errors::Result;
use crate::model::{Category, RawSnapshot, Snapshot};
use crate::parse::parse_snapshot;
use std::collections::BTreeMap;

/// Capability to read the raw text of a snapshot category
pub trait PackageStateSource {
    /// Short description for console and log output
    fn describe(&self) -> String;

    /// Raw captured text for one category
    ///
    /// # Errors
    ///
    /// Implementation specific: I/O failures, or a query that cannot be run.
    fn read_category(&self, category: Category) -> Result<String>;
}

/// Read all seven categories, in capture order
///
/// # Errors
///
/// Propagates the first failure from the source.
pub fn read_raw_snapshot(source: &dyn PackageStateSource) -> Result<RawSnapshot> {
    let mut raw = RawSnapshot::new();
    for category in Category::ALL {
        raw.insert(category, source.read_category(category)?);
    }
    Ok(raw)
}

/// Read and parse a full snapshot from a source
///
/// # Errors
///
/// Source failures, or `MalformedLine` from the parser.
pub fn load_snapshot(source: &dyn PackageStateSource) -> Result<Snapshot> {
    let raw = read_raw_snapshot(source)?;
    let snapshot = parse_snapshot(&raw)?;
    tracing::debug!(
        source = %source.describe(),
        entry_count = snapshot.entry_count(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// In-memory source with fixed text per category
///
/// Categories that were never set read as empty text, like a query that
/// printed nothing.
#[derive(Debug, Clone, Default)]
pub struct CannedSource {
    label: String,
    texts: BTreeMap<Category, String>,
}

impl CannedSource {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            texts: BTreeMap::new(),
        }
    }

    /// Builder-style setter for one category
    pub fn with(mut self, category: Category, text: impl Into<String>) -> Self {
        self.texts.insert(category, text.into());
        self
    }

    /// Set a category by name
    ///
    /// # Errors
    ///
    /// - `UnknownCategory`: `name` is not a known category
    pub fn set(&mut self, name: &str, text: impl Into<String>) -> Result<()> {
        let category: Category = name.parse()?;
        self.texts.insert(category, text.into());
        Ok(())
    }
}

impl PackageStateSource for CannedSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn read_category(&self, category: Category) -> Result<String> {
        Ok(self.texts.get(&category).cloned().unwrap_or_default())
    }
}
