//! aptdiff core - snapshot model, parsing, filtering and differencing
//!
//! This crate holds everything that does not touch the live system or the
//! filesystem:
//! - Snapshot data model (categories, package values, snapshots)
//! - Parser for captured dpkg / apt-mark output
//! - Normalizer/filter that folds version churn out of package names
//! - Recursive differential engine and the mark-change post-filter
//! - Error and logging facilities shared by the other crates

pub mod diff;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod parse;
pub mod source;

pub use aptdiff_core_types::schema;

// Re-export commonly used types
pub use diff::{diff, diff_snapshots, reclassify_mark_changes, Change, DiffNode};
pub use errors::{AptDiffError, ExError, ExErrorKind, Result};
pub use filter::filter_snapshot;
pub use model::{Category, CategoryMap, RawSnapshot, Snapshot, Value};
pub use source::{load_snapshot, CannedSource, PackageStateSource};
