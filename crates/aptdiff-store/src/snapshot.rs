//! Snapshot load and save operations.
//!
//! Both functions take any [`PackageStateSource`], so a live capture and a
//! copy of a saved directory go through the same code.

use crate::directory::category_path;
use crate::errors::{io_error, Result};
use aptdiff_core::source::read_raw_snapshot;
use aptdiff_core::{log_op_end, log_op_error, log_op_start};
use aptdiff_core::{Category, PackageStateSource, Snapshot};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Read and parse all categories from `source`.
///
/// # Errors
///
/// - `Io` / `ExternalCommand`: the source could not produce a category
/// - `MalformedLine`: captured text did not fit the category layout
pub fn load_from(source: &dyn PackageStateSource) -> Result<Snapshot> {
    let start = Instant::now();
    let label = source.describe();
    log_op_start!("load_snapshot", source = %label);

    match aptdiff_core::load_snapshot(source) {
        Ok(snapshot) => {
            log_op_end!(
                "load_snapshot",
                duration_ms = start.elapsed().as_millis() as u64,
                entry_count = snapshot.entry_count()
            );
            Ok(snapshot)
        }
        Err(e) => {
            log_op_error!(
                "load_snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(e)
        }
    }
}

/// Capture `source` into the snapshot directory `dir`.
///
/// The directory and its parents are created as needed. Every category is
/// read before anything is written, so a failing source leaves existing
/// files alone. Files are then written one by one; an interrupted save can
/// leave a partial directory.
///
/// # Errors
///
/// - `Io`: directory creation or a file write failed
/// - any error from the source
pub fn save_snapshot(dir: &Path, source: &dyn PackageStateSource) -> Result<()> {
    let start = Instant::now();
    log_op_start!("save_snapshot", path = %dir.display(), source = %source.describe());

    let result = write_snapshot_dir(dir, source);
    match &result {
        Ok(()) => {
            log_op_end!(
                "save_snapshot",
                duration_ms = start.elapsed().as_millis() as u64,
                path = %dir.display()
            );
        }
        Err(e) => {
            log_op_error!(
                "save_snapshot",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = %dir.display()
            );
        }
    }
    result
}

fn write_snapshot_dir(dir: &Path, source: &dyn PackageStateSource) -> Result<()> {
    let raw = read_raw_snapshot(source)?;

    fs::create_dir_all(dir).map_err(|e| io_error("create_snapshot_dir", dir, e))?;

    for category in Category::ALL {
        let path = category_path(dir, category);
        let text = raw.get(category).unwrap_or_default();
        fs::write(&path, text).map_err(|e| io_error("write_category", &path, e))?;
        tracing::debug!(
            category = %category,
            path = %path.display(),
            size_bytes = text.len(),
            "wrote snapshot file"
        );
    }

    Ok(())
}
