//! Error handling for aptdiff-store
//!
//! Wraps aptdiff-core ExError with store-specific helpers

use aptdiff_core::errors::{ExError, ExErrorKind};
use aptdiff_core::Category;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error that names the file involved
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.display().to_string())
        .with_message(err.to_string())
}

/// Create an error for a package query whose shell could not be started
pub fn command_error(category: Category, command: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::ExternalCommand)
        .with_op("run_query")
        .with_category(category.as_str())
        .with_message(format!("Failed to run `{}`: {}", command, err))
}
