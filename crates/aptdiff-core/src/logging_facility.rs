//! Structured logging facility for aptdiff
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile, level)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Log output always goes to stderr; stdout is reserved for the report.
//!
//! # Usage
//!
//! ```rust
//! use aptdiff_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development, tracing::Level::WARN);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
