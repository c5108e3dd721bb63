//! Core types shared across aptdiff facilities
//!
//! This crate provides the schema constants used by both the error
//! and logging facilities:
//!
//! - **Field keys**: canonical structured-logging field names
//! - **Event names**: operation boundary markers

pub mod schema;
