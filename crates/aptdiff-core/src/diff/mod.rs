//! Differential engine.
//!
//! Compares two nested mappings and produces an add/delete/change tree.
//!
//! ## Entry points
//!
//! ```
//! use aptdiff_core::diff::{diff_snapshots, render_json};
//! use aptdiff_core::model::Snapshot;
//!
//! let node = diff_snapshots(&Snapshot::new(), &Snapshot::new());
//! assert!(node.is_empty());
//! let json = render_json(&node).unwrap();
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: keys and sets are ordered, so identical inputs
//!   render byte-identical output.
//! - **Disjointness**: a key lands in at most one of `_add`, `_delete`
//!   and `_change` at each level.
//! - **Shape-driven recursion**: the differ only looks at value shapes,
//!   never at which category it is comparing.

pub mod engine;
pub mod model;
pub mod post_filter;
pub mod render;

pub use engine::{diff, diff_maps, diff_snapshots};
pub use model::{Change, DiffNode};
pub use post_filter::{reclassify_mark_changes, NOW_AUTO, WAS_AUTO};
pub use render::{diff_stats, render_json, render_text, CategoryStats};
