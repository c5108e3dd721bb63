//! aptdiff store - where snapshots come from and where they go
//!
//! Provides:
//! - Live system source running the dpkg / apt-mark queries
//! - Snapshot directory source (one file per category)
//! - Saving any source into a snapshot directory
//! - Load helpers with operation lifecycle logging

pub mod directory;
pub mod errors;
pub mod live;
pub mod snapshot;

// Re-export key types
pub use directory::{category_path, DirectorySource};
pub use errors::Result;
pub use live::{live_query, SystemSource};
pub use snapshot::{load_from, save_snapshot};
