//! Run configuration
//!
//! Command-line arguments are folded into one immutable [`RunConfig`]
//! before any command runs.

use aptdiff_core::PackageStateSource;
use aptdiff_store::{DirectorySource, SystemSource};
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// Compare two APT snapshots
    Compare,
    /// Save the current APT packages as a snapshot
    Save,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Compare => "compare",
            Action::Save => "save",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Indented tree
    Text,
}

/// One side of a comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Query the running system
    Live,
    /// A saved snapshot directory
    Directory(PathBuf),
}

impl Endpoint {
    /// Package state source reading this endpoint
    pub fn open(&self) -> Box<dyn PackageStateSource> {
        match self {
            Endpoint::Live => Box::new(SystemSource::new()),
            Endpoint::Directory(dir) => Box::new(DirectorySource::new(dir)),
        }
    }

    fn from_arg(arg: Option<String>) -> Self {
        match arg {
            Some(path) if !path.is_empty() => Endpoint::Directory(PathBuf::from(path)),
            _ => Endpoint::Live,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Live => f.write_str("current APT packages"),
            Endpoint::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// Everything a command needs to run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub action: Action,
    pub source: Endpoint,
    pub target: Endpoint,
    pub summary: bool,
    pub filter: bool,
    pub reverse: bool,
    pub format: OutputFormat,
}

/// Drop trailing path separators; a lone separator stays
pub fn strip_trailing_separators(path: &str) -> String {
    let trimmed = path.trim_end_matches(MAIN_SEPARATOR);
    if trimmed.is_empty() && !path.is_empty() {
        MAIN_SEPARATOR.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Turn the positional arguments into `(source, target)` endpoints
///
/// The target defaults to `cwd`. For `compare` without a source, the
/// target directory becomes the source and the live system the target, so
/// a bare `aptdiff` shows what changed since the snapshot in `cwd`. An
/// empty path means the live system.
pub fn resolve_endpoints(
    action: Action,
    target: Option<String>,
    source: Option<String>,
    cwd: &Path,
) -> (Endpoint, Endpoint) {
    let target = target
        .map(|t| strip_trailing_separators(&t))
        .unwrap_or_else(|| cwd.display().to_string());
    let source = source.map(|s| strip_trailing_separators(&s));

    match (action, source) {
        (Action::Compare, None) => (Endpoint::from_arg(Some(target)), Endpoint::Live),
        (_, source) => (Endpoint::from_arg(source), Endpoint::from_arg(Some(target))),
    }
}
