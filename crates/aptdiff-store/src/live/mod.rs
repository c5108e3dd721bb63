//! Live system source
//!
//! Each category is produced by one shell pipeline. A query that exits
//! non-zero still yields whatever it printed (`grep` exits 1 on no
//! match, which is normal for `obsconffiles`); only a shell that cannot
//! be started is an error.

pub mod queries;

use crate::errors::{command_error, Result};
use aptdiff_core::{Category, PackageStateSource};
use std::path::PathBuf;
use std::process::{Command, Stdio};

pub use queries::live_query;

/// Shell used to run the package queries
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Source that queries dpkg and apt-mark on the running system
#[derive(Debug, Clone)]
pub struct SystemSource {
    shell: PathBuf,
}

impl SystemSource {
    pub fn new() -> Self {
        Self::with_shell(DEFAULT_SHELL)
    }

    /// Run queries through a different shell binary
    pub fn with_shell(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Run one shell command and return its stdout
    ///
    /// Stderr passes through to the terminal.
    ///
    /// # Errors
    ///
    /// `ExternalCommand` when the shell cannot be spawned.
    pub fn run(&self, category: Category, command: &str) -> Result<String> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| command_error(category, command, e))?;

        if !output.status.success() {
            tracing::warn!(
                category = %category,
                status = %output.status,
                command = command,
                "package query exited unsuccessfully, using its output as is"
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageStateSource for SystemSource {
    fn describe(&self) -> String {
        "current APT packages".to_string()
    }

    fn read_category(&self, category: Category) -> Result<String> {
        self.run(category, live_query(category))
    }
}
