//! Save command

use crate::config::{Endpoint, RunConfig};
use aptdiff_core::{ExError, ExErrorKind};

pub fn execute(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Action: {}", config.action);

    let Endpoint::Directory(dir) = &config.target else {
        return Err(ExError::new(ExErrorKind::InvalidInput)
            .with_op("save")
            .with_message("save needs a target directory")
            .into());
    };
    println!("Target: {}", dir.display());
    if let Endpoint::Directory(source) = &config.source {
        println!("Source: {}", source.display());
    }

    aptdiff_store::save_snapshot(dir, config.source.open().as_ref())?;
    Ok(())
}
