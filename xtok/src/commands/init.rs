//! Init command implementation.
//!
//! Writes a default `xtok.toml` so the output settings can be edited.

use std::path::PathBuf;

use tracing::info;

use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{Result, XtokError};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Directory to write into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing configuration file.
    pub force: bool,
}

/// Write the default configuration and return the path written.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let target = dir.join(CONFIG_FILE_NAME);

    if target.exists() && !args.force {
        return Err(XtokError::Validation(format!(
            "{} already exists (use --force to overwrite)",
            target.display()
        )));
    }

    Config::default().save_to_path(&target)?;
    info!(path = %target.display(), "wrote configuration");
    Ok(target)
}
