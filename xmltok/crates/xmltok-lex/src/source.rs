//! Source loading.
//!
//! Reads a document from disk after checking that the path names an
//! existing regular file with the `.xml` extension. Checks run in that
//! order and the first failing one is reported.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LexError, Result};

/// The file extension accepted by [`read_source`], without the dot.
pub const XML_EXTENSION: &str = "xml";

/// Validates that `path` can be loaded as an XML source.
///
/// # Errors
///
/// - [`LexError::SourceNotFound`] if nothing exists at `path`
/// - [`LexError::SourceNotAFile`] if `path` is a directory or other non-file
/// - [`LexError::SourceWrongExtension`] if the extension is not `.xml`
pub fn validate_source_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LexError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(LexError::SourceNotAFile {
            path: path.to_path_buf(),
        });
    }

    if path.extension() != Some(OsStr::new(XML_EXTENSION)) {
        return Err(LexError::SourceWrongExtension {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

/// Validates `path` and reads the whole file into memory.
///
/// # Errors
///
/// Any error from [`validate_source_path`], or [`LexError::Io`] if the file
/// cannot be read as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String> {
    validate_source_path(path)?;

    let text = fs::read_to_string(path).map_err(|source| LexError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = text.len(), "loaded XML source");
    Ok(text)
}
