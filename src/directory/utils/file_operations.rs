use std::path::Path;
use std::fs;
use std::io;
use log::{debug, error};

/// Copy the stylesheet verbatim if it exists. Returns whether a copy happened.
pub fn copy_stylesheet(source: &Path, destination: &Path) -> io::Result<bool> {
    if !source.is_file() {
        debug!("No stylesheet at {}, skipping", source.display());
        return Ok(false);
    }

    // Ensure parent directory exists
    if let Some(parent) = destination.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    match fs::copy(source, destination) {
        Ok(_) => {
            debug!("Copied stylesheet {} -> {}", source.display(), destination.display());
            Ok(true)
        },
        Err(e) => {
            error!("Failed to copy file from {} to {}: {}",
                source.display(), destination.display(), e);
            Err(e)
        }
    }
}
