use std::path::Path;
use std::fs;
use std::io;
use log::{info, warn};

/// Delete the destination directory and recreate it empty
pub fn clean_destination(destination: &Path) -> io::Result<()> {
    if destination.exists() {
        if !destination.is_dir() {
            warn!("Destination is not a directory, leaving it alone: {}", destination.display());
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Destination is not a directory: {}", destination.display()),
            ));
        }

        info!("Cleaning destination directory: {}", destination.display());
        fs::remove_dir_all(destination)?;
    }

    fs::create_dir_all(destination)?;
    Ok(())
}
