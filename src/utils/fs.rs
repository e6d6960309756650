use std::fs;
use std::path::Path;

use crate::utils::error::{BoxResult, SiteError};

/// Check if a path exists and is a directory
pub fn is_directory<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_dir()
}

/// Check if a path exists and is a file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    if path.as_ref().exists() && path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Read a UTF-8 file to string, naming the file in the error
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        SiteError::File(format!("Failed to read {}: {}", path.display(), e)).into()
    })
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    fs::write(path.as_ref(), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("logs/2025/01/page.html");

        write_file(&target, "hello").unwrap();

        assert!(is_file(&target));
        assert_eq!(read_file(&target).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.html");

        let err = read_file(&missing).unwrap_err();
        assert!(err.to_string().contains("nope.html"));
    }

    #[test]
    fn test_remove_directory_is_noop_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(remove_directory(dir.path().join("absent")).is_ok());
    }
}
