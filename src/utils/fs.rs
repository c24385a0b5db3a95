use crate::error::{Result, ShacnifyError};
use std::fs;
use std::path::Path;

/// Write `content` to `path`, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ShacnifyError::IoError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, content).map_err(|e| ShacnifyError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Read a file, treating a missing file as empty
pub fn read_or_empty(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(ShacnifyError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Remove a file; a file that is already gone is not an error
pub fn remove_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ShacnifyError::IoError {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
