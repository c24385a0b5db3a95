use crate::error::{Result, ShacnifyError};
use crate::project_identity;
use directories::UserDirs;
use std::path::{Path, PathBuf};

/// Per-user tool directory (`$SHACNIFY_HOME` or `~/.shacnify`)
pub fn tool_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(project_identity::env_key("HOME"))
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let user_dirs = UserDirs::new().ok_or_else(|| {
        ShacnifyError::Other("Could not determine user home directory".to_string())
    })?;

    Ok(user_dirs.home_dir().join(project_identity::TOOL_DIR_NAME))
}

pub fn config_file() -> Result<PathBuf> {
    Ok(tool_dir()?.join(project_identity::CONFIG_FILE_BASENAME))
}

pub fn logs_dir() -> Result<PathBuf> {
    Ok(tool_dir()?.join(project_identity::LOG_DIR_NAME))
}

pub fn log_file(project_root: &Path) -> Result<PathBuf> {
    Ok(logs_dir()?.join(format!("{}.log", project_name(project_root))))
}

/// Name used for per-project files: the last path component of the root
pub fn project_name(project_root: &Path) -> String {
    let resolved = project_root
        .canonicalize()
        .unwrap_or_else(|_| project_root.to_path_buf());

    resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "project".to_string())
}

/// Resolve `--dir`, defaulting to the current directory
pub fn project_root(dir: Option<&Path>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path.to_path_buf()),
        None => std::env::current_dir().map_err(ShacnifyError::from),
    }
}

#[cfg(test)]
mod tests;
