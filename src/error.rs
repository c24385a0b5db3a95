use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShacnifyError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    /// Required external tool (npm, npx) is not on PATH
    #[error("System dependency missing: {0}")]
    DependencyMissing(String),

    #[error("No supported React framework found in '{0}'")]
    FrameworkNotDetected(PathBuf),

    #[error("shadcn/ui is not initialized in '{0}' (components.json missing)")]
    NotInitialized(PathBuf),

    #[error("Folder '{0}' already exists")]
    FolderExists(PathBuf),

    #[error("System command '{command}' failed")]
    SystemCommandFailed { command: String },

    /// Setup pipeline stopped at the named step
    #[error("Setup aborted at step '{step}'")]
    PipelineAborted { step: String },

    #[error("{failed} component(s) failed to install")]
    ComponentsFailed { failed: usize },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ShacnifyError>;
