use std::path::PathBuf;

/// Failures while appending a record to the log file.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Error creating log directory '{path:?}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error opening or creating log file '{path:?}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing to log '{path:?}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures interpreting an environment setting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var}: invalid boolean value '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, EmitError>;
