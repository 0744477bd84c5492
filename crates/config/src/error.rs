use crate::ConfigValidationError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported config file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid config file {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },

    #[error("Config file {} has {} problem(s):\n{}", path.display(), errors.len(), list_errors(errors))]
    Validation {
        path: PathBuf,
        errors: Vec<ConfigValidationError>,
    },
}

fn list_errors(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - [{}] {}", e.code(), e.message()))
        .collect::<Vec<_>>()
        .join("\n")
}
