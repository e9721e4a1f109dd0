//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring, building or tearing down loggers
#[derive(Error, Debug)]
pub enum LogError {
    /// Unknown level name or numeric value
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Configuration rejected at construction time
    #[error("Configuration error: {0}")]
    Config(String),

    /// The file sink could not be opened
    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A sink failed to flush or release its destination
    #[error("Failed to close {sink} sink: {source}")]
    Close {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Progress bar template could not be parsed
    #[error("Invalid progress template: {0}")]
    ProgressTemplate(#[from] indicatif::style::TemplateError),

    /// YAML config parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON config parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create an invalid level error
    pub fn invalid_level(value: impl std::fmt::Display) -> Self {
        Self::InvalidLevel(value.to_string())
    }

    /// Create an open file error
    pub fn open_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OpenFile {
            path: path.into(),
            source,
        }
    }

    /// Create a close error
    pub fn close(sink: impl Into<String>, source: std::io::Error) -> Self {
        Self::Close {
            sink: sink.into(),
            source,
        }
    }
}

pub type LogResult<T> = Result<T, LogError>;
