//! Logger configuration record

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::console::ConsoleStream;
use crate::error::{LogError, LogResult};
use crate::level::Level;

/// Everything a [`NamedLogger`](crate::NamedLogger) is built from, apart
/// from its name.
///
/// Missing fields take their defaults when deserialized, so a config file
/// only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file; when absent no file sink is attached
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    /// Threshold of the file sink
    pub file_level: Level,
    /// Threshold of the console sink
    pub console_level: Level,
    /// Colorize lines written to the file
    pub color_file: bool,
    /// Colorize lines written to the console
    pub color_console: bool,
    /// Console destination
    #[serde(skip_serializing_if = "ConsoleStream::is_capture")]
    pub console: ConsoleStream,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_path: None,
            file_level: Level::Debug,
            console_level: Level::Info,
            color_file: true,
            color_console: true,
            console: ConsoleStream::Stderr,
        }
    }
}

impl LoggerConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Set the file sink threshold
    pub fn with_file_level(mut self, level: Level) -> Self {
        self.file_level = level;
        self
    }

    /// Set the console sink threshold
    pub fn with_console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    /// Choose colored or plain lines for the file
    pub fn with_color_file(mut self, color: bool) -> Self {
        self.color_file = color;
        self
    }

    /// Choose colored or plain lines for the console
    pub fn with_color_console(mut self, color: bool) -> Self {
        self.color_console = color;
        self
    }

    /// Set the console destination
    pub fn with_console(mut self, console: ConsoleStream) -> Self {
        self.console = console;
        self
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Minimum severity the logger processes at all.
    ///
    /// With a file sink this is the lower of the two thresholds, so neither
    /// sink is starved by the logger-level gate.
    pub fn effective_level(&self) -> Level {
        match self.file_path {
            Some(_) => self.file_level.min(self.console_level),
            None => self.console_level,
        }
    }

    /// Reject configurations that can't produce a working logger
    pub fn validate(&self) -> LogResult<()> {
        if let Some(path) = &self.file_path {
            if path.as_os_str().is_empty() {
                return Err(LogError::Config("file_path must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.file_path, None);
        assert_eq!(config.file_level, Level::Debug);
        assert_eq!(config.console_level, Level::Info);
        assert!(config.color_file);
        assert!(config.color_console);
        assert_eq!(config.console, ConsoleStream::Stderr);
    }

    #[test]
    fn test_effective_level() {
        let console_only = LoggerConfig::new().with_console_level(Level::Warning);
        assert_eq!(console_only.effective_level(), Level::Warning);

        let with_file = LoggerConfig::new()
            .with_file("app.log")
            .with_file_level(Level::Error)
            .with_console_level(Level::Info);
        assert_eq!(with_file.effective_level(), Level::Info);

        let quiet_console = with_file.with_console_level(Level::Critical);
        assert_eq!(quiet_console.effective_level(), Level::Error);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = LoggerConfig::new().with_file("");
        assert!(matches!(config.validate(), Err(LogError::Config(_))));
        assert!(LoggerConfig::new().validate().is_ok());
    }
}
