//! Loading logger configuration from files and the environment
//!
//! YAML is the default format; `.json` files are read as JSON.

use std::fs;
use std::path::Path;

use super::logger::LoggerConfig;
use crate::error::{LogError, LogResult};

/// Log file path (empty clears it)
pub const ENV_FILE: &str = "EASYLOGGER_FILE";
/// File sink threshold
pub const ENV_FILE_LEVEL: &str = "EASYLOGGER_FILE_LEVEL";
/// Console sink threshold
pub const ENV_CONSOLE_LEVEL: &str = "EASYLOGGER_CONSOLE_LEVEL";
/// Colorize file lines
pub const ENV_COLOR_FILE: &str = "EASYLOGGER_COLOR_FILE";
/// Colorize console lines
pub const ENV_COLOR_CONSOLE: &str = "EASYLOGGER_COLOR_CONSOLE";

impl LoggerConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> LogResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Render as YAML
    pub fn to_yaml_string(&self) -> LogResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load a config file, choosing the format from its extension
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Apply `EASYLOGGER_*` overrides from the process environment
    pub fn apply_env(self) -> LogResult<Self> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Apply `EASYLOGGER_*` overrides read through `lookup`.
    ///
    /// Invalid values are errors; there is no fallback level.
    pub fn apply_env_with<F>(mut self, lookup: F) -> LogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_FILE) {
            self.file_path = if path.trim().is_empty() {
                None
            } else {
                Some(path.into())
            };
        }
        if let Some(level) = lookup(ENV_FILE_LEVEL) {
            self.file_level = level.parse()?;
        }
        if let Some(level) = lookup(ENV_CONSOLE_LEVEL) {
            self.console_level = level.parse()?;
        }
        if let Some(value) = lookup(ENV_COLOR_FILE) {
            self.color_file = parse_flag(ENV_COLOR_FILE, &value)?;
        }
        if let Some(value) = lookup(ENV_COLOR_CONSOLE) {
            self.color_console = parse_flag(ENV_COLOR_CONSOLE, &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LogError::Config(format!("{key}: expected a boolean, got {value:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = LoggerConfig::from_yaml_str("console_level: warning\ncolor_console: false\n").unwrap();
        assert_eq!(config.console_level, Level::Warning);
        assert!(!config.color_console);
        assert_eq!(config.file_level, Level::Debug);
        assert!(config.file_path.is_none());
    }

    #[test]
    fn test_unknown_level_in_yaml_fails() {
        let err = LoggerConfig::from_yaml_str("file_level: chatty\n").unwrap_err();
        assert!(matches!(err, LogError::Yaml(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempdir().unwrap();

        let yaml_path = dir.path().join("logging.yaml");
        fs::write(&yaml_path, "file_path: /var/log/app.log\nfile_level: INFO\n").unwrap();
        let yaml = LoggerConfig::load(&yaml_path).unwrap();
        assert_eq!(yaml.file_path, Some(PathBuf::from("/var/log/app.log")));
        assert_eq!(yaml.file_level, Level::Info);

        let json_path = dir.path().join("logging.json");
        fs::write(&json_path, r#"{"console_level": "ERROR", "console": "stdout"}"#).unwrap();
        let json = LoggerConfig::load(&json_path).unwrap();
        assert_eq!(json.console_level, Level::Error);
        assert_eq!(json.console, crate::config::ConsoleStream::Stdout);
    }

    #[test]
    fn test_yaml_round_trip_keeps_settings() {
        let config = LoggerConfig::new()
            .with_file("out.log")
            .with_console_level(Level::Critical)
            .with_color_file(false);
        let yaml = config.to_yaml_string().unwrap();
        assert!(yaml.contains("CRITICAL"));
        assert_eq!(LoggerConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_FILE, "/tmp/env.log"),
            (ENV_CONSOLE_LEVEL, "error"),
            (ENV_COLOR_CONSOLE, "off"),
        ]);
        let config = LoggerConfig::new()
            .apply_env_with(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.file_path, Some(PathBuf::from("/tmp/env.log")));
        assert_eq!(config.console_level, Level::Error);
        assert!(!config.color_console);
        assert!(config.color_file);
    }

    #[test]
    fn test_env_invalid_values_are_errors() {
        let bad_level = LoggerConfig::new()
            .apply_env_with(|key| (key == ENV_FILE_LEVEL).then(|| "noisy".to_string()));
        assert!(matches!(bad_level, Err(LogError::InvalidLevel(_))));

        let bad_flag = LoggerConfig::new()
            .apply_env_with(|key| (key == ENV_COLOR_FILE).then(|| "maybe".to_string()));
        assert!(matches!(bad_flag, Err(LogError::Config(_))));
    }
}
