//! Named logger with independent console and file sinks

use std::path::Path;

use super::record::{Formatter, Record};
use super::sink::{ConsoleSink, FileSink, Sink};
use super::traits::Logs;
use crate::config::LoggerConfig;
use crate::error::{LogError, LogResult};
use crate::level::Level;

/// A logger bound to a name and a [`LoggerConfig`].
///
/// Owns exactly one console sink and, when the config names a file, one file
/// sink. Sinks are flushed and released on [`close`](Self::close) or drop.
///
/// # Example
///
/// ```no_run
/// use easylogger::{Level, LoggerConfig, Logs, NamedLogger};
///
/// let config = LoggerConfig::new()
///     .with_file("/tmp/app.log")
///     .with_console_level(Level::Warning);
/// let logger = NamedLogger::new("app", config)?;
/// logger.debug("file only");
/// logger.error("file and console");
///
/// let child = logger.copy(Some("app.child"))?;
/// child.info("same settings, new name");
/// # Ok::<(), easylogger::LogError>(())
/// ```
#[derive(Debug)]
pub struct NamedLogger {
    name: String,
    config: LoggerConfig,
    level: Level,
    sinks: Vec<Box<dyn Sink>>,
}

impl NamedLogger {
    /// Build a logger and open its sinks
    pub fn new(name: impl Into<String>, config: LoggerConfig) -> LogResult<Self> {
        config.validate()?;

        let mut sinks: Vec<Box<dyn Sink>> = Vec::with_capacity(2);
        if let Some(path) = config.file_path() {
            sinks.push(Box::new(FileSink::open(
                path,
                config.file_level,
                Formatter::for_color(config.color_file),
            )?));
        }
        sinks.push(Box::new(ConsoleSink::new(
            config.console.clone(),
            config.console_level,
            Formatter::for_color(config.color_console),
        )));

        Ok(Self {
            name: name.into(),
            level: config.effective_level(),
            config,
            sinks,
        })
    }

    /// Build a logger with the same configuration and fresh sinks, named
    /// `new_name` or this logger's name
    pub fn copy(&self, new_name: Option<&str>) -> LogResult<Self> {
        let name = new_name.unwrap_or(&self.name);
        Self::new(name, self.config.clone())
    }

    /// Name shown in every formatted line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configuration this logger was built from
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Logger-level gate, upstream of every sink
    pub fn level(&self) -> Level {
        self.level
    }

    /// Log file path, if a file sink is configured
    pub fn file_path(&self) -> Option<&Path> {
        self.config.file_path()
    }

    /// Threshold of the file sink
    pub fn file_level(&self) -> Level {
        self.config.file_level
    }

    /// Threshold of the console sink
    pub fn console_level(&self) -> Level {
        self.config.console_level
    }

    /// Attached sinks, file sink first when present
    pub fn sinks(&self) -> &[Box<dyn Sink>] {
        &self.sinks
    }

    /// Whether the sinks have been released
    pub fn is_closed(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Whether a message at `level` passes the logger-level gate
    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.level && !self.sinks.is_empty()
    }

    /// Log `message` at `level` to every sink whose threshold it meets
    pub fn log(&self, level: Level, message: &str) {
        if !self.is_enabled_for(level) {
            return;
        }

        let record = Record::new(level, &self.name, message);
        for sink in &self.sinks {
            if let Err(e) = sink.emit(&record) {
                eprintln!("easylogger: {} failed to write to {} sink: {}", self.name, sink.kind(), e);
            }
        }
    }

    /// Flush and release every sink.
    ///
    /// All sinks are attempted even if one fails; the first failure is
    /// returned and the rest are reported on stderr.
    pub fn close(&mut self) -> LogResult<()> {
        let mut first: Option<LogError> = None;
        for sink in self.sinks.drain(..) {
            if let Err(e) = sink.close() {
                let err = LogError::close(sink.kind(), e);
                if first.is_none() {
                    first = Some(err);
                } else {
                    eprintln!("easylogger: {}: {}", self.name, err);
                }
            }
        }
        first.map_or(Ok(()), Err)
    }
}

impl Logs for NamedLogger {
    fn log(&self, level: Level, message: &str) {
        NamedLogger::log(self, level, message);
    }

    fn is_enabled_for(&self, level: Level) -> bool {
        NamedLogger::is_enabled_for(self, level)
    }
}

impl Drop for NamedLogger {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            eprintln!("easylogger: {}: {}", self.name, e);
        }
    }
}
