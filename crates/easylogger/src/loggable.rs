//! Logging capability for host objects
//!
//! A host holds a [`Loggable`] and implements [`LogHost`] to get the leveled
//! [`Logs`] methods by delegation:
//!
//! ```
//! use easylogger::{CaptureBuffer, ConsoleStream, LogHost, Loggable, LoggerConfig, Logs};
//!
//! struct Downloader {
//!     logging: Loggable,
//! }
//!
//! impl LogHost for Downloader {
//!     fn loggable(&self) -> &Loggable {
//!         &self.logging
//!     }
//! }
//!
//! let buffer = CaptureBuffer::new();
//! let config = LoggerConfig::new()
//!     .with_console(ConsoleStream::Capture(buffer.clone()))
//!     .with_color_console(false);
//! let downloader = Downloader {
//!     logging: Loggable::for_host::<Downloader>(config).unwrap(),
//! };
//! downloader.warning("retrying");
//! assert!(buffer.contents().contains(" - Downloader - WARNING - retrying"));
//! ```

use indicatif::{ProgressBar, ProgressBarIter};

use crate::config::LoggerConfig;
use crate::error::LogResult;
use crate::level::Level;
use crate::logging::{Logs, NamedLogger};
use crate::progress::{self, ProgressOptions};

/// An owned [`NamedLogger`] plus the configuration needed to rebuild it
#[derive(Debug)]
pub struct Loggable {
    name: String,
    config: LoggerConfig,
    log: NamedLogger,
}

impl Loggable {
    /// General constructor.
    ///
    /// `name` defaults to the short type name of `H`. With `log`, the owned
    /// logger is a renamed copy of it and `config` is ignored; otherwise a
    /// fresh logger is built from `config`.
    pub fn build<H: ?Sized>(name: Option<&str>, log: Option<&NamedLogger>, config: LoggerConfig) -> LogResult<Self> {
        let name = name.map_or_else(short_type_name::<H>, str::to_string);
        let log = match log {
            Some(source) => source.copy(Some(&name))?,
            None => NamedLogger::new(name.clone(), config)?,
        };
        Ok(Self::from_parts(name, log))
    }

    /// Build a fresh logger under `name`
    pub fn new(name: impl Into<String>, config: LoggerConfig) -> LogResult<Self> {
        let log = NamedLogger::new(name, config)?;
        Ok(Self::from_parts(log.name().to_string(), log))
    }

    /// Build a fresh logger named after the host type `H`
    pub fn for_host<H: ?Sized>(config: LoggerConfig) -> LogResult<Self> {
        Self::build::<H>(None, None, config)
    }

    /// Copy `log`'s configuration, renamed to `name` when given
    pub fn from_logger(name: Option<&str>, log: &NamedLogger) -> LogResult<Self> {
        let log = log.copy(name)?;
        Ok(Self::from_parts(log.name().to_string(), log))
    }

    fn from_parts(name: String, log: NamedLogger) -> Self {
        Self {
            name,
            config: log.config().clone(),
            log,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owned logger
    pub fn logger(&self) -> &NamedLogger {
        &self.log
    }

    /// Configuration recorded for [`reset_log`](Self::reset_log)
    pub fn logger_config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Replace the logger with one rebuilt from the recorded name and config.
    ///
    /// The old logger is closed once the new one is in place. If the rebuild
    /// fails the old logger stays and the error is returned.
    pub fn reset_log(&mut self) -> LogResult<()> {
        let fresh = NamedLogger::new(self.name.clone(), self.config.clone())?;
        let mut old = std::mem::replace(&mut self.log, fresh);
        old.close()
    }

    /// Flush and release the logger's sinks
    pub fn close(&mut self) -> LogResult<()> {
        self.log.close()
    }

    /// Wrap `iterable` in a progress bar tinted with `level`'s palette color
    pub fn tqdm_colored<I>(iterable: I, level: Level, options: ProgressOptions) -> LogResult<ProgressBarIter<I::IntoIter>>
    where
        I: IntoIterator,
    {
        progress::tqdm_colored(iterable, level, options)
    }

    /// Tinted progress bar without an iterable, advanced by hand
    pub fn progress_bar(level: Level, options: &ProgressOptions) -> LogResult<ProgressBar> {
        progress::progress_bar(level, options)
    }
}

impl Logs for Loggable {
    fn log(&self, level: Level, message: &str) {
        self.log.log(level, message);
    }

    fn is_enabled_for(&self, level: Level) -> bool {
        self.log.is_enabled_for(level)
    }
}

/// A type that owns a [`Loggable`].
///
/// Implementing it gives the type [`Logs`] (and so `LogsExt` and the
/// `log_*!` macros), forwarding to the held logger.
pub trait LogHost {
    fn loggable(&self) -> &Loggable;
}

impl<T: LogHost + ?Sized> Logs for T {
    fn log(&self, level: Level, message: &str) {
        self.loggable().log.log(level, message);
    }

    fn is_enabled_for(&self, level: Level) -> bool {
        self.loggable().log.is_enabled_for(level)
    }
}

/// Last path segment of `H`'s type name, generics included
fn short_type_name<H: ?Sized>() -> String {
    let full = std::any::type_name::<H>();
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |i| i + 2);
    full[start..].to_string()
}
