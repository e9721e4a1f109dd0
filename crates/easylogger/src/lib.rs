//! easylogger
//!
//! Named loggers that write leveled, optionally colorized lines to the
//! console and an optional log file, with independent thresholds per
//! destination.
//!
//! ## Loggers
//!
//! A [`NamedLogger`] is built from a name and a [`LoggerConfig`]. It owns one
//! console sink and, when a file path is configured, one file sink. `copy`
//! builds a renamed logger with the same settings and fresh sinks.
//!
//! ```rust,no_run
//! use easylogger::{Level, LoggerConfig, Logs, NamedLogger};
//!
//! let logger = NamedLogger::new(
//!     "svc",
//!     LoggerConfig::new()
//!         .with_file("svc.log")
//!         .with_console_level(Level::Error),
//! )?;
//! logger.debug("only in svc.log");
//! logger.error("in svc.log and on stderr");
//! # Ok::<(), easylogger::LogError>(())
//! ```
//!
//! ## Hosts
//!
//! Types hold a [`Loggable`] and implement [`LogHost`] to get the
//! [`Logs`] methods. `Loggable::reset_log` rebuilds the logger from the
//! recorded configuration, and `Loggable::tqdm_colored` wraps an iterator in
//! a progress bar tinted with a level's palette color.

pub mod config;
pub mod error;
pub mod level;
pub mod loggable;
pub mod logging;
pub mod palette;
pub mod progress;

// Re-export commonly used types
pub use config::{CaptureBuffer, ConsoleStream, LoggerConfig};
pub use error::{LogError, LogResult};
pub use level::Level;
pub use loggable::{LogHost, Loggable};
pub use logging::{ConsoleSink, FileSink, Formatter, Logs, LogsExt, NamedLogger, Record, Sink};
pub use progress::{colorize_bar_format, progress_bar, tqdm_colored, ProgressOptions};
