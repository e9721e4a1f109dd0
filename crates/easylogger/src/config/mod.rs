//! Logger configuration
//!
//! - `LoggerConfig`: thresholds, file path, color flags and console destination
//! - YAML/JSON loading and `EASYLOGGER_*` environment overrides

mod console;
mod logger;
mod file;

pub use console::{CaptureBuffer, ConsoleStream};
pub use logger::LoggerConfig;
pub use file::{ENV_COLOR_CONSOLE, ENV_COLOR_FILE, ENV_CONSOLE_LEVEL, ENV_FILE, ENV_FILE_LEVEL};
