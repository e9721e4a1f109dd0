//! Logging trait definitions

use std::fmt;

use crate::level::Level;

/// Leveled logging interface
///
/// Implementations:
/// - `NamedLogger`: dispatches to its console and file sinks
/// - `Loggable`: forwards to the logger it owns
/// - any `LogHost`: forwards to its `Loggable`
pub trait Logs {
    /// Log a message at the given level
    fn log(&self, level: Level, message: &str);

    /// Whether a message at `level` would be processed at all
    fn is_enabled_for(&self, _level: Level) -> bool {
        true
    }

    /// Log a debug message
    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Log an info message
    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Log a warning message
    fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    /// Log an error message
    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Log a critical message
    fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }
}

/// Extension trait for logging with format arguments.
///
/// Arguments are only rendered when the level is enabled.
pub trait LogsExt: Logs {
    /// Log formatted arguments at the given level
    fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        if self.is_enabled_for(level) {
            match args.as_str() {
                Some(message) => self.log(level, message),
                None => self.log(level, &args.to_string()),
            }
        }
    }

    fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Debug, args);
    }

    fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Info, args);
    }

    fn warning_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Warning, args);
    }

    fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Error, args);
    }

    fn critical_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Critical, args);
    }
}

// Implement LogsExt for all Logs implementations
impl<T: Logs + ?Sized> LogsExt for T {}

/// Convenience macros for logging with format arguments
///
/// ```
/// use easylogger::{log_info, CaptureBuffer, ConsoleStream, LoggerConfig, NamedLogger};
///
/// let buffer = CaptureBuffer::new();
/// let logger = NamedLogger::new(
///     "worker",
///     LoggerConfig::new().with_console(ConsoleStream::Capture(buffer.clone())),
/// ).unwrap();
/// log_info!(logger, "processed {} items", 3);
/// assert!(buffer.contents().contains("processed 3 items"));
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LogsExt as _;
        $logger.debug_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LogsExt as _;
        $logger.info_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LogsExt as _;
        $logger.warning_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LogsExt as _;
        $logger.error_fmt(format_args!($($arg)*))
    }};
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {{
        use $crate::LogsExt as _;
        $logger.critical_fmt(format_args!($($arg)*))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Records what reaches it, with a fixed threshold
    struct Recorder {
        threshold: Level,
        seen: Mutex<Vec<(Level, String)>>,
    }

    impl Recorder {
        fn new(threshold: Level) -> Self {
            Self {
                threshold,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl Logs for Recorder {
        fn log(&self, level: Level, message: &str) {
            self.seen.lock().push((level, message.to_string()));
        }

        fn is_enabled_for(&self, level: Level) -> bool {
            level >= self.threshold
        }
    }

    #[test]
    fn test_leveled_methods_forward_to_log() {
        let recorder = Recorder::new(Level::Debug);
        recorder.debug("d");
        recorder.info("i");
        recorder.warning("w");
        recorder.error("e");
        recorder.critical("c");

        let levels: Vec<Level> = recorder.seen.lock().iter().map(|(l, _)| *l).collect();
        assert_eq!(levels, Level::ALL.to_vec());
    }

    #[test]
    fn test_fmt_skips_disabled_levels() {
        let recorder = Recorder::new(Level::Warning);
        recorder.info_fmt(format_args!("skipped {}", 1));
        recorder.error_fmt(format_args!("kept {}", 2));

        let seen = recorder.seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], (Level::Error, "kept 2".to_string()));
    }

    #[test]
    fn test_macros_accept_references() {
        let recorder = Recorder::new(Level::Debug);
        let by_ref = &recorder;
        crate::log_debug!(recorder, "a={}", 1);
        crate::log_critical!(by_ref, "b={}", 2);

        let seen = recorder.seen.lock();
        assert_eq!(seen[0].1, "a=1");
        assert_eq!(seen[1], (Level::Critical, "b=2".to_string()));
    }
}
