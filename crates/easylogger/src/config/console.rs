//! Console destinations

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Where the console sink writes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    /// Standard error, like a conventional stream handler
    #[default]
    Stderr,
    /// Standard output
    Stdout,
    /// In-memory buffer shared with the caller (never serialized)
    #[serde(skip)]
    Capture(CaptureBuffer),
}

impl ConsoleStream {
    /// Short destination name
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleStream::Stderr => "stderr",
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Capture(_) => "capture",
        }
    }

    /// Whether this is an in-memory capture
    pub fn is_capture(&self) -> bool {
        matches!(self, ConsoleStream::Capture(_))
    }

    /// Write one already-formatted line, holding the stream lock for the
    /// whole line so lines from different loggers don't interleave mid-line
    pub(crate) fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            ConsoleStream::Stderr => {
                let mut out = io::stderr().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            ConsoleStream::Stdout => {
                let mut out = io::stdout().lock();
                writeln!(out, "{line}")?;
                out.flush()
            }
            ConsoleStream::Capture(buffer) => buffer.write_line(line),
        }
    }

    pub(crate) fn flush(&self) -> io::Result<()> {
        match self {
            ConsoleStream::Stderr => io::stderr().flush(),
            ConsoleStream::Stdout => io::stdout().flush(),
            ConsoleStream::Capture(_) => Ok(()),
        }
    }
}

/// Thread-safe in-memory console destination
///
/// Clones share the same underlying buffer, so a caller can keep one handle
/// and hand another to a logger config.
///
/// # Example
///
/// ```
/// use easylogger::{CaptureBuffer, ConsoleStream, LoggerConfig, NamedLogger, Logs};
///
/// let buffer = CaptureBuffer::new();
/// let config = LoggerConfig::default()
///     .with_console(ConsoleStream::Capture(buffer.clone()))
///     .with_color_console(false);
/// let logger = NamedLogger::new("app", config).unwrap();
/// logger.info("ready");
/// assert!(buffer.contents().contains("ready"));
/// ```
#[derive(Clone, Default)]
pub struct CaptureBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut bytes = self.inner.lock();
        bytes.extend_from_slice(line.as_bytes());
        bytes.push(b'\n');
        Ok(())
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl PartialEq for CaptureBuffer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for CaptureBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureBuffer")
            .field("len", &self.inner.lock().len())
            .finish()
    }
}
