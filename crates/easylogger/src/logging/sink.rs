//! Output sinks
//!
//! A sink owns one destination, a threshold and a formatter. Every sink
//! re-checks its own threshold, so one record can land in the file but not
//! on the console, or the other way round.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::record::{Formatter, Record};
use crate::config::ConsoleStream;
use crate::error::{LogError, LogResult};
use crate::level::Level;

/// Output destination bound to a threshold and a formatter
pub trait Sink: Send + Sync + fmt::Debug {
    /// Short destination kind, e.g. `"console"`
    fn kind(&self) -> &'static str;

    /// Threshold of this sink
    fn level(&self) -> Level;

    /// Formatter lines are rendered with
    fn formatter(&self) -> Formatter;

    /// Whether a record at `level` passes this sink's threshold
    fn accepts(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Render and write `record` if it passes the threshold
    fn emit(&self, record: &Record<'_>) -> io::Result<()>;

    /// Flush buffered output
    fn flush(&self) -> io::Result<()>;

    /// Flush and release the destination. Later emits are dropped.
    fn close(&self) -> io::Result<()>;
}

/// Sink writing to stderr, stdout or a capture buffer
pub struct ConsoleSink {
    level: Level,
    formatter: Formatter,
    stream: ConsoleStream,
}

impl ConsoleSink {
    /// Create a console sink gated at `level`
    pub fn new(stream: ConsoleStream, level: Level, formatter: Formatter) -> Self {
        Self {
            level,
            formatter,
            stream,
        }
    }

    /// Destination of this sink
    pub fn stream(&self) -> &ConsoleStream {
        &self.stream
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .field("stream", &self.stream.as_str())
            .finish()
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> &'static str {
        "console"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn formatter(&self) -> Formatter {
        self.formatter
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        if !self.accepts(record.level) {
            return Ok(());
        }
        self.stream.write_line(&self.formatter.format(record))
    }

    fn flush(&self) -> io::Result<()> {
        self.stream.flush()
    }

    // The process streams outlive the sink, so closing only flushes
    fn close(&self) -> io::Result<()> {
        self.flush()
    }
}

/// Sink appending to a file through its own handle
pub struct FileSink {
    level: Level,
    formatter: Formatter,
    path: PathBuf,
    file: Mutex<Option<BufWriter<File>>>,
}

impl FileSink {
    /// Open `path` in create+append mode
    pub fn open(path: impl AsRef<Path>, level: Level, formatter: Formatter) -> LogResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::open_file(path, e))?;

        Ok(Self {
            level,
            formatter,
            path: path.to_path_buf(),
            file: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file handle has been released
    pub fn is_closed(&self) -> bool {
        self.file.lock().is_none()
    }
}

impl fmt::Debug for FileSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSink")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .field("path", &self.path)
            .field("closed", &self.is_closed())
            .finish()
    }
}

impl Sink for FileSink {
    fn kind(&self) -> &'static str {
        "file"
    }

    fn level(&self) -> Level {
        self.level
    }

    fn formatter(&self) -> Formatter {
        self.formatter
    }

    fn emit(&self, record: &Record<'_>) -> io::Result<()> {
        if !self.accepts(record.level) {
            return Ok(());
        }
        let line = self.formatter.format(record);
        let mut guard = self.file.lock();
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        match self.file.lock().as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }

    fn close(&self) -> io::Result<()> {
        match self.file.lock().take() {
            Some(mut file) => file.flush(),
            None => Ok(()),
        }
    }
}
