//! Named loggers, sinks and the leveled logging interface

mod traits;
mod record;
mod sink;
mod named;

pub use traits::{Logs, LogsExt};
pub use record::{Formatter, Record, TIMESTAMP_FORMAT};
pub use sink::{ConsoleSink, FileSink, Sink};
pub use named::NamedLogger;
