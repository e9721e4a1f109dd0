//! Log records and the two line formats

use chrono::{DateTime, Local};

use crate::level::Level;
use crate::palette;

/// Timestamp layout of the plain format, e.g. `2024-05-01 13:45:09,120`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// A single log event, built once per emission and offered to every sink
#[derive(Debug, Clone)]
pub struct Record<'a> {
    pub level: Level,
    pub name: &'a str,
    pub message: &'a str,
    pub created: DateTime<Local>,
}

impl<'a> Record<'a> {
    /// Create a record stamped with the current local time
    pub fn new(level: Level, name: &'a str, message: &'a str) -> Self {
        Self::at(level, name, message, Local::now())
    }

    /// Create a record with an explicit timestamp
    pub fn at(level: Level, name: &'a str, message: &'a str, created: DateTime<Local>) -> Self {
        Self {
            level,
            name,
            message,
            created,
        }
    }
}

/// Line format bound to a sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// `timestamp - name - LEVEL - message`
    Plain,
    /// `LEVEL:name:   message`, wrapped in the level's palette color
    Colored,
}

impl Formatter {
    /// Colored formatter when `color` is set, plain otherwise
    pub fn for_color(color: bool) -> Self {
        if color {
            Formatter::Colored
        } else {
            Formatter::Plain
        }
    }

    /// Render one line, without a terminator
    pub fn format(&self, record: &Record<'_>) -> String {
        match self {
            Formatter::Plain => format!(
                "{} - {} - {} - {}",
                record.created.format(TIMESTAMP_FORMAT),
                record.name,
                record.level,
                record.message
            ),
            Formatter::Colored => {
                let line = format!("{}:{}:   {}", record.level, record.name, record.message);
                palette::paint(record.level, line).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_record(level: Level) -> Record<'static> {
        let created = Local.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap();
        Record::at(level, "svc", "hello", created)
    }

    #[test]
    fn test_plain_format() {
        let line = Formatter::Plain.format(&fixed_record(Level::Warning));
        assert_eq!(line, "2024-05-01 13:45:09,000 - svc - WARNING - hello");
    }

    #[test]
    fn test_colored_format_wraps_core_text() {
        let line = Formatter::Colored.format(&fixed_record(Level::Info));
        assert_ne!(line, "INFO:svc:   hello");
        assert_eq!(console::strip_ansi_codes(&line), "INFO:svc:   hello");
        assert!(line.ends_with("\u{1b}[0m"));
    }

    #[test]
    fn test_plain_format_is_deterministic_for_same_record() {
        let record = fixed_record(Level::Error);
        assert_eq!(Formatter::Plain.format(&record), Formatter::Plain.format(&record.clone()));
    }

    #[test]
    fn test_for_color() {
        assert_eq!(Formatter::for_color(true), Formatter::Colored);
        assert_eq!(Formatter::for_color(false), Formatter::Plain);
    }
}
