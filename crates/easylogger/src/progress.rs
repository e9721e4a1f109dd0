//! Colorized progress iteration
//!
//! Progress bars are drawn by indicatif on stdout. Only the bar glyphs are
//! tinted with the palette color of the requested level; the text around the
//! bar stays unstyled.

use std::borrow::Cow;

use indicatif::{ProgressBar, ProgressBarIter, ProgressDrawTarget, ProgressFinish, ProgressStyle};

use crate::error::LogResult;
use crate::level::Level;
use crate::palette;

/// Left bar, bar, right bar
pub const DEFAULT_BAR_FORMAT: &str =
    "{prefix}{percent:>3}%|{wide_bar}| {pos}/{len} [{elapsed_precise}<{eta_precise}, {per_sec}]";

/// Eighth-block glyphs, filled to empty
const PROGRESS_CHARS: &str = "█▉▊▋▌▍▎▏ ";

const BAR_KEYS: [&str; 2] = ["bar", "wide_bar"];

/// Rendering options for [`tqdm_colored`] and [`progress_bar`]
#[derive(Debug, Clone)]
pub struct ProgressOptions {
    /// indicatif template; [`DEFAULT_BAR_FORMAT`] when absent
    pub bar_format: Option<String>,
    /// Description shown before the bar as `"desc: "`
    pub desc: Option<String>,
    /// Expected number of items; taken from the iterator when absent
    pub total: Option<u64>,
    /// Keep the finished bar on screen
    pub leave: bool,
    /// Don't draw anything
    pub disable: bool,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            bar_format: None,
            desc: None,
            total: None,
            leave: true,
            disable: false,
        }
    }
}

impl ProgressOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bar_format(mut self, format: impl Into<String>) -> Self {
        self.bar_format = Some(format.into());
        self
    }

    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_leave(mut self, leave: bool) -> Self {
        self.leave = leave;
        self
    }

    pub fn with_disable(mut self, disable: bool) -> Self {
        self.disable = disable;
        self
    }
}

/// Give every unstyled `{bar}` / `{wide_bar}` placeholder the palette style
/// of `level`.
///
/// `{bar}` becomes `{bar:.cyan}` and `{wide_bar:40}` becomes
/// `{wide_bar:40.cyan}` at `Info`. Placeholders that already carry a style
/// and every other placeholder are kept as written.
pub fn colorize_bar_format(format: &str, level: Level) -> String {
    let style = palette::style_key(level);
    let mut out = String::with_capacity(format.len() + 16);
    let mut rest = format;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };

        let inner = &tail[1..end];
        let (key, spec) = match inner.split_once(':') {
            Some((key, spec)) => (key, spec),
            None => (inner, ""),
        };
        if BAR_KEYS.contains(&key) && !spec.contains('.') {
            out.push_str(&format!("{{{key}:{spec}.{style}}}"));
        } else {
            out.push_str(&tail[..=end]);
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

fn build_bar(level: Level, options: &ProgressOptions, len: Option<u64>) -> LogResult<ProgressBar> {
    let format = options.bar_format.as_deref().unwrap_or(DEFAULT_BAR_FORMAT);
    let style = ProgressStyle::with_template(&colorize_bar_format(format, level))?
        .progress_chars(PROGRESS_CHARS);

    let target = if options.disable {
        ProgressDrawTarget::hidden()
    } else {
        ProgressDrawTarget::stdout()
    };
    let prefix: Cow<'static, str> = match &options.desc {
        Some(desc) => Cow::Owned(format!("{desc}: ")),
        None => Cow::Borrowed(""),
    };
    let finish = if options.leave {
        ProgressFinish::AndLeave
    } else {
        ProgressFinish::AndClear
    };

    Ok(ProgressBar::with_draw_target(len, target)
        .with_style(style)
        .with_prefix(prefix)
        .with_finish(finish))
}

/// Build a tinted progress bar to drive by hand
pub fn progress_bar(level: Level, options: &ProgressOptions) -> LogResult<ProgressBar> {
    build_bar(level, options, options.total)
}

/// Wrap `iterable` so that consuming it advances a progress bar tinted with
/// the palette color of `level`.
///
/// # Example
///
/// ```
/// use easylogger::{tqdm_colored, Level, ProgressOptions};
///
/// let options = ProgressOptions::new().with_desc("items").with_disable(true);
/// let total: u32 = tqdm_colored(1..=4u32, Level::Info, options).unwrap().sum();
/// assert_eq!(total, 10);
/// ```
pub fn tqdm_colored<I>(iterable: I, level: Level, options: ProgressOptions) -> LogResult<ProgressBarIter<I::IntoIter>>
where
    I: IntoIterator,
{
    let iter = iterable.into_iter();
    let len = options.total.or_else(|| match iter.size_hint() {
        (lower, Some(upper)) if lower == upper => Some(upper as u64),
        _ => None,
    });

    let bar = build_bar(level, &options, len)?;
    Ok(bar.wrap_iter(iter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_tints_only_the_bar() {
        let format = colorize_bar_format(DEFAULT_BAR_FORMAT, Level::Info);
        assert!(format.contains("{wide_bar:.cyan}"));
        assert!(format.starts_with("{prefix}{percent:>3}%|"));
        assert!(format.ends_with("| {pos}/{len} [{elapsed_precise}<{eta_precise}, {per_sec}]"));
    }

    #[test]
    fn test_colorize_keeps_width_and_explicit_styles() {
        assert_eq!(colorize_bar_format("{bar}", Level::Error), "{bar:.red}");
        assert_eq!(colorize_bar_format("[{bar:40}] {msg}", Level::Warning), "[{bar:40.yellow}] {msg}");
        assert_eq!(colorize_bar_format("{bar:.blue/white}", Level::Error), "{bar:.blue/white}");
        assert_eq!(colorize_bar_format("{bar}", Level::Critical), "{bar:.black.on_green}");
        assert_eq!(colorize_bar_format("{pos} {barn", Level::Debug), "{pos} {barn");
    }

    #[test]
    fn test_tqdm_colored_advances_with_iteration() {
        let options = ProgressOptions::new().with_disable(true);
        let mut iter = tqdm_colored(vec!["a", "b", "c"], Level::Debug, options).unwrap();
        assert_eq!(iter.progress.length(), Some(3));

        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.progress.position(), 1);
        assert_eq!(iter.by_ref().count(), 2);
        assert_eq!(iter.progress.position(), 3);
        assert!(iter.progress.is_finished());
    }

    #[test]
    fn test_tqdm_colored_unknown_length() {
        let options = ProgressOptions::new().with_disable(true);
        let iter = tqdm_colored((0u32..).take_while(|n| *n < 4), Level::Info, options).unwrap();
        assert_eq!(iter.progress.length(), None);
        assert_eq!(iter.count(), 4);
    }

    #[test]
    fn test_explicit_total_and_desc() {
        let options = ProgressOptions::new()
            .with_total(10)
            .with_desc("files")
            .with_bar_format("{prefix}[{bar:20}] {pos}/{len}")
            .with_disable(true);
        let iter = tqdm_colored(0..3, Level::Warning, options).unwrap();
        assert_eq!(iter.progress.length(), Some(10));
        assert_eq!(iter.progress.prefix(), "files: ");
    }

    #[test]
    fn test_manual_progress_bar() {
        let bar = progress_bar(Level::Error, &ProgressOptions::new().with_total(2).with_disable(true)).unwrap();
        bar.inc(2);
        assert_eq!(bar.position(), 2);
        assert!(bar.is_hidden());
    }
}
