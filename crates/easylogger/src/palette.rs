//! Fixed severity -> color palette
//!
//! The same keys drive the colored log formatter (through [`console::Style`])
//! and progress-bar tinting (through indicatif's `{bar:.style}` templates),
//! which both understand the dotted style syntax.

use console::{Style, StyledObject};
use once_cell::sync::Lazy;

use crate::level::Level;

/// Dotted style key per level
pub const PALETTE: [(Level, &str); 5] = [
    (Level::Debug, "white"),
    (Level::Info, "cyan"),
    (Level::Warning, "yellow"),
    (Level::Error, "red"),
    (Level::Critical, "black.on_green"),
];

/// Styles built once from [`PALETTE`]. Styling is forced so colored output
/// is produced even when the destination is not a terminal.
static STYLES: Lazy<[Style; 5]> = Lazy::new(|| {
    PALETTE.map(|(_, key)| Style::from_dotted_str(key).force_styling(true))
});

fn index(level: Level) -> usize {
    match level {
        Level::Debug => 0,
        Level::Info => 1,
        Level::Warning => 2,
        Level::Error => 3,
        Level::Critical => 4,
    }
}

/// Palette key for a level, e.g. `"cyan"`
pub fn style_key(level: Level) -> &'static str {
    PALETTE[index(level)].1
}

/// Terminal style for a level
pub fn style(level: Level) -> &'static Style {
    &STYLES[index(level)]
}

/// Wrap `value` in the level's color, followed by a reset
pub fn paint<D>(level: Level, value: D) -> StyledObject<D> {
    style(level).apply_to(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_covers_every_level_in_order() {
        for (i, level) in Level::ALL.into_iter().enumerate() {
            assert_eq!(PALETTE[i].0, level);
        }
        assert_eq!(style_key(Level::Info), "cyan");
        assert_eq!(style_key(Level::Critical), "black.on_green");
    }

    #[test]
    fn test_paint_wraps_text_in_escape_codes() {
        let painted = paint(Level::Error, "boom").to_string();
        assert!(painted.starts_with("\u{1b}["));
        assert!(painted.contains("boom"));
        assert!(painted.ends_with("\u{1b}[0m"));
        assert_eq!(console::strip_ansi_codes(&painted), "boom");
    }

    #[test]
    fn test_critical_has_background() {
        let painted = paint(Level::Critical, "x").to_string();
        // black foreground, green background
        assert!(painted.contains("30"));
        assert!(painted.contains("42"));
    }
}
