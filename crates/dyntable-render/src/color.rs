//! Named color lookup for render targets.
//!
//! Cells are colored with symbolic names. Several names can be joined with
//! commas on one cell (`"red,bold"`) and compose; unknown names contribute
//! nothing.
//!
//! | Name | Terminal | HTML |
//! |------|----------|------|
//! | `black`, `blue`, `green`, `dimgray`, `yellow`, `red`, `purple`, `cyan` | foreground | `<font color="..">` |
//! | `bg_red`, `bg_green`, `bg_brown`, `bg_blue`, `bg_purple`, `bg_cyan`, `bg_gray` | background | `<span style="background-color:..">` |
//! | `bold` | `ESC[1m` | `<b>` |
//! | `underline` | `ESC[4m` | `<u>` |
//! | `blink` | `ESC[5m` | `<blink>` |
//!
//! # Example
//!
//! ```rust
//! use dyntable_render::{style_for, ColorTarget};
//!
//! let style = style_for(ColorTarget::Terminal, "red,bold").unwrap();
//! assert_eq!(style.start, "\x1b[91m\x1b[1m");
//! assert_eq!(style.end, "\x1b[0m");
//!
//! assert!(style_for(ColorTarget::Terminal, "mauve").is_none());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Terminal reset sequence appended after a styled cell.
pub const TERMINAL_RESET: &str = "\x1b[0m";

static TERMINAL_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("black", "\x1b[30m"),
        ("blue", "\x1b[94m"),
        ("green", "\x1b[92m"),
        ("dimgray", "\x1b[90m"),
        ("yellow", "\x1b[93m"),
        ("red", "\x1b[91m"),
        ("purple", "\x1b[95m"),
        ("cyan", "\x1b[96m"),
        ("bg_red", "\x1b[41m"),
        ("bg_green", "\x1b[42m"),
        ("bg_brown", "\x1b[43m"),
        ("bg_blue", "\x1b[44m"),
        ("bg_purple", "\x1b[45m"),
        ("bg_cyan", "\x1b[46m"),
        ("bg_gray", "\x1b[47m"),
        ("bold", "\x1b[1m"),
        ("underline", "\x1b[4m"),
        ("blink", "\x1b[5m"),
    ])
});

/// One HTML wrapper: opening and closing tag.
type HtmlTag = (String, &'static str);

static HTML_TAGS: Lazy<HashMap<&'static str, HtmlTag>> = Lazy::new(|| {
    let mut tags: HashMap<&'static str, HtmlTag> = HashMap::new();
    for name in [
        "black", "blue", "green", "dimgray", "yellow", "red", "purple", "cyan",
    ] {
        tags.insert(name, (format!("<font color=\"{}\">", name), "</font>"));
    }
    for (name, css) in [
        ("bg_red", "red"),
        ("bg_green", "green"),
        ("bg_brown", "brown"),
        ("bg_blue", "blue"),
        ("bg_purple", "purple"),
        ("bg_cyan", "cyan"),
        ("bg_gray", "gray"),
    ] {
        tags.insert(
            name,
            (
                format!("<span style=\"background-color:{}\">", css),
                "</span>",
            ),
        );
    }
    tags.insert("bold", ("<b>".to_string(), "</b>"));
    tags.insert("underline", ("<u>".to_string(), "</u>"));
    tags.insert("blink", ("<blink>".to_string(), "</blink>"));
    tags
});

/// The output a color is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    /// ANSI escape sequences.
    Terminal,
    /// Nested inline HTML tags.
    Html,
}

/// Text to emit before and after a styled cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub start: String,
    pub end: String,
}

impl CellStyle {
    /// Wraps `content` in this style.
    pub fn wrap(&self, content: &str) -> String {
        format!("{}{}{}", self.start, content, self.end)
    }
}

/// Resolves a comma-joined color spec for `target`.
///
/// Returns `None` when no name in the spec is recognized.
pub fn style_for(target: ColorTarget, spec: &str) -> Option<CellStyle> {
    let names = spec.split(',').map(str::trim).filter(|n| !n.is_empty());

    match target {
        ColorTarget::Terminal => {
            let start: String = names
                .filter_map(|n| TERMINAL_CODES.get(n).copied())
                .collect();
            if start.is_empty() {
                None
            } else {
                Some(CellStyle {
                    start,
                    end: TERMINAL_RESET.to_string(),
                })
            }
        }
        ColorTarget::Html => {
            let tags: Vec<&HtmlTag> = names.filter_map(|n| HTML_TAGS.get(n)).collect();
            if tags.is_empty() {
                return None;
            }
            let start = tags.iter().map(|(open, _)| open.as_str()).collect();
            let end = tags.iter().rev().map(|(_, close)| *close).collect();
            Some(CellStyle { start, end })
        }
    }
}

/// Resolves per-cell styles for a row of `cell_count` cells.
///
/// Color lists shorter than the row leave the trailing cells unstyled; extra
/// entries are ignored.
pub fn row_styles<S: AsRef<str>>(
    target: ColorTarget,
    colors: &[S],
    cell_count: usize,
) -> Vec<Option<CellStyle>> {
    (0..cell_count)
        .map(|i| {
            colors
                .get(i)
                .and_then(|spec| style_for(target, spec.as_ref()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_single_color() {
        let style = style_for(ColorTarget::Terminal, "bg_brown").unwrap();
        assert_eq!(style.start, "\x1b[43m");
        assert_eq!(style.end, TERMINAL_RESET);
    }

    #[test]
    fn terminal_unknown_names_are_skipped() {
        let style = style_for(ColorTarget::Terminal, "nope,underline").unwrap();
        assert_eq!(style.start, "\x1b[4m");
        assert!(style_for(ColorTarget::Terminal, "").is_none());
    }

    #[test]
    fn html_tags_close_in_reverse() {
        let style = style_for(ColorTarget::Html, "red,bold").unwrap();
        assert_eq!(style.wrap("x"), "<font color=\"red\"><b>x</b></font>");
    }

    #[test]
    fn html_background() {
        let style = style_for(ColorTarget::Html, "bg_gray").unwrap();
        assert_eq!(
            style.wrap("x"),
            "<span style=\"background-color:gray\">x</span>"
        );
    }

    #[test]
    fn row_styles_pad_short_color_lists() {
        let styles = row_styles(ColorTarget::Terminal, &["red"], 3);
        assert_eq!(styles.len(), 3);
        assert!(styles[0].is_some());
        assert!(styles[1].is_none());
        assert!(styles[2].is_none());
    }

    #[test]
    fn row_styles_ignore_extra_colors() {
        let styles = row_styles(ColorTarget::Html, &["red", "blue", "green"], 1);
        assert_eq!(styles.len(), 1);
    }
}
