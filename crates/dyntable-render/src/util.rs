//! Utility functions for measuring and fitting cell text.
//!
//! Widths are counted in characters, not bytes and not terminal columns.

/// Returns the length of `s` in characters.
///
/// # Example
///
/// ```rust
/// use dyntable_render::char_len;
///
/// assert_eq!(char_len("abc"), 3);
/// assert_eq!(char_len("héllo"), 5);
/// ```
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Left-justifies `s` to `width` characters using `fill`.
///
/// Text already at least `width` long is returned unchanged. An empty `fill`
/// pads nothing.
///
/// # Example
///
/// ```rust
/// use dyntable_render::pad_right;
///
/// assert_eq!(pad_right("ab", 5, "."), "ab...");
/// assert_eq!(pad_right("abcdef", 3, "."), "abcdef");
/// ```
pub fn pad_right(s: &str, width: usize, fill: &str) -> String {
    let len = char_len(s);
    if len >= width || fill.is_empty() {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - len) * fill.len());
    out.push_str(s);
    out.push_str(&repeat_to_width(fill, width - len));
    out
}

/// Cuts `s` to at most `width` characters, then pads it to exactly `width`.
///
/// No ellipsis is added; static widths cut text hard.
///
/// # Example
///
/// ```rust
/// use dyntable_render::fit_to_width;
///
/// assert_eq!(fit_to_width("Hello World", 5, " "), "Hello");
/// assert_eq!(fit_to_width("Hi", 5, " "), "Hi   ");
/// ```
pub fn fit_to_width(s: &str, width: usize, fill: &str) -> String {
    let cut: String = s.chars().take(width).collect();
    pad_right(&cut, width, fill)
}

/// Repeats `pattern` until it spans `width` characters, cutting the last
/// repetition short if needed.
pub fn repeat_to_width(pattern: &str, width: usize) -> String {
    if pattern.is_empty() {
        return String::new();
    }
    pattern.chars().cycle().take(width).collect()
}

/// Escapes the characters that are significant in HTML text and attribute
/// values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
