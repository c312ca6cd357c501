//! Common utility functions shared across the codebase.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `text` to at most `max_width` terminal columns, ending with `…`
/// when anything was cut. Wide characters (CJK, emoji) count as two columns.
///
/// # Examples
///
/// ```
/// use i18n_sweep::utils::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Submit", 10), "Submit");
/// assert_eq!(truncate_to_width("Hello, world", 8), "Hello, …");
/// assert_eq!(truncate_to_width("送信する", 5), "送信…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}
