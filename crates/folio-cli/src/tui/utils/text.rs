//! Text measuring and wrapping helpers
//!
//! All widths are display columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap text to `width` columns. Blank input yields one empty line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    for paragraph in text.split('\n') {
        if paragraph.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        out.extend(
            textwrap::wrap(paragraph, width)
                .into_iter()
                .map(|line| line.into_owned()),
        );
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Truncate to `max_width` columns, ending with an ellipsis when cut
pub fn truncate_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad with spaces to exactly `width` columns (truncating if longer)
pub fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_ellipsis(text, width);
    let pad = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn test_truncate_ellipsis() {
        assert_eq!(truncate_ellipsis("short", 10), "short");
        assert_eq!(truncate_ellipsis("portfolio", 5), "port…");
        assert_eq!(truncate_ellipsis("abc", 0), "");
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abc…");
    }
}
