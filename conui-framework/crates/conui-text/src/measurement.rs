//! Width measurement and column clipping.

use std::ops::Range;

use crate::grapheme::graphemes_with_widths;

/// Returns the display width of `text` in terminal columns.
///
/// ```
/// use conui_text::measurement::display_width;
///
/// assert_eq!(display_width("Hello"), 5);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    graphemes_with_widths(text).map(|(_, w)| w).sum()
}

/// Returns the width of the widest `'\n'`-separated line.
///
/// ```
/// use conui_text::measurement::widest_line;
///
/// assert_eq!(widest_line("ab\nabcd\nc"), 4);
/// assert_eq!(widest_line(""), 0);
/// ```
pub fn widest_line(text: &str) -> usize {
    text.split('\n').map(display_width).max().unwrap_or(0)
}

/// Returns the part of `text` that is visible when it starts at column
/// `start` and only the columns in `visible` are shown.
///
/// The result is the starting column of the visible run together with the
/// run itself, or `None` if nothing is visible. A wide grapheme that would
/// straddle either edge of the window is dropped rather than cut in half.
///
/// ```
/// use conui_text::measurement::clip_columns;
///
/// assert_eq!(clip_columns("abcdef", 2, 4..6), Some((4, "cd")));
/// assert_eq!(clip_columns("abc", 10, 0..5), None);
/// ```
pub fn clip_columns(text: &str, start: i32, visible: Range<i32>) -> Option<(i32, &str)> {
    if visible.start >= visible.end {
        return None;
    }

    let mut col = start;
    let mut first: Option<(i32, usize)> = None;
    let mut end_byte = 0;
    let mut byte = 0;

    for (grapheme, width) in graphemes_with_widths(text) {
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let next_byte = byte + grapheme.len();
        if col >= visible.end {
            break;
        }
        if col >= visible.start && col + width <= visible.end {
            if first.is_none() {
                first = Some((col, byte));
            }
            end_byte = next_byte;
        } else if first.is_some() {
            break;
        }
        col += width;
        byte = next_byte;
    }

    let (first_col, start_byte) = first?;
    if end_byte <= start_byte {
        return None;
    }
    Some((first_col, &text[start_byte..end_byte]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_width() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("Hello 世界"), 10);
    }

    #[test]
    fn test_clip_fully_visible() {
        assert_eq!(clip_columns("hello", 0, 0..80), Some((0, "hello")));
        assert_eq!(clip_columns("hello", 3, 0..80), Some((3, "hello")));
    }

    #[test]
    fn test_clip_left_and_right() {
        // Starts left of the window.
        assert_eq!(clip_columns("hello", -2, 0..80), Some((0, "llo")));
        // Runs past the right edge.
        assert_eq!(clip_columns("hello", 0, 0..3), Some((0, "hel")));
        // Both.
        assert_eq!(clip_columns("hello world", 1, 3..8), Some((3, "llo w")));
    }

    #[test]
    fn test_clip_drops_straddling_wide_graphemes() {
        // "日" occupies columns 0-1, "本" 2-3; window is 1..3.
        assert_eq!(clip_columns("日本", 0, 1..3), None);
        assert_eq!(clip_columns("日本x", 0, 1..5), Some((2, "本x")));
    }

    #[test]
    fn test_clip_empty_window() {
        assert_eq!(clip_columns("hello", 0, 4..4), None);
        assert_eq!(clip_columns("", 0, 0..10), None);
    }
}
