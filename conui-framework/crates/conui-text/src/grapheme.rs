//! Grapheme cluster utilities.
//!
//! Layout works on grapheme clusters rather than `char`s so that combining
//! marks stay attached to their base character and wide characters (CJK,
//! emoji) are measured as two columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Returns an iterator over grapheme clusters paired with their display
/// widths.
///
/// # Example
///
/// ```
/// use conui_text::grapheme::graphemes_with_widths;
///
/// let widths: Vec<_> = graphemes_with_widths("a日").collect();
/// assert_eq!(widths, vec![("a", 1), ("日", 2)]);
/// ```
#[inline]
pub fn graphemes_with_widths(text: &str) -> impl Iterator<Item = (&str, usize)> {
    text.graphemes(true).map(|g| (g, grapheme_display_width(g)))
}

/// Returns the number of terminal columns a grapheme cluster occupies.
///
/// Tabs count as one column, line breaks as zero, and emoji sequences joined
/// with ZWJ or a variation selector as two.
///
/// ```
/// use conui_text::grapheme::grapheme_display_width;
///
/// assert_eq!(grapheme_display_width("a"), 1);
/// assert_eq!(grapheme_display_width("中"), 2);
/// assert_eq!(grapheme_display_width("e\u{301}"), 1);
/// ```
pub fn grapheme_display_width(grapheme: &str) -> usize {
    match grapheme {
        "" | "\n" | "\r" | "\r\n" => return 0,
        "\t" => return 1,
        _ => {}
    }

    if grapheme.chars().count() > 1 && grapheme.contains(['\u{200D}', '\u{FE0F}']) {
        return 2;
    }

    grapheme
        .chars()
        .filter(|&c| !is_zero_width_char(c))
        .filter_map(UnicodeWidthChar::width)
        .max()
        .unwrap_or(0)
}

/// Returns true for characters that never advance the cursor.
#[inline]
pub fn is_zero_width_char(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}'
            | '\u{2060}'..='\u{2064}'
            | '\u{FE00}'..='\u{FE0F}'
            | '\u{FEFF}'
            | '\u{0300}'..='\u{036F}'
    ) || c.width() == Some(0)
}

/// Returns true if a space-like grapheme separates words.
#[inline]
pub(crate) fn is_word_separator(grapheme: &str) -> bool {
    grapheme == " "
}
