//! Greedy line breaking.
//!
//! [`layout_lines`] turns raw text into the lines a text element shows for a
//! given width and height budget. The same function is used to measure an
//! element while sizing it and to draw it, so the measured height and the
//! drawn line count can never disagree.
//!
//! Two modes exist:
//!
//! - [`WrapMode::Word`] buffers non-space graphemes into a pending word and
//!   places whole words. A word that does not fit moves to a new line; a word
//!   wider than the whole line is never split, it overflows its own line.
//! - [`WrapMode::Truncate`] appends grapheme by grapheme and moves to a new
//!   line when the current one is full.
//!
//! In both modes a line is only opened while the height budget allows it
//! (and, after the first line, only in multiline mode). Once no further line
//! may be opened the rest of the text is dropped. Trailing whitespace is
//! stripped from every emitted line.

use crate::grapheme::{graphemes_with_widths, is_word_separator};

/// How text that is wider than its element is broken into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Break anywhere; text that does not fit in the height budget is cut.
    Truncate,
    /// Break between words.
    #[default]
    Word,
}

/// Parameters for [`layout_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Line width in columns.
    pub width: usize,
    /// Maximum number of lines; 0 means unbounded.
    pub height: usize,
    /// Line breaking mode.
    pub wrap: WrapMode,
    /// Whether text may continue on more than one line.
    pub multiline: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            width: 80,
            height: 0,
            wrap: WrapMode::Word,
            multiline: true,
        }
    }
}

impl LayoutOptions {
    /// Creates options for the given box, word-wrapping over multiple lines.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the wrap mode.
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set whether more than one line may be produced.
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }
}

/// Accumulates lines while enforcing the width and height budget.
struct LineBuilder {
    options: LayoutOptions,
    lines: Vec<String>,
    current_width: usize,
    stopped: bool,
}

impl LineBuilder {
    fn new(options: LayoutOptions) -> Self {
        Self {
            options,
            lines: Vec::new(),
            current_width: 0,
            stopped: false,
        }
    }

    fn can_open_line(&self) -> bool {
        self.lines.is_empty()
            || (self.options.multiline
                && (self.options.height == 0 || self.lines.len() < self.options.height))
    }

    /// Opens a new line, or stops the layout if the budget is exhausted.
    fn open_line(&mut self) -> bool {
        if self.can_open_line() {
            self.lines.push(String::new());
            self.current_width = 0;
            true
        } else {
            self.stopped = true;
            false
        }
    }

    fn ensure_line(&mut self) -> bool {
        !self.lines.is_empty() || self.open_line()
    }

    fn current_is_blank(&self) -> bool {
        self.lines
            .last()
            .is_none_or(|line| line.trim_end().is_empty())
    }

    fn push(&mut self, text: &str, width: usize) {
        if let Some(line) = self.lines.last_mut() {
            line.push_str(text);
            self.current_width += width;
        }
    }

    fn fits(&self, width: usize) -> bool {
        self.current_width + width <= self.options.width
    }

    /// Places a whole word, moving to a new line when it does not fit.
    fn place_word(&mut self, word: &str, width: usize) {
        if word.is_empty() || !self.ensure_line() {
            return;
        }
        if self.fits(width) || self.current_is_blank() {
            self.push(word, width);
        } else if self.open_line() {
            self.push(word, width);
        }
    }

    /// Places a single grapheme in truncate mode.
    fn place_grapheme(&mut self, grapheme: &str, width: usize) {
        if !self.ensure_line() {
            return;
        }
        if self.fits(width) {
            self.push(grapheme, width);
        } else if self.current_width > 0 && self.open_line() {
            if self.fits(width) {
                self.push(grapheme, width);
            } else {
                self.stopped = true;
            }
        } else {
            self.stopped = true;
        }
    }

    /// Places a separator space if it fits; otherwise it is absorbed by the
    /// line break.
    fn place_space(&mut self, space: &str, width: usize) {
        if self.ensure_line() && self.fits(width) {
            self.push(space, width);
        }
    }

    fn finish(self) -> Vec<String> {
        self.lines
            .into_iter()
            .map(|line| line.trim_end().to_string())
            .collect()
    }
}

/// Breaks `text` into display lines.
///
/// # Example
///
/// ```
/// use conui_text::wrap::{layout_lines, LayoutOptions, WrapMode};
///
/// let lines = layout_lines("hello world", LayoutOptions::new(5, 0));
/// assert_eq!(lines, vec!["hello", "world"]);
///
/// let opts = LayoutOptions::new(5, 1).with_wrap(WrapMode::Truncate);
/// assert_eq!(layout_lines("abcdefgh", opts), vec!["abcde"]);
/// ```
pub fn layout_lines(text: &str, options: LayoutOptions) -> Vec<String> {
    let mut builder = LineBuilder::new(options);
    let mut word = String::new();
    let mut word_width = 0;

    for (grapheme, width) in graphemes_with_widths(text) {
        if builder.stopped {
            break;
        }

        if grapheme == "\n" || grapheme == "\r\n" {
            builder.place_word(&word, word_width);
            word.clear();
            word_width = 0;
            if !builder.ensure_line() || !options.multiline || !builder.open_line() {
                break;
            }
            continue;
        }

        match options.wrap {
            WrapMode::Truncate => builder.place_grapheme(grapheme, width),
            WrapMode::Word if is_word_separator(grapheme) => {
                builder.place_word(&word, word_width);
                word.clear();
                word_width = 0;
                if !builder.stopped {
                    builder.place_space(grapheme, width);
                }
            }
            WrapMode::Word => {
                word.push_str(grapheme);
                word_width += width;
            }
        }
    }

    if !builder.stopped {
        builder.place_word(&word, word_width);
    }

    builder.finish()
}

/// Returns the number of lines [`layout_lines`] produces.
pub fn line_count(text: &str, options: LayoutOptions) -> usize {
    layout_lines(text, options).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::display_width;
    use pretty_assertions::assert_eq;

    fn word(width: usize, height: usize) -> LayoutOptions {
        LayoutOptions::new(width, height)
    }

    fn truncate(width: usize, height: usize) -> LayoutOptions {
        LayoutOptions::new(width, height).with_wrap(WrapMode::Truncate)
    }

    mod word_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_breaks_between_words() {
            assert_eq!(layout_lines("hello world", word(5, 0)), vec!["hello", "world"]);
            assert_eq!(
                layout_lines("aaa bbb ccc", word(7, 0)),
                vec!["aaa bbb", "ccc"]
            );
        }

        #[test]
        fn test_overlong_word_gets_its_own_line() {
            assert_eq!(
                layout_lines("a incomprehensibilities b", word(6, 0)),
                vec!["a", "incomprehensibilities", "b"]
            );
            // No empty line before an overlong first word.
            assert_eq!(layout_lines("abcdefgh", word(3, 0)), vec!["abcdefgh"]);
        }

        #[test]
        fn test_height_budget_drops_the_rest() {
            assert_eq!(layout_lines("one two three four", word(4, 2)), vec!["one", "two"]);
        }

        #[test]
        fn test_single_line_mode() {
            let opts = word(9, 0).with_multiline(false);
            assert_eq!(layout_lines("one two three", opts), vec!["one two"]);
            assert_eq!(layout_lines("one\ntwo", opts), vec!["one"]);
        }

        #[test]
        fn test_explicit_newlines() {
            assert_eq!(layout_lines("ab\ncd", word(10, 0)), vec!["ab", "cd"]);
            assert_eq!(layout_lines("ab\n\ncd", word(10, 0)), vec!["ab", "", "cd"]);
            assert_eq!(layout_lines("ab\n", word(10, 0)), vec!["ab", ""]);
            assert_eq!(layout_lines("ab\ncd\nef", word(10, 2)), vec!["ab", "cd"]);
        }

        #[test]
        fn test_leading_spaces_are_kept() {
            assert_eq!(layout_lines("  hi", word(10, 0)), vec!["  hi"]);
        }

        #[test]
        fn test_wide_graphemes() {
            assert_eq!(layout_lines("日本 語", word(4, 0)), vec!["日本", "語"]);
        }

        #[test]
        fn test_lines_respect_width() {
            let text = "the quick brown fox jumps over the lazy dog and keeps running";
            for width in 3..20 {
                for line in layout_lines(text, word(width, 0)) {
                    assert!(
                        display_width(&line) <= width || !line.contains(' '),
                        "line {line:?} exceeds width {width}"
                    );
                }
            }
        }
    }

    mod truncate_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_cuts_at_width() {
            assert_eq!(layout_lines("abcdefgh", truncate(5, 1)), vec!["abcde"]);
            assert_eq!(
                layout_lines("abcdefgh", truncate(5, 1).with_multiline(false)),
                vec!["abcde"]
            );
        }

        #[test]
        fn test_continues_on_following_lines() {
            assert_eq!(
                layout_lines("abcdefgh", truncate(3, 0)),
                vec!["abc", "def", "gh"]
            );
            assert_eq!(layout_lines("abcdefgh", truncate(3, 2)), vec!["abc", "def"]);
        }

        #[test]
        fn test_strips_trailing_whitespace() {
            assert_eq!(layout_lines("ab   ", truncate(10, 1)), vec!["ab"]);
        }

        #[test]
        fn test_is_idempotent() {
            let text = "some text that goes on\nand on";
            let once = layout_lines(text, truncate(6, 0));
            let again = layout_lines(&once.join("\n"), truncate(6, 0));
            assert_eq!(once, again);
        }
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(layout_lines("", word(10, 3)).is_empty());
        assert_eq!(line_count("", truncate(10, 3)), 0);
    }

    #[test]
    fn test_line_count_never_exceeds_height() {
        let text = "a b c d e f g h i j k l m n o p";
        for height in 1..6 {
            assert!(line_count(text, word(1, height)) <= height);
            assert!(line_count(text, truncate(1, height)) <= height);
        }
    }
}
