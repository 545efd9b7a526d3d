//! Terminal cell representation.
//!
//! A [`Cell`] is one character position of a captured screen: the character
//! shown there, the color attribute it was written with and its width.

use conui_core::ColorAttr;

/// A single cell in a captured screen.
///
/// # Wide Characters
///
/// Characters that occupy two columns (CJK, emoji) store the character in
/// the first cell with `width == 2` and mark the following cell as a
/// continuation with `width == 0`.
///
/// # Examples
///
/// ```
/// use conui_buffer::Cell;
/// use conui_core::{Color, ColorAttr};
///
/// let cell = Cell::new('A').with_attr(ColorAttr::new(Color::White, Color::Blue));
/// assert_eq!(cell.character, 'A');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The character displayed in this cell.
    ///
    /// For multi-codepoint grapheme clusters this holds the first codepoint.
    pub character: char,

    /// The attribute the cell was last written with.
    pub attr: ColorAttr,

    /// Display width: 1 for normal, 2 for the head of a wide character,
    /// 0 for its continuation.
    pub width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}

impl Cell {
    /// Creates a cell holding `character` in the default attribute.
    #[inline]
    pub fn new(character: char) -> Self {
        Self {
            character,
            attr: ColorAttr::default(),
            width: 1,
        }
    }

    /// Creates the continuation half of a wide character.
    #[inline]
    pub fn continuation(attr: ColorAttr) -> Self {
        Self {
            character: ' ',
            attr,
            width: 0,
        }
    }

    /// Sets the attribute.
    #[inline]
    pub const fn with_attr(self, attr: ColorAttr) -> Self {
        Self { attr, ..self }
    }

    /// Sets the display width.
    #[inline]
    pub const fn with_width(self, width: u8) -> Self {
        Self { width, ..self }
    }

    /// Returns true if this is a continuation cell.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.width == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conui_core::Color;

    #[test]
    fn test_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.character, ' ');
        assert_eq!(cell.attr, ColorAttr::default());
        assert!(!cell.is_continuation());
    }

    #[test]
    fn test_builders() {
        let attr = ColorAttr::new(Color::Yellow, Color::Black);
        let cell = Cell::new('x').with_attr(attr).with_width(2);
        assert_eq!(cell.attr, attr);
        assert_eq!(cell.width, 2);
        assert!(Cell::continuation(attr).is_continuation());
    }
}
