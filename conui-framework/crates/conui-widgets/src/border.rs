//! Border characters for frames.

/// Characters used to draw a frame border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    /// Top-left corner character.
    pub top_left: char,
    /// Top-right corner character.
    pub top_right: char,
    /// Bottom-left corner character.
    pub bottom_left: char,
    /// Bottom-right corner character.
    pub bottom_right: char,
    /// Horizontal edge character.
    pub horizontal: char,
    /// Vertical edge character.
    pub vertical: char,
}

impl BorderChars {
    /// Plain ASCII border characters.
    pub const ASCII: Self = Self::uniform('|', '-', '+');

    /// Single-line box-drawing characters.
    pub const SINGLE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Double-line box-drawing characters.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// A border using the same character for all four corners.
    pub const fn uniform(vertical: char, horizontal: char, corner: char) -> Self {
        Self {
            top_left: corner,
            top_right: corner,
            bottom_left: corner,
            bottom_right: corner,
            horizontal,
            vertical,
        }
    }

    /// Builds one horizontal edge of a border `width` columns wide.
    pub(crate) fn edge(&self, width: usize, top: bool) -> String {
        let (left, right) = if top {
            (self.top_left, self.top_right)
        } else {
            (self.bottom_left, self.bottom_right)
        };
        match width {
            0 => String::new(),
            1 => left.to_string(),
            _ => {
                let mut line = String::with_capacity(width);
                line.push(left);
                line.extend(std::iter::repeat(self.horizontal).take(width - 2));
                line.push(right);
                line
            }
        }
    }

    /// Builds a middle row: vertical edges around `width - 2` spaces.
    pub(crate) fn middle(&self, width: usize) -> String {
        match width {
            0 => String::new(),
            1 => self.vertical.to_string(),
            _ => {
                let mut line = String::with_capacity(width);
                line.push(self.vertical);
                line.extend(std::iter::repeat(' ').take(width - 2));
                line.push(self.vertical);
                line
            }
        }
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::ASCII
    }
}
