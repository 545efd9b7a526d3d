//! A fixed-size grid of cells.

use conui_core::{ColorAttr, Position, Size};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::cell::Cell;

/// A 2D grid of cells, indexed by column and row.
///
/// Writes that fall outside the grid are silently discarded, the same way a
/// terminal ignores output past its last column.
///
/// # Examples
///
/// ```
/// use conui_buffer::Buffer;
/// use conui_core::{ColorAttr, Position};
///
/// let mut buffer = Buffer::new(10, 2);
/// buffer.put_str(Position::new(2, 1), "hi", ColorAttr::default());
/// assert_eq!(buffer.to_lines(), vec!["".to_string(), "  hi".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Creates a buffer of blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    /// Returns the buffer dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width as i32, self.height as i32)
    }

    /// Returns the buffer width in columns.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the buffer height in rows.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width as usize && y < self.height as usize).then(|| y * self.width as usize + x)
    }

    /// Returns the cell at (x, y), if inside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Sets the cell at (x, y). Returns false if the position is outside.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Resets every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Writes a string starting at `pos` and returns the position just after
    /// the last column written.
    ///
    /// Each grapheme occupies its display width; wide graphemes write a
    /// continuation cell after their head.
    pub fn put_str(&mut self, pos: Position, text: &str, attr: ColorAttr) -> Position {
        let mut x = pos.x;
        for grapheme in text.graphemes(true) {
            let width = grapheme.width();
            if width == 0 {
                continue;
            }
            let character = grapheme.chars().next().unwrap_or(' ');
            self.set(
                x,
                pos.y,
                Cell::new(character).with_attr(attr).with_width(width as u8),
            );
            for extra in 1..width {
                self.set(x + extra as i32, pos.y, Cell::continuation(attr));
            }
            x += width as i32;
        }
        Position::new(x, pos.y)
    }

    /// Returns the cells of row `y`.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Returns the text of row `y` with trailing blanks removed.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|c| !c.is_continuation())
                    .map(|c| c.character)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }

    /// Returns every row as plain text, trimming trailing blank rows.
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = (0..self.height).map(|y| self.row_text(y)).collect();
        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        lines
    }

    /// Returns every row with SGR color escapes, ending each row with a reset.
    ///
    /// An escape is emitted only where the attribute changes.
    pub fn to_ansi_lines(&self) -> Vec<String> {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .map(|cells| {
                let mut out = String::new();
                let mut current: Option<ColorAttr> = None;
                for cell in cells.iter().filter(|c| !c.is_continuation()) {
                    if current != Some(cell.attr) {
                        out.push_str(&cell.attr.to_sgr());
                        current = Some(cell.attr);
                    }
                    out.push(cell.character);
                }
                out.push_str("\x1b[0m");
                out
            })
            .collect()
    }
}
