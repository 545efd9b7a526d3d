//! Headless render target backed by an in-memory buffer.

use conui_buffer::Buffer;
use conui_core::{ColorAttr, Position, Result};

use crate::backend::RenderTarget;

/// A render target that records output into a [`Buffer`].
///
/// Used by tests and by `--capture` runs to get a text snapshot of what a
/// terminal would show.
///
/// # Example
///
/// ```
/// use conui_core::Position;
/// use conui_terminal::{CaptureTarget, RenderTarget};
///
/// let mut target = CaptureTarget::new(20, 3);
/// target.set_cursor(Position::new(1, 1)).unwrap();
/// target.write_str("hello").unwrap();
/// assert_eq!(target.lines(), vec!["", " hello"]);
/// ```
#[derive(Debug, Clone)]
pub struct CaptureTarget {
    buffer: Buffer,
    cursor: Position,
    attr: ColorAttr,
    writes: usize,
}

impl CaptureTarget {
    /// Creates a blank capture of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor: Position::ZERO,
            attr: ColorAttr::default(),
            writes: 0,
        }
    }

    /// Returns the captured buffer.
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    /// Returns the current cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the attribute selected for the next write.
    pub fn attr(&self) -> ColorAttr {
        self.attr
    }

    /// Returns how many `write_str` calls were recorded.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Returns the capture as plain text rows.
    pub fn lines(&self) -> Vec<String> {
        self.buffer.to_lines()
    }

    /// Returns the capture as rows with SGR color escapes.
    pub fn ansi_lines(&self) -> Vec<String> {
        self.buffer.to_ansi_lines()
    }

    /// Clears the buffer and resets cursor and attribute.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.cursor = Position::ZERO;
        self.attr = ColorAttr::default();
        self.writes = 0;
    }
}

impl RenderTarget for CaptureTarget {
    fn set_cursor(&mut self, pos: Position) -> Result<()> {
        if pos.is_non_negative() {
            self.cursor = pos;
        }
        Ok(())
    }

    fn set_colors(&mut self, attr: ColorAttr) -> Result<()> {
        self.attr = attr;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.cursor = self.buffer.put_str(self.cursor, text, self.attr);
        self.writes += 1;
        Ok(())
    }
}
