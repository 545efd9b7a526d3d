//! Render target abstraction and crossterm implementation.

use std::io::{self, Stdout, Write};

use conui_core::{Color, ColorAttr, Error, Position, Result};
use crossterm::{
    cursor::MoveTo,
    execute, queue,
    style::{Color as CrosstermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// The three primitives a render pass needs from an output device.
///
/// Implementations decide what an absolute position means; for a terminal
/// it is a screen cell, for a capture it is a cell of an in-memory grid.
pub trait RenderTarget {
    /// Moves the output cursor to an absolute position.
    ///
    /// Positions left of or above the origin are not addressable and are
    /// ignored.
    fn set_cursor(&mut self, pos: Position) -> Result<()>;

    /// Selects the attribute used by following writes.
    fn set_colors(&mut self, attr: ColorAttr) -> Result<()>;

    /// Writes text at the cursor and advances it.
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Pushes any buffered output to the device.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Crossterm-based render target.
///
/// Commands are queued on the writer and only reach the device on
/// [`RenderTarget::flush`].
pub struct CrosstermTarget<W: Write = Stdout> {
    out: W,
}

impl CrosstermTarget<Stdout> {
    /// Creates a target writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermTarget<W> {
    /// Creates a target writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Clears the whole screen.
    pub fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All)).map_err(Error::Io)
    }

    /// Returns the underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Converts a palette color to crossterm's color type.
    #[inline]
    fn to_crossterm_color(color: Color) -> CrosstermColor {
        match color {
            Color::Black => CrosstermColor::Black,
            Color::Blue => CrosstermColor::DarkBlue,
            Color::Green => CrosstermColor::DarkGreen,
            Color::Cyan => CrosstermColor::DarkCyan,
            Color::Red => CrosstermColor::DarkRed,
            Color::Magenta => CrosstermColor::DarkMagenta,
            Color::Yellow => CrosstermColor::DarkYellow,
            Color::Gray => CrosstermColor::Grey,
            Color::DarkGray => CrosstermColor::DarkGrey,
            Color::LightBlue => CrosstermColor::Blue,
            Color::LightGreen => CrosstermColor::Green,
            Color::LightCyan => CrosstermColor::Cyan,
            Color::LightRed => CrosstermColor::Red,
            Color::LightMagenta => CrosstermColor::Magenta,
            Color::LightYellow => CrosstermColor::Yellow,
            Color::White => CrosstermColor::White,
            Color::Transparent => CrosstermColor::Reset,
        }
    }
}

impl<W: Write> RenderTarget for CrosstermTarget<W> {
    fn set_cursor(&mut self, pos: Position) -> Result<()> {
        match (u16::try_from(pos.x), u16::try_from(pos.y)) {
            (Ok(x), Ok(y)) => queue!(self.out, MoveTo(x, y)).map_err(Error::Io),
            _ => {
                tracing::trace!(x = pos.x, y = pos.y, "cursor position not addressable");
                Ok(())
            }
        }
    }

    fn set_colors(&mut self, attr: ColorAttr) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Self::to_crossterm_color(attr.fg)),
            SetBackgroundColor(Self::to_crossterm_color(attr.bg))
        )
        .map_err(Error::Io)
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text)).map_err(Error::Io)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(Error::Io)
    }
}

impl<W: Write> Drop for CrosstermTarget<W> {
    fn drop(&mut self) {
        // Best-effort cleanup on drop
        let _ = execute!(self.out, ResetColor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(target: &CrosstermTarget<Vec<u8>>) -> String {
        String::from_utf8_lossy(target.writer()).into_owned()
    }

    #[test]
    fn test_color_conversion() {
        type T = CrosstermTarget<Vec<u8>>;
        assert_eq!(T::to_crossterm_color(Color::Yellow), CrosstermColor::DarkYellow);
        assert_eq!(T::to_crossterm_color(Color::LightYellow), CrosstermColor::Yellow);
        assert_eq!(T::to_crossterm_color(Color::Gray), CrosstermColor::Grey);
        assert_eq!(T::to_crossterm_color(Color::Transparent), CrosstermColor::Reset);
    }

    #[test]
    fn test_cursor_and_text_are_queued() {
        let mut target = CrosstermTarget::new(Vec::new());
        target.set_cursor(Position::new(2, 1)).unwrap();
        target.write_str("hi").unwrap();
        target.flush().unwrap();
        let out = output(&target);
        assert!(out.contains("\x1b[2;3H"), "{out:?}");
        assert!(out.ends_with("hi"));
    }

    #[test]
    fn test_negative_cursor_is_skipped() {
        let mut target = CrosstermTarget::new(Vec::new());
        target.set_cursor(Position::new(-1, 4)).unwrap();
        assert!(output(&target).is_empty());
    }

    #[test]
    fn test_colors_emit_escapes() {
        let mut target = CrosstermTarget::new(Vec::new());
        target
            .set_colors(ColorAttr::new(Color::LightRed, Color::Blue))
            .unwrap();
        assert!(output(&target).starts_with("\x1b["));
    }
}
