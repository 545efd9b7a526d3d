//! The 16-color console palette.
//!
//! Elements pick their foreground and background from [`Color`], a fixed set
//! of sixteen console colors plus [`Color::Transparent`]. Before anything is
//! written to a terminal the pair is resolved into a [`ColorAttr`], which has
//! no transparency left in it: a transparent channel inherits whatever was in
//! effect before.
//!
//! A resolved attribute can be packed into the classic console attribute
//! byte: foreground in the low nibble, background in the high nibble, bit 3
//! of each nibble selecting the bright variant. The order of the eight base
//! colors differs between ANSI terminals and the Windows console, which is
//! what [`Palette`] selects.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// Intensity bit within a 4-bit color code.
const INTENSITY: u8 = 0x08;

/// A symbolic console color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Black.
    Black,
    /// Dark blue.
    Blue,
    /// Dark green.
    Green,
    /// Dark cyan.
    Cyan,
    /// Dark red.
    Red,
    /// Dark magenta.
    Magenta,
    /// Dark yellow (brown on some consoles).
    Yellow,
    /// Light gray; the default text color.
    #[default]
    Gray,
    /// Bright black.
    DarkGray,
    /// Bright blue.
    LightBlue,
    /// Bright green.
    LightGreen,
    /// Bright cyan.
    LightCyan,
    /// Bright red.
    LightRed,
    /// Bright magenta.
    LightMagenta,
    /// Bright yellow.
    LightYellow,
    /// Bright white.
    White,
    /// Inherit the color already in effect.
    Transparent,
}

/// The eight base hues, in no particular platform order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Color {
    /// All sixteen opaque colors in console attribute order.
    pub const OPAQUE: [Color; 16] = [
        Color::Black,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::Gray,
        Color::DarkGray,
        Color::LightBlue,
        Color::LightGreen,
        Color::LightCyan,
        Color::LightRed,
        Color::LightMagenta,
        Color::LightYellow,
        Color::White,
    ];

    /// Returns true for [`Color::Transparent`].
    #[inline]
    pub const fn is_transparent(self) -> bool {
        matches!(self, Self::Transparent)
    }

    /// Returns true for the bright half of the palette.
    #[inline]
    pub const fn is_bright(self) -> bool {
        matches!(
            self,
            Self::DarkGray
                | Self::LightBlue
                | Self::LightGreen
                | Self::LightCyan
                | Self::LightRed
                | Self::LightMagenta
                | Self::LightYellow
                | Self::White
        )
    }

    const fn hue(self) -> Option<Hue> {
        Some(match self {
            Self::Black | Self::DarkGray => Hue::Black,
            Self::Blue | Self::LightBlue => Hue::Blue,
            Self::Green | Self::LightGreen => Hue::Green,
            Self::Cyan | Self::LightCyan => Hue::Cyan,
            Self::Red | Self::LightRed => Hue::Red,
            Self::Magenta | Self::LightMagenta => Hue::Magenta,
            Self::Yellow | Self::LightYellow => Hue::Yellow,
            Self::Gray | Self::White => Hue::Gray,
            Self::Transparent => return None,
        })
    }

    /// Returns the 4-bit code of this color in the given palette layout, or
    /// `None` for [`Color::Transparent`].
    pub const fn code(self, palette: Palette) -> Option<u8> {
        let Some(hue) = self.hue() else {
            return None;
        };
        let base = palette.hue_index(hue);
        Some(if self.is_bright() {
            base | INTENSITY
        } else {
            base
        })
    }

    /// Looks up the color for a 4-bit code in the given palette layout.
    pub fn from_code(code: u8, palette: Palette) -> Self {
        let code = code & 0x0F;
        Self::OPAQUE
            .into_iter()
            .find(|c| c.code(palette) == Some(code))
            .unwrap_or_default()
    }

    /// Returns the ANSI SGR foreground code (30-37, 90-97).
    ///
    /// Transparent maps to 39, the terminal's default foreground.
    pub const fn fg_code(self) -> u8 {
        match self.code(Palette::Ansi) {
            Some(code) if code & INTENSITY != 0 => 90 + (code & 0x07),
            Some(code) => 30 + code,
            None => 39,
        }
    }

    /// Returns the ANSI SGR background code (40-47, 100-107).
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    /// Returns the canonical snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Magenta => "magenta",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
            Self::DarkGray => "dark_gray",
            Self::LightBlue => "light_blue",
            Self::LightGreen => "light_green",
            Self::LightCyan => "light_cyan",
            Self::LightRed => "light_red",
            Self::LightMagenta => "light_magenta",
            Self::LightYellow => "light_yellow",
            Self::White => "white",
            Self::Transparent => "transparent",
        }
    }

    /// Parses a color name.
    ///
    /// Matching ignores case, `-`, `_` and spaces, and accepts `grey` for
    /// `gray`, so `"Light Red"`, `"light-red"` and `"LIGHTRED"` are all
    /// [`Color::LightRed`].
    pub fn from_name(name: &str) -> Result<Self, ColorParseError> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
            .replace("grey", "gray");
        if normalized.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        Self::OPAQUE
            .into_iter()
            .chain(std::iter::once(Self::Transparent))
            .find(|c| c.name().replace('_', "") == normalized)
            .ok_or_else(|| ColorParseError::UnknownColor(name.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Order of the eight base hues in a 4-bit color code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// black, red, green, yellow, blue, magenta, cyan, gray.
    #[default]
    Ansi,
    /// black, blue, green, cyan, red, magenta, yellow, gray.
    Console,
}

impl Palette {
    /// Returns the layout used by the host platform's console.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Console
        } else {
            Self::Ansi
        }
    }

    const fn hue_index(self, hue: Hue) -> u8 {
        match (self, hue) {
            (_, Hue::Black) => 0,
            (_, Hue::Green) => 2,
            (_, Hue::Magenta) => 5,
            (_, Hue::Gray) => 7,
            (Self::Ansi, Hue::Red) => 1,
            (Self::Ansi, Hue::Yellow) => 3,
            (Self::Ansi, Hue::Blue) => 4,
            (Self::Ansi, Hue::Cyan) => 6,
            (Self::Console, Hue::Blue) => 1,
            (Self::Console, Hue::Cyan) => 3,
            (Self::Console, Hue::Red) => 4,
            (Self::Console, Hue::Yellow) => 6,
        }
    }
}

/// A resolved foreground/background pair.
///
/// Neither channel is ever [`Color::Transparent`]; [`ColorAttr::compose`]
/// replaces a transparent request with the channel already in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorAttr {
    /// Foreground (text) color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl Default for ColorAttr {
    /// Gray on black, the console's power-on attribute.
    fn default() -> Self {
        Self {
            fg: Color::Gray,
            bg: Color::Black,
        }
    }
}

impl ColorAttr {
    /// Creates an attribute, resolving transparent channels against the
    /// default attribute.
    pub fn new(fg: Color, bg: Color) -> Self {
        Self::default().compose(fg, bg)
    }

    /// Layers a requested foreground and background over this attribute.
    ///
    /// Each transparent channel keeps the value it has in `self`.
    #[inline]
    pub const fn compose(self, fg: Color, bg: Color) -> Self {
        Self {
            fg: if fg.is_transparent() { self.fg } else { fg },
            bg: if bg.is_transparent() { self.bg } else { bg },
        }
    }

    /// Packs the attribute into a console attribute byte.
    pub fn to_byte(self, palette: Palette) -> u8 {
        let fg = self.fg.code(palette).unwrap_or(0);
        let bg = self.bg.code(palette).unwrap_or(0);
        fg | ((bg << 4) & 0xF0)
    }

    /// Unpacks a console attribute byte.
    pub fn from_byte(byte: u8, palette: Palette) -> Self {
        Self {
            fg: Color::from_code(byte & 0x0F, palette),
            bg: Color::from_code(byte >> 4, palette),
        }
    }

    /// Returns the SGR escape sequence selecting this attribute.
    pub fn to_sgr(self) -> String {
        format!("\x1b[{};{}m", self.fg.fg_code(), self.bg.bg_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod color_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_console_codes() {
            assert_eq!(Color::Black.code(Palette::Console), Some(0));
            assert_eq!(Color::Blue.code(Palette::Console), Some(1));
            assert_eq!(Color::Yellow.code(Palette::Console), Some(6));
            assert_eq!(Color::DarkGray.code(Palette::Console), Some(8));
            assert_eq!(Color::LightRed.code(Palette::Console), Some(12));
            assert_eq!(Color::White.code(Palette::Console), Some(15));
            assert_eq!(Color::Transparent.code(Palette::Console), None);
        }

        #[test]
        fn test_ansi_codes() {
            assert_eq!(Color::Red.code(Palette::Ansi), Some(1));
            assert_eq!(Color::Blue.code(Palette::Ansi), Some(4));
            assert_eq!(Color::LightCyan.code(Palette::Ansi), Some(14));
            assert_eq!(Color::Red.fg_code(), 31);
            assert_eq!(Color::LightBlue.fg_code(), 94);
            assert_eq!(Color::Black.bg_code(), 40);
            assert_eq!(Color::White.bg_code(), 107);
            assert_eq!(Color::Transparent.fg_code(), 39);
        }

        #[test]
        fn test_codes_are_unique_per_palette() {
            for palette in [Palette::Ansi, Palette::Console] {
                for color in Color::OPAQUE {
                    let code = color.code(palette).unwrap();
                    assert_eq!(Color::from_code(code, palette), color);
                }
            }
        }

        #[test]
        fn test_from_name() {
            assert_eq!(Color::from_name("light_red"), Ok(Color::LightRed));
            assert_eq!(Color::from_name("Light Red"), Ok(Color::LightRed));
            assert_eq!("dark-grey".parse::<Color>(), Ok(Color::DarkGray));
            assert_eq!(Color::from_name("TRANSPARENT"), Ok(Color::Transparent));
            assert_eq!(Color::from_name(""), Err(ColorParseError::EmptyInput));
            assert_eq!(
                Color::from_name("teal"),
                Err(ColorParseError::UnknownColor("teal".into()))
            );
        }
    }

    mod attr_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_compose_inherits_transparent_channels() {
            let base = ColorAttr::new(Color::White, Color::Blue);
            assert_eq!(
                base.compose(Color::Yellow, Color::Transparent),
                ColorAttr::new(Color::Yellow, Color::Blue)
            );
            assert_eq!(
                base.compose(Color::Transparent, Color::Red),
                ColorAttr::new(Color::White, Color::Red)
            );
            assert_eq!(base.compose(Color::Transparent, Color::Transparent), base);
        }

        #[test]
        fn test_default_is_gray_on_black() {
            let attr = ColorAttr::default();
            assert_eq!(attr.to_byte(Palette::Console), 0x07);
            assert_eq!(ColorAttr::new(Color::Transparent, Color::Transparent), attr);
        }

        #[test]
        fn test_byte_packing() {
            let attr = ColorAttr::new(Color::LightRed, Color::Blue);
            assert_eq!(attr.to_byte(Palette::Console), 0x1C);
            assert_eq!(attr.to_byte(Palette::Ansi), 0x49);
            assert_eq!(ColorAttr::from_byte(0x1C, Palette::Console), attr);
        }

        #[test]
        fn test_sgr() {
            let attr = ColorAttr::new(Color::Yellow, Color::Black);
            assert_eq!(attr.to_sgr(), "\x1b[33;40m");
        }
    }
}
