//! Alignment of laid-out lines inside an element's box.

use crate::measurement::display_width;

/// Placement of content along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left or top.
    #[default]
    Begin,
    /// Centered; odd leftovers go after the content.
    Center,
    /// Right or bottom.
    End,
}

/// Returns the offset of content of length `content` inside an extent of
/// length `extent`.
///
/// Content larger than the extent is placed at 0.
///
/// ```
/// use conui_text::align::{align_offset, Alignment};
///
/// assert_eq!(align_offset(Alignment::Center, 10, 4), 3);
/// assert_eq!(align_offset(Alignment::End, 10, 4), 6);
/// assert_eq!(align_offset(Alignment::End, 3, 4), 0);
/// ```
#[inline]
pub fn align_offset(alignment: Alignment, extent: usize, content: usize) -> usize {
    let free = extent.saturating_sub(content);
    match alignment {
        Alignment::Begin => 0,
        Alignment::Center => free / 2,
        Alignment::End => free,
    }
}

/// A line positioned relative to the top-left corner of its element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedLine {
    /// Column of the first grapheme.
    pub x: i32,
    /// Row of the line.
    pub y: i32,
    /// The line text.
    pub text: String,
}

/// Positions lines inside a `width` x `height` box.
///
/// Offsets are computed against the full box. A `height` of 0 means the box
/// has no vertical extent to align against, so lines start at row 0.
pub fn place_lines(
    lines: Vec<String>,
    width: usize,
    height: usize,
    horizontal: Alignment,
    vertical: Alignment,
) -> Vec<PlacedLine> {
    let top = if height == 0 {
        0
    } else {
        align_offset(vertical, height, lines.len())
    };

    lines
        .into_iter()
        .enumerate()
        .map(|(row, text)| {
            let left = align_offset(horizontal, width, display_width(&text));
            PlacedLine {
                x: to_i32(left),
                y: to_i32(top + row),
                text,
            }
        })
        .collect()
}

#[inline]
fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_begin_alignment() {
        let placed = place_lines(
            vec!["ab".into(), "c".into()],
            10,
            5,
            Alignment::Begin,
            Alignment::Begin,
        );
        assert_eq!(
            placed,
            vec![
                PlacedLine { x: 0, y: 0, text: "ab".into() },
                PlacedLine { x: 0, y: 1, text: "c".into() },
            ]
        );
    }

    #[test]
    fn test_centered_block() {
        let placed = place_lines(
            vec!["abcd".into(), "ab".into()],
            10,
            6,
            Alignment::Center,
            Alignment::Center,
        );
        assert_eq!(placed[0].x, 3);
        assert_eq!(placed[0].y, 2);
        assert_eq!(placed[1].x, 4);
        assert_eq!(placed[1].y, 3);
    }

    #[test]
    fn test_end_alignment() {
        let placed = place_lines(vec!["abc".into()], 8, 4, Alignment::End, Alignment::End);
        assert_eq!(placed[0].x, 5);
        assert_eq!(placed[0].y, 3);
    }

    #[test]
    fn test_overflowing_content_stays_at_zero() {
        let placed = place_lines(vec!["toolong".into()], 3, 0, Alignment::Center, Alignment::End);
        assert_eq!((placed[0].x, placed[0].y), (0, 0));
    }
}
