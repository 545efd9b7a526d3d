//! Geometry types for element placement and clipping.
//!
//! This module provides the geometry primitives used throughout conui:
//! - [`Position`]: a 2D point with signed coordinates
//! - [`Size`]: a 2D extent whose setters never go negative
//! - [`Rect`]: a rectangle combining position and size, used for clip areas
//!
//! All coordinates are measured in character cells. Sizes are signed so that
//! intermediate arithmetic (an edge minus an origin) cannot wrap around; the
//! constructors that matter for elements clamp them at zero.

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point with signed integer coordinates.
///
/// Positions are relative to the owning element's parent unless a function
/// says otherwise.
///
/// # Examples
///
/// ```
/// use conui_core::geometry::Position;
///
/// let a = Position::new(10, 20);
/// let b = Position::new(5, 5);
///
/// assert_eq!(a + b, Position::new(15, 25));
/// assert_eq!(a - b, Position::new(5, 15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// The x coordinate (column).
    pub x: i32,
    /// The y coordinate (row).
    pub y: i32,
}

impl Position {
    /// The origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Creates a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position offset by the given amounts.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns whether both coordinates are non-negative.
    #[inline]
    pub const fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl Add for Position {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.offset(rhs.x, rhs.y)
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Position {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl SubAssign for Position {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D extent in character cells.
///
/// A component of zero in a *maximum* size means "unconstrained" on that
/// axis; see [`Size::clamp_to`].
///
/// # Examples
///
/// ```
/// use conui_core::geometry::Size;
///
/// let size = Size::new(30, 4).clamp_to(Size::new(25, 0));
/// assert_eq!(size, Size::new(25, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Size {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns this size with negative components raised to zero.
    #[inline]
    pub const fn non_negative(self) -> Self {
        Self {
            width: if self.width < 0 { 0 } else { self.width },
            height: if self.height < 0 { 0 } else { self.height },
        }
    }

    /// Clamps each component to `max`, treating a non-positive max component
    /// as unconstrained.
    #[inline]
    pub const fn clamp_to(self, max: Self) -> Self {
        Self {
            width: if max.width > 0 && self.width > max.width {
                max.width
            } else {
                self.width
            },
            height: if max.height > 0 && self.height > max.height {
                max.height
            } else {
                self.height
            },
        }
    }

    /// Returns the size grown by the given amounts.
    #[inline]
    pub const fn grow(self, dw: i32, dh: i32) -> Self {
        Self {
            width: self.width.saturating_add(dw),
            height: self.height.saturating_add(dh),
        }
    }

    /// Returns true if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl From<(i32, i32)> for Size {
    #[inline]
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}

/// A rectangle in character cells.
///
/// `Rect` is the resolved form of a clip area: unlike the stored clip on an
/// element, a zero width here really means nothing is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left column.
    pub x: i32,
    /// Top row.
    pub y: i32,
    /// Width in columns.
    pub width: i32,
    /// Height in rows.
    pub height: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from a position and a size.
    #[inline]
    pub const fn from_parts(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    /// Returns the top-left corner.
    #[inline]
    pub const fn position(self) -> Position {
        Position::new(self.x, self.y)
    }

    /// Returns the size.
    #[inline]
    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the column one past the right edge.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the row one past the bottom edge.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns true if the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Returns true if the cell at `pos` lies inside the rectangle.
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
    }

    /// Returns true if `other` lies entirely within this rectangle.
    #[inline]
    pub const fn contains_rect(self, other: Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns true if the two rectangles touch or overlap.
    ///
    /// Edges are inclusive, so a zero-sized rectangle sitting on the border
    /// of this one still counts. Clip rejection uses this so that empty
    /// containers on an edge keep their children.
    #[inline]
    pub const fn touches(self, other: Self) -> bool {
        !(other.x > self.right()
            || other.right() < self.x
            || other.y > self.bottom()
            || other.bottom() < self.y)
    }

    /// Returns the overlapping area of two rectangles.
    ///
    /// The result is clamped to a zero size rather than going negative when
    /// the rectangles are disjoint.
    pub fn intersection(self, other: Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self::new(x, y, (right - x).max(0), (bottom - y).max(0))
    }

    /// Returns the rectangle moved by the given amounts.
    #[inline]
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Shrinks the rectangle from each side, never below a zero size.
    pub fn inset(self, top: i32, left: i32, bottom: i32, right: i32) -> Self {
        let x = self.x + left;
        let y = self.y + top;
        let width = (self.width - left - right).max(0);
        let height = (self.height - top - bottom).max(0);
        Self::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod position_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_arithmetic() {
            let a = Position::new(3, 4);
            let mut b = Position::new(1, 1);
            b += a;
            assert_eq!(b, Position::new(4, 5));
            b -= Position::new(10, 0);
            assert_eq!(b, Position::new(-6, 5));
            assert!(!b.is_non_negative());
        }

        #[test]
        fn test_offset_saturates() {
            let p = Position::new(i32::MAX, 0).offset(1, -1);
            assert_eq!(p, Position::new(i32::MAX, -1));
        }
    }

    mod size_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_clamp_to_ignores_unconstrained_axes() {
            assert_eq!(Size::new(40, 8).clamp_to(Size::new(0, 5)), Size::new(40, 5));
            assert_eq!(Size::new(40, 8).clamp_to(Size::new(-1, -1)), Size::new(40, 8));
            assert_eq!(Size::new(4, 3).clamp_to(Size::new(10, 10)), Size::new(4, 3));
        }

        #[test]
        fn test_non_negative() {
            assert_eq!(Size::new(-2, 7).non_negative(), Size::new(0, 7));
            assert!(Size::new(0, 7).is_empty());
            assert_eq!(Size::new(2, 2).grow(2, 2), Size::new(4, 4));
        }
    }

    mod rect_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edges_and_contains() {
            let r = Rect::new(2, 3, 4, 5);
            assert_eq!(r.right(), 6);
            assert_eq!(r.bottom(), 8);
            assert!(r.contains(Position::new(2, 3)));
            assert!(!r.contains(Position::new(6, 3)));
        }

        #[test]
        fn test_intersection() {
            let a = Rect::new(0, 0, 10, 3);
            let b = Rect::new(8, 0, 5, 5);
            assert_eq!(a.intersection(b), Rect::new(8, 0, 2, 3));

            let disjoint = a.intersection(Rect::new(20, 20, 2, 2));
            assert!(disjoint.is_empty());
            assert_eq!(disjoint.width, 0);
        }

        #[test]
        fn test_touches_is_inclusive() {
            let region = Rect::new(0, 0, 10, 3);
            assert!(region.touches(Rect::new(10, 0, 0, 0)));
            assert!(!region.touches(Rect::new(11, 0, 2, 2)));
            assert!(!region.touches(Rect::new(-5, 0, 4, 1)));
        }

        #[test]
        fn test_inset_and_translate() {
            let r = Rect::new(0, 0, 10, 5).inset(1, 1, 1, 1);
            assert_eq!(r, Rect::new(1, 1, 8, 3));
            assert_eq!(r.translate(-1, 2), Rect::new(0, 3, 8, 3));
            assert!(Rect::new(0, 0, 1, 1).inset(1, 1, 1, 1).is_empty());
            assert!(Rect::new(0, 0, 10, 5).contains_rect(r));
        }
    }
}
