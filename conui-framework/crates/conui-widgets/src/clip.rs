//! Clip areas and the child clip resolver.
//!
//! Every element stores a [`ClipArea`] in its own coordinate space. A zero
//! extent on an axis means "up to the element's own edge", so a freshly made
//! element clips exactly to its bounds. During a render pass the stored area
//! is resolved into a [`Rect`] with explicit extents, and a parent that clips
//! its children narrows each child's rectangle with [`resolve_child_clip`].
//! Narrowed rectangles only live for the duration of the pass; the stored
//! areas are never rewritten, so a subtree can be rendered again under a
//! different viewport.

use conui_core::{Position, Rect, Size};

/// A stored clip area in element-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipArea {
    /// Top-left corner of the visible area.
    pub position: Position,
    /// Extent of the visible area; 0 on an axis reaches the element's edge.
    pub size: Size,
}

impl ClipArea {
    /// Creates a clip area.
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Resolves the area against the size of the element that owns it.
    ///
    /// ```
    /// use conui_core::{Position, Rect, Size};
    /// use conui_widgets::ClipArea;
    ///
    /// let area = ClipArea::new(Position::new(2, 0), Size::new(0, 3));
    /// assert_eq!(area.resolve(Size::new(10, 8)), Rect::new(2, 0, 8, 3));
    /// ```
    pub fn resolve(self, owner: Size) -> Rect {
        let width = if self.size.width > 0 {
            self.size.width
        } else {
            owner.width - self.position.x
        };
        let height = if self.size.height > 0 {
            self.size.height
        } else {
            owner.height - self.position.y
        };
        Rect::new(
            self.position.x,
            self.position.y,
            width.max(0),
            height.max(0),
        )
    }
}

/// Insets applied to an element's active clip before it is handed to the
/// element's children.
///
/// Frames use a one-cell inset on every side so children never paint over
/// the border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipInsets {
    /// Rows removed from the top.
    pub top: i32,
    /// Columns removed from the left.
    pub left: i32,
    /// Rows removed from the bottom.
    pub bottom: i32,
    /// Columns removed from the right.
    pub right: i32,
}

impl ClipInsets {
    /// Creates insets.
    pub const fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// The same inset on all four sides.
    pub const fn uniform(inset: i32) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Applies the insets to a rectangle.
    pub fn apply(self, rect: Rect) -> Rect {
        rect.inset(self.top, self.left, self.bottom, self.right)
    }
}

/// Computes a child's clip rectangle under a parent that clips its children.
///
/// `region` is the area the parent lets children paint into, in the parent's
/// coordinates. `child_position` is where the child sits in the parent and
/// `child_clip` is the child's own resolved clip in the child's coordinates.
///
/// The result, in child coordinates, never reaches outside `region`: its
/// origin moves right or down to at least the region's origin (but never
/// back before the child's own clip origin) and its far edge stops at the
/// region's far edge. Each axis is handled independently.
///
/// ```
/// use conui_core::{Position, Rect};
/// use conui_widgets::clip::resolve_child_clip;
///
/// // A 5x5 child at x = 8 inside a 10x3 region is cut to 2 columns.
/// let clip = resolve_child_clip(Rect::new(0, 0, 10, 3), Position::new(8, 0), Rect::new(0, 0, 5, 5));
/// assert_eq!(clip, Rect::new(0, 0, 2, 3));
/// ```
pub fn resolve_child_clip(region: Rect, child_position: Position, child_clip: Rect) -> Rect {
    let region_in_child = region.translate(-child_position.x, -child_position.y);
    child_clip.intersection(region_in_child)
}

/// Returns true when the child's box is far enough outside `region` that it
/// can be skipped without resolving its clip.
///
/// Edges are inclusive: a child that only touches the region is kept.
pub fn is_rejected(region: Rect, child_bounds: Rect) -> bool {
    !region.touches(child_bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_defaults_to_owner_size() {
        assert_eq!(ClipArea::default().resolve(Size::new(6, 2)), Rect::new(0, 0, 6, 2));
        let explicit = ClipArea::new(Position::new(1, 1), Size::new(3, 1));
        assert_eq!(explicit.resolve(Size::new(6, 2)), Rect::new(1, 1, 3, 1));
        // Origin beyond the owner's edge leaves nothing visible.
        let past = ClipArea::new(Position::new(9, 0), Size::ZERO);
        assert!(past.resolve(Size::new(6, 2)).is_empty());
    }

    #[test]
    fn test_child_starting_left_of_region() {
        // Region starts at column 3; child at column 1 loses its first 2 columns.
        let clip = resolve_child_clip(
            Rect::new(3, 0, 10, 5),
            Position::new(1, 0),
            Rect::new(0, 0, 6, 2),
        );
        assert_eq!(clip, Rect::new(2, 0, 4, 2));
    }

    #[test]
    fn test_child_clip_origin_never_retreats() {
        // The child's own clip already starts further right than the region.
        let clip = resolve_child_clip(
            Rect::new(0, 0, 10, 10),
            Position::new(2, 2),
            Rect::new(3, 1, 2, 2),
        );
        assert_eq!(clip, Rect::new(3, 1, 2, 2));
    }

    #[test]
    fn test_narrowed_clip_stays_inside_region() {
        let region = Rect::new(1, 1, 8, 4);
        for x in -6..12 {
            for y in -6..8 {
                let child = Rect::new(0, 0, 5, 3);
                let clip = resolve_child_clip(region, Position::new(x, y), child);
                if !clip.is_empty() {
                    assert!(region.contains_rect(clip.translate(x, y)), "{x},{y}: {clip:?}");
                    assert!(child.contains_rect(clip));
                }
            }
        }
    }

    #[test]
    fn test_rejection() {
        let region = Rect::new(0, 0, 10, 3);
        assert!(is_rejected(region, Rect::new(12, 0, 2, 2)));
        assert!(is_rejected(region, Rect::new(0, 5, 2, 2)));
        assert!(!is_rejected(region, Rect::new(8, 0, 5, 5)));
        assert!(!is_rejected(region, Rect::new(10, 3, 0, 0)));
    }

    #[test]
    fn test_insets() {
        let rect = ClipInsets::uniform(1).apply(Rect::new(0, 0, 40, 11));
        assert_eq!(rect, Rect::new(1, 1, 38, 9));
        assert_eq!(ClipInsets::default().apply(rect), rect);
    }
}
