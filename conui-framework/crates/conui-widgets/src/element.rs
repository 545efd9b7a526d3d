//! The element type and its kinds.
//!
//! There is a single concrete [`Element`] type. What an element draws is
//! selected by its [`ElementKind`]; everything else (placement, sizing,
//! colors, clipping) is shared by all kinds.
//!
//! # Sizing
//!
//! [`Element::set_size`] and [`Element::set_max_size`] always leave the size
//! clamped to the maximum size, where a non-positive maximum on an axis means
//! the axis is unconstrained. Text kinds additionally grow their height to
//! the number of lines their text wraps into at the current width, before
//! clamping again.

use std::fmt;

use conui_core::{Color, Position, Rect, Size};
use conui_text::{line_count, widest_line, Alignment, LayoutOptions, WrapMode};

use crate::border::BorderChars;
use crate::clip::{ClipArea, ClipInsets};
use crate::menu::MenuState;
use crate::render::Draw;

/// Text and layout settings of a label or text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    /// The raw text; may contain `'\n'`.
    pub text: String,
    /// Line breaking mode.
    pub wrap: WrapMode,
    /// Whether the text may use more than one line.
    pub multiline: bool,
    /// Horizontal placement of each line.
    pub h_align: Alignment,
    /// Vertical placement of the block of lines.
    pub v_align: Alignment,
}

impl Default for TextBlock {
    fn default() -> Self {
        Self {
            text: String::new(),
            wrap: WrapMode::Word,
            multiline: true,
            h_align: Alignment::Begin,
            v_align: Alignment::Begin,
        }
    }
}

impl TextBlock {
    /// Layout options for a box of the given size.
    pub fn layout_options(&self, width: i32, height: i32) -> LayoutOptions {
        LayoutOptions::new(to_usize(width), to_usize(height))
            .with_wrap(self.wrap)
            .with_multiline(self.multiline)
    }
}

/// What an element draws.
pub enum ElementKind {
    /// No draw behavior. Rendering a bare element is an error.
    Bare,
    /// Fills its box with the background color.
    Interface,
    /// Draws a border.
    Frame(BorderChars),
    /// Draws wrapped, aligned text.
    Label(TextBlock),
    /// A label whose text ends where the input cursor is placed.
    TextField(TextBlock),
    /// A numbered list of entries followed by a prompt field.
    Menu(MenuState),
    /// Draws through a user-supplied strategy.
    Custom(Box<dyn Draw>),
}

impl ElementKind {
    /// A short name for logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Interface => "interface",
            Self::Frame(_) => "frame",
            Self::Label(_) => "label",
            Self::TextField(_) => "text_field",
            Self::Menu(_) => "menu",
            Self::Custom(_) => "custom",
        }
    }

    /// Returns the text block of label-like kinds.
    pub fn text_block(&self) -> Option<&TextBlock> {
        match self {
            Self::Label(block) | Self::TextField(block) => Some(block),
            _ => None,
        }
    }

    /// Returns the mutable text block of label-like kinds.
    pub fn text_block_mut(&mut self) -> Option<&mut TextBlock> {
        match self {
            Self::Label(block) | Self::TextField(block) => Some(block),
            _ => None,
        }
    }
}

impl fmt::Debug for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frame(chars) => f.debug_tuple("Frame").field(chars).finish(),
            Self::Label(block) => f.debug_tuple("Label").field(block).finish(),
            Self::TextField(block) => f.debug_tuple("TextField").field(block).finish(),
            Self::Menu(state) => f.debug_tuple("Menu").field(state).finish(),
            Self::Bare | Self::Interface | Self::Custom(_) => f.write_str(self.name()),
        }
    }
}

/// A positioned, sized, colored node of the UI tree.
///
/// Elements are created through the builders on this type
/// ([`Element::label`], [`Element::frame`], ...) and handed to an
/// [`ElementTree`](crate::ElementTree), which owns the parent/child links.
#[derive(Debug)]
pub struct Element {
    position: Position,
    size: Size,
    max_size: Size,
    fore: Color,
    back: Color,
    visible: bool,
    clip: ClipArea,
    clip_children: bool,
    clip_insets: ClipInsets,
    kind: ElementKind,
}

impl Element {
    /// Creates an element of the given kind with default settings.
    ///
    /// Frames default to a black background; every other kind is gray on a
    /// transparent background.
    pub fn new(kind: ElementKind) -> Self {
        let back = match kind {
            ElementKind::Frame(_) => Color::Black,
            _ => Color::Transparent,
        };
        Self {
            position: Position::ZERO,
            size: Size::ZERO,
            max_size: Size::ZERO,
            fore: Color::Gray,
            back,
            visible: true,
            clip: ClipArea::default(),
            clip_children: false,
            clip_insets: ClipInsets::default(),
            kind,
        }
    }

    /// Position relative to the parent.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Sets the position relative to the parent.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Current size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the size; negative components become zero and the result is
    /// re-fitted to the maximum size.
    pub fn set_size(&mut self, size: Size) {
        self.size = size.non_negative();
        self.fit();
    }

    /// Maximum size; a non-positive component leaves that axis unconstrained.
    #[inline]
    pub fn max_size(&self) -> Size {
        self.max_size
    }

    /// Sets the maximum size and re-fits the current size to it.
    pub fn set_max_size(&mut self, max_size: Size) {
        self.max_size = max_size;
        self.fit();
    }

    /// Column just past the right edge, in parent coordinates.
    #[inline]
    pub fn right(&self) -> i32 {
        self.position.x + self.size.width
    }

    /// Row just past the bottom edge, in parent coordinates.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height
    }

    /// The element's box in parent coordinates.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Foreground color.
    #[inline]
    pub fn fore(&self) -> Color {
        self.fore
    }

    /// Sets the foreground color.
    pub fn set_fore(&mut self, color: Color) {
        self.fore = color;
    }

    /// Background color.
    #[inline]
    pub fn back(&self) -> Color {
        self.back
    }

    /// Sets the background color.
    pub fn set_back(&mut self, color: Color) {
        self.back = color;
    }

    /// Whether the element and its subtree are drawn.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the element and its subtree.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The stored clip area.
    #[inline]
    pub fn clip_area(&self) -> ClipArea {
        self.clip
    }

    /// Sets the stored clip area.
    pub fn set_clip_area(&mut self, clip: ClipArea) {
        self.clip = clip;
    }

    /// The stored clip area resolved against the current size.
    #[inline]
    pub fn own_clip(&self) -> Rect {
        self.clip.resolve(self.size)
    }

    /// Whether children are clipped to this element's active clip.
    #[inline]
    pub fn clips_children(&self) -> bool {
        self.clip_children
    }

    /// Enables or disables clipping of children.
    pub fn set_clip_children(&mut self, clip_children: bool) {
        self.clip_children = clip_children;
    }

    /// Insets applied to the active clip before it reaches the children.
    #[inline]
    pub fn clip_insets(&self) -> ClipInsets {
        self.clip_insets
    }

    /// Sets the child clip insets.
    pub fn set_clip_insets(&mut self, insets: ClipInsets) {
        self.clip_insets = insets;
    }

    /// The element kind.
    #[inline]
    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    /// The element kind, mutably.
    ///
    /// Changing a text block through this does not re-fit the size; prefer
    /// the text setters on `Element`.
    #[inline]
    pub fn kind_mut(&mut self) -> &mut ElementKind {
        &mut self.kind
    }

    /// The text of a label or text field.
    pub fn text(&self) -> Option<&str> {
        self.kind.text_block().map(|block| block.text.as_str())
    }

    /// Replaces the text and sizes the element to it.
    ///
    /// The width becomes the width of the widest source line and the height
    /// one row (zero for empty text), both then fitted as by
    /// [`Element::set_size`]. Has no effect on kinds without text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some(block) = self.kind.text_block_mut() {
            block.text = text.into();
            self.fit_text();
        }
    }

    /// Sizes a text element to its text.
    pub fn fit_text(&mut self) {
        if let Some(block) = self.kind.text_block() {
            let width = i32::try_from(widest_line(&block.text)).unwrap_or(i32::MAX);
            let height = i32::from(!block.text.is_empty());
            self.set_size(Size::new(width, height));
        }
    }

    /// Sets the wrap mode of a text element and re-fits its height.
    pub fn set_wrap(&mut self, wrap: WrapMode) {
        if let Some(block) = self.kind.text_block_mut() {
            block.wrap = wrap;
            self.fit();
        }
    }

    /// Sets whether a text element may use several lines.
    pub fn set_multiline(&mut self, multiline: bool) {
        if let Some(block) = self.kind.text_block_mut() {
            block.multiline = multiline;
            self.fit();
        }
    }

    /// Sets the text alignment of a text element.
    pub fn set_alignment(&mut self, horizontal: Alignment, vertical: Alignment) {
        if let Some(block) = self.kind.text_block_mut() {
            block.h_align = horizontal;
            block.v_align = vertical;
        }
    }

    /// Clamps the size to the maximum and grows text elements to fit their
    /// wrapped line count.
    fn fit(&mut self) {
        self.size = self.size.clamp_to(self.max_size);
        if let Some(block) = self.kind.text_block() {
            let options = block.layout_options(self.size.width, self.max_size.height);
            let lines = i32::try_from(line_count(&block.text, options)).unwrap_or(i32::MAX);
            if lines > self.size.height {
                self.size.height = lines;
                self.size = self.size.clamp_to(self.max_size);
            }
        }
    }
}

#[inline]
pub(crate) fn to_usize(value: i32) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn label(text: &str) -> Element {
        let mut element = Element::new(ElementKind::Label(TextBlock::default()));
        element.set_text(text);
        element
    }

    mod sizing_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_size_is_clamped_to_max() {
            let mut element = Element::new(ElementKind::Interface);
            element.set_max_size(Size::new(25, 10));
            element.set_size(Size::new(30, 4));
            assert_eq!(element.size(), Size::new(25, 4));
            element.set_size(Size::new(-3, 12));
            assert_eq!(element.size(), Size::new(0, 10));
        }

        #[test]
        fn test_zero_max_is_unconstrained() {
            let mut element = Element::new(ElementKind::Interface);
            element.set_max_size(Size::new(0, -1));
            element.set_size(Size::new(300, 200));
            assert_eq!(element.size(), Size::new(300, 200));
        }

        #[test]
        fn test_lowering_max_shrinks_size() {
            let mut element = Element::new(ElementKind::Interface);
            element.set_size(Size::new(40, 11));
            element.set_max_size(Size::new(20, 0));
            assert_eq!(element.size(), Size::new(20, 11));
        }

        #[test]
        fn test_edges() {
            let mut element = Element::new(ElementKind::Interface);
            element.set_position(Position::new(2, 3));
            element.set_size(Size::new(4, 5));
            assert_eq!((element.right(), element.bottom()), (6, 8));
            assert_eq!(element.bounds(), Rect::new(2, 3, 4, 5));
        }
    }

    mod text_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_text_sizes_to_text() {
            let element = label("hello world");
            assert_eq!(element.size(), Size::new(11, 1));
            assert_eq!(element.text(), Some("hello world"));
        }

        #[test]
        fn test_text_grows_height_within_max() {
            let mut element = label("hello world");
            element.set_max_size(Size::new(5, 0));
            assert_eq!(element.size(), Size::new(5, 2));

            let mut capped = label("one two three four five");
            capped.set_max_size(Size::new(4, 3));
            assert_eq!(capped.size(), Size::new(4, 3));
        }

        #[test]
        fn test_empty_text_fits_to_zero_height() {
            let element = label("");
            assert_eq!(element.size(), Size::new(0, 0));
        }

        #[test]
        fn test_multiline_text_width_is_widest_line() {
            let element = label("ab\nabcd");
            assert_eq!(element.size(), Size::new(4, 2));
        }

        #[test]
        fn test_wrap_mode_refits() {
            let mut element = label("aaaa bbbb");
            element.set_size(Size::new(4, 1));
            assert_eq!(element.size().height, 2);
            element.set_multiline(false);
            element.set_size(Size::new(4, 1));
            assert_eq!(element.size().height, 1);
        }

        #[test]
        fn test_text_setters_ignore_other_kinds() {
            let mut element = Element::new(ElementKind::Interface);
            element.set_text("ignored");
            element.set_wrap(WrapMode::Truncate);
            assert_eq!(element.text(), None);
            assert_eq!(element.size(), Size::ZERO);
        }
    }

    #[test]
    fn test_defaults() {
        let frame = Element::new(ElementKind::Frame(BorderChars::default()));
        assert_eq!(frame.back(), Color::Black);
        assert_eq!(frame.fore(), Color::Gray);

        let field = Element::new(ElementKind::TextField(TextBlock::default()));
        assert_eq!(field.back(), Color::Transparent);
        assert!(field.is_visible());
        assert!(!field.clips_children());
        assert_eq!(field.kind().name(), "text_field");
    }
}
