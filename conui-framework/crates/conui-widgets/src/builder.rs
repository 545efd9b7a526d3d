//! Chainable element construction.
//!
//! Every builder method applies immediately through the matching
//! [`Element`] setter, so a call sequence behaves exactly like the same
//! setters called in the same order. In particular `text(..)` sizes the
//! element to its text, so a later `size(..)` overrides that while an
//! earlier one does not.

use conui_core::{Color, Position, Size};
use conui_text::{Alignment, WrapMode};

use crate::border::BorderChars;
use crate::clip::{ClipArea, ClipInsets};
use crate::element::{Element, ElementKind, TextBlock};
use crate::menu::MenuState;
use crate::render::Draw;

/// Builder for [`Element`] values.
#[derive(Debug)]
pub struct ElementBuilder {
    element: Element,
}

impl Element {
    /// Starts an element without a draw behavior.
    pub fn bare() -> ElementBuilder {
        ElementBuilder::new(ElementKind::Bare)
    }

    /// Starts a plain container that fills itself with its background.
    pub fn interface() -> ElementBuilder {
        ElementBuilder::new(ElementKind::Interface)
    }

    /// Starts a bordered frame with ASCII borders on black.
    pub fn frame() -> ElementBuilder {
        ElementBuilder::new(ElementKind::Frame(BorderChars::default()))
    }

    /// Starts a text label.
    pub fn label() -> ElementBuilder {
        ElementBuilder::new(ElementKind::Label(TextBlock::default()))
    }

    /// Starts a text field.
    pub fn text_field() -> ElementBuilder {
        ElementBuilder::new(ElementKind::TextField(TextBlock::default()))
    }

    /// Starts a menu with the given entries.
    pub fn menu<I, S>(entries: I) -> ElementBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ElementBuilder::new(ElementKind::Menu(MenuState::new(entries)))
    }

    /// Starts an element drawn by a custom strategy.
    pub fn custom(draw: impl Draw + 'static) -> ElementBuilder {
        ElementBuilder::new(ElementKind::Custom(Box::new(draw)))
    }
}

impl ElementBuilder {
    /// Creates a builder for the given kind.
    pub fn new(kind: ElementKind) -> Self {
        Self {
            element: Element::new(kind),
        }
    }

    /// Sets the position relative to the parent.
    pub fn position(mut self, position: impl Into<Position>) -> Self {
        self.element.set_position(position.into());
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: impl Into<Size>) -> Self {
        self.element.set_size(size.into());
        self
    }

    /// Sets the maximum size.
    pub fn max_size(mut self, max_size: impl Into<Size>) -> Self {
        self.element.set_max_size(max_size.into());
        self
    }

    /// Sets the foreground color.
    pub fn fore(mut self, color: Color) -> Self {
        self.element.set_fore(color);
        self
    }

    /// Sets the background color.
    pub fn back(mut self, color: Color) -> Self {
        self.element.set_back(color);
        self
    }

    /// Sets the text and sizes the element to it.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.element.set_text(text);
        self
    }

    /// Sets the wrap mode.
    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.element.set_wrap(wrap);
        self
    }

    /// Allows or forbids more than one line.
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.element.set_multiline(multiline);
        self
    }

    /// Sets the horizontal text alignment.
    pub fn h_align(mut self, alignment: Alignment) -> Self {
        if let Some(block) = self.element.kind_mut().text_block_mut() {
            block.h_align = alignment;
        }
        self
    }

    /// Sets the vertical text alignment.
    pub fn v_align(mut self, alignment: Alignment) -> Self {
        if let Some(block) = self.element.kind_mut().text_block_mut() {
            block.v_align = alignment;
        }
        self
    }

    /// Centers text on both axes.
    pub fn centered(mut self) -> Self {
        self.element.set_alignment(Alignment::Center, Alignment::Center);
        self
    }

    /// Re-sizes the element to its text.
    pub fn fit_text(mut self) -> Self {
        self.element.fit_text();
        self
    }

    /// Sets the border characters of a frame.
    pub fn border(mut self, chars: BorderChars) -> Self {
        if let ElementKind::Frame(current) = self.element.kind_mut() {
            *current = chars;
        }
        self
    }

    /// Sets the stored clip area.
    pub fn clip_area(mut self, clip: ClipArea) -> Self {
        self.element.set_clip_area(clip);
        self
    }

    /// Enables or disables clipping of children.
    pub fn clip_children(mut self, clip_children: bool) -> Self {
        self.element.set_clip_children(clip_children);
        self
    }

    /// Sets the insets applied before the clip reaches the children.
    pub fn clip_insets(mut self, insets: ClipInsets) -> Self {
        self.element.set_clip_insets(insets);
        self
    }

    /// Hides the element.
    pub fn hidden(mut self) -> Self {
        self.element.set_visible(false);
        self
    }

    /// Sets the prompt text of a menu.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        if let ElementKind::Menu(state) = self.element.kind_mut() {
            state.prompt = prompt.into();
        }
        self
    }

    /// Sets the prompt color of a menu.
    pub fn prompt_color(mut self, color: Color) -> Self {
        if let ElementKind::Menu(state) = self.element.kind_mut() {
            state.prompt_color = color;
        }
        self
    }

    /// Finishes the element.
    pub fn build(self) -> Element {
        self.element
    }
}

impl From<ElementBuilder> for Element {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}
