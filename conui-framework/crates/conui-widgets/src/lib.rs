//! Element tree, clipping renderer and widgets for conui.
//!
//! # Overview
//!
//! An [`ElementTree`] owns every [`Element`] and the parent/child links
//! between them. Positions are relative to the parent; a render pass walks
//! the tree depth-first, accumulating absolute origins and threading clip
//! rectangles down so that a container can cut off children that stray past
//! its edges.
//!
//! The element kinds are:
//!
//! - **Interface**: a container that fills itself with its background
//! - **Frame**: a bordered box
//! - **Label** / **TextField**: wrapped, aligned text
//! - **Menu**: numbered entries plus an input prompt
//! - **Custom**: anything implementing [`Draw`]
//!
//! # Example
//!
//! ```
//! use conui_core::Color;
//! use conui_terminal::CaptureTarget;
//! use conui_widgets::{Element, ElementTree};
//!
//! let mut tree = ElementTree::new();
//! let frame = tree.insert(Element::frame().size((12, 3)).fore(Color::Blue).build());
//! tree.add_new_child(frame, Element::label().text("hi there").position((2, 1)).build()).unwrap();
//!
//! let mut target = CaptureTarget::new(20, 4);
//! tree.render(frame, &mut target).unwrap();
//! assert_eq!(target.lines(), vec!["+----------+", "| hi there |", "+----------+"]);
//! ```

pub mod border;
pub mod builder;
pub mod clip;
pub mod compose;
pub mod element;
mod field;
pub mod menu;
pub mod render;
pub mod tree;

pub use border::BorderChars;
pub use builder::ElementBuilder;
pub use clip::{ClipArea, ClipInsets};
pub use compose::{
    centered_label, choice_panel, menu_screen, modal_content, modal_text, prompt_panel,
    ChoicePanel, MenuScreen, PromptPanel, Theme, SCREEN_SIZE,
};
pub use element::{Element, ElementKind, TextBlock};
pub use menu::{MenuSelection, MenuState};
pub use render::{Draw, Painter, RenderContext};
pub use tree::{ElementId, ElementTree};
