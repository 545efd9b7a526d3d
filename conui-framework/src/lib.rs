//! Conui: a small console UI toolkit.
//!
//! This crate re-exports the conui member crates:
//! - `core`: geometry, colors and the shared error type
//! - `text`: grapheme-aware wrapping, alignment and column clipping
//! - `buffer`: an in-memory cell grid for snapshots
//! - `terminal`: render targets and line input
//! - `widgets`: the element tree, the clipping renderer and composite screens
//!
//! # Example
//!
//! ```
//! use conui_framework::prelude::*;
//!
//! let mut tree = ElementTree::new();
//! let root = modal_text(&mut tree, "Saved", Color::LightGreen, &Theme::default()).unwrap();
//!
//! let mut target = CaptureTarget::new(80, 25);
//! tree.render(root, &mut target).unwrap();
//! assert_eq!(target.lines()[2], "| Saved |");
//! ```

pub use conui_buffer as buffer;
pub use conui_core as core;
pub use conui_terminal as terminal;
pub use conui_text as text;
pub use conui_widgets as widgets;

pub mod prelude {
    pub use conui_core::{Color, ColorAttr, Error, Position, Rect, Result, Size};
    pub use conui_terminal::{
        CaptureTarget, CrosstermTarget, LineReader, RenderTarget, ScriptedLineReader,
        StdinLineReader, StreamLineReader,
    };
    pub use conui_text::{Alignment, WrapMode};
    pub use conui_widgets::{
        choice_panel, menu_screen, modal_content, modal_text, prompt_panel, Element, ElementId,
        ElementTree, MenuSelection, Theme,
    };
}
