//! Text layout for conui.
//!
//! This crate turns the raw text of a label into positioned, clipped runs of
//! graphemes:
//!
//! - **Grapheme handling**: cluster segmentation and terminal column widths
//! - **Line breaking**: greedy word or truncate wrapping under a width and
//!   height budget
//! - **Alignment**: begin/center/end placement on both axes
//! - **Clipping**: cutting a positioned line down to the visible columns
//!
//! # Example
//!
//! ```
//! use conui_text::{clip_columns, layout_lines, place_lines, Alignment, LayoutOptions};
//!
//! let lines = layout_lines("hello wide world", LayoutOptions::new(10, 0));
//! assert_eq!(lines, vec!["hello wide", "world"]);
//!
//! let placed = place_lines(lines, 10, 3, Alignment::Center, Alignment::Begin);
//! assert_eq!(placed[1].x, 2);
//!
//! // Only columns 0..4 are visible.
//! let visible = clip_columns(&placed[1].text, placed[1].x, 0..4);
//! assert_eq!(visible, Some((2, "wo")));
//! ```

pub mod align;
pub mod grapheme;
pub mod measurement;
pub mod wrap;

pub use align::{align_offset, place_lines, Alignment, PlacedLine};
pub use grapheme::{grapheme_display_width, graphemes_with_widths, is_zero_width_char};
pub use measurement::{clip_columns, display_width, widest_line};
pub use wrap::{layout_lines, line_count, LayoutOptions, WrapMode};
