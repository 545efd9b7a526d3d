//! Core types for `conui`.
//!
//! This crate provides the building blocks shared by every other `conui` crate:
//!
//! - [`geometry`]: integer positions, sizes and rectangles in character cells
//! - [`color`]: the 16-color console palette plus `Transparent`, and the
//!   attribute byte the palette encodes into
//! - [`error`]: error types for tree, render and terminal operations
//!
//! # Examples
//!
//! ## Working with Geometry
//!
//! ```
//! use conui_core::geometry::{Position, Rect, Size};
//!
//! let origin = Position::new(2, 3);
//! let size = Size::new(10, 4);
//! let rect = Rect::from_parts(origin, size);
//!
//! assert_eq!(rect.right(), 12);
//! assert!(rect.contains(Position::new(5, 5)));
//! ```
//!
//! ## Composing Colors
//!
//! ```
//! use conui_core::color::{Color, ColorAttr};
//!
//! let base = ColorAttr::new(Color::Gray, Color::Blue);
//! // A transparent background keeps the blue already in effect.
//! let label = base.compose(Color::Yellow, Color::Transparent);
//! assert_eq!(label, ColorAttr::new(Color::Yellow, Color::Blue));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

pub mod color;
pub mod error;
pub mod geometry;

// Re-export commonly used types at the crate root for convenience
pub use color::{Color, ColorAttr, Palette};
pub use error::{ColorParseError, Error, Result};
pub use geometry::{Position, Rect, Size};
