//! In-memory cell grid for conui.
//!
//! - [`Cell`] - a single character cell with its color attribute
//! - [`Buffer`] - a 2D grid of cells that render passes can be captured into
//!
//! The buffer is the sink behind the capture render target: tests and
//! headless runs render a tree into a [`Buffer`] and read back plain or
//! colored text.

pub mod buffer;
pub mod cell;

pub use buffer::Buffer;
pub use cell::Cell;
