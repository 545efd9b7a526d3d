//! Render targets and line input for conui.
//!
//! A render pass talks to its output through [`RenderTarget`], which only
//! knows how to move the cursor, select a color attribute and write text.
//! Two targets are provided:
//!
//! - [`CrosstermTarget`] drives a real terminal through crossterm
//! - [`CaptureTarget`] records into an in-memory grid for tests and
//!   headless snapshots
//!
//! Input is read a line at a time through [`LineReader`].

pub mod backend;
pub mod capture;
pub mod input;

pub use backend::{CrosstermTarget, RenderTarget};
pub use capture::CaptureTarget;
pub use input::{LineReader, ScriptedLineReader, StdinLineReader, StreamLineReader};
