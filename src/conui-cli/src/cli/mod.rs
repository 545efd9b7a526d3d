//! CLI argument parsing and command dispatch.
//!
//! - `args` - Command-line argument structures
//! - `styles` - ANSI styling for help output
//! - `handlers` - Screen building and command execution

pub mod args;
pub mod handlers;
pub mod styles;

pub use args::{ChoiceArgs, Cli, Commands, LogLevel, MenuArgs, ModalArgs, PromptArgs};
pub use handlers::{dispatch_command, execute};
pub use styles::get_styles;
