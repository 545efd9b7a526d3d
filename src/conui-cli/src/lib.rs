//! Conui CLI library.
//!
//! - `cli/` - Argument parsing and command handlers
//! - `config` - TOML configuration (viewport and theme)
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod config;
pub mod logging;
