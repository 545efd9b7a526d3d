//! Conui CLI - Main entry point.
//!
//! Subcommands build one screen each (menu, modal, prompt, choice), draw it
//! on the terminal or into a text snapshot, and optionally read an answer.

use anyhow::Result;
use clap::Parser;

use conui_cli::cli::{Cli, dispatch_command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    conui_cli::logging::init(cli.log_level, cli.verbose);
    dispatch_command(cli)
}
