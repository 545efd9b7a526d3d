//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use conui_framework::core::Color;

use super::styles::get_styles;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Conui - render console UI screens
///
/// Each subcommand builds one screen, draws it and optionally reads an
/// answer from it.
#[derive(Debug, Parser)]
#[command(name = "conui")]
#[command(author, version)]
#[command(about = "Conui - console UI screens", long_about = None)]
#[command(styles = get_styles())]
pub struct Cli {
    /// Print a text snapshot of the screen instead of drawing on the terminal
    #[arg(long, global = true)]
    pub capture: bool,

    /// Keep colors in the snapshot as ANSI escape codes (with --capture)
    #[arg(long, global = true, requires = "capture")]
    pub ansi: bool,

    /// Answer prompts from this file, one line per answer, before reading stdin
    #[arg(long, global = true, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_enum,
        global = true,
        default_value = "warn",
        help_heading = "Debugging"
    )]
    pub log_level: LogLevel,

    /// Enable verbose output (same as --log-level debug)
    #[arg(long, short = 'v', global = true, help_heading = "Debugging")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a framed, numbered menu
    Menu(MenuArgs),

    /// Show a modal message box
    Modal(ModalArgs),

    /// Show a question with an input field
    Prompt(PromptArgs),

    /// Show a question with numbered choices
    Choice(ChoiceArgs),
}

/// Arguments for `conui menu`.
#[derive(Debug, Args)]
pub struct MenuArgs {
    /// Title shown centered above the entries
    #[arg(long)]
    pub title: Option<String>,

    /// Menu entries, in order
    #[arg(required = true, value_name = "ENTRIES")]
    pub entries: Vec<String>,

    /// Read a choice and print it
    #[arg(long)]
    pub read: bool,
}

/// Arguments for `conui modal`.
#[derive(Debug, Args)]
pub struct ModalArgs {
    /// Message text
    pub text: String,

    /// Text color (defaults to the theme's modal_text color)
    #[arg(long, value_name = "NAME")]
    pub color: Option<Color>,
}

/// Arguments for `conui prompt`.
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Question shown above the input field
    pub label: String,

    /// Read an answer and print it
    #[arg(long)]
    pub read: bool,
}

/// Arguments for `conui choice`.
#[derive(Debug, Args)]
pub struct ChoiceArgs {
    /// Question shown above the choices
    pub label: String,

    /// Choices, in order
    #[arg(required = true, value_name = "CHOICES")]
    pub choices: Vec<String>,

    /// Read a choice and print it
    #[arg(long)]
    pub read: bool,
}

impl Commands {
    /// Whether the command reads an answer after drawing.
    pub fn reads(&self) -> bool {
        match self {
            Commands::Menu(args) => args.read,
            Commands::Prompt(args) => args.read,
            Commands::Choice(args) => args.read,
            Commands::Modal(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
    }

    #[test]
    fn test_log_level_from_str_loose() {
        assert_eq!(LogLevel::from_str_loose("WARNING"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::from_str_loose("TrAcE"), Some(LogLevel::Trace));
        assert_eq!(LogLevel::from_str_loose("verbose"), None);
        assert_eq!(LogLevel::Debug.as_filter_str(), "debug");
    }

    #[test]
    fn test_parse_menu() {
        let cli = Cli::try_parse_from([
            "conui", "--capture", "menu", "--title", "Main", "Start", "Quit", "--read",
        ])
        .unwrap();
        assert!(cli.capture);
        let Commands::Menu(args) = &cli.command else {
            panic!("expected menu");
        };
        assert_eq!(args.title.as_deref(), Some("Main"));
        assert_eq!(args.entries, vec!["Start", "Quit"]);
        assert!(cli.command.reads());
    }

    #[test]
    fn test_parse_modal_color() {
        let cli = Cli::try_parse_from(["conui", "modal", "Saved", "--color", "light-green"]).unwrap();
        let Commands::Modal(args) = &cli.command else {
            panic!("expected modal");
        };
        assert_eq!(args.color, Some(Color::LightGreen));
        assert!(!cli.command.reads());

        assert!(Cli::try_parse_from(["conui", "modal", "x", "--color", "teal"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["conui", "prompt", "Name?", "-v", "--capture", "--ansi"])
            .unwrap();
        assert!(cli.verbose);
        assert!(cli.ansi);
        assert_eq!(cli.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_ansi_requires_capture() {
        assert!(Cli::try_parse_from(["conui", "--ansi", "prompt", "Name?"]).is_err());
    }

    #[test]
    fn test_choice_requires_choices() {
        assert!(Cli::try_parse_from(["conui", "choice", "Pick one"]).is_err());
    }
}
