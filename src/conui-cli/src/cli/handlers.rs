//! Command execution handlers.
//!
//! Every subcommand builds a screen into a fresh [`ElementTree`], renders it
//! to either the terminal or a capture buffer and, with `--read`, reads one
//! answer through the screen's input field.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use conui_framework::prelude::*;

use super::args::{Cli, Commands};
use crate::config::Config;

/// Where a screen takes its answer from.
#[derive(Debug)]
enum AnswerSource {
    None,
    Menu { menu: ElementId, entries: Vec<String> },
    Field(ElementId),
}

/// A built screen.
#[derive(Debug)]
pub struct Scene {
    /// The element arena holding the screen.
    pub tree: ElementTree,
    /// The element to render.
    pub root: ElementId,
    answer: AnswerSource,
}

impl Scene {
    /// Builds the screen for a subcommand.
    pub fn build(command: &Commands, theme: &Theme) -> Result<Self> {
        let mut tree = ElementTree::new();
        let (root, answer) = match command {
            Commands::Menu(args) => {
                let screen = menu_screen(&mut tree, args.title.as_deref(), &args.entries, theme)?;
                let answer = AnswerSource::Menu {
                    menu: screen.menu,
                    entries: args.entries.clone(),
                };
                (screen.root, answer)
            }
            Commands::Modal(args) => {
                let color = args.color.unwrap_or(theme.modal_text);
                let root = modal_text(&mut tree, &args.text, color, theme)?;
                (root, AnswerSource::None)
            }
            Commands::Prompt(args) => {
                let panel = prompt_panel(&mut tree, &args.label, theme)?;
                (panel.root, AnswerSource::Field(panel.field))
            }
            Commands::Choice(args) => {
                let panel = choice_panel(&mut tree, &args.label, &args.choices, theme)?;
                let answer = AnswerSource::Menu {
                    menu: panel.menu,
                    entries: args.choices.clone(),
                };
                (panel.root, answer)
            }
        };
        tracing::debug!(elements = tree.len(), "built screen");
        Ok(Self { tree, root, answer })
    }

    /// Reads an answer through the screen's input, if it has one.
    ///
    /// A menu answer is the chosen entry's text, or the typed text when it
    /// does not name an entry.
    pub fn read(
        &self,
        target: &mut dyn RenderTarget,
        reader: &mut dyn LineReader,
    ) -> Result<Option<String>> {
        match &self.answer {
            AnswerSource::None => Ok(None),
            AnswerSource::Field(field) => {
                let line = self
                    .tree
                    .read_field(*field, target, reader)
                    .context("failed to read answer")?;
                Ok(Some(line))
            }
            AnswerSource::Menu { menu, entries } => {
                let selection = self
                    .tree
                    .read_menu(*menu, target, reader)
                    .context("failed to read choice")?;
                let answer = match selection {
                    MenuSelection::Entry(index) => entries.get(index).cloned().unwrap_or_default(),
                    MenuSelection::Other(input) => input,
                };
                Ok(Some(answer))
            }
        }
    }
}

/// Runs a parsed command against the given output and input.
pub fn execute(
    cli: &Cli,
    config: &Config,
    out: &mut dyn Write,
    reader: &mut dyn LineReader,
) -> Result<()> {
    let theme = config.theme.resolve()?;
    let scene = Scene::build(&cli.command, &theme)?;
    let reads = cli.command.reads();

    if cli.capture {
        let mut target = CaptureTarget::new(config.viewport.width, config.viewport.height);
        scene
            .tree
            .render(scene.root, &mut target)
            .context("failed to render screen")?;
        let answer = if reads {
            scene.read(&mut target, reader)?
        } else {
            None
        };

        let lines = if cli.ansi {
            target.ansi_lines()
        } else {
            target.lines()
        };
        for line in lines {
            writeln!(out, "{line}")?;
        }
        if let Some(answer) = answer {
            writeln!(out, "{answer}")?;
        }
        return Ok(());
    }

    let answer = {
        let mut target = CrosstermTarget::stdout();
        target.clear()?;
        scene
            .tree
            .render(scene.root, &mut target)
            .context("failed to render screen")?;
        let answer = if reads {
            scene.read(&mut target, reader)?
        } else {
            None
        };
        let below = i32::from(config.viewport.height);
        target.set_cursor(Position::new(0, below))?;
        target.flush()?;
        answer
    };
    if let Some(answer) = answer {
        writeln!(out, "{answer}")?;
    }
    Ok(())
}

fn input_reader(script: Option<&Path>) -> Result<Box<dyn LineReader>> {
    match script {
        Some(path) => {
            let scripted = ScriptedLineReader::from_file(path)
                .with_context(|| format!("failed to read script: {}", path.display()))?;
            Ok(Box::new(scripted.with_fallback(StdinLineReader::new())))
        }
        None => Ok(Box::new(StdinLineReader::new())),
    }
}

/// Loads configuration and input, then runs the command on stdout.
pub fn dispatch_command(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let mut reader = input_reader(cli.script.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out, reader.as_mut())
}
