//! Line-oriented input.
//!
//! Text fields and menus read whole lines. [`LineReader`] abstracts where the
//! lines come from so that interactive runs read the terminal while scripted
//! runs and tests feed canned answers through [`ScriptedLineReader`].

use std::collections::VecDeque;
use std::io::{self, BufRead, Stdin};
use std::path::Path;

use conui_core::{Error, Result};

/// A source of input lines.
pub trait LineReader {
    /// Reads one line without its line terminator.
    ///
    /// Returns an `UnexpectedEof` I/O error once the source is exhausted.
    fn read_line(&mut self) -> Result<String>;
}

fn end_of_input() -> Error {
    Error::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"))
}

fn read_trimmed_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(end_of_input());
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Reads lines from any buffered stream.
#[derive(Debug)]
pub struct StreamLineReader<R: BufRead> {
    input: R,
}

impl<R: BufRead> StreamLineReader<R> {
    /// Creates a reader over `input`.
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> LineReader for StreamLineReader<R> {
    fn read_line(&mut self) -> Result<String> {
        read_trimmed_line(&mut self.input)
    }
}

/// Reads lines from standard input.
///
/// The stdin lock is taken for each line and released afterwards, so any
/// number of readers may coexist.
#[derive(Debug)]
pub struct StdinLineReader {
    stdin: Stdin,
}

impl StdinLineReader {
    /// Creates a reader over standard input.
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }
}

impl Default for StdinLineReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LineReader for StdinLineReader {
    fn read_line(&mut self) -> Result<String> {
        read_trimmed_line(&mut self.stdin.lock())
    }
}

/// Serves a fixed list of lines, then defers to a fallback reader.
///
/// # Example
///
/// ```
/// use conui_terminal::{LineReader, ScriptedLineReader};
///
/// let mut reader = ScriptedLineReader::from_script("1\nhello\n");
/// assert_eq!(reader.read_line().unwrap(), "1");
/// assert_eq!(reader.read_line().unwrap(), "hello");
/// assert!(reader.read_line().is_err());
/// ```
#[derive(Default)]
pub struct ScriptedLineReader {
    lines: VecDeque<String>,
    fallback: Option<Box<dyn LineReader>>,
}

impl ScriptedLineReader {
    /// Creates a reader serving `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            fallback: None,
        }
    }

    /// Creates a reader from newline-separated script text.
    pub fn from_script(script: &str) -> Self {
        Self::new(script.lines())
    }

    /// Loads a script file, one answer per line.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let script = std::fs::read_to_string(path)?;
        Ok(Self::from_script(&script))
    }

    /// Sets the reader used once the script runs out.
    pub fn with_fallback(mut self, fallback: impl LineReader + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Returns how many scripted lines are left.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineReader for ScriptedLineReader {
    fn read_line(&mut self) -> Result<String> {
        if let Some(line) = self.lines.pop_front() {
            tracing::debug!(line = %line, "serving scripted input");
            return Ok(line);
        }
        match self.fallback.as_mut() {
            Some(reader) => reader.read_line(),
            None => Err(end_of_input()),
        }
    }
}

impl std::fmt::Debug for ScriptedLineReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedLineReader")
            .field("lines", &self.lines)
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}
