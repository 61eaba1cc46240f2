//! Line editor abstraction for the console.
//!
//! A trait-based seam over line input, so the console can use rustyline at a
//! real terminal while tests drive it with a scripted editor.

use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use spyglass_foundation::{Error, ErrorKind, Result};

/// Result of reading one line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),

    /// User pressed Ctrl+C.
    Interrupted,

    /// End of input (Ctrl+D or a closed stream).
    Eof,
}

/// Abstraction over blocking line input.
pub trait LineEditor {
    /// Reads one line with the given prompt. Blocks until input arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<(), DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?
            .build();

        let editor = Editor::with_config(config)
            .map_err(|e| Error::new(ErrorKind::Editor(e.to_string())))?;

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::new(ErrorKind::Editor(e.to_string()))),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// A scripted editor that replays a fixed list of lines, then reports EOF.
///
/// Used by tests and by embedders that want to drive the console
/// programmatically.
#[derive(Debug, Default)]
pub struct ScriptedEditor {
    lines: VecDeque<String>,
}

impl ScriptedEditor {
    /// Creates an editor that will replay the given lines in order.
    #[must_use]
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}
