//! The console read-eval-print loop.
//!
//! One cycle: print the prompt and block on a line of input (no lock held),
//! then take the turn, parse/dispatch/render, and release. `quit` only
//! requests shutdown through the provider; the console keeps blocking on
//! input until its stream ends or the process exits.

use std::io::{self, Write};
use std::sync::Arc;
use std::thread;

use spyglass_foundation::Result;

use crate::command::dispatch;
use crate::config::ConsoleConfig;
use crate::coordinator::TurnLock;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::provider::Provider;
use crate::session::Session;

/// The interactive console attached to a simulation.
pub struct Console<P: Provider, E: LineEditor = RustylineEditor, W: Write = io::Stdout> {
    editor: E,
    out: W,
    session: Session<P>,
    config: ConsoleConfig,
}

impl<P: Provider> Console<P> {
    /// Creates a console over rustyline and stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor fails to initialize.
    pub fn new(lock: Arc<TurnLock<P>>, config: ConsoleConfig) -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(lock, editor, io::stdout(), config))
    }
}

impl<P: Provider, E: LineEditor, W: Write> Console<P, E, W> {
    /// Creates a console with the given editor and output sink.
    pub fn with_editor(lock: Arc<TurnLock<P>>, editor: E, out: W, config: ConsoleConfig) -> Self {
        Self {
            editor,
            out,
            session: Session::new(lock),
            config,
        }
    }

    /// Runs the read-eval-print loop until the input stream ends.
    ///
    /// Command failures are reported to the operator and never end the loop;
    /// only end-of-input or an editor/output failure does.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if !self.config.startup_delay.is_zero() {
            thread::sleep(self.config.startup_delay);
        }
        if self.config.banner {
            writeln!(self.out, "Spyglass console. Type 'help' to list commands.")?;
            self.out.flush()?;
        }

        let lock = Arc::clone(&self.session.lock);
        loop {
            let line = match self.editor.read_line(&self.config.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => continue,
                ReadResult::Eof => break,
            };
            if line.is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            // Input is complete; only now contend for the turn.
            let mut turn = lock.hold();
            let result = dispatch(&mut *turn, &mut self.session.snapshot, &line, &mut self.out);
            if result.is_err() {
                writeln!(self.out, "error executing '{line}'")?;
            }
            drop(turn);

            self.out.flush()?;
        }

        Ok(())
    }

    /// Consumes the console and returns its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// Spawns the default console on its own named thread.
///
/// The caller is expected to hold the turn already, so the new thread blocks
/// until the simulation loop opens its first yield window.
///
/// # Errors
///
/// Returns an error if the editor fails to initialize or the thread cannot
/// be spawned.
pub fn spawn<P>(lock: Arc<TurnLock<P>>, config: ConsoleConfig) -> Result<thread::JoinHandle<()>>
where
    P: Provider + Send + 'static,
    P::Snapshot: Send,
{
    let mut console = Console::new(lock, config)?;
    let handle = thread::Builder::new()
        .name("spyglass-console".to_string())
        .spawn(move || {
            if let Err(e) = console.run() {
                eprintln!("console error: {e}");
            }
        })?;
    Ok(handle)
}
