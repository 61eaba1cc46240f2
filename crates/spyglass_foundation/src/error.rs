//! Error types for the Spyglass console.
//!
//! Uses `thiserror` for ergonomic error definition. Command handlers never
//! surface these to the operator directly; the dispatcher collapses any
//! failure into a single generic diagnostic line. The structured kinds exist
//! for tests and for embedding hosts.

use thiserror::Error;

/// Result alias for console operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for console operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse(message.into()))
    }

    /// Creates an unknown-command error.
    #[must_use]
    pub fn unknown_command(line: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(line.into()))
    }

    /// Creates a resolution error for a name or id token.
    #[must_use]
    pub fn resolve(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::Resolve(token.into()))
    }

    /// Creates an out-of-range table error.
    #[must_use]
    pub fn no_such_table(id: u64) -> Self {
        Self::new(ErrorKind::NoSuchTable(id))
    }

    /// Creates a missing-snapshot error.
    #[must_use]
    pub fn no_snapshot() -> Self {
        Self::new(ErrorKind::NoSnapshot)
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(e))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed command or argument syntax.
    #[error("parse error: {0}")]
    Parse(String),

    /// The input line did not match any command.
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    /// A name or id token did not resolve to an entity, component, or system.
    #[error("cannot resolve '{0}'")]
    Resolve(String),

    /// A numeric table id was out of range.
    #[error("no table with id {0}")]
    NoSuchTable(u64),

    /// `restore` was issued with no held snapshot.
    #[error("no snapshot to restore")]
    NoSnapshot,

    /// Writing console output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed.
    #[error("editor error: {0}")]
    Editor(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
