//! Interactive console for inspecting and mutating a live ECS simulation.
//!
//! This crate provides:
//! - [`Provider`] - The narrow introspection interface the console consumes
//! - [`dispatch`] - Command parsing and dispatch against a provider
//! - [`TurnLock`] - Turn-passing coordination with the simulation loop
//! - [`Console`] - The blocking read-eval-print loop and its session context
//!
//! The simulation engine itself is an external collaborator: the console only
//! observes and requests mutations through [`Provider`], and only while
//! holding the turn.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod command;
mod config;
mod console;
mod coordinator;
mod editor;
mod explain;
mod filter;
mod provider;
mod render;
mod session;
mod snapshot;

pub use command::dispatch;
pub use config::ConsoleConfig;
pub use console::{Console, spawn};
pub use coordinator::{Turn, TurnLock};
pub use editor::{LineEditor, ReadResult, RustylineEditor, ScriptedEditor};
pub use explain::{MatchReason, MatchReport};
pub use filter::parse_filter;
pub use provider::{EntityInfo, Provider, SystemInfo, TableInfo};
pub use render::{Cell, ColumnSpec, DetailWriter, TableWriter, joined_or_dash};
pub use session::Session;
pub use snapshot::SnapshotSlot;
