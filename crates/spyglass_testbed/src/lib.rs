//! Synthetic simulation world and demo binary for Spyglass.
//!
//! This crate provides:
//! - [`Testbed`] - A small in-memory world implementing the console's
//!   introspection trait
//! - [`Term`] / [`Oper`] / [`Source`] - Query terms for testbed systems
//! - [`demo_world`] - The world the demo binary and benches are built on
//!
//! The testbed is a fixture, not an engine: just enough owned/shared/
//! container/base provenance and term-based matching to exercise every
//! console command and every match-failure reason.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod demo;
mod query;
mod world;

pub use demo::demo_world;
pub use query::{Oper, Source, Term};
pub use world::{Testbed, TestbedSnapshot};
