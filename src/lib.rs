//! Spyglass - Interactive console debugger for entity-component simulations
//!
//! This crate re-exports all layers of the Spyglass system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: spyglass_testbed    — Reference world, demo binary
//! Layer 1: spyglass_console    — Commands, rendering, turn-passing, REPL
//! Layer 0: spyglass_foundation — Core types (Entity, TypeSet, Error)
//! ```

pub use spyglass_console as console;
pub use spyglass_foundation as foundation;
pub use spyglass_testbed as testbed;
