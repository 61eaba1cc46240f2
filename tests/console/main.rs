//! End-to-end console behavior tests.
//!
//! Each test scripts a session over the demo (or a purpose-built) testbed
//! world, runs the console to EOF, and asserts on the captured output and on
//! the world state left behind.


mod abbrev;
mod errors;
mod matching;
mod snapshot;
