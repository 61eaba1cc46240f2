//! Demo binary: runs the solar-system testbed with the console attached.
//!
//! The simulation thread (this one) owns the turn by default and opens a
//! short window once per period for the console thread to run commands in.
//! Typing `quit` at the prompt asks the simulation loop to exit, which ends
//! the process and with it the console's blocking read.

use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use spyglass_console::{spawn, ConsoleConfig, TurnLock};
use spyglass_testbed::demo_world;

fn main() -> ExitCode {
    let config = ConsoleConfig::default();
    let lock = Arc::new(TurnLock::new(demo_world()));

    // Take the turn before the console thread exists, so the simulation is
    // guaranteed to run first.
    let mut turn = lock.hold();
    if let Err(err) = spawn(Arc::clone(&lock), config.clone()) {
        eprintln!("spyglass: failed to start console: {err}");
        return ExitCode::FAILURE;
    }

    loop {
        if turn.should_quit() {
            break;
        }
        turn.step();
        thread::sleep(config.period);
        turn = lock.open_window(turn, config.yield_window);
    }

    ExitCode::SUCCESS
}
