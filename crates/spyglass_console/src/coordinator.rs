//! Turn-passing coordination between the simulation loop and the console.
//!
//! There is no true concurrency here: a single binary turn token (one mutex)
//! serializes every touch of simulation state between two cooperating
//! threads. The simulation side takes the turn before the console thread is
//! spawned and thereafter opens a bounded window once per period; the console
//! side takes the turn only after its blocking line-read has completed, so
//! waiting for input never stalls the simulation.
//!
//! Known hazard, preserved deliberately: a command handler runs to completion
//! before the turn is released, so a slow handler delays the next simulation
//! period indefinitely. The console may also miss a window if its previous
//! command is still executing; there is no starvation avoidance beyond the
//! coarse period.

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Duration;

/// The binary turn token guarding shared simulation state.
#[derive(Debug, Default)]
pub struct TurnLock<T> {
    state: Mutex<T>,
}

/// Exclusive possession of the turn, and with it the shared state.
///
/// Whichever side holds a `Turn` is the sole state-mutator until it drops.
#[derive(Debug)]
pub struct Turn<'a, T> {
    guard: MutexGuard<'a, T>,
}

impl<T> TurnLock<T> {
    /// Wraps the shared state in a turn lock. Nobody holds the turn yet.
    pub const fn new(state: T) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Blocks until the turn is free and takes it.
    ///
    /// Poisoning is absorbed: a panicking holder leaves no torn state that
    /// the console could make worse by reading.
    pub fn hold(&self) -> Turn<'_, T> {
        Turn {
            guard: self.state.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    /// The simulation side's per-period gesture: releases the turn, sleeps
    /// the bounded yield window, then takes the turn back.
    pub fn open_window(&self, turn: Turn<'_, T>, window: Duration) -> Turn<'_, T> {
        drop(turn);
        thread::sleep(window);
        self.hold()
    }

    /// Unwraps the shared state once no side holds the turn anymore.
    pub fn into_inner(self) -> T {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Deref for Turn<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for Turn<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}
