//! The single-slot snapshot held by a console session.
//!
//! At most one capture is live at a time: taking a new one discards the
//! previous capture (its resources are released on replacement), and restoring
//! consumes the slot, so a second restore without an intervening capture
//! fails.

use spyglass_foundation::{Error, Result};

/// Holds at most one provider-owned state capture.
#[derive(Debug, Default)]
pub struct SnapshotSlot<S> {
    held: Option<S>,
}

impl<S> SnapshotSlot<S> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { held: None }
    }

    /// Stores a capture, dropping any previously held one.
    pub fn take(&mut self, snapshot: S) {
        self.held = Some(snapshot);
    }

    /// True if a capture is currently held.
    #[must_use]
    pub const fn is_held(&self) -> bool {
        self.held.is_some()
    }

    /// Consumes and returns the held capture.
    ///
    /// # Errors
    ///
    /// Fails when no capture is held.
    pub fn restore(&mut self) -> Result<S> {
        self.held.take().ok_or_else(Error::no_snapshot)
    }
}
