//! Per-session context for one console attachment.
//!
//! This is the explicitly-owned bundle of everything a console session needs
//! across commands: the turn lock it shares by reference with the simulation
//! loop, and the snapshot slot it owns exclusively. The simulation thread
//! never touches the snapshot.

use std::sync::Arc;

use crate::coordinator::TurnLock;
use crate::provider::Provider;
use crate::snapshot::SnapshotSlot;

/// State owned by one console session.
pub struct Session<P: Provider> {
    /// The turn lock guarding the simulation state, shared with the
    /// simulation loop.
    pub lock: Arc<TurnLock<P>>,

    /// The session's single snapshot slot.
    pub snapshot: SnapshotSlot<P::Snapshot>,
}

impl<P: Provider> Session<P> {
    /// Creates a session over the shared turn lock with an empty snapshot
    /// slot.
    #[must_use]
    pub fn new(lock: Arc<TurnLock<P>>) -> Self {
        Self {
            lock,
            snapshot: SnapshotSlot::new(),
        }
    }
}
