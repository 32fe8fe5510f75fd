//! Frame coalescing for burst events.

use std::cell::Cell;

/// Guard ensuring at most one batched update is pending per rendered frame.
///
/// Event handlers call [`try_schedule`](FrameGate::try_schedule) on every
/// event; only the first call since the last [`complete`](FrameGate::complete)
/// returns true, so a burst of events inside one frame collapses into a
/// single scheduled update.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller should schedule a frame callback.
    pub fn try_schedule(&self) -> bool {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        true
    }

    /// Called from the frame callback once the batch has run.
    pub fn complete(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
