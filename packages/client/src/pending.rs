//! Frame batching for typed lines.
//!
//! The server answers every input event with a full frame. A typed line is sent
//! as several events, so only the frame answering the last one is worth
//! printing.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Count of sent events whose frame has not arrived yet, shared by the write
/// and read tasks
#[derive(Debug, Clone, Default)]
pub struct PendingFrames {
    outstanding: Arc<AtomicUsize>,
}

impl PendingFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one event about to be sent
    pub fn event_sent(&self) {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
    }

    /// Record one received frame and decide whether to print it.
    ///
    /// `closed` frames are always printed, as are frames that arrive with no
    /// event outstanding (the initial frame).
    pub fn frame_received(&self, closed: bool) -> bool {
        let previous = self
            .outstanding
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                Some(n.saturating_sub(1))
            })
            .unwrap_or(0);
        closed || previous <= 1
    }

    pub fn outstanding(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }
}
