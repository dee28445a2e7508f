//! Shared node-wide state.

use std::sync::atomic::{AtomicBool, Ordering};

/// State shared by every peer-handling task in a node.
///
/// Carries the initial-block-download completion flag consulted when
/// computing desirable peer capabilities. The flag has a single writer
/// (the sync-completion path) and arbitrarily many readers; it only
/// tunes a peer-selection heuristic, so relaxed ordering suffices and a
/// stale read during the transition is harmless.
#[derive(Debug, Default)]
pub struct NodeContext {
    ibd_completed: AtomicBool,
}

impl NodeContext {
    /// Create a context with initial block download not yet completed.
    pub fn new() -> Self {
        NodeContext {
            ibd_completed: AtomicBool::new(false),
        }
    }

    /// Whether initial block download has completed.
    pub fn ibd_completed(&self) -> bool {
        self.ibd_completed.load(Ordering::Relaxed)
    }

    /// Record initial-block-download completion. Idempotent.
    pub fn set_ibd_completed(&self, completed: bool) {
        self.ibd_completed.store(completed, Ordering::Relaxed);
    }
}
