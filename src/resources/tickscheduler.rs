//! Tick scheduler resource.
//!
//! Stands in for a "call me before the next display refresh" primitive. A
//! tick runs on a refresh only if one was requested beforehand, and each tick
//! requests its own successor as its last step. Cancelling the pending
//! request stops the chain.
//!
//! The main loop runs the schedule once per presented frame, so playback
//! speed follows the refresh cadence rather than wall-clock time.

use bevy_ecs::prelude::*;

/// Handle of a requested tick, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

#[derive(Resource, Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    pending: Option<TickHandle>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a tick on the next refresh. Replaces any earlier request.
    pub fn request(&mut self) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle(self.next_id);
        self.pending = Some(handle);
        handle
    }

    /// Cancel `handle` if it is still pending. Returns whether it was.
    pub fn cancel(&mut self, handle: TickHandle) -> bool {
        if self.pending == Some(handle) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Cancel whatever is pending.
    pub fn cancel_pending(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending request as the tick starts running.
    pub fn take_due(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_then_take() {
        let mut s = TickScheduler::new();
        assert!(!s.is_pending());
        let h = s.request();
        assert_eq!(s.pending(), Some(h));
        assert_eq!(s.take_due(), Some(h));
        assert!(!s.is_pending());
    }

    #[test]
    fn test_cancel_only_matches_pending_handle() {
        let mut s = TickScheduler::new();
        let old = s.request();
        let new = s.request();
        assert_ne!(old, new);
        assert!(!s.cancel(old));
        assert!(s.is_pending());
        assert!(s.cancel(new));
        assert!(!s.is_pending());
    }

    #[test]
    fn test_cancel_pending() {
        let mut s = TickScheduler::new();
        let h = s.request();
        assert_eq!(s.cancel_pending(), Some(h));
        assert_eq!(s.cancel_pending(), None);
    }
}
