//! Latest-request-wins render sequencing.
//!
//! When a parameter changes while a render is still in flight, the in-flight
//! result is stale the moment it completes and must be discarded rather than
//! raced against the newer render. [`RenderSession`] implements that policy
//! with a monotonically increasing ticket counter: every render begins by
//! taking a ticket, and only the holder of the newest ticket may publish its
//! result.
//!
//! The session does no scheduling itself - the host decides whether renders
//! run inline or on worker threads - and needs no locking, only the atomic
//! counter.
//!
//! # Example
//!
//! ```rust
//! use filmfx_core::PixelBuffer;
//! use filmfx_pipeline::RenderSession;
//!
//! let session = RenderSession::new();
//! let first = session.begin();
//! let second = session.begin(); // user moved a slider again
//!
//! let out = PixelBuffer::new(8, 8).unwrap();
//! assert!(session.finish(first, out.clone()).is_none()); // stale, dropped
//! assert!(session.finish(second, out).is_some()); // latest wins
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket for one render request.
///
/// Deliberately not `Clone`: a ticket is spent when passed to
/// [`RenderSession::finish`].
#[derive(Debug, PartialEq, Eq)]
pub struct RenderTicket(u64);

/// Monotonic render sequencer; see the module docs.
#[derive(Debug, Default)]
pub struct RenderSession {
    seq: AtomicU64,
}

impl RenderSession {
    /// Creates a session with no renders issued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new render request, superseding all earlier ones.
    pub fn begin(&self) -> RenderTicket {
        RenderTicket(self.seq.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns `true` while no newer render has been requested.
    ///
    /// Long renders can poll this between stages to abandon stale work
    /// early instead of computing a result that will be dropped.
    pub fn is_current(&self, ticket: &RenderTicket) -> bool {
        ticket.0 == self.seq.load(Ordering::SeqCst)
    }

    /// Publishes a finished render.
    ///
    /// Returns `Some(value)` when `ticket` is still the newest request, or
    /// `None` when the result is stale and must be discarded.
    pub fn finish<T>(&self, ticket: RenderTicket, value: T) -> Option<T> {
        if self.is_current(&ticket) {
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_render_publishes() {
        let session = RenderSession::new();
        let t = session.begin();
        assert!(session.is_current(&t));
        assert_eq!(session.finish(t, 42), Some(42));
    }

    #[test]
    fn test_superseded_render_dropped() {
        let session = RenderSession::new();
        let old = session.begin();
        let new = session.begin();

        assert!(!session.is_current(&old));
        assert_eq!(session.finish(old, "old"), None);
        assert_eq!(session.finish(new, "new"), Some("new"));
    }

    #[test]
    fn test_tickets_are_monotonic() {
        let session = RenderSession::new();
        let a = session.begin();
        let b = session.begin();
        let c = session.begin();
        assert!(a.0 < b.0 && b.0 < c.0);
    }

    #[test]
    fn test_cross_thread_supersede() {
        use std::sync::Arc;

        let session = Arc::new(RenderSession::new());
        let old = session.begin();

        let s = Arc::clone(&session);
        let handle = std::thread::spawn(move || s.begin());
        let new = handle.join().unwrap();

        assert_eq!(session.finish(old, 1), None);
        assert_eq!(session.finish(new, 2), Some(2));
    }
}
