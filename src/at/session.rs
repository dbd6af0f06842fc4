//! Response aggregation and completion-handler delivery.

use heapless::Vec;

use super::RESPONSE_CAPACITY;

/// Completion handler invoked with one reassembled response body.
///
/// A plain function pointer rather than a closure, so the slot stays
/// `no_std`-friendly and replaceable at runtime.
pub type ResponseFn = fn(&[u8]);

/// Accumulates decoded payload and owns the completion-handler slot.
///
/// The handler slot holds at most one registration; setting a new handler
/// replaces the previous one (last write wins). The handler fires at most once
/// per request lifecycle, and only when the session-close marker has been seen.
#[derive(Debug, Default)]
pub struct ResponseSession {
    body: Vec<u8, RESPONSE_CAPACITY>,
    handler: Option<ResponseFn>,
    delivered: bool,
}

impl ResponseSession {
    /// Creates an empty session with no handler registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request lifecycle: clears the body and re-arms delivery.
    pub fn begin(&mut self) {
        self.body.clear();
        self.delivered = false;
    }

    /// Registers `handler`, replacing any previous registration.
    pub fn set_handler(&mut self, handler: ResponseFn) {
        self.handler = Some(handler);
    }

    /// Decoded payload accumulated so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub(crate) fn body_mut(&mut self) -> &mut Vec<u8, RESPONSE_CAPACITY> {
        &mut self.body
    }

    /// Delivers the accumulated body to the registered handler.
    ///
    /// Returns `true` when the handler ran. Without a registered handler the
    /// body is retained, not discarded, so a handler registered mid-session
    /// still receives that session's delivery. Once a lifecycle has delivered,
    /// further calls are no-ops until [`begin`](Self::begin) re-arms the slot.
    pub fn deliver(&mut self) -> bool {
        if self.delivered {
            return false;
        }
        let Some(handler) = self.handler else {
            return false;
        };
        handler(&self.body);
        self.body.clear();
        self.delivered = true;
        true
    }
}
