//! The modem client driver tying the command channel, decoder, and session together.

use super::error::Error;
use super::ipd::FrameDecoder;
use super::session::{ResponseFn, ResponseSession};
use crate::serial::{Clock, SerialPort};

/// Driver for an AT-command WiFi modem attached over a serial port.
///
/// The client owns the serial port and clock, the inbound frame decoder, and the
/// response session. Command execution ([`execute`](Client::execute)) and line
/// delivery ([`feed_line`](Client::feed_line)) are two consumers of the same
/// physical channel: both take `&mut self`, so they cannot interleave within safe
/// Rust, but the host must also ensure its line-delivery path is not fed the
/// reply bytes of a command in flight.
pub struct Client<S: SerialPort, C: Clock> {
    pub(crate) serial: S,
    pub(crate) clock: C,
    pub(crate) decoder: FrameDecoder,
    pub(crate) session: ResponseSession,
}

impl<S: SerialPort, C: Clock> Client<S, C> {
    /// Creates a client over `serial`, with `clock` providing time and pauses.
    pub fn new(serial: S, clock: C) -> Self {
        Self {
            serial,
            clock,
            decoder: FrameDecoder::new(),
            session: ResponseSession::new(),
        }
    }

    /// Registers the completion handler for response delivery.
    ///
    /// A single replaceable slot: the most recent registration wins. Takes
    /// effect for the current session if its close marker has not been
    /// processed yet.
    pub fn register_response_handler(&mut self, handler: ResponseFn) {
        self.session.set_handler(handler);
    }

    /// Feeds one received serial line into the decoder.
    ///
    /// Wire this to the host's line-delivery event. Frames completed by this
    /// delivery are appended to the response body in arrival order; if the
    /// session-close marker is now present and a handler is registered, the
    /// body is delivered and both it and the inbound buffer are cleared.
    pub fn feed_line(&mut self, line: &[u8]) -> Result<(), Error> {
        self.decoder.extend(line)?;
        self.decoder.drain_into(self.session.body_mut())?;
        if self.decoder.closed() && self.session.deliver() {
            self.decoder.reset();
        }
        Ok(())
    }

    /// Releases the transport, dropping all session state.
    pub fn release(self) -> (S, C) {
        (self.serial, self.clock)
    }
}
