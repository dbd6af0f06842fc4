//! Incremental decoder for the modem's `+IPD` payload framing.
//!
//! Received TCP payload arrives wrapped in `+IPD<len>:<payload>` lines,
//! interleaved with AT status chatter on the same serial stream. The decoder
//! accumulates raw input, extracts complete frames, and recognizes the `CLOSED`
//! marker that ends a session. A frame is only consumed once both its length
//! delimiter and its line terminator are present; anything less stays buffered
//! untouched until more input arrives.

use heapless::Vec;

use super::error::Error;
use super::{CLOSED_TOKEN, IPD_MARKER, RESPONSE_CAPACITY, RX_BUFFER_CAPACITY};

/// Result of scanning unconsumed input for the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameScan {
    /// No frame marker in the input.
    None,
    /// A marker is present but its delimiter or terminator has not arrived yet.
    Partial,
    /// A complete frame was located.
    Complete {
        /// Declared payload length; advisory only.
        declared: Option<usize>,
        /// Payload bounds within the scanned input.
        payload_start: usize,
        payload_end: usize,
        /// Input consumed by this frame, including any chatter before the marker.
        consumed: usize,
    },
}

/// Incremental `+IPD` frame decoder owning the inbound serial buffer.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: Vec<u8, RX_BUFFER_CAPACITY>,
}

impl FrameDecoder {
    /// Creates an empty decoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all buffered input.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Number of buffered bytes not yet folded into a frame or consumed as chatter.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Appends newly received bytes to the inbound buffer.
    ///
    /// On overflow the buffer is cleared and the current session is abandoned;
    /// the stream cannot be resynchronized once bytes are lost.
    pub fn extend(&mut self, data: &[u8]) -> Result<(), Error> {
        self.buffer.extend_from_slice(data).map_err(|_| {
            self.buffer.clear();
            Error::Overflow
        })
    }

    /// Extracts every complete frame, appending payloads to `body` in arrival order.
    ///
    /// Stops at the first incomplete frame and keeps it, and everything after it,
    /// buffered for the next delivery. Consumed prefixes (frame bytes plus any
    /// chatter preceding the marker) are dropped and never re-read.
    pub fn drain_into(&mut self, body: &mut Vec<u8, RESPONSE_CAPACITY>) -> Result<(), Error> {
        let mut cursor = 0;
        loop {
            match scan_frame(&self.buffer[cursor..]) {
                FrameScan::Complete {
                    declared: _,
                    payload_start,
                    payload_end,
                    consumed,
                } => {
                    body.extend_from_slice(
                        &self.buffer[cursor + payload_start..cursor + payload_end],
                    )
                    .map_err(|_| Error::Overflow)?;
                    cursor += consumed;
                }
                FrameScan::None | FrameScan::Partial => break,
            }
        }
        if cursor > 0 {
            let len = self.buffer.len();
            self.buffer.copy_within(cursor..len, 0);
            self.buffer.truncate(len - cursor);
        }
        Ok(())
    }

    /// Whether the session-close marker is fully present in the buffered input.
    ///
    /// The membership test runs over the whole accumulated buffer, so a marker
    /// split across deliveries is recognized exactly once it completes.
    pub fn closed(&self) -> bool {
        find_slice(&self.buffer, CLOSED_TOKEN).is_some()
    }
}

/// Locates the next frame in `input`.
///
/// The declared length between the marker and the `:` delimiter is advisory; the
/// payload is bounded by the line terminator instead, matching the framing the
/// modem actually emits. A `,` between the marker and the digits is tolerated.
/// A marker line that ends before its delimiter is consumed as an empty frame.
pub(crate) fn scan_frame(input: &[u8]) -> FrameScan {
    let Some(marker) = find_slice(input, IPD_MARKER) else {
        return FrameScan::None;
    };
    let after_marker = marker + IPD_MARKER.len();
    let Some(delim) = find_byte(&input[after_marker..], b':') else {
        return FrameScan::Partial;
    };
    let Some(term) = find_byte(&input[after_marker..], b'\n') else {
        return FrameScan::Partial;
    };

    if term < delim {
        // The delimiter belongs to a later line; nothing to extract here.
        return FrameScan::Complete {
            declared: None,
            payload_start: after_marker + term,
            payload_end: after_marker + term,
            consumed: after_marker + term + 1,
        };
    }

    FrameScan::Complete {
        declared: declared_len(&input[after_marker..after_marker + delim]),
        payload_start: after_marker + delim + 1,
        payload_end: after_marker + term,
        consumed: after_marker + term + 1,
    }
}

/// Parses the advisory length field between the marker and the delimiter.
fn declared_len(field: &[u8]) -> Option<usize> {
    let digits = match field.first() {
        Some(b',') => &field[1..],
        _ => field,
    };
    let text = core::str::from_utf8(digits).ok()?;
    text.parse::<usize>().ok()
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
pub(crate) fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&b| b == needle)
}
