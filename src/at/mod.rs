//! AT-command session protocol layer.
//!
//! This module implements the command/response handshake and the inbound stream
//! decoding needed to use an ESP-AT style WiFi modem as a minimal HTTP client.
//! It has two halves that share one physical serial channel:
//!
//! - a synchronous command channel: write one AT command line, poll for a
//!   success or failure token with a timeout ([`Client::execute`]);
//! - an event-driven decode path: the host forwards each received serial line to
//!   [`Client::feed_line`], which extracts `+IPD`-framed TCP payload from the
//!   interleaved chatter and delivers the reassembled body once the modem reports
//!   the remote close.
//!
//! # Usage
//!
//! ```rust,no_run
//! use libespat::at::Client;
//! # use libespat::serial::{Clock, SerialPort, SerialRead, SerialWrite};
//! # struct Uart;
//! # impl SerialRead for Uart {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl SerialWrite for Uart {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl SerialPort for Uart {}
//! # struct Ticker;
//! # impl Clock for Ticker {
//! #     fn now_ms(&self) -> u64 { 0 }
//! #     fn pause_ms(&mut self, _ms: u32) {}
//! # }
//!
//! let mut client = Client::new(Uart, Ticker);
//! client.connect_wifi("my-network", "secret")?;
//! client.get("http://example.com/data", Some(|body: &[u8]| {
//!     // consume the response body
//! }))?;
//! # Ok::<(), libespat::at::Error>(())
//! ```

/// Common error type for the AT protocol layer
pub mod error;

/// The modem client driver
pub mod client;

/// Incremental `+IPD` frame decoding
pub mod ipd;

/// Response aggregation and completion-handler delivery
pub mod session;

mod command;
mod http;
mod wifi;

pub use client::Client;
pub use error::Error;
pub use ipd::FrameDecoder;
pub use session::{ResponseFn, ResponseSession};

/// Success token the modem answers accepted commands with.
pub const OK_TOKEN: &[u8] = b"OK";

/// Failure token the modem answers rejected commands with.
pub const ERROR_TOKEN: &[u8] = b"ERROR";

/// Marker the modem prefixes each framed chunk of received TCP payload with.
pub const IPD_MARKER: &[u8] = b"+IPD";

/// Token line signaling the remote TCP connection has closed, ending a session.
pub const CLOSED_TOKEN: &[u8] = b"CLOSED";

/// Line terminator for outgoing AT command lines.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Default timeout for one command round-trip.
pub const DEFAULT_COMMAND_TIMEOUT_MS: u32 = 2000;

/// Extended timeout for the join command; WiFi association is slow.
pub const JOIN_TIMEOUT_MS: u32 = 10_000;

/// Cooperative pause between polls of the command reply channel.
pub const POLL_PAUSE_MS: u32 = 10;

/// Capacity of the inbound buffer holding undecoded serial input.
pub const RX_BUFFER_CAPACITY: usize = 2048;

/// Capacity of the reassembled response body.
pub const RESPONSE_CAPACITY: usize = 2048;

/// Capacity of the rolling buffer used while polling for command replies.
pub const POLL_BUFFER_CAPACITY: usize = 256;

/// Capacity for one assembled AT command line.
pub const COMMAND_CAPACITY: usize = 256;

/// Capacity for one assembled HTTP request.
pub const REQUEST_CAPACITY: usize = 512;

#[cfg(test)]
mod tests;
