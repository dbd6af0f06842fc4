//! # libespat - HTTP over AT-command WiFi modems
//!
//! A small Rust driver that turns a serial-attached WiFi companion chip, controllable
//! only through a textual AT-command set (the ESP8266/ESP-AT family), into a minimal
//! HTTP client for a constrained host microcontroller. This library is designed for
//! embedded systems and supports `no_std` environments.
//!
//! ## Features
//!
//! - **WiFi association**: reset the modem, pin station mode, and join a network
//! - **HTTP GET**: open a TCP connection through the modem and issue a literal
//!   HTTP/1.1 GET request
//! - **Incremental `+IPD` decoding**: reassemble the HTTP response body from the
//!   modem's framed serial stream, interleaved with AT protocol chatter
//! - **Zero-allocation**: fixed-capacity `heapless` buffers for predictable memory usage
//!
//! ## Usage
//!
//! The host firmware owns the physical UART and timebase and exposes them through
//! the [`serial`] traits. Received serial lines are forwarded to
//! [`Client::feed_line`](at::Client::feed_line); the reassembled response body is
//! delivered to a registered handler when the modem reports the remote close.
//!
//! ```rust,no_run
//! use libespat::at::Client;
//! # use libespat::serial::{Clock, SerialPort, SerialRead, SerialWrite};
//! # struct MockSerial;
//! # impl SerialRead for MockSerial {
//! #     type Error = ();
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl SerialWrite for MockSerial {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl SerialPort for MockSerial {}
//! # struct MockClock(u64);
//! # impl Clock for MockClock {
//! #     fn now_ms(&self) -> u64 { self.0 }
//! #     fn pause_ms(&mut self, ms: u32) { self.0 += u64::from(ms); }
//! # }
//!
//! fn on_response(body: &[u8]) {
//!     // handle the reassembled HTTP response body
//! }
//!
//! let mut client = Client::new(MockSerial, MockClock(0));
//! let _ = client.connect_wifi("my-network", "secret");
//! let _ = client.get("http://example.com/data", Some(on_response));
//!
//! // In the host's serial line-received event:
//! // client.feed_line(line)?;
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based hosts talking to a modem over a serial adapter
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Serial transport abstraction the host implements over its UART and timebase.
///
/// The protocol layer never touches hardware directly; it drives the modem through
/// the narrow traits in this module.
pub mod serial;

/// AT-command session protocol layer.
///
/// Contains the [`Client`](at::Client) driver: synchronous command execution with
/// timeout, WiFi association, HTTP GET dispatch, and the incremental `+IPD` frame
/// decoder that reassembles response bodies.
pub mod at;
