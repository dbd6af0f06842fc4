//! Synchronous AT command execution.

use heapless::Vec;

use super::client::Client;
use super::error::Error;
use super::ipd::find_slice;
use super::{ERROR_TOKEN, LINE_TERMINATOR, OK_TOKEN, POLL_BUFFER_CAPACITY, POLL_PAUSE_MS};
use crate::serial::{Clock, SerialPort};

const POLL_CHUNK_SIZE: usize = 64;

impl<S: SerialPort, C: Clock> Client<S, C> {
    /// Sends one AT command and waits for its success or failure token.
    ///
    /// The command text is written with the line terminator appended, then the
    /// reply channel is polled until a completed line carries the success or
    /// failure token, or until `timeout_ms` elapses. Only completed lines are
    /// classified; a token split across reads stays buffered until its
    /// terminator arrives. The success token is checked before the failure
    /// token on each line, and the first matching line wins.
    ///
    /// Must not run while serial line events are being routed to
    /// [`feed_line`](Client::feed_line): the reply would be consumed by the
    /// wrong reader.
    pub fn execute(&mut self, command: &str, timeout_ms: u32) -> Result<(), Error> {
        self.write_all(command.as_bytes())?;
        self.write_all(LINE_TERMINATOR.as_bytes())?;
        self.flush()?;

        let deadline = self.clock.now_ms() + u64::from(timeout_ms);
        let mut pending: Vec<u8, POLL_BUFFER_CAPACITY> = Vec::new();
        let mut chunk = [0u8; POLL_CHUNK_SIZE];

        while self.clock.now_ms() < deadline {
            let received = self.serial.read(&mut chunk).map_err(|_| Error::ReadError)?;
            if received > 0 {
                if pending.extend_from_slice(&chunk[..received]).is_err() {
                    // A reply line longer than the buffer cannot be classified;
                    // start over on the next line boundary.
                    pending.clear();
                }
                if let Some(tail_start) = pending.iter().rposition(|&b| b == b'\n').map(|i| i + 1)
                {
                    for line in pending[..tail_start].split(|&b| b == b'\n') {
                        if find_slice(line, OK_TOKEN).is_some() {
                            return Ok(());
                        }
                        if find_slice(line, ERROR_TOKEN).is_some() {
                            return Err(Error::CommandFailed);
                        }
                    }
                    // Keep the partial tail; it may be the head of a token line.
                    let len = pending.len();
                    pending.copy_within(tail_start..len, 0);
                    pending.truncate(len - tail_start);
                }
            }
            self.clock.pause_ms(POLL_PAUSE_MS);
        }
        Err(Error::Timeout)
    }

    /// Writes the whole buffer, looping on short writes.
    pub(crate) fn write_all(&mut self, mut data: &[u8]) -> Result<(), Error> {
        while !data.is_empty() {
            let written = self.serial.write(data).map_err(|_| Error::WriteError)?;
            if written == 0 {
                return Err(Error::WriteError);
            }
            data = &data[written..];
        }
        Ok(())
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        self.serial.flush().map_err(|_| Error::WriteError)
    }
}
