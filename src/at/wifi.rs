//! WiFi association sequence.

use core::fmt::Write as _;

use heapless::String;

use super::client::Client;
use super::error::Error;
use super::{COMMAND_CAPACITY, DEFAULT_COMMAND_TIMEOUT_MS, JOIN_TIMEOUT_MS};
use crate::serial::{Clock, SerialPort};

impl<S: SerialPort, C: Clock> Client<S, C> {
    /// Joins a WiFi network in station mode.
    ///
    /// Issues the attention, station-mode, and join commands in order, stopping
    /// at the first failure. The join step uses an extended timeout; association
    /// is slow. Retry policy, if any, belongs to the caller.
    pub fn connect_wifi(&mut self, ssid: &str, password: &str) -> Result<(), Error> {
        self.execute("AT", DEFAULT_COMMAND_TIMEOUT_MS)?;
        self.execute("AT+CWMODE=1", DEFAULT_COMMAND_TIMEOUT_MS)?;

        let mut join: String<COMMAND_CAPACITY> = String::new();
        write!(join, "AT+CWJAP=\"{}\",\"{}\"", ssid, password).map_err(|_| Error::Overflow)?;
        self.execute(&join, JOIN_TIMEOUT_MS)
    }
}
