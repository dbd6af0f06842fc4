//! HTTP GET dispatch over the modem's TCP bridge.

use core::fmt::Write as _;

use heapless::String;

use super::client::Client;
use super::error::Error;
use super::session::ResponseFn;
use super::{COMMAND_CAPACITY, DEFAULT_COMMAND_TIMEOUT_MS, REQUEST_CAPACITY};
use crate::serial::{Clock, SerialPort};

const URL_SCHEME: &str = "http://";
const HTTP_PORT: u16 = 80;

impl<S: SerialPort, C: Clock> Client<S, C> {
    /// Dispatches an HTTP/1.1 GET request for `url`.
    ///
    /// `Ok(())` means the request was written and the modem accepted the TCP
    /// connection and the send announcement, not that the server answered. The
    /// response body arrives later through the registered handler, once the
    /// remote end closes the connection.
    ///
    /// Session state from any previous request is discarded first, and
    /// `handler` (when supplied) is registered before the first command is
    /// issued, so no decoded data can race ahead of registration. A URL without
    /// the `http://` prefix or with an empty host is rejected without touching
    /// the transport.
    pub fn get(&mut self, url: &str, handler: Option<ResponseFn>) -> Result<(), Error> {
        self.session.begin();
        self.decoder.reset();
        if let Some(handler) = handler {
            self.session.set_handler(handler);
        }

        let (host, path) = parse_url(url)?;

        let mut request: String<REQUEST_CAPACITY> = String::new();
        write!(
            request,
            "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            path, host
        )
        .map_err(|_| Error::Overflow)?;

        let mut command: String<COMMAND_CAPACITY> = String::new();
        write!(command, "AT+CIPSTART=\"TCP\",\"{}\",{}", host, HTTP_PORT)
            .map_err(|_| Error::Overflow)?;
        self.execute(&command, DEFAULT_COMMAND_TIMEOUT_MS)?;

        command.clear();
        write!(command, "AT+CIPSEND={}", request.len()).map_err(|_| Error::Overflow)?;
        self.execute(&command, DEFAULT_COMMAND_TIMEOUT_MS)?;

        // The raw request follows the send announcement unpolled; the modem
        // reports the outcome of the transfer asynchronously, not with OK/ERROR.
        self.write_all(request.as_bytes())?;
        self.flush()
    }
}

/// Splits `url` into host and path.
///
/// Requires a literal `http://` prefix. The host runs up to the first `/`; the
/// remainder is the path, defaulting to `/` when absent.
pub(crate) fn parse_url(url: &str) -> Result<(&str, &str), Error> {
    let rest = url.strip_prefix(URL_SCHEME).ok_or(Error::InvalidUrl)?;
    let (host, path) = match rest.find('/') {
        Some(slash) => rest.split_at(slash),
        None => (rest, "/"),
    };
    if host.is_empty() {
        return Err(Error::InvalidUrl);
    }
    Ok((host, path))
}
