//! Common error types for AT modem operations

/// A common error type for AT modem operations.
///
/// This enum defines the set of failures that can surface from the protocol
/// layer. It is designed to be simple and portable for `no_std` environments;
/// every fallible operation resolves to one of these variants and there is no
/// panicking control flow on protocol paths.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// No success or failure token arrived within the timeout window.
    Timeout,
    /// The modem answered a command with an explicit failure token.
    CommandFailed,
    /// An error occurred during a read from the serial port.
    ReadError,
    /// An error occurred during a write to the serial port.
    WriteError,
    /// The URL is missing the `http://` prefix or has an empty host.
    InvalidUrl,
    /// A fixed-capacity buffer would have overflowed.
    Overflow,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::CommandFailed => defmt::write!(f, "CommandFailed"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::InvalidUrl => defmt::write!(f, "InvalidUrl"),
            Error::Overflow => defmt::write!(f, "Overflow"),
        }
    }
}
