//! Peer address parsing and utilities.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing a peer address from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// The address is missing the `:port` suffix.
    MissingPort,
    /// The host component is empty.
    MissingHost,
    /// The port component is not a valid 16-bit number.
    InvalidPort(String),
}

impl fmt::Display for AddressParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressParseError::MissingPort => {
                write!(f, "Peer address must follow format 'host:port'")
            }
            AddressParseError::MissingHost => {
                write!(f, "Peer address host component cannot be empty")
            }
            AddressParseError::InvalidPort(port) => {
                write!(f, "Invalid port number: {port}")
            }
        }
    }
}

impl std::error::Error for AddressParseError {}

/// A network participant, identified by host and port.
///
/// Addresses are value types: two addresses with the same host and port
/// compare equal and hash identically, which is what the crawler's visited
/// and frontier bookkeeping relies on. The ordering is lexicographic by
/// host then port and is the deterministic ordering used for ranking
/// tie-breaks and export output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeerAddress {
    host: String,
    port: u16,
}

impl PeerAddress {
    /// Create a new peer address.
    pub fn new<S: Into<String>>(host: S, port: u16) -> Self {
        PeerAddress {
            host: host.into(),
            port,
        }
    }

    /// The host component of the address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port component of the address.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for PeerAddress {
    type Err = AddressParseError;

    /// Parse a `host:port` string.
    ///
    /// The split is on the last colon so bracketed IPv6 literals with an
    /// appended port still parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s.rsplit_once(':').ok_or(AddressParseError::MissingPort)?;

        if host.is_empty() {
            return Err(AddressParseError::MissingHost);
        }

        let port = port
            .parse::<u16>()
            .map_err(|_| AddressParseError::InvalidPort(port.to_string()))?;

        Ok(PeerAddress::new(host, port))
    }
}
