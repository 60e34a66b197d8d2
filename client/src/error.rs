use crate::PeerAddress;
use std::fmt;
use std::io;

/// Hard failures of a peer probe.
///
/// These are distinct from the soft outcomes ([`crate::Liveness::Unavailable`],
/// [`crate::PeerTime::Unknown`]) which are regular values rather than errors.
#[derive(Debug)]
pub enum ClientError {
    /// The peer could not be reached for a direct query.
    Unreachable(PeerAddress),
    /// The underlying transport failed.
    Io(io::Error),
    /// The peer answered with something the client could not interpret.
    Protocol(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Unreachable(peer) => write!(f, "Peer {peer} unreachable"),
            ClientError::Io(err) => write!(f, "Transport error: {err}"),
            ClientError::Protocol(msg) => write!(f, "Protocol error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Io(err) => Some(err),
            ClientError::Unreachable(_) => None,
            ClientError::Protocol(_) => None,
        }
    }
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        ClientError::Io(err)
    }
}
