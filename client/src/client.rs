//! The probe interface peers are queried through.

use crate::{ClientError, PeerAddress};
use std::fmt;
use std::future::Future;

/// Outcome of a liveness probe.
///
/// An unreachable peer is a regular outcome here, not an error: liveness
/// filtering is the mechanism for excluding such peers before a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Liveness {
    /// The peer answered the probe.
    Alive,
    /// The peer did not answer the probe.
    Unavailable,
}

/// A peer's reported clock reading, in unix-epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerTime {
    /// The peer reported its clock.
    Known(i64),
    /// The peer answered but does not know its time.
    Unknown,
}

impl fmt::Display for PeerTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerTime::Known(secs) => write!(f, "{secs}"),
            PeerTime::Unknown => write!(f, "unknown"),
        }
    }
}

/// Interface to a peer network's query API.
///
/// This trait is the seam between the topology tooling and whatever
/// transport actually carries the queries, allowing in-memory
/// implementations for testing without touching the crawl logic.
/// Implementors write plain `async fn` methods.
pub trait PeerClient {
    /// Ask a peer for its neighbor list.
    ///
    /// The returned order is significant: it is the peer's own priority
    /// ordering of its connections and must be preserved by callers.
    fn get_peers(
        &self,
        peer: &PeerAddress,
    ) -> impl Future<Output = Result<Vec<PeerAddress>, ClientError>> + Send;

    /// Probe whether a peer currently answers.
    fn get_info(&self, peer: &PeerAddress) -> impl Future<Output = Liveness> + Send;

    /// Ask a peer for its current clock reading.
    fn get_time(
        &self,
        peer: &PeerAddress,
    ) -> impl Future<Output = Result<PeerTime, ClientError>> + Send;
}
