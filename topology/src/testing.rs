//! Scripted in-memory peer client for exercising the topology pipeline.

use peer_atlas_client::{ClientError, Liveness, PeerAddress, PeerClient, PeerTime};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// Parse a test address, panicking on bad input.
pub fn addr(s: &str) -> PeerAddress {
    s.parse().expect("valid test address")
}

/// Mock implementation of [`PeerClient`] backed by scripted responses.
#[derive(Debug, Default)]
pub struct MockPeerClient {
    /// Neighbor list each peer reports. Peers without an entry report
    /// an empty list.
    neighbors: HashMap<PeerAddress, Vec<PeerAddress>>,
    /// Peers that fail the liveness probe.
    unavailable: HashSet<PeerAddress>,
    /// Clock reading each peer reports. Peers without an entry report
    /// an unknown time.
    times: HashMap<PeerAddress, PeerTime>,
    /// Peers whose direct queries hard-fail.
    failing: HashSet<PeerAddress>,
    /// Count of neighbor queries per peer, for no-revisit assertions.
    queries: Mutex<HashMap<PeerAddress, usize>>,
}

impl MockPeerClient {
    /// Create a mock where every peer is alive and reports nothing.
    pub fn new() -> Self {
        MockPeerClient::default()
    }

    /// Script the neighbor list a peer reports.
    pub fn with_neighbors(mut self, peer: PeerAddress, neighbors: Vec<PeerAddress>) -> Self {
        self.neighbors.insert(peer, neighbors);
        self
    }

    /// Make a peer fail its liveness probe.
    pub fn with_unavailable(mut self, peer: PeerAddress) -> Self {
        self.unavailable.insert(peer);
        self
    }

    /// Script the clock reading a peer reports.
    pub fn with_time(mut self, peer: PeerAddress, time: PeerTime) -> Self {
        self.times.insert(peer, time);
        self
    }

    /// Make any direct query against a peer hard-fail.
    pub fn with_failure(mut self, peer: PeerAddress) -> Self {
        self.failing.insert(peer);
        self
    }

    /// How many times a peer's neighbor list was requested.
    pub fn peer_queries(&self, peer: &PeerAddress) -> usize {
        self.queries
            .lock()
            .expect("query counter lock")
            .get(peer)
            .copied()
            .unwrap_or(0)
    }
}

impl PeerClient for MockPeerClient {
    async fn get_peers(&self, peer: &PeerAddress) -> Result<Vec<PeerAddress>, ClientError> {
        *self
            .queries
            .lock()
            .expect("query counter lock")
            .entry(peer.clone())
            .or_insert(0) += 1;

        if self.failing.contains(peer) {
            return Err(ClientError::Unreachable(peer.clone()));
        }
        Ok(self.neighbors.get(peer).cloned().unwrap_or_default())
    }

    async fn get_info(&self, peer: &PeerAddress) -> Liveness {
        if self.unavailable.contains(peer) {
            Liveness::Unavailable
        } else {
            Liveness::Alive
        }
    }

    async fn get_time(&self, peer: &PeerAddress) -> Result<PeerTime, ClientError> {
        if self.failing.contains(peer) {
            return Err(ClientError::Unreachable(peer.clone()));
        }
        Ok(self.times.get(peer).copied().unwrap_or(PeerTime::Unknown))
    }
}
