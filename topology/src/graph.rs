//! The discovered topology graph.

use peer_atlas_client::PeerAddress;
use std::collections::BTreeMap;

/// Mapping from each crawled peer to its self-reported neighbor list.
///
/// Keys are exactly the peers a crawl visited. Each value keeps the order
/// the peer returned its neighbors in: that order is the peer's own
/// priority ranking of its connections, and both the connectivity ranking
/// and the weighted export derive meaning from it.
///
/// The map is built once per crawl and treated as immutable afterwards;
/// consumers take it by reference and never mutate it. Iteration is in
/// address order, which keeps rendered output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    peers: BTreeMap<PeerAddress, Vec<PeerAddress>>,
}

impl AdjacencyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        AdjacencyMap::default()
    }

    /// Number of crawled peers in the map.
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    /// Whether the map holds no peers at all.
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    /// Whether a peer was visited by the crawl.
    pub fn contains(&self, peer: &PeerAddress) -> bool {
        self.peers.contains_key(peer)
    }

    /// Record a visited peer together with its reported neighbor list.
    pub fn insert(&mut self, peer: PeerAddress, neighbors: Vec<PeerAddress>) {
        self.peers.insert(peer, neighbors);
    }

    /// The neighbor list a peer reported, if the peer was visited.
    pub fn neighbors(&self, peer: &PeerAddress) -> Option<&[PeerAddress]> {
        self.peers.get(peer).map(Vec::as_slice)
    }

    /// Iterate the crawled peers, in address order.
    pub fn peers(&self) -> impl Iterator<Item = &PeerAddress> {
        self.peers.keys()
    }

    /// Iterate peers with their reported neighbor lists, in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&PeerAddress, &[PeerAddress])> {
        self.peers
            .iter()
            .map(|(peer, neighbors)| (peer, neighbors.as_slice()))
    }

    /// A peer's neighbor list restricted to peers in the map, in reported
    /// order.
    ///
    /// Ranking and export only ever consume the graph closed over the
    /// crawled peer set: a neighbor reference to a peer outside the crawl
    /// is not a graph node and is dropped here.
    pub fn closed_neighbors<'a>(
        &'a self,
        peer: &PeerAddress,
    ) -> impl Iterator<Item = &'a PeerAddress> + 'a {
        self.peers
            .get(peer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
            .iter()
            .filter(move |neighbor| self.peers.contains_key(*neighbor))
    }
}

impl FromIterator<(PeerAddress, Vec<PeerAddress>)> for AdjacencyMap {
    fn from_iter<I: IntoIterator<Item = (PeerAddress, Vec<PeerAddress>)>>(iter: I) -> Self {
        AdjacencyMap {
            peers: iter.into_iter().collect(),
        }
    }
}
