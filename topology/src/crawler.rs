//! Breadth-first discovery of the reachable peer set.

use crate::graph::AdjacencyMap;
use crate::liveness::filter_live;
use log::{debug, info};
use peer_atlas_client::{ClientError, PeerAddress, PeerClient};
use std::collections::{HashSet, VecDeque};

/// A crawler for peer-to-peer network topology.
///
/// The crawler drives a [`PeerClient`] through the network's
/// neighbor-listing API, starting from a set of seed addresses, and
/// records each visited peer's reported neighbor list in an
/// [`AdjacencyMap`].
///
/// Probes run strictly sequentially: one unresponsive peer stalls the
/// whole pass, and no timeout is imposed at this layer. Crawl cost is one
/// round trip per reachable peer.
#[derive(Debug, Clone)]
pub struct Crawler<C> {
    client: C,
}

impl<C: PeerClient> Crawler<C> {
    /// Create a crawler over the given client.
    pub fn new(client: C) -> Self {
        Crawler { client }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Discover every peer reachable from the seeds.
    ///
    /// Maintains a FIFO frontier and a seen-set so each peer is queried
    /// exactly once; the seen-set guard means the crawl terminates on any
    /// finite graph, cycles and self-loops included. Empty seeds yield an
    /// empty map.
    ///
    /// # Errors
    ///
    /// A failed neighbor query aborts the whole crawl; there is no
    /// partial-success mode at this layer. When unreachable peers are
    /// expected, narrow the seeds through liveness filtering first, or
    /// use [`Crawler::discover_live`].
    pub async fn discover(
        &self,
        seeds: impl IntoIterator<Item = PeerAddress>,
    ) -> Result<AdjacencyMap, ClientError> {
        let mut visited = AdjacencyMap::new();
        let mut frontier: VecDeque<PeerAddress> = VecDeque::new();
        let mut seen: HashSet<PeerAddress> = HashSet::new();

        for seed in seeds {
            if seen.insert(seed.clone()) {
                frontier.push_back(seed);
            }
        }

        while let Some(peer) = frontier.pop_front() {
            let neighbors = self.client.get_peers(&peer).await?;
            debug!(
                "{peer} reported {} neighbors ({} visited, {} queued)",
                neighbors.len(),
                visited.len(),
                frontier.len()
            );

            for neighbor in &neighbors {
                // Seen covers both visited and queued peers, so nothing
                // is ever re-queued.
                if seen.insert(neighbor.clone()) {
                    frontier.push_back(neighbor.clone());
                }
            }

            visited.insert(peer, neighbors);
        }

        info!("Discovered {} peers", visited.len());
        Ok(visited)
    }

    /// Discover starting from only the currently live seeds.
    ///
    /// Live-snapshot variant of [`Crawler::discover`]: seeds that fail a
    /// liveness probe are dropped before the crawl begins, so known-dead
    /// entry points cannot abort the pass.
    pub async fn discover_live(
        &self,
        seeds: &[PeerAddress],
    ) -> Result<AdjacencyMap, ClientError> {
        let live = filter_live(&self.client, seeds).await;
        info!("{} of {} seeds live", live.len(), seeds.len());
        self.discover(live).await
    }
}
