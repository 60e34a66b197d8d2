//! Narrowing peer sets to currently responsive members.

use log::debug;
use peer_atlas_client::{Liveness, PeerAddress, PeerClient};

/// Keep only the peers that currently answer a liveness probe.
///
/// Input order is preserved, so filtering an already-live set returns it
/// unchanged. Used both to pre-filter seeds before a live-snapshot crawl
/// and standalone to narrow a known peer set to responsive members.
pub async fn filter_live<C: PeerClient>(client: &C, peers: &[PeerAddress]) -> Vec<PeerAddress> {
    let mut live = Vec::with_capacity(peers.len());

    for peer in peers {
        match client.get_info(peer).await {
            Liveness::Alive => live.push(peer.clone()),
            Liveness::Unavailable => debug!("{peer} unavailable, dropping"),
        }
    }

    live
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{addr, MockPeerClient};

    #[tokio::test]
    async fn test_filter_drops_unavailable_peers() {
        let client = MockPeerClient::new()
            .with_unavailable(addr("b:1"))
            .with_unavailable(addr("d:1"));
        let peers = [addr("a:1"), addr("b:1"), addr("c:1"), addr("d:1")];

        let live = filter_live(&client, &peers).await;

        assert_eq!(live, vec![addr("a:1"), addr("c:1")]);
    }

    #[tokio::test]
    async fn test_filter_is_idempotent_on_live_sets() {
        let client = MockPeerClient::new();
        let peers = [addr("c:1"), addr("a:1"), addr("b:1")];

        let live = filter_live(&client, &peers).await;

        // Same members, same order.
        assert_eq!(live, peers.to_vec());
        assert_eq!(filter_live(&client, &live).await, live);
    }

    #[tokio::test]
    async fn test_filter_empty_input() {
        let client = MockPeerClient::new();
        assert!(filter_live(&client, &[]).await.is_empty());
    }
}
