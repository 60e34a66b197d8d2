//! Connectivity ranking derived from self-reported neighbor order.

use crate::graph::AdjacencyMap;
use peer_atlas_client::PeerAddress;
use std::collections::HashMap;
use std::fmt;

/// A peer's prominence across the network's neighbor lists.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerRank {
    /// The ranked peer.
    pub address: PeerAddress,
    /// Mean 1-based position at which the peer appears across other
    /// peers' neighbor lists. Lower means the network as a whole lists
    /// the peer earlier, i.e. more prominently.
    pub average_position: f64,
    /// How many neighbor lists reference the peer.
    pub occurrences: usize,
}

impl fmt::Display for PeerRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (average position {:.2} across {} references)",
            self.address, self.average_position, self.occurrences
        )
    }
}

/// Rank peers by how early they appear in other peers' neighbor lists.
///
/// Every neighbor list is first closed over the map's key set, so only
/// crawled peers are scored. Each neighbor then contributes its 1-based
/// list position to a running sum; a peer's score is the mean of those
/// positions. Peers referenced by no list are omitted entirely: they are
/// known but never referenced, and have no meaningful position.
///
/// The result is ascending by average position. Peers with equal averages
/// are ordered by address, which makes the ranking deterministic.
pub fn rank(adjacency: &AdjacencyMap) -> Vec<PeerRank> {
    // Per referenced peer: running position sum and reference count.
    let mut totals: HashMap<&PeerAddress, (usize, usize)> = HashMap::new();

    for (host, _) in adjacency.iter() {
        for (index, neighbor) in adjacency.closed_neighbors(host).enumerate() {
            let entry = totals.entry(neighbor).or_insert((0, 0));
            entry.0 += index + 1;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<PeerRank> = totals
        .into_iter()
        .map(|(address, (position_sum, occurrences))| PeerRank {
            address: address.clone(),
            average_position: position_sum as f64 / occurrences as f64,
            occurrences,
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.average_position
            .total_cmp(&b.average_position)
            .then_with(|| a.address.cmp(&b.address))
    });

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::addr;

    #[test]
    fn test_rank_averages_positions_across_lists() {
        // A lists [B, C]; B lists [C]; C lists nothing.
        let map: AdjacencyMap = [
            (addr("a:1"), vec![addr("b:1"), addr("c:1")]),
            (addr("b:1"), vec![addr("c:1")]),
            (addr("c:1"), vec![]),
        ]
        .into_iter()
        .collect();

        let ranked = rank(&map);

        // B: position 1 once. C: positions 2 and 1, average 1.5.
        // A is never referenced and is excluded.
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].address, addr("b:1"));
        assert_eq!(ranked[0].average_position, 1.0);
        assert_eq!(ranked[0].occurrences, 1);
        assert_eq!(ranked[1].address, addr("c:1"));
        assert_eq!(ranked[1].average_position, 1.5);
        assert_eq!(ranked[1].occurrences, 2);
    }

    #[test]
    fn test_rank_scores_only_crawled_peers() {
        // The reference to x:1 is outside the crawled set, so b:1 sits at
        // closed position 1 for both hosts.
        let map: AdjacencyMap = [
            (addr("a:1"), vec![addr("x:1"), addr("b:1")]),
            (addr("b:1"), vec![]),
            (addr("c:1"), vec![addr("b:1")]),
        ]
        .into_iter()
        .collect();

        let ranked = rank(&map);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].address, addr("b:1"));
        assert_eq!(ranked[0].average_position, 1.0);
        assert_eq!(ranked[0].occurrences, 2);
    }

    #[test]
    fn test_rank_ties_break_by_address() {
        let map: AdjacencyMap = [
            (addr("a:1"), vec![addr("c:1")]),
            (addr("b:1"), vec![addr("d:1")]),
            (addr("c:1"), vec![]),
            (addr("d:1"), vec![]),
        ]
        .into_iter()
        .collect();

        let ranked = rank(&map);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].address, addr("c:1"));
        assert_eq!(ranked[1].address, addr("d:1"));
    }

    #[test]
    fn test_rank_empty_map() {
        assert!(rank(&AdjacencyMap::new()).is_empty());
    }
}
