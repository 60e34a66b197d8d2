//! Topology discovery and structural diagnostics for peer-to-peer networks.
//!
//! The [`Crawler`] walks a network's peer-listing API to build an
//! [`AdjacencyMap`] of who advertises whom; [`rank`] turns that map into a
//! connectivity ranking, the exporters render it for graph tooling, and
//! [`estimate`] measures per-peer clock skew. The tooling observes the
//! network, it does not participate in it.

mod crawler;
mod export;
mod graph;
mod liveness;
mod rank;
mod skew;
#[cfg(test)]
pub(crate) mod testing;

pub use crawler::Crawler;
pub use export::{ExportError, GephiExporter, GraphExporter};
pub use graph::AdjacencyMap;
pub use liveness::filter_live;
pub use rank::{rank, PeerRank};
pub use skew::{estimate, estimate_all, SkewEstimate};

// Re-exports.
pub use peer_atlas_client::{
    AddressParseError, ClientError, Liveness, PeerAddress, PeerClient, PeerTime,
};
