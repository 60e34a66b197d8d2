//! Interval-bounded clock-skew estimation.

use log::debug;
use peer_atlas_client::{ClientError, PeerAddress, PeerClient, PeerTime};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Estimated offset of a peer's clock relative to the local clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkewEstimate {
    /// The peer did not report a usable time.
    Unknown,
    /// Offset in seconds beyond what round-trip latency could explain.
    /// Negative means the peer's clock is behind the local clock; zero
    /// means the report was indistinguishable from the local clock.
    Offset(i64),
}

impl fmt::Display for SkewEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkewEstimate::Unknown => write!(f, "unknown"),
            SkewEstimate::Offset(secs) => write!(f, "{secs}s"),
        }
    }
}

/// Judge a reported peer time against the probe's local time window.
///
/// A report inside `[start, end]` could be explained by network latency
/// alone, so only readings outside the window count as skew, measured
/// from the nearer edge.
fn bounded_offset(start: i64, end: i64, peer_time: i64) -> i64 {
    if peer_time < start {
        peer_time - start
    } else if peer_time > end {
        peer_time - end
    } else {
        0
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0)
}

/// Estimate a peer's clock skew from a single timed probe.
///
/// The local clock is read immediately before and after the time query
/// and the peer's report is judged against that window. The result is a
/// conservative bound on the offset, not a point estimate: it reports
/// only what round-trip uncertainty cannot account for.
///
/// # Errors
///
/// Propagates transport failure from the time probe. A peer that answers
/// but does not know its time yields [`SkewEstimate::Unknown`], which is
/// a value rather than an error.
pub async fn estimate<C: PeerClient>(
    client: &C,
    peer: &PeerAddress,
) -> Result<SkewEstimate, ClientError> {
    let start = unix_now();
    let reported = client.get_time(peer).await?;
    let end = unix_now();

    let estimate = match reported {
        PeerTime::Unknown => SkewEstimate::Unknown,
        PeerTime::Known(peer_time) => SkewEstimate::Offset(bounded_offset(start, end, peer_time)),
    };
    debug!("{peer} clock skew: {estimate}");

    Ok(estimate)
}

/// Estimate clock skew for every peer in a set, one probe at a time.
///
/// # Errors
///
/// The sweep aborts on the first hard probe failure; run the peers
/// through liveness filtering first when unreachable members are
/// expected.
pub async fn estimate_all<C: PeerClient>(
    client: &C,
    peers: &[PeerAddress],
) -> Result<Vec<(PeerAddress, SkewEstimate)>, ClientError> {
    let mut estimates = Vec::with_capacity(peers.len());

    for peer in peers {
        estimates.push((peer.clone(), estimate(client, peer).await?));
    }

    Ok(estimates)
}
