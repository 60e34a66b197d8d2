//! End-to-end survey of an in-memory demonstration network.
//!
//! Wires the whole pipeline together: liveness-filtered discovery,
//! connectivity ranking, both graph exports, and a clock-skew sweep.
//! The network itself is a static in-memory stand-in for a real
//! transport.

use clap::Parser;
use log::LevelFilter;
use peer_atlas_topology::{
    estimate_all, rank, ClientError, Crawler, GephiExporter, GraphExporter, Liveness, PeerAddress,
    PeerClient, PeerTime,
};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to write export artifacts into.
    #[arg(short, long, default_value = "out")]
    output_dir: PathBuf,

    /// Log level.
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

/// Static in-memory network standing in for a live peer transport.
struct StaticNetwork {
    neighbors: HashMap<PeerAddress, Vec<PeerAddress>>,
    offline: HashSet<PeerAddress>,
    skews: HashMap<PeerAddress, i64>,
}

impl PeerClient for StaticNetwork {
    async fn get_peers(&self, peer: &PeerAddress) -> Result<Vec<PeerAddress>, ClientError> {
        self.neighbors
            .get(peer)
            .cloned()
            .ok_or_else(|| ClientError::Unreachable(peer.clone()))
    }

    async fn get_info(&self, peer: &PeerAddress) -> Liveness {
        if self.offline.contains(peer) || !self.neighbors.contains_key(peer) {
            Liveness::Unavailable
        } else {
            Liveness::Alive
        }
    }

    async fn get_time(&self, peer: &PeerAddress) -> Result<PeerTime, ClientError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or(0);

        match self.skews.get(peer) {
            Some(skew) => Ok(PeerTime::Known(now + skew)),
            None => Ok(PeerTime::Unknown),
        }
    }
}

fn addr(s: &str) -> PeerAddress {
    s.parse().expect("valid demo address")
}

/// A small network with a cycle, a dead seed, and a couple of skewed
/// clocks.
fn demo_network() -> (StaticNetwork, Vec<PeerAddress>) {
    let mut neighbors = HashMap::new();
    neighbors.insert(
        addr("alpha.demo:9000"),
        vec![addr("beta.demo:9000"), addr("gamma.demo:9000")],
    );
    neighbors.insert(
        addr("beta.demo:9000"),
        vec![addr("gamma.demo:9000"), addr("alpha.demo:9000")],
    );
    neighbors.insert(
        addr("gamma.demo:9000"),
        vec![addr("alpha.demo:9000"), addr("delta.demo:9000")],
    );
    neighbors.insert(addr("delta.demo:9000"), vec![addr("alpha.demo:9000")]);

    let mut skews = HashMap::new();
    skews.insert(addr("alpha.demo:9000"), 0);
    skews.insert(addr("beta.demo:9000"), 120);
    skews.insert(addr("gamma.demo:9000"), -45);

    let network = StaticNetwork {
        neighbors,
        offline: HashSet::from([addr("stale.demo:9000")]),
        skews,
    };
    let seeds = vec![addr("alpha.demo:9000"), addr("stale.demo:9000")];

    (network, seeds)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    // Configure fern logger
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} - {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()?;

    log::info!("SURVEYING THE DEMO NETWORK");

    let (network, seeds) = demo_network();
    let crawler = Crawler::new(network);

    let topology = crawler.discover_live(&seeds).await?;

    for peer_rank in rank(&topology) {
        log::info!("Ranked: {peer_rank}");
    }

    std::fs::create_dir_all(&args.output_dir)?;
    GraphExporter::new(&args.output_dir).export(&topology)?;
    GephiExporter::new(&args.output_dir).export(&topology)?;

    let peers: Vec<PeerAddress> = topology.peers().cloned().collect();
    for (peer, skew) in estimate_all(crawler.client(), &peers).await? {
        log::info!("Clock skew for {peer}: {skew}");
    }

    Ok(())
}
