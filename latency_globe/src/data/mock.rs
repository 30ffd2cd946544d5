//! Mock latency feed: dedicated thread producing full edge-set snapshots.
//!
//! Each tick synthesizes one `LatencySnapshot` over the server catalog with
//! randomized provider endpoints and latencies. A configurable outage rate
//! skips ticks entirely, which is how the "previous connections survive a
//! feed gap" behavior gets exercised in a live run.

use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use crossbeam_channel::{Receiver, Sender};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::model::{ExchangeServer, LatencyEdge, LatencySnapshot};
use crate::data::{FeedConfig, LatencyFeed};

/// Mock feed over the built-in catalog.
pub struct MockFeed;

impl LatencyFeed for MockFeed {
    fn spawn(config: FeedConfig) -> Receiver<LatencySnapshot> {
        let (tx, rx) = crossbeam_channel::bounded(16);
        thread::spawn(move || feed_loop(config, tx));
        rx
    }
}

fn feed_loop(config: FeedConfig, tx: Sender<LatencySnapshot>) {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    loop {
        if config.outage_rate > 0.0 && rng.gen_bool(config.outage_rate.clamp(0.0, 1.0)) {
            eprintln!("meridian: simulated feed outage, keeping previous sample");
        } else {
            let snapshot = synthesize_snapshot(&config.servers, &mut rng, now_ms());
            if tx.send(snapshot).is_err() {
                // Receiver dropped: the view was torn down, stop ticking.
                return;
            }
        }
        thread::sleep(config.interval);
    }
}

/// One randomized edge per ordered pair of distinct servers, with provider
/// endpoints drawn from each server's own placement list. Every edge this
/// produces resolves against the catalog by construction.
pub fn synthesize_snapshot(
    servers: &[ExchangeServer],
    rng: &mut StdRng,
    timestamp_ms: u64,
) -> LatencySnapshot {
    let mut edges = Vec::new();
    for from in servers {
        for to in servers {
            if from.id == to.id {
                continue;
            }
            let from_provider = from.providers[rng.gen_range(0..from.providers.len())].provider;
            let to_provider = to.providers[rng.gen_range(0..to.providers.len())].provider;
            edges.push(LatencyEdge {
                from: from.id.clone(),
                from_provider,
                to: to.id.clone(),
                to_provider,
                latency_ms: rng.gen_range(20.0..160.0),
                timestamp_ms,
            });
        }
    }
    LatencySnapshot { edges }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
