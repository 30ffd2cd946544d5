pub mod catalog;
mod channel;
pub mod mock;
mod model;

use std::time::Duration;

use crossbeam_channel::Receiver;

pub use channel::{init_feed_channel, init_fixture_channel, LatencyChannel};
pub use model::{
    CloudProvider, CloudRegion, ExchangeServer, LatencyEdge, LatencySnapshot,
    ProviderPlacement,
};

/// Configuration for spawning a latency feed.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    /// Servers the feed measures between. Edges it emits resolve here.
    pub servers: Vec<ExchangeServer>,
    /// Tick interval. Each tick delivers one full snapshot.
    pub interval: Duration,
    /// Probability in [0, 1] that a tick is skipped (simulated outage).
    pub outage_rate: f64,
    /// RNG seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            servers: catalog::exchange_servers(),
            interval: Duration::from_millis(5000),
            outage_rate: 0.0,
            seed: None,
        }
    }
}

/// Interface for latency feed implementations.
pub trait LatencyFeed: Send + 'static {
    fn spawn(config: FeedConfig) -> Receiver<LatencySnapshot>;
}
