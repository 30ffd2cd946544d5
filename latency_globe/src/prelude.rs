//! Minimal prelude for SDK consumers.

pub use crate::config::{feed_config, fixture_path};
pub use crate::data::{
    CloudProvider, CloudRegion, ExchangeServer, FeedConfig, LatencyEdge, LatencyFeed,
    LatencySnapshot,
};
pub use crate::render::{GlobeRenderer, SpheresAndLinesRenderer};
pub use crate::sdk::GlobeBuilder;
