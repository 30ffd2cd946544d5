//! Latency topology visualizer — exchange servers, cloud regions, and live
//! latency connections on a 3D globe.
//!
//! Library root: data, SDK builder, and config modules.

mod camera;
pub mod config;
pub mod data;
pub mod geo;
pub mod picking;
pub mod render;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::{orbit_camera_plugin, OrbitState};
pub use data::mock::MockFeed;
pub use data::{
    init_feed_channel, init_fixture_channel, CloudProvider, CloudRegion, ExchangeServer,
    FeedConfig, LatencyChannel, LatencyEdge, LatencyFeed, LatencySnapshot, ProviderPlacement,
};
pub use render::{RendererResource, SpheresAndLinesRenderer};
pub use scene::{
    draw_connections, ingest_latency, latency_color, provider_color, replace_connections,
    setup_scene, spawn_markers, spawn_region_rings, ConnectionLine, Globe, RegionRing,
    ServerCatalog, ServerMarker,
};
pub use ui::{HudState, SelectedPair, TimeRange};
