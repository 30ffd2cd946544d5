pub(crate) mod connections;
pub(crate) mod globe;
pub(crate) mod markers;
pub(crate) mod materials;
pub(crate) mod regions;

pub use connections::{draw_connections, ingest_latency, replace_connections, ConnectionLine};
pub use globe::{setup_scene, Globe, ServerCatalog};
pub use markers::{spawn_markers, ServerMarker};
pub use materials::{latency_color, provider_color};
pub use regions::{spawn_region_rings, RegionRing};
