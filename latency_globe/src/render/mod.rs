//! Renderer traits and default implementations.

mod spheres_and_lines;

use bevy::prelude::*;

use crate::data::{CloudProvider, CloudRegion, ExchangeServer, LatencyEdge};

pub use spheres_and_lines::{
    MarkerSettings, RingSettings, SpheresAndLinesRenderer, SpheresAndLinesSettings,
};

/// How catalog entries and latency edges become scene entities.
///
/// The placement policy lives here: `endpoint_position` is the single source
/// of truth for where a (server, provider) pairing sits, so markers and
/// connection endpoints cannot drift apart.
pub trait GlobeRenderer: Send + Sync + 'static {
    fn setup(&self, _app: &mut App) {}

    /// World position for a (server, provider) endpoint, or `None` when the
    /// server has no placement with that provider.
    fn endpoint_position(&self, server: &ExchangeServer, provider: CloudProvider) -> Option<Vec3>;

    /// Spawn the pickable marker for one (server, provider) pairing.
    fn spawn_marker(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
        server: &ExchangeServer,
        provider_index: usize,
    );

    /// Spawn the non-pickable boundary ring for one cloud region.
    fn spawn_region(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials: &mut ResMut<Assets<StandardMaterial>>,
        region: &CloudRegion,
    );

    /// Spawn one connection-line entity for a resolved edge.
    fn spawn_connection(
        &self,
        commands: &mut Commands,
        edge: &LatencyEdge,
        from_pos: Vec3,
        to_pos: Vec3,
    );
}

#[derive(Resource)]
pub struct RendererResource(pub Box<dyn GlobeRenderer>);

impl RendererResource {
    pub fn new(renderer: impl GlobeRenderer) -> Self {
        Self(Box::new(renderer))
    }
}
