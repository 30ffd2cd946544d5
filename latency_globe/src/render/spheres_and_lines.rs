use bevy::prelude::*;

use crate::data::{CloudProvider, CloudRegion, ExchangeServer, LatencyEdge};
use crate::geo;
use crate::render::GlobeRenderer;
use crate::scene::materials;
use crate::scene::{ConnectionLine, RegionRing, ServerMarker};

#[derive(Clone, Debug)]
pub struct MarkerSettings {
    pub radius: f32,
    /// Height of the lowest marker above the globe surface.
    pub altitude: f64,
    /// Extra radius per provider index, so co-located providers stack
    /// outward instead of z-fighting.
    pub provider_offset_step: f64,
}

#[derive(Clone, Debug)]
pub struct RingSettings {
    /// Ring radius in the tangent plane.
    pub radius: f32,
    pub thickness: f32,
    /// Height of the ring plane above the globe surface.
    pub altitude: f64,
}

#[derive(Clone, Debug)]
pub struct SpheresAndLinesSettings {
    pub globe_radius: f64,
    pub marker: MarkerSettings,
    pub ring: RingSettings,
}

impl Default for SpheresAndLinesSettings {
    fn default() -> Self {
        Self {
            globe_radius: 2.0,
            marker: MarkerSettings {
                radius: 0.05,
                altitude: 0.05,
                provider_offset_step: 0.07,
            },
            ring: RingSettings {
                radius: 0.12,
                thickness: 0.01,
                altitude: 0.1,
            },
        }
    }
}

/// Default renderer: sphere markers stacked by provider, torus region rings
/// laid in the tangent plane, connections as straight chords drawn with
/// gizmos from their components.
#[derive(Default)]
pub struct SpheresAndLinesRenderer {
    pub settings: SpheresAndLinesSettings,
}

impl SpheresAndLinesRenderer {
    fn marker_radius_at(&self, provider_index: usize) -> f64 {
        self.settings.globe_radius
            + self.settings.marker.altitude
            + self.settings.marker.provider_offset_step * provider_index as f64
    }
}

impl GlobeRenderer for SpheresAndLinesRenderer {
    fn endpoint_position(&self, server: &ExchangeServer, provider: CloudProvider) -> Option<Vec3> {
        let index = server.provider_index(provider)?;
        Some(geo::lat_lng_to_vec3(
            server.lat,
            server.lng,
            self.marker_radius_at(index),
        ))
    }

    fn spawn_marker(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials_res: &mut ResMut<Assets<StandardMaterial>>,
        server: &ExchangeServer,
        provider_index: usize,
    ) {
        let placement = &server.providers[provider_index];
        let position = geo::lat_lng_to_vec3(
            server.lat,
            server.lng,
            self.marker_radius_at(provider_index),
        );

        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(self.settings.marker.radius))),
            MeshMaterial3d(materials::provider_marker_material(
                materials_res,
                placement.provider,
            )),
            Transform::from_translation(position),
            Visibility::Visible,
            ServerMarker {
                server_id: server.id.clone(),
                server_name: server.name.clone(),
                provider: placement.provider,
                region: placement.region.clone(),
                world_position: position,
                pick_radius: self.settings.marker.radius,
            },
        ));
    }

    fn spawn_region(
        &self,
        commands: &mut Commands,
        meshes: &mut ResMut<Assets<Mesh>>,
        materials_res: &mut ResMut<Assets<StandardMaterial>>,
        region: &CloudRegion,
    ) {
        let position = geo::lat_lng_to_vec3(
            region.lat,
            region.lng,
            self.settings.globe_radius + self.settings.ring.altitude,
        );

        commands.spawn((
            Mesh3d(meshes.add(Torus {
                minor_radius: self.settings.ring.thickness,
                major_radius: self.settings.ring.radius,
            })),
            MeshMaterial3d(materials::region_ring_material(materials_res)),
            Transform::from_translation(position).with_rotation(geo::tangent_rotation(position)),
            Visibility::Visible,
            RegionRing {
                region_id: region.id.clone(),
                provider: region.provider,
            },
        ));
    }

    fn spawn_connection(
        &self,
        commands: &mut Commands,
        edge: &LatencyEdge,
        from_pos: Vec3,
        to_pos: Vec3,
    ) {
        commands.spawn(ConnectionLine {
            from_id: edge.from.clone(),
            from_provider: edge.from_provider,
            to_id: edge.to.clone(),
            to_provider: edge.to_provider,
            latency_ms: edge.latency_ms,
            observed_at_ms: edge.timestamp_ms,
            from_pos,
            to_pos,
            color: materials::latency_color(edge.latency_ms),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::exchange_servers;

    #[test]
    fn endpoint_positions_stack_outward_by_provider_index() {
        let renderer = SpheresAndLinesRenderer::default();
        let server = &exchange_servers()[0];

        let aws = renderer
            .endpoint_position(server, CloudProvider::Aws)
            .unwrap();
        let gcp = renderer
            .endpoint_position(server, CloudProvider::Gcp)
            .unwrap();
        let azure = renderer
            .endpoint_position(server, CloudProvider::Azure)
            .unwrap();

        assert!((aws.length() - 2.05).abs() < 1e-5);
        assert!((gcp.length() - 2.12).abs() < 1e-5);
        assert!((azure.length() - 2.19).abs() < 1e-5);

        // All three sit on the same radial line.
        assert!((aws.normalize() - azure.normalize()).length() < 1e-5);
    }

    #[test]
    fn unknown_provider_has_no_endpoint() {
        let renderer = SpheresAndLinesRenderer::default();
        let mut server = exchange_servers()[0].clone();
        server.providers.retain(|p| p.provider != CloudProvider::Gcp);

        assert!(renderer
            .endpoint_position(&server, CloudProvider::Gcp)
            .is_none());
    }
}
