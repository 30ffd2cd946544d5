//! Server markers: one pickable sphere per (server, provider) pairing.

use bevy::prelude::*;

use crate::data::CloudProvider;
use crate::render::RendererResource;
use crate::scene::globe::ServerCatalog;

/// Marker + backing data for one (server, provider) pairing.
/// `world_position` and `pick_radius` feed the ray picker directly so
/// hit-testing never touches render-side geometry.
#[derive(Component)]
pub struct ServerMarker {
    pub server_id: String,
    pub server_name: String,
    pub provider: CloudProvider,
    pub region: String,
    pub world_position: Vec3,
    pub pick_radius: f32,
}

/// Spawns every marker from the catalog. Startup only: reference data is
/// immutable for the session, so markers are never reconciled.
pub fn spawn_markers(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<ServerCatalog>,
    renderer: Res<RendererResource>,
) {
    for server in &catalog.servers {
        for provider_index in 0..server.providers.len() {
            renderer.0.spawn_marker(
                &mut commands,
                &mut meshes,
                &mut materials,
                server,
                provider_index,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SpheresAndLinesRenderer;

    #[test]
    fn one_marker_per_server_provider_pair() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(ServerCatalog::builtin())
            .insert_resource(RendererResource::new(SpheresAndLinesRenderer::default()))
            .add_systems(Startup, spawn_markers);

        app.update();

        let world = app.world_mut();
        let markers: Vec<&ServerMarker> =
            world.query::<&ServerMarker>().iter(world).collect();

        // 3 servers × 3 providers.
        assert_eq!(markers.len(), 9);

        let catalog = ServerCatalog::builtin();
        for marker in &markers {
            let server = catalog.server(&marker.server_id).expect("backing server");
            assert!(server.provider_index(marker.provider).is_some());
            assert!(marker.pick_radius > 0.0);
        }
    }
}
