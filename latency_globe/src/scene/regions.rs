//! Cloud region boundary rings. Non-pickable scenery.

use bevy::prelude::*;

use crate::data::CloudProvider;
use crate::render::RendererResource;
use crate::scene::globe::ServerCatalog;

/// Tag for region boundary entities. Carrying no position on purpose:
/// the picker only queries `ServerMarker`, so rings can never absorb a pick.
#[derive(Component)]
pub struct RegionRing {
    pub region_id: String,
    pub provider: CloudProvider,
}

pub fn spawn_region_rings(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    catalog: Res<ServerCatalog>,
    renderer: Res<RendererResource>,
) {
    for region in &catalog.regions {
        renderer
            .0
            .spawn_region(&mut commands, &mut meshes, &mut materials, region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SpheresAndLinesRenderer;

    #[test]
    fn one_ring_per_region() {
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .insert_resource(ServerCatalog::builtin())
            .insert_resource(RendererResource::new(SpheresAndLinesRenderer::default()))
            .add_systems(Startup, spawn_region_rings);

        app.update();

        let world = app.world_mut();
        let rings: Vec<&RegionRing> = world.query::<&RegionRing>().iter(world).collect();
        assert_eq!(rings.len(), 9);

        let catalog = ServerCatalog::builtin();
        for ring in rings {
            assert!(catalog.regions.iter().any(|r| r.id == ring.region_id));
        }
    }
}
