//! Globe, camera, lights, and the server catalog resource.

use bevy::prelude::*;

use crate::data::{catalog, CloudRegion, ExchangeServer};
use crate::scene::materials;

/// The session's immutable reference data. Every marker and every resolved
/// connection endpoint points back into this catalog by id.
#[derive(Resource)]
pub struct ServerCatalog {
    pub servers: Vec<ExchangeServer>,
    pub regions: Vec<CloudRegion>,
}

impl ServerCatalog {
    pub fn builtin() -> Self {
        Self {
            servers: catalog::exchange_servers(),
            regions: catalog::cloud_regions(),
        }
    }

    pub fn server(&self, id: &str) -> Option<&ExchangeServer> {
        self.servers.iter().find(|s| s.id == id)
    }
}

/// Radius of the globe backdrop sphere.
pub const GLOBE_RADIUS: f32 = 2.0;

/// Marker for the globe backdrop entity.
#[derive(Component)]
pub struct Globe;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials_res: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0., 0., 5.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight::default(),
        Transform::from_xyz(5., 3., 5.).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 0.5,
    });

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(GLOBE_RADIUS))),
        MeshMaterial3d(materials::globe_material(&mut materials_res)),
        Transform::default(),
        Globe,
    ));
}
