//! Orbit camera: drag to rotate around the globe, scroll to zoom.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_SENSITIVITY: f32 = 0.25;
const MIN_DISTANCE: f32 = 2.6;
const MAX_DISTANCE: f32 = 12.0;
const MAX_PITCH: f32 = 1.54;

/// Spherical camera state around the globe center.
#[derive(Resource)]
pub struct OrbitState {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 5.0,
        }
    }
}

pub fn orbit_camera_plugin(app: &mut App) {
    app.init_resource::<OrbitState>()
        .add_systems(Update, orbit_camera_system);
}

fn orbit_camera_system(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut state: ResMut<OrbitState>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    let mut changed = false;

    if buttons.pressed(MouseButton::Left) {
        for event in motion.read() {
            state.yaw -= event.delta.x * ROTATE_SENSITIVITY;
            state.pitch = (state.pitch - event.delta.y * ROTATE_SENSITIVITY)
                .clamp(-MAX_PITCH, MAX_PITCH);
            changed = true;
        }
    } else {
        motion.clear();
    }

    for event in wheel.read() {
        state.distance =
            (state.distance - event.y * ZOOM_SENSITIVITY).clamp(MIN_DISTANCE, MAX_DISTANCE);
        changed = true;
    }

    if !changed {
        return;
    }

    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    let rotation = Quat::from_euler(EulerRot::YXZ, state.yaw, state.pitch, 0.0);
    transform.translation = rotation * Vec3::new(0.0, 0.0, state.distance);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
