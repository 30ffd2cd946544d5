//! Pointer picking: hover and selection events over server markers.
//!
//! Uses manual ray-sphere intersection against `ServerMarker` data instead of
//! mesh picking, which avoids input absorption conflicts with bevy_egui and
//! keeps hit-testing independent of render-side geometry. Region rings carry
//! no `ServerMarker`, so they are structurally excluded from every pick.

use bevy::prelude::*;
use bevy_egui::EguiContexts;

use crate::data::CloudProvider;
use crate::scene::ServerMarker;

/// The marker currently under the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    pub entity: Entity,
    pub server_id: String,
    pub server_name: String,
    pub provider: CloudProvider,
}

/// Emitted when the hovered marker changes; `None` clears the hover.
#[derive(Event, Clone, Debug)]
pub struct HoverChanged(pub Option<HoverTarget>);

/// Emitted on click. Both ends start as the clicked (server, provider);
/// the pair stays self-to-self until the user designates a second node.
#[derive(Event, Clone, Debug, PartialEq)]
pub struct PairSelected {
    pub from: String,
    pub from_provider: CloudProvider,
    pub to: String,
    pub to_provider: CloudProvider,
}

/// Last hover target, kept to emit `HoverChanged` only on transitions.
#[derive(Resource, Default)]
pub struct HoverState {
    pub current: Option<HoverTarget>,
}

pub fn pick_plugin(app: &mut App) {
    app.init_resource::<HoverState>()
        .add_event::<HoverChanged>()
        .add_event::<PairSelected>()
        .add_systems(Update, (hover_raycast_system, click_raycast_system));
}

fn hover_raycast_system(
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    markers: Query<(Entity, &ServerMarker)>,
    mut hover: ResMut<HoverState>,
    mut events: EventWriter<HoverChanged>,
    mut last_cursor: Local<Option<Vec2>>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();
    if cursor == *last_cursor {
        return;
    }
    *last_cursor = cursor;

    let target = cursor
        .filter(|_| !contexts.ctx_mut().is_pointer_over_area())
        .and_then(|pos| {
            let (camera, cam_transform) = cameras.get_single().ok()?;
            let ray = camera.viewport_to_world(cam_transform, pos).ok()?;
            pick_nearest(ray.origin, *ray.direction, markers.iter())
        })
        .map(|(entity, marker, _)| HoverTarget {
            entity,
            server_id: marker.server_id.clone(),
            server_name: marker.server_name.clone(),
            provider: marker.provider,
        });

    if target != hover.current {
        hover.current = target.clone();
        events.send(HoverChanged(target));
    }
}

fn click_raycast_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut contexts: EguiContexts,
    markers: Query<(Entity, &ServerMarker)>,
    mut selections: EventWriter<PairSelected>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    if contexts.ctx_mut().is_pointer_over_area() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, cam_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_transform, cursor) else {
        return;
    };

    if let Some((_, marker, _)) = pick_nearest(ray.origin, *ray.direction, markers.iter()) {
        selections.send(PairSelected {
            from: marker.server_id.clone(),
            from_provider: marker.provider,
            to: marker.server_id.clone(),
            to_provider: marker.provider,
        });
    }
}

/// Nearest marker hit by the ray, or `None`. Only markers are candidates;
/// nothing else in the scene is pickable.
pub fn pick_nearest<'a>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    markers: impl IntoIterator<Item = (Entity, &'a ServerMarker)>,
) -> Option<(Entity, &'a ServerMarker, f32)> {
    let mut best: Option<(Entity, &ServerMarker, f32)> = None;
    for (entity, marker) in markers {
        if let Some(dist) =
            ray_sphere_intersect(ray_origin, ray_dir, marker.world_position, marker.pick_radius)
        {
            if best.is_none_or(|(_, _, d)| dist < d) {
                best = Some((entity, marker, dist));
            }
        }
    }
    best
}

fn ray_sphere_intersect(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let a = dir.dot(dir);
    let half_b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t_near = (-half_b - sqrt_d) / a;
    if t_near > 0.0 {
        return Some(t_near);
    }
    let t_far = (-half_b + sqrt_d) / a;
    (t_far > 0.0).then_some(t_far)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(id: &str, provider: CloudProvider, position: Vec3) -> ServerMarker {
        ServerMarker {
            server_id: id.into(),
            server_name: id.into(),
            provider,
            region: "r".into(),
            world_position: position,
            pick_radius: 0.05,
        }
    }

    #[test]
    fn ray_hits_sphere_at_entry_distance() {
        let dist = ray_sphere_intersect(Vec3::new(0., 0., 5.), Vec3::NEG_Z, Vec3::ZERO, 1.0)
            .expect("hit");
        assert!((dist - 4.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let hit = ray_sphere_intersect(Vec3::new(0., 0., 5.), Vec3::NEG_Z, Vec3::new(3., 0., 0.), 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn sphere_behind_the_origin_is_not_hit() {
        let hit = ray_sphere_intersect(Vec3::new(0., 0., 5.), Vec3::Z, Vec3::ZERO, 1.0);
        assert!(hit.is_none());
    }

    #[test]
    fn nearest_of_two_markers_wins() {
        let near = marker("near", CloudProvider::Aws, Vec3::new(0., 0., 2.0));
        let far = marker("far", CloudProvider::Gcp, Vec3::new(0., 0., -2.0));
        let entries = [
            (Entity::from_raw(1), &near),
            (Entity::from_raw(2), &far),
        ];

        let (_, hit, _) =
            pick_nearest(Vec3::new(0., 0., 5.), Vec3::NEG_Z, entries).expect("hit");
        assert_eq!(hit.server_id, "near");
    }

    #[test]
    fn empty_pick_space_returns_none() {
        let hit = pick_nearest(Vec3::new(0., 0., 5.), Vec3::NEG_Z, []);
        assert!(hit.is_none());
    }

    #[test]
    fn pick_carries_the_specific_provider_of_the_hit_marker() {
        // Two markers of the same server stacked radially; the outer (closer
        // to a camera outside the globe) must win with its own provider.
        let inner = marker("binance-us", CloudProvider::Aws, Vec3::new(0., 0., 2.05));
        let outer = marker("binance-us", CloudProvider::Azure, Vec3::new(0., 0., 2.19));
        let entries = [
            (Entity::from_raw(1), &inner),
            (Entity::from_raw(2), &outer),
        ];

        let (_, hit, _) =
            pick_nearest(Vec3::new(0., 0., 5.), Vec3::NEG_Z, entries).expect("hit");
        assert_eq!(hit.provider, CloudProvider::Azure);
    }
}
