//! Shared color policy and material helpers for markers, rings, and lines.

use bevy::prelude::*;

use crate::data::CloudProvider;

/// Provider color coding: AWS red, GCP green, Azure blue.
pub fn provider_color(provider: CloudProvider) -> Color {
    match provider {
        CloudProvider::Aws => Color::srgb(1.0, 0.0, 0.0),
        CloudProvider::Gcp => Color::srgb(0.0, 1.0, 0.0),
        CloudProvider::Azure => Color::srgb(0.0, 0.0, 1.0),
    }
}

/// Latency color coding: below 50ms green, below 100ms yellow, else red.
pub fn latency_color(latency_ms: f64) -> Color {
    if latency_ms < 50.0 {
        Color::srgb(0.0, 1.0, 0.0)
    } else if latency_ms < 100.0 {
        Color::srgb(1.0, 1.0, 0.0)
    } else {
        Color::srgb(1.0, 0.0, 0.0)
    }
}

pub fn provider_marker_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
    provider: CloudProvider,
) -> Handle<StandardMaterial> {
    let color = provider_color(provider);
    materials.add(StandardMaterial {
        base_color: color,
        emissive: color.to_linear() * 0.4,
        unlit: false,
        ..default()
    })
}

pub fn region_ring_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb(0.53, 0.53, 0.53),
        unlit: true,
        ..default()
    })
}

pub fn globe_material(
    materials: &mut ResMut<Assets<StandardMaterial>>,
) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: Color::srgb(0.08, 0.16, 0.28),
        perceptual_roughness: 0.9,
        ..default()
    })
}
