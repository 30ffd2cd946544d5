//! Geographic-to-Cartesian projection for the globe.
//!
//! Poles at lat ±90, prime meridian at lng 0, lng -180 mapping to theta 0.
//! Pure math; callers supply in-range coordinates (the catalog is trusted).

use bevy::prelude::*;

/// Projects (lat, lng) in degrees onto a sphere of the given radius.
pub fn lat_lng_to_vec3(lat: f64, lng: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lng + 180.0).to_radians();
    Vec3::new(
        (-radius * phi.sin() * theta.cos()) as f32,
        (radius * phi.cos()) as f32,
        (radius * phi.sin() * theta.sin()) as f32,
    )
}

/// Rotation taking the local +Y axis to the outward surface normal at the
/// given point. Used to lay region rings flat in the tangent plane.
pub fn tangent_rotation(surface_point: Vec3) -> Quat {
    let normal = surface_point.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(Vec3::Y, normal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: Vec3) -> f64 {
        (v.x as f64).hypot(v.y as f64).hypot(v.z as f64)
    }

    #[test]
    fn projected_points_lie_on_the_sphere() {
        let radius = 2.0;
        for lat in (-90..=90).step_by(15) {
            for lng in (-180..=180).step_by(30) {
                let v = lat_lng_to_vec3(lat as f64, lng as f64, radius);
                let err = (norm(v) - radius).abs() / radius;
                assert!(err < 1e-6, "lat={lat} lng={lng} norm={}", norm(v));
            }
        }
    }

    #[test]
    fn poles_are_longitude_independent() {
        let r = 2.0;
        for lng in [-180.0, -45.0, 0.0, 90.0, 179.0] {
            let north = lat_lng_to_vec3(90.0, lng, r);
            assert!(north.x.abs() < 1e-6 && north.z.abs() < 1e-6);
            assert!((north.y - r as f32).abs() < 1e-6);

            let south = lat_lng_to_vec3(-90.0, lng, r);
            assert!(south.x.abs() < 1e-6 && south.z.abs() < 1e-6);
            assert!((south.y + r as f32).abs() < 1e-6);
        }
    }

    #[test]
    fn antimeridian_maps_to_theta_zero() {
        let v = lat_lng_to_vec3(0.0, -180.0, 2.0);
        // theta = 0: sin(theta) = 0 so z = 0; x = -r·cos(0) = -r.
        assert!(v.z.abs() < 1e-6);
        assert!((v.x + 2.0).abs() < 1e-6);
    }

    #[test]
    fn longitude_wraps_after_full_turn() {
        let a = lat_lng_to_vec3(37.5, -170.0, 2.0);
        let b = lat_lng_to_vec3(37.5, 190.0, 2.0);
        assert!((a - b).length() < 1e-5);
    }

    #[test]
    fn projection_is_deterministic() {
        let a = lat_lng_to_vec3(40.7128, -74.0060, 2.05);
        let b = lat_lng_to_vec3(40.7128, -74.0060, 2.05);
        assert_eq!(a, b);
    }

    #[test]
    fn tangent_rotation_sends_y_to_the_normal() {
        let p = lat_lng_to_vec3(52.3702, 4.8952, 2.1);
        let rotated = tangent_rotation(p) * Vec3::Y;
        let normal = p.normalize();
        assert!((rotated - normal).length() < 1e-5);
    }
}
