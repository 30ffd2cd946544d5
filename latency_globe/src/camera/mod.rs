mod orbit;

pub use orbit::{orbit_camera_plugin, OrbitState};
