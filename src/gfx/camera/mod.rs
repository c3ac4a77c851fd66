pub mod camera_utils;
pub mod orbit_camera;
pub mod transition;
pub mod viewpoint;

// Re-export main types
pub use camera_utils::{Camera, CameraUniform};
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};
pub use transition::{CameraTransition, Easing};
pub use viewpoint::Viewpoint;
