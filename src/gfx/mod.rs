//! # Graphics Module
//!
//! Scene-side building blocks for the composer.
//!
//! - **Geometry** ([`geometry`]) - Procedural primitives and the geometry store
//! - **Math** ([`math`]) - Bounding boxes and node transforms
//! - **Scene** ([`scene`]) - Placed objects, groups and the GPU vertex format
//! - **Resources** ([`resources`]) - Colors, materials and lights
//! - **Camera** ([`camera`]) - Orbit camera, viewpoints and eased transitions

pub mod camera;
pub mod geometry;
pub mod math;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::OrbitCamera;
pub use geometry::{GeometryData, GeometryStore, Shape};
