//! Scene resources
//!
//! Colors, materials and lights referenced by placed objects.

pub mod color;
pub mod light;
pub mod material;

pub use color::Color;
pub use light::AmbientLight;
pub use material::{Material, MaterialId, MaterialManager, MaterialUniform};
