mod aabb;
mod transform;

pub use aabb::Aabb;
pub use transform::Transform;
