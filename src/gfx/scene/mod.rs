//! # Scene Objects
//!
//! Placed primitives, the fixed-membership [`Group`] they are assembled into,
//! and the GPU vertex format.
//!
//! - [`PlacedObject`] - A shape with a geometry id, material id and transform
//! - [`Group`] - Rigid compound of placed objects with world-space bounds
//! - [`Vertex3D`] - Position and normal vertex for GPU upload

pub mod group;
pub mod object;
pub mod vertex;

pub use group::Group;
pub use object::PlacedObject;
pub use vertex::Vertex3D;
