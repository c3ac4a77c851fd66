//! # Procedural Geometry Generation
//!
//! Primitive shapes built from their dimensions, a [`Shape`] descriptor that
//! remembers how a piece of geometry was made, and the [`GeometryStore`] that
//! owns every generated mesh by id.
//!
//! ## Usage
//!
//! ```rust
//! use hollow::gfx::geometry::{GeometryStore, Shape};
//!
//! let mut store = GeometryStore::new();
//! let roof = Shape::Cone { radius: 2.5, height: 0.7, radial_segments: 4 };
//! let id = store.insert(roof.build().unwrap());
//!
//! assert_eq!(store.live_count(), 1);
//! store.release(id);
//! assert_eq!(store.live_count(), 0);
//! ```

pub mod primitives;
pub mod store;

pub use primitives::*;
pub use store::{GeometryId, GeometryStore};

use cgmath::Vector3;

use crate::error::GeometryError;
use crate::gfx::math::Aabb;
use crate::gfx::scene::vertex::Vertex3D;

/// Represents generated geometry data ready for GPU upload
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bounds of the raw vertex positions
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| Vector3::new(v[0], v[1], v[2])))
    }

    /// Interleaves positions and normals into the renderer's vertex format
    pub fn to_vertices(&self) -> (Vec<Vertex3D>, Vec<u32>) {
        let vertices = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, position)| Vertex3D {
                position: *position,
                normal: self.normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        (vertices, self.indices.clone())
    }
}

/// Parameters a piece of geometry was generated from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl Shape {
    pub fn build(&self) -> Result<GeometryData, GeometryError> {
        match *self {
            Shape::Box {
                width,
                height,
                depth,
            } => generate_box(width, height, depth, 1, 1, 1),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => generate_cone(radius, height, radial_segments),
            Shape::Plane { width, height } => generate_plane(width, height, 1, 1),
            Shape::Sphere {
                radius,
                width_segments,
                height_segments,
            } => generate_sphere(radius, width_segments, height_segments),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Cone { .. } => "cone",
            Shape::Plane { .. } => "plane",
            Shape::Sphere { .. } => "sphere",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_build_matches_generator() {
        let shape = Shape::Sphere {
            radius: 1.0,
            width_segments: 16,
            height_segments: 16,
        };
        let data = shape.build().unwrap();
        assert_eq!(data.vertex_count(), 17 * 17);
        assert_eq!(shape.kind(), "sphere");
    }

    #[test]
    fn test_shape_build_propagates_errors() {
        let shape = Shape::Plane {
            width: 0.0,
            height: 1.0,
        };
        assert!(matches!(
            shape.build(),
            Err(GeometryError::InvalidDimension { field: "width", .. })
        ));
    }

    #[test]
    fn test_to_vertices_interleaves() {
        let data = generate_plane(1.0, 1.0, 1, 1).unwrap();
        let (vertices, indices) = data.to_vertices();
        assert_eq!(vertices.len(), 4);
        assert_eq!(indices.len(), 6);
        assert_eq!(vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(vertices[3].position, [0.5, 0.5, 0.0]);
    }
}
