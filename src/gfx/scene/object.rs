use cgmath::Matrix4;

use crate::gfx::geometry::{GeometryId, GeometryStore, Shape};
use crate::gfx::math::{Aabb, Transform};
use crate::gfx::resources::material::MaterialId;

/// A primitive shape placed in the scene
///
/// The object keeps the [`Shape`] its geometry was built from so that a
/// shape edit can rebuild it, while the transform is edited in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedObject {
    pub name: String,
    pub shape: Shape,
    pub geometry: GeometryId,
    pub material: MaterialId,
    pub transform: Transform,
}

impl PlacedObject {
    pub fn new(
        name: impl Into<String>,
        shape: Shape,
        geometry: GeometryId,
        material: impl Into<MaterialId>,
        transform: Transform,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            geometry,
            material: material.into(),
            transform,
        }
    }

    /// World-space bounds of this object's vertices under `parent`
    ///
    /// Returns `None` if the geometry has already been released.
    pub fn world_bounds(&self, parent: &Matrix4<f32>, store: &GeometryStore) -> Option<Aabb> {
        let data = store.get(self.geometry)?;
        let world = *parent * self.transform.matrix();
        Some(data.local_bounds().transformed(&world))
    }
}
