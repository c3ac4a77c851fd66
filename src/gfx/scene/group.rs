use cgmath::Matrix4;

use super::object::PlacedObject;
use crate::gfx::geometry::GeometryStore;
use crate::gfx::math::{Aabb, Transform};

/// Fixed-membership collection of placed objects moved as one rigid body
///
/// Members can be edited through [`Group::member_mut`] but never added or
/// removed after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub name: String,
    pub transform: Transform,
    members: Vec<PlacedObject>,
}

impl Group {
    pub fn new(name: impl Into<String>, members: Vec<PlacedObject>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::default(),
            members,
        }
    }

    pub fn members(&self) -> &[PlacedObject] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [PlacedObject] {
        &mut self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member(&self, name: &str) -> Option<&PlacedObject> {
        self.members.iter().find(|m| m.name == name)
    }

    pub fn member_mut(&mut self, name: &str) -> Option<&mut PlacedObject> {
        self.members.iter_mut().find(|m| m.name == name)
    }

    pub fn world_matrix(&self) -> Matrix4<f32> {
        self.transform.matrix()
    }

    /// Union of the members' local boxes carried into world space, at call time
    pub fn world_bounds(&self, store: &GeometryStore) -> Aabb {
        let parent = self.world_matrix();
        self.members.iter().fold(Aabb::empty(), |acc, member| {
            match member.world_bounds(&parent, store) {
                Some(bounds) => acc.union(&bounds),
                None => {
                    log::warn!(
                        "group `{}`: member `{}` has no live geometry, skipped",
                        self.name,
                        member.name
                    );
                    acc
                }
            }
        })
    }
}
