//! Shapes and placements of the house parts, derived from the configuration
//!
//! Both the initial build and every later edit go through these functions,
//! so an edit can never leave a part placed by stale numbers.

use std::f32::consts::FRAC_PI_2;

use cgmath::Vector3;

use super::config::HouseConfig;
use crate::gfx::geometry::Shape;
use crate::gfx::math::Transform;

pub const WALLS: &str = "walls";
pub const ROOF: &str = "roof";
pub const DOOR: &str = "door";
pub const FLOOR: &str = "floor";

const BUSH_NAMES: [&str; 4] = ["bush-0", "bush-1", "bush-2", "bush-3"];

/// Sphere resolution of a bush
const BUSH_SEGMENTS: u32 = 16;

/// Which of the two configured scales a bush uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BushScale {
    Large,
    Small,
}

/// Hand-placed bush: `x` across the front, `z` out from the front wall
#[derive(Debug, Clone, Copy)]
pub struct BushSlot {
    pub x: f32,
    pub z: f32,
    pub scale: BushScale,
}

/// Bushes in front of the door, large and small alternating
pub const BUSH_LAYOUT: [BushSlot; 4] = [
    BushSlot { x: 0.8, z: 0.2, scale: BushScale::Large },
    BushSlot { x: 1.4, z: 0.1, scale: BushScale::Small },
    BushSlot { x: -0.8, z: 0.2, scale: BushScale::Large },
    BushSlot { x: -1.0, z: 0.6, scale: BushScale::Small },
];

pub fn bush_name(index: usize) -> &'static str {
    BUSH_NAMES[index]
}

pub fn walls_shape(config: &HouseConfig) -> Shape {
    Shape::Box {
        width: config.walls.width,
        height: config.walls.height,
        depth: config.walls.depth,
    }
}

pub fn roof_shape(config: &HouseConfig) -> Shape {
    Shape::Cone {
        radius: config.roof.radius,
        height: config.roof.height,
        radial_segments: config.roof.sides,
    }
}

pub fn door_shape(config: &HouseConfig) -> Shape {
    Shape::Plane {
        width: config.door.width,
        height: config.door.height,
    }
}

pub fn floor_shape(config: &HouseConfig) -> Shape {
    Shape::Plane {
        width: config.floor.width,
        height: config.floor.depth,
    }
}

pub fn bush_shape(config: &HouseConfig) -> Shape {
    Shape::Sphere {
        radius: config.bushes.base_size,
        width_segments: BUSH_SEGMENTS,
        height_segments: BUSH_SEGMENTS,
    }
}

/// Walls stand on the ground plane
pub fn walls_transform(config: &HouseConfig) -> Transform {
    Transform::from_position(Vector3::new(0.0, config.walls.height * 0.5, 0.0))
}

/// Roof sits on top of the walls
pub fn roof_transform(config: &HouseConfig) -> Transform {
    Transform::from_position(Vector3::new(
        0.0,
        config.walls.height + config.roof.height * 0.5,
        0.0,
    ))
    .with_rotation(Vector3::new(0.0, config.roof.rotation, 0.0))
}

/// Door on the front (+Z) wall, pushed out by the clearance offset
pub fn door_transform(config: &HouseConfig) -> Transform {
    Transform::from_position(Vector3::new(
        0.0,
        config.door.height * 0.5,
        config.walls.depth * 0.5 + config.door.offset,
    ))
}

pub fn floor_transform(_config: &HouseConfig) -> Transform {
    Transform::default().with_rotation(Vector3::new(-FRAC_PI_2, 0.0, 0.0))
}

pub fn bush_scale(config: &HouseConfig, scale: BushScale) -> f32 {
    match scale {
        BushScale::Large => config.bushes.large_scale,
        BushScale::Small => config.bushes.small_scale,
    }
}

/// Bushes are half sunk into the ground
pub fn bush_transform(config: &HouseConfig, slot: &BushSlot) -> Transform {
    let scale = bush_scale(config, slot.scale);
    Transform::from_position(Vector3::new(
        slot.x,
        config.bushes.base_size * scale * 0.5,
        config.walls.depth * 0.5 + slot.z,
    ))
    .with_uniform_scale(scale)
}
