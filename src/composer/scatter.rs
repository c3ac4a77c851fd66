//! Random placement of the graves around the house
//!
//! Each grave draws an angle in `[0, 2pi)` and a radius of
//! `diagonal / 1.7 + [0, spread)`, independently of every other grave.
//! Overlaps are allowed.

use std::f32::consts::TAU;

use cgmath::Vector3;
use rand::Rng;

use super::config::HouseConfig;
use crate::error::Result;
use crate::gfx::geometry::{GeometryStore, Shape};
use crate::gfx::math::Transform;
use crate::gfx::scene::PlacedObject;

/// Divides the walls' footprint diagonal to get the inner ring radius
pub const DIAGONAL_DIVISOR: f32 = 1.7;

pub const GRAVE_MATERIAL: &str = "grave";

pub fn grave_shape(config: &HouseConfig) -> Shape {
    Shape::Box {
        width: config.graves.size,
        height: config.graves.size,
        depth: config.graves.depth,
    }
}

/// Ring radius range `(min, max)` graves are drawn from
pub fn radius_range(config: &HouseConfig) -> (f32, f32) {
    let inner = config.footprint_diagonal() / DIAGONAL_DIVISOR;
    (inner, inner + config.graves.spread)
}

pub fn grave_position(config: &HouseConfig, angle: f32, radius: f32) -> Vector3<f32> {
    Vector3::new(
        radius * angle.cos(),
        config.graves.size * 0.5,
        radius * angle.sin(),
    )
}

/// Builds `config.graves.count` graves, each with its own geometry in `store`
///
/// The grave shape is validated once up front, so on error nothing has been
/// inserted into the store.
pub fn scatter_graves<R: Rng>(
    config: &HouseConfig,
    store: &mut GeometryStore,
    rng: &mut R,
) -> Result<Vec<PlacedObject>> {
    let shape = grave_shape(config);
    let data = shape.build()?;
    let (inner, _) = radius_range(config);

    let graves = (0..config.graves.count as usize)
        .map(|i| {
            let angle = rng.random::<f32>() * TAU;
            let radius = inner + rng.random::<f32>() * config.graves.spread;
            let id = store.insert(data.clone());
            PlacedObject::new(
                format!("grave-{}", i),
                shape,
                id,
                GRAVE_MATERIAL,
                Transform::from_position(grave_position(config, angle, radius)),
            )
        })
        .collect();

    Ok(graves)
}
