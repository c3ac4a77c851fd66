//! House configuration
//!
//! One plain struct per parameter group, all gathered in [`HouseConfig`].
//! The defaults are the tuned values of the haunted-house scene. Nothing here
//! is range-checked; bad dimensions surface when the geometry is built.

use std::f32::consts::FRAC_PI_4;

use super::parameter::{ParamValue, Parameter};
use crate::gfx::resources::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct RoofConfig {
    pub radius: f32,
    pub height: f32,
    pub sides: u32,
    /// Turn about Y in radians
    pub rotation: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallsConfig {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoorConfig {
    pub width: f32,
    pub height: f32,
    pub color: Color,
    /// Clearance off the front wall, keeps the two faces from z-fighting
    pub offset: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloorConfig {
    pub width: f32,
    pub depth: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BushConfig {
    pub color: Color,
    /// Radius of an unscaled bush
    pub base_size: f32,
    pub large_scale: f32,
    pub small_scale: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GraveConfig {
    pub count: u32,
    /// Width and height of the stone face
    pub size: f32,
    pub depth: f32,
    /// Random radius added on top of the base ring
    pub spread: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientConfig {
    pub color: Color,
    pub intensity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Distance of the named viewpoints from the orbit pivot
    pub distance: f32,
    /// Seconds a viewpoint transition takes
    pub transition_duration: f32,
    /// Orbit around the house center instead of the origin
    pub centered_pivot: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HouseConfig {
    pub roof: RoofConfig,
    pub walls: WallsConfig,
    pub door: DoorConfig,
    pub floor: FloorConfig,
    pub bushes: BushConfig,
    pub graves: GraveConfig,
    pub ambient: AmbientConfig,
    pub camera: CameraConfig,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            roof: RoofConfig {
                radius: 2.5,
                height: 0.7,
                sides: 4,
                rotation: FRAC_PI_4,
                color: Color::from_rgb_u32(0xb35f45),
            },
            walls: WallsConfig {
                width: 2.5,
                height: 2.0,
                depth: 2.5,
                color: Color::WHITE,
            },
            door: DoorConfig {
                width: 1.5,
                height: 1.5,
                color: Color::from_rgb_u32(0xaa7b7b),
                offset: 0.01,
            },
            floor: FloorConfig {
                width: 7.0,
                depth: 7.0,
                color: Color::from_rgb_u32(0x615f5f),
            },
            bushes: BushConfig {
                color: Color::from_rgb_u32(0x89c854),
                base_size: 1.0,
                large_scale: 0.5,
                small_scale: 0.25,
            },
            graves: GraveConfig {
                count: 30,
                size: 0.6,
                depth: 0.2,
                spread: 3.5,
                color: Color::from_rgb_u32(0xb2b6b1),
            },
            ambient: AmbientConfig {
                color: Color::from_rgb_u32(0x8f8f8f),
                intensity: 7.5,
            },
            camera: CameraConfig {
                distance: 6.5,
                transition_duration: 1.0,
                centered_pivot: false,
            },
        }
    }
}

impl HouseConfig {
    /// Diagonal of the walls' footprint, the reference for grave placement
    pub fn footprint_diagonal(&self) -> f32 {
        self.walls.width.hypot(self.walls.depth)
    }

    /// Current value of a parameter
    pub fn value(&self, parameter: Parameter) -> ParamValue {
        use ParamValue::{Color as C, Count, Flag, Float};
        use Parameter::*;

        match parameter {
            RoofRadius => Float(self.roof.radius),
            RoofHeight => Float(self.roof.height),
            RoofSides => Count(self.roof.sides),
            RoofRotation => Float(self.roof.rotation),
            RoofColor => C(self.roof.color),
            WallsWidth => Float(self.walls.width),
            WallsHeight => Float(self.walls.height),
            WallsDepth => Float(self.walls.depth),
            WallsColor => C(self.walls.color),
            DoorWidth => Float(self.door.width),
            DoorHeight => Float(self.door.height),
            DoorOffset => Float(self.door.offset),
            DoorColor => C(self.door.color),
            FloorWidth => Float(self.floor.width),
            FloorDepth => Float(self.floor.depth),
            FloorColor => C(self.floor.color),
            BushColor => C(self.bushes.color),
            BushBaseSize => Float(self.bushes.base_size),
            BushLargeScale => Float(self.bushes.large_scale),
            BushSmallScale => Float(self.bushes.small_scale),
            GraveCount => Count(self.graves.count),
            GraveSize => Float(self.graves.size),
            GraveDepth => Float(self.graves.depth),
            GraveSpread => Float(self.graves.spread),
            GraveColor => C(self.graves.color),
            AmbientColor => C(self.ambient.color),
            AmbientIntensity => Float(self.ambient.intensity),
            CameraDistance => Float(self.camera.distance),
            CameraTransitionDuration => Float(self.camera.transition_duration),
            CameraCenteredPivot => Flag(self.camera.centered_pivot),
        }
    }

    /// Writes a parameter, checking only that the value has the right kind
    pub(crate) fn set(&mut self, parameter: Parameter, value: ParamValue) -> crate::error::Result<()> {
        use Parameter::*;

        match parameter {
            RoofRadius => self.roof.radius = value.as_float(parameter)?,
            RoofHeight => self.roof.height = value.as_float(parameter)?,
            RoofSides => self.roof.sides = value.as_count(parameter)?,
            RoofRotation => self.roof.rotation = value.as_float(parameter)?,
            RoofColor => self.roof.color = value.as_color(parameter)?,
            WallsWidth => self.walls.width = value.as_float(parameter)?,
            WallsHeight => self.walls.height = value.as_float(parameter)?,
            WallsDepth => self.walls.depth = value.as_float(parameter)?,
            WallsColor => self.walls.color = value.as_color(parameter)?,
            DoorWidth => self.door.width = value.as_float(parameter)?,
            DoorHeight => self.door.height = value.as_float(parameter)?,
            DoorOffset => self.door.offset = value.as_float(parameter)?,
            DoorColor => self.door.color = value.as_color(parameter)?,
            FloorWidth => self.floor.width = value.as_float(parameter)?,
            FloorDepth => self.floor.depth = value.as_float(parameter)?,
            FloorColor => self.floor.color = value.as_color(parameter)?,
            BushColor => self.bushes.color = value.as_color(parameter)?,
            BushBaseSize => self.bushes.base_size = value.as_float(parameter)?,
            BushLargeScale => self.bushes.large_scale = value.as_float(parameter)?,
            BushSmallScale => self.bushes.small_scale = value.as_float(parameter)?,
            GraveCount => self.graves.count = value.as_count(parameter)?,
            GraveSize => self.graves.size = value.as_float(parameter)?,
            GraveDepth => self.graves.depth = value.as_float(parameter)?,
            GraveSpread => self.graves.spread = value.as_float(parameter)?,
            GraveColor => self.graves.color = value.as_color(parameter)?,
            AmbientColor => self.ambient.color = value.as_color(parameter)?,
            AmbientIntensity => self.ambient.intensity = value.as_float(parameter)?,
            CameraDistance => self.camera.distance = value.as_float(parameter)?,
            CameraTransitionDuration => {
                self.camera.transition_duration = value.as_float(parameter)?
            }
            CameraCenteredPivot => self.camera.centered_pivot = value.as_flag(parameter)?,
        }
        Ok(())
    }
}
