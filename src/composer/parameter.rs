//! Typed parameter paths and values
//!
//! Every editable field of [`HouseConfig`](super::HouseConfig) has a
//! [`Parameter`] with a dotted path such as `roof.radius`, used by the debug
//! controls and by string-driven callers.

use std::fmt;
use std::str::FromStr;

use crate::error::ComposeError;
use crate::gfx::resources::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    RoofRadius,
    RoofHeight,
    RoofSides,
    RoofRotation,
    RoofColor,
    WallsWidth,
    WallsHeight,
    WallsDepth,
    WallsColor,
    DoorWidth,
    DoorHeight,
    DoorOffset,
    DoorColor,
    FloorWidth,
    FloorDepth,
    FloorColor,
    BushColor,
    BushBaseSize,
    BushLargeScale,
    BushSmallScale,
    GraveCount,
    GraveSize,
    GraveDepth,
    GraveSpread,
    GraveColor,
    AmbientColor,
    AmbientIntensity,
    CameraDistance,
    CameraTransitionDuration,
    CameraCenteredPivot,
}

/// Which kind of value a parameter holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Count,
    Color,
    Flag,
}

/// How an edit reaches the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Rebuild the geometry of the affected objects
    Shape,
    /// Rewrite transforms in place
    Placement,
    Material,
    Light,
    /// Stored until the markers are scattered again
    Markers,
    Camera,
}

impl Parameter {
    pub const ALL: [Parameter; 30] = [
        Parameter::RoofRadius,
        Parameter::RoofHeight,
        Parameter::RoofSides,
        Parameter::RoofRotation,
        Parameter::RoofColor,
        Parameter::WallsWidth,
        Parameter::WallsHeight,
        Parameter::WallsDepth,
        Parameter::WallsColor,
        Parameter::DoorWidth,
        Parameter::DoorHeight,
        Parameter::DoorOffset,
        Parameter::DoorColor,
        Parameter::FloorWidth,
        Parameter::FloorDepth,
        Parameter::FloorColor,
        Parameter::BushColor,
        Parameter::BushBaseSize,
        Parameter::BushLargeScale,
        Parameter::BushSmallScale,
        Parameter::GraveCount,
        Parameter::GraveSize,
        Parameter::GraveDepth,
        Parameter::GraveSpread,
        Parameter::GraveColor,
        Parameter::AmbientColor,
        Parameter::AmbientIntensity,
        Parameter::CameraDistance,
        Parameter::CameraTransitionDuration,
        Parameter::CameraCenteredPivot,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Parameter::RoofRadius => "roof.radius",
            Parameter::RoofHeight => "roof.height",
            Parameter::RoofSides => "roof.sides",
            Parameter::RoofRotation => "roof.rotation",
            Parameter::RoofColor => "roof.color",
            Parameter::WallsWidth => "walls.width",
            Parameter::WallsHeight => "walls.height",
            Parameter::WallsDepth => "walls.depth",
            Parameter::WallsColor => "walls.color",
            Parameter::DoorWidth => "door.width",
            Parameter::DoorHeight => "door.height",
            Parameter::DoorOffset => "door.offset",
            Parameter::DoorColor => "door.color",
            Parameter::FloorWidth => "floor.width",
            Parameter::FloorDepth => "floor.depth",
            Parameter::FloorColor => "floor.color",
            Parameter::BushColor => "bushes.color",
            Parameter::BushBaseSize => "bushes.base_size",
            Parameter::BushLargeScale => "bushes.large_scale",
            Parameter::BushSmallScale => "bushes.small_scale",
            Parameter::GraveCount => "graves.count",
            Parameter::GraveSize => "graves.size",
            Parameter::GraveDepth => "graves.depth",
            Parameter::GraveSpread => "graves.spread",
            Parameter::GraveColor => "graves.color",
            Parameter::AmbientColor => "ambient.color",
            Parameter::AmbientIntensity => "ambient.intensity",
            Parameter::CameraDistance => "camera.distance",
            Parameter::CameraTransitionDuration => "camera.transition_duration",
            Parameter::CameraCenteredPivot => "camera.centered_pivot",
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        use Parameter::*;
        match self {
            RoofSides | GraveCount => ValueKind::Count,
            RoofColor | WallsColor | DoorColor | FloorColor | BushColor | GraveColor
            | AmbientColor => ValueKind::Color,
            CameraCenteredPivot => ValueKind::Flag,
            _ => ValueKind::Float,
        }
    }

    pub fn edit_kind(&self) -> EditKind {
        use Parameter::*;
        match self {
            RoofRadius | RoofHeight | RoofSides | WallsWidth | WallsHeight | WallsDepth
            | DoorWidth | DoorHeight | FloorWidth | FloorDepth | BushBaseSize => EditKind::Shape,
            RoofRotation | DoorOffset | BushLargeScale | BushSmallScale => EditKind::Placement,
            RoofColor | WallsColor | DoorColor | FloorColor | BushColor | GraveColor => {
                EditKind::Material
            }
            AmbientColor | AmbientIntensity => EditKind::Light,
            GraveCount | GraveSize | GraveDepth | GraveSpread => EditKind::Markers,
            CameraDistance | CameraTransitionDuration | CameraCenteredPivot => EditKind::Camera,
        }
    }

    /// Whether an edit moves or reshapes a member of the house group
    ///
    /// The floor and the graves live outside the group, so their shape edits
    /// leave the bounding volume alone.
    pub fn affects_bounds(&self) -> bool {
        matches!(self.edit_kind(), EditKind::Shape | EditKind::Placement)
            && !matches!(self, Parameter::FloorWidth | Parameter::FloorDepth)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Parameter {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.path() == s)
            .ok_or_else(|| ComposeError::UnknownTarget(s.to_string()))
    }
}

/// A value written to a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Count(u32),
    Color(Color),
    Flag(bool),
}

impl ParamValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            ParamValue::Float(_) => ValueKind::Float,
            ParamValue::Count(_) => ValueKind::Count,
            ParamValue::Color(_) => ValueKind::Color,
            ParamValue::Flag(_) => ValueKind::Flag,
        }
    }

    pub fn as_float(&self, parameter: Parameter) -> Result<f32, ComposeError> {
        match *self {
            ParamValue::Float(v) => Ok(v),
            _ => Err(mismatch(parameter, "float")),
        }
    }

    pub fn as_count(&self, parameter: Parameter) -> Result<u32, ComposeError> {
        match *self {
            ParamValue::Count(v) => Ok(v),
            _ => Err(mismatch(parameter, "count")),
        }
    }

    pub fn as_color(&self, parameter: Parameter) -> Result<Color, ComposeError> {
        match *self {
            ParamValue::Color(v) => Ok(v),
            _ => Err(mismatch(parameter, "color")),
        }
    }

    pub fn as_flag(&self, parameter: Parameter) -> Result<bool, ComposeError> {
        match *self {
            ParamValue::Flag(v) => Ok(v),
            _ => Err(mismatch(parameter, "flag")),
        }
    }
}

fn mismatch(parameter: Parameter, expected: &'static str) -> ComposeError {
    ComposeError::ValueMismatch {
        parameter,
        expected,
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Count(v)
    }
}

impl From<Color> for ParamValue {
    fn from(v: Color) -> Self {
        ParamValue::Color(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Flag(v)
    }
}
