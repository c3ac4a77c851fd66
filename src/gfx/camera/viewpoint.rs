use std::f32::consts::FRAC_PI_2;
use std::fmt;

use cgmath::Vector3;

/// Named camera positions around the orbit target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Viewpoint {
    Top,
    Front,
    Left,
    Right,
    Back,
}

impl Viewpoint {
    pub const ALL: [Viewpoint; 5] = [
        Viewpoint::Top,
        Viewpoint::Front,
        Viewpoint::Left,
        Viewpoint::Right,
        Viewpoint::Back,
    ];

    /// Unit direction from the target towards the eye
    pub fn direction(&self) -> Vector3<f32> {
        match self {
            Viewpoint::Top => Vector3::new(0.0, 1.0, 0.0),
            Viewpoint::Front => Vector3::new(0.0, 0.0, 1.0),
            Viewpoint::Left => Vector3::new(-1.0, 0.0, 0.0),
            Viewpoint::Right => Vector3::new(1.0, 0.0, 0.0),
            Viewpoint::Back => Vector3::new(0.0, 0.0, -1.0),
        }
    }

    pub fn eye(&self, target: Vector3<f32>, distance: f32) -> Vector3<f32> {
        target + self.direction() * distance
    }

    /// Orientation the camera snaps to once it arrives
    ///
    /// Looking straight down has no usable up vector for look-at, so the top
    /// view pins its rotation instead.
    pub fn settle_rotation(&self) -> Option<Vector3<f32>> {
        match self {
            Viewpoint::Top => Some(Vector3::new(-FRAC_PI_2, 0.0, 0.0)),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Viewpoint::Top => "Top",
            Viewpoint::Front => "Front",
            Viewpoint::Left => "Left",
            Viewpoint::Right => "Right",
            Viewpoint::Back => "Back",
        }
    }
}

impl fmt::Display for Viewpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
