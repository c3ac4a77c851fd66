//! # Hollow Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use hollow::prelude::*;
//!
//! let mut stage = Stage::new(HouseConfig::default(), 16.0 / 9.0, &mut rand::rng())?;
//! stage.update_parameter(Parameter::RoofSides, ParamValue::Count(6))?;
//! stage.go_to(Viewpoint::Top);
//! while stage.tick(1.0 / 60.0) {}
//! # Ok::<(), ComposeError>(())
//! ```

// Composition
pub use crate::composer::{Edit, HouseConfig, ParamValue, Parameter, SceneComposer};
pub use crate::error::{ComposeError, GeometryError};
pub use crate::stage::{DisplayBackend, DisplayMode, Stage};

// Graphics
pub use crate::gfx::camera::{CameraTransition, Easing, OrbitCamera, Viewpoint};
pub use crate::gfx::geometry::{GeometryData, GeometryStore, Shape};
pub use crate::gfx::math::{Aabb, Transform};
pub use crate::gfx::resources::Color;
pub use crate::gfx::scene::{Group, PlacedObject};

// Common external types
pub use cgmath::Vector3;
