//! Debug control registry
//!
//! Describes which parameters the debug panel exposes and how: range, step
//! and widget. The registry is plain data so it can be inspected and tested
//! without an ImGui context.

use std::f32::consts::PI;

use crate::composer::{ParamValue, Parameter, ValueKind};

/// Widget used to edit a parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlKind {
    Slider { min: f32, max: f32, step: f32 },
    Stepper { min: u32, max: u32 },
    Color,
    Checkbox,
}

impl ControlKind {
    fn value_kind(&self) -> ValueKind {
        match self {
            ControlKind::Slider { .. } => ValueKind::Float,
            ControlKind::Stepper { .. } => ValueKind::Count,
            ControlKind::Color => ValueKind::Color,
            ControlKind::Checkbox => ValueKind::Flag,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub parameter: Parameter,
    pub label: String,
    pub kind: ControlKind,
}

impl Control {
    pub fn slider(parameter: Parameter, label: &str, min: f32, max: f32, step: f32) -> Self {
        Self::new(parameter, label, ControlKind::Slider { min, max, step })
    }

    pub fn stepper(parameter: Parameter, label: &str, min: u32, max: u32) -> Self {
        Self::new(parameter, label, ControlKind::Stepper { min, max })
    }

    pub fn color(parameter: Parameter, label: &str) -> Self {
        Self::new(parameter, label, ControlKind::Color)
    }

    pub fn checkbox(parameter: Parameter, label: &str) -> Self {
        Self::new(parameter, label, ControlKind::Checkbox)
    }

    fn new(parameter: Parameter, label: &str, kind: ControlKind) -> Self {
        Self {
            parameter,
            label: label.to_string(),
            kind,
        }
    }

    /// Clamps a value into the control's range and snaps it to the step grid
    ///
    /// Values of another kind pass through untouched so the composer can
    /// report the mismatch.
    pub fn coerce(&self, value: ParamValue) -> ParamValue {
        match (self.kind, value) {
            (ControlKind::Slider { min, max, step }, ParamValue::Float(v)) => {
                let snapped = if step > 0.0 {
                    min + ((v - min) / step).round() * step
                } else {
                    v
                };
                ParamValue::Float(snapped.clamp(min, max))
            }
            (ControlKind::Stepper { min, max }, ParamValue::Count(v)) => {
                ParamValue::Count(v.clamp(min, max))
            }
            _ => value,
        }
    }
}

/// A titled group of controls, rendered as one collapsing section
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    pub title: String,
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPanel {
    folders: Vec<Folder>,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folder(mut self, title: &str, controls: Vec<Control>) -> Self {
        self.folders.push(Folder {
            title: title.to_string(),
            controls,
        });
        self
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.folders.iter().flat_map(|f| f.controls.iter())
    }

    pub fn control(&self, parameter: Parameter) -> Option<&Control> {
        self.controls().find(|c| c.parameter == parameter)
    }
}

/// Every house parameter, grouped the way the scene is built
pub fn house_panel() -> ControlPanel {
    use Parameter::*;

    ControlPanel::new()
        .folder(
            "Roof",
            vec![
                Control::slider(RoofRadius, "radius", 0.5, 5.0, 0.01),
                Control::slider(RoofHeight, "height", 0.1, 3.0, 0.01),
                Control::stepper(RoofSides, "sides", 3, 32),
                Control::slider(RoofRotation, "rotation", -PI, PI, 0.01),
                Control::color(RoofColor, "color"),
            ],
        )
        .folder(
            "Walls",
            vec![
                Control::slider(WallsWidth, "width", 0.5, 6.0, 0.01),
                Control::slider(WallsHeight, "height", 0.5, 5.0, 0.01),
                Control::slider(WallsDepth, "depth", 0.5, 6.0, 0.01),
                Control::color(WallsColor, "color"),
            ],
        )
        .folder(
            "Door",
            vec![
                Control::slider(DoorWidth, "width", 0.2, 3.0, 0.01),
                Control::slider(DoorHeight, "height", 0.2, 3.0, 0.01),
                Control::slider(DoorOffset, "offset", 0.0, 0.5, 0.001),
                Control::color(DoorColor, "color"),
            ],
        )
        .folder(
            "Floor",
            vec![
                Control::slider(FloorWidth, "width", 1.0, 30.0, 0.1),
                Control::slider(FloorDepth, "depth", 1.0, 30.0, 0.1),
                Control::color(FloorColor, "color"),
            ],
        )
        .folder(
            "Bushes",
            vec![
                Control::slider(BushBaseSize, "base size", 0.1, 2.0, 0.01),
                Control::slider(BushLargeScale, "large scale", 0.05, 1.5, 0.01),
                Control::slider(BushSmallScale, "small scale", 0.05, 1.5, 0.01),
                Control::color(BushColor, "color"),
            ],
        )
        .folder(
            "Graves",
            vec![
                Control::stepper(GraveCount, "count", 0, 200),
                Control::slider(GraveSize, "size", 0.1, 2.0, 0.01),
                Control::slider(GraveDepth, "depth", 0.05, 1.0, 0.01),
                Control::slider(GraveSpread, "spread", 0.0, 10.0, 0.1),
                Control::color(GraveColor, "color"),
            ],
        )
        .folder(
            "Ambient light",
            vec![
                Control::slider(AmbientIntensity, "intensity", 0.0, 15.0, 0.001),
                Control::color(AmbientColor, "color"),
            ],
        )
        .folder(
            "Camera",
            vec![
                Control::slider(CameraDistance, "distance", 1.0, 20.0, 0.1),
                Control::slider(CameraTransitionDuration, "transition", 0.0, 5.0, 0.05),
                Control::checkbox(CameraCenteredPivot, "orbit house center"),
            ],
        )
}
