//! # Debug controls
//!
//! A Dear ImGui panel for tuning the haunted house live.
//!
//! [`controls`] holds the registry of exposed parameters with their ranges
//! and widgets; [`panel`] draws that registry and forwards edits to a
//! [`Stage`](crate::stage::Stage).
//!
//! ## Usage
//!
//! ```no_run
//! # fn frame(ui: &imgui::Ui, stage: &mut hollow::stage::Stage) {
//! use hollow::ui::{house_control_panel, house_panel};
//!
//! let panel = house_panel();
//! house_control_panel(ui, &panel, stage, &mut rand::rng());
//! # }
//! ```
//!
//! Values are clamped and snapped by [`Control::coerce`] before they reach
//! the composer, so slider drags never produce out-of-range dimensions.

pub mod controls;
pub mod panel;

// Re-export main types
pub use controls::{house_panel, Control, ControlKind, ControlPanel, Folder};
pub use panel::house_control_panel;
