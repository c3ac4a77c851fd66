// src/lib.rs
//! Hollow
//!
//! A procedural haunted-house scene composer: a parametrized house built from
//! primitives, a bounding volume kept in step with live edits, and eased
//! camera moves between named viewpoints. Output is renderer-agnostic but
//! ships wgpu-ready vertex and camera layouts.

pub mod composer;
pub mod error;
pub mod gfx;
pub mod prelude;
pub mod stage;
pub mod ui;

// Re-export main types for convenience
pub use composer::{HouseConfig, SceneComposer};
pub use stage::Stage;
