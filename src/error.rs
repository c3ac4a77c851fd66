//! Error types shared across the crate
//!
//! Geometry and color errors come from the low-level constructors; the
//! composer wraps them in [`ComposeError`] together with its own failure modes.

use thiserror::Error;

use crate::composer::Parameter;

/// Errors raised by the primitive shape constructors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("{shape} {field} must be positive and finite, got {value}")]
    InvalidDimension {
        shape: &'static str,
        field: &'static str,
        value: f32,
    },

    #[error("{shape} needs at least {min} {field}, got {value}")]
    TooFewSegments {
        shape: &'static str,
        field: &'static str,
        min: u32,
        value: u32,
    },
}

/// Errors raised while parsing colors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color `{0}` is not a #rrggbb hex string")]
    InvalidHex(String),
}

/// Errors raised by the scene composer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Color(#[from] ColorError),

    /// A parameter path or member name that the composer never built
    #[error("unknown update target `{0}`")]
    UnknownTarget(String),

    #[error("parameter `{parameter}` expects a {expected} value")]
    ValueMismatch {
        parameter: Parameter,
        expected: &'static str,
    },
}

pub type Result<T, E = ComposeError> = std::result::Result<T, E>;

/// Errors reported by a windowing backend when switching display modes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("display mode change rejected: {0}")]
    Rejected(String),
}
