//! # Geometry Errors
//!
//! Error types for bore proxy mesh generation.

use thiserror::Error;

/// Errors that can occur during proxy geometry generation.
///
/// All operations are pure and deterministic: a failed validation fails
/// identically on retry until an input changes.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A shape dimension that must be strictly positive was not
    #[error("Invalid dimension: {name} must be positive, got {value}")]
    InvalidDimension { name: String, value: f64 },

    /// Tip and tail of the trajectory axis coincide
    #[error("Degenerate axis: tip and tail coincide, orientation is undefined")]
    DegenerateAxis,

    /// Tessellation resolution below the minimum closed cross-section
    #[error("Invalid resolution: segments must be at least {min}: {segments}")]
    InvalidResolution { segments: u32, min: u32 },
}

impl GeometryError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(name: impl Into<String>, value: f64) -> Self {
        Self::InvalidDimension {
            name: name.into(),
            value,
        }
    }

    /// Creates an invalid resolution error.
    pub fn invalid_resolution(segments: u32) -> Self {
        Self::InvalidResolution {
            segments,
            min: config::constants::MIN_SEGMENTS,
        }
    }
}
