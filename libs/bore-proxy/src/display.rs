//! # Display Style
//!
//! Initial display suggestion delivered alongside each mesh. The rendering
//! host owns actual display state; the proxy never drives it beyond this.

use config::constants::{DEFAULT_MODEL_COLOR, DEFAULT_MODEL_OPACITY};
use serde::{Deserialize, Serialize};

/// Suggested display properties for the proxy mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayStyle {
    /// Suggested RGB color, components in `[0, 1]`
    pub color: [f32; 3],
    /// Suggested opacity in `[0, 1]`
    pub opacity: f32,
    /// Whether the mesh's intersection with 2D reference planes
    /// should be drawn on slice viewers
    pub slice_intersection: bool,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            color: DEFAULT_MODEL_COLOR,
            opacity: DEFAULT_MODEL_OPACITY,
            slice_intersection: true,
        }
    }
}
