//! # Trajectory Alignment
//!
//! Builds the affine transform that carries a canonical Z-aligned solid onto
//! an observed trajectory axis. Centralized here so the builder and any
//! future consumers share one implementation of the rotation math.

use config::constants::EPSILON;
use glam::{DMat4, DVec3};
use std::f64::consts::PI;

use crate::error::GeometryError;

/// The canonical long axis of the unit primitives.
const CANONICAL_AXIS: DVec3 = DVec3::Z;

/// Computes the transform aligning the canonical +Z axis with `tip - tail`.
///
/// The rotation takes +Z onto `v1 = normalize(tip - tail)`; the translation
/// then places the origin at `tip + v1 * tip_offset`. Composition is
/// post-multiplied: the rotation happens first, the translation is applied
/// in the world frame. Reversing that order changes the placement whenever
/// `tip_offset != 0`.
///
/// The rotation angle is `atan2(|Z x v1|, Z . v1)`, which stays numerically
/// stable when the trajectory is nearly parallel or antiparallel to Z,
/// where an inverse cosine of the dot product alone would not be.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateAxis`] when `tip` and `tail` coincide,
/// since the direction is undefined.
///
/// # Examples
/// ```
/// use bore_mesh::align_to_axis;
/// use glam::DVec3;
///
/// let m = align_to_axis(DVec3::new(0.0, 0.0, 100.0), DVec3::ZERO, 0.0)?;
/// let p = m.transform_point3(DVec3::ZERO);
/// assert!((p - DVec3::new(0.0, 0.0, 100.0)).length() < 1e-9);
/// # Ok::<(), bore_mesh::GeometryError>(())
/// ```
pub fn align_to_axis(tip: DVec3, tail: DVec3, tip_offset: f64) -> Result<DMat4, GeometryError> {
    let span = tip - tail;
    if span.length() < EPSILON {
        return Err(GeometryError::DegenerateAxis);
    }

    let v1 = span.normalize();
    let rotation = rotation_onto(v1);
    let translation = DMat4::from_translation(tip + v1 * tip_offset);

    Ok(translation * rotation)
}

/// Rotation matrix taking the canonical +Z axis onto the unit vector `v1`.
///
/// When `Z x v1` vanishes the trajectory is parallel (identity) or
/// antiparallel (half turn about X) to the canonical axis; both cases are
/// handled explicitly so no NaN axis is ever fed to the rotation.
fn rotation_onto(v1: DVec3) -> DMat4 {
    let axis = CANONICAL_AXIS.cross(v1);
    let s = axis.length();
    let c = v1.dot(CANONICAL_AXIS);

    if s < EPSILON {
        if c > 0.0 {
            DMat4::IDENTITY
        } else {
            // Any axis perpendicular to Z works for the half turn
            DMat4::from_axis_angle(DVec3::X, PI)
        }
    } else {
        DMat4::from_axis_angle(axis / s, s.atan2(c))
    }
}
