//! # Geometry Builder
//!
//! Produces the final proxy meshes from canonical templates. The builder is
//! a pure function of its inputs apart from the cached unit primitives,
//! which only avoid re-tessellating an identical template mesh per call.

use bore_mesh::primitives::{unit_cylinder, unit_sphere};
use bore_mesh::{align_to_axis, GeometryError, Mesh};
use config::constants::{DEFAULT_CYLINDER_SEGMENTS, DEFAULT_SPHERE_SEGMENTS};
use glam::DVec3;

/// Builds bore proxy meshes from cached canonical primitives.
///
/// Holds the angular resolution and the lazily tessellated unit templates.
/// Rebuilding with identical inputs yields bit-for-bit identical meshes.
#[derive(Debug, Clone)]
pub struct GeometryBuilder {
    cylinder_segments: u32,
    sphere_segments: u32,
    cylinder_template: Option<Mesh>,
    sphere_template: Option<Mesh>,
}

impl Default for GeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryBuilder {
    /// Creates a builder with the default angular resolutions.
    pub fn new() -> Self {
        Self::with_resolution(DEFAULT_CYLINDER_SEGMENTS, DEFAULT_SPHERE_SEGMENTS)
    }

    /// Creates a builder with explicit angular resolutions.
    ///
    /// Resolutions are validated when the corresponding template is first
    /// built, not here.
    pub fn with_resolution(cylinder_segments: u32, sphere_segments: u32) -> Self {
        Self {
            cylinder_segments,
            sphere_segments,
            cylinder_template: None,
            sphere_template: None,
        }
    }

    /// Builds the axis-fixed cylindrical bore proxy.
    ///
    /// The cylinder's native +Z axis is used directly; no rotation is
    /// applied in this mode. The center is translated to `offset`.
    ///
    /// # Arguments
    ///
    /// * `diameter` - Bore inner diameter (mm), must be positive
    /// * `length` - Bore tunnel length (mm), must be positive
    /// * `offset` - Center position in RAS millimeters
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidDimension`] for non-positive diameter or
    /// length; no partial mesh is produced on failure.
    pub fn build_cylinder(
        &mut self,
        diameter: f64,
        length: f64,
        offset: DVec3,
    ) -> Result<Mesh, GeometryError> {
        if diameter <= 0.0 {
            return Err(GeometryError::invalid_dimension("diameter", diameter));
        }
        if length <= 0.0 {
            return Err(GeometryError::invalid_dimension("length", length));
        }

        let template = match self.cylinder_template.take() {
            Some(t) => t,
            None => unit_cylinder(self.cylinder_segments)?,
        };
        let mut mesh = template.clone();
        self.cylinder_template = Some(template);

        let radius = diameter / 2.0;
        mesh.scale(DVec3::new(radius, radius, length));
        mesh.translate(offset);
        mesh.compute_normals();

        Ok(mesh)
    }

    /// Builds the trajectory-aligned ellipsoid proxy.
    ///
    /// The unit sphere is scaled to `(minor, minor, major)` semi-axes, then
    /// rotated so its long axis follows `tip - tail` and translated to
    /// `tip + direction * tip_offset` (rotation first, translation in the
    /// world frame).
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidDimension`] for non-positive semi-axes,
    /// [`GeometryError::DegenerateAxis`] when `tip == tail`. No partial
    /// mesh is produced on failure.
    pub fn build_ellipsoid_aligned(
        &mut self,
        minor_axis: f64,
        major_axis: f64,
        tip: DVec3,
        tail: DVec3,
        tip_offset: f64,
    ) -> Result<Mesh, GeometryError> {
        if minor_axis <= 0.0 {
            return Err(GeometryError::invalid_dimension("minor_axis", minor_axis));
        }
        if major_axis <= 0.0 {
            return Err(GeometryError::invalid_dimension("major_axis", major_axis));
        }

        // Degenerate axis is rejected before any mesh work
        let placement = align_to_axis(tip, tail, tip_offset)?;

        let template = match self.sphere_template.take() {
            Some(t) => t,
            None => unit_sphere(self.sphere_segments)?,
        };
        let mut mesh = template.clone();
        self.sphere_template = Some(template);

        mesh.scale(DVec3::new(minor_axis, minor_axis, major_axis));
        mesh.transform(&placement);
        mesh.compute_normals();

        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cylinder_scenario_700_by_1200() {
        let mut builder = GeometryBuilder::new();
        let mesh = builder.build_cylinder(700.0, 1200.0, DVec3::ZERO).unwrap();

        let (min, max) = mesh.bounding_box();
        // Circumscribed radius is exactly d/2 at the ring vertices
        assert_relative_eq!(max.x, 350.0, epsilon = 1e-9);
        assert_relative_eq!(min.x, -350.0, epsilon = 1e-9);
        assert_relative_eq!(max.z - min.z, 1200.0, epsilon = 1e-9);

        let c = mesh.centroid();
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.z, 0.0, epsilon = 1e-9);
        assert!(mesh.validate());
    }

    #[test]
    fn cylinder_is_centered_at_offset() {
        let offset = DVec3::new(12.0, -30.0, 45.0);
        let mut builder = GeometryBuilder::new();
        let mesh = builder.build_cylinder(700.0, 1200.0, offset).unwrap();

        let c = mesh.centroid();
        assert_relative_eq!(c.x, offset.x, epsilon = 1e-9);
        assert_relative_eq!(c.y, offset.y, epsilon = 1e-9);
        assert_relative_eq!(c.z, offset.z, epsilon = 1e-9);

        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, offset.z - 600.0, epsilon = 1e-9);
        assert_relative_eq!(max.z, offset.z + 600.0, epsilon = 1e-9);
    }

    #[test]
    fn cylinder_rejects_invalid_dimensions() {
        let mut builder = GeometryBuilder::new();
        assert!(builder.build_cylinder(0.0, 1200.0, DVec3::ZERO).is_err());
        assert!(builder.build_cylinder(700.0, -1.0, DVec3::ZERO).is_err());
    }

    #[test]
    fn cylinder_is_idempotent() {
        let mut builder = GeometryBuilder::new();
        let a = builder.build_cylinder(700.0, 1200.0, DVec3::ZERO).unwrap();
        let b = builder.build_cylinder(700.0, 1200.0, DVec3::ZERO).unwrap();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.triangles(), b.triangles());
    }

    #[test]
    fn cached_template_matches_fresh_builder() {
        let mut warm = GeometryBuilder::new();
        let _ = warm.build_cylinder(100.0, 100.0, DVec3::ZERO).unwrap();
        let cached = warm.build_cylinder(700.0, 1200.0, DVec3::ZERO).unwrap();

        let fresh = GeometryBuilder::new()
            .build_cylinder(700.0, 1200.0, DVec3::ZERO)
            .unwrap();
        assert_eq!(cached.vertices(), fresh.vertices());
        assert_eq!(cached.triangles(), fresh.triangles());
    }

    #[test]
    fn ellipsoid_scenario_z_aligned() {
        let mut builder = GeometryBuilder::new();
        let tip = DVec3::new(0.0, 0.0, 100.0);
        let mesh = builder
            .build_ellipsoid_aligned(20.0, 30.0, tip, DVec3::ZERO, 0.0)
            .unwrap();

        let c = mesh.centroid();
        assert_relative_eq!(c.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.z, 100.0, epsilon = 1e-9);

        // Semi-axes (20, 20, 30) within tessellation tolerance
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(max.x, 20.0, epsilon = 0.5);
        assert_relative_eq!(max.y, 20.0, epsilon = 0.5);
        assert_relative_eq!(max.z - 100.0, 30.0, epsilon = 0.5);
        assert!(mesh.validate());
    }

    #[test]
    fn ellipsoid_centroid_tracks_tip_offset() {
        let mut builder = GeometryBuilder::new();
        let tip = DVec3::new(50.0, 0.0, 0.0);
        let tail = DVec3::new(0.0, 0.0, 0.0);
        let t = 12.5;
        let mesh = builder
            .build_ellipsoid_aligned(20.0, 30.0, tip, tail, t)
            .unwrap();

        let direction = (tip - tail).normalize();
        let expected = tip + direction * t;
        let c = mesh.centroid();
        assert_relative_eq!((c - expected).length(), 0.0, epsilon = 1e-9);
        assert_relative_eq!((c - tip).length(), t.abs(), epsilon = 1e-9);
    }

    #[test]
    fn ellipsoid_long_axis_follows_trajectory() {
        let mut builder = GeometryBuilder::new();
        let tip = DVec3::new(100.0, 0.0, 0.0);
        let mesh = builder
            .build_ellipsoid_aligned(20.0, 30.0, tip, DVec3::ZERO, 0.0)
            .unwrap();

        // Long semi-axis (30) now lies along X, minor (20) along Y and Z
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(max.x - min.x, 60.0, epsilon = 1.0);
        assert_relative_eq!(max.y - min.y, 40.0, epsilon = 1.0);
        assert_relative_eq!(max.z - min.z, 40.0, epsilon = 1.0);
    }

    #[test]
    fn ellipsoid_antiparallel_trajectory_is_finite() {
        let mut builder = GeometryBuilder::new();
        let mesh = builder
            .build_ellipsoid_aligned(20.0, 30.0, DVec3::ZERO, DVec3::new(0.0, 0.0, 80.0), 0.0)
            .unwrap();
        for v in mesh.vertices() {
            assert!(v.x.is_finite() && v.y.is_finite() && v.z.is_finite());
        }
        assert!(mesh.validate());
    }

    #[test]
    fn ellipsoid_rejects_degenerate_axis() {
        let mut builder = GeometryBuilder::new();
        let p = DVec3::new(1.0, 2.0, 3.0);
        let result = builder.build_ellipsoid_aligned(20.0, 30.0, p, p, 0.0);
        assert!(matches!(result, Err(GeometryError::DegenerateAxis)));
    }

    #[test]
    fn ellipsoid_rejects_invalid_axes() {
        let mut builder = GeometryBuilder::new();
        let tip = DVec3::new(0.0, 0.0, 100.0);
        assert!(builder
            .build_ellipsoid_aligned(-20.0, 30.0, tip, DVec3::ZERO, 0.0)
            .is_err());
        assert!(builder
            .build_ellipsoid_aligned(20.0, 0.0, tip, DVec3::ZERO, 0.0)
            .is_err());
    }

    #[test]
    fn ellipsoid_is_idempotent() {
        let mut builder = GeometryBuilder::new();
        let tip = DVec3::new(10.0, 20.0, 30.0);
        let tail = DVec3::new(-5.0, 4.0, 3.0);
        let a = builder
            .build_ellipsoid_aligned(20.0, 30.0, tip, tail, 7.0)
            .unwrap();
        let b = builder
            .build_ellipsoid_aligned(20.0, 30.0, tip, tail, 7.0)
            .unwrap();
        assert_eq!(a.vertices(), b.vertices());
        assert_eq!(a.triangles(), b.triangles());
    }

    #[test]
    fn built_meshes_carry_normals() {
        let mut builder = GeometryBuilder::new();
        let mesh = builder.build_cylinder(700.0, 1200.0, DVec3::ZERO).unwrap();
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), mesh.vertex_count());
    }
}
