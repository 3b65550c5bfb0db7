//! # Sphere Primitive
//!
//! Generates the canonical unit sphere template using latitude/longitude
//! tessellation.

use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

use crate::error::GeometryError;
use crate::mesh::Mesh;

/// Creates the canonical unit sphere mesh.
///
/// Radius 1, centered at the origin. The builder scales this template by
/// `(minor, minor, major)` to form a Z-aligned ellipsoid.
///
/// # Arguments
///
/// * `segments` - Number of segments around the circumference
///
/// # Algorithm
///
/// Lat/long tessellation without pole vertices:
/// - `num_rings = (segments + 1) / 2`
/// - Ring `i` sits at polar angle `phi = PI * (i + 0.5) / num_rings`
/// - The first and last rings are closed with polygon cap fans
///
/// # Errors
///
/// Returns [`GeometryError::InvalidResolution`] when `segments < 3`.
///
/// # Example
///
/// ```rust
/// use bore_mesh::primitives::unit_sphere;
///
/// let mesh = unit_sphere(20)?;
/// assert!(mesh.validate());
/// # Ok::<(), bore_mesh::GeometryError>(())
/// ```
pub fn unit_sphere(segments: u32) -> Result<Mesh, GeometryError> {
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::invalid_resolution(segments));
    }

    let num_rings = (segments + 1) / 2;
    let mut mesh = Mesh::with_capacity((num_rings * segments) as usize, 0);

    // Generate vertices for each ring
    let mut rings: Vec<Vec<u32>> = Vec::with_capacity(num_rings as usize);

    for i in 0..num_rings {
        // Polar angle (0 = top, PI = bottom), offset half a step from the poles
        let phi = PI * (i as f64 + 0.5) / num_rings as f64;
        let ring_radius = phi.sin();
        let z = phi.cos();

        let mut ring_indices = Vec::with_capacity(segments as usize);

        for j in 0..segments {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let x = ring_radius * theta.cos();
            let y = ring_radius * theta.sin();

            ring_indices.push(mesh.add_vertex(DVec3::new(x, y, z)));
        }

        rings.push(ring_indices);
    }

    // Top cap (first ring as polygon fan)
    let first_ring = &rings[0];
    for j in 1..segments - 1 {
        mesh.add_triangle(
            first_ring[0],
            first_ring[j as usize],
            first_ring[(j + 1) as usize],
        );
    }

    // Middle bands (quads between adjacent rings)
    for i in 0..num_rings - 1 {
        let ring_a = &rings[i as usize];
        let ring_b = &rings[(i + 1) as usize];

        for j in 0..segments {
            let j_next = (j + 1) % segments;

            let a0 = ring_a[j as usize];
            let a1 = ring_a[j_next as usize];
            let b0 = ring_b[j as usize];
            let b1 = ring_b[j_next as usize];

            mesh.add_triangle(a0, b0, b1);
            mesh.add_triangle(a0, b1, a1);
        }
    }

    // Bottom cap (last ring as polygon fan, reversed)
    let last_ring = &rings[(num_rings - 1) as usize];
    for j in 1..segments - 1 {
        mesh.add_triangle(
            last_ring[0],
            last_ring[(j + 1) as usize],
            last_ring[j as usize],
        );
    }

    Ok(mesh)
}
