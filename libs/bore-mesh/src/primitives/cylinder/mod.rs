//! # Cylinder Primitive
//!
//! Generates the canonical unit cylinder template.

use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

use crate::error::GeometryError;
use crate::mesh::Mesh;


/// Creates the canonical unit cylinder mesh.
///
/// Radius 1, height 1, centered at the origin with its axis along +Z
/// (z from -0.5 to 0.5), closed with flat cap fans on both ends. The
/// builder scales this template by `(d/2, d/2, length)` to produce a bore
/// of diameter `d` and length `length`.
///
/// # Arguments
///
/// * `segments` - Number of segments around the circumference
///
/// # Errors
///
/// Returns [`GeometryError::InvalidResolution`] when `segments < 3`.
///
/// # Example
///
/// ```rust
/// use bore_mesh::primitives::unit_cylinder;
///
/// let mesh = unit_cylinder(60)?;
/// assert!(mesh.validate());
/// # Ok::<(), bore_mesh::GeometryError>(())
/// ```
pub fn unit_cylinder(segments: u32) -> Result<Mesh, GeometryError> {
    if segments < MIN_SEGMENTS {
        return Err(GeometryError::invalid_resolution(segments));
    }

    let vertex_count = (segments * 2) as usize;
    let triangle_count = (segments * 4 - 4) as usize;
    let mut mesh = Mesh::with_capacity(vertex_count, triangle_count);

    let (z_bottom, z_top) = (-0.5, 0.5);

    let bottom_indices: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(theta.cos(), theta.sin(), z_bottom))
        })
        .collect();

    let top_indices: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(theta.cos(), theta.sin(), z_top))
        })
        .collect();

    // Side wall: two triangles per quad between the rings
    for j in 0..segments {
        let j_next = (j + 1) % segments;

        let b0 = bottom_indices[j as usize];
        let b1 = bottom_indices[j_next as usize];
        let t0 = top_indices[j as usize];
        let t1 = top_indices[j_next as usize];

        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Bottom cap, wound to face -Z
    for j in 1..segments - 1 {
        mesh.add_triangle(
            bottom_indices[0],
            bottom_indices[(j + 1) as usize],
            bottom_indices[j as usize],
        );
    }

    // Top cap, wound to face +Z
    for j in 1..segments - 1 {
        mesh.add_triangle(
            top_indices[0],
            top_indices[j as usize],
            top_indices[(j + 1) as usize],
        );
    }

    Ok(mesh)
}
