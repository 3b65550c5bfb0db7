//! # Canonical Primitives
//!
//! Unit-size template meshes (cylinder, sphere) that the builder scales,
//! rotates, and translates into the final proxy solid. Templates are
//! deterministic: the same segment count always yields the same mesh.

pub mod cylinder;
pub mod sphere;

pub use cylinder::unit_cylinder;
pub use sphere::unit_sphere;
