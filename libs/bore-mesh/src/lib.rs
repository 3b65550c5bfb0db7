//! # Bore Mesh
//!
//! Mesh generation for a scanner bore/gantry proxy solid.
//! Produces closed triangle meshes that a downstream collision checker or
//! rendering host can consume.
//!
//! ## Architecture
//!
//! ```text
//! canonical primitive (unit cylinder/sphere)
//!       → scale → align (rotate + translate) → Mesh
//! ```
//!
//! All geometry is f64 in millimeters, right-handed RAS
//! (patient Right/Anterior/Superior) coordinates. Conversion to f32 only
//! happens at the export boundary for rendering consumers.
//!
//! ## Usage
//!
//! ```rust
//! use bore_mesh::primitives::unit_cylinder;
//!
//! let mesh = unit_cylinder(60)?;
//! assert!(mesh.validate());
//! # Ok::<(), bore_mesh::GeometryError>(())
//! ```

pub mod align;
pub mod error;
pub mod mesh;
pub mod primitives;

pub use align::align_to_axis;
pub use error::GeometryError;
pub use mesh::Mesh;
