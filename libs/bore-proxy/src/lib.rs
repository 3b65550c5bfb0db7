//! # Bore Proxy
//!
//! Maintains a solid-geometry proxy of a medical scanner's bore/gantry
//! envelope so downstream software can check planned trajectories against
//! the physical workspace.
//!
//! ## Architecture
//!
//! ```text
//! host events → BoreProxy (mutable config + gating)
//!                  → GeometryBuilder (pure, cached templates)
//!                     → bore-mesh (primitives, alignment, Mesh)
//!                  → MeshSink (rendering collaborator)
//! ```
//!
//! Two proxy shapes are supported: an axis-fixed cylinder sized from bore
//! length/diameter, and an ellipsoid oriented along an observed tip/tail
//! trajectory. Coordinates are right-handed RAS (patient Right/Anterior/
//! Superior) in millimeters.
//!
//! ## Usage
//!
//! ```rust
//! use bore_proxy::GeometryBuilder;
//! use glam::DVec3;
//!
//! let mut builder = GeometryBuilder::new();
//! let mesh = builder.build_cylinder(700.0, 1200.0, DVec3::ZERO)?;
//! assert!(mesh.validate());
//! # Ok::<(), bore_mesh::GeometryError>(())
//! ```

pub mod builder;
pub mod display;
pub mod params;
pub mod proxy;

pub use builder::GeometryBuilder;
pub use display::DisplayStyle;
pub use params::{BoreParameters, EllipsoidParameters, TrajectoryAxis};
pub use proxy::{BoreProxy, MeshSink, ProxyConfig, ProxyMode, UpdateOutcome};
