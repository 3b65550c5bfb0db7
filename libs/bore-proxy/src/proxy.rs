//! # Bore Proxy
//!
//! The collaborator-facing object. It owns the mutable configuration the
//! host edits, performs the update gating in one place, and hands finished
//! meshes to the configured [`MeshSink`]. The geometry builder underneath
//! stays unconditional and pure.

use bore_mesh::{GeometryError, Mesh};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::builder::GeometryBuilder;
use crate::display::DisplayStyle;
use crate::params::{BoreParameters, EllipsoidParameters, TrajectoryAxis};

/// Destination for generated proxy meshes.
///
/// Implemented by the rendering collaborator (e.g. a model node wrapper).
/// The mesh is handed over by value; the proxy never retains a reference
/// to a previously delivered mesh.
pub trait MeshSink {
    /// Receives a freshly generated mesh and the suggested display style.
    fn set_mesh(&mut self, mesh: Mesh, style: &DisplayStyle);
}

/// Which proxy shape the update loop generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProxyMode {
    /// Axis-fixed cylinder sized from bore length/diameter
    #[default]
    Cylinder,
    /// Ellipsoid oriented along the observed tip/tail trajectory
    AlignedEllipsoid,
}

/// Result of an update attempt that did not fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A mesh was generated and delivered to the sink
    Delivered,
    /// Automatic update is disabled; the call was a no-op
    AutomaticUpdateDisabled,
    /// No mesh sink is configured yet; nothing to deliver to
    NoSink,
    /// Aligned-ellipsoid mode without a trajectory set yet
    NoTrajectory,
}

/// Serializable snapshot of a proxy's configuration.
///
/// Lets a host persist the proxy alongside its scene (the original host
/// stored these values as model-node attributes) and restore it later.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Shape mode
    pub mode: ProxyMode,
    /// Cylinder shape parameters
    pub bore: BoreParameters,
    /// Ellipsoid shape parameters
    pub ellipsoid: EllipsoidParameters,
    /// Orientation trajectory, if one has been observed
    pub trajectory: Option<TrajectoryAxis>,
    /// Suggested display style
    pub style: DisplayStyle,
    /// Whether parameter changes trigger regeneration
    pub automatic_update: bool,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            mode: ProxyMode::default(),
            bore: BoreParameters::default(),
            ellipsoid: EllipsoidParameters::default(),
            trajectory: None,
            style: DisplayStyle::default(),
            automatic_update: false,
        }
    }
}

/// Maintains the scanner bore proxy for one host session.
///
/// Every setter updates the configuration and then attempts one update.
/// Gating (automatic update disabled, no sink, no trajectory) is checked
/// once per attempt; a validation failure leaves the sink untouched, so
/// the previously delivered mesh stays as-is.
pub struct BoreProxy {
    builder: GeometryBuilder,
    config: ProxyConfig,
    sink: Option<Box<dyn MeshSink>>,
}

impl Default for BoreProxy {
    fn default() -> Self {
        Self::new()
    }
}

impl BoreProxy {
    /// Creates a proxy with default configuration and no sink.
    ///
    /// Automatic update starts disabled, matching the host checkbox it
    /// mirrors.
    pub fn new() -> Self {
        Self::with_config(ProxyConfig::default())
    }

    /// Creates a proxy from a persisted configuration snapshot.
    pub fn with_config(config: ProxyConfig) -> Self {
        Self {
            builder: GeometryBuilder::new(),
            config,
            sink: None,
        }
    }

    /// Returns the current configuration snapshot.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }

    /// Installs the mesh destination and attempts an update.
    pub fn set_sink(
        &mut self,
        sink: Box<dyn MeshSink>,
    ) -> Result<UpdateOutcome, GeometryError> {
        self.sink = Some(sink);
        self.update()
    }

    /// Removes the mesh destination. Subsequent updates are skipped.
    pub fn clear_sink(&mut self) {
        self.sink = None;
    }

    /// Enables or disables automatic regeneration, then attempts an update.
    pub fn enable_automatic_update(
        &mut self,
        enabled: bool,
    ) -> Result<UpdateOutcome, GeometryError> {
        self.config.automatic_update = enabled;
        self.update()
    }

    /// Selects the proxy shape mode, then attempts an update.
    pub fn set_mode(&mut self, mode: ProxyMode) -> Result<UpdateOutcome, GeometryError> {
        self.config.mode = mode;
        self.update()
    }

    /// Sets bore length and diameter (mm), then attempts an update.
    pub fn set_size(
        &mut self,
        length: f64,
        diameter: f64,
    ) -> Result<UpdateOutcome, GeometryError> {
        self.config.bore.length = length;
        self.config.bore.diameter = diameter;
        self.update()
    }

    /// Sets the gantry center offset from the isocenter (RAS mm),
    /// then attempts an update.
    pub fn set_center_offset(&mut self, offset: DVec3) -> Result<UpdateOutcome, GeometryError> {
        self.config.bore.offset = offset;
        self.update()
    }

    /// Sets the ellipsoid semi-axes (mm), then attempts an update.
    pub fn set_ellipsoid_axes(
        &mut self,
        minor_axis: f64,
        major_axis: f64,
    ) -> Result<UpdateOutcome, GeometryError> {
        self.config.ellipsoid.minor_axis = minor_axis;
        self.config.ellipsoid.major_axis = major_axis;
        self.update()
    }

    /// Sets the tip offset along the trajectory (mm), then attempts an update.
    pub fn set_tip_offset(&mut self, tip_offset: f64) -> Result<UpdateOutcome, GeometryError> {
        self.config.ellipsoid.tip_offset = tip_offset;
        self.update()
    }

    /// Sets the observed trajectory axis, then attempts an update.
    pub fn set_trajectory(
        &mut self,
        tip: DVec3,
        tail: DVec3,
    ) -> Result<UpdateOutcome, GeometryError> {
        self.config.trajectory = Some(TrajectoryAxis::new(tip, tail));
        self.update()
    }

    /// Toggles the slice-intersection display suggestion, then attempts an
    /// update so the sink sees the new style.
    pub fn enable_slice_intersection(
        &mut self,
        enabled: bool,
    ) -> Result<UpdateOutcome, GeometryError> {
        self.config.style.slice_intersection = enabled;
        self.update()
    }

    /// Attempts one proxy regeneration.
    ///
    /// This is the single gating site: automatic update disabled and a
    /// missing sink (or missing trajectory in aligned mode) are normal
    /// skips, not errors. Validation failures are returned without
    /// touching the sink.
    pub fn update(&mut self) -> Result<UpdateOutcome, GeometryError> {
        if !self.config.automatic_update {
            return Ok(UpdateOutcome::AutomaticUpdateDisabled);
        }
        if self.sink.is_none() {
            return Ok(UpdateOutcome::NoSink);
        }

        let mesh = match self.config.mode {
            ProxyMode::Cylinder => {
                let bore = self.config.bore;
                self.builder
                    .build_cylinder(bore.diameter, bore.length, bore.offset)?
            }
            ProxyMode::AlignedEllipsoid => {
                let Some(axis) = self.config.trajectory else {
                    return Ok(UpdateOutcome::NoTrajectory);
                };
                let ellipsoid = self.config.ellipsoid;
                self.builder.build_ellipsoid_aligned(
                    ellipsoid.minor_axis,
                    ellipsoid.major_axis,
                    axis.tip,
                    axis.tail,
                    ellipsoid.tip_offset,
                )?
            }
        };

        if let Some(sink) = self.sink.as_mut() {
            sink.set_mesh(mesh, &self.config.style);
        }

        Ok(UpdateOutcome::Delivered)
    }
}
