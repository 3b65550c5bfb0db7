//! # Configuration Constants
//!
//! Centralized constants for the bore geometry pipeline. All geometry
//! calculations, tessellation parameters, and scanner defaults are defined
//! here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default tessellation parameters for the canonical primitives
//! - **Scanner Defaults**: Typical bore dimensions and offsets
//! - **Display**: Suggested display style handed to the rendering host

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance, and for detecting degenerate inputs such as a
/// zero-length trajectory axis.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Epsilon for zero-area triangle detection during mesh validation.
///
/// Slightly larger tolerance than [`EPSILON`] to absorb the numerical noise
/// a scale/rotate/translate chain introduces into tessellated geometry.
pub const DEGENERATE_TRIANGLE_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of circumferential segments for the canonical cylinder.
///
/// A scanner bore is large (typically 600-800 mm across), so the cylinder
/// uses a finer tessellation than the ellipsoid to keep the faceting error
/// small relative to the geometry it approximates.
pub const DEFAULT_CYLINDER_SEGMENTS: u32 = 60;

/// Default number of azimuthal segments for the canonical sphere.
///
/// The sphere tessellation derives its ring count from this value
/// (`(segments + 1) / 2` rings), giving a 20x10 lat/long grid by default.
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 20;

/// Minimum segment count accepted by any primitive generator.
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// SCANNER DEFAULTS
// =============================================================================

/// Default gantry bore length in millimeters.
///
/// Matches the typical tunnel length of a clinical CT/PET/MRI scanner.
pub const DEFAULT_BORE_LENGTH_MM: f64 = 1200.0;

/// Default gantry bore inner diameter in millimeters.
pub const DEFAULT_BORE_DIAMETER_MM: f64 = 700.0;

/// Default minor semi-axis (mm) of the trajectory-aligned ellipsoid proxy.
pub const DEFAULT_MINOR_AXIS_MM: f64 = 20.0;

/// Default major semi-axis (mm) of the trajectory-aligned ellipsoid proxy.
pub const DEFAULT_MAJOR_AXIS_MM: f64 = 30.0;

// =============================================================================
// DISPLAY CONSTANTS
// =============================================================================

/// Suggested model color (RGB) for the generated proxy mesh.
///
/// The rendering host is free to override this; it is only an initial
/// suggestion delivered alongside each mesh.
pub const DEFAULT_MODEL_COLOR: [f32; 3] = [0.0, 0.0, 1.0];

/// Suggested model opacity for the generated proxy mesh.
pub const DEFAULT_MODEL_OPACITY: f32 = 1.0;
