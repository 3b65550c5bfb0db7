//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_degenerate_triangle_epsilon_larger_than_epsilon() {
    assert!(
        DEGENERATE_TRIANGLE_EPSILON >= EPSILON,
        "DEGENERATE_TRIANGLE_EPSILON should be >= EPSILON"
    );
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_segments_above_minimum() {
    assert!(DEFAULT_CYLINDER_SEGMENTS >= MIN_SEGMENTS);
    assert!(DEFAULT_SPHERE_SEGMENTS >= MIN_SEGMENTS);
}

#[test]
fn test_min_segments_forms_a_polygon() {
    // Three segments is the smallest closed cross-section
    assert_eq!(MIN_SEGMENTS, 3);
}

// =============================================================================
// SCANNER DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_bore_dimensions_are_positive() {
    assert!(DEFAULT_BORE_LENGTH_MM > 0.0);
    assert!(DEFAULT_BORE_DIAMETER_MM > 0.0);
}

#[test]
fn test_default_bore_is_longer_than_wide() {
    // A scanner tunnel is longer than its diameter
    assert!(DEFAULT_BORE_LENGTH_MM > DEFAULT_BORE_DIAMETER_MM);
}

#[test]
fn test_default_ellipsoid_axes_are_positive() {
    assert!(DEFAULT_MINOR_AXIS_MM > 0.0);
    assert!(DEFAULT_MAJOR_AXIS_MM > 0.0);
    assert!(DEFAULT_MAJOR_AXIS_MM >= DEFAULT_MINOR_AXIS_MM);
}

// =============================================================================
// DISPLAY TESTS
// =============================================================================

#[test]
fn test_default_color_components_in_range() {
    for c in DEFAULT_MODEL_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn test_default_opacity_in_range() {
    assert!((0.0..=1.0).contains(&DEFAULT_MODEL_OPACITY));
}
