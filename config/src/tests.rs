//! # Tests for Config Constants

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_vertex_merge_epsilon_larger_than_epsilon() {
    assert!(
        VERTEX_MERGE_EPSILON >= EPSILON,
        "VERTEX_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_edge_snap_between_weld_and_plane_epsilon() {
    assert!(VERTEX_MERGE_EPSILON < EDGE_SNAP_EPSILON);
    assert!(EDGE_SNAP_EPSILON < PLANE_EPSILON);
}

#[test]
fn test_plane_epsilon_below_smallest_feature() {
    // Tab tolerance is the smallest intentional gap in the house
    let smallest_feature = defaults::TAB_TOLERANCE * INCH_TO_MM;
    assert!(PLANE_EPSILON * 1000.0 < smallest_feature);
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_inch_to_mm() {
    assert_eq!(INCH_TO_MM, 25.4);
}

#[test]
fn test_cut_margin_positive() {
    assert!(DEFAULT_CUT_MARGIN_MM > 0.0);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_arch_segments() {
    assert_eq!(ARCH_SEGMENTS, 16);
}

// =============================================================================
// FASTENER TESTS
// =============================================================================

#[test]
fn test_tab_span_fractions_are_symmetric() {
    let [low, high] = TAB_SPAN_FRACTIONS;
    assert!(low < high);
    assert!((low + high - 1.0).abs() < EPSILON);
}

#[test]
fn test_roof_tab_fraction_inside_panel() {
    assert!(ROOF_TAB_FRACTION > 0.0 && ROOF_TAB_FRACTION < 0.5);
}

// =============================================================================
// DEFAULT DIMENSION TESTS
// =============================================================================

#[test]
fn test_default_openings_fit_wall() {
    assert!(defaults::DOOR_HEIGHT + defaults::DOOR_OFFSET <= defaults::WALL_HEIGHT);
    assert!(defaults::WINDOW_HEIGHT + defaults::WINDOW_OFFSET <= defaults::WALL_HEIGHT);
}

#[test]
fn test_default_tabs_fit_wall() {
    assert!(defaults::TAB_HEIGHT < defaults::WALL_HEIGHT / 2.0);
}

#[test]
fn test_default_chimney_has_cavity() {
    let chimney_wall = defaults::WALL_THICKNESS / 2.0;
    assert!(defaults::CHIMNEY_WIDTH > 2.0 * chimney_wall);
    assert!(defaults::CHIMNEY_DEPTH > 2.0 * chimney_wall);
}

// =============================================================================
// EXPORT TESTS
// =============================================================================

#[test]
fn test_part_file_prefix() {
    assert!(PART_FILE_PREFIX.ends_with('_'));
    assert_eq!(STL_EXTENSION, "stl");
}

#[test]
fn test_stl_header_size() {
    assert_eq!(STL_HEADER_BYTES, 80);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stacker_sizes() {
    assert!(STACKER_STACK_SIZE_BYTES > STACKER_RED_ZONE_BYTES);
}
