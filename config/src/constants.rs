//! # Configuration Constants
//!
//! Centralized constants for the gingerbread part generator. All geometry
//! tolerances, tessellation resolution, fastener placement rules and default
//! dimensions are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Units**: Conversion from input units to millimetres
//! - **Resolution**: Arch sampling
//! - **Fasteners**: Tab placement fractions
//! - **Defaults**: The reference house, in inches
//! - **Export**: File naming
//! - **Limits**: Stack growth for recursive BSP traversal

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
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

/// Coplanarity tolerance used by the BSP boolean kernel, in millimetres.
///
/// A vertex whose signed distance to a splitting plane is within this
/// tolerance is classified as lying on the plane. Faces that are meant to
/// coincide (a tab flush against a wall face) land inside this band, while
/// the smallest real feature of the house (tab tolerance, 0.254 mm) is four
/// orders of magnitude larger.
///
/// # Example
///
/// ```rust
/// use config::constants::PLANE_EPSILON;
///
/// let distance_to_plane = 3.0e-6;
/// assert!(distance_to_plane < PLANE_EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1e-5;

/// Epsilon for vertex deduplication and zero-length edge detection.
///
/// Two profile points closer than this are considered the same point.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn vertices_should_merge(v1: [f64; 2], v2: [f64; 2]) -> bool {
///     let dx = v1[0] - v2[0];
///     let dy = v1[1] - v2[1];
///     (dx * dx + dy * dy).sqrt() < VERTEX_MERGE_EPSILON
/// }
///
/// assert!(vertices_should_merge([1.0, 1.0], [1.0, 1.0 + 1e-12]));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Distance within which a vertex counts as lying on a mesh edge.
///
/// Boolean results split an edge at every welded vertex closer to it than
/// this, so faces cut on one side of an edge still share it with the
/// uncut face on the other side.
///
/// # Example
///
/// ```rust
/// use config::constants::{EDGE_SNAP_EPSILON, PLANE_EPSILON, VERTEX_MERGE_EPSILON};
///
/// assert!(VERTEX_MERGE_EPSILON < EDGE_SNAP_EPSILON);
/// assert!(EDGE_SNAP_EPSILON < PLANE_EPSILON);
/// ```
pub const EDGE_SNAP_EPSILON: f64 = 1e-6;

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Millimetres per inch.
///
/// Input measurements are converted with this factor exactly once, when a
/// dimension set is constructed.
///
/// # Example
///
/// ```rust
/// use config::constants::INCH_TO_MM;
///
/// let wall_thickness_mm = 0.15 * INCH_TO_MM;
/// assert!((wall_thickness_mm - 3.81).abs() < 1e-9);
/// ```
pub const INCH_TO_MM: f64 = 25.4;

/// Default over-size margin for cutting tools, in millimetres.
///
/// Openings are extruded this much deeper than the material they pass
/// through so no cutting face coincides with a wall face.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CUT_MARGIN_MM;
///
/// let wall = 3.81;
/// let cutter_depth = wall + DEFAULT_CUT_MARGIN_MM;
/// assert!(cutter_depth > wall);
/// ```
pub const DEFAULT_CUT_MARGIN_MM: f64 = 1.0;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Number of angular segments used to sample an arch cap.
///
/// The cap sweeps π radians, so each segment spans π / 16. An arch outline
/// carries `ARCH_SEGMENTS - 1` interior samples.
///
/// # Example
///
/// ```rust
/// use config::constants::ARCH_SEGMENTS;
///
/// let interior_samples = ARCH_SEGMENTS - 1;
/// assert_eq!(interior_samples, 15);
/// ```
pub const ARCH_SEGMENTS: usize = 16;

// =============================================================================
// FASTENER CONSTANTS
// =============================================================================

/// Fractions of an edge's span at which tabs and slots are centred.
///
/// Shared by every part so that a tab-emitting edge and the slot-receiving
/// edge opposite it line up whenever they share a span.
///
/// # Example
///
/// ```rust
/// use config::constants::TAB_SPAN_FRACTIONS;
///
/// let span = 76.2;
/// let z: Vec<f64> = TAB_SPAN_FRACTIONS.iter().map(|f| f * span).collect();
/// assert!((z[0] - 19.05).abs() < 1e-9);
/// assert!((z[1] - 57.15).abs() < 1e-9);
/// ```
pub const TAB_SPAN_FRACTIONS: [f64; 2] = [0.25, 0.75];

/// Fraction of a roof panel's width at which its tabs sit, either side of
/// the panel centre.
pub const ROOF_TAB_FRACTION: f64 = 0.25;

// =============================================================================
// DEFAULT DIMENSIONS (inches)
// =============================================================================

/// The reference house, in inches.
///
/// These are inputs, not geometry: they are converted to millimetres once
/// by the dimension set.
pub mod defaults {
    /// Wall thickness (about 4 mm).
    pub const WALL_THICKNESS: f64 = 0.15;
    /// Front/back wall width.
    pub const HOUSE_WIDTH: f64 = 4.0;
    /// Side wall depth.
    pub const HOUSE_DEPTH: f64 = 3.0;
    /// Wall height up to the roof line.
    pub const WALL_HEIGHT: f64 = 3.0;
    /// Height of the gable peak above the walls.
    pub const PEAK_HEIGHT: f64 = 1.5;

    pub const DOOR_WIDTH: f64 = 0.8;
    pub const DOOR_HEIGHT: f64 = 1.5;
    /// Door sill height above the bottom of the wall.
    pub const DOOR_OFFSET: f64 = 0.1;

    pub const WINDOW_WIDTH: f64 = 0.6;
    pub const WINDOW_HEIGHT: f64 = 0.6;
    /// Window sill height above the bottom of the wall.
    pub const WINDOW_OFFSET: f64 = 1.2;

    /// How far the roof extends past the walls.
    pub const ROOF_OVERHANG: f64 = 0.3;
    pub const ROOF_THICKNESS: f64 = 0.15;

    pub const CHIMNEY_WIDTH: f64 = 0.6;
    pub const CHIMNEY_DEPTH: f64 = 0.5;
    pub const CHIMNEY_HEIGHT: f64 = 1.0;

    pub const TAB_WIDTH: f64 = 0.3;
    /// How far a tab protrudes.
    pub const TAB_DEPTH: f64 = 0.15;
    pub const TAB_HEIGHT: f64 = 0.3;
    /// Clearance added on every side of a slot.
    pub const TAB_TOLERANCE: f64 = 0.01;

    pub const SIGN_WIDTH: f64 = 8.0;
    pub const SIGN_HEIGHT: f64 = 6.0;
    pub const SIGN_DEPTH: f64 = 1.0;
    /// Extrusion depth of the sign lettering.
    pub const SIGN_TEXT_HEIGHT: f64 = 0.5;
    /// Approximate letter height.
    pub const SIGN_FONT_SIZE: f64 = 1.0;
    /// Backing plate width per character when no glyphs are available.
    pub const SIGN_BACKING_WIDTH_PER_CHAR: f64 = 0.7;
}

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// File name prefix shared by every exported house part.
///
/// # Example
///
/// ```rust
/// use config::constants::PART_FILE_PREFIX;
///
/// let name = format!("{PART_FILE_PREFIX}front_wall.stl");
/// assert_eq!(name, "gingerbread_front_wall.stl");
/// ```
pub const PART_FILE_PREFIX: &str = "gingerbread_";

/// Extension of exported mesh files.
pub const STL_EXTENSION: &str = "stl";

/// Size of the fixed header at the start of a binary STL file.
pub const STL_HEADER_BYTES: usize = 80;

/// Default greeting on the holiday sign.
pub const DEFAULT_SIGN_TEXT: &str = "Happy Holidays";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack, in bytes, below which recursive BSP traversal grows
/// the stack.
///
/// The `stacker` crate is used to handle deep recursion safely.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Size of each new stack segment allocated by `stacker`.
pub const STACKER_STACK_SIZE_BYTES: usize = 4 * 1024 * 1024;

/// Maximum number of triangles in a single mesh.
///
/// Safety limit to prevent memory exhaustion from runaway boolean splitting.
pub const MAX_TRIANGLES: usize = 10_000_000;
