//! # Extrusion Operations
//!
//! Linear extrusion of 2D polygons along the Z axis. Callers that need the
//! prism along another axis transform the resulting mesh.

mod linear;

#[cfg(test)]
mod tests;

pub use linear::{linear_extrude, LinearExtrudeParams};

use glam::DVec2;

/// A 2D polygon for extrusion operations.
///
/// Represents a closed 2D shape that can be extruded into 3D. Either winding
/// is accepted; extrusion orients the boundary itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Outer boundary vertices
    pub outer: Vec<DVec2>,
    /// Optional holes
    pub holes: Vec<Vec<DVec2>>,
}

impl Polygon2D {
    /// Creates a new polygon from outer boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gingerbread_mesh::Polygon2D;
    /// use glam::DVec2;
    ///
    /// let triangle = Polygon2D::new(vec![
    ///     DVec2::new(0.0, 0.0),
    ///     DVec2::new(1.0, 0.0),
    ///     DVec2::new(0.0, 1.0),
    /// ]);
    /// assert_eq!(triangle.vertex_count(), 3);
    /// ```
    pub fn new(outer: Vec<DVec2>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Creates a polygon with holes.
    pub fn with_holes(outer: Vec<DVec2>, holes: Vec<Vec<DVec2>>) -> Self {
        Self { outer, holes }
    }

    /// Creates a rectangle.
    ///
    /// # Arguments
    ///
    /// * `size` - Width and height
    /// * `center` - If true, center at origin; otherwise corner at origin
    pub fn rectangle(size: DVec2, center: bool) -> Self {
        let origin = if center { -size / 2.0 } else { DVec2::ZERO };

        Self::new(vec![
            origin,
            origin + DVec2::new(size.x, 0.0),
            origin + size,
            origin + DVec2::new(0.0, size.y),
        ])
    }

    /// Returns the number of vertices in the outer boundary.
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// Returns true if the polygon has holes.
    pub fn has_holes(&self) -> bool {
        !self.holes.is_empty()
    }

    /// Signed area of the outer boundary minus the holes' areas
    /// (shoelace formula). Positive when the outer ring is counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let outer = ring_signed_area(&self.outer);
        let holes: f64 = self.holes.iter().map(|h| ring_signed_area(h).abs()).sum();
        if outer >= 0.0 {
            outer - holes
        } else {
            outer + holes
        }
    }
}

/// Shoelace signed area of a closed ring.
pub(crate) fn ring_signed_area(ring: &[DVec2]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let n = ring.len();
    (0..n)
        .map(|i| ring[i].perp_dot(ring[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}
