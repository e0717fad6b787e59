//! # Plane for BSP Operations
//!
//! Oriented plane with point classification.

use config::constants::PLANE_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point or polygon relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// In front of the plane (positive side).
    Front,
    /// Behind the plane (negative side).
    Back,
    /// On the plane, within `PLANE_EPSILON`.
    Coplanar,
    /// A polygon with vertices on both sides.
    Spanning,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal · p = w` with unit normal pointing to the front side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal vector.
    pub normal: DVec3,
    /// Distance from origin along normal.
    pub w: f64,
}

impl Plane {
    /// Create plane from three points, counter-clockwise when viewed from
    /// the front.
    ///
    /// Returns `None` for collinear or coincident points.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Reverse the plane's orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from point to plane.
    ///
    /// Positive = front, negative = back.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classify a point relative to this plane.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > PLANE_EPSILON {
            Classification::Front
        } else if dist < -PLANE_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_from_points() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();
        assert_eq!(plane.normal, DVec3::Z);
        assert_eq!(plane.w, 0.0);
    }

    #[test]
    fn test_plane_from_collinear_points() {
        assert!(Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::X * 2.0).is_none());
    }

    #[test]
    fn test_plane_classify_point() {
        let plane = Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap();

        assert_eq!(plane.classify_point(DVec3::Z), Classification::Front);
        assert_eq!(plane.classify_point(-DVec3::Z), Classification::Back);
        assert_eq!(
            plane.classify_point(DVec3::new(3.0, 4.0, PLANE_EPSILON / 2.0)),
            Classification::Coplanar
        );
    }

    #[test]
    fn test_plane_flip() {
        let mut plane = Plane::from_points(DVec3::Z, DVec3::Z + DVec3::X, DVec3::Z + DVec3::Y)
            .unwrap();
        plane.flip();

        assert_eq!(plane.normal, -DVec3::Z);
        assert_eq!(plane.w, -1.0);
        assert_eq!(plane.classify_point(DVec3::ZERO), Classification::Front);
    }
}
