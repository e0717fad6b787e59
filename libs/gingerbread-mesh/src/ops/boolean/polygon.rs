//! # Polygon for BSP Operations
//!
//! Convex planar polygon with plane splitting.

use super::plane::{Classification, Plane};
use glam::DVec3;

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with its supporting plane.
///
/// Pieces produced by splitting keep the plane of the polygon they came
/// from, so repeated splitting never re-derives a plane from slivers.
#[derive(Debug, Clone)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    pub vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    pub plane: Plane,
}

/// Where a polygon ended up relative to a splitting plane.
#[derive(Debug)]
pub enum Split {
    /// On the plane, facing the same way.
    CoplanarFront(Polygon),
    /// On the plane, facing the opposite way.
    CoplanarBack(Polygon),
    /// Entirely in front.
    Front(Polygon),
    /// Entirely behind.
    Back(Polygon),
    /// Cut in two; either half may vanish if it was only a sliver.
    Spanning {
        front: Option<Polygon>,
        back: Option<Polygon>,
    },
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns `None` when the first three vertices do not span a plane.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Reverse winding order and plane.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        let mut front = false;
        let mut back = false;
        for v in &self.vertices {
            match plane.classify_point(*v) {
                Classification::Front => front = true,
                Classification::Back => back = true,
                _ => {}
            }
        }
        match (front, back) {
            (true, true) => Classification::Spanning,
            (true, false) => Classification::Front,
            (false, true) => Classification::Back,
            (false, false) => Classification::Coplanar,
        }
    }

    /// Split polygon by a plane.
    pub fn split(self, plane: &Plane) -> Split {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    Split::CoplanarFront(self)
                } else {
                    Split::CoplanarBack(self)
                }
            }
            Classification::Front => Split::Front(self),
            Classification::Back => Split::Back(self),
            Classification::Spanning => {
                let n = self.vertices.len();
                let mut front_verts = Vec::with_capacity(n + 1);
                let mut back_verts = Vec::with_capacity(n + 1);

                for i in 0..n {
                    let vi = self.vertices[i];
                    let vj = self.vertices[(i + 1) % n];
                    let ti = plane.classify_point(vi);
                    let tj = plane.classify_point(vj);

                    if ti != Classification::Back {
                        front_verts.push(vi);
                    }
                    if ti != Classification::Front {
                        back_verts.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = plane.signed_distance(vi);
                        let dj = plane.signed_distance(vj);
                        let point = vi.lerp(vj, di / (di - dj));
                        front_verts.push(point);
                        back_verts.push(point);
                    }
                }

                let plane = self.plane;
                let piece = |vertices: Vec<DVec3>| {
                    (vertices.len() >= 3).then_some(Polygon { vertices, plane })
                };
                Split::Spanning {
                    front: piece(front_verts),
                    back: piece(back_verts),
                }
            }
        }
    }

    /// Area of the polygon.
    #[cfg(test)]
    pub fn area(&self) -> f64 {
        let origin = self.vertices[0];
        self.vertices
            .windows(2)
            .skip(1)
            .map(|w| (w[0] - origin).cross(w[1] - origin).dot(self.plane.normal))
            .sum::<f64>()
            * 0.5
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.5, 1.0, z),
        ])
        .unwrap()
    }

    fn z_plane() -> Plane {
        Plane::from_points(DVec3::ZERO, DVec3::X, DVec3::Y).unwrap()
    }

    #[test]
    fn test_polygon_from_too_few_vertices() {
        assert!(Polygon::from_vertices(vec![DVec3::ZERO, DVec3::X]).is_none());
    }

    #[test]
    fn test_polygon_flip() {
        let poly = triangle_at(0.0);
        let mut flipped = poly.clone();
        flipped.flip();

        assert_eq!(flipped.vertices[0], poly.vertices[2]);
        assert_eq!(flipped.plane.normal, -poly.plane.normal);
    }

    #[test]
    fn test_polygon_classify() {
        let plane = z_plane();
        assert_eq!(triangle_at(1.0).classify(&plane), Classification::Front);
        assert_eq!(triangle_at(-1.0).classify(&plane), Classification::Back);
        assert_eq!(triangle_at(0.0).classify(&plane), Classification::Coplanar);
    }

    #[test]
    fn test_polygon_split_coplanar_orientation() {
        let plane = z_plane();
        assert!(matches!(triangle_at(0.0).split(&plane), Split::CoplanarFront(_)));

        let mut reversed = triangle_at(0.0);
        reversed.flip();
        assert!(matches!(reversed.split(&plane), Split::CoplanarBack(_)));
    }

    #[test]
    fn test_polygon_split_spanning_preserves_area() {
        // Vertical triangle crossing z = 0
        let poly = Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(2.0, 0.0, -1.0),
            DVec3::new(1.0, 0.0, 1.0),
        ])
        .unwrap();
        let total = poly.area();

        match poly.split(&z_plane()) {
            Split::Spanning {
                front: Some(front),
                back: Some(back),
            } => {
                assert_eq!(front.vertices.len(), 3);
                assert_eq!(back.vertices.len(), 4);
                assert!((front.area() + back.area() - total).abs() < 1e-12);
                assert!(front.vertices.iter().all(|v| v.z >= -1e-12));
                assert!(back.vertices.iter().all(|v| v.z <= 1e-12));
            }
            other => panic!("expected a spanning split, got {other:?}"),
        }
    }
}
