//! # Profile Generator
//!
//! Closed 2D outlines in the wall plane: x runs along the wall, y is the
//! height above its base. Openings are extruded from these outlines into
//! cutting tools; the gable outline becomes the side wall itself.
//!
//! Every [`Profile`] is checked on construction, so downstream code can
//! assume a simple polygon with non-zero area.


use crate::error::HouseError;
use crate::solid::Solid;
use config::constants::{ARCH_SEGMENTS, VERTEX_MERGE_EPSILON};
use gingerbread_mesh::Polygon2D;
use glam::DVec2;
use robust::{orient2d, Coord};
use std::f64::consts::PI;

/// A validated simple polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    points: Vec<DVec2>,
}

impl Profile {
    /// Validates `points` as a closed simple polygon.
    ///
    /// Points are kept in the given order; either winding is accepted.
    ///
    /// # Errors
    ///
    /// [`HouseError::InvalidGeometry`] for fewer than 3 points, non-finite
    /// coordinates, zero-length edges, zero area, or crossing edges.
    pub fn new(points: Vec<DVec2>) -> Result<Self, HouseError> {
        if points.len() < 3 {
            return Err(HouseError::invalid_geometry(format!(
                "profile needs at least 3 points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(HouseError::invalid_geometry("profile has non-finite points"));
        }
        let n = points.len();
        if let Some(i) = (0..n).find(|&i| points[i].distance(points[(i + 1) % n]) < VERTEX_MERGE_EPSILON)
        {
            return Err(HouseError::invalid_geometry(format!(
                "profile edge {i} has zero length"
            )));
        }

        let profile = Self { points };
        if profile.area() < VERTEX_MERGE_EPSILON {
            return Err(HouseError::invalid_geometry("profile has zero area"));
        }
        if let Some((i, j)) = profile.first_crossing() {
            return Err(HouseError::invalid_geometry(format!(
                "profile edges {i} and {j} intersect"
            )));
        }
        Ok(profile)
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; a profile has at least 3 points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Shoelace area, positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        self.as_polygon().signed_area()
    }

    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// True if mirroring across x = 0 maps the point set onto itself.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        self.points.iter().all(|p| {
            let mirrored = DVec2::new(-p.x, p.y);
            self.points
                .iter()
                .any(|q| q.distance(mirrored) <= tolerance)
        })
    }

    /// Kernel polygon for extrusion.
    pub fn as_polygon(&self) -> Polygon2D {
        Polygon2D::new(self.points.clone())
    }

    fn edge(&self, i: usize) -> (DVec2, DVec2) {
        (self.points[i], self.points[(i + 1) % self.points.len()])
    }

    /// First pair of non-adjacent edges that touch or cross.
    fn first_crossing(&self) -> Option<(usize, usize)> {
        let n = self.points.len();
        for i in 0..n {
            for j in i + 2..n {
                // Edges 0 and n-1 share the closing vertex
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (p1, p2) = self.edge(i);
                let (q1, q2) = self.edge(j);
                if segments_intersect(p1, p2, q1, q2) {
                    return Some((i, j));
                }
            }
        }
        None
    }
}

fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

fn orientation(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    orient2d(coord(a), coord(b), coord(c))
}

/// `p` lies within the bounding box of segment `a`–`b`; only meaningful
/// when the three points are collinear.
fn within_segment_bounds(a: DVec2, b: DVec2, p: DVec2) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

fn segments_intersect(p1: DVec2, p2: DVec2, q1: DVec2, q2: DVec2) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && within_segment_bounds(q1, q2, p1))
        || (d2 == 0.0 && within_segment_bounds(q1, q2, p2))
        || (d3 == 0.0 && within_segment_bounds(p1, p2, q1))
        || (d4 == 0.0 && within_segment_bounds(p1, p2, q2))
}

/// Outline of an arched opening, base centred on the origin.
///
/// A rectangle of `height − arch_height` capped by a half-ellipse of
/// half-width `width / 2` and rise `arch_height`. `arch_height` defaults to
/// `width / 2` (a semicircle) and is clamped to `height`. When the arch
/// takes the full height there is no rectangular part and the outline has
/// no shoulder points.
///
/// Points run bottom-left, up the left side, over the arch and down to
/// bottom-right. The curve is sampled with [`ARCH_SEGMENTS`] segments and
/// mirrored so the outline is exactly symmetric.
///
/// # Example
///
/// ```rust
/// use gingerbread_house::profile::arch_profile;
///
/// let door = arch_profile(20.32, 38.1, None).unwrap();
/// assert_eq!(door.len(), 19);
/// assert!(door.is_symmetric(0.0));
///
/// let round = arch_profile(10.0, 5.0, None).unwrap();
/// assert_eq!(round.len(), 17);
/// ```
pub fn arch_profile(
    width: f64,
    height: f64,
    arch_height: Option<f64>,
) -> Result<Profile, HouseError> {
    require_positive("arch width", width)?;
    require_positive("arch height", height)?;
    let arch_height = arch_height.unwrap_or(width / 2.0).min(height);
    require_positive("arch rise", arch_height)?;

    let half = width / 2.0;
    let rect_height = height - arch_height;
    let shoulders = rect_height > VERTEX_MERGE_EPSILON;
    let n = ARCH_SEGMENTS;

    let mut points = Vec::with_capacity(n + 3);
    points.push(DVec2::new(-half, 0.0));
    if shoulders {
        points.push(DVec2::new(-half, rect_height));
    }
    let base = if shoulders { rect_height } else { 0.0 };
    for i in 1..n {
        // Angle π − π·i/n, folded so both halves share the same samples
        let k = i.min(n - i);
        let theta = PI * k as f64 / n as f64;
        let x = match (2 * i).cmp(&n) {
            std::cmp::Ordering::Less => -half * theta.cos(),
            std::cmp::Ordering::Equal => 0.0,
            std::cmp::Ordering::Greater => half * theta.cos(),
        };
        points.push(DVec2::new(x, base + arch_height * theta.sin()));
    }
    if shoulders {
        points.push(DVec2::new(half, rect_height));
    }
    points.push(DVec2::new(half, 0.0));

    Profile::new(points)
}

/// Outline of a rectangular opening, base centred on the origin.
pub fn rect_profile(width: f64, height: f64) -> Result<Profile, HouseError> {
    require_positive("opening width", width)?;
    require_positive("opening height", height)?;
    let half = width / 2.0;
    Profile::new(vec![
        DVec2::new(-half, 0.0),
        DVec2::new(-half, height),
        DVec2::new(half, height),
        DVec2::new(half, 0.0),
    ])
}

/// Pentagon of a gable wall: a `depth × height` rectangle with a centred
/// peak `peak` above its top edge.
pub fn gable_profile(depth: f64, height: f64, peak: f64) -> Result<Profile, HouseError> {
    require_positive("gable depth", depth)?;
    require_positive("gable height", height)?;
    require_positive("gable peak", peak)?;
    let half = depth / 2.0;
    Profile::new(vec![
        DVec2::new(-half, 0.0),
        DVec2::new(half, 0.0),
        DVec2::new(half, height),
        DVec2::new(0.0, height + peak),
        DVec2::new(-half, height),
    ])
}

/// Arched cutting tool, `depth` thick and centred on the wall plane.
pub fn arched_opening(
    width: f64,
    height: f64,
    depth: f64,
    arch_height: Option<f64>,
) -> Result<Solid, HouseError> {
    let profile = arch_profile(width, height, arch_height)?;
    Ok(Solid::extrude(&profile, depth)?.translated(glam::DVec3::new(0.0, -depth / 2.0, 0.0)))
}

/// Rectangular cutting tool, `depth` thick and centred on the wall plane.
pub fn rect_opening(width: f64, height: f64, depth: f64) -> Result<Solid, HouseError> {
    let profile = rect_profile(width, height)?;
    Ok(Solid::extrude(&profile, depth)?.translated(glam::DVec3::new(0.0, -depth / 2.0, 0.0)))
}

fn require_positive(what: &str, value: f64) -> Result<(), HouseError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HouseError::invalid_geometry(format!(
            "{what} must be positive, got {value}"
        )))
    }
}
