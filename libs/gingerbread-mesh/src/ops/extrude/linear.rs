//! # Linear Extrusion
//!
//! Extrudes a 2D polygon along the Z axis to create a closed prism.
//!
//! Caps are triangulated with `earcutr`, so concave outlines and holes are
//! supported. Rings are re-oriented before meshing (outer counter-clockwise,
//! holes clockwise) and every triangle is wound for an outward normal.

use super::{ring_signed_area, Polygon2D};
use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::{DVec2, DVec3};

/// Parameters for linear extrusion.
#[derive(Debug, Clone)]
pub struct LinearExtrudeParams {
    /// Extrusion height along Z axis
    pub height: f64,
    /// Center the extrusion around Z=0
    pub center: bool,
}

impl Default for LinearExtrudeParams {
    fn default() -> Self {
        Self {
            height: 1.0,
            center: false,
        }
    }
}

/// Extrudes a 2D polygon along the Z axis.
///
/// # Example
///
/// ```rust
/// use gingerbread_mesh::{linear_extrude, LinearExtrudeParams, Polygon2D};
/// use glam::DVec2;
///
/// let square = Polygon2D::rectangle(DVec2::splat(10.0), true);
/// let params = LinearExtrudeParams { height: 20.0, center: false };
/// let mesh = linear_extrude(&square, &params).unwrap();
/// assert!((mesh.volume() - 2000.0).abs() < 1e-9);
/// ```
pub fn linear_extrude(polygon: &Polygon2D, params: &LinearExtrudeParams) -> Result<Mesh, MeshError> {
    if !(params.height.is_finite() && params.height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "extrusion height must be positive, got {}",
            params.height
        )));
    }
    if polygon.vertex_count() < 3 {
        return Err(MeshError::degenerate("polygon must have at least 3 vertices"));
    }
    if polygon
        .outer
        .iter()
        .chain(polygon.holes.iter().flatten())
        .any(|p| !p.is_finite())
    {
        return Err(MeshError::degenerate("polygon has non-finite vertices"));
    }

    // Outer ring counter-clockwise, holes clockwise
    let mut rings: Vec<Vec<DVec2>> = Vec::with_capacity(1 + polygon.holes.len());
    rings.push(oriented(&polygon.outer, true));
    rings.extend(polygon.holes.iter().map(|h| oriented(h, false)));

    let points: Vec<DVec2> = rings.iter().flatten().copied().collect();
    let cap = triangulate(&rings)?;

    let z0 = if params.center { -params.height / 2.0 } else { 0.0 };
    let z1 = z0 + params.height;
    let m = points.len() as u32;

    let mut mesh = Mesh::with_capacity(points.len() * 2, cap.len() * 2 + points.len() * 2);
    for p in &points {
        mesh.add_vertex(DVec3::new(p.x, p.y, z0));
    }
    for p in &points {
        mesh.add_vertex(DVec3::new(p.x, p.y, z1));
    }

    // Bottom faces -Z, top faces +Z
    for &[a, b, c] in &cap {
        mesh.add_triangle(a, c, b);
        mesh.add_triangle(m + a, m + b, m + c);
    }

    // Side walls: the outward normal of edge i -> j lies to its right
    let mut start = 0u32;
    for ring in &rings {
        let n = ring.len() as u32;
        for i in 0..n {
            let a = start + i;
            let b = start + (i + 1) % n;
            mesh.add_triangle(a, b, m + b);
            mesh.add_triangle(a, m + b, m + a);
        }
        start += n;
    }

    Ok(mesh)
}

fn oriented(ring: &[DVec2], counter_clockwise: bool) -> Vec<DVec2> {
    let mut ring = ring.to_vec();
    if (ring_signed_area(&ring) > 0.0) != counter_clockwise {
        ring.reverse();
    }
    ring
}

/// Triangulates the cap, returning counter-clockwise index triples into the
/// flattened ring points.
fn triangulate(rings: &[Vec<DVec2>]) -> Result<Vec<[u32; 3]>, MeshError> {
    let points: Vec<DVec2> = rings.iter().flatten().copied().collect();
    let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();

    let mut hole_indices = Vec::with_capacity(rings.len().saturating_sub(1));
    let mut offset = 0;
    for ring in &rings[..rings.len() - 1] {
        offset += ring.len();
        hole_indices.push(offset);
    }

    let indices = earcutr::earcut(&flat, &hole_indices, 2)
        .map_err(|e| MeshError::triangulation(format!("{e:?}")))?;
    if indices.is_empty() {
        return Err(MeshError::triangulation("cap produced no triangles"));
    }

    Ok(indices
        .chunks_exact(3)
        .map(|t| {
            let (a, b, c) = (t[0], t[1], t[2]);
            let ccw = (points[b] - points[a]).perp_dot(points[c] - points[a]) >= 0.0;
            if ccw {
                [a as u32, b as u32, c as u32]
            } else {
                [a as u32, c as u32, b as u32]
            }
        })
        .collect())
}
