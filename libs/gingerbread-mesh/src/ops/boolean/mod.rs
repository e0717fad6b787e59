//! # Boolean Operations (CSG)
//!
//! Constructive Solid Geometry operations using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Union: A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert(); B.clipTo(A); B.invert(); combine; invert
//! - Intersection: A.invert(); B.clipTo(A); B.invert(); A.clipTo(B); B.clipTo(A); combine; invert
//!
//! Output polygons are convex. They are welded back into a shared-vertex
//! mesh, with T-junctions split so the result stays closed (see `stitch`).
//!
//! ## Example
//!
//! ```rust
//! use gingerbread_mesh::ops::boolean::difference;
//! use gingerbread_mesh::primitives::create_cube;
//! use glam::DVec3;
//!
//! let a = create_cube(DVec3::splat(2.0), true).unwrap();
//! let b = create_cube(DVec3::new(1.0, 1.0, 4.0), true).unwrap();
//! let result = difference(&a, &b).unwrap();
//! assert!((result.volume() - 6.0).abs() < 1e-9);
//! ```

mod bsp;
mod plane;
mod polygon;
mod stitch;


use crate::error::MeshError;
use crate::Mesh;
use bsp::BspNode;
use config::constants::MAX_TRIANGLES;
use polygon::Polygon;
use stitch::polygons_to_mesh;
use tracing::{debug, warn};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compute union of two meshes.
///
/// ## Returns
///
/// New mesh enclosing every point inside either input.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    // Drop B's faces that coincide with A's
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());

    finish("union", a, b, result)
}

/// Compute difference of two meshes (A - B).
///
/// `b` may extend beyond `a` on any side; only the overlap is removed.
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    for polygon in &mut result {
        polygon.flip();
    }

    finish("difference", a, b, result)
}

/// Compute intersection of two meshes.
pub fn intersection(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() || b.is_empty() {
        return Ok(Mesh::new());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    // A & B = ~(~A | ~B)
    bsp_a.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);

    let mut result = bsp_a.all_polygons();
    result.extend(bsp_b.all_polygons());
    for polygon in &mut result {
        polygon.flip();
    }

    finish("intersection", a, b, result)
}

fn finish(
    operation: &'static str,
    a: &Mesh,
    b: &Mesh,
    polygons: Vec<Polygon>,
) -> Result<Mesh, MeshError> {
    let mesh = polygons_to_mesh(&polygons);
    if mesh.triangle_count() > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: MAX_TRIANGLES,
        });
    }
    if mesh.vertices().iter().any(|v| !v.is_finite()) {
        return Err(MeshError::boolean_failed(operation, "non-finite vertex in result"));
    }
    let open_edges = mesh.open_edge_count();
    if open_edges > 0 {
        warn!(operation, open_edges, "boolean result is not closed");
    }
    debug!(
        operation,
        lhs = a.triangle_count(),
        rhs = b.triangle_count(),
        result = mesh.triangle_count(),
        "boolean complete"
    );
    Ok(mesh)
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Convert mesh to list of polygons, one per non-degenerate triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    mesh.triangle_positions()
        .filter_map(|corners| Polygon::from_vertices(corners.to_vec()))
        .collect()
}
