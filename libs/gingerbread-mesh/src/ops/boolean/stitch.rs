//! # Stitching
//!
//! Rebuilds an indexed mesh from the convex polygons a BSP boolean returns.
//!
//! BSP clipping splits a face where it crosses the other operand, but the
//! face across the shared edge may never meet that splitting plane. The new
//! vertex then sits in the middle of the neighbour's edge (a T-junction) and
//! the two sides no longer share edges. Stitching welds coincident vertices,
//! then inserts every welded vertex that lies on a polygon edge into that
//! edge before triangulating.

use super::polygon::Polygon;
use crate::Mesh;
use config::constants::{EDGE_SNAP_EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use std::collections::HashMap;

type Cell = [i64; 3];

// =============================================================================
// WELDING
// =============================================================================

/// Spatial hash of mesh vertices with cells `VERTEX_MERGE_EPSILON` wide.
///
/// A lookup scans the 3x3x3 block of cells around a point, so two points
/// closer than the merge distance always meet even when they fall in
/// different cells.
#[derive(Default)]
struct Welder {
    cells: HashMap<Cell, Vec<u32>>,
}

impl Welder {
    fn cell(v: DVec3) -> Cell {
        let c = (v / VERTEX_MERGE_EPSILON).floor();
        [c.x as i64, c.y as i64, c.z as i64]
    }

    /// Index of the existing vertex within merge distance of `v`, or of a
    /// newly added one.
    fn weld(&mut self, mesh: &mut Mesh, v: DVec3) -> u32 {
        let [x, y, z] = Self::cell(v);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(ids) = self.cells.get(&[x + dx, y + dy, z + dz]) else {
                        continue;
                    };
                    let vertices = mesh.vertices();
                    let hit = ids
                        .iter()
                        .find(|&&id| vertices[id as usize].distance(v) < VERTEX_MERGE_EPSILON);
                    if let Some(&id) = hit {
                        return id;
                    }
                }
            }
        }

        let id = mesh.add_vertex(v);
        self.cells.entry([x, y, z]).or_default().push(id);
        id
    }
}

/// Welded vertex loop of a polygon, with repeated neighbours collapsed.
fn welded_loop(welder: &mut Welder, mesh: &mut Mesh, polygon: &Polygon) -> Vec<u32> {
    let mut ids: Vec<u32> = Vec::with_capacity(polygon.vertices.len());
    for v in &polygon.vertices {
        let id = welder.weld(mesh, *v);
        if ids.last() != Some(&id) {
            ids.push(id);
        }
    }
    while ids.len() > 1 && ids.first() == ids.last() {
        ids.pop();
    }
    ids
}

// =============================================================================
// T-JUNCTIONS
// =============================================================================

/// Vertex ids ordered by x, for range queries along an edge.
struct EdgeIndex {
    by_x: Vec<u32>,
}

impl EdgeIndex {
    fn new(vertices: &[DVec3]) -> Self {
        let mut by_x: Vec<u32> = (0..vertices.len() as u32).collect();
        by_x.sort_by(|&a, &b| vertices[a as usize].x.total_cmp(&vertices[b as usize].x));
        Self { by_x }
    }

    /// Vertices strictly inside edge `a -> b`, ordered from `a` to `b`.
    fn vertices_on_edge(&self, vertices: &[DVec3], a: u32, b: u32) -> Vec<u32> {
        let (pa, pb) = (vertices[a as usize], vertices[b as usize]);
        let edge = pb - pa;
        let length = edge.length();
        if length <= VERTEX_MERGE_EPSILON {
            return Vec::new();
        }
        let dir = edge / length;

        let lo = pa.x.min(pb.x) - EDGE_SNAP_EPSILON;
        let hi = pa.x.max(pb.x) + EDGE_SNAP_EPSILON;
        let start = self.by_x.partition_point(|&i| vertices[i as usize].x < lo);

        let mut hits: Vec<(f64, u32)> = self.by_x[start..]
            .iter()
            .take_while(|&&i| vertices[i as usize].x <= hi)
            .filter(|&&i| i != a && i != b)
            .filter_map(|&i| {
                let offset = vertices[i as usize] - pa;
                let along = offset.dot(dir);
                let inside = along > VERTEX_MERGE_EPSILON && along < length - VERTEX_MERGE_EPSILON;
                let near = (offset - dir * along).length() < EDGE_SNAP_EPSILON;
                (inside && near).then_some((along, i))
            })
            .collect();
        hits.sort_by(|x, y| x.0.total_cmp(&y.0));
        hits.into_iter().map(|(_, i)| i).collect()
    }
}

/// True if every vertex of the loop lies on one line.
fn is_collinear(vertices: &[DVec3], ids: &[u32]) -> bool {
    let origin = vertices[ids[0] as usize];
    let far = ids
        .iter()
        .map(|&i| vertices[i as usize])
        .max_by(|p, q| p.distance_squared(origin).total_cmp(&q.distance_squared(origin)))
        .unwrap_or(origin);
    let axis = far - origin;
    if axis.length() <= VERTEX_MERGE_EPSILON {
        return true;
    }
    let dir = axis.normalize();
    ids.iter().all(|&i| {
        let offset = vertices[i as usize] - origin;
        (offset - dir * offset.dot(dir)).length() < EDGE_SNAP_EPSILON
    })
}

// =============================================================================
// REBUILD
// =============================================================================

/// Convert convex polygons back to a closed indexed triangle mesh.
///
/// Vertices closer than `VERTEX_MERGE_EPSILON` are welded and T-junctions
/// are split. Polygons that collapse to a line are dropped; the edges they
/// would have contributed cancel out.
pub(super) fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();
    let mut welder = Welder::default();

    let loops: Vec<Vec<u32>> = polygons
        .iter()
        .map(|polygon| welded_loop(&mut welder, &mut mesh, polygon))
        .filter(|ids| ids.len() >= 3)
        .collect();

    let corners = mesh.vertices().to_vec();
    let index = EdgeIndex::new(&corners);

    for ids in &loops {
        let mut ring = Vec::with_capacity(ids.len());
        for (k, &a) in ids.iter().enumerate() {
            let b = ids[(k + 1) % ids.len()];
            ring.push(a);
            ring.extend(index.vertices_on_edge(&corners, a, b));
        }

        if is_collinear(&corners, &ring) {
            continue;
        }

        if ring.len() == ids.len() {
            for i in 1..ring.len() - 1 {
                let (a, b, c) = (ring[0], ring[i], ring[i + 1]);
                if a != b && b != c && a != c {
                    mesh.add_triangle(a, b, c);
                }
            }
        } else {
            // Fanning from a corner would give zero-area triangles along the
            // split edges; the vertex centroid is strictly inside instead.
            let centroid = ring.iter().map(|&i| corners[i as usize]).sum::<DVec3>()
                / ring.len() as f64;
            let center = mesh.add_vertex(centroid);
            for (k, &a) in ring.iter().enumerate() {
                let b = ring[(k + 1) % ring.len()];
                if a != b {
                    mesh.add_triangle(center, a, b);
                }
            }
        }
    }

    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(z: f64, corners: [(f64, f64); 4]) -> Polygon {
        Polygon::from_vertices(corners.iter().map(|&(x, y)| DVec3::new(x, y, z)).collect())
            .unwrap()
    }

    #[test]
    fn test_weld_across_cell_boundary() {
        let mut mesh = Mesh::new();
        let mut welder = Welder::default();
        // Straddles a cell boundary but is well inside merge distance
        let a = DVec3::new(VERTEX_MERGE_EPSILON * 0.99, 0.0, 0.0);
        let b = DVec3::new(VERTEX_MERGE_EPSILON * 1.01, 0.0, 0.0);
        assert_ne!(Welder::cell(a), Welder::cell(b));

        let ia = welder.weld(&mut mesh, a);
        let ib = welder.weld(&mut mesh, b);
        assert_eq!(ia, ib);
        assert_eq!(mesh.vertex_count(), 1);
    }

    #[test]
    fn test_weld_keeps_distinct_points() {
        let mut mesh = Mesh::new();
        let mut welder = Welder::default();
        let ia = welder.weld(&mut mesh, DVec3::ZERO);
        let ib = welder.weld(&mut mesh, DVec3::new(3.0 * VERTEX_MERGE_EPSILON, 0.0, 0.0));
        assert_ne!(ia, ib);
    }

    #[test]
    fn test_t_junction_is_split() {
        // One face of the top plane, split in two, beside a whole face.
        // The whole face must pick up the split vertex at (1, 0.5).
        let polygons = vec![
            square(0.0, [(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (0.0, 0.5)]),
            square(0.0, [(0.0, 0.5), (1.0, 0.5), (1.0, 1.0), (0.0, 1.0)]),
            square(0.0, [(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)]),
        ];
        let mesh = polygons_to_mesh(&polygons);

        assert_eq!(mesh.vertex_count(), 8 + 1);
        // The whole face's edge (2,1)-(1,1)-(1,0) now passes through (1, 0.5)
        let junction = mesh
            .vertices()
            .iter()
            .position(|v| v.distance(DVec3::new(1.0, 0.5, 0.0)) < 1e-12)
            .unwrap() as u32;
        let uses = mesh
            .triangles()
            .iter()
            .filter(|tri| tri.contains(&junction))
            .count();
        assert!(uses >= 3, "junction used by {uses} triangles");
        assert!(mesh.validate());
        let area: f64 = mesh
            .triangle_positions()
            .map(|[a, b, c]| (b - a).cross(c - a).z * 0.5)
            .sum();
        assert!((area - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_collinear_loop_is_dropped() {
        let sliver = Polygon {
            vertices: vec![DVec3::ZERO, DVec3::X, DVec3::new(0.5, 0.0, 0.0)],
            plane: square(0.0, [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).plane,
        };
        assert!(polygons_to_mesh(&[sliver]).is_empty());
    }
}
