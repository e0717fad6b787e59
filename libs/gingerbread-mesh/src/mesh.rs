//! # Mesh Data Structure
//!
//! Core mesh representation: shared vertex positions plus indexed triangles.

use crate::ops::measure;
use config::constants::VERTEX_MERGE_EPSILON;
use glam::{DMat4, DVec3};
use std::collections::HashMap;

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Conversion to f32 only
/// happens at export.
///
/// Triangles are wound counter-clockwise when viewed from outside, so the
/// right-hand normal of every triangle points out of the solid.
///
/// # Example
///
/// ```rust
/// use gingerbread_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Iterates over triangles as corner positions.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [DVec3; 3]> + '_ {
        self.triangles.iter().map(move |tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices[1..]
                .iter()
                .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
        )
    }

    /// Enclosed volume, by the divergence theorem.
    ///
    /// Positive for a closed mesh with outward-facing triangles.
    pub fn volume(&self) -> f64 {
        measure::signed_volume(self)
    }

    /// Total area of all triangles.
    pub fn surface_area(&self) -> f64 {
        self.triangle_positions()
            .map(|[a, b, c]| (b - a).cross(c - a).length() * 0.5)
            .sum()
    }

    /// Returns true if the point lies inside the closed mesh.
    pub fn contains_point(&self, point: DVec3) -> bool {
        measure::contains_point(self, point)
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// A matrix with negative determinant mirrors the mesh, so triangle
    /// winding is reversed to keep normals pointing outward.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
        if matrix.determinant() < 0.0 {
            for tri in &mut self.triangles {
                tri.swap(1, 2);
            }
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Number of directed edges with no oppositely directed twin.
    ///
    /// Every edge of a closed, consistently wound surface is used once in
    /// each direction, so this is zero exactly for such meshes.
    pub fn open_edge_count(&self) -> usize {
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in &self.triangles {
            for k in 0..3 {
                *edges.entry((tri[k], tri[(k + 1) % 3])).or_default() += 1;
            }
        }
        edges
            .iter()
            .map(|(&(a, b), &n)| n.saturating_sub(edges.get(&(b, a)).copied().unwrap_or(0)))
            .sum()
    }

    /// Returns true for a non-empty mesh without open edges.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.open_edge_count() == 0
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - No zero-area triangles
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() >= VERTEX_MERGE_EPSILON
        })
    }
}
