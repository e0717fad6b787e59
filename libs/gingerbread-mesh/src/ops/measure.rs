//! # Mass Properties
//!
//! Volume and point containment for closed triangle meshes.

use crate::mesh::Mesh;
use config::constants::EPSILON;
use glam::DVec3;

/// Ray directions used for containment voting.
///
/// Each is tilted off the axes so rays do not run along the axis-aligned
/// edges and faces that dominate part geometry.
const RAY_DIRECTIONS: [DVec3; 3] = [
    DVec3::new(1.0, 0.0137, 0.0071),
    DVec3::new(0.0113, 1.0, 0.0167),
    DVec3::new(0.0093, 0.0151, 1.0),
];

/// Signed enclosed volume via the divergence theorem.
///
/// Each triangle contributes the signed volume of the tetrahedron it forms
/// with the origin. Positive for outward-facing winding.
///
/// # Example
///
/// ```rust
/// use gingerbread_mesh::create_cube;
/// use gingerbread_mesh::ops::measure::signed_volume;
/// use glam::DVec3;
///
/// let cube = create_cube(DVec3::splat(3.0), false).unwrap();
/// assert!((signed_volume(&cube) - 27.0).abs() < 1e-9);
/// ```
pub fn signed_volume(mesh: &Mesh) -> f64 {
    mesh.triangle_positions()
        .map(|[a, b, c]| a.dot(b.cross(c)))
        .sum::<f64>()
        / 6.0
}

/// Returns true if `point` lies inside the closed mesh.
///
/// Casts three rays and takes the majority parity vote, so a single ray
/// grazing an edge cannot flip the answer.
pub fn contains_point(mesh: &Mesh, point: DVec3) -> bool {
    let inside_votes = RAY_DIRECTIONS
        .iter()
        .filter(|dir| crossings(mesh, point, **dir) % 2 == 1)
        .count();
    inside_votes >= 2
}

fn crossings(mesh: &Mesh, origin: DVec3, dir: DVec3) -> usize {
    mesh.triangle_positions()
        .filter(|tri| ray_hits_triangle(origin, dir, tri))
        .count()
}

/// Möller–Trumbore ray/triangle intersection, counting hits with t > 0.
fn ray_hits_triangle(origin: DVec3, dir: DVec3, [v0, v1, v2]: &[DVec3; 3]) -> bool {
    let edge1 = *v1 - *v0;
    let edge2 = *v2 - *v0;
    let h = dir.cross(edge2);
    let det = edge1.dot(h);
    if det.abs() < EPSILON {
        return false;
    }

    let inv_det = 1.0 / det;
    let s = origin - *v0;
    let u = inv_det * s.dot(h);
    if !(0.0..=1.0).contains(&u) {
        return false;
    }

    let q = s.cross(edge1);
    let v = inv_det * dir.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return false;
    }

    inv_det * edge2.dot(q) > EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cube;
    use approx::assert_relative_eq;

    #[test]
    fn test_volume_of_empty_mesh() {
        assert_eq!(signed_volume(&Mesh::new()), 0.0);
    }

    #[test]
    fn test_volume_is_translation_invariant() {
        let mut cube = create_cube(DVec3::new(1.0, 2.0, 3.0), true).unwrap();
        cube.translate(DVec3::new(100.0, -40.0, 7.5));
        assert_relative_eq!(signed_volume(&cube), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_contains_point_inside_and_outside() {
        let cube = create_cube(DVec3::splat(2.0), true).unwrap();
        assert!(contains_point(&cube, DVec3::ZERO));
        assert!(contains_point(&cube, DVec3::new(0.9, -0.9, 0.9)));
        assert!(!contains_point(&cube, DVec3::new(1.1, 0.0, 0.0)));
        assert!(!contains_point(&cube, DVec3::new(0.0, 0.0, -5.0)));
    }

    #[test]
    fn test_contains_point_empty_mesh() {
        assert!(!contains_point(&Mesh::new(), DVec3::ZERO));
    }
}
