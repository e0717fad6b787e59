//! # Solid Builder
//!
//! Value-semantics wrapper over the mesh kernel. Every operation returns a
//! new [`Solid`]; nothing is modified in place through a shared reference.
//!
//! A `Solid` is never empty: constructors reject degenerate input and a
//! boolean that erases everything is reported as an error.

use crate::error::HouseError;
use crate::profile::Profile;
use gingerbread_mesh::{
    create_cube, difference, linear_extrude, union, LinearExtrudeParams, Mesh, MeshError,
};
use glam::{DMat4, DVec3, DVec4};

/// Maps extrusion space (profile in XY, extruded along +Z) into the wall
/// plane: profile x → X, profile y → Z, extrusion → Y.
const WALL_PLANE: DMat4 = DMat4::from_cols(DVec4::X, DVec4::Z, DVec4::Y, DVec4::W);

/// Axis-aligned bounds of a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    pub fn center(&self) -> DVec3 {
        (self.min + self.max) / 2.0
    }

    /// True if `other` lies entirely inside these bounds.
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }
}

/// A closed, non-empty solid in millimetres.
#[derive(Debug, Clone)]
pub struct Solid {
    mesh: Mesh,
}

impl Solid {
    /// Wraps a kernel mesh, rejecting empty ones.
    pub fn from_mesh(mesh: Mesh) -> Result<Self, HouseError> {
        if mesh.is_empty() {
            return Err(HouseError::invalid_geometry("solid has no faces"));
        }
        Ok(Self { mesh })
    }

    /// Box of the given size centred on the origin.
    ///
    /// `width` runs along X, `depth` along Y, `height` along Z.
    ///
    /// ```rust
    /// use gingerbread_house::Solid;
    ///
    /// let slab = Solid::cuboid(4.0, 1.0, 3.0).unwrap();
    /// assert!((slab.volume() - 12.0).abs() < 1e-9);
    /// assert!(slab.bounding_box().center().length() < 1e-12);
    /// ```
    pub fn cuboid(width: f64, depth: f64, height: f64) -> Result<Self, HouseError> {
        let size = DVec3::new(width, depth, height);
        if !(size.is_finite() && size.min_element() > 0.0) {
            return Err(HouseError::invalid_geometry(format!(
                "box size must be positive, got {size}"
            )));
        }
        let mesh = create_cube(size, true).map_err(|e| HouseError::geometry("box", e))?;
        Self::from_mesh(mesh)
    }

    /// Prism of `profile` standing in the XZ plane, `depth` thick along Y
    /// with y ∈ [0, depth].
    pub fn extrude(profile: &Profile, depth: f64) -> Result<Self, HouseError> {
        if !(depth.is_finite() && depth > 0.0) {
            return Err(HouseError::invalid_geometry(format!(
                "extrusion depth must be positive, got {depth}"
            )));
        }
        let params = LinearExtrudeParams {
            height: depth,
            center: false,
        };
        let mut mesh = linear_extrude(&profile.as_polygon(), &params)
            .map_err(|e| HouseError::geometry("extrude", e))?;
        mesh.transform(&WALL_PLANE);
        Self::from_mesh(mesh)
    }

    /// Material of either solid.
    pub fn union(&self, other: &Solid) -> Result<Solid, HouseError> {
        let mesh = union(&self.mesh, &other.mesh).map_err(|e| HouseError::geometry("union", e))?;
        Self::non_empty("union", mesh)
    }

    /// Material of `self` outside `tool`.
    pub fn cut(&self, tool: &Solid) -> Result<Solid, HouseError> {
        let mesh =
            difference(&self.mesh, &tool.mesh).map_err(|e| HouseError::geometry("cut", e))?;
        Self::non_empty("cut", mesh)
    }

    pub fn translated(mut self, offset: DVec3) -> Solid {
        self.mesh.translate(offset);
        self
    }

    fn non_empty(operation: &'static str, mesh: Mesh) -> Result<Solid, HouseError> {
        if mesh.is_empty() {
            return Err(HouseError::geometry(
                operation,
                MeshError::boolean_failed(operation, "result is empty"),
            ));
        }
        Ok(Solid { mesh })
    }

    pub fn volume(&self) -> f64 {
        self.mesh.volume()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        let (min, max) = self
            .mesh
            .bounding_box()
            .unwrap_or((DVec3::ZERO, DVec3::ZERO));
        BoundingBox { min, max }
    }

    /// True if `point` is inside the material.
    pub fn contains(&self, point: DVec3) -> bool {
        self.mesh.contains_point(point)
    }

    /// True if every mesh edge is shared by exactly two faces, one in each
    /// direction.
    pub fn is_closed(&self) -> bool {
        self.mesh.is_closed()
    }

    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastener::tab;
    use crate::profile::{gable_profile, rect_profile};
    use approx::assert_relative_eq;

    #[test]
    fn test_cuboid_bounds() {
        let slab = Solid::cuboid(101.6, 3.81, 76.2).unwrap();
        let bbox = slab.bounding_box();
        assert!((bbox.size() - DVec3::new(101.6, 3.81, 76.2)).length() < 1e-9);
        assert!(bbox.center().length() < 1e-9);
    }

    #[test]
    fn test_cuboid_rejects_degenerate_size() {
        assert!(matches!(
            Solid::cuboid(1.0, 0.0, 1.0),
            Err(HouseError::InvalidGeometry { .. })
        ));
        assert!(Solid::cuboid(-1.0, 1.0, 1.0).is_err());
        assert!(Solid::cuboid(1.0, 1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_extrude_stands_in_wall_plane() {
        let gable = gable_profile(4.0, 3.0, 2.0).unwrap();
        let solid = Solid::extrude(&gable, 0.5).unwrap();
        let bbox = solid.bounding_box();

        assert!((bbox.min - DVec3::new(-2.0, 0.0, 0.0)).length() < 1e-12);
        assert!((bbox.max - DVec3::new(2.0, 0.5, 5.0)).length() < 1e-12);
        // Mirroring axes must keep the solid outward facing
        assert_relative_eq!(solid.volume(), gable.area() * 0.5, epsilon = 1e-9);
        assert!(solid.contains(DVec3::new(0.0, 0.25, 4.5)));
        assert!(!solid.contains(DVec3::new(1.8, 0.25, 4.5)));
    }

    #[test]
    fn test_extrude_rejects_bad_depth() {
        let profile = rect_profile(1.0, 1.0).unwrap();
        for depth in [0.0, -2.0, f64::NAN] {
            assert!(matches!(
                Solid::extrude(&profile, depth),
                Err(HouseError::InvalidGeometry { .. })
            ));
        }
    }

    #[test]
    fn test_translated() {
        let cube = Solid::cuboid(2.0, 2.0, 2.0)
            .unwrap()
            .translated(DVec3::new(0.0, 0.0, 1.0));
        let bbox = cube.bounding_box();
        assert!((bbox.min - DVec3::new(-1.0, -1.0, 0.0)).length() < 1e-12);
        assert_relative_eq!(cube.volume(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cut_then_union_restores_volume() {
        let wall = Solid::cuboid(20.0, 4.0, 20.0).unwrap();
        let plug = tab(6.0, 4.0, 6.0, 0.0)
            .unwrap()
            .translated(DVec3::new(10.0, 0.0, 5.0));

        let notched = wall.cut(&plug).unwrap();
        assert_relative_eq!(notched.volume(), 1600.0 - 3.0 * 4.0 * 6.0, epsilon = 1e-6);

        let restored = notched.union(&plug).unwrap();
        let expected = wall.union(&plug).unwrap();
        assert_relative_eq!(restored.volume(), expected.volume(), epsilon = 1e-6);
        let (a, b) = (restored.bounding_box(), expected.bounding_box());
        assert!((a.min - b.min).length() < 1e-9 && (a.max - b.max).length() < 1e-9);
    }

    #[test]
    fn test_cut_through_hole() {
        let wall = Solid::cuboid(10.0, 1.0, 10.0).unwrap();
        let tool = Solid::cuboid(2.0, 2.0, 2.0).unwrap();
        let holed = wall.cut(&tool).unwrap();

        assert_relative_eq!(holed.volume(), 100.0 - 4.0, epsilon = 1e-6);
        assert!(!holed.contains(DVec3::ZERO));
        assert!(holed.contains(DVec3::new(3.0, 0.0, 3.0)));
        let (a, b) = (holed.bounding_box(), wall.bounding_box());
        assert!((a.min - b.min).length() < 1e-9 && (a.max - b.max).length() < 1e-9);
    }

    #[test]
    fn test_cut_everything_is_an_error() {
        let small = Solid::cuboid(1.0, 1.0, 1.0).unwrap();
        let big = Solid::cuboid(5.0, 5.0, 5.0).unwrap();
        assert!(matches!(
            small.cut(&big),
            Err(HouseError::Geometry {
                operation: "cut",
                ..
            })
        ));
    }

    #[test]
    fn test_from_empty_mesh_is_rejected() {
        assert!(Solid::from_mesh(Mesh::new()).is_err());
    }

    #[test]
    fn test_bounding_box_contains_box() {
        let outer = Solid::cuboid(4.0, 4.0, 4.0).unwrap().bounding_box();
        let inner = Solid::cuboid(2.0, 2.0, 2.0).unwrap().bounding_box();
        assert!(outer.contains_box(&inner));
        assert!(!inner.contains_box(&outer));
    }
}
