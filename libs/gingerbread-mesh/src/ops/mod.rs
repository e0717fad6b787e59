//! # Mesh Operations
//!
//! Operations on meshes: boolean operations (CSG), linear extrusion of 2D
//! polygons, and mass-property queries.

pub mod boolean;
pub mod extrude;
pub mod measure;

pub use boolean::{difference, intersection, union};
pub use extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
pub use measure::{contains_point, signed_volume};
