//! # Gingerbread Mesh
//!
//! Triangle-mesh geometry kernel for the gingerbread part generator.
//!
//! ## Architecture
//!
//! ```text
//! Polygon2D ──linear_extrude──┐
//!                             ├──► Mesh ──union/difference──► Mesh ──write_stl──► .stl
//! create_cube ────────────────┘
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Triangulation**: Ear clipping via `earcutr`
//! - **Volume**: Divergence theorem over the closed surface
//! - **Containment**: Ray casting with Möller–Trumbore intersection
//!
//! ## Usage
//!
//! ```rust
//! use gingerbread_mesh::{create_cube, difference};
//! use glam::DVec3;
//!
//! let outer = create_cube(DVec3::splat(10.0), true).unwrap();
//! let inner = create_cube(DVec3::new(5.0, 5.0, 20.0), true).unwrap();
//! let tube = difference(&outer, &inner).unwrap();
//! assert!((tube.volume() - 750.0).abs() < 1e-6);
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use export::{export_stl_file, write_stl, StlFormat};
pub use mesh::Mesh;
pub use ops::boolean::{difference, intersection, union};
pub use ops::extrude::{linear_extrude, LinearExtrudeParams, Polygon2D};
pub use primitives::create_cube;
