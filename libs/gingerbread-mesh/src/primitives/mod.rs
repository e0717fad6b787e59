//! # Primitives
//!
//! Mesh generation for solid primitives.

pub mod cube;

pub use cube::create_cube;
