//! # Config Crate
//!
//! Centralized constants for the gingerbread part generator.
//! Every tolerance, resolution and default measurement lives here so the
//! kernel, the part assemblers and the CLI agree on the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARCH_SEGMENTS, INCH_TO_MM, PLANE_EPSILON};
//!
//! // Default dimensions are given in inches and converted once.
//! let width_mm = config::constants::defaults::HOUSE_WIDTH * INCH_TO_MM;
//! assert!((width_mm - 101.6).abs() < 1e-9);
//!
//! // Points closer to a plane than PLANE_EPSILON are treated as on it.
//! let distance: f64 = 1e-6;
//! assert!(distance.abs() < PLANE_EPSILON);
//!
//! assert_eq!(ARCH_SEGMENTS, 16);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **One Unit Inside**: Geometry is millimetres; inches only appear as input
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
