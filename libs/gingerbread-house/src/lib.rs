//! # Gingerbread House
//!
//! Builds the seven interlocking parts of a printable gingerbread house from
//! a single validated [`Dimensions`] set.
//!
//! ## Pipeline
//!
//! ```text
//! DimensionSpec → Dimensions → profiles → solids → fasteners → parts
//! ```
//!
//! Every part is an independent pipeline over immutable inputs, so
//! [`generate_house`] runs them in parallel and reports each one separately.
//!
//! ## Coordinates
//!
//! Millimetres throughout. Walls stand in the XZ plane with their thickness
//! along Y and their base at z = 0.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gingerbread_house::{generate_house, Dimensions, GenerationOptions};
//!
//! let dims = Dimensions::default();
//! let report = generate_house(&dims, &GenerationOptions::default());
//! assert!(report.is_complete());
//! ```

pub mod dimensions;
pub mod error;
pub mod fastener;
pub mod parts;
pub mod pipeline;
pub mod profile;
pub mod sign;
pub mod solid;

pub use dimensions::{
    BoxSize, DimensionSpec, Dimensions, GenerationOptions, Opening, OpeningStyle, TabSize, Unit,
};
pub use error::{HouseError, PartError};
pub use fastener::{Fastener, FastenerKind};
pub use parts::{build_part, PartKind};
pub use pipeline::{generate_house, GeneratedPart, HouseReport};
pub use profile::Profile;
pub use sign::{sign_parts, SignDimensions};
pub use solid::{BoundingBox, Solid};
