//! # Part Assemblers
//!
//! One builder per distinct part shape. Each is a pure function of the
//! dimension set and options, so builders never share state and can run
//! concurrently.
//!
//! | Part | Builder | Fasteners |
//! |------|---------|-----------|
//! | Front wall | [`front_wall`] | tabs on both vertical edges |
//! | Back wall | [`back_wall`] | tabs on both vertical edges |
//! | Left/right side | [`side_wall`] | slots on both vertical edges |
//! | Left/right roof | [`roof_panel`] | tabs under the eave |
//! | Chimney | [`chimney`] | none |
//!
//! Paired parts are built identically; one of each pair is mirrored when
//! the house is put together.

mod chimney;
mod roof;
mod walls;


pub use chimney::chimney;
pub use roof::roof_panel;
pub use walls::{back_wall, front_wall, side_wall};

use crate::dimensions::{Dimensions, GenerationOptions, Opening, OpeningStyle};
use crate::error::HouseError;
use crate::profile::{arched_opening, rect_opening};
use crate::solid::Solid;
use config::constants::{PART_FILE_PREFIX, STL_EXTENSION};
use glam::DVec3;
use std::fmt;
use tracing::instrument;

/// The seven printable parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PartKind {
    FrontWall,
    BackWall,
    LeftSide,
    RightSide,
    RoofLeft,
    RoofRight,
    Chimney,
}

impl PartKind {
    /// Every part, in report order.
    pub const ALL: [PartKind; 7] = [
        PartKind::FrontWall,
        PartKind::BackWall,
        PartKind::LeftSide,
        PartKind::RightSide,
        PartKind::RoofLeft,
        PartKind::RoofRight,
        PartKind::Chimney,
    ];

    /// Output file name without extension.
    pub fn file_stem(self) -> String {
        let suffix = match self {
            PartKind::FrontWall => "front_wall",
            PartKind::BackWall => "back_wall",
            PartKind::LeftSide => "left_side",
            PartKind::RightSide => "right_side",
            PartKind::RoofLeft => "roof_left",
            PartKind::RoofRight => "roof_right",
            PartKind::Chimney => "chimney",
        };
        format!("{PART_FILE_PREFIX}{suffix}")
    }

    /// Output file name with extension.
    pub fn file_name(self) -> String {
        format!("{}.{STL_EXTENSION}", self.file_stem())
    }

    pub fn label(self) -> &'static str {
        match self {
            PartKind::FrontWall => "front wall",
            PartKind::BackWall => "back wall",
            PartKind::LeftSide => "left side",
            PartKind::RightSide => "right side",
            PartKind::RoofLeft => "left roof",
            PartKind::RoofRight => "right roof",
            PartKind::Chimney => "chimney",
        }
    }

    /// One-line summary for the report.
    pub fn description(self) -> &'static str {
        match self {
            PartKind::FrontWall => "door, two windows, edge tabs",
            PartKind::BackWall => "one window, edge tabs",
            PartKind::LeftSide | PartKind::RightSide => "gable wall, window, edge slots",
            PartKind::RoofLeft | PartKind::RoofRight => "roof panel, eave tabs",
            PartKind::Chimney => "open-top hollow box",
        }
    }
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Builds one part.
#[instrument(skip_all, fields(part = %kind))]
pub fn build_part(
    kind: PartKind,
    dims: &Dimensions,
    options: &GenerationOptions,
) -> Result<Solid, HouseError> {
    match kind {
        PartKind::FrontWall => front_wall(dims, options),
        PartKind::BackWall => back_wall(dims, options),
        PartKind::LeftSide | PartKind::RightSide => side_wall(dims, options),
        PartKind::RoofLeft | PartKind::RoofRight => roof_panel(dims, options),
        PartKind::Chimney => chimney(dims, options),
    }
}

/// Cutting tool for `opening`, centred at `x` along the wall and passing
/// through `thickness` of material.
fn opening_tool(
    dims: &Dimensions,
    options: &GenerationOptions,
    opening: Opening,
    x: f64,
    thickness: f64,
) -> Result<Solid, HouseError> {
    let depth = dims.cutter_depth(thickness);
    let tool = match options.opening_style {
        OpeningStyle::Arched => arched_opening(opening.width, opening.height, depth, None)?,
        OpeningStyle::Rectangular => rect_opening(opening.width, opening.height, depth)?,
    };
    Ok(tool.translated(DVec3::new(x, 0.0, opening.offset)))
}
