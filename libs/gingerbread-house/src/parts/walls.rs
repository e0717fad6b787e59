//! Front, back and side walls.
//!
//! All walls stand on z = 0, centred on x = 0 with their thickness
//! centred on y = 0.

use super::opening_tool;
use crate::dimensions::{Dimensions, GenerationOptions};
use crate::error::HouseError;
use crate::fastener::{apply_all, edge_slots, edge_tabs};
use crate::profile::gable_profile;
use crate::solid::Solid;
use glam::DVec3;
use tracing::{info, instrument};

fn wall_slab(dims: &Dimensions) -> Result<Solid, HouseError> {
    let h = dims.wall_height();
    Ok(Solid::cuboid(dims.house_width(), dims.wall_thickness(), h)?
        .translated(DVec3::new(0.0, 0.0, h / 2.0)))
}

fn with_edge_tabs(
    wall: Solid,
    dims: &Dimensions,
    options: &GenerationOptions,
) -> Result<Solid, HouseError> {
    if !options.fasteners {
        return Ok(wall);
    }
    let tabs = edge_tabs(dims, dims.house_width() / 2.0, dims.wall_height());
    info!(count = tabs.len(), "adding edge tabs");
    apply_all(wall, &tabs, dims)
}

/// Front wall: door in the middle, windows at ±width/3.
#[instrument(skip_all)]
pub fn front_wall(dims: &Dimensions, options: &GenerationOptions) -> Result<Solid, HouseError> {
    let t = dims.wall_thickness();
    let mut wall = wall_slab(dims)?;

    info!(style = ?options.opening_style, "cutting door");
    wall = wall.cut(&opening_tool(dims, options, dims.door(), 0.0, t)?)?;

    let x = dims.house_width() / 3.0;
    for side in [-x, x] {
        info!(x = side, "cutting window");
        wall = wall.cut(&opening_tool(dims, options, dims.window(), side, t)?)?;
    }

    with_edge_tabs(wall, dims, options)
}

/// Back wall: one centred window.
#[instrument(skip_all)]
pub fn back_wall(dims: &Dimensions, options: &GenerationOptions) -> Result<Solid, HouseError> {
    let t = dims.wall_thickness();
    info!("cutting window");
    let wall = wall_slab(dims)?.cut(&opening_tool(dims, options, dims.window(), 0.0, t)?)?;
    with_edge_tabs(wall, dims, options)
}

/// Side wall: gable pentagon spanning the house depth, one centred window,
/// slots where the front and back wall tabs land.
#[instrument(skip_all)]
pub fn side_wall(dims: &Dimensions, options: &GenerationOptions) -> Result<Solid, HouseError> {
    let t = dims.wall_thickness();
    let gable = gable_profile(dims.house_depth(), dims.wall_height(), dims.peak_height())?;
    let mut wall = Solid::extrude(&gable, t)?.translated(DVec3::new(0.0, -t / 2.0, 0.0));

    info!("cutting window");
    wall = wall.cut(&opening_tool(dims, options, dims.window(), 0.0, t)?)?;

    if options.fasteners {
        let slots = edge_slots(dims.house_depth() / 2.0, dims.wall_height());
        info!(count = slots.len(), "cutting edge slots");
        wall = apply_all(wall, &slots, dims)?;
    }
    Ok(wall)
}
