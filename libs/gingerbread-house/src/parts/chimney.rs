use crate::dimensions::{Dimensions, GenerationOptions};
use crate::error::HouseError;
use crate::solid::Solid;
use glam::DVec3;
use tracing::{info, instrument};

/// Hollow chimney standing on z = 0, open at top and bottom.
///
/// Walls are half the house wall thickness. The flue cutter is taller than
/// the chimney by the cut margin so both ends open cleanly.
#[instrument(skip_all)]
pub fn chimney(dims: &Dimensions, _options: &GenerationOptions) -> Result<Solid, HouseError> {
    let size = dims.chimney();
    let wall = dims.chimney_wall();

    let outer = Solid::cuboid(size.width, size.depth, size.height)?;
    let flue = Solid::cuboid(
        size.width - 2.0 * wall,
        size.depth - 2.0 * wall,
        dims.cutter_depth(size.height),
    )?;
    info!(wall, "hollowing chimney");
    Ok(outer
        .cut(&flue)?
        .translated(DVec3::new(0.0, 0.0, size.height / 2.0)))
}
