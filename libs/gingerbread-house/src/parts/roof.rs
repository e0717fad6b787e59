use crate::dimensions::{Dimensions, GenerationOptions};
use crate::error::HouseError;
use crate::fastener::{apply_all, roof_tabs};
use crate::solid::Solid;
use glam::DVec3;
use tracing::{info, instrument};

/// Flat roof panel lying on z = 0, eave along −Y.
///
/// The panel runs the full house width plus overhang at both ends and one
/// slope length plus overhang from eave to ridge.
#[instrument(skip_all)]
pub fn roof_panel(dims: &Dimensions, options: &GenerationOptions) -> Result<Solid, HouseError> {
    let thickness = dims.roof_thickness();
    let panel = Solid::cuboid(dims.roof_width(), dims.roof_length(), thickness)?
        .translated(DVec3::new(0.0, 0.0, thickness / 2.0));

    if !options.fasteners {
        return Ok(panel);
    }
    let tabs = roof_tabs(dims);
    info!(count = tabs.len(), "adding eave tabs");
    apply_all(panel, &tabs, dims)
}
