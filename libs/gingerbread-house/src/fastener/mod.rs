//! # Fasteners
//!
//! Tabs and slots that let the printed parts lock together.
//!
//! A tab is a small box unioned onto a part's edge; its matching slot is
//! the same box grown by the tab tolerance on every side and cut out of the
//! neighbouring part. Both sides of a joint take their positions from the
//! same edge length, so the layout functions here are the only place that
//! decides where fasteners go.
//!
//! ```text
//!   front wall            side wall
//!   ┌────────┐─┐         ┌─────────┐
//!   │        │▓│ 75% ──▶ │        ░│
//!   │        │ │         │         │
//!   │        │▓│ 25% ──▶ │        ░│
//!   └────────┘─┘         └─────────┘
//! ```

#[cfg(test)]
mod tests;

use crate::dimensions::Dimensions;
use crate::error::HouseError;
use crate::solid::Solid;
use config::constants::{ROOF_TAB_FRACTION, TAB_SPAN_FRACTIONS};
use glam::DVec3;
use tracing::debug;

/// Whether a fastener adds or removes material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastenerKind {
    /// Unioned onto the host.
    Tab,
    /// Cut from the host, tolerance-grown.
    Slot,
}

/// One fastener, centred at `offset` in its host's frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fastener {
    pub kind: FastenerKind,
    pub offset: DVec3,
}

impl Fastener {
    pub fn tab(offset: DVec3) -> Self {
        Self {
            kind: FastenerKind::Tab,
            offset,
        }
    }

    pub fn slot(offset: DVec3) -> Self {
        Self {
            kind: FastenerKind::Slot,
            offset,
        }
    }

    /// The fastener's box, placed at its offset.
    pub fn solid(&self, dims: &Dimensions) -> Result<Solid, HouseError> {
        let size = dims.tab();
        let tolerance = match self.kind {
            FastenerKind::Tab => 0.0,
            FastenerKind::Slot => size.tolerance,
        };
        Ok(tab(size.width, size.depth, size.height, tolerance)?.translated(self.offset))
    }

    /// Unions a tab onto `host` or cuts a slot out of it.
    pub fn apply(&self, host: &Solid, dims: &Dimensions) -> Result<Solid, HouseError> {
        let solid = self.solid(dims)?;
        match self.kind {
            FastenerKind::Tab => host.union(&solid),
            FastenerKind::Slot => host.cut(&solid),
        }
    }
}

/// Applies every fastener in order.
pub fn apply_all(
    host: Solid,
    fasteners: &[Fastener],
    dims: &Dimensions,
) -> Result<Solid, HouseError> {
    fasteners.iter().try_fold(host, |host, fastener| {
        debug!(kind = ?fastener.kind, offset = %fastener.offset, "applying fastener");
        fastener.apply(&host, dims)
    })
}

/// Box of `width × depth × height` grown by `tolerance` on every side,
/// centred on the origin.
///
/// ```rust
/// use gingerbread_house::fastener::tab;
///
/// let slot = tab(2.0, 1.0, 2.0, 0.5).unwrap();
/// assert!((slot.volume() - 3.0 * 2.0 * 3.0).abs() < 1e-9);
/// ```
pub fn tab(width: f64, depth: f64, height: f64, tolerance: f64) -> Result<Solid, HouseError> {
    if !(tolerance.is_finite() && tolerance >= 0.0) {
        return Err(HouseError::invalid_geometry(format!(
            "tab tolerance must be >= 0, got {tolerance}"
        )));
    }
    let grow = 2.0 * tolerance;
    Solid::cuboid(width + grow, depth + grow, height + grow)
}

/// Heights of the two fasteners along a vertical edge of length `span`.
pub fn wall_tab_positions(span: f64) -> [f64; 2] {
    TAB_SPAN_FRACTIONS.map(|f| f * span)
}

/// X positions of the two tabs along a roof panel's eave.
pub fn roof_tab_positions(width: f64) -> [f64; 2] {
    let x = ROOF_TAB_FRACTION * width;
    [-x, x]
}

/// Tabs on both vertical edges of a front or back wall.
///
/// `edge_x` is the half-width of the wall; each tab is pushed out by half
/// the tab depth. `span` is the shared edge length the heights derive from.
pub fn edge_tabs(dims: &Dimensions, edge_x: f64, span: f64) -> Vec<Fastener> {
    let x = edge_x + dims.tab().depth / 2.0;
    both_edges(x, span).map(Fastener::tab).collect()
}

/// Slots centred on both vertical edges of a side wall.
pub fn edge_slots(edge_x: f64, span: f64) -> Vec<Fastener> {
    both_edges(edge_x, span).map(Fastener::slot).collect()
}

fn both_edges(x: f64, span: f64) -> impl Iterator<Item = DVec3> {
    let heights = wall_tab_positions(span);
    [-x, x]
        .into_iter()
        .flat_map(move |x| heights.map(|z| DVec3::new(x, 0.0, z)))
}

/// Tabs hanging below a roof panel's lower long edge.
///
/// The panel is centred on the origin in X and Y with its bottom face at
/// z = 0. Tabs sit flush with the eave and touch the bottom face.
pub fn roof_tabs(dims: &Dimensions) -> Vec<Fastener> {
    let tab = dims.tab();
    let y = -dims.roof_length() / 2.0 + tab.depth / 2.0;
    let z = -tab.height / 2.0;
    roof_tab_positions(dims.roof_width())
        .into_iter()
        .map(|x| Fastener::tab(DVec3::new(x, y, z)))
        .collect()
}
