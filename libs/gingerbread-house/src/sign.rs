//! # Holiday Sign
//!
//! A flat sign base plus a raised plate sized to its text. Glyph outlines
//! are not generated; the plate is the printable backing the lettering is
//! piped onto.

use crate::dimensions::Unit;
use crate::error::HouseError;
use crate::solid::Solid;
use config::constants::defaults;
use glam::DVec3;
use tracing::info;

/// Sign measurements in the declared unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignDimensions {
    pub unit: Unit,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Thickness of the text plate.
    pub text_height: f64,
    pub font_size: f64,
    /// Plate width per character of text.
    pub backing_width_per_char: f64,
}

impl Default for SignDimensions {
    fn default() -> Self {
        Self {
            unit: Unit::Inch,
            width: defaults::SIGN_WIDTH,
            height: defaults::SIGN_HEIGHT,
            depth: defaults::SIGN_DEPTH,
            text_height: defaults::SIGN_TEXT_HEIGHT,
            font_size: defaults::SIGN_FONT_SIZE,
            backing_width_per_char: defaults::SIGN_BACKING_WIDTH_PER_CHAR,
        }
    }
}

/// Builds the sign base and the text plate, each with its corner at the
/// origin.
///
/// Returns `(name, solid)` pairs; the names are the output file stems.
///
/// ```rust
/// use gingerbread_house::{sign_parts, SignDimensions};
///
/// let [(base_name, base), (_, plate)] = sign_parts(&SignDimensions::default(), "Noel").unwrap();
/// assert_eq!(base_name, "sign_base");
/// assert!(base.volume() > plate.volume());
/// ```
pub fn sign_parts(
    dims: &SignDimensions,
    text: &str,
) -> Result<[(&'static str, Solid); 2], HouseError> {
    let chars = text.chars().count();
    if chars == 0 {
        return Err(HouseError::invalid_dimension("text", "sign text is empty"));
    }

    let k = dims.unit.to_mm();
    let base = corner_box(dims.width * k, dims.height * k, dims.depth * k)?;
    let plate = corner_box(
        chars as f64 * dims.backing_width_per_char * k,
        1.5 * dims.font_size * k,
        dims.text_height * k,
    )?;
    info!(chars, "built sign");

    Ok([("sign_base", base), ("happy_holidays_text", plate)])
}

fn corner_box(x: f64, y: f64, z: f64) -> Result<Solid, HouseError> {
    let size = DVec3::new(x, y, z);
    Ok(Solid::cuboid(x, y, z)?.translated(size / 2.0))
}
