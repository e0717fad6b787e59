//! # Dimension Set
//!
//! The single source of truth for every measurement in the house.
//!
//! [`DimensionSpec`] is the raw, unit-tagged input (deserializable, every
//! field optional). [`Dimensions::new`] converts it to millimetres once and
//! validates it; the resulting value is immutable and shared read-only by
//! all part pipelines.
//!
//! Derived values such as [`Dimensions::roof_length`] are computed on
//! demand so they can never drift from the measurements they come from.


use crate::error::HouseError;
use config::constants::{defaults, DEFAULT_CUT_MARGIN_MM, INCH_TO_MM};
use serde::{Deserialize, Serialize};

/// Unit the input measurements are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inch,
    #[serde(alias = "mm")]
    Millimeter,
}

impl Unit {
    /// Millimetres per unit.
    pub fn to_mm(self) -> f64 {
        match self {
            Unit::Inch => INCH_TO_MM,
            Unit::Millimeter => 1.0,
        }
    }
}

/// Raw dimension input, in the declared [`Unit`].
///
/// Missing fields take the reference house's values, so a partial TOML
/// document only overrides what it names:
///
/// ```rust
/// use gingerbread_house::{DimensionSpec, Unit};
///
/// let spec = DimensionSpec { house_width: 5.0, ..Default::default() };
/// assert_eq!(spec.unit, Unit::Inch);
/// assert_eq!(spec.house_depth, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DimensionSpec {
    pub unit: Unit,
    pub wall_thickness: f64,
    pub house_width: f64,
    pub house_depth: f64,
    pub wall_height: f64,
    pub peak_height: f64,
    pub door_width: f64,
    pub door_height: f64,
    pub door_offset: f64,
    pub window_width: f64,
    pub window_height: f64,
    pub window_offset: f64,
    pub roof_overhang: f64,
    pub roof_thickness: f64,
    pub chimney_width: f64,
    pub chimney_depth: f64,
    pub chimney_height: f64,
    pub tab_width: f64,
    pub tab_depth: f64,
    pub tab_height: f64,
    pub tab_tolerance: f64,
    /// Cutter over-size in the declared unit; `None` means 1 mm.
    pub cut_margin: Option<f64>,
}

impl Default for DimensionSpec {
    fn default() -> Self {
        Self {
            unit: Unit::Inch,
            wall_thickness: defaults::WALL_THICKNESS,
            house_width: defaults::HOUSE_WIDTH,
            house_depth: defaults::HOUSE_DEPTH,
            wall_height: defaults::WALL_HEIGHT,
            peak_height: defaults::PEAK_HEIGHT,
            door_width: defaults::DOOR_WIDTH,
            door_height: defaults::DOOR_HEIGHT,
            door_offset: defaults::DOOR_OFFSET,
            window_width: defaults::WINDOW_WIDTH,
            window_height: defaults::WINDOW_HEIGHT,
            window_offset: defaults::WINDOW_OFFSET,
            roof_overhang: defaults::ROOF_OVERHANG,
            roof_thickness: defaults::ROOF_THICKNESS,
            chimney_width: defaults::CHIMNEY_WIDTH,
            chimney_depth: defaults::CHIMNEY_DEPTH,
            chimney_height: defaults::CHIMNEY_HEIGHT,
            tab_width: defaults::TAB_WIDTH,
            tab_depth: defaults::TAB_DEPTH,
            tab_height: defaults::TAB_HEIGHT,
            tab_tolerance: defaults::TAB_TOLERANCE,
            cut_margin: None,
        }
    }
}

/// A door or window: size plus its sill height above the wall base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opening {
    pub width: f64,
    pub height: f64,
    pub offset: f64,
}

impl Opening {
    /// Height of the opening's top above the wall base.
    pub fn top(&self) -> f64 {
        self.offset + self.height
    }

    /// Frontal area of the opening's bounding rectangle.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Outer size of a box-shaped feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

/// Tab size plus the clearance added around a tab to form its slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSize {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub tolerance: f64,
}

/// Validated dimension set, in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimensions {
    wall_thickness: f64,
    house_width: f64,
    house_depth: f64,
    wall_height: f64,
    peak_height: f64,
    door: Opening,
    window: Opening,
    roof_overhang: f64,
    roof_thickness: f64,
    chimney: BoxSize,
    tab: TabSize,
    cut_margin: f64,
}

impl Default for Dimensions {
    /// The reference house.
    fn default() -> Self {
        Self::convert(&DimensionSpec::default())
    }
}

impl Dimensions {
    /// Converts `spec` to millimetres and validates it.
    ///
    /// # Errors
    ///
    /// [`HouseError::InvalidDimension`] naming the first field that breaks
    /// a rule.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gingerbread_house::{DimensionSpec, Dimensions};
    ///
    /// let dims = Dimensions::new(&DimensionSpec::default()).unwrap();
    /// assert!((dims.house_width() - 101.6).abs() < 1e-9);
    ///
    /// let tall_door = DimensionSpec { door_height: 10.0, ..Default::default() };
    /// assert!(Dimensions::new(&tall_door).is_err());
    /// ```
    pub fn new(spec: &DimensionSpec) -> Result<Self, HouseError> {
        let dims = Self::convert(spec);
        dims.validate()?;
        Ok(dims)
    }

    fn convert(spec: &DimensionSpec) -> Self {
        let k = spec.unit.to_mm();
        Self {
            wall_thickness: spec.wall_thickness * k,
            house_width: spec.house_width * k,
            house_depth: spec.house_depth * k,
            wall_height: spec.wall_height * k,
            peak_height: spec.peak_height * k,
            door: Opening {
                width: spec.door_width * k,
                height: spec.door_height * k,
                offset: spec.door_offset * k,
            },
            window: Opening {
                width: spec.window_width * k,
                height: spec.window_height * k,
                offset: spec.window_offset * k,
            },
            roof_overhang: spec.roof_overhang * k,
            roof_thickness: spec.roof_thickness * k,
            chimney: BoxSize {
                width: spec.chimney_width * k,
                depth: spec.chimney_depth * k,
                height: spec.chimney_height * k,
            },
            tab: TabSize {
                width: spec.tab_width * k,
                depth: spec.tab_depth * k,
                height: spec.tab_height * k,
                tolerance: spec.tab_tolerance * k,
            },
            cut_margin: spec.cut_margin.map_or(DEFAULT_CUT_MARGIN_MM, |m| m * k),
        }
    }

    fn validate(&self) -> Result<(), HouseError> {
        for (field, value) in [
            ("wall_thickness", self.wall_thickness),
            ("house_width", self.house_width),
            ("house_depth", self.house_depth),
            ("wall_height", self.wall_height),
            ("peak_height", self.peak_height),
            ("door_width", self.door.width),
            ("door_height", self.door.height),
            ("door_offset", self.door.offset),
            ("window_width", self.window.width),
            ("window_height", self.window.height),
            ("window_offset", self.window.offset),
            ("roof_overhang", self.roof_overhang),
            ("roof_thickness", self.roof_thickness),
            ("chimney_width", self.chimney.width),
            ("chimney_depth", self.chimney.depth),
            ("chimney_height", self.chimney.height),
            ("tab_width", self.tab.width),
            ("tab_depth", self.tab.depth),
            ("tab_height", self.tab.height),
            ("cut_margin", self.cut_margin),
        ] {
            positive(field, value)?;
        }
        if !(self.tab.tolerance.is_finite() && self.tab.tolerance >= 0.0) {
            return Err(HouseError::invalid_dimension(
                "tab_tolerance",
                format!("must be finite and >= 0, got {}", self.tab.tolerance),
            ));
        }

        let h = self.wall_height;
        if self.door.top() > h {
            return Err(HouseError::invalid_dimension(
                "door_height",
                format!("door top {:.3} mm is above the wall height {h:.3} mm", self.door.top()),
            ));
        }
        if self.window.top() > h {
            return Err(HouseError::invalid_dimension(
                "window_height",
                format!(
                    "window top {:.3} mm is above the wall height {h:.3} mm",
                    self.window.top()
                ),
            ));
        }
        if self.door.width >= self.house_width {
            return Err(HouseError::invalid_dimension(
                "door_width",
                "must be narrower than the house",
            ));
        }
        // Windows sit at ±width/3
        let w = self.house_width;
        if self.window.width >= w / 3.0 {
            return Err(HouseError::invalid_dimension(
                "window_width",
                "must be less than a third of the house width",
            ));
        }
        if w / 3.0 - self.window.width / 2.0 <= self.door.width / 2.0 {
            return Err(HouseError::invalid_dimension(
                "window_width",
                "front windows overlap the door",
            ));
        }
        if self.window.width >= self.house_depth {
            return Err(HouseError::invalid_dimension(
                "window_width",
                "side wall windows must be narrower than the house depth",
            ));
        }
        if self.tab.height >= h / 2.0 {
            return Err(HouseError::invalid_dimension(
                "tab_height",
                "must be less than half the wall height",
            ));
        }
        // Tabs are added after the windows are cut; they must not refill them
        let tab_inner = w / 2.0 + self.tab.depth / 2.0 - self.tab.width / 2.0;
        let window_outer = w / 3.0 + self.window.width / 2.0;
        if tab_inner <= window_outer {
            return Err(HouseError::invalid_dimension(
                "tab_width",
                format!(
                    "edge tabs reach x = {tab_inner:.3} mm, inside the front windows (to {window_outer:.3} mm)"
                ),
            ));
        }
        let slot_inner = self.house_depth / 2.0 - self.tab.width / 2.0 - self.tab.tolerance;
        if slot_inner <= self.window.width / 2.0 {
            return Err(HouseError::invalid_dimension(
                "tab_width",
                "side wall slots cut into the side window",
            ));
        }
        if 2.0 * self.chimney_wall() >= self.chimney.width.min(self.chimney.depth) {
            return Err(HouseError::invalid_dimension(
                "chimney_width",
                "chimney walls leave no flue",
            ));
        }
        Ok(())
    }

    pub fn wall_thickness(&self) -> f64 {
        self.wall_thickness
    }

    pub fn house_width(&self) -> f64 {
        self.house_width
    }

    pub fn house_depth(&self) -> f64 {
        self.house_depth
    }

    pub fn wall_height(&self) -> f64 {
        self.wall_height
    }

    pub fn peak_height(&self) -> f64 {
        self.peak_height
    }

    pub fn door(&self) -> Opening {
        self.door
    }

    pub fn window(&self) -> Opening {
        self.window
    }

    pub fn roof_overhang(&self) -> f64 {
        self.roof_overhang
    }

    pub fn roof_thickness(&self) -> f64 {
        self.roof_thickness
    }

    pub fn chimney(&self) -> BoxSize {
        self.chimney
    }

    pub fn tab(&self) -> TabSize {
        self.tab
    }

    /// Extra length added to every cutting tool along its cutting axis.
    pub fn cut_margin(&self) -> f64 {
        self.cut_margin
    }

    /// Depth of a tool cutting through material of the given thickness.
    pub fn cutter_depth(&self, material: f64) -> f64 {
        material + self.cut_margin
    }

    /// Slope length from eave to ridge plus the overhang.
    pub fn roof_length(&self) -> f64 {
        (self.house_depth / 2.0).hypot(self.peak_height) + self.roof_overhang
    }

    /// House width plus the overhang on both ends.
    pub fn roof_width(&self) -> f64 {
        self.house_width + 2.0 * self.roof_overhang
    }

    /// Chimney walls are half as thick as the house walls.
    pub fn chimney_wall(&self) -> f64 {
        self.wall_thickness / 2.0
    }

    /// Height of the side walls at the ridge.
    pub fn gable_height(&self) -> f64 {
        self.wall_height + self.peak_height
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), HouseError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(HouseError::invalid_dimension(
            field,
            format!("must be finite and > 0, got {value}"),
        ))
    }
}

/// How door and window openings are shaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningStyle {
    #[default]
    Arched,
    Rectangular,
}

/// Variant switches for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub opening_style: OpeningStyle,
    /// Emit tabs and slots.
    pub fasteners: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            opening_style: OpeningStyle::Arched,
            fasteners: true,
        }
    }
}
