//! # Generation Pipeline
//!
//! Runs the seven part pipelines in parallel and collects one outcome per
//! part. A failing part never stops the others.

use crate::dimensions::{Dimensions, GenerationOptions};
use crate::error::PartError;
use crate::parts::{build_part, PartKind};
use crate::solid::Solid;
use rayon::prelude::*;
use tracing::{info, instrument, warn};

/// Outcome of one part pipeline.
#[derive(Debug)]
pub struct GeneratedPart {
    pub kind: PartKind,
    pub result: Result<Solid, PartError>,
}

impl GeneratedPart {
    pub fn solid(&self) -> Option<&Solid> {
        self.result.as_ref().ok()
    }
}

/// Outcomes of every part, in [`PartKind::ALL`] order.
#[derive(Debug)]
pub struct HouseReport {
    pub parts: Vec<GeneratedPart>,
}

impl HouseReport {
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedPart> {
        self.parts.iter()
    }

    pub fn successes(&self) -> impl Iterator<Item = (PartKind, &Solid)> {
        self.parts
            .iter()
            .filter_map(|p| p.solid().map(|solid| (p.kind, solid)))
    }

    pub fn failures(&self) -> impl Iterator<Item = &PartError> {
        self.parts.iter().filter_map(|p| p.result.as_ref().err())
    }

    /// True if every part was built.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    pub fn get(&self, kind: PartKind) -> Option<&GeneratedPart> {
        self.parts.iter().find(|p| p.kind == kind)
    }
}

/// Builds every part of the house.
///
/// ```rust,no_run
/// use gingerbread_house::{generate_house, Dimensions, GenerationOptions, PartKind};
///
/// let report = generate_house(&Dimensions::default(), &GenerationOptions::default());
/// let chimney = report.get(PartKind::Chimney).and_then(|p| p.solid()).unwrap();
/// assert!(chimney.volume() > 0.0);
/// ```
#[instrument(skip_all, fields(style = ?options.opening_style, fasteners = options.fasteners))]
pub fn generate_house(dims: &Dimensions, options: &GenerationOptions) -> HouseReport {
    let parts: Vec<GeneratedPart> = PartKind::ALL
        .par_iter()
        .map(|&kind| {
            let result = build_part(kind, dims, options).map_err(|source| PartError {
                part: kind,
                source,
            });
            match &result {
                Ok(solid) => info!(part = %kind, triangles = solid.triangle_count(), "part built"),
                Err(err) => warn!(part = %kind, error = %err, "part failed"),
            }
            GeneratedPart { kind, result }
        })
        .collect();

    HouseReport { parts }
}
