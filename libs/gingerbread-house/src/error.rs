//! # House Errors
//!
//! Error types for dimension validation and part construction.

use crate::parts::PartKind;
use gingerbread_mesh::MeshError;
use thiserror::Error;

/// Errors raised while validating inputs or building solids.
#[derive(Debug, Error)]
pub enum HouseError {
    /// A measurement violates a dimension rule.
    #[error("invalid dimension `{field}`: {reason}")]
    InvalidDimension { field: &'static str, reason: String },

    /// A profile or solid could not be formed from the given values.
    #[error("invalid geometry: {message}")]
    InvalidGeometry { message: String },

    /// The mesh kernel failed or produced an unusable result.
    #[error("{operation} failed: {source}")]
    Geometry {
        operation: &'static str,
        #[source]
        source: MeshError,
    },
}

impl HouseError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }

    /// Wraps a kernel error with the operation that raised it.
    pub fn geometry(operation: &'static str, source: MeshError) -> Self {
        Self::Geometry { operation, source }
    }
}

/// A part pipeline failure, naming the part.
#[derive(Debug, Error)]
#[error("failed to build {part}: {source}")]
pub struct PartError {
    pub part: PartKind,
    #[source]
    pub source: HouseError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_display() {
        let err = HouseError::invalid_dimension("door_height", "exceeds wall height");
        assert_eq!(
            err.to_string(),
            "invalid dimension `door_height`: exceeds wall height"
        );
    }

    #[test]
    fn test_geometry_error_keeps_source() {
        let err = HouseError::geometry("cut", MeshError::degenerate("empty result"));
        assert!(err.to_string().starts_with("cut failed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_part_error_names_part() {
        let err = PartError {
            part: PartKind::Chimney,
            source: HouseError::invalid_geometry("no volume"),
        };
        assert_eq!(
            err.to_string(),
            "failed to build chimney: invalid geometry: no volume"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HouseError>();
        assert_send_sync::<PartError>();
    }
}
