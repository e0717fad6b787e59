//! # Mesh Errors
//!
//! Error types for mesh generation, boolean and export operations.

use thiserror::Error;

/// Errors that can occur while building, combining or exporting meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero size, too few vertices, non-finite input)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Polygon triangulation failed
    #[error("Triangulation failed: {message}")]
    Triangulation { message: String },

    /// Boolean operation failed
    #[error("Boolean {operation} failed: {message}")]
    BooleanFailed {
        operation: &'static str,
        message: String,
    },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Writing an exported mesh failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates a triangulation error.
    pub fn triangulation(message: impl Into<String>) -> Self {
        Self::Triangulation {
            message: message.into(),
        }
    }

    /// Creates a boolean operation failed error.
    pub fn boolean_failed(operation: &'static str, message: impl Into<String>) -> Self {
        Self::BooleanFailed {
            operation,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::boolean_failed("union", "empty operand");
        assert_eq!(err.to_string(), "Boolean union failed: empty operand");
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
