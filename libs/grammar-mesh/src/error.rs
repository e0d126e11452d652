//! # Mesh Errors
//!
//! Error types for mesh construction and export.

use thiserror::Error;

/// Errors that can occur while building or exporting meshes.
#[derive(Debug, Error)]
pub enum MeshError {
    /// Degenerate geometry (zero-size primitive, too few footprint points).
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Invalid mesh topology (bad indices, zero-area triangles).
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// I/O failure while writing an export file.
    #[error("Export failed: {0}")]
    Export(#[from] std::io::Error),
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("box size must be positive");
        assert!(err.to_string().contains("Degenerate"));
    }
}
