//! # Scene Errors
//!
//! Error types for working-set and asset-library operations.
//!
//! `AssetNotFound` and `ShapeNotFound` are recoverable at the rule
//! boundary: the failing rule reports a diagnostic and returns an error
//! result rather than panicking, and the working set is left unchanged.

use grammar_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur in working-set and library operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Requested library object is absent.
    #[error("Asset not found in library: {object}")]
    AssetNotFound { object: String },

    /// Requested working-set shape is absent.
    #[error("Shape not found in working set: {shape}")]
    ShapeNotFound { shape: String },

    /// A shape with this name is already linked.
    #[error("Shape name already in use: {name}")]
    DuplicateName { name: String },

    /// Mesh kernel error while authoring an asset.
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

impl SceneError {
    /// Creates an asset-not-found error.
    pub fn asset_not_found(object: impl Into<String>) -> Self {
        Self::AssetNotFound {
            object: object.into(),
        }
    }

    /// Creates a shape-not-found error.
    pub fn shape_not_found(shape: impl ToString) -> Self {
        Self::ShapeNotFound {
            shape: shape.to_string(),
        }
    }
}
