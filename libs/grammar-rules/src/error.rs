//! # Rule Errors
//!
//! Error type for rule execution and pipeline driving.
//!
//! Rules do not retry: a rule that cannot find its asset or predecessor
//! shape reports a diagnostic and returns an error, and every downstream
//! stage that depended on it fails in turn. The driver propagates rather
//! than catches.

use grammar_mesh::MeshError;
use grammar_scene::SceneError;
use thiserror::Error;

/// Errors that can occur while executing rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Working-set or asset-library failure (missing shape, missing asset).
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Mesh kernel failure (export, degenerate geometry).
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wraps_scene_error() {
        let err = RuleError::from(SceneError::asset_not_found("window"));
        assert!(err.to_string().contains("window"));
    }
}
