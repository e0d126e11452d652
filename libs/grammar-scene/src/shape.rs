//! # Shape and Transform
//!
//! The unit of composition in the pipeline: named geometry plus a world
//! transform plus a stable identity.

use glam::{DMat4, DVec3};
use grammar_mesh::Mesh;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// SHAPE ID
// =============================================================================

/// Stable identity of a shape within one working set.
///
/// Rules thread these through the pipeline instead of relying on string
/// identity; the name remains a debug label and working-set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub(crate) u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape #{}", self.0)
    }
}

// =============================================================================
// TRANSFORM
// =============================================================================

/// World transform of a shape: translation, a single Z-axis rotation, and
/// non-uniform scale.
///
/// The world matrix is always `T · Rz · S`. The building model is a 2.5D
/// extruded footprint, so no rule ever composes rotations about X or Y,
/// and no operator can introduce shear.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// World-space translation.
    pub translation: DVec3,
    /// Rotation about the world Z axis, in radians.
    pub rotation_z: f64,
    /// Non-uniform scale.
    pub scale: DVec3,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        translation: DVec3::ZERO,
        rotation_z: 0.0,
        scale: DVec3::ONE,
    };

    /// Creates a pure translation.
    pub fn from_translation(translation: DVec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// The 4x4 world matrix `T · Rz · S`.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(self.translation)
            * DMat4::from_rotation_z(self.rotation_z)
            * DMat4::from_scale(self.scale)
    }

    /// Applies only the rotation and scale parts to a point.
    ///
    /// Used by origin re-anchoring to compensate the translation for a
    /// local mesh shift without moving the shape in world space.
    pub fn rotate_scale_point(&self, point: DVec3) -> DVec3 {
        DMat4::from_rotation_z(self.rotation_z)
            .transform_point3(DMat4::from_scale(self.scale).transform_point3(point))
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// SHAPE
// =============================================================================

/// Named geometry plus world transform, the unit of composition in the
/// pipeline.
///
/// The mesh is stored in local coordinates; world geometry is obtained by
/// applying [`Transform::matrix`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Stable identity within the owning working set.
    pub(crate) id: ShapeId,
    /// Working-set name; reassigned by rules to signal pipeline stage.
    pub(crate) name: String,
    /// Geometry in local coordinates.
    pub mesh: Mesh,
    /// World transform.
    pub transform: Transform,
}

impl Shape {
    /// The shape's stable id.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// The shape's current working-set name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shape's world matrix.
    pub fn world_matrix(&self) -> DMat4 {
        self.transform.matrix()
    }

    /// The shape's geometry with the world transform applied.
    pub fn world_mesh(&self) -> Mesh {
        let mut mesh = self.mesh.clone();
        mesh.transform(&self.world_matrix());
        mesh
    }

    /// World-space axis-aligned bounding box.
    pub fn world_bounding_box(&self) -> (DVec3, DVec3) {
        self.world_mesh().bounding_box()
    }
}
