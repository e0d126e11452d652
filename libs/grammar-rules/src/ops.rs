//! # Geometric Operators
//!
//! The primitive operations the rule catalogue composes. Each operator is a
//! pure function over shapes and the working set: given identical inputs it
//! produces identical results, and a failed lookup leaves the working set
//! unchanged.

use glam::DVec3;
use grammar_mesh::{difference, Axis, Mesh};
use grammar_scene::{Scene, SceneError, Shape, ShapeId, Transform};

// =============================================================================
// BOOLEAN CUT
// =============================================================================

/// Carves `cutter`'s solid volume out of `target`.
///
/// Both operands are taken in world space; the result replaces `target`'s
/// geometry (re-expressed in its local frame). The cutter is discarded from
/// the working set, not merged.
///
/// Both operands must be manifold solids; behavior on non-manifold input is
/// the kernel's.
pub fn boolean_cut(scene: &mut Scene, target: ShapeId, cutter: ShapeId) -> Result<(), SceneError> {
    let target_world = scene.lookup(target)?.world_mesh();
    let cutter_world = scene.lookup(cutter)?.world_mesh();

    let mut result = difference(&target_world, &cutter_world);

    let shape = scene.lookup_mut(target)?;
    result.transform(&shape.world_matrix().inverse());
    shape.mesh = result;

    scene.remove(cutter)?;
    Ok(())
}

// =============================================================================
// MIRROR REFLECT
// =============================================================================

/// Produces a duplicate of `shape` reflected through the world-origin plane
/// perpendicular to `axis`.
///
/// The duplicate's geometry is world-baked (negated coordinate, reversed
/// winding) and carries an identity transform. The original is not mutated;
/// the caller links the duplicate into the working set.
pub fn mirror_reflect(shape: &Shape, axis: Axis) -> Mesh {
    let mut mesh = shape.world_mesh();
    mesh.mirror(axis);
    mesh
}

// =============================================================================
// MERGE JOIN
// =============================================================================

/// Unions `secondary`'s geometry into `primary`'s mesh.
///
/// A topological merge, not a CSG union: the secondary's vertices are
/// re-expressed in the primary's local frame and appended. The primary
/// keeps its name and transform; the secondary ceases to exist as a
/// standalone entity.
pub fn merge_join(scene: &mut Scene, primary: ShapeId, secondary: ShapeId) -> Result<(), SceneError> {
    let (secondary_matrix, secondary_mesh) = {
        let shape = scene.lookup(secondary)?;
        (shape.world_matrix(), shape.mesh.clone())
    };

    let primary_shape = scene.lookup_mut(primary)?;
    let relative = primary_shape.world_matrix().inverse() * secondary_matrix;

    let mut absorbed = secondary_mesh;
    absorbed.transform(&relative);
    primary_shape.mesh.merge(&absorbed);

    scene.remove(secondary)?;
    Ok(())
}

// =============================================================================
// RIGID RECOMPOSE
// =============================================================================

/// Rebuilds the shape's world transform as `T(translation) · Rz(rotation_z)
/// · S(scale)`, discarding any prior rotation.
///
/// Rules pass the shape's current translation and scale to impose a
/// canonical end-orientation after a merge instead of accumulating
/// rotations. Idempotent for identical inputs.
pub fn rigid_recompose(shape: &mut Shape, translation: DVec3, rotation_z: f64, scale: DVec3) {
    shape.transform = Transform {
        translation,
        rotation_z,
        scale,
    };
}

// =============================================================================
// TRANSFORM SNAP
// =============================================================================

/// Bakes the shape's world matrix into its mesh and resets the transform to
/// identity.
pub fn apply_transform(shape: &mut Shape) {
    let matrix = shape.world_matrix();
    shape.mesh.transform(&matrix);
    shape.transform = Transform::IDENTITY;
}

// =============================================================================
// ORIGIN RE-ANCHORING
// =============================================================================

/// Re-anchors the shape's local origin to the geometric median of its own
/// geometry without moving it in world space.
///
/// Subsequent mirror and array operations then pivot about the shape's
/// center rather than an inherited, stale origin.
pub fn anchor_origin_median(shape: &mut Shape) {
    let median = shape.mesh.median();
    shape.mesh.translate(-median);
    shape.transform.translation += shape.transform.rotate_scale_point(median);
}

/// Moves the shape to `reference` in world space (translation only), then
/// re-anchors the local origin to the geometric median of its geometry.
pub fn recenter_origin(shape: &mut Shape, reference: DVec3) {
    shape.transform.translation = reference;
    anchor_origin_median(shape);
}

// =============================================================================
// ARRAY REPLICATE
// =============================================================================

/// Mirrors the shape along `axis`, merges the mirrored copy back, then
/// translates the result by `count × unit_offset` along world Z and
/// re-anchors the origin to the geometric median.
///
/// Used with `count = 0` for pure lateral symmetry (X/Y) and with a
/// positive count for vertical stacking of repeated floors.
pub fn array_replicate(
    scene: &mut Scene,
    shape: ShapeId,
    axis: Axis,
    count: u32,
    unit_offset: f64,
) -> Result<(), SceneError> {
    let (duplicate_mesh, duplicate_name) = {
        let original = scene.lookup(shape)?;
        (
            mirror_reflect(original, axis),
            format!("{}.mirror", original.name()),
        )
    };

    let duplicate = scene.link(duplicate_name, duplicate_mesh, Transform::IDENTITY)?;
    merge_join(scene, shape, duplicate)?;

    let merged = scene.lookup_mut(shape)?;
    merged.transform.translation.z += f64::from(count) * unit_offset;
    anchor_origin_median(merged);
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
