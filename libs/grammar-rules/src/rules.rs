//! # Rule Catalogue
//!
//! The named generation rules. Each rule is a fixed composition of
//! geometric operators plus, for some rules, an asset-library fetch; each
//! consumes one or two shapes and emits exactly one resulting shape,
//! renamed to signal its pipeline stage.
//!
//! A rule that cannot find its asset (`AssetNotFound`) or predecessor
//! shape (`ShapeNotFound`) reports a diagnostic and aborts, leaving the
//! working set unchanged. There is no retry.

use crate::error::RuleError;
use crate::ops;
use config::constants::{
    CORE_CLOSING_ANGLE_RAD, FACADE_ANGLE_DEG, MODULE_HEIGHT, SIDE_CLOSING_ANGLE_RAD,
    SYMMETRY_ANGLE_DEG, WORLD_ANCHOR_X, WORLD_ANCHOR_Y,
};
use glam::DVec3;
use grammar_mesh::Axis;
use grammar_scene::library::{
    OBJ_CORE, OBJ_FOOTPRINT, OBJ_SIDE_PRIMARY, OBJ_SIDE_SECONDARY, OBJ_WINDOW,
};
use grammar_scene::{AssetLibrary, Scene, SceneError, ShapeId, Transform};
use tracing::warn;

/// Runs a rule body, reporting any failure as a rule-level diagnostic.
fn run_rule<T>(
    rule: &'static str,
    body: impl FnOnce() -> Result<T, SceneError>,
) -> Result<T, RuleError> {
    body().map_err(|err| {
        warn!(rule, %err, "rule aborted");
        RuleError::from(err)
    })
}

/// R1: instantiates the base footprint wing from the library.
pub fn rule_01(scene: &mut Scene, library: &impl AssetLibrary) -> Result<ShapeId, RuleError> {
    run_rule("rule_01", || {
        let mesh = library.instantiate(OBJ_FOOTPRINT)?;
        scene.link(OBJ_FOOTPRINT, mesh, Transform::IDENTITY)
    })
}

/// R2: instantiates the window cutter and carves it out of the footprint.
pub fn rule_02(
    scene: &mut Scene,
    library: &impl AssetLibrary,
    footprint: ShapeId,
) -> Result<ShapeId, RuleError> {
    run_rule("rule_02", || {
        // Abort before linking anything if the predecessor is gone
        scene.lookup(footprint)?;

        let mesh = library.instantiate(OBJ_WINDOW)?;
        let cutter = scene.link(OBJ_WINDOW, mesh, Transform::IDENTITY)?;
        ops::boolean_cut(scene, footprint, cutter)?;
        Ok(footprint)
    })
}

/// R3: mirrors the carved wing across X, turns the duplicate by the
/// symmetry angle, and joins the pair into one symmetric shape.
pub fn rule_03(scene: &mut Scene, shape: ShapeId) -> Result<ShapeId, RuleError> {
    run_rule("rule_03", || {
        let (duplicate_mesh, duplicate_name) = {
            let original = scene.lookup(shape)?;
            (
                ops::mirror_reflect(original, Axis::X),
                format!("{}.mirror", original.name()),
            )
        };

        let duplicate = scene.link(
            duplicate_name,
            duplicate_mesh,
            Transform {
                rotation_z: SYMMETRY_ANGLE_DEG.to_radians(),
                ..Transform::IDENTITY
            },
        )?;
        ops::merge_join(scene, shape, duplicate)?;

        scene.rename(shape, "shape_r03")?;
        Ok(shape)
    })
}

/// R4: mirrors across X, joins, then recomposes the world transform with a
/// rotation of `n` times the symmetry angle.
pub fn rule_04(scene: &mut Scene, shape: ShapeId, n: u32) -> Result<ShapeId, RuleError> {
    run_rule("rule_04", || {
        let (duplicate_mesh, duplicate_name) = {
            let original = scene.lookup(shape)?;
            (
                ops::mirror_reflect(original, Axis::X),
                format!("{}.mirror", original.name()),
            )
        };

        let duplicate = scene.link(duplicate_name, duplicate_mesh, Transform::IDENTITY)?;
        ops::merge_join(scene, shape, duplicate)?;

        let merged = scene.lookup_mut(shape)?;
        let (translation, scale) = (merged.transform.translation, merged.transform.scale);
        ops::rigid_recompose(
            merged,
            translation,
            f64::from(n) * SYMMETRY_ANGLE_DEG.to_radians(),
            scale,
        );

        scene.rename(shape, "shape_r04")?;
        Ok(shape)
    })
}

/// R5: fetches the first side piece, joins it, and imposes the side
/// closing angle so the compound ends at its canonical orientation.
pub fn rule_05(
    scene: &mut Scene,
    library: &impl AssetLibrary,
    shape: ShapeId,
) -> Result<ShapeId, RuleError> {
    run_rule("rule_05", || {
        scene.lookup(shape)?;

        let mesh = library.instantiate(OBJ_SIDE_SECONDARY)?;
        let side = scene.link(OBJ_SIDE_SECONDARY, mesh, Transform::IDENTITY)?;
        ops::merge_join(scene, shape, side)?;

        let merged = scene.lookup_mut(shape)?;
        let (translation, scale) = (merged.transform.translation, merged.transform.scale);
        ops::rigid_recompose(merged, translation, SIDE_CLOSING_ANGLE_RAD, scale);

        scene.rename(shape, "shape_r05")?;
        Ok(shape)
    })
}

/// R5b: variant entry point addressed by working-set name. Fetches the
/// secondary facade piece, orients it by the facade angle, and joins it.
pub fn rule_05b(
    scene: &mut Scene,
    library: &impl AssetLibrary,
    name: &str,
) -> Result<ShapeId, RuleError> {
    run_rule("rule_05b", || {
        let shape = scene.lookup_name(name)?;

        let mesh = library.instantiate(OBJ_SIDE_PRIMARY)?;
        let side = scene.link(OBJ_SIDE_PRIMARY, mesh, Transform::IDENTITY)?;

        let piece = scene.lookup_mut(side)?;
        let (translation, scale) = (piece.transform.translation, piece.transform.scale);
        ops::rigid_recompose(piece, translation, FACADE_ANGLE_DEG.to_radians(), scale);

        ops::merge_join(scene, shape, side)?;

        scene.rename(shape, "shape_r05")?;
        Ok(shape)
    })
}

/// R6: fetches the core volume, joins it, and imposes the core closing
/// angle.
pub fn rule_06(
    scene: &mut Scene,
    library: &impl AssetLibrary,
    shape: ShapeId,
) -> Result<ShapeId, RuleError> {
    run_rule("rule_06", || {
        scene.lookup(shape)?;

        let mesh = library.instantiate(OBJ_CORE)?;
        let core = scene.link(OBJ_CORE, mesh, Transform::IDENTITY)?;
        ops::merge_join(scene, shape, core)?;

        let merged = scene.lookup_mut(shape)?;
        let (translation, scale) = (merged.transform.translation, merged.transform.scale);
        ops::rigid_recompose(merged, translation, CORE_CLOSING_ANGLE_RAD, scale);

        scene.rename(shape, "shape_r06")?;
        Ok(shape)
    })
}

/// R7: snaps pending transforms into the geometry, moves the compound to
/// the fixed world anchor (x and y fixed, z preserved), and re-anchors the
/// origin to the geometric median.
pub fn rule_07(scene: &mut Scene, shape: ShapeId) -> Result<ShapeId, RuleError> {
    run_rule("rule_07", || {
        let anchored = scene.lookup_mut(shape)?;
        ops::apply_transform(anchored);

        let z = anchored.transform.translation.z;
        ops::recenter_origin(anchored, DVec3::new(WORLD_ANCHOR_X, WORLD_ANCHOR_Y, z));
        Ok(shape)
    })
}

/// R8x: lateral symmetry across the X axis.
pub fn rule_08_x(scene: &mut Scene, shape: ShapeId) -> Result<ShapeId, RuleError> {
    run_rule("rule_08_x", || {
        ops::array_replicate(scene, shape, Axis::X, 0, MODULE_HEIGHT)?;
        Ok(shape)
    })
}

/// R8y: bilateral symmetry across the Y axis.
pub fn rule_08_y(scene: &mut Scene, shape: ShapeId) -> Result<ShapeId, RuleError> {
    run_rule("rule_08_y", || {
        ops::array_replicate(scene, shape, Axis::Y, 0, MODULE_HEIGHT)?;
        Ok(shape)
    })
}

/// R8z: vertical stacking; mirrors across Z, joins, and lifts the result
/// by `n` modules.
pub fn rule_08_z(scene: &mut Scene, shape: ShapeId, n: u32) -> Result<ShapeId, RuleError> {
    run_rule("rule_08_z", || {
        ops::array_replicate(scene, shape, Axis::Z, n, MODULE_HEIGHT)?;
        Ok(shape)
    })
}
