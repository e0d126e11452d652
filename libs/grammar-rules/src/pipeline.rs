//! # Pipeline Driver
//!
//! The deterministic, straight-line invocation sequence that builds the
//! hospital corpus. The driver threads each stage's resulting shape id
//! into the next stage; its only state is "current shape". There is no
//! branching, retry, or conditional skip: a failed stage halts everything
//! downstream.

use crate::error::RuleError;
use crate::rules;
use grammar_scene::{standard_library, AssetLibrary, Scene, ShapeId};
use rayon::prelude::*;
use tracing::debug;

/// Marks a completed stage: designates the stage output as the active
/// shape and traces progress.
fn advance(scene: &mut Scene, stage: &'static str, id: ShapeId) -> Result<ShapeId, RuleError> {
    scene.set_active(id)?;
    debug!(stage, %id, "stage complete");
    Ok(id)
}

/// Generates the compound building shape in the given working set.
///
/// Runs the fixed fourteen-stage sequence R1 → R2 → R3 → R4(1) → R4(3) →
/// R5 → R6 → R5b → R7 → R8x → R8y → R8z(1) → R8z(2) → R8z(3) and returns
/// the id of the single final shape. On failure the generation aborts with
/// no final shape; the offending rule has already reported the missing
/// name.
///
/// # Example
///
/// ```rust
/// use grammar_rules::pipeline::generate;
/// use grammar_scene::{standard_library, Scene};
///
/// let library = standard_library().unwrap();
/// let mut scene = Scene::new();
/// let shape = generate(&mut scene, &library).unwrap();
/// assert_eq!(scene.len(), 1);
/// assert_eq!(scene.lookup(shape).unwrap().name(), "shape_r05");
/// ```
pub fn generate(scene: &mut Scene, library: &impl AssetLibrary) -> Result<ShapeId, RuleError> {
    let mut shape = rules::rule_01(scene, library)?;
    shape = advance(scene, "rule_01", shape)?;

    shape = rules::rule_02(scene, library, shape)?;
    shape = advance(scene, "rule_02", shape)?;

    shape = rules::rule_03(scene, shape)?;
    shape = advance(scene, "rule_03", shape)?;

    shape = rules::rule_04(scene, shape, 1)?;
    shape = advance(scene, "rule_04(1)", shape)?;

    shape = rules::rule_04(scene, shape, 3)?;
    shape = advance(scene, "rule_04(3)", shape)?;

    shape = rules::rule_05(scene, library, shape)?;
    shape = advance(scene, "rule_05", shape)?;

    shape = rules::rule_06(scene, library, shape)?;
    shape = advance(scene, "rule_06", shape)?;

    // The variant entry point is addressed by working-set name
    let name = scene.lookup(shape)?.name().to_string();
    shape = rules::rule_05b(scene, library, &name)?;
    shape = advance(scene, "rule_05b", shape)?;

    shape = rules::rule_07(scene, shape)?;
    shape = advance(scene, "rule_07", shape)?;

    shape = rules::rule_08_x(scene, shape)?;
    shape = advance(scene, "rule_08_x", shape)?;

    shape = rules::rule_08_y(scene, shape)?;
    shape = advance(scene, "rule_08_y", shape)?;

    for n in 1..=3u32 {
        shape = rules::rule_08_z(scene, shape, n)?;
        shape = advance(scene, "rule_08_z", shape)?;
    }

    Ok(shape)
}

/// Generates the hospital corpus against the standard asset vocabulary,
/// returning the working set and the final shape id.
pub fn generate_hospital() -> Result<(Scene, ShapeId), RuleError> {
    let library = standard_library()?;
    let mut scene = Scene::new();
    let shape = generate(&mut scene, &library)?;
    Ok((scene, shape))
}

/// Runs one independent pipeline per library in parallel.
///
/// Each run owns an isolated working set, so runs cannot observe each
/// other's shapes; results are returned in input order.
pub fn generate_batch<L>(libraries: &[L]) -> Vec<Result<(Scene, ShapeId), RuleError>>
where
    L: AssetLibrary + Sync,
{
    libraries
        .par_iter()
        .map(|library| {
            let mut scene = Scene::new();
            let shape = generate(&mut scene, library)?;
            Ok((scene, shape))
        })
        .collect()
}
