//! # Pipeline Tests
//!
//! End-to-end tests for the full fourteen-stage generation sequence.

use crate::error::RuleError;
use crate::pipeline::{generate, generate_batch, generate_hospital};
use crate::rules;
use config::constants::MODULE_HEIGHT;
use glam::DVec3;
use grammar_mesh::{Axis, Mesh};
use grammar_scene::library::{OBJ_CORE, OBJ_FOOTPRINT, OBJ_SIDE_PRIMARY, OBJ_SIDE_SECONDARY, OBJ_WINDOW};
use grammar_scene::{standard_library, AssetLibrary, MemoryLibrary, Scene, SceneError};
use std::collections::HashMap;

const TOL: f64 = 1e-6;

/// Asserts that reflecting `mesh` about `axis` reproduces its vertex set
/// within tolerance (multiset match via grid hashing).
fn assert_mirror_symmetric(mesh: &Mesh, axis: Axis) {
    let mut reflected = mesh.clone();
    reflected.mirror(axis);

    let key = |v: DVec3| {
        (
            (v.x / TOL).round() as i64,
            (v.y / TOL).round() as i64,
            (v.z / TOL).round() as i64,
        )
    };

    let mut cells: HashMap<(i64, i64, i64), Vec<DVec3>> = HashMap::new();
    for v in mesh.vertices() {
        cells.entry(key(*v)).or_default().push(*v);
    }

    'verts: for v in reflected.vertices() {
        let (kx, ky, kz) = key(*v);
        // Check the neighboring cells too so values straddling a grid
        // boundary still match
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(bucket) = cells.get_mut(&(kx + dx, ky + dy, kz + dz)) {
                        if let Some(pos) = bucket.iter().position(|c| (*c - *v).length() < TOL) {
                            bucket.swap_remove(pos);
                            continue 'verts;
                        }
                    }
                }
            }
        }
        panic!("no {axis:?}-mirror counterpart for vertex {v:?}");
    }
}

#[test]
fn test_full_pipeline_produces_single_final_shape() {
    let (scene, shape) = generate_hospital().unwrap();

    assert_eq!(scene.len(), 1, "all intermediates must be consumed");
    assert_eq!(scene.lookup(shape).unwrap().name(), "shape_r05");
    assert_eq!(scene.active(), Some(shape));
}

#[test]
fn test_full_pipeline_stacks_three_modules() {
    let (scene, shape) = generate_hospital().unwrap();
    let (min, max) = scene.lookup(shape).unwrap().world_bounding_box();

    // One module of footprint, mirrored and lifted three times: the span
    // doubles at each stacking stage before the lift, ending at
    // [-1, 7] modules
    assert!((min.z + MODULE_HEIGHT).abs() < TOL, "min.z = {}", min.z);
    assert!((max.z - 7.0 * MODULE_HEIGHT).abs() < TOL, "max.z = {}", max.z);
    assert!(((max.z - min.z) - 8.0 * MODULE_HEIGHT).abs() < TOL);
}

#[test]
fn test_full_pipeline_output_is_laterally_symmetric() {
    let (scene, shape) = generate_hospital().unwrap();
    let world = scene.lookup(shape).unwrap().world_mesh();

    assert_mirror_symmetric(&world, Axis::X);
    assert_mirror_symmetric(&world, Axis::Y);
}

#[test]
fn test_full_pipeline_output_validates() {
    let (scene, shape) = generate_hospital().unwrap();
    assert!(!scene.lookup(shape).unwrap().mesh.is_empty());
}

#[test]
fn test_missing_asset_aborts_first_rule() {
    let library = MemoryLibrary::new();
    let mut scene = Scene::new();

    let err = rules::rule_01(&mut scene, &library).unwrap_err();
    assert!(matches!(
        err,
        RuleError::Scene(SceneError::AssetNotFound { .. })
    ));
    assert!(scene.is_empty(), "no partial shape may be linked");
}

#[test]
fn test_missing_core_asset_halts_pipeline() {
    let full = standard_library().unwrap();
    let mut partial = MemoryLibrary::new();
    for object in [OBJ_FOOTPRINT, OBJ_WINDOW, OBJ_SIDE_PRIMARY, OBJ_SIDE_SECONDARY] {
        partial.insert(object, full.instantiate(object).unwrap());
    }

    let mut scene = Scene::new();
    let err = generate(&mut scene, &partial).unwrap_err();

    match err {
        RuleError::Scene(SceneError::AssetNotFound { object }) => assert_eq!(object, OBJ_CORE),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!scene.contains_name(OBJ_CORE));
}

#[test]
fn test_window_cut_removes_volume() {
    let library = standard_library().unwrap();
    let mut scene = Scene::new();

    let footprint = rules::rule_01(&mut scene, &library).unwrap();
    let uncut_volume = scene.lookup(footprint).unwrap().mesh.volume();

    rules::rule_02(&mut scene, &library, footprint).unwrap();
    let cut_volume = scene.lookup(footprint).unwrap().mesh.volume();

    assert!(cut_volume < uncut_volume);
    assert_eq!(scene.len(), 1, "cutter must be consumed");
}

#[test]
fn test_generate_batch_runs_are_isolated() {
    let libraries = vec![standard_library().unwrap(), standard_library().unwrap()];

    let results = generate_batch(&libraries);
    assert_eq!(results.len(), 2);

    for result in results {
        let (scene, shape) = result.unwrap();
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.lookup(shape).unwrap().name(), "shape_r05");
    }
}
