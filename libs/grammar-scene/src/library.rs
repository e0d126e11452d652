//! # Asset Library
//!
//! Read-only named-mesh vocabulary the rules instantiate base geometry
//! from. The host environment backs this with an on-disk shape file; the
//! in-tree implementation authors the same vocabulary from mesh
//! primitives.

use crate::error::SceneError;
use config::constants::MODULE_HEIGHT;
use glam::{DVec2, DVec3};
use grammar_mesh::primitives::{create_box, create_prism};
use grammar_mesh::Mesh;
use std::collections::HashMap;

// =============================================================================
// OBJECT NAMES
// =============================================================================

/// Base footprint wing of the building.
pub const OBJ_FOOTPRINT: &str = "shape_01";
/// Cutter solid carving the window cavity out of the footprint.
pub const OBJ_WINDOW: &str = "window";
/// Secondary facade piece.
pub const OBJ_SIDE_PRIMARY: &str = "side_01";
/// First side piece merged into the compound.
pub const OBJ_SIDE_SECONDARY: &str = "side_02";
/// Core volume of the building.
pub const OBJ_CORE: &str = "cube";

// =============================================================================
// LIBRARY TRAIT
// =============================================================================

/// Read-only named-object store the rules fetch base meshes from.
///
/// A missing object is reported via `AssetNotFound`, never a panic; the
/// calling rule aborts and the working set stays unchanged.
pub trait AssetLibrary {
    /// Returns true if the library holds an object with this name.
    fn contains(&self, object: &str) -> bool;

    /// Instantiates a fresh copy of the named object's mesh.
    fn instantiate(&self, object: &str) -> Result<Mesh, SceneError>;
}

// =============================================================================
// IN-MEMORY LIBRARY
// =============================================================================

/// In-memory asset library keyed by object name.
///
/// # Example
///
/// ```rust
/// use grammar_scene::{AssetLibrary, MemoryLibrary};
/// use grammar_mesh::Mesh;
///
/// let mut library = MemoryLibrary::new();
/// library.insert("footprint", Mesh::new());
/// assert!(library.contains("footprint"));
/// assert!(!library.contains("roof"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    objects: HashMap<String, Mesh>,
}

impl MemoryLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) a named prototype mesh.
    pub fn insert(&mut self, object: impl Into<String>, mesh: Mesh) {
        self.objects.insert(object.into(), mesh);
    }
}

impl AssetLibrary for MemoryLibrary {
    fn contains(&self, object: &str) -> bool {
        self.objects.contains_key(object)
    }

    fn instantiate(&self, object: &str) -> Result<Mesh, SceneError> {
        self.objects
            .get(object)
            .cloned()
            .ok_or_else(|| SceneError::asset_not_found(object))
    }
}

// =============================================================================
// STANDARD VOCABULARY
// =============================================================================

/// Builds the five-object vocabulary of the hospital corpus.
///
/// Every object is authored with its base at z=0 and exactly one module of
/// height, so vertical stacking by [`MODULE_HEIGHT`] lines floors up
/// exactly.
///
/// # Example
///
/// ```rust
/// use grammar_scene::{standard_library, AssetLibrary};
///
/// let library = standard_library().unwrap();
/// assert!(library.contains("shape_01"));
/// assert!(library.contains("window"));
/// ```
pub fn standard_library() -> Result<MemoryLibrary, SceneError> {
    let mut library = MemoryLibrary::new();

    // Trapezoid wing footprint, counter-clockwise
    let footprint = [
        DVec2::new(0.0, 0.0),
        DVec2::new(2.4, 0.0),
        DVec2::new(2.0, 1.2),
        DVec2::new(0.4, 1.2),
    ];
    library.insert(OBJ_FOOTPRINT, create_prism(&footprint, MODULE_HEIGHT)?);

    // Window cutter straddling the front wall of the wing
    let mut window = create_box(DVec3::new(0.5, 0.6, 0.5), false)?;
    window.translate(DVec3::new(0.95, -0.2, 0.3));
    library.insert(OBJ_WINDOW, window);

    library.insert(
        OBJ_SIDE_PRIMARY,
        create_box(DVec3::new(0.9, 0.5, MODULE_HEIGHT), false)?,
    );
    library.insert(
        OBJ_SIDE_SECONDARY,
        create_box(DVec3::new(1.1, 0.45, MODULE_HEIGHT), false)?,
    );
    library.insert(OBJ_CORE, create_box(DVec3::splat(MODULE_HEIGHT), false)?);

    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;

    #[test]
    fn test_standard_library_holds_vocabulary() {
        let library = standard_library().unwrap();
        for object in [
            OBJ_FOOTPRINT,
            OBJ_WINDOW,
            OBJ_SIDE_PRIMARY,
            OBJ_SIDE_SECONDARY,
            OBJ_CORE,
        ] {
            assert!(library.contains(object), "missing {object}");
        }
    }

    #[test]
    fn test_standard_objects_are_one_module_tall() {
        let library = standard_library().unwrap();
        for object in [OBJ_FOOTPRINT, OBJ_SIDE_PRIMARY, OBJ_SIDE_SECONDARY, OBJ_CORE] {
            let mesh = library.instantiate(object).unwrap();
            let (min, max) = mesh.bounding_box();
            assert!(min.z.abs() < EPSILON, "{object} base is not at z=0");
            assert!(
                (max.z - MODULE_HEIGHT).abs() < EPSILON,
                "{object} is not one module tall"
            );
        }
    }

    #[test]
    fn test_window_overlaps_footprint() {
        let library = standard_library().unwrap();
        let footprint = library.instantiate(OBJ_FOOTPRINT).unwrap();
        let window = library.instantiate(OBJ_WINDOW).unwrap();

        let (fmin, fmax) = footprint.bounding_box();
        let (wmin, wmax) = window.bounding_box();
        assert!(wmin.x > fmin.x && wmax.x < fmax.x);
        assert!(wmin.y < fmin.y && wmax.y > fmin.y, "cutter must straddle the wall");
    }

    #[test]
    fn test_instantiate_missing_object_fails() {
        let library = MemoryLibrary::new();
        assert!(matches!(
            library.instantiate("roof"),
            Err(SceneError::AssetNotFound { .. })
        ));
    }

    #[test]
    fn test_instantiate_returns_fresh_copies() {
        let library = standard_library().unwrap();
        let mut a = library.instantiate(OBJ_CORE).unwrap();
        a.translate(DVec3::splat(5.0));
        let b = library.instantiate(OBJ_CORE).unwrap();
        assert_ne!(a.bounding_box(), b.bounding_box());
    }
}
