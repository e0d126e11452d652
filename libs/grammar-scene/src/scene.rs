//! # Scene Working Set
//!
//! The explicit working set of named shapes a pipeline run owns and
//! mutates. Replaces the host environment's global scene graph, selection
//! and active-object state with a value passed through the driver.

use crate::error::SceneError;
use crate::shape::{Shape, ShapeId, Transform};
use grammar_mesh::Mesh;
use std::collections::HashMap;
use tracing::debug;

/// Working set of live shapes, keyed by stable id with a unique name index.
///
/// # Example
///
/// ```rust
/// use grammar_scene::{Scene, Transform};
/// use grammar_mesh::Mesh;
///
/// let mut scene = Scene::new();
/// let id = scene.link("footprint", Mesh::new(), Transform::IDENTITY).unwrap();
/// assert_eq!(scene.lookup(id).unwrap().name(), "footprint");
/// ```
#[derive(Debug, Default)]
pub struct Scene {
    shapes: HashMap<ShapeId, Shape>,
    names: HashMap<String, ShapeId>,
    next_id: u64,
    active: Option<ShapeId>,
}

impl Scene {
    /// Creates an empty working set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true if no shapes are linked.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns true if a shape with this name is linked.
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Links a new shape into the working set and returns its id.
    ///
    /// Names are unique at any instant; linking a taken name fails with
    /// `DuplicateName` and leaves the working set unchanged.
    pub fn link(
        &mut self,
        name: impl Into<String>,
        mesh: Mesh,
        transform: Transform,
    ) -> Result<ShapeId, SceneError> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(SceneError::DuplicateName { name });
        }

        let id = ShapeId(self.next_id);
        self.next_id += 1;

        debug!(%id, name = name.as_str(), "linking shape");
        self.names.insert(name.clone(), id);
        self.shapes.insert(
            id,
            Shape {
                id,
                name,
                mesh,
                transform,
            },
        );
        Ok(id)
    }

    /// Looks up a shape by id.
    pub fn lookup(&self, id: ShapeId) -> Result<&Shape, SceneError> {
        self.shapes
            .get(&id)
            .ok_or_else(|| SceneError::shape_not_found(id))
    }

    /// Looks up a shape by id, mutably.
    pub fn lookup_mut(&mut self, id: ShapeId) -> Result<&mut Shape, SceneError> {
        self.shapes
            .get_mut(&id)
            .ok_or_else(|| SceneError::shape_not_found(id))
    }

    /// Resolves a working-set name to a shape id.
    pub fn lookup_name(&self, name: &str) -> Result<ShapeId, SceneError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| SceneError::shape_not_found(name))
    }

    /// Renames a shape, keeping the name index consistent.
    ///
    /// Renaming a shape to its current name is a no-op; renaming onto a
    /// name held by another shape fails with `DuplicateName`.
    pub fn rename(&mut self, id: ShapeId, new_name: impl Into<String>) -> Result<(), SceneError> {
        let new_name = new_name.into();

        match self.names.get(&new_name) {
            Some(holder) if *holder == id => return Ok(()),
            Some(_) => return Err(SceneError::DuplicateName { name: new_name }),
            None => {}
        }

        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or_else(|| SceneError::shape_not_found(id))?;

        self.names.remove(&shape.name);
        self.names.insert(new_name.clone(), id);
        shape.name = new_name;
        Ok(())
    }

    /// Removes a shape from the working set, returning it.
    ///
    /// Used to destroy a standalone entity once its geometry has been
    /// absorbed by a merge, or to discard a consumed boolean cutter.
    pub fn remove(&mut self, id: ShapeId) -> Result<Shape, SceneError> {
        let shape = self
            .shapes
            .remove(&id)
            .ok_or_else(|| SceneError::shape_not_found(id))?;

        debug!(%id, name = shape.name.as_str(), "removing shape");
        self.names.remove(&shape.name);
        if self.active == Some(id) {
            self.active = None;
        }
        Ok(shape)
    }

    /// Records the active shape.
    ///
    /// The host environment requires an active object before applying
    /// operators; headlessly this is bookkeeping only.
    pub fn set_active(&mut self, id: ShapeId) -> Result<(), SceneError> {
        if !self.shapes.contains_key(&id) {
            return Err(SceneError::shape_not_found(id));
        }
        self.active = Some(id);
        Ok(())
    }

    /// The currently active shape, if any.
    pub fn active(&self) -> Option<ShapeId> {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_with(name: &str) -> (Scene, ShapeId) {
        let mut scene = Scene::new();
        let id = scene.link(name, Mesh::new(), Transform::IDENTITY).unwrap();
        (scene, id)
    }

    #[test]
    fn test_link_and_lookup() {
        let (scene, id) = scene_with("footprint");
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.lookup(id).unwrap().name(), "footprint");
        assert_eq!(scene.lookup_name("footprint").unwrap(), id);
    }

    #[test]
    fn test_link_duplicate_name_fails() {
        let (mut scene, _) = scene_with("footprint");
        let err = scene
            .link("footprint", Mesh::new(), Transform::IDENTITY)
            .unwrap_err();
        assert!(matches!(err, SceneError::DuplicateName { .. }));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_lookup_missing_shape_fails() {
        let (mut scene, id) = scene_with("footprint");
        scene.remove(id).unwrap();
        assert!(matches!(
            scene.lookup(id),
            Err(SceneError::ShapeNotFound { .. })
        ));
    }

    #[test]
    fn test_rename_frees_old_name() {
        let (mut scene, id) = scene_with("stage_a");
        scene.rename(id, "stage_b").unwrap();

        assert_eq!(scene.lookup(id).unwrap().name(), "stage_b");
        assert!(!scene.contains_name("stage_a"));
        // Old name is reusable
        scene.link("stage_a", Mesh::new(), Transform::IDENTITY).unwrap();
    }

    #[test]
    fn test_rename_to_own_name_is_noop() {
        let (mut scene, id) = scene_with("stage_a");
        scene.rename(id, "stage_a").unwrap();
        assert_eq!(scene.lookup(id).unwrap().name(), "stage_a");
    }

    #[test]
    fn test_rename_onto_other_shape_fails() {
        let (mut scene, _) = scene_with("stage_a");
        let other = scene.link("stage_b", Mesh::new(), Transform::IDENTITY).unwrap();
        assert!(matches!(
            scene.rename(other, "stage_a"),
            Err(SceneError::DuplicateName { .. })
        ));
    }

    #[test]
    fn test_remove_clears_active() {
        let (mut scene, id) = scene_with("footprint");
        scene.set_active(id).unwrap();
        assert_eq!(scene.active(), Some(id));

        scene.remove(id).unwrap();
        assert_eq!(scene.active(), None);
    }
}
