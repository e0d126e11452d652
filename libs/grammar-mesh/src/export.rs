//! # Mesh Export
//!
//! Wavefront OBJ export of the final compound shape. The pipeline has no
//! other persisted output format; whatever consumes the generated building
//! reads this file.

use crate::error::MeshError;
use crate::mesh::Mesh;
use std::fmt::Write as _;
use std::path::Path;

/// Serializes a mesh as Wavefront OBJ text.
///
/// Emits one `v` record per vertex and one `f` record per triangle.
/// OBJ indices are 1-based.
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_box;
/// use grammar_mesh::export::to_obj;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::splat(1.0), false).unwrap();
/// let obj = to_obj(&mesh);
/// assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
/// assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);
/// ```
pub fn to_obj(mesh: &Mesh) -> String {
    let mut out = String::new();

    for v in mesh.vertices() {
        // Infallible; fmt::Write on String cannot fail
        let _ = writeln!(out, "v {} {} {}", v.x, v.y, v.z);
    }
    for tri in mesh.triangles() {
        let _ = writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1);
    }

    out
}

/// Writes a mesh to an OBJ file at `path`.
pub fn write_obj(mesh: &Mesh, path: impl AsRef<Path>) -> Result<(), MeshError> {
    std::fs::write(path, to_obj(mesh))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;
    use glam::DVec3;

    #[test]
    fn test_obj_record_counts() {
        let mesh = create_box(DVec3::splat(2.0), true).unwrap();
        let obj = to_obj(&mesh);
        assert_eq!(obj.lines().filter(|l| l.starts_with("v ")).count(), 8);
        assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 12);
    }

    #[test]
    fn test_obj_indices_are_one_based() {
        let mesh = create_box(DVec3::splat(1.0), false).unwrap();
        let obj = to_obj(&mesh);
        for line in obj.lines().filter(|l| l.starts_with("f ")) {
            for idx in line.split_whitespace().skip(1) {
                assert!(idx.parse::<u32>().unwrap() >= 1);
            }
        }
    }

    #[test]
    fn test_obj_empty_mesh() {
        assert!(to_obj(&Mesh::new()).is_empty());
    }
}
