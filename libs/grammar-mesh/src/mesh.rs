//! # Mesh Data Structure
//!
//! Core triangle mesh representation with the operations the rule catalogue
//! composes: merge, rigid transform, principal-axis mirroring, and the
//! geometric measures (bounding box, median, volume) the pipeline relies on.

use config::constants::EPSILON;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// Principal world axis selector.
///
/// Mirror and array-replicate operations are only defined about the three
/// principal axes; the building model is a 2.5D extruded footprint and never
/// reflects about an arbitrary plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// World X axis.
    X,
    /// World Y axis.
    Y,
    /// World Z axis.
    Z,
}

impl Axis {
    /// Negates the corresponding component of `point`.
    #[inline]
    pub fn reflect(self, point: DVec3) -> DVec3 {
        match self {
            Axis::X => DVec3::new(-point.x, point.y, point.z),
            Axis::Y => DVec3::new(point.x, -point.y, point.z),
            Axis::Z => DVec3::new(point.x, point.y, -point.z),
        }
    }
}

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Winding is
/// counter-clockwise when viewed from outside the solid.
///
/// # Example
///
/// ```rust
/// use grammar_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Transforms all vertices by a 4x4 affine matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Reflects the mesh through the world-origin plane perpendicular to
    /// `axis`, negating the corresponding coordinate of every vertex.
    ///
    /// Triangle winding is reversed so outward orientation is preserved.
    pub fn mirror(&mut self, axis: Axis) {
        for v in &mut self.vertices {
            *v = axis.reflect(*v);
        }
        for tri in &mut self.triangles {
            tri.swap(1, 2);
        }
    }

    /// Merges another mesh into this one.
    ///
    /// The other mesh's triangles are appended with their indices offset;
    /// no topology is recomputed. This is a topological join, not a CSG
    /// union.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Computes the geometric median of the mesh (mean of its vertices).
    ///
    /// Used by origin re-anchoring so that mirror and array operations pivot
    /// about the shape's own center rather than an inherited, stale origin.
    pub fn median(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }

        let sum: DVec3 = self.vertices.iter().copied().sum();
        sum / self.vertices.len() as f64
    }

    /// Computes the enclosed volume of the mesh via the divergence theorem.
    ///
    /// Sums the signed volumes of tetrahedra spanned by the origin and each
    /// triangle. The result is meaningful only for closed, consistently
    /// wound meshes; the absolute value is returned.
    pub fn volume(&self) -> f64 {
        let mut total = 0.0;

        for tri in &self.triangles {
            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            total += v0.dot(v1.cross(v2)) / 6.0;
        }

        total.abs()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated indices, zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        for tri in &self.triangles {
            if tri[0] >= vertex_count || tri[1] >= vertex_count || tri[2] >= vertex_count {
                return false;
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_mesh_median_is_vertex_mean() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::new(2.0, 4.0, 6.0));
        assert_eq!(mesh.median(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_mesh_mirror_involution() {
        let original = unit_triangle();
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let mut mesh = original.clone();
            mesh.mirror(axis);
            mesh.mirror(axis);
            for (a, b) in mesh.vertices().iter().zip(original.vertices()) {
                assert!((*a - *b).length() < EPSILON);
            }
            assert_eq!(mesh.triangles(), original.triangles());
        }
    }

    #[test]
    fn test_mesh_mirror_reverses_winding() {
        let mut mesh = unit_triangle();
        mesh.mirror(Axis::X);
        assert_eq!(mesh.triangle(0), [0, 2, 1]);
    }

    #[test]
    fn test_mesh_merge_offsets_indices() {
        let mut mesh1 = unit_triangle();
        let mesh2 = unit_triangle();

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]);
    }

    #[test]
    fn test_mesh_merge_bounding_box_is_union() {
        let mut a = unit_triangle();
        let mut b = unit_triangle();
        b.translate(DVec3::new(5.0, 5.0, 5.0));

        let (amin, _) = a.bounding_box();
        let (_, bmax) = b.bounding_box();

        a.merge(&b);
        let (min, max) = a.bounding_box();
        assert_eq!(min, amin);
        assert_eq!(max, bmax);
    }

    #[test]
    fn test_mesh_transform_translates() {
        let mut mesh = unit_triangle();
        mesh.transform(&DMat4::from_translation(DVec3::new(10.0, 0.0, 0.0)));
        let (min, max) = mesh.bounding_box();
        assert!(min.x >= 10.0);
        assert!(max.x <= 11.0);
    }

    #[test]
    fn test_mesh_validate_valid() {
        assert!(unit_triangle().validate());
    }

    #[test]
    fn test_mesh_validate_invalid_index() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_triangle(0, 1, 2);
        assert!(!mesh.validate());
    }
}
