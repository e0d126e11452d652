//! # Prism Primitive
//!
//! Generates mesh for a footprint polygon extruded along +Z. This is the
//! shape family the asset vocabulary's building wings are authored from
//! (2.5D extruded-footprint model).

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::{DVec2, DVec3};

/// Creates a prism by extruding a convex footprint polygon from z=0 to
/// z=`height`.
///
/// # Arguments
///
/// * `footprint` - Convex polygon vertices in counter-clockwise order
/// * `height` - Extrusion height along +Z
///
/// # Returns
///
/// A closed mesh: two fan-triangulated caps plus one quad (two triangles)
/// per footprint edge.
///
/// # Example
///
/// ```rust
/// use grammar_mesh::primitives::create_prism;
/// use glam::DVec2;
///
/// let footprint = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(2.0, 1.0),
///     DVec2::new(0.0, 1.0),
/// ];
/// let mesh = create_prism(&footprint, 1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert!((mesh.volume() - 2.0).abs() < 1e-9);
/// ```
pub fn create_prism(footprint: &[DVec2], height: f64) -> Result<Mesh, MeshError> {
    if footprint.len() < 3 {
        return Err(MeshError::degenerate(format!(
            "Prism footprint needs at least 3 points, got {}",
            footprint.len()
        )));
    }
    if height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Prism height must be positive: {height}"
        )));
    }

    // Shoelace area; rejects clockwise and collinear footprints
    let mut area = 0.0;
    for i in 0..footprint.len() {
        let j = (i + 1) % footprint.len();
        area += footprint[i].x * footprint[j].y - footprint[j].x * footprint[i].y;
    }
    if area <= 0.0 {
        return Err(MeshError::degenerate(
            "Prism footprint must be counter-clockwise and non-degenerate",
        ));
    }

    let n = footprint.len() as u32;
    let mut mesh = Mesh::with_capacity(footprint.len() * 2, (footprint.len() - 2) * 2 + footprint.len() * 2);

    // Bottom ring (z = 0), then top ring (z = height)
    for p in footprint {
        mesh.add_vertex(DVec3::new(p.x, p.y, 0.0));
    }
    for p in footprint {
        mesh.add_vertex(DVec3::new(p.x, p.y, height));
    }

    // Bottom cap, wound to face -Z
    for i in 1..n - 1 {
        mesh.add_triangle(0, i + 1, i);
    }

    // Top cap, wound to face +Z
    for i in 1..n - 1 {
        mesh.add_triangle(n, n + i, n + i + 1);
    }

    // Side quads, outward facing for a counter-clockwise footprint
    for i in 0..n {
        let j = (i + 1) % n;
        mesh.add_triangle(i, j, n + j);
        mesh.add_triangle(i, n + j, n + i);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_prism_counts() {
        let mesh = create_prism(&unit_square(), 2.0).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        // 2 caps x 2 triangles + 4 sides x 2 triangles
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_prism_bounding_box() {
        let mesh = create_prism(&unit_square(), 2.0).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn test_prism_volume_is_area_times_height() {
        let mesh = create_prism(&unit_square(), 2.0).unwrap();
        assert!((mesh.volume() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_prism_validates() {
        let mesh = create_prism(&unit_square(), 1.0).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_prism_rejects_clockwise_footprint() {
        let mut footprint = unit_square();
        footprint.reverse();
        assert!(create_prism(&footprint, 1.0).is_err());
    }

    #[test]
    fn test_prism_rejects_flat_inputs() {
        assert!(create_prism(&unit_square()[..2], 1.0).is_err());
        assert!(create_prism(&unit_square(), 0.0).is_err());
    }
}
