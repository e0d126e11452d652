//! # Boolean Difference (CSG)
//!
//! Constructive Solid Geometry set-difference using BSP trees.
//!
//! ## Algorithm
//!
//! Based on the csg.js algorithm by Evan Wallace:
//! - Difference: A.invert(); A.clipTo(B); B.clipTo(A); B.invert();
//!   B.clipTo(A); B.invert(); combine; result.invert()
//!
//! The rule catalogue uses this to carve openings (window cavities) out of
//! solid footprints. Both operands must be manifold solids; behavior on
//! non-manifold input is undefined.

mod bsp;
mod plane;
mod polygon;

use crate::mesh::Mesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes the difference of two meshes (A − B).
///
/// Returns a mesh containing the solid volume of `a` that is not inside
/// `b`. Cavity walls are closed with the clipped faces of `b`.
///
/// ## Parameters
///
/// - `a`: Base mesh (target)
/// - `b`: Mesh to subtract (cutter)
pub fn difference(a: &Mesh, b: &Mesh) -> Mesh {
    let polys_a = mesh_to_polygons(a);
    let polys_b = mesh_to_polygons(b);

    if polys_a.is_empty() {
        return Mesh::new();
    }
    if polys_b.is_empty() {
        return a.clone();
    }

    let mut bsp_a = BspNode::new(polys_a);
    let mut bsp_b = BspNode::new(polys_b);

    // Difference algorithm: A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.all_polygons());
    bsp_a.invert();

    polygons_to_mesh(&bsp_a.all_polygons())
}

// =============================================================================
// CONVERSION HELPERS
// =============================================================================

/// Converts a mesh to a list of polygons, one per triangle.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    let mut polygons = Vec::with_capacity(mesh.triangle_count());

    for tri in mesh.triangles() {
        let verts = vec![
            mesh.vertex(tri[0]),
            mesh.vertex(tri[1]),
            mesh.vertex(tri[2]),
        ];

        // Degenerate triangles contribute nothing to the solid
        if let Some(poly) = Polygon::from_vertices(verts) {
            polygons.push(poly);
        }
    }

    polygons
}

/// Converts a list of polygons back to a triangle mesh.
///
/// Each polygon is fan-triangulated; BSP output polygons are convex, so the
/// fan is always valid.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let mut mesh = Mesh::new();

    for poly in polygons {
        let vertices = poly.vertices();
        if vertices.len() < 3 {
            continue;
        }

        let base = mesh.vertex_count() as u32;
        for v in vertices {
            mesh.add_vertex(*v);
        }

        for i in 1..(vertices.len() - 1) as u32 {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh
}

// =============================================================================
// TESTS
// =============================================================================
