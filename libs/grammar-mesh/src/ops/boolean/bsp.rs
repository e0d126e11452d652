//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Operations
//!
//! - `clip_to`: Remove polygons from this tree that are inside another tree
//! - `invert`: Flip all polygons and swap front/back subtrees
//! - `all_polygons`: Collect all polygons from the tree

use super::plane::Plane;
use super::polygon::Polygon;

/// A node in the BSP tree.
///
/// Each node partitions space using a plane and stores polygons coplanar
/// with that plane.
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Dividing plane; None for an empty node.
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane.
    polygons: Vec<Polygon>,
    /// Subtree in front of the plane.
    front: Option<Box<BspNode>>,
    /// Subtree behind the plane.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons into the tree, extending it as needed.
    ///
    /// The first polygon's plane becomes the dividing plane of an empty
    /// node; remaining polygons are split and pushed down.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }

        let plane = match self.plane {
            Some(plane) => plane,
            None => {
                let plane = polygons[0].plane();
                self.plane = Some(plane);
                plane
            }
        };

        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();
        let mut front = Vec::new();
        let mut back = Vec::new();

        for poly in &polygons {
            poly.split(
                &plane,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }

        self.polygons.extend(coplanar_front);
        self.polygons.extend(coplanar_back);

        if !front.is_empty() {
            self.front
                .get_or_insert_with(|| Box::new(BspNode::default()))
                .build(front);
        }
        if !back.is_empty() {
            self.back
                .get_or_insert_with(|| Box::new(BspNode::default()))
                .build(back);
        }
    }

    /// Inverts this BSP tree (flips all polygons and swaps subtrees).
    ///
    /// Used for implementing the difference operation.
    pub fn invert(&mut self) {
        for poly in &mut self.polygons {
            *poly = poly.flip();
        }
        if let Some(plane) = &mut self.plane {
            *plane = plane.flip();
        }
        if let Some(front) = &mut self.front {
            front.invert();
        }
        if let Some(back) = &mut self.back {
            back.invert();
        }
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Clips polygons to this tree, returning the parts outside its solid.
    ///
    /// Polygons that end up behind a leaf plane are inside the solid and
    /// are discarded.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let plane = match self.plane {
            Some(plane) => plane,
            None => return polygons,
        };

        let mut front = Vec::new();
        let mut back = Vec::new();
        let mut coplanar_front = Vec::new();
        let mut coplanar_back = Vec::new();

        for poly in &polygons {
            // Coplanar polygons follow the side their normal faces
            poly.split(
                &plane,
                &mut coplanar_front,
                &mut coplanar_back,
                &mut front,
                &mut back,
            );
        }
        front.extend(coplanar_front);
        back.extend(coplanar_back);

        let mut result = match &self.front {
            Some(node) => node.clip_polygons(front),
            None => front,
        };

        if let Some(node) = &self.back {
            result.extend(node.clip_polygons(back));
        }

        result
    }

    /// Clips this tree's polygons to another tree.
    ///
    /// Removes the parts of this tree's polygons that are inside the other
    /// tree's solid.
    pub fn clip_to(&mut self, other: &BspNode) {
        self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
        if let Some(front) = &mut self.front {
            front.clip_to(other);
        }
        if let Some(back) = &mut self.back {
            back.clip_to(other);
        }
    }

    /// Collects all polygons from this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = self.polygons.clone();
        if let Some(front) = &self.front {
            result.extend(front.all_polygons());
        }
        if let Some(back) = &self.back {
            result.extend(back.all_polygons());
        }
        result
    }
}
