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
//!
//! ## Stack Safety
//!
//! Traversal is recursive. Every recursive step runs under
//! `stacker::maybe_grow`, so unbalanced trees grow the stack on the heap
//! instead of overflowing it.

use super::plane::Plane;
use super::polygon::{Polygon, Split};
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;

/// A node in the BSP tree.
///
/// # Example
///
/// ```rust,ignore
/// let tree = BspNode::new(mesh_to_polygons(&mesh));
/// let outside = tree.clip_polygons(other_polygons);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BspNode {
    /// Dividing plane, taken from the first polygon inserted here
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    /// Front subtree (polygons in front of plane)
    front: Option<Box<BspNode>>,
    /// Back subtree (polygons behind plane)
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a new BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons into the tree, splitting them by the planes they
    /// cross.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let plane = *self.plane.get_or_insert(polygons[0].plane);

            let mut front = Vec::new();
            let mut back = Vec::new();
            for polygon in polygons {
                match polygon.split(&plane) {
                    Split::CoplanarFront(p) | Split::CoplanarBack(p) => self.polygons.push(p),
                    Split::Front(p) => front.push(p),
                    Split::Back(p) => back.push(p),
                    Split::Spanning { front: f, back: b } => {
                        front.extend(f);
                        back.extend(b);
                    }
                }
            }

            if !front.is_empty() {
                self.front.get_or_insert_with(Box::default).build(front);
            }
            if !back.is_empty() {
                self.back.get_or_insert_with(Box::default).build(back);
            }
        });
    }

    /// Converts solid space to empty space and back.
    ///
    /// Flips all polygons and planes and swaps the subtrees.
    pub fn invert(&mut self) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            for polygon in &mut self.polygons {
                polygon.flip();
            }
            if let Some(plane) = &mut self.plane {
                plane.flip();
            }
            if let Some(front) = &mut self.front {
                front.invert();
            }
            if let Some(back) = &mut self.back {
                back.invert();
            }
            std::mem::swap(&mut self.front, &mut self.back);
        });
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    ///
    /// Coplanar polygons follow their facing: same-facing ones are treated as
    /// front, opposite-facing ones as back.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let mut front = Vec::new();
            let mut back = Vec::new();
            for polygon in polygons {
                match polygon.split(&plane) {
                    Split::CoplanarFront(p) | Split::Front(p) => front.push(p),
                    Split::CoplanarBack(p) | Split::Back(p) => back.push(p),
                    Split::Spanning { front: f, back: b } => {
                        front.extend(f);
                        back.extend(b);
                    }
                }
            }

            let mut kept = match &self.front {
                Some(node) => node.clip_polygons(front),
                None => front,
            };
            // Without a back subtree, whatever is behind the plane is inside
            if let Some(node) = &self.back {
                kept.extend(node.clip_polygons(back));
            }
            kept
        })
    }

    /// Removes the parts of this tree's polygons that lie inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
            if let Some(front) = &mut self.front {
                front.clip_to(other);
            }
            if let Some(back) = &mut self.back {
                back.clip_to(other);
            }
        });
    }

    /// Collects all polygons from this tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        self.collect_polygons(&mut result);
        result
    }

    fn collect_polygons(&self, out: &mut Vec<Polygon>) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            out.extend(self.polygons.iter().cloned());
            if let Some(front) = &self.front {
                front.collect_polygons(out);
            }
            if let Some(back) = &self.back {
                back.collect_polygons(out);
            }
        });
    }

    /// Returns the number of polygons in this tree.
    #[allow(dead_code)]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
            + self.front.as_ref().map_or(0, |n| n.polygon_count())
            + self.back.as_ref().map_or(0, |n| n.polygon_count())
    }
}
