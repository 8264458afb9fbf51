use super::*;
use std::mem;
use tracing::{debug, trace};

impl QuadTree {
    /// Stores `point` and returns the leaf that ends up holding it.
    ///
    /// Inserting a point that is already stored leaves the tree unchanged.
    pub fn insert(&mut self, point: Point) -> QuadtreeResult<NodeId> {
        self.ensure_in_bounds(point)?;
        let (leaf, added) = self.insert_into(self.root, point);
        if added {
            self.len += 1;
        }
        Ok(leaf)
    }

    /// Inserts every point, or none of them if any point is out of bounds.
    pub fn insert_batch(&mut self, points: &[Point]) -> QuadtreeResult<Vec<NodeId>> {
        for &point in points {
            self.ensure_in_bounds(point)?;
        }
        let leaves = points
            .iter()
            .map(|&point| {
                let (leaf, added) = self.insert_into(self.root, point);
                if added {
                    self.len += 1;
                }
                leaf
            })
            .collect();
        debug!(count = points.len(), len = self.len, "inserted batch");
        Ok(leaves)
    }

    // Insert a point into a given node or its descendants
    fn insert_into(&mut self, mut node: NodeId, point: Point) -> (NodeId, bool) {
        loop {
            let current = &self.nodes[node];
            if let Some(children) = current.children {
                node = children[Quadrant::classify(&current.bounds, point).index()];
                continue;
            }

            if current.points.contains(&point) {
                return (node, false);
            }
            if current.points.len() < self.config.max_points || !self.can_split(current) {
                self.nodes[node].points.insert(point);
                return (node, true);
            }

            // Full leaf: split it and route the point into the new children
            self.subdivide(node);
        }
    }

    // Split a leaf into four quarter-sized children and move its points down
    fn subdivide(&mut self, node: NodeId) {
        let (bounds, depth, points) = {
            let leaf = &mut self.nodes[node];
            debug_assert!(leaf.is_leaf(), "only leaves are subdivided");
            (leaf.bounds, leaf.depth, mem::take(&mut leaf.points))
        };

        let children = bounds
            .quarters()
            .map(|quarter| self.nodes.alloc(Node::new_leaf(quarter, depth + 1, Some(node))));
        self.nodes[node].children = Some(children);
        trace!(node = node.index, depth, points = points.len(), "subdivided");

        for point in points {
            let child = children[Quadrant::classify(&bounds, point).index()];
            self.insert_into(child, point);
        }
    }
}
