use super::types::NodeStack;
use super::*;
use tracing::{debug, trace};

impl QuadTree {
    /// Removes `point`, collapsing any subtree left without points.
    ///
    /// Returns `false` if the point was not stored.
    pub fn remove(&mut self, point: Point) -> bool {
        let leaf = self.leaf_for(self.root, point);
        if !self.nodes[leaf].points.remove(&point) {
            return false;
        }
        self.len -= 1;
        self.prune_upwards(leaf);
        true
    }

    /// Removes every point and prunes once at the end. Returns how many
    /// points were actually stored.
    pub fn remove_batch(&mut self, points: &[Point]) -> usize {
        let mut touched = NodeStack::new();
        let mut removed = 0;
        for &point in points {
            let leaf = self.leaf_for(self.root, point);
            if self.nodes[leaf].points.remove(&point) {
                removed += 1;
                if self.nodes[leaf].points.is_empty() {
                    touched.push(leaf);
                }
            }
        }
        self.len -= removed;

        // A leaf can already be gone if a walk from a sibling collapsed its parent.
        for leaf in touched {
            if self.nodes.get(leaf).is_some() {
                self.prune_upwards(leaf);
            }
        }
        debug!(requested = points.len(), removed, len = self.len, "removed batch");
        removed
    }

    /// Drops every point and every node below the root.
    pub fn clear(&mut self) {
        let root = self.root;
        self.release_children(root);
        self.nodes[root].points.clear();
        self.len = 0;
        debug!("cleared quadtree");
    }

    // Walk the ancestor chain of `node`, turning each parent whose four
    // children are empty leaves back into an empty leaf.
    fn prune_upwards(&mut self, node: NodeId) {
        let mut parent = self.nodes[node].parent;
        while let Some(current) = parent {
            let Some(children) = self.nodes[current].children else {
                break;
            };
            if !children.iter().all(|&child| self.nodes[child].is_empty_leaf()) {
                break;
            }
            self.release_children(current);
            trace!(node = current.index, depth = self.nodes[current].depth, "collapsed");
            parent = self.nodes[current].parent;
        }
    }

    // Free the whole subtree below `node`, leaving `node` a leaf
    fn release_children(&mut self, node: NodeId) {
        let mut stack = NodeStack::new();
        if let Some(children) = self.nodes[node].children.take() {
            stack.extend(children);
        }
        while let Some(id) = stack.pop() {
            if let Some(released) = self.nodes.release(id) {
                if let Some(children) = released.children {
                    stack.extend(children);
                }
            }
        }
    }
}
