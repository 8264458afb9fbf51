//! Point-region quadtree over integer coordinates.
//!
//! Every node is either a leaf holding a set of points or an internal node
//! with exactly four children covering the quarters of its bounds. Nodes
//! live in an arena and refer to their parent through a [`NodeId`] handle,
//! so ownership stays a strict tree.

mod config;
mod insert;
mod query;
mod remove;
mod storage;
mod types;

pub use config::Config;
pub use query::NodeRef;
pub use types::{NodeId, Quadrant};

use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Bounds, Point};
use storage::{Node, NodeArena};
use tracing::debug;

#[derive(Debug)]
pub struct QuadTree {
    nodes: NodeArena,
    root: NodeId,
    len: usize,
    config: Config,
}

impl QuadTree {
    pub fn new(bounds: Bounds) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Bounds, config: Config) -> QuadtreeResult<Self> {
        Self::new_at_depth(bounds, 0, config)
    }

    /// Builds a tree whose root already sits at `depth`, as if it were a
    /// detached subtree. The root still has no parent.
    pub fn new_at_depth(bounds: Bounds, depth: usize, config: Config) -> QuadtreeResult<Self> {
        if !bounds.is_valid() {
            return Err(QuadtreeError::InvalidBounds {
                x1: bounds.x1,
                y1: bounds.y1,
                x2: bounds.x2,
                y2: bounds.y2,
            });
        }
        config.validate()?;

        let mut nodes = NodeArena::with_capacity(config.pool_size.max(1));
        let root = nodes.alloc(Node::new_leaf(bounds, depth, None));
        debug!(
            %bounds,
            depth,
            max_points = config.max_points,
            max_depth = config.max_depth,
            "created quadtree"
        );
        Ok(QuadTree {
            nodes,
            root,
            len: 0,
            config,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn bounds(&self) -> Bounds {
        self.nodes[self.root].bounds
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of distinct points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live nodes, leaves and internal nodes alike.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn ensure_in_bounds(&self, point: Point) -> QuadtreeResult<()> {
        let bounds = self.bounds();
        if bounds.contains_point(point) {
            Ok(())
        } else {
            Err(QuadtreeError::PointOutOfBounds {
                x: point.x,
                y: point.y,
                bounds_x1: bounds.x1,
                bounds_y1: bounds.y1,
                bounds_x2: bounds.x2,
                bounds_y2: bounds.y2,
            })
        }
    }

    fn node_or_err(&self, id: NodeId) -> QuadtreeResult<&Node> {
        self.nodes.get(id).ok_or(QuadtreeError::UnknownNode {
            index: id.index,
            generation: id.generation,
        })
    }

    // Max-depth nodes and nodes too small to halve take any number of points.
    fn can_split(&self, node: &Node) -> bool {
        let min_side = 2 * i64::from(self.config.min_size);
        node.depth < self.config.max_depth
            && node.bounds.width() >= min_side
            && node.bounds.height() >= min_side
    }
}
