use super::*;
use super::types::NodeStack;

/// Read-only view of a single node.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    id: NodeId,
    node: &'a Node,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn bounds(&self) -> Bounds {
        self.node.bounds
    }

    pub fn depth(&self) -> usize {
        self.node.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.node.parent
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Children in NW, NE, SW, SE order, or `None` for a leaf.
    pub fn children(&self) -> Option<[NodeId; 4]> {
        self.node.children
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<NodeId> {
        self.node.children.map(|children| children[quadrant.index()])
    }

    /// Points held directly by this node. Always empty for internal nodes.
    pub fn points(&self) -> impl Iterator<Item = Point> + 'a {
        self.node.points.iter().copied()
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.node.points.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.node.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.points.is_empty()
    }

    pub fn outline(&self) -> [Point; 4] {
        self.node.bounds.corners()
    }
}

impl QuadTree {
    /// Returns the leaf storing `point`, or `None` if the point is not stored.
    pub fn find(&self, point: Point) -> Option<NodeId> {
        if !self.bounds().contains_point(point) {
            return None;
        }
        let leaf = self.leaf_for(self.root, point);
        self.nodes[leaf].points.contains(&point).then_some(leaf)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.find(point).is_some()
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.nodes.get(id).map(|node| NodeRef { id, node })
    }

    /// Quadrant of `node` that `point` routes to.
    pub fn classify(&self, node: NodeId, point: Point) -> QuadtreeResult<Quadrant> {
        let node = self.node_or_err(node)?;
        Ok(Quadrant::classify(&node.bounds, point))
    }

    /// Corners of the node's bounds: (x1,y1), (x2,y1), (x2,y2), (x1,y2).
    pub fn outline(&self, node: NodeId) -> QuadtreeResult<[Point; 4]> {
        Ok(self.node_or_err(node)?.bounds.corners())
    }

    /// Follows parent links to the top. A parentless node is its own root.
    pub fn root_of(&self, node: NodeId) -> QuadtreeResult<NodeId> {
        let mut current = node;
        let mut parent = self.node_or_err(node)?.parent;
        while let Some(next) = parent {
            current = next;
            parent = self.nodes[next].parent;
        }
        Ok(current)
    }

    /// Every stored point, in no particular order.
    pub fn all_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.len);
        for leaf in self.leaves() {
            points.extend(self.nodes[leaf].points.iter().copied());
        }
        points
    }

    /// Appends the bounds of every live node, parents before children.
    pub fn all_node_bounds(&self, bounding_boxes: &mut Vec<Bounds>) {
        let mut stack = NodeStack::new();
        stack.push(self.root);
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            bounding_boxes.push(node.bounds);
            if let Some(children) = node.children {
                stack.extend(children.into_iter().rev());
            }
        }
    }

    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = NodeStack::new();
        stack.push(self.root);
        while let Some(id) = stack.pop() {
            match self.nodes[id].children {
                Some(children) => stack.extend(children.into_iter().rev()),
                None => leaves.push(id),
            }
        }
        leaves
    }

    // Descend by classification until reaching a leaf
    pub(super) fn leaf_for(&self, mut node: NodeId, point: Point) -> NodeId {
        loop {
            let current = &self.nodes[node];
            match current.children {
                Some(children) => {
                    node = children[Quadrant::classify(&current.bounds, point).index()];
                }
                None => return node,
            }
        }
    }
}
