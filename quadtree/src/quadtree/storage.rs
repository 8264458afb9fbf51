use super::types::NodeId;
use common::shapes::{Bounds, Point};
use fxhash::FxHashSet;
use std::ops::{Index, IndexMut};

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) bounds: Bounds,
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) points: FxHashSet<Point>,
    pub(crate) children: Option<[NodeId; 4]>,
}

impl Node {
    pub(crate) fn new_leaf(bounds: Bounds, depth: usize, parent: Option<NodeId>) -> Self {
        Self {
            bounds,
            depth,
            parent,
            points: FxHashSet::default(),
            children: None,
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    #[inline(always)]
    pub(crate) fn is_empty_leaf(&self) -> bool {
        self.is_leaf() && self.points.is_empty()
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Slab of nodes addressed by generational handles.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<Slot>,
    free_slots: Vec<u32>,
    live: usize,
}

impl NodeArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_slots: Vec::new(),
            live: 0,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free_slots.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.node.is_none(), "free slot {} still holds a node", index);
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    /// Takes the node out of its slot. The slot's generation is bumped so
    /// that `id` and any copies of it stop resolving.
    pub(crate) fn release(&mut self, id: NodeId) -> Option<Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_slots.push(id.index);
        self.live -= 1;
        Some(node)
    }

    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.live
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    #[inline(always)]
    fn index(&self, id: NodeId) -> &Node {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node handle {:?}", id),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline(always)]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node handle {:?}", id),
        }
    }
}
