//! Search tree nodes and the arena which holds settled nodes.
//!
//! Nodes waiting in a frontier are owned by the frontier. Once a
//! node is settled it moves into a [NodeArena], and children refer
//! back to it by [NodeId]. Indices stay valid as the arena grows,
//! so a child never outlives the storage of its parent.

use crate::path::Path;

/// Index of a settled node within a [NodeArena].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A search tree entry: a state, the settled node which
/// generated it, and the cost accumulated to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, W> {
    pub(crate) state: S,
    pub(crate) parent: Option<NodeId>,
    pub(crate) cost: W,
}

impl<S, W> Node<S, W>
where
    W: Copy,
{
    /// A node at the root of the search tree.
    pub fn root(state: S, cost: W) -> Self {
        Self {
            state,
            parent: None,
            cost,
        }
    }

    /// A node generated by expanding `parent`.
    pub fn child(state: S, parent: NodeId, cost: W) -> Self {
        Self {
            state,
            parent: Some(parent),
            cost,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn cost(&self) -> W {
        self.cost
    }
}

/// Growable storage for settled nodes.
#[derive(Debug, Clone)]
pub struct NodeArena<S, W> {
    nodes: Vec<Node<S, W>>,
}

impl<S, W> Default for NodeArena<S, W> {
    fn default() -> Self {
        NodeArena { nodes: Vec::new() }
    }
}

impl<S, W> NodeArena<S, W>
where
    S: Clone,
    W: Copy,
{
    /// Move a node into the arena, returning its stable index.
    pub fn insert(&mut self, node: Node<S, W>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Look up a settled node.
    ///
    /// Panics when the id is past the end of this arena. Ids are
    /// plain indices, so an id from another arena that happens to
    /// be in range is not detected.
    pub fn get(&self, id: NodeId) -> &Node<S, W> {
        assert!(
            id.0 < self.nodes.len(),
            "node {:?} is out of range for this arena of {} nodes",
            id,
            self.nodes.len()
        );
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `goal` back to the root of the tree,
    /// returning the states in order from the root to `goal`.
    ///
    /// The path cost is the cost recorded on the goal node.
    pub fn build_path(&self, goal: NodeId) -> Path<S, W> {
        let last = self.get(goal);
        let mut steps = vec![last.state.clone()];

        let mut parent = last.parent;
        while let Some(id) = parent {
            let node = self.get(id);
            steps.push(node.state.clone());
            parent = node.parent;
        }

        steps.reverse();
        Path::from_steps(steps, last.cost)
    }
}
