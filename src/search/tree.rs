//! Arena-based search tree for the iterative minimax traversal.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references. The arena
//! owns every hypothetical state created during a search, and the whole
//! tree is dropped in one piece when the search returns.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Score;
use crate::game::GameState;

/// Index into the `SearchTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node (the root's parent).
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One state under exploration.
///
/// The move that produced the state is recorded on the node itself at
/// creation time, so reporting the root's chosen move needs no separate
/// state-to-move lookup (and no state-equality collisions can lose a
/// move).
#[derive(Clone, Debug)]
pub struct SearchNode<S: GameState> {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The move that led from the parent to this state. `None` only for
    /// the root.
    pub mv: Option<S::Move>,

    /// The state this node evaluates.
    pub state: S,

    /// Depth in the tree (root = 0).
    pub depth: u16,

    /// Child nodes, one per legal move, in move-enumeration order.
    /// Populated on the node's first visit.
    pub children: SmallVec<[NodeId; 8]>,

    /// Minimax value for the side to move at `state`. Set exactly once,
    /// only after every child's score is set.
    pub score: Option<Score>,
}

impl<S: GameState> SearchNode<S> {
    /// Create a node reached from `parent` by `mv`.
    pub fn new(parent: NodeId, mv: S::Move, state: S, depth: u16) -> Self {
        Self {
            parent,
            mv: Some(mv),
            state,
            depth,
            children: SmallVec::new(),
            score: None,
        }
    }

    /// Create a root node.
    pub fn root(state: S) -> Self {
        Self {
            parent: NodeId::NONE,
            mv: None,
            state,
            depth: 0,
            children: SmallVec::new(),
            score: None,
        }
    }

    /// Whether this node's score has been computed.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.score.is_some()
    }
}

/// Arena-based search tree.
///
/// Nodes are stored in a flat vector and referenced by `NodeId` indices.
#[derive(Clone, Debug)]
pub struct SearchTree<S: GameState> {
    nodes: Vec<SearchNode<S>>,
    root: NodeId,
}

impl<S: GameState> SearchTree<S> {
    /// Create a new tree with a root node wrapping `root_state`.
    pub fn new(root_state: S) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(1024),
            root: NodeId::new(0),
        };
        tree.nodes.push(SearchNode::root(root_state));
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: SearchNode<S>) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the root node.
    #[must_use]
    pub fn root_node(&self) -> &SearchNode<S> {
        self.get(self.root)
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self
            .nodes
            .iter()
            .filter(|n| n.children.is_empty() && n.is_resolved())
            .count();
        let resolved_count = self.nodes.iter().filter(|n| n.is_resolved()).count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            resolved_count,
        }
    }
}

/// Statistics about a finished (or abandoned) search tree.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes explored.
    pub node_count: usize,

    /// Maximum depth reached, in plies from the root.
    pub max_depth: u16,

    /// Number of terminal leaves scored directly.
    pub terminal_count: usize,

    /// Number of nodes whose score was computed.
    pub resolved_count: usize,
}

impl TreeStats {
    /// Average branching factor over interior nodes.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let interior = self.node_count - self.terminal_count;
        if interior == 0 {
            0.0
        } else {
            // Every node except the root is some interior node's child.
            (self.node_count - 1) as f64 / interior as f64
        }
    }
}
