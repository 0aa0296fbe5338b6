//! Iterative minimax: exhaustive exact search on an explicit frontier.
//!
//! Behaviorally equivalent to [`super::recursive`] (same value for the
//! same root, same value class for the chosen move), but the game tree
//! lives in an arena [`SearchTree`] and the traversal is driven by an
//! explicit LIFO frontier, so no state-space depth can overflow the call
//! stack.
//!
//! ## Two-visit protocol
//!
//! Every non-terminal node is popped twice. On the first visit it is
//! pushed back, then a child is created and pushed for each legal move;
//! LIFO order keeps all children strictly above the re-pushed parent, so
//! the traversal is depth-first and every child resolves before its
//! parent is popped again. On the second visit the node's score is the
//! maximum of its children's negated scores, set exactly once. Terminal
//! nodes are scored directly on their only visit.

use super::tree::{NodeId, SearchNode, SearchTree, TreeStats};
use super::{terminal_score, Score};
use crate::game::GameState;

/// The outcome of a fully resolved iterative search.
#[derive(Clone, Debug)]
pub struct Resolution<M> {
    /// The selected root move; `None` iff the root was terminal.
    pub best_move: Option<M>,

    /// Exact minimax value for the side to move at the root.
    pub value: Score,

    /// Shape of the explored tree.
    pub stats: TreeStats,
}

/// Run the iterative search to completion and resolve the root.
///
/// Chopsticks admits cycles, so this diverges on it just as the
/// recursive variant would; termination is bounded only by the
/// finiteness of the game's state space.
pub fn resolve<S: GameState>(root_state: &S) -> Resolution<S::Move> {
    let mut tree = SearchTree::new(root_state.clone());
    let mut frontier: Vec<NodeId> = vec![tree.root()];

    while let Some(id) = frontier.pop() {
        if tree.get(id).children.is_empty() {
            if tree.get(id).state.is_terminal() {
                let score = terminal_score(&tree.get(id).state);
                tree.get_mut(id).score = Some(score);
            } else {
                // First visit: revisit once the children are resolved.
                frontier.push(id);
                let depth = tree.get(id).depth + 1;
                for mv in tree.get(id).state.legal_moves() {
                    let child_state = tree.get(id).state.apply(&mv);
                    let child = tree.alloc(SearchNode::new(id, mv, child_state, depth));
                    tree.get_mut(id).children.push(child);
                    frontier.push(child);
                }
            }
        } else {
            // Second visit: LIFO order guarantees every child was popped
            // and resolved while this node waited underneath them.
            let mut best = Score::Loss;
            for i in 0..tree.get(id).children.len() {
                let child = tree.get(id).children[i];
                let child_score = tree
                    .get(child)
                    .score
                    .expect("children resolve before their parent's second visit");
                let value = -child_score;
                if value > best {
                    best = value;
                }
            }
            tree.get_mut(id).score = Some(best);
        }
    }

    let value = tree
        .root_node()
        .score
        .expect("the frontier empties only once the root is resolved");

    Resolution {
        best_move: select_root_move(&tree),
        value,
        stats: tree.stats(),
    }
}

/// Pick the root move from the resolved tree.
///
/// Children are inspected in creation order: first one scoring `Loss`
/// (the opponent loses the child, so the root mover wins), else first
/// scoring `Draw`, else the first child. The final fallback covers the
/// all-children-winning case, where every move is equally lost.
fn select_root_move<S: GameState>(tree: &SearchTree<S>) -> Option<S::Move> {
    let children = &tree.root_node().children;

    for wanted in [Score::Loss, Score::Draw] {
        for &child in children {
            if tree.get(child).score == Some(wanted) {
                return tree.get(child).mv.clone();
            }
        }
    }

    children.first().and_then(|&child| tree.get(child).mv.clone())
}

/// Select a minimax-optimal move for the side to move at `state`,
/// without touching the call stack.
///
/// Returns `None` iff the game is already over at `state`. Equivalent in
/// value class to [`super::recursive_minimax`].
pub fn iterative_minimax<S: GameState>(state: &S) -> Option<S::Move> {
    resolve(state).best_move
}
