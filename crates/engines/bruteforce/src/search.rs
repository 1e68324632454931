//! Minimax walk over a fully built search tree.

use chess_rules::{Color, Move, Position};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::eval::evaluate;
use crate::tree::{build_tree, TreeNode};

/// Searches `depth` plies ahead and returns the decision for `perspective`.
///
/// The score is the minimax value over the full tree; the move is the
/// first-ply move achieving it, or `None` when the root has no legal moves
/// (checkmate or stalemate — the score is then just the root evaluation).
/// `nodes` receives the number of tree nodes generated.
pub fn pick_move(
    pos: &Position,
    perspective: Color,
    depth: u8,
    nodes: &mut u64,
    rng: &mut SmallRng,
) -> (i32, Option<Move>) {
    let root = build_tree(pos.clone(), None, depth, nodes);
    evaluate_tree(&root, perspective, rng)
}

/// Folds the subtree under `node` into a score and a move.
///
/// Nodes where `perspective` is on move maximize, the others minimize. Each
/// internal node folds its children in a freshly shuffled order under a
/// strict comparison, so equal-scoring lines resolve to an arbitrary one
/// from call to call. Internal nodes propagate their own incoming move
/// unchanged; only the root, which has none, substitutes the winning
/// child's.
pub fn evaluate_tree(
    node: &TreeNode,
    perspective: Color,
    rng: &mut SmallRng,
) -> (i32, Option<Move>) {
    if node.is_leaf() {
        return (evaluate(&node.position, perspective), node.incoming);
    }

    // Per-node, per-call permutation; sibling subtrees shuffle independently.
    let mut order: Vec<&TreeNode> = node.children.iter().collect();
    order.shuffle(rng);

    let maximizing = node.position.side_to_move() == perspective;
    let (mut best_score, mut best_move) = evaluate_tree(order[0], perspective, rng);
    for child in &order[1..] {
        let (score, mv) = evaluate_tree(child, perspective, rng);
        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if better {
            best_score = score;
            best_move = mv;
        }
    }

    (best_score, node.incoming.or(best_move))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
