//! Search tree construction.
//!
//! The whole tree is built before anything looks at a score, one node per
//! reachable position, and thrown away after the decision. Nodes exclusively
//! own their children; nothing is shared or mutated after construction.

use chess_rules::{Move, Position};

/// One position reached during search, owning the subtree below it.
pub struct TreeNode {
    pub position: Position,
    /// Edge from the parent; absent only at the root.
    pub incoming: Option<Move>,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// A node has no children iff the depth limit was reached here or the
    /// position has no legal moves.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Builds the full tree of positions reachable within `remaining` plies.
///
/// Every successor is applied to an independent copy of the position, so
/// sibling branches never observe each other. `nodes` counts the nodes
/// generated below the root.
pub fn build_tree(
    position: Position,
    incoming: Option<Move>,
    remaining: u8,
    nodes: &mut u64,
) -> TreeNode {
    let mut node = TreeNode {
        position,
        incoming,
        children: Vec::new(),
    };

    if remaining == 0 {
        return node;
    }
    let moves = node.position.legal_moves();
    if moves.is_empty() {
        return node;
    }

    node.children.reserve(moves.len());
    for mv in moves {
        *nodes += 1;
        let successor = node.position.apply(mv);
        node.children
            .push(build_tree(successor, Some(mv), remaining - 1, nodes));
    }
    node
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
