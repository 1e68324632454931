use super::*;
use chess_rules::Position;

fn height(node: &TreeNode) -> u8 {
    node.children.iter().map(height).max().map_or(0, |h| h + 1)
}

#[test]
fn startpos_tree_has_the_full_shape() {
    let mut nodes = 0;
    let root = build_tree(Position::startpos(), None, 3, &mut nodes);

    assert_eq!(root.children.len(), 20);
    let grandchildren: usize = root.children.iter().map(|c| c.children.len()).sum();
    assert_eq!(grandchildren, 400);
    // perft(1) + perft(2) + perft(3) nodes below the root.
    assert_eq!(nodes, 20 + 400 + 8902);
    assert_eq!(height(&root), 3);
    assert!(root.incoming.is_none());
    assert!(root.children.iter().all(|c| c.incoming.is_some()));
}

#[test]
fn depth_limit_truncates_the_tree() {
    let mut nodes = 0;
    let root = build_tree(Position::startpos(), None, 1, &mut nodes);

    assert_eq!(root.children.len(), 20);
    assert!(root.children.iter().all(|c| c.is_leaf()));
    assert_eq!(nodes, 20);
}

#[test]
fn stalemate_root_is_a_leaf() {
    let stalemate = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    let mut nodes = 0;
    let root = build_tree(stalemate, None, 3, &mut nodes);

    assert!(root.is_leaf());
    assert_eq!(nodes, 0);
}

#[test]
fn checkmate_inside_the_horizon_ends_its_branch() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut nodes = 0;
    let root = build_tree(pos, None, 2, &mut nodes);

    let mate = root
        .children
        .iter()
        .find(|c| c.position.is_checkmate())
        .expect("a mating move exists");
    assert!(mate.is_leaf());

    // Branches that are not terminal keep going to the depth limit.
    assert!(root.children.iter().any(|c| !c.is_leaf()));
}
