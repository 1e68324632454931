use super::*;

#[test]
fn greedy_engine_returns_a_legal_move() {
    let mut engine = GreedyEngine::new();
    let pos = Position::startpos();

    let result = engine.choose_move(&pos, Color::White, SearchLimits::depth(1));

    let mv = result.best_move.expect("startpos has moves");
    assert!(pos.legal_moves().contains(&mv));
    assert_eq!(result.nodes, 20);
}

#[test]
fn greedy_engine_agrees_with_a_direct_argmax() {
    let pos = Position::startpos();
    let mut engine = GreedyEngine::new();

    let result = engine.choose_move(&pos, Color::White, SearchLimits::depth(1));

    let best = pos
        .legal_moves()
        .into_iter()
        .map(|m| evaluate(&pos.apply(m), Color::White))
        .max()
        .unwrap();
    assert_eq!(result.score, best);
    assert_eq!(
        evaluate(&pos.apply(result.best_move.unwrap()), Color::White),
        best
    );
}

#[test]
fn greedy_engine_handles_checkmate() {
    let mut engine = GreedyEngine::new();
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();

    let result = engine.choose_move(&pos, Color::Black, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}

#[test]
fn greedy_engine_handles_stalemate() {
    let mut engine = GreedyEngine::new();
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.choose_move(&pos, Color::Black, SearchLimits::depth(1));

    assert!(result.best_move.is_none());
}
