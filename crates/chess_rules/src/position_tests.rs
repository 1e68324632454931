use super::*;

#[test]
fn startpos_has_twenty_moves() {
    assert_eq!(Position::startpos().legal_moves().len(), 20);
}

#[test]
fn apply_leaves_the_original_usable() {
    let pos = Position::startpos();
    let mv: Move = "e2e4".parse().unwrap();

    let next = pos.apply(mv);

    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(next.side_to_move(), Color::Black);
    assert_eq!(next.piece_on(Square::E4), Some(Piece::Pawn));
    assert_eq!(pos.piece_on(Square::E4), None);
}

#[test]
fn check_and_mate_queries() {
    // Fool's mate: White is checkmated.
    let mate =
        Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .unwrap();
    assert!(mate.is_check());
    assert!(mate.is_checkmate());

    // Checked but the king can step away.
    let check = Position::from_fen("4k3/8/8/8/8/8/4r3/4K2R w - - 0 1").unwrap();
    assert!(check.is_check());
    assert!(!check.is_checkmate());

    let quiet = Position::startpos();
    assert!(!quiet.is_check());
    assert!(!quiet.is_checkmate());
}

#[test]
fn attackers_sees_every_piece_kind() {
    let pos = Position::startpos();

    // e2 is defended by king, queen, bishop, and knight.
    assert_eq!(pos.attackers(Square::E2, Color::White).len(), 4);
    assert!(pos.is_defended(Square::E2, Color::White));

    // Nothing white reaches a1 through the b1 knight and c1 bishop.
    assert!(!pos.is_defended(Square::A1, Color::White));

    // Pawn attacks point the right way for each color: e2/g2 pawns plus the
    // g1 knight cover f3, mirrored for Black on f6.
    assert_eq!(pos.attackers(Square::F3, Color::White).len(), 3);
    assert_eq!(pos.attackers(Square::F6, Color::Black).len(), 3);
    assert_eq!(pos.attackers(Square::F6, Color::White).len(), 0);
}

#[test]
fn castling_parses_from_standard_uci() {
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    pos.play_uci("e1g1").unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.piece_on(Square::G1), Some(Piece::King));
    assert_eq!(pos.piece_on(Square::F1), Some(Piece::Rook));
}

#[test]
fn illegal_and_garbage_input_is_rejected() {
    let mut pos = Position::startpos();
    assert!(pos.play_uci("e2e5").is_err());
    assert!(pos.play_uci("hello").is_err());
    // The position is unchanged after rejected input.
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn fen_parses_and_displays() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.to_string(), fen);

    match Position::from_fen("not a fen") {
        Err(RulesError::InvalidFen(text)) => assert_eq!(text, "not a fen"),
        other => panic!("expected an InvalidFen error, got {other:?}"),
    }
}
