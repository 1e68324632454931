//! Position wrapper over `cozy_chess::Board`.
//!
//! Engines never touch the underlying board directly; they see legal-move
//! enumeration, successor application, the game-state queries they score
//! with, and UCI/FEN conversion for the outside world.

use std::fmt;

use cozy_chess::{
    get_bishop_moves, get_king_moves, get_knight_moves, get_pawn_attacks, get_rook_moves, util,
    BitBoard, Board, Color, GameStatus, Move, Piece, Square,
};

use crate::error::RulesError;

/// A chess position. Cheap to clone; applying a move always produces a new
/// value, so earlier positions stay usable while siblings are explored.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
}

impl Position {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
        }
    }

    /// Parses a Forsyth-Edwards Notation string.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board =
            Board::from_fen(fen, false).map_err(|_| RulesError::InvalidFen(fen.to_string()))?;
        Ok(Self { board })
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// All legal moves in this position. Empty means checkmate or stalemate.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|batch| {
            moves.extend(batch);
            false
        });
        moves
    }

    /// Returns the successor position after `mv`.
    ///
    /// `mv` must come from [`legal_moves`](Self::legal_moves); this position
    /// is left untouched.
    pub fn apply(&self, mv: Move) -> Position {
        let mut board = self.board.clone();
        board.play_unchecked(mv);
        Self { board }
    }

    /// Parses a UCI move (`e2e4`, `e7e8q`, `e1g1` for castling) and plays it
    /// on this position if it is legal.
    pub fn play_uci(&mut self, text: &str) -> Result<Move, RulesError> {
        let mv = util::parse_uci_move(&self.board, text)
            .map_err(|_| RulesError::MoveParse(text.to_string()))?;
        if !self.board.is_legal(mv) {
            return Err(RulesError::IllegalMove(text.to_string()));
        }
        self.board.play_unchecked(mv);
        Ok(mv)
    }

    /// Renders `mv` in standard UCI notation for this position.
    pub fn move_to_uci(&self, mv: Move) -> String {
        util::display_uci_move(&self.board, mv).to_string()
    }

    /// Is the side to move in check?
    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    /// Is the side to move checkmated?
    pub fn is_checkmate(&self) -> bool {
        self.board.status() == GameStatus::Won
    }

    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board.piece_on(square)
    }

    pub fn color_on(&self, square: Square) -> Option<Color> {
        self.board.color_on(square)
    }

    /// Every occupied square with its piece and owner.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        self.board.occupied().into_iter().map(move |square| {
            let piece = self
                .board
                .piece_on(square)
                .expect("occupied square has a piece");
            let color = self
                .board
                .color_on(square)
                .expect("occupied square has a color");
            (square, piece, color)
        })
    }

    /// Pieces of `color` attacking `square`, pins ignored. A piece standing
    /// on `square` does not attack its own square.
    pub fn attackers(&self, square: Square, color: Color) -> BitBoard {
        let occupied = self.board.occupied();
        let mut attackers = get_knight_moves(square) & self.board.pieces(Piece::Knight);
        attackers |= get_king_moves(square) & self.board.pieces(Piece::King);
        attackers |= get_rook_moves(square, occupied)
            & (self.board.pieces(Piece::Rook) | self.board.pieces(Piece::Queen));
        attackers |= get_bishop_moves(square, occupied)
            & (self.board.pieces(Piece::Bishop) | self.board.pieces(Piece::Queen));
        attackers |= get_pawn_attacks(square, !color) & self.board.pieces(Piece::Pawn);
        attackers & self.board.colors(color)
    }

    /// Does at least one piece of `color` defend `square`?
    pub fn is_defended(&self, square: Square, color: Color) -> bool {
        !self.attackers(square, color).is_empty()
    }
}

impl fmt::Display for Position {
    /// FEN of the position.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
