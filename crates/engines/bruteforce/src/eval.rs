//! Positional heuristic evaluation.
//!
//! Scores a position from one side's point of view: material, a small bonus
//! for advanced pieces, a bonus for defended friendly pieces, and a flat
//! per-piece ownership bonus. The scale is deliberately coarse (a pawn is
//! 1000) so the tweaks stay far below one unit of material.

use chess_rules::{Color, Position};

/// Sentinel for a decided game; dominates any sum of heuristic terms.
pub const SCORE_MAX: i32 = 999_999;
pub const SCORE_MIN: i32 = -SCORE_MAX;

/// Base piece values, indexed by `Piece` discriminant:
/// pawn, knight, bishop, rook, queen, king.
/// The king carries no inherent value; checkmate beats all scores.
const PIECE_SCORES: [i32; 6] = [1000, 3000, 3000, 3000, 5000, 0];

const PROTECTED_BONUS: i32 = 20;
const OWN_PIECE_BONUS: i32 = 10;
const CHECK_WEIGHT: i32 = 500;

/// Scores `pos` from `perspective`'s point of view. Higher is better for
/// that side. Pure function of the position; no history, no side effects.
pub fn evaluate(pos: &Position, perspective: Color) -> i32 {
    if pos.is_checkmate() {
        // The side to move is the side that has been mated.
        return if pos.side_to_move() == perspective {
            SCORE_MIN
        } else {
            SCORE_MAX
        };
    }

    let mut score = 0;

    for (square, piece, color) in pos.pieces() {
        let mut value = PIECE_SCORES[piece as usize];

        // Rank distance from the piece's own back rank, except that the
        // first step off it earns nothing.
        let rank = square.rank() as i32;
        let mut forward = if color == Color::White { rank } else { 7 - rank };
        if forward == 1 {
            forward = 0;
        }
        value += forward;

        if color == perspective && pos.is_defended(square, color) {
            value += PROTECTED_BONUS;
        }

        if color == perspective {
            score += value + OWN_PIECE_BONUS;
        } else {
            score -= value;
        }
    }

    if pos.is_check() {
        // A check against the perspective side counts toward its bucket.
        if pos.side_to_move() == perspective {
            score += CHECK_WEIGHT;
        } else {
            score -= CHECK_WEIGHT;
        }
    }

    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
