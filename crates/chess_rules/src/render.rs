//! Text and SVG board diagrams.

use cozy_chess::{Color, File, Move, Piece, Rank, Square};

use crate::position::Position;

/// File ruler printed above the text diagram.
pub const FILE_HEADER: &str = " __a_b_c_d_e_f_g_h";

const SQUARE_SIZE: usize = 45;
const LIGHT_FILL: &str = "#f0d9b5";
const DARK_FILL: &str = "#b58863";
const HIGHLIGHT_FILL: &str = "#cdd16a";

/// Eight rank-labelled rows, top rank first, FEN piece letters and `.` for
/// empty squares.
pub fn ascii_board(pos: &Position) -> String {
    let mut out = String::new();
    for &rank in Rank::ALL.iter().rev() {
        out.push((b'1' + rank as u8) as char);
        out.push_str("| ");
        for file in File::ALL {
            out.push(piece_letter(pos, Square::new(file, rank)));
            if file != File::H {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out
}

fn piece_letter(pos: &Position, square: Square) -> char {
    match (pos.piece_on(square), pos.color_on(square)) {
        (Some(piece), Some(color)) => {
            let letter = match piece {
                Piece::Pawn => 'p',
                Piece::Knight => 'n',
                Piece::Bishop => 'b',
                Piece::Rook => 'r',
                Piece::Queen => 'q',
                Piece::King => 'k',
            };
            if color == Color::White {
                letter.to_ascii_uppercase()
            } else {
                letter
            }
        }
        _ => '.',
    }
}

/// Self-contained SVG diagram of the position.
///
/// `flipped` puts Black's back rank at the bottom; the squares of
/// `last_move` are highlighted.
pub fn svg_board(pos: &Position, flipped: bool, last_move: Option<Move>) -> String {
    let size = SQUARE_SIZE * 8;
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 {size} {size}\">\n"
    );

    for rank in Rank::ALL {
        for file in File::ALL {
            let square = Square::new(file, rank);
            let (x, y) = square_origin(square, flipped);

            let mut fill = if (file as usize + rank as usize) % 2 == 0 {
                DARK_FILL
            } else {
                LIGHT_FILL
            };
            if let Some(mv) = last_move {
                if square == mv.from || square == mv.to {
                    fill = HIGHLIGHT_FILL;
                }
            }
            svg.push_str(&format!(
                "<rect x=\"{x}\" y=\"{y}\" width=\"{SQUARE_SIZE}\" height=\"{SQUARE_SIZE}\" \
                 fill=\"{fill}\"/>\n"
            ));

            if let (Some(piece), Some(color)) = (pos.piece_on(square), pos.color_on(square)) {
                let cx = x + SQUARE_SIZE / 2;
                let baseline = y + SQUARE_SIZE - 9;
                svg.push_str(&format!(
                    "<text x=\"{cx}\" y=\"{baseline}\" font-size=\"36\" \
                     text-anchor=\"middle\">{}</text>\n",
                    piece_glyph(piece, color)
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

fn square_origin(square: Square, flipped: bool) -> (usize, usize) {
    let file = square.file() as usize;
    let rank = square.rank() as usize;
    if flipped {
        ((7 - file) * SQUARE_SIZE, rank * SQUARE_SIZE)
    } else {
        (file * SQUARE_SIZE, (7 - rank) * SQUARE_SIZE)
    }
}

fn piece_glyph(piece: Piece, color: Color) -> char {
    match (color, piece) {
        (Color::White, Piece::Pawn) => '\u{2659}',
        (Color::White, Piece::Knight) => '\u{2658}',
        (Color::White, Piece::Bishop) => '\u{2657}',
        (Color::White, Piece::Rook) => '\u{2656}',
        (Color::White, Piece::Queen) => '\u{2655}',
        (Color::White, Piece::King) => '\u{2654}',
        (Color::Black, Piece::Pawn) => '\u{265F}',
        (Color::Black, Piece::Knight) => '\u{265E}',
        (Color::Black, Piece::Bishop) => '\u{265D}',
        (Color::Black, Piece::Rook) => '\u{265C}',
        (Color::Black, Piece::Queen) => '\u{265B}',
        (Color::Black, Piece::King) => '\u{265A}',
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
