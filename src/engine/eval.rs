//! Static position evaluation
//!
//! Material count plus piece-square positional bonuses, both oriented to
//! the side to move of the scored position: a positive score is good for
//! whoever's turn it is. The tables are fixed 100-entry arrays indexed by
//! mailbox offset (sentinel rows and columns are zero padding).

use crate::core::board::{Color, Piece, PieceType, Position, Square};

/// Fixed material values per piece type.
pub const fn piece_value(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Pawn => 100,
        PieceType::Knight => 300,
        PieceType::Bishop => 300,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 9000,
    }
}

#[rustfmt::skip]
const BLACK_PAWN_TABLE: [i32; 100] = [
    0,   0,   0,   0,   0,   0,   0,   0,   0, 0,
    0,   0,   0,   0,   0,   0,   0,   0,   0, 0,
    0,  20,  20,  20,  20,  20,  50,  50,  50, 0,
    0,  30,  30,  40,  40,  40,  20,  40,  40, 0,
    0,  10,  10,  50,  50,  50,  10,  30,  30, 0,
    0,  20,  20,  40,  40,  40,  20,  20,  20, 0,
    0,  20,  20,  30,  30,  30,  20,  20,  20, 0,
    0,  20,  20,  20,  20,  20,  20,  20,  20, 0,
    0, 100, 100, 100, 100, 100, 100, 100, 100, 0,
    0,   0,   0,   0,   0,   0,   0,   0,   0, 0,
];

#[rustfmt::skip]
const WHITE_PAWN_TABLE: [i32; 100] = [
    0,   0,   0,   0,   0,   0,   0,   0,   0, 0,
    0, 100, 100, 100, 100, 100, 100, 100, 100, 0,
    0,  20,  20,  20,  20,  20,  20,  20,  20, 0,
    0,  20,  20,  30,  30,  30,  20,  20,  20, 0,
    0,  20,  20,  40,  40,  40,  20,  20,  20, 0,
    0,  10,  10,  50,  50,  50,  10,  30,  30, 0,
    0,  30,  30,  40,  40,  40,  20,  40,  40, 0,
    0,  20,  20,  20,  20,  20,  50,  50,  50, 0,
    0,   0,   0,   0,   0,   0,   0,   0,   0, 0,
    0,   0,   0,   0,   0,   0,   0,   0,   0, 0,
];

#[rustfmt::skip]
const BLACK_KNIGHT_TABLE: [i32; 100] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0, 30, 10, 10, 10, 10, 30,  0, 0,
    0, 10, 20, 20, 30, 30, 20, 20, 10, 0,
    0, 10, 20, 40, 40, 40, 40, 20, 10, 0,
    0, 20, 30, 50, 50, 50, 50, 30, 20, 0,
    0, 20, 30, 50, 50, 50, 50, 30, 20, 0,
    0, 10, 20, 40, 40, 40, 40, 20, 10, 0,
    0, 10, 20, 20, 30, 30, 20, 20, 10, 0,
    0,  0, 10, 10, 10, 10, 10, 10,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

#[rustfmt::skip]
const WHITE_KNIGHT_TABLE: [i32; 100] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0, 10, 10, 10, 10, 10, 10,  0, 0,
    0, 10, 20, 20, 30, 30, 20, 20, 10, 0,
    0, 10, 20, 40, 40, 40, 40, 20, 10, 0,
    0, 20, 30, 50, 50, 50, 50, 30, 20, 0,
    0, 20, 30, 50, 50, 50, 50, 30, 20, 0,
    0, 10, 20, 40, 40, 40, 40, 20, 10, 0,
    0, 10, 20, 20, 30, 30, 20, 20, 10, 0,
    0,  0, 30, 10, 10, 10, 10, 30,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

#[rustfmt::skip]
const BLACK_ROOK_TABLE: [i32; 100] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0, 50, 20, 20, 50, 50, 50,  0, 50, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0, 30, 30, 30, 30, 30, 30, 30, 30, 0,
    0, 30, 30, 30, 30, 30, 30, 30, 30, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

#[rustfmt::skip]
const WHITE_ROOK_TABLE: [i32; 100] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0, 30, 30, 30, 30, 30, 30, 30, 30, 0,
    0, 30, 30, 30, 30, 30, 30, 30, 30, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0, 50, 20, 20, 50, 50, 50,  0, 50, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

#[rustfmt::skip]
const BLACK_BISHOP_TABLE: [i32; 100] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0, 30,  0,  0, 30,  0,  0, 0,
    0,  0, 40,  0, 30, 30,  0, 40,  0, 0,
    0,  0,  0, 20, 20, 20, 20,  0,  0, 0,
    0,  0, 20, 40, 30, 30, 40, 20,  0, 0,
    0,  0, 40, 30, 20, 20, 30, 40,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

#[rustfmt::skip]
const WHITE_BISHOP_TABLE: [i32; 100] = [
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
    0,  0, 40, 30, 20, 20, 30, 40,  0, 0,
    0,  0, 20, 40, 30, 30, 40, 20,  0, 0,
    0,  0,  0, 20, 20, 20, 20,  0,  0, 0,
    0,  0, 40,  0, 30, 30,  0, 40,  0, 0,
    0,  0,  0, 30,  0,  0, 30,  0,  0, 0,
    0,  0,  0,  0,  0,  0,  0,  0,  0, 0,
];

const QUEEN_TABLE: [i32; 100] = [0; 100];

#[rustfmt::skip]
const BLACK_KING_TABLE: [i32; 100] = [
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0, 100, 100,  0, 50,  0, 100,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
];

#[rustfmt::skip]
const WHITE_KING_TABLE: [i32; 100] = [
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
    0,  0, 100, 100,  0, 50,  0, 100,  0, 0,
    0,  0,   0,   0,  0,  0,  0,   0,  0, 0,
];

/// Positional bonus for a piece standing on a square.
pub fn positional_bonus(piece: Piece, sq: Square) -> i32 {
    let table = match (piece.color, piece.piece_type) {
        (Color::White, PieceType::Pawn) => &WHITE_PAWN_TABLE,
        (Color::White, PieceType::Knight) => &WHITE_KNIGHT_TABLE,
        (Color::White, PieceType::Bishop) => &WHITE_BISHOP_TABLE,
        (Color::White, PieceType::Rook) => &WHITE_ROOK_TABLE,
        (Color::White, PieceType::King) => &WHITE_KING_TABLE,
        (Color::Black, PieceType::Pawn) => &BLACK_PAWN_TABLE,
        (Color::Black, PieceType::Knight) => &BLACK_KNIGHT_TABLE,
        (Color::Black, PieceType::Bishop) => &BLACK_BISHOP_TABLE,
        (Color::Black, PieceType::Rook) => &BLACK_ROOK_TABLE,
        (Color::Black, PieceType::King) => &BLACK_KING_TABLE,
        (_, PieceType::Queen) => &QUEEN_TABLE,
    };
    table[sq.index()]
}

/// Score a position from the perspective of its side to move.
pub fn evaluate(pos: &Position) -> i32 {
    let mut white_material = 0;
    let mut black_material = 0;
    let mut white_positional = 0;
    let mut black_positional = 0;

    for offset in 11..=88u8 {
        let sq = Square::new(offset);
        if let Some(piece) = pos.piece_at(sq) {
            match piece.color {
                Color::White => {
                    white_material += piece_value(piece.piece_type);
                    white_positional += positional_bonus(piece, sq);
                }
                Color::Black => {
                    black_material += piece_value(piece.piece_type);
                    black_positional += positional_bonus(piece, sq);
                }
            }
        }
    }

    let (material, positional) = match pos.side_to_move() {
        Color::White => (
            white_material - black_material,
            white_positional - black_positional,
        ),
        Color::Black => (
            black_material - white_material,
            black_positional - white_positional,
        ),
    };
    material + positional
}
