//! Move generation and attack detection
//!
//! Every piece's moves come from a shared "projected moves from a square"
//! primitive driven by direction tables:
//! - Sliding pieces (bishop, rook, queen) walk a direction until blocked.
//! - Stepping pieces (knight, king) try each offset once.
//! - Pawns push onto empty squares and capture diagonally.
//!
//! Attack detection reuses the same primitive: a square is attacked if a
//! piece of some type, projected from that square, could land on an enemy
//! piece of the same type. Movement and attack rules therefore cannot
//! drift apart.

use crate::core::board::{Cell, Color, MovedFlag, PieceType, Position, Square};
use crate::core::moves::Move;

const BISHOP_DIRECTIONS: [i16; 4] = [9, 11, -9, -11];
const KNIGHT_DIRECTIONS: [i16; 8] = [-12, -21, -19, -8, 12, 21, 19, 8];
const KING_QUEEN_DIRECTIONS: [i16; 8] = [-1, -11, -10, -9, 1, 11, 10, 9];
const ROOK_DIRECTIONS: [i16; 4] = [-1, 1, -10, 10];

/// Probe order for attack detection.
const ATTACK_PROBES: [PieceType; 6] = [
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Queen,
    PieceType::King,
    PieceType::Pawn,
];

pub struct MoveGen;

impl MoveGen {
    /// Enumerate all legal moves for the side to move.
    ///
    /// Pieces are scanned in ascending offset order; each piece's
    /// pseudo-legal moves are appended, then any move whose resulting
    /// position leaves the mover's own king attacked is dropped.
    pub fn legal_moves(pos: &Position) -> Vec<Move> {
        let us = pos.side_to_move();
        let mut moves = Vec::new();
        for offset in 11..=88u8 {
            let sq = Square::new(offset);
            if let Some(piece) = pos.piece_at(sq) {
                if piece.color == us {
                    Self::projected_moves(pos, sq, piece.piece_type, us, true, &mut moves);
                }
            }
        }
        moves.retain(|&mv| !Self::is_check(&pos.apply(mv), us));
        moves
    }

    /// Whether a move is in the legal move list of the position.
    pub fn is_legal(pos: &Position, mv: Move) -> bool {
        Self::legal_moves(pos).contains(&mv)
    }

    /// Pseudo-legal moves of one piece type from one square, appended to
    /// `out`. This is the primitive shared by real move generation
    /// (`castling` true for kings) and attack probing (`castling` false).
    pub fn projected_moves(
        pos: &Position,
        from: Square,
        piece_type: PieceType,
        color: Color,
        castling: bool,
        out: &mut Vec<Move>,
    ) {
        match piece_type {
            PieceType::Bishop => Self::sliding_moves(pos, from, color, &BISHOP_DIRECTIONS, out),
            PieceType::Rook => Self::sliding_moves(pos, from, color, &ROOK_DIRECTIONS, out),
            PieceType::Queen => Self::sliding_moves(pos, from, color, &KING_QUEEN_DIRECTIONS, out),
            PieceType::Knight => Self::stepping_moves(pos, from, color, &KNIGHT_DIRECTIONS, out),
            PieceType::King => Self::king_moves(pos, from, color, castling, out),
            PieceType::Pawn => Self::pawn_moves(pos, from, color, out),
        }
    }

    /// Walk each direction until a blocker: empty squares and one enemy
    /// square are destinations, friendly pieces and sentinels stop the ray.
    fn sliding_moves(
        pos: &Position,
        from: Square,
        color: Color,
        directions: &[i16],
        out: &mut Vec<Move>,
    ) {
        for &dir in directions {
            let mut pointer = from.0 as i16;
            loop {
                pointer += dir;
                match pos.cell_at(pointer) {
                    Cell::Empty => out.push(Move::new(from, Square::new(pointer as u8))),
                    Cell::Occupied(p) if p.color != color => {
                        out.push(Move::new(from, Square::new(pointer as u8)));
                        break;
                    }
                    _ => break,
                }
            }
        }
    }

    /// One step per direction; empty or enemy squares are destinations.
    fn stepping_moves(
        pos: &Position,
        from: Square,
        color: Color,
        directions: &[i16],
        out: &mut Vec<Move>,
    ) {
        for &dir in directions {
            let pointer = from.0 as i16 + dir;
            match pos.cell_at(pointer) {
                Cell::Empty => out.push(Move::new(from, Square::new(pointer as u8))),
                Cell::Occupied(p) if p.color != color => {
                    out.push(Move::new(from, Square::new(pointer as u8)))
                }
                _ => {}
            }
        }
    }

    /// Forward pushes onto empty squares (the double step only from the
    /// start rank, and only while the scan stays empty), plus diagonal
    /// captures. No en passant.
    fn pawn_moves(pos: &Position, from: Square, color: Color, out: &mut Vec<Move>) {
        let dir = color.pawn_direction();
        let double_step = from.rank() == color.pawn_start_rank();

        let mut pointer = from.0 as i16;
        for _ in 0..if double_step { 2 } else { 1 } {
            pointer += dir;
            if pos.cell_at(pointer).is_empty() {
                out.push(Move::new(from, Square::new(pointer as u8)));
            } else {
                break;
            }
        }

        for diagonal in [dir - 1, dir + 1] {
            let pointer = from.0 as i16 + diagonal;
            if let Cell::Occupied(p) = pos.cell_at(pointer) {
                if p.color != color {
                    out.push(Move::new(from, Square::new(pointer as u8)));
                }
            }
        }
    }

    /// Castling candidates (when enabled) followed by the ordinary stepping
    /// moves. Castling probes the king's current and transit squares for
    /// attack; the landing square is covered by the generic post-move
    /// check filter in [`MoveGen::legal_moves`].
    fn king_moves(pos: &Position, from: Square, color: Color, castling: bool, out: &mut Vec<Move>) {
        if castling && Self::can_castle_kingside(pos, from, color) {
            if !Self::is_attacked(pos, from, color)
                && !Self::is_attacked(pos, Square::new(from.0 + 1), color)
            {
                out.push(Move::new(from, Square::new(from.0 + 2)));
            }
        }
        if castling && Self::can_castle_queenside(pos, from, color) {
            if !Self::is_attacked(pos, from, color)
                && !Self::is_attacked(pos, Square::new(from.0 - 1), color)
            {
                out.push(Move::new(from, Square::new(from.0 - 2)));
            }
        }
        Self::stepping_moves(pos, from, color, &KING_QUEEN_DIRECTIONS, out);
    }

    /// Kingside castling precondition: the two squares between king and
    /// rook are empty and neither the king nor that rook has ever moved.
    fn can_castle_kingside(pos: &Position, king_sq: Square, color: Color) -> bool {
        let clear = pos.cell_at(king_sq.0 as i16 + 1).is_empty()
            && pos.cell_at(king_sq.0 as i16 + 2).is_empty();
        clear
            && !pos.has_moved(MovedFlag::king(color))
            && !pos.has_moved(MovedFlag::kingside_rook(color))
    }

    /// Queenside castling precondition: three intervening squares empty,
    /// king and queenside rook unmoved.
    fn can_castle_queenside(pos: &Position, king_sq: Square, color: Color) -> bool {
        let clear = pos.cell_at(king_sq.0 as i16 - 1).is_empty()
            && pos.cell_at(king_sq.0 as i16 - 2).is_empty()
            && pos.cell_at(king_sq.0 as i16 - 3).is_empty();
        clear
            && !pos.has_moved(MovedFlag::king(color))
            && !pos.has_moved(MovedFlag::queenside_rook(color))
    }

    /// Whether `sq` is attacked by any enemy of `color`.
    ///
    /// For each piece type, project that type's moves from `sq` as if a
    /// defender stood there; `sq` is attacked exactly when a projected
    /// destination holds an enemy piece of the probed type.
    pub fn is_attacked(pos: &Position, sq: Square, color: Color) -> bool {
        ATTACK_PROBES
            .iter()
            .any(|&probe| Self::attacked_by(pos, sq, color, probe))
    }

    fn attacked_by(pos: &Position, sq: Square, color: Color, piece_type: PieceType) -> bool {
        let mut probes = Vec::new();
        Self::projected_moves(pos, sq, piece_type, color, false, &mut probes);
        probes.iter().any(|mv| {
            matches!(
                pos.piece_at(mv.to()),
                Some(p) if p.piece_type == piece_type && p.color != color
            )
        })
    }

    /// Whether the given color's king square is attacked.
    pub fn is_check(pos: &Position, color: Color) -> bool {
        match pos.king_square(color) {
            Some(sq) => Self::is_attacked(pos, sq, color),
            None => false,
        }
    }
}
