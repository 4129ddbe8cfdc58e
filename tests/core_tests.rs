//! Core Module Tests
//!
//! Tests for the mailbox board, serialization, and move bookkeeping.

use mailbox_chess::core::board::{
    BOARD_LEN, Cell, Color, MovedFlag, Piece, PieceType, Position, START_POSITION, Square,
};
use mailbox_chess::core::moves::Move;

fn mv(from: u8, to: u8) -> Move {
    Move::new(Square::new(from), Square::new(to))
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_start_position_round_trip() {
    assert_eq!(START_POSITION.len(), BOARD_LEN);
    let pos = Position::parse(START_POSITION).unwrap();
    assert_eq!(pos.serialize(), START_POSITION);
    assert_eq!(pos, Position::startpos());
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.last_move(), None);
    for flag in MovedFlag::ALL {
        assert!(!pos.has_moved(flag));
    }
}

#[test]
fn test_start_position_piece_placement() {
    let pos = Position::startpos();
    assert_eq!(
        pos.piece_at(Square::new(85)),
        Some(Piece::new(PieceType::King, Color::White))
    );
    assert_eq!(
        pos.piece_at(Square::new(15)),
        Some(Piece::new(PieceType::King, Color::Black))
    );
    assert_eq!(
        pos.piece_at(Square::new(81)),
        Some(Piece::new(PieceType::Rook, Color::White))
    );
    assert_eq!(
        pos.piece_at(Square::new(18)),
        Some(Piece::new(PieceType::Rook, Color::Black))
    );
    assert_eq!(
        pos.piece_at(Square::new(71)),
        Some(Piece::new(PieceType::Pawn, Color::White))
    );
    assert_eq!(pos.piece_at(Square::new(44)), None);
}

#[test]
fn test_metadata_round_trip() {
    // Black to move, kingside rooks and the black king flagged as moved,
    // last move 71-61.
    let serialized = format!("{}{}", &START_POSITION[..100], "10101017161");
    let pos = Position::parse(&serialized).unwrap();
    assert_eq!(pos.side_to_move(), Color::Black);
    assert!(pos.has_moved(MovedFlag::WhiteKingsideRook));
    assert!(pos.has_moved(MovedFlag::BlackKingsideRook));
    assert!(pos.has_moved(MovedFlag::BlackKing));
    assert!(!pos.has_moved(MovedFlag::WhiteQueensideRook));
    assert!(!pos.has_moved(MovedFlag::WhiteKing));
    assert_eq!(pos.last_move(), Some((Square::new(71), Square::new(61))));
    assert_eq!(pos.serialize(), serialized);
}

#[test]
fn test_parse_rejects_wrong_length() {
    assert!(Position::parse("").is_err());
    assert!(Position::parse("rnbqkbnr").is_err());
    assert!(Position::parse(&format!("{}0", START_POSITION)).is_err());
}

#[test]
fn test_parse_rejects_bad_square_character() {
    let mut s = START_POSITION.as_bytes().to_vec();
    s[44] = b'x';
    assert!(Position::parse(std::str::from_utf8(&s).unwrap()).is_err());
}

#[test]
fn test_parse_rejects_corrupted_sentinel() {
    let mut s = START_POSITION.as_bytes().to_vec();
    s[0] = b'P';
    assert!(Position::parse(std::str::from_utf8(&s).unwrap()).is_err());
}

#[test]
fn test_parse_rejects_bad_turn_flag() {
    let mut s = START_POSITION.as_bytes().to_vec();
    s[100] = b'7';
    assert!(Position::parse(std::str::from_utf8(&s).unwrap()).is_err());
}

#[test]
fn test_parse_rejects_bad_moved_flag() {
    let mut s = START_POSITION.as_bytes().to_vec();
    s[103] = b'-';
    assert!(Position::parse(std::str::from_utf8(&s).unwrap()).is_err());
}

#[test]
fn test_parse_rejects_missing_king() {
    let mut s = START_POSITION.as_bytes().to_vec();
    s[85] = b'-';
    assert!(Position::parse(std::str::from_utf8(&s).unwrap()).is_err());

    // Two white kings is just as malformed.
    let mut s = START_POSITION.as_bytes().to_vec();
    s[44] = b'K';
    assert!(Position::parse(std::str::from_utf8(&s).unwrap()).is_err());
}

// ============================================================================
// Board access
// ============================================================================

#[test]
fn test_cell_at_out_of_range_is_sentinel() {
    let pos = Position::startpos();
    assert_eq!(pos.cell_at(-5), Cell::Sentinel);
    assert_eq!(pos.cell_at(BOARD_LEN as i16), Cell::Sentinel);
    assert_eq!(pos.cell_at(200), Cell::Sentinel);
    assert_eq!(pos.cell_at(10), Cell::Sentinel);
}

#[test]
fn test_put_piece_ignores_padding() {
    let mut pos = Position::empty();
    pos.put_piece(Piece::new(PieceType::Queen, Color::White), Square::new(10));
    assert_eq!(pos.get(Square::new(10)), Cell::Sentinel);
    pos.put_piece(Piece::new(PieceType::Queen, Color::White), Square::new(44));
    assert!(pos.piece_at(Square::new(44)).is_some());

    let removed = pos.remove_piece(Square::new(44));
    assert_eq!(removed, Some(Piece::new(PieceType::Queen, Color::White)));
    assert_eq!(pos.get(Square::new(44)), Cell::Empty);
    assert_eq!(pos.remove_piece(Square::new(44)), None);
}

#[test]
fn test_king_square_scans_ascending() {
    let pos = Position::startpos();
    assert_eq!(pos.king_square(Color::Black), Some(Square::new(15)));
    assert_eq!(pos.king_square(Color::White), Some(Square::new(85)));
    assert_eq!(Position::empty().king_square(Color::White), None);
}

// ============================================================================
// Move application
// ============================================================================

#[test]
fn test_apply_moves_piece_and_flips_turn() {
    let pos = Position::startpos();
    let next = pos.apply(mv(71, 61));
    assert_eq!(
        next.piece_at(Square::new(61)),
        Some(Piece::new(PieceType::Pawn, Color::White))
    );
    assert_eq!(next.piece_at(Square::new(71)), None);
    assert_eq!(next.side_to_move(), Color::Black);
    // Pure application: no bookkeeping.
    assert_eq!(next.last_move(), None);
    for flag in MovedFlag::ALL {
        assert!(!next.has_moved(flag));
    }
    // Source is untouched.
    assert_eq!(pos.serialize(), START_POSITION);
}

#[test]
fn test_apply_recorded_sets_last_move() {
    let next = Position::startpos().apply_recorded(mv(71, 51));
    assert_eq!(next.last_move(), Some((Square::new(71), Square::new(51))));
}

#[test]
fn test_apply_does_not_relocate_castle_rook() {
    let mut pos = Position::empty();
    pos.put_piece(Piece::new(PieceType::King, Color::White), Square::new(85));
    pos.put_piece(Piece::new(PieceType::Rook, Color::White), Square::new(88));
    pos.put_piece(Piece::new(PieceType::King, Color::Black), Square::new(15));

    let next = pos.apply(mv(85, 87));
    assert!(next.piece_at(Square::new(86)).is_none());
    assert_eq!(
        next.piece_at(Square::new(88)),
        Some(Piece::new(PieceType::Rook, Color::White))
    );
}

#[test]
fn test_commit_sets_king_and_rook_flags() {
    let mut pos = Position::empty();
    pos.put_piece(Piece::new(PieceType::King, Color::White), Square::new(85));
    pos.put_piece(Piece::new(PieceType::Rook, Color::White), Square::new(88));
    pos.put_piece(Piece::new(PieceType::King, Color::Black), Square::new(15));

    pos.commit(mv(88, 68));
    assert!(pos.has_moved(MovedFlag::WhiteKingsideRook));
    assert!(!pos.has_moved(MovedFlag::WhiteKing));
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.last_move(), Some((Square::new(88), Square::new(68))));

    pos.commit(mv(15, 14));
    assert!(pos.has_moved(MovedFlag::BlackKing));
    assert_eq!(pos.side_to_move(), Color::White);

    pos.commit(mv(85, 84));
    assert!(pos.has_moved(MovedFlag::WhiteKing));
}

#[test]
fn test_commit_rook_flag_only_from_start_square() {
    let mut pos = Position::empty();
    pos.put_piece(Piece::new(PieceType::King, Color::White), Square::new(85));
    pos.put_piece(Piece::new(PieceType::King, Color::Black), Square::new(15));
    // A rook that did not start on a corner never flips a flag.
    pos.put_piece(Piece::new(PieceType::Rook, Color::White), Square::new(44));
    pos.commit(mv(44, 48));
    for flag in MovedFlag::ALL {
        assert!(!pos.has_moved(flag));
    }
}

#[test]
fn test_commit_kingside_castle_relocates_rook() {
    let mut pos = Position::empty();
    pos.put_piece(Piece::new(PieceType::King, Color::White), Square::new(85));
    pos.put_piece(Piece::new(PieceType::Rook, Color::White), Square::new(88));
    pos.put_piece(Piece::new(PieceType::King, Color::Black), Square::new(15));

    pos.commit(mv(85, 87));
    assert_eq!(
        pos.piece_at(Square::new(87)),
        Some(Piece::new(PieceType::King, Color::White))
    );
    assert_eq!(
        pos.piece_at(Square::new(86)),
        Some(Piece::new(PieceType::Rook, Color::White))
    );
    assert!(pos.piece_at(Square::new(88)).is_none());
    assert!(pos.piece_at(Square::new(85)).is_none());
    assert!(pos.has_moved(MovedFlag::WhiteKing));
    // Only the king flag flips; the rook was carried, it did not move.
    assert!(!pos.has_moved(MovedFlag::WhiteKingsideRook));
}

#[test]
fn test_commit_queenside_castle_relocates_rook() {
    let mut pos = Position::empty();
    pos.put_piece(Piece::new(PieceType::King, Color::Black), Square::new(15));
    pos.put_piece(Piece::new(PieceType::Rook, Color::Black), Square::new(11));
    pos.put_piece(Piece::new(PieceType::King, Color::White), Square::new(85));
    pos.set_side_to_move(Color::Black);

    pos.commit(mv(15, 13));
    assert_eq!(
        pos.piece_at(Square::new(13)),
        Some(Piece::new(PieceType::King, Color::Black))
    );
    assert_eq!(
        pos.piece_at(Square::new(14)),
        Some(Piece::new(PieceType::Rook, Color::Black))
    );
    assert!(pos.piece_at(Square::new(11)).is_none());
    assert!(pos.has_moved(MovedFlag::BlackKing));
}

#[test]
fn test_moved_flags_are_monotonic() {
    let mut pos = Position::startpos();
    pos.set_moved(MovedFlag::WhiteQueensideRook);
    pos.set_moved(MovedFlag::WhiteQueensideRook);
    assert!(pos.has_moved(MovedFlag::WhiteQueensideRook));
    let s = pos.serialize();
    assert_eq!(&s[101..107], "100000");
}

// ============================================================================
// Move parsing
// ============================================================================

#[test]
fn test_move_textual_form() {
    let m = mv(85, 87);
    assert_eq!(m.to_string(), "85-87");
    assert_eq!(Move::parse("85-87"), Some(m));
    assert_eq!(Move::parse("71-61"), Some(mv(71, 61)));
}

#[test]
fn test_move_parse_rejects_malformed() {
    assert_eq!(Move::parse(""), None);
    assert_eq!(Move::parse("85"), None);
    assert_eq!(Move::parse("8-87"), None);
    assert_eq!(Move::parse("85-8"), None);
    assert_eq!(Move::parse("85_87"), None);
    assert_eq!(Move::parse("ab-cd"), None);
}
