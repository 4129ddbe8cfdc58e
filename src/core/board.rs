//! Mailbox board representation
//!
//! The board is a flat array of 111 cells. Playable squares sit at offsets
//! `rank * 10 + file` with ranks and files 1-8 (rank 1 is black's home
//! rank, so white pawns advance by -10); every other offset is a sentinel
//! that terminates directional scans. The same layout doubles as the
//! serialized wire form: one ASCII character per cell, with the metadata
//! block (turn, moved flags, last move) at offsets 100-110.

use crate::core::moves::Move;
use crate::error::EngineError;
use std::fmt;

/// Total cell count: 100 grid offsets plus the 11 metadata offsets.
pub const BOARD_LEN: usize = 111;

const TURN_OFFSET: usize = 100;
const MOVED_FLAGS_OFFSET: usize = 101;
const LAST_FROM_TENS: usize = 107;
const LAST_FROM_ONES: usize = 108;
const LAST_TO_TENS: usize = 109;
const LAST_TO_ONES: usize = 110;

/// Canonical initial arrangement in serialized form.
pub const START_POSITION: &str = "00000000000rnbqkbnr00pppppppp00--------00--------00--------00--------00PPPPPPPP00RNBQKBNR0000000000000000000000";

/// A mailbox offset. Playable squares are 11-88 with file digit 1-8.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Square(pub u8);

impl Square {
    pub const WHITE_QUEENSIDE_ROOK_START: Square = Square(81);
    pub const WHITE_KINGSIDE_ROOK_START: Square = Square(88);
    pub const BLACK_QUEENSIDE_ROOK_START: Square = Square(11);
    pub const BLACK_KINGSIDE_ROOK_START: Square = Square(18);
    pub const WHITE_KING_START: Square = Square(85);
    pub const BLACK_KING_START: Square = Square(15);

    #[inline]
    pub const fn new(offset: u8) -> Self {
        Square(offset)
    }

    #[inline]
    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        Square(rank * 10 + file)
    }

    /// Rank digit (1-8 for playable squares). Rank 1 is black's home rank.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 10
    }

    /// File digit (1-8 for playable squares).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 10
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this offset addresses a board square rather than padding.
    #[inline]
    pub const fn is_playable(self) -> bool {
        let rank = self.rank();
        let file = self.file();
        rank >= 1 && rank <= 8 && file >= 1 && file <= 8
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Piece color
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn push direction (-10 for white, +10 for black).
    #[inline]
    pub const fn pawn_direction(self) -> i16 {
        match self {
            Color::White => -10,
            Color::Black => 10,
        }
    }

    /// Starting rank for pawns (white pawns begin on rank 7).
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 2,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Self::Output {
        self.opposite()
    }
}

/// Piece type
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase character for the piece type.
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Parse a piece type from a character of either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }
}

/// A colored piece
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Serialized character (uppercase for white, lowercase for black).
    pub fn to_char(self) -> char {
        let c = self.piece_type.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a piece from its serialized character.
    pub fn from_char(c: char) -> Option<Self> {
        let piece_type = PieceType::from_char(c)?;
        let color = if c.is_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(piece_type, color))
    }
}

/// Contents of one mailbox cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    /// Padding around the board; blocks every scan and is never assignable.
    Sentinel,
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The six monotonic "has moved" flags. Once set, a flag is never cleared,
/// which is what makes losing a castling right permanent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(usize)]
pub enum MovedFlag {
    WhiteQueensideRook = 0,
    WhiteKingsideRook = 1,
    BlackQueensideRook = 2,
    BlackKingsideRook = 3,
    WhiteKing = 4,
    BlackKing = 5,
}

impl MovedFlag {
    /// Serialized order at metadata offsets 101-106.
    pub const ALL: [MovedFlag; 6] = [
        MovedFlag::WhiteQueensideRook,
        MovedFlag::WhiteKingsideRook,
        MovedFlag::BlackQueensideRook,
        MovedFlag::BlackKingsideRook,
        MovedFlag::WhiteKing,
        MovedFlag::BlackKing,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        match color {
            Color::White => MovedFlag::WhiteKing,
            Color::Black => MovedFlag::BlackKing,
        }
    }

    #[inline]
    pub const fn kingside_rook(color: Color) -> Self {
        match color {
            Color::White => MovedFlag::WhiteKingsideRook,
            Color::Black => MovedFlag::BlackKingsideRook,
        }
    }

    #[inline]
    pub const fn queenside_rook(color: Color) -> Self {
        match color {
            Color::White => MovedFlag::WhiteQueensideRook,
            Color::Black => MovedFlag::BlackQueensideRook,
        }
    }
}

/// A chess position: the mailbox grid plus the metadata block.
///
/// Search derives child positions with [`Position::apply`], a pure copy;
/// the live game instance is advanced in place with [`Position::commit`].
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    cells: [Cell; BOARD_LEN],
    turn: Color,
    moved: [bool; 6],
    /// Last move origin/destination as two-digit offsets (00 when unset).
    last_from: u8,
    last_to: u8,
}

impl Position {
    /// Create a position with an empty board, white to move.
    pub fn empty() -> Self {
        let mut cells = [Cell::Sentinel; BOARD_LEN];
        for rank in 1..=8u8 {
            for file in 1..=8u8 {
                cells[Square::from_rank_file(rank, file).index()] = Cell::Empty;
            }
        }
        Position {
            cells,
            turn: Color::White,
            moved: [false; 6],
            last_from: 0,
            last_to: 0,
        }
    }

    /// The canonical starting position.
    pub fn startpos() -> Self {
        Self::parse(START_POSITION).expect("canonical start position parses")
    }

    /// Parse and validate a serialized position.
    ///
    /// This is the single validation point of the crate: everything past
    /// the boundary assumes the position is well-formed.
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        if s.len() != BOARD_LEN || !s.is_ascii() {
            return Err(EngineError::MalformedPosition(format!(
                "expected {} ascii characters, got {}",
                BOARD_LEN,
                s.len()
            )));
        }
        let bytes = s.as_bytes();
        let mut pos = Position::empty();
        let mut white_kings = 0u32;
        let mut black_kings = 0u32;

        for (i, &b) in bytes.iter().enumerate().take(TURN_OFFSET) {
            let sq = Square::new(i as u8);
            if sq.is_playable() {
                if b == b'-' {
                    continue;
                }
                let piece = Piece::from_char(b as char).ok_or_else(|| {
                    EngineError::MalformedPosition(format!(
                        "invalid square character '{}' at offset {}",
                        b as char, i
                    ))
                })?;
                if piece.piece_type == PieceType::King {
                    match piece.color {
                        Color::White => white_kings += 1,
                        Color::Black => black_kings += 1,
                    }
                }
                pos.put_piece(piece, sq);
            } else if b != b'0' {
                return Err(EngineError::MalformedPosition(format!(
                    "expected sentinel '0' at offset {}, found '{}'",
                    i, b as char
                )));
            }
        }

        pos.turn = match bytes[TURN_OFFSET] {
            b'0' => Color::White,
            b'1' => Color::Black,
            c => {
                return Err(EngineError::MalformedPosition(format!(
                    "invalid turn flag '{}'",
                    c as char
                )));
            }
        };

        for (slot, _) in MovedFlag::ALL.iter().enumerate() {
            match bytes[MOVED_FLAGS_OFFSET + slot] {
                b'0' => {}
                b'1' => pos.moved[slot] = true,
                c => {
                    return Err(EngineError::MalformedPosition(format!(
                        "invalid moved flag '{}' at offset {}",
                        c as char,
                        MOVED_FLAGS_OFFSET + slot
                    )));
                }
            }
        }

        let digit = |i: usize| -> Result<u8, EngineError> {
            let b = bytes[i];
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(EngineError::MalformedPosition(format!(
                    "invalid last-move digit '{}' at offset {}",
                    b as char, i
                )))
            }
        };
        pos.last_from = digit(LAST_FROM_TENS)? * 10 + digit(LAST_FROM_ONES)?;
        pos.last_to = digit(LAST_TO_TENS)? * 10 + digit(LAST_TO_ONES)?;

        if white_kings != 1 || black_kings != 1 {
            return Err(EngineError::MalformedPosition(format!(
                "expected one king per side, found {} white and {} black",
                white_kings, black_kings
            )));
        }

        Ok(pos)
    }

    /// Serialize to the 111-character wire form. Round-trips exactly.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(BOARD_LEN);
        for cell in &self.cells[..TURN_OFFSET] {
            out.push(match cell {
                Cell::Sentinel => '0',
                Cell::Empty => '-',
                Cell::Occupied(p) => p.to_char(),
            });
        }
        out.push(if self.turn == Color::Black { '1' } else { '0' });
        for &moved in &self.moved {
            out.push(if moved { '1' } else { '0' });
        }
        for d in [
            self.last_from / 10,
            self.last_from % 10,
            self.last_to / 10,
            self.last_to % 10,
        ] {
            out.push((b'0' + d) as char);
        }
        out
    }

    /// Cell at an arbitrary scan offset; anything out of range reads as a
    /// sentinel, so directional scans never need bounds checks.
    #[inline]
    pub fn cell_at(&self, offset: i16) -> Cell {
        if offset < 0 || offset >= BOARD_LEN as i16 {
            Cell::Sentinel
        } else {
            self.cells[offset as usize]
        }
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cell_at(sq.0 as i16)
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.get(sq).piece()
    }

    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.turn
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.turn = color;
    }

    #[inline]
    pub const fn has_moved(&self, flag: MovedFlag) -> bool {
        self.moved[flag.index()]
    }

    /// Record that a king or rook has moved. Monotonic: there is no way to
    /// clear a flag again.
    #[inline]
    pub fn set_moved(&mut self, flag: MovedFlag) {
        self.moved[flag.index()] = true;
    }

    /// Origin and destination of the most recently committed move, if any.
    pub fn last_move(&self) -> Option<(Square, Square)> {
        if self.last_from == 0 && self.last_to == 0 {
            None
        } else {
            Some((Square(self.last_from), Square(self.last_to)))
        }
    }

    /// Put a piece on a playable square. Sentinel cells are untouchable.
    pub fn put_piece(&mut self, piece: Piece, sq: Square) {
        if sq.is_playable() {
            self.cells[sq.index()] = Cell::Occupied(piece);
        }
    }

    /// Remove and return the piece on a square.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.cells[sq.index()] = Cell::Empty;
        Some(piece)
    }

    /// First square holding the given color's king, scanning offsets in
    /// ascending order.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        (11..=88u8).map(Square::new).find(|&sq| {
            matches!(
                self.get(sq),
                Cell::Occupied(p) if p.piece_type == PieceType::King && p.color == color
            )
        })
    }

    /// Pure move application: destination takes the moving piece, origin
    /// empties, the turn flips. No legality check, no flag updates, no
    /// last-move bookkeeping. This is what search uses to derive children.
    pub fn apply(&self, mv: Move) -> Position {
        debug_assert!(mv.from().is_playable() && mv.to().is_playable());
        let mut next = self.clone();
        next.cells[mv.to().index()] = next.cells[mv.from().index()];
        next.cells[mv.from().index()] = Cell::Empty;
        next.turn = self.turn.opposite();
        next
    }

    /// As [`Position::apply`], additionally recording the move in the
    /// last-move metadata.
    pub fn apply_recorded(&self, mv: Move) -> Position {
        let mut next = self.apply(mv);
        next.last_from = mv.from().0;
        next.last_to = mv.to().0;
        next
    }

    /// Commit a move to the live game state, in place.
    ///
    /// Unlike [`Position::apply`] this maintains the moved flags and
    /// relocates the rook when the king travels two files (castling is
    /// inferred from the piece type and displacement, never stored in the
    /// move itself).
    pub fn commit(&mut self, mv: Move) {
        debug_assert!(mv.from().is_playable() && mv.to().is_playable());
        match self.piece_at(mv.from()) {
            Some(p) if p.piece_type == PieceType::King => {
                self.set_moved(MovedFlag::king(p.color));
                let displacement = mv.from().0 as i16 - mv.to().0 as i16;
                if displacement.abs() == 2 {
                    self.castle_rook(mv.from(), mv.to());
                }
            }
            Some(p) if p.piece_type == PieceType::Rook => match (p.color, mv.from()) {
                (Color::White, Square::WHITE_QUEENSIDE_ROOK_START) => {
                    self.set_moved(MovedFlag::WhiteQueensideRook)
                }
                (Color::White, Square::WHITE_KINGSIDE_ROOK_START) => {
                    self.set_moved(MovedFlag::WhiteKingsideRook)
                }
                (Color::Black, Square::BLACK_QUEENSIDE_ROOK_START) => {
                    self.set_moved(MovedFlag::BlackQueensideRook)
                }
                (Color::Black, Square::BLACK_KINGSIDE_ROOK_START) => {
                    self.set_moved(MovedFlag::BlackKingsideRook)
                }
                _ => {}
            },
            _ => {}
        }

        self.cells[mv.to().index()] = self.cells[mv.from().index()];
        self.cells[mv.from().index()] = Cell::Empty;
        self.turn = self.turn.opposite();
        self.last_from = mv.from().0;
        self.last_to = mv.to().0;
    }

    /// Shuffle the rook past the king on a castling move. Queenside moves
    /// the rook from four files below the king to one past the landing
    /// square; kingside from three files above to one short of it.
    fn castle_rook(&mut self, from: Square, to: Square) {
        if from.0 > to.0 {
            self.cells[(to.0 + 1) as usize] = self.cells[(from.0 - 4) as usize];
            self.cells[(from.0 - 4) as usize] = Cell::Empty;
        } else {
            self.cells[(to.0 - 1) as usize] = self.cells[(from.0 + 3) as usize];
            self.cells[(from.0 + 3) as usize] = Cell::Empty;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for rank in 1..=8u8 {
            write!(f, "  {} ", rank)?;
            for file in 1..=8u8 {
                match self.get(Square::from_rank_file(rank, file)) {
                    Cell::Occupied(piece) => write!(f, "{} ", piece.to_char())?,
                    _ => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "    1 2 3 4 5 6 7 8")?;
        writeln!(f)?;
        writeln!(f, "  {}", self.serialize())?;
        Ok(())
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
