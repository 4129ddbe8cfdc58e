//! Move representation
//!
//! A move is an origin/destination pair of mailbox offsets. The textual
//! wire form is `"<from>-<to>"` with two-digit offsets, e.g. `"85-87"`.
//! Moves carry no promotion or capture payload; castling is inferred at
//! commit time from the piece type and a two-file king displacement.

use crate::core::board::Square;
use std::fmt;

/// An origin/destination pair.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Get the origin square
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Parse from the textual form (e.g. `"71-61"`).
    pub fn parse(s: &str) -> Option<Self> {
        let (from, to) = s.split_once('-')?;
        if from.len() != 2 || to.len() != 2 {
            return None;
        }
        let from: u8 = from.parse().ok()?;
        let to: u8 = to.parse().ok()?;
        Some(Move::new(Square::new(from), Square::new(to)))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
