//! Core chess types and representations
//!
//! This module contains the fundamental building blocks of the engine:
//! - Padded mailbox board and position metadata
//! - Piece, color, and square value types
//! - Move encoding with its textual wire form

pub mod board;
pub mod moves;

pub use board::{Cell, Color, MovedFlag, Piece, PieceType, Position, Square};
pub use moves::Move;
