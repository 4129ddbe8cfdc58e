//! Mailbox chess rules engine and move search.
//!
//! The board is a padded 10x10 mailbox: squares live at offsets
//! `rank * 10 + file` (ranks and files 1-8), everything else is a sentinel
//! that terminates directional scans without bounds checks. A position
//! serializes to a fixed 111-character string carrying the grid, the side
//! to move, six monotonic moved flags, and the last move's coordinates.
//!
//! Two boundary operations are exposed over that serialized form:
//! [`legal_moves`] enumerates the legal moves of the side to move, and
//! [`best_move`] picks one via depth-limited alpha-beta search.

pub mod api;
pub mod core;
pub mod engine;
pub mod error;

pub use api::{MoveReport, best_move, legal_moves};
pub use crate::core::board::{Cell, Color, MovedFlag, Piece, PieceType, Position, Square};
pub use crate::core::moves::Move;
pub use engine::eval::evaluate;
pub use engine::movegen::MoveGen;
pub use engine::search::DEFAULT_DEPTH;
pub use error::{EngineError, EngineResult};
