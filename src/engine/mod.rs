//! Chess engine components
//!
//! This module contains the core engine functionality:
//! - Move generation over the padded mailbox, with check filtering
//! - Attack detection by probing piece moves from the target square
//! - Material plus piece-square evaluation
//! - Depth-limited alpha-beta search

pub mod eval;
pub mod movegen;
pub mod search;

pub use eval::evaluate;
pub use movegen::MoveGen;
pub use search::{DEFAULT_DEPTH, best_move, search};
