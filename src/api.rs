//! String-level engine boundary
//!
//! Callers hand positions across this boundary in the serialized mailbox
//! form and get moves back in the `"from-to"` textual form. The position
//! string is validated once here; the inner layers assume well-formed
//! input.

use crate::core::board::Position;
use crate::engine::movegen::MoveGen;
use crate::engine::search::{self, DEFAULT_DEPTH};
use crate::error::{EngineError, EngineResult};

/// Legal moves for the side to move, plus whether that side is in check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    /// Legal moves in `"from-to"` form, in generation order.
    pub moves: Vec<String>,
    /// Whether the side to move is currently in check.
    pub in_check: bool,
}

/// Enumerate the legal moves of a serialized position.
pub fn legal_moves(serialized: &str) -> EngineResult<MoveReport> {
    let pos = Position::parse(serialized)?;
    tracing::trace!(side = ?pos.side_to_move(), "enumerating legal moves");
    let moves = MoveGen::legal_moves(&pos)
        .iter()
        .map(|mv| mv.to_string())
        .collect();
    let in_check = MoveGen::is_check(&pos, pos.side_to_move());
    Ok(MoveReport { moves, in_check })
}

/// Search a serialized position and return the chosen move in textual form.
///
/// `depth` falls back to [`DEFAULT_DEPTH`] when absent. `on_node`, when
/// supplied, is invoked once per search-tree node visited. Fails with
/// [`EngineError::NoLegalMove`] when the side to move is mated or
/// stalemated. A depth of 0 stops at the static evaluation without ever
/// selecting a move, so it reports [`EngineError::NoLegalMove`] as well;
/// the shallowest move-selecting search is depth 1.
pub fn best_move(
    serialized: &str,
    depth: Option<u32>,
    on_node: Option<&mut dyn FnMut()>,
) -> EngineResult<String> {
    let pos = Position::parse(serialized)?;
    let depth = depth.unwrap_or(DEFAULT_DEPTH);
    let mut noop = || {};
    let on_node = on_node.unwrap_or(&mut noop);
    match search::best_move(&pos, depth, on_node) {
        Some(mv) => Ok(mv.to_string()),
        None => Err(EngineError::NoLegalMove),
    }
}
