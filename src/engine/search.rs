//! Depth-limited alpha-beta search
//!
//! Fixed-depth minimax with alpha-beta pruning over the legal move list.
//! At the root the candidate moves are ordered by a one-ply static
//! evaluation of the resulting position, ascending, which front-loads the
//! opponent's worst replies and tightens the pruning window early.
//!
//! The entry point searches with the root as the minimizing side, so the
//! returned move is the one that drives the score down for the opponent
//! who replies next. Leaf values are the static evaluation of the leaf
//! position, negated for the minimizing side.

use crate::core::board::Position;
use crate::core::moves::Move;
use crate::engine::eval::evaluate;
use crate::engine::movegen::MoveGen;

/// Search depth used when the caller does not ask for one.
pub const DEFAULT_DEPTH: u32 = 4;

/// Score bound, outside the range any static evaluation can reach.
pub const INFINITY: i32 = 1 << 20;

/// Pick a move for the side to move of `pos`.
///
/// `on_node` is invoked once per search-tree node visited below the root,
/// so callers can count nodes or drive a progress indicator. Returns
/// `None` only when the side to move has no legal move at all.
pub fn best_move(pos: &Position, depth: u32, on_node: &mut dyn FnMut()) -> Option<Move> {
    let (value, mv) = search(pos, depth, false, -INFINITY, INFINITY, on_node, true);
    tracing::debug!(depth, value, best = ?mv.map(|m| m.to_string()), "search finished");
    mv
}

/// Alpha-beta over the legal moves of `pos`.
///
/// Returns the backed-up value together with the move that achieved it.
/// When the position has moves but none improved on the initial bound,
/// the first generated move is returned as a fallback; when there are no
/// moves at all the move slot is `None` and the value is the untouched
/// bound for the searching side.
#[allow(clippy::too_many_arguments)]
pub fn search(
    pos: &Position,
    depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
    on_node: &mut dyn FnMut(),
    root: bool,
) -> (i32, Option<Move>) {
    if depth == 0 {
        let value = evaluate(pos);
        return if maximizing {
            (value, None)
        } else {
            (-value, None)
        };
    }

    let mut moves = MoveGen::legal_moves(pos);
    if root {
        // Ascending one-ply score: likely-bad moves for the opponent first.
        moves.sort_by_key(|&mv| evaluate(&pos.apply(mv)));
    }

    let mut best_move = None;
    let mut best_value = if maximizing { -INFINITY } else { INFINITY };

    for &mv in &moves {
        let child = pos.apply(mv);
        let (value, _) = search(&child, depth - 1, !maximizing, alpha, beta, on_node, false);
        on_node();
        if maximizing {
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
        } else {
            if value < best_value {
                best_value = value;
                best_move = Some(mv);
            }
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }

    (best_value, best_move.or_else(|| moves.first().copied()))
}
