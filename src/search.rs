//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! The search enumerates all board points in row-major order at every node,
//! skipping illegal placements, and scores leaves with the material-count
//! [`heuristic`]. There is no move ordering, transposition table, or
//! iterative deepening; at this board size plain alpha-beta over the fixed
//! scan order is enough.
//!
//! Two entry points:
//! - [`search`] - fixed-depth search
//! - [`search_with_deadline`] - same search with a soft wall-clock budget,
//!   polled between root candidates only
//!
//! No state survives across calls; every invocation is a pure function of
//! (board, depth, player).

use std::time::{Duration, Instant};

use crate::board::{Board, Color, Point};
use crate::constants::BOARD_POINTS;
use crate::eval::heuristic;
use crate::rules::apply_move;

/// Window bound strictly outside the heuristic's range (|score| <= N*N).
/// Never reported to callers: the root special-cases "no legal move".
const INF: i32 = BOARD_POINTS as i32 + 1;

/// Search result: the minimax score from the root player's perspective,
/// the chosen move (none at depth 0 or when no legal move exists), and the
/// number of nodes visited, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best_move: Option<Point>,
    pub nodes: u64,
}

/// Find the best move for `player` with a depth-bounded alpha-beta search.
///
/// At depth 0 this returns the static heuristic and no move. When `player`
/// has no legal move at the root, the result carries no move and the
/// board's static score rather than a window-bound sentinel.
///
/// Among equal-scoring moves the first in row-major scan order wins: the
/// update condition is strict, so a later tie never replaces an earlier move.
pub fn search(board: &Board, depth: usize, player: Color) -> SearchResult {
    let mut nodes = 0u64;
    let (score, best_move) = minimax(board, depth, -INF, INF, true, player, &mut nodes);

    if depth > 0 && best_move.is_none() {
        // No legal root move: the -INF bound must not leak as a score.
        return SearchResult {
            score: heuristic(board, player),
            best_move: None,
            nodes,
        };
    }
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

/// [`search`] with a soft wall-clock budget.
///
/// The budget is polled at the root only, after each fully evaluated
/// candidate: recursion below the root is never interrupted, and at least
/// one legal candidate is always examined. When the budget runs out
/// mid-enumeration the best candidate found so far is committed.
pub fn search_with_deadline(
    board: &Board,
    depth: usize,
    player: Color,
    budget: Duration,
) -> SearchResult {
    let mut nodes = 1u64; // root
    if depth == 0 {
        return SearchResult {
            score: heuristic(board, player),
            best_move: None,
            nodes,
        };
    }

    let start = Instant::now();
    let mut alpha = -INF;
    let mut max_eval = -INF;
    let mut best_move = None;

    for (r, c) in Board::points() {
        let Some(next) = apply_move(board, r, c, player) else {
            continue;
        };
        let (val, _) = minimax(&next, depth - 1, alpha, INF, false, player, &mut nodes);
        if val > max_eval {
            max_eval = val;
            best_move = Some((r, c));
        }
        alpha = alpha.max(val);

        if start.elapsed() >= budget {
            break;
        }
    }

    if best_move.is_none() {
        return SearchResult {
            score: heuristic(board, player),
            best_move: None,
            nodes,
        };
    }
    SearchResult {
        score: max_eval,
        best_move,
        nodes,
    }
}

/// Recursive alpha-beta minimax.
///
/// `player` is the root player the score is measured for; `maximizing`
/// says whose turn it is at this node. Illegal placements are skipped
/// without being scored; a node where every point is illegal returns its
/// open-ended initial bound, which the maximizing parent then ignores in
/// favor of its other children (or the root special case catches it).
fn minimax(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    player: Color,
    nodes: &mut u64,
) -> (i32, Option<Point>) {
    *nodes += 1;
    if depth == 0 {
        return (heuristic(board, player), None);
    }

    let mover = if maximizing {
        player
    } else {
        player.opponent()
    };
    let mut best_move = None;

    if maximizing {
        let mut max_eval = -INF;
        for (r, c) in Board::points() {
            let Some(next) = apply_move(board, r, c, mover) else {
                continue;
            };
            let (val, _) = minimax(&next, depth - 1, alpha, beta, false, player, nodes);
            if val > max_eval {
                max_eval = val;
                best_move = Some((r, c));
            }
            alpha = alpha.max(val);
            if beta <= alpha {
                break;
            }
        }
        (max_eval, best_move)
    } else {
        let mut min_eval = INF;
        for (r, c) in Board::points() {
            let Some(next) = apply_move(board, r, c, mover) else {
                continue;
            };
            let (val, _) = minimax(&next, depth - 1, alpha, beta, true, player, nodes);
            if val < min_eval {
                min_eval = val;
                best_move = Some((r, c));
            }
            beta = beta.min(val);
            if beta <= alpha {
                break;
            }
        }
        (min_eval, best_move)
    }
}
