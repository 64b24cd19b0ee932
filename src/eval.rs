//! Static board evaluation.
//!
//! The heuristic is a material count only: no territory, no positional
//! weighting. It is the leaf evaluation for [`crate::search`] and the basis
//! for the session layer's "who is ahead" call.

use crate::board::{Board, Color};

/// Stone-count difference from `player`'s perspective: own stones minus
/// opponent stones. Pure, O(board size).
pub fn heuristic(board: &Board, player: Color) -> i32 {
    board.stones(player) as i32 - board.stones(player.opponent()) as i32
}
