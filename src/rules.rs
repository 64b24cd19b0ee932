//! Rules engine: liberties, group detection, captures, and move legality.
//!
//! This module provides the core game logic for the 5x5 Go variant:
//! - Connected-group liberty checks via flood fill
//! - Simultaneous dead-group removal (captures)
//! - Move application with capture-before-suicide ordering
//!
//! A move never mutates the caller's board. [`apply_move`] copies the board,
//! resolves it fully on the copy, and either returns the new board or nothing.
//! The one in-place mutation, [`remove_dead`], is confined to this module's
//! own copies (and exposed for diagnostics and tests).

use crate::board::{Board, Color, Point};
use crate::constants::{BOARD_POINTS, N};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinates are off the board
    OutOfBounds,
    /// Point is not empty
    Occupied,
    /// Placement would leave the mover's own group without liberties
    /// after capture resolution
    Suicide,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: point is off the board"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Check whether the group containing the stone at (r, c) has at least one
/// liberty (an empty 4-adjacent point).
///
/// Uses an iterative flood fill over same-colored stones with an explicit
/// visited array. Groups can loop back on themselves on a grid, so the
/// visited tracking is what guarantees termination; it is part of the
/// algorithm, not an optimization.
///
/// Returns `false` if (r, c) is empty or out of bounds.
pub fn has_liberty(board: &Board, r: usize, c: usize) -> bool {
    let Some(color) = board.get(r, c) else {
        return false;
    };

    let mut stack = vec![(r, c)];
    let mut visited = [false; BOARD_POINTS];

    while let Some((cr, cc)) = stack.pop() {
        let i = cr * N + cc;
        if visited[i] {
            continue;
        }
        visited[i] = true;

        for (nr, nc) in Board::neighbors(cr, cc) {
            match board.get(nr, nc) {
                // Neighbors are always in bounds, so an unoccupied neighbor
                // is a liberty.
                None => return true,
                Some(n_color) if n_color == color => {
                    if !visited[nr * N + nc] {
                        stack.push((nr, nc));
                    }
                }
                _ => {}
            }
        }
    }
    false
}

/// Remove every stone of `color` whose group has no liberties.
///
/// Liberties are evaluated on the pre-removal board for all stones of the
/// color at once: the dead set is collected first and cleared afterwards,
/// so removal order cannot cascade within one call. Returns the number of
/// stones cleared.
pub fn remove_dead(board: &mut Board, color: Color) -> usize {
    let mut to_remove: Vec<Point> = Vec::new();
    for (r, c) in Board::points() {
        if board.get(r, c) == Some(color) && !has_liberty(board, r, c) {
            to_remove.push((r, c));
        }
    }
    for &(r, c) in &to_remove {
        board.set(r, c, None);
    }
    to_remove.len()
}

/// Attempt to play a stone of `player` at (r, c).
///
/// On success returns the new, fully resolved board; the input board is
/// never touched. Resolution order follows standard Go move legality:
/// 1. the target must be an empty on-board point,
/// 2. the stone is placed on a copy,
/// 3. dead opponent groups are removed (capture),
/// 4. if the placed stone's own group then has no liberty, the whole move
///    is rejected as suicide.
pub fn try_move(board: &Board, r: usize, c: usize, player: Color) -> Result<Board, MoveError> {
    if !Board::in_bounds(r, c) {
        return Err(MoveError::OutOfBounds);
    }
    if board.get(r, c).is_some() {
        return Err(MoveError::Occupied);
    }

    let mut next = board.clone();
    next.set(r, c, Some(player));

    // Captures are resolved before the suicide check: a placement with no
    // liberties of its own is legal if it removes the surrounding group.
    remove_dead(&mut next, player.opponent());

    if !has_liberty(&next, r, c) {
        return Err(MoveError::Suicide);
    }
    Ok(next)
}

/// [`try_move`] with the rejection reason folded away. This is the contract
/// surface the search engine and session layer use: a board or nothing.
pub fn apply_move(board: &Board, r: usize, c: usize, player: Color) -> Option<Board> {
    try_move(board, r, c, player).ok()
}

/// All legal placements for `player`, in row-major order.
pub fn legal_moves(board: &Board, player: Color) -> Vec<Point> {
    Board::points()
        .filter(|&(r, c)| try_move(board, r, c, player).is_ok())
        .collect()
}

/// Whether `player` has at least one legal placement.
pub fn has_legal_move(board: &Board, player: Color) -> bool {
    Board::points().any(|(r, c)| try_move(board, r, c, player).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_coord;

    /// Place stones directly, bypassing legality, to set up a position.
    fn setpos(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::new();
        for coord in black {
            let (r, c) = parse_coord(coord).expect("bad test coordinate");
            board.set(r, c, Some(Color::Black));
        }
        for coord in white {
            let (r, c) = parse_coord(coord).expect("bad test coordinate");
            board.set(r, c, Some(Color::White));
        }
        board
    }

    #[test]
    fn test_lone_stone_has_liberty() {
        let board = setpos(&["C3"], &[]);
        assert!(has_liberty(&board, 2, 2));
    }

    #[test]
    fn test_empty_point_has_no_liberty() {
        let board = Board::new();
        assert!(!has_liberty(&board, 2, 2));
    }

    #[test]
    fn test_surrounded_stone_has_no_liberty() {
        // White at C3, Black on all four neighbors
        let board = setpos(&["B3", "D3", "C2", "C4"], &["C3"]);
        assert!(!has_liberty(&board, 2, 2));
        for coord in ["B3", "D3", "C2", "C4"] {
            let (r, c) = parse_coord(coord).unwrap();
            assert!(has_liberty(&board, r, c), "{coord} should have a liberty");
        }
    }

    #[test]
    fn test_group_shares_liberties() {
        // White corner pair with both base points blocked still lives
        // through the liberties of the connected stones above.
        let board = setpos(&["A2", "B2", "C2"], &["A1", "B1"]);
        assert!(has_liberty(&board, 0, 0), "pair still has C1 open");
        assert!(has_liberty(&board, 0, 1));
    }

    #[test]
    fn test_corner_group_no_liberty() {
        // White pair in the corner, fully sealed by Black
        let board = setpos(&["A2", "B2", "C1"], &["A1", "B1"]);
        assert!(!has_liberty(&board, 0, 0));
        assert!(!has_liberty(&board, 0, 1));
    }

    #[test]
    fn test_remove_dead_clears_whole_group() {
        let mut board = setpos(&["A2", "B2", "C1"], &["A1", "B1"]);
        let removed = remove_dead(&mut board, Color::White);
        assert_eq!(removed, 2);
        assert!(board.is_empty(0, 0));
        assert!(board.is_empty(0, 1));
        assert_eq!(board.stones(Color::Black), 3);
    }

    #[test]
    fn test_remove_dead_two_groups_simultaneously() {
        // Two disjoint sealed White stones in opposite corners: both are
        // judged on the same pre-removal board and cleared in one call.
        let board = setpos(&["A2", "B1", "D1", "E2"], &["A1", "E1"]);
        let mut board = board;
        assert_eq!(remove_dead(&mut board, Color::White), 2);
        assert!(board.is_empty(0, 0));
        assert!(board.is_empty(0, 4));
        assert_eq!(board.stones(Color::Black), 4);
    }

    #[test]
    fn test_remove_dead_spares_living_group() {
        let mut board = setpos(&[], &["C3", "C4"]);
        assert_eq!(remove_dead(&mut board, Color::White), 0);
        assert_eq!(board.stones(Color::White), 2);
    }

    #[test]
    fn test_apply_move_occupied() {
        let board = setpos(&["C3"], &[]);
        assert_eq!(
            try_move(&board, 2, 2, Color::White),
            Err(MoveError::Occupied)
        );
        assert!(apply_move(&board, 2, 2, Color::White).is_none());
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let board = Board::new();
        assert_eq!(
            try_move(&board, N, 0, Color::Black),
            Err(MoveError::OutOfBounds)
        );
        assert!(apply_move(&board, 0, N, Color::Black).is_none());
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::new();
        let next = apply_move(&board, 2, 2, Color::Black).expect("legal move");
        assert!(board.is_empty(2, 2), "input board must not be mutated");
        assert_eq!(next.get(2, 2), Some(Color::Black));
        assert_ne!(board, next);
    }

    #[test]
    fn test_apply_move_captures_surrounded_stone() {
        // White at C3 with its last liberty at D3; Black plays D3.
        let board = setpos(&["B3", "C2", "C4"], &["C3"]);
        let next = apply_move(&board, 2, 3, Color::Black).expect("capture is legal");
        assert!(next.is_empty(2, 2), "captured stone should be cleared");
        assert_eq!(next.stones(Color::Black), 4);
        assert_eq!(next.stones(Color::White), 0);
    }

    #[test]
    fn test_apply_move_captures_whole_group() {
        // White pair C3-D3 reduced to one liberty at E3; Black takes it.
        let board = setpos(&["B3", "C2", "D2", "C4", "D4"], &["C3", "D3"]);
        let next = apply_move(&board, 2, 4, Color::Black).expect("capture is legal");
        assert!(next.is_empty(2, 2));
        assert!(next.is_empty(2, 3));
        assert_eq!(next.stones(Color::White), 0);
    }

    #[test]
    fn test_suicide_rejected() {
        // A1 is sealed by Black at A2 and B1; White playing A1 is suicide.
        let board = setpos(&["A2", "B1"], &[]);
        assert_eq!(
            try_move(&board, 0, 0, Color::White),
            Err(MoveError::Suicide)
        );
    }

    #[test]
    fn test_capture_saves_from_suicide() {
        // Same corner point, but the sealing Black stone at A2 is itself in
        // atari: White already holds A3 and B2. White playing A1 captures A2
        // first, so the move is legal even though A1 alone has no liberties
        // at placement time.
        let board = setpos(&["A2"], &["A3", "B2"]);
        let next = apply_move(&board, 0, 0, Color::White).expect("capturing placement is legal");
        assert!(next.is_empty(0, 1), "A2 should be captured");
        assert_eq!(next.get(0, 0), Some(Color::White));
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let board = Board::new();
        let moves = legal_moves(&board, Color::Black);
        assert_eq!(moves.len(), BOARD_POINTS);
        assert_eq!(moves[0], (0, 0));
        assert!(
            moves.windows(2).all(|w| w[0] < w[1]),
            "must be sorted row-major"
        );
    }

    #[test]
    fn test_has_legal_move_full_board() {
        // Checkerboard fill: no empty points, so no legal moves for anyone.
        let mut board = Board::new();
        for (r, c) in Board::points() {
            let color = if (r + c) % 2 == 0 {
                Color::Black
            } else {
                Color::White
            };
            board.set(r, c, Some(color));
        }
        assert!(!has_legal_move(&board, Color::Black));
        assert!(!has_legal_move(&board, Color::White));
    }
}
