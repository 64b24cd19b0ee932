//! Game session: turn sequencing, move history, and end-of-game detection.
//!
//! This is the collaborator layer around the core engine. It owns the
//! mutable state the core refuses to hold - whose turn it is, the move log,
//! the current board - and drives the core through its pure interface:
//! every move replaces the session's board with the one [`rules::try_move`]
//! returns.
//!
//! End-game policy: a side with no legal placement passes; when neither side
//! can place, the game is over and the winner is whoever holds more stones
//! (equal material is a draw).

use std::time::{Duration, SystemTime};

use crate::board::{Board, Color, Point};
use crate::rules::{self, MoveError};
use crate::search::{self, SearchResult};

/// One entry in the append-only move log.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub player: Color,
    pub coord: Point,
    pub at: SystemTime,
}

/// A running game between the two sides.
///
/// The session never mutates a board in place: each accepted move swaps in
/// the fully resolved board produced by the rules engine.
pub struct GameSession {
    board: Board,
    to_move: Color,
    history: Vec<HistoryEntry>,
    depth: usize,
    time_budget: Option<Duration>,
}

impl GameSession {
    /// Start a fresh game. `first` moves first; `depth` is the engine's
    /// search depth for [`GameSession::engine_reply`].
    pub fn new(first: Color, depth: usize) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            history: Vec::new(),
            depth,
            time_budget: None,
        }
    }

    /// Cap each engine reply with a soft wall-clock budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Play a move for the side to move. On success the board is replaced,
    /// the move is logged, and the turn passes to the opponent.
    pub fn play(&mut self, r: usize, c: usize) -> Result<(), MoveError> {
        let next = rules::try_move(&self.board, r, c, self.to_move)?;
        self.history.push(HistoryEntry {
            player: self.to_move,
            coord: (r, c),
            at: SystemTime::now(),
        });
        self.board = next;
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Pass for the side to move. The collaborator calls this when
    /// [`GameSession::side_has_move`] reports no legal placement.
    pub fn pass(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Let the engine pick and play a move for the side to move.
    ///
    /// Returns the chosen point, or `None` when the engine has no legal
    /// move (the session then expects a [`GameSession::pass`]). The search
    /// result's move is guaranteed legal by the rules engine, but the board
    /// swap still goes through `try_move` so a session never holds a board
    /// the rules did not produce.
    pub fn engine_reply(&mut self) -> Option<Point> {
        let result = self.search();
        let (r, c) = result.best_move?;
        self.play(r, c).ok()?;
        Some((r, c))
    }

    /// Run the engine's search for the current position without playing.
    pub fn search(&self) -> SearchResult {
        match self.time_budget {
            Some(budget) => {
                search::search_with_deadline(&self.board, self.depth, self.to_move, budget)
            }
            None => search::search(&self.board, self.depth, self.to_move),
        }
    }

    /// Whether the side to move has any legal placement.
    pub fn side_has_move(&self) -> bool {
        rules::has_legal_move(&self.board, self.to_move)
    }

    /// The game ends when neither side can place a stone.
    pub fn is_over(&self) -> bool {
        !rules::has_legal_move(&self.board, Color::Black)
            && !rules::has_legal_move(&self.board, Color::White)
    }

    /// Winner by material count, `None` for a draw. Meaningful once
    /// [`GameSession::is_over`] holds, but callable at any time as a
    /// "who is ahead" projection.
    pub fn winner(&self) -> Option<Color> {
        match crate::eval::heuristic(&self.board, Color::Black) {
            n if n > 0 => Some(Color::Black),
            n if n < 0 => Some(Color::White),
            _ => None,
        }
    }
}
