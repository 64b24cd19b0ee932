//! Mini-Go: a 5x5 territory-capture board game with an alpha-beta engine.
//!
//! A simplified Go variant on a fixed small grid: stones are captured when
//! their group runs out of liberties, suicide is illegal, and there is no
//! ko rule, komi, or territory scoring. The computer side picks moves with
//! depth-bounded minimax and alpha-beta pruning over a material-count
//! heuristic.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and search parameters
//! - [`board`] - Board state, colors, coordinates
//! - [`rules`] - Liberties, captures, move legality
//! - [`eval`] - Static material-count heuristic
//! - [`search`] - Alpha-beta minimax, optionally time-boxed
//! - [`game`] - Turn sequencing, move history, end-of-game detection
//!
//! ## Example
//!
//! ```
//! use minigo::board::{Board, Color};
//! use minigo::rules::apply_move;
//! use minigo::search::search;
//!
//! // Black opens, then the engine picks White's reply.
//! let board = Board::new();
//! let board = apply_move(&board, 2, 2, Color::Black).expect("center is open");
//!
//! let result = search(&board, 2, Color::White);
//! let (r, c) = result.best_move.expect("White has legal moves");
//! let board = apply_move(&board, r, c, Color::White).expect("search returns legal moves");
//! assert_eq!(board.stones(Color::White), 1);
//! ```

pub mod board;
pub mod constants;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
