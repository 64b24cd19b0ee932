//! Constants for board dimensions and search parameters.
//!
//! # Board Size Configuration
//!
//! The board size is controlled by Cargo features:
//! - `board5x5` (default): 5x5 board
//! - `board7x7`: 7x7 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                             # 5x5 (default)
//! cargo build --no-default-features --features board7x7   # 7x7
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
#[cfg(feature = "board5x5")]
pub const N: usize = 5;

#[cfg(feature = "board7x7")]
pub const N: usize = 7;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(all(feature = "board5x5", feature = "board7x7"))]
compile_error!("Cannot enable both 'board5x5' and 'board7x7' features at the same time");

#[cfg(not(any(feature = "board5x5", feature = "board7x7")))]
compile_error!("Must enable exactly one board size feature: 'board5x5' or 'board7x7'");

/// Number of points on the board.
pub const BOARD_POINTS: usize = N * N;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default minimax search depth.
pub const DEFAULT_DEPTH: usize = 2;

/// Maximum supported search depth. Branching factor is up to `BOARD_POINTS`
/// per ply, so deeper searches get expensive quickly without move ordering.
pub const MAX_DEPTH: usize = 4;

// =============================================================================
// Presentation
// =============================================================================

/// Number of trailing move-history entries shown by the CLI.
pub const HISTORY_TAIL: usize = 10;
