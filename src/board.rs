//! Board representation: a fixed NxN grid of three-valued cells.
//!
//! The board is pure data. All game behavior (liberties, captures, move
//! legality) lives in [`crate::rules`]; the board only offers construction,
//! cell access, neighbor enumeration, and stone counting.
//!
//! Moves never mutate a board visible to callers: [`crate::rules::apply_move`]
//! returns a fresh board, and the caller replaces its old one wholesale.

use std::fmt;

use crate::constants::{BOARD_POINTS, N};

/// Stone color. Black is the engine side in the CLI, White the human side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}

/// A point on the board as a (row, column) pair, both zero-based.
pub type Point = (usize, usize);

/// A fixed NxN grid of cells; `None` is an empty point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; BOARD_POINTS],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an all-empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_POINTS],
        }
    }

    #[inline]
    fn idx(r: usize, c: usize) -> usize {
        r * N + c
    }

    /// Whether (r, c) is on the board.
    #[inline]
    pub fn in_bounds(r: usize, c: usize) -> bool {
        r < N && c < N
    }

    /// The stone at (r, c), or `None` if the point is empty or out of bounds.
    pub fn get(&self, r: usize, c: usize) -> Option<Color> {
        if !Self::in_bounds(r, c) {
            return None;
        }
        self.cells[Self::idx(r, c)]
    }

    /// True iff (r, c) is on the board and holds no stone.
    pub fn is_empty(&self, r: usize, c: usize) -> bool {
        Self::in_bounds(r, c) && self.cells[Self::idx(r, c)].is_none()
    }

    /// Place or clear a stone. Crate-internal: only the rules engine writes
    /// to a board, and only on a copy it owns.
    pub(crate) fn set(&mut self, r: usize, c: usize, cell: Option<Color>) {
        self.cells[Self::idx(r, c)] = cell;
    }

    /// The 4-adjacent in-bounds neighbors of (r, c).
    pub fn neighbors(r: usize, c: usize) -> impl Iterator<Item = Point> {
        let mut v = Vec::with_capacity(4);
        if r > 0 {
            v.push((r - 1, c));
        }
        if r + 1 < N {
            v.push((r + 1, c));
        }
        if c > 0 {
            v.push((r, c - 1));
        }
        if c + 1 < N {
            v.push((r, c + 1));
        }
        v.into_iter()
    }

    /// All board points in row-major order. This is the canonical scan order
    /// for move generation and search tie-breaking.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..N).flat_map(|r| (0..N).map(move |c| (r, c)))
    }

    /// Number of stones of the given color on the board.
    pub fn stones(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&s| s == Some(color)).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..N {
            write!(f, "{} ", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for r in 0..N {
            write!(f, "{} ", r + 1)?;
            for c in 0..N {
                let ch = match self.get(r, c) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Error from parsing a board diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoardError(String);

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad board diagram: {}", self.0)
    }
}

impl std::error::Error for ParseBoardError {}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parse a board diagram in the cell format `Display` prints, without
    /// the coordinate headers: N rows of N cells from `X` (Black), `O`
    /// (White), `.` (empty), whitespace ignored. Useful for setting up test
    /// and diagnostic positions that cannot be reached by legal moves alone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut pts = Board::points();
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let Some((r, c)) = pts.next() else {
                return Err(ParseBoardError(format!("more than {BOARD_POINTS} cells")));
            };
            let cell = match ch {
                'X' => Some(Color::Black),
                'O' => Some(Color::White),
                '.' => None,
                other => return Err(ParseBoardError(format!("unknown cell '{other}'"))),
            };
            board.set(r, c, cell);
        }
        if pts.next().is_some() {
            return Err(ParseBoardError(format!("fewer than {BOARD_POINTS} cells")));
        }
        Ok(board)
    }
}

/// Parse a coordinate string like "C3" (column letter, 1-based row) into a
/// zero-based (row, column) point. Returns `None` for malformed or
/// out-of-range input.
pub fn parse_coord(s: &str) -> Option<Point> {
    let bytes = s.trim().as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let col_char = bytes[0].to_ascii_uppercase();
    if !col_char.is_ascii_uppercase() {
        return None;
    }
    let c = (col_char - b'A') as usize;

    let row: usize = std::str::from_utf8(&bytes[1..]).ok()?.parse().ok()?;
    if row == 0 {
        return None;
    }
    let r = row - 1;

    if !Board::in_bounds(r, c) {
        return None;
    }
    Some((r, c))
}

/// Format a point as a coordinate string like "C3".
pub fn str_coord((r, c): Point) -> String {
    format!("{}{}", (b'A' + c as u8) as char, r + 1)
}
