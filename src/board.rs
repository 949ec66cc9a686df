//! Board representation: cells, players, and the padded 100-square grid.
//!
//! The playable 8x8 region sits inside a one-cell margin of [`Cell::Outer`]
//! squares. Margin squares are set once by the constructors and never change,
//! so scanning along a direction stops on the margin without bounds checks.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::constants::{BOARD_IMAX, BOARD_IMIN, BOARDSIZE, N, W};
use crate::error::ParseBoardError;

/// A square on the board, represented as an index into the 1D board array.
pub type Square = usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Outer,
}

impl Cell {
    /// Character used for rendering and for the canonical board key.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '@',
            Cell::White => 'o',
            Cell::Outer => '?',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Empty),
            '@' => Some(Cell::Black),
            'o' => Some(Cell::White),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// The cell state holding this player's pieces.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

impl PartialEq<Player> for Cell {
    fn eq(&self, other: &Player) -> bool {
        *self == other.cell()
    }
}

/// Is `sq` inside the 8x8 playable region?
#[inline]
pub fn is_playable(sq: Square) -> bool {
    (BOARD_IMIN..=BOARD_IMAX).contains(&sq) && (1..=N).contains(&(sq % W))
}

/// All 64 playable squares in board order (a1, b1, ..., h8).
pub fn squares() -> impl Iterator<Item = Square> {
    (BOARD_IMIN..=BOARD_IMAX).filter(|&sq| is_playable(sq))
}

/// An Othello board.
///
/// Boards are small `Copy` values; search code branches by copying.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard opening position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[44] = Cell::White;
        board.cells[45] = Cell::Black;
        board.cells[54] = Cell::Black;
        board.cells[55] = Cell::White;
        board
    }

    /// A board with every playable square empty.
    pub fn empty() -> Self {
        let mut cells = [Cell::Outer; BOARDSIZE];
        for sq in squares() {
            cells[sq] = Cell::Empty;
        }
        Self { cells }
    }

    /// Overwrite a playable square. Margin squares are never written.
    pub(crate) fn set(&mut self, sq: Square, cell: Cell) {
        debug_assert!(is_playable(sq), "square {sq} is outside the board");
        debug_assert_ne!(cell, Cell::Outer);
        self.cells[sq] = cell;
    }

    /// Number of squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Canonical key: every cell's character in index order, margins included.
    pub fn key(&self) -> String {
        self.cells.iter().map(|c| c.to_char()).collect()
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    #[inline]
    fn index(&self, sq: Square) -> &Cell {
        &self.cells[sq]
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Board").field(&self.key()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..N {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for row in 1..=N {
            write!(f, "{row}")?;
            for col in 1..=N {
                write!(f, " {}", self.cells[row * W + col].to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the 64 playable cells in board order.
    ///
    /// Whitespace, column letters, and row digits are skipped, so the output
    /// of `Display` parses back to the same board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut playable = squares();
        let mut seen = 0;

        for ch in s.chars() {
            if ch.is_whitespace() || ch.is_ascii_digit() || ('a'..='h').contains(&ch) {
                continue;
            }
            let cell = Cell::from_char(ch).ok_or(ParseBoardError::UnknownCell(ch))?;
            seen += 1;
            match playable.next() {
                Some(sq) => board.set(sq, cell),
                None => return Err(ParseBoardError::WrongCellCount(seen)),
            }
        }

        if seen != N * N {
            return Err(ParseBoardError::WrongCellCount(seen));
        }
        Ok(board)
    }
}

/// Parse a square name (e.g. "d3") or a raw index (e.g. "34").
///
/// Returns `None` for anything that is not a playable square.
pub fn parse_square(s: &str) -> Option<Square> {
    let s = s.trim();
    if let Ok(sq) = s.parse::<Square>() {
        return is_playable(sq).then_some(sq);
    }

    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].to_ascii_lowercase().checked_sub(b'a')? as usize + 1;
    let row = bytes[1].checked_sub(b'0')? as usize;
    if !(1..=N).contains(&col) || !(1..=N).contains(&row) {
        return None;
    }
    Some(row * W + col)
}

/// Name of a playable square (e.g. 34 -> "d3"). Margin squares keep their
/// raw index.
pub fn square_name(sq: Square) -> String {
    if !is_playable(sq) {
        return sq.to_string();
    }
    let row = sq / W;
    let col = sq % W;
    format!("{}{row}", (b'a' + (col - 1) as u8) as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_is_outer() {
        let board = Board::new();
        for sq in 0..BOARDSIZE {
            if !is_playable(sq) {
                assert_eq!(board[sq], Cell::Outer, "square {sq} should be OUTER");
            }
        }
    }

    #[test]
    fn test_sixty_four_squares() {
        let all: Vec<Square> = squares().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], 11);
        assert_eq!(all[63], 88);
    }

    #[test]
    fn test_opening_counts() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Black), 2);
        assert_eq!(board.count(Cell::White), 2);
        assert_eq!(board.count(Cell::Empty), 60);
    }

    #[test]
    fn test_key_is_one_char_per_cell() {
        let key = Board::new().key();
        assert_eq!(key.len(), BOARDSIZE);
        assert_eq!(&key[44..46], "o@");
        assert!(key.starts_with("???????????."));
    }

    #[test]
    fn test_display_parses_back() {
        let board = Board::new();
        let text = board.to_string();
        let parsed: Board = text.parse().expect("rendered board should parse");
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "..@".parse::<Board>().unwrap_err(),
            ParseBoardError::WrongCellCount(3)
        );
        let bad = format!("{}X", ".".repeat(63));
        assert_eq!(
            bad.parse::<Board>().unwrap_err(),
            ParseBoardError::UnknownCell('X')
        );
    }

    #[test]
    fn test_square_names() {
        assert_eq!(parse_square("d3"), Some(34));
        assert_eq!(parse_square("A1"), Some(11));
        assert_eq!(parse_square("h8"), Some(88));
        assert_eq!(parse_square("56"), Some(56));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(parse_square("19"), None);
        for sq in squares() {
            assert_eq!(parse_square(&square_name(sq)), Some(sq));
        }
    }

    #[test]
    fn test_margin_square_names() {
        assert_eq!(square_name(0), "0");
        assert_eq!(square_name(10), "10");
        assert_eq!(square_name(19), "19");
        assert_eq!(square_name(99), "99");
        assert_eq!(parse_square(&square_name(40)), None);
    }
}
