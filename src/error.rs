//! Error types.

use thiserror::Error;

use crate::board::{Board, Player, Square};

/// A move was applied to a square that is occupied or brackets nothing.
///
/// Search code only applies moves it generated itself, so seeing this error
/// means a caller skipped the legality check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{player} cannot move to square {square}")]
pub struct IllegalMoveError {
    pub player: Player,
    pub square: Square,
    pub board: Board,
}

/// Errors from parsing a text board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 64 cells, found {0}")]
    WrongCellCount(usize),

    #[error("unknown cell character {0:?}")]
    UnknownCell(char),
}
