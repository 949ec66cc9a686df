//! Othello rules: legality, move execution, turn order, and scoring.
//!
//! All functions take the board first and never keep references to it.
//! `apply_move` is the only routine that mutates a board; callers that need
//! to keep the original copy it first (or use [`make_move`]).

use crate::board::{Board, Cell, Player, Square, is_playable, squares};
use crate::constants::DIRECTIONS;
use crate::error::IllegalMoveError;

#[inline]
fn step(sq: Square, direction: isize) -> Square {
    (sq as isize + direction) as Square
}

/// Find the square that brackets a run of opponent pieces starting next to
/// `square` in `direction`.
///
/// Returns `None` when the neighbor is the player's own piece, or when the run
/// ends on an empty or margin square.
pub fn find_bracket(board: &Board, square: Square, player: Player, direction: isize) -> Option<Square> {
    let mut bracket = step(square, direction);
    if board[bracket] == player {
        return None;
    }
    let opp = player.opponent();
    while board[bracket] == opp {
        bracket = step(bracket, direction);
    }
    match board[bracket] {
        Cell::Empty | Cell::Outer => None,
        _ => Some(bracket),
    }
}

/// Is `square` a legal move for `player`?
///
/// The square must be empty and bracket at least one run of opponent pieces.
pub fn is_legal(board: &Board, square: Square, player: Player) -> bool {
    is_playable(square)
        && board[square] == Cell::Empty
        && DIRECTIONS
            .iter()
            .any(|&d| find_bracket(board, square, player, d).is_some())
}

/// Place a piece and flip every bracketed run. The move must be legal.
pub(crate) fn place(board: &mut Board, square: Square, player: Player) {
    board.set(square, player.cell());
    for &d in &DIRECTIONS {
        if let Some(bracket) = find_bracket(board, square, player, d) {
            let mut sq = step(square, d);
            while sq != bracket {
                board.set(sq, player.cell());
                sq = step(sq, d);
            }
        }
    }
}

/// Copy `board` and play a move already known to be legal.
#[inline]
pub(crate) fn successor(board: &Board, square: Square, player: Player) -> Board {
    let mut next = *board;
    place(&mut next, square, player);
    next
}

/// Play `square` for `player` in place, flipping bracketed pieces.
///
/// # Errors
/// Returns [`IllegalMoveError`] (with a snapshot of the untouched board) if the
/// square is occupied or brackets nothing.
pub fn apply_move(board: &mut Board, square: Square, player: Player) -> Result<(), IllegalMoveError> {
    if !is_legal(board, square, player) {
        return Err(IllegalMoveError {
            player,
            square,
            board: *board,
        });
    }
    place(board, square, player);
    Ok(())
}

/// Like [`apply_move`], but leaves `board` alone and returns the new board.
pub fn make_move(board: &Board, square: Square, player: Player) -> Result<Board, IllegalMoveError> {
    let mut next = *board;
    apply_move(&mut next, square, player)?;
    Ok(next)
}

/// All legal moves for `player`, in board order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Square> {
    squares().filter(|&sq| is_legal(board, sq, player)).collect()
}

/// Can `player` move at all? Stops at the first legal square.
pub fn any_legal_move(board: &Board, player: Player) -> bool {
    squares().any(|sq| is_legal(board, sq, player))
}

/// Who moves after `prev` played?
///
/// The opponent if they can move, otherwise `prev` again if they can, otherwise
/// `None`: both sides are stuck and the game is over.
pub fn next_player(board: &Board, prev: Player) -> Option<Player> {
    let opp = prev.opponent();
    if any_legal_move(board, opp) {
        Some(opp)
    } else if any_legal_move(board, prev) {
        Some(prev)
    } else {
        None
    }
}

/// Piece count of `player` minus piece count of the opponent.
pub fn score(board: &Board, player: Player) -> i32 {
    let mine = board.count(player.cell()) as i32;
    let theirs = board.count(player.opponent().cell()) as i32;
    mine - theirs
}

/// True when neither `player` nor the opponent has a legal move.
pub fn is_game_over(board: &Board, player: Player) -> bool {
    !any_legal_move(board, player) && !any_legal_move(board, player.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_moves() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Player::Black), vec![34, 43, 56, 65]);
        assert_eq!(legal_moves(&board, Player::White), vec![35, 46, 53, 64]);
    }

    #[test]
    fn test_find_bracket() {
        let board = Board::new();
        // d3 (34) looking south runs over white 44 to black 54.
        assert_eq!(find_bracket(&board, 34, Player::Black, 10), Some(54));
        // Looking north from d3 hits the empty d2.
        assert_eq!(find_bracket(&board, 34, Player::Black, -10), None);
        // e6 (65) looking north runs over white 55 to black 45.
        assert_eq!(find_bracket(&board, 65, Player::Black, -10), Some(45));
        // Adjacent own piece is never a bracket.
        assert_eq!(find_bracket(&board, 35, Player::Black, 10), None);
    }

    #[test]
    fn test_find_bracket_stops_at_margin() {
        let board: Board = "
            . o o o o o o @
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        assert_eq!(find_bracket(&board, 11, Player::Black, 1), Some(18));
        // A run that reaches the margin brackets nothing.
        let open_ended: Board = "
            . o o o o o o o
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        assert_eq!(find_bracket(&open_ended, 11, Player::Black, 1), None);
        assert!(!is_legal(&open_ended, 11, Player::Black));
    }

    #[test]
    fn test_apply_move_flips() {
        let mut board = Board::new();
        apply_move(&mut board, 34, Player::Black).unwrap();
        assert_eq!(board[34], Cell::Black);
        assert_eq!(board[44], Cell::Black);
        assert_eq!(board.count(Cell::Black), 4);
        assert_eq!(board.count(Cell::White), 1);
    }

    #[test]
    fn test_apply_move_illegal() {
        let mut board = Board::new();
        let err = apply_move(&mut board, 44, Player::Black).unwrap_err();
        assert_eq!(err.square, 44);
        assert_eq!(err.player, Player::Black);
        assert_eq!(err.board, Board::new());
        assert_eq!(err.to_string(), "Black cannot move to square 44");

        // Empty but brackets nothing.
        assert!(apply_move(&mut board, 11, Player::Black).is_err());
        assert_eq!(board, Board::new(), "failed move must not touch the board");
    }

    #[test]
    fn test_out_of_range_is_illegal() {
        let board = Board::new();
        assert!(!is_legal(&board, 0, Player::Black));
        assert!(!is_legal(&board, 19, Player::Black));
        assert!(!is_legal(&board, 500, Player::Black));
    }

    #[test]
    fn test_make_move_leaves_original() {
        let board = Board::new();
        let next = make_move(&board, 43, Player::Black).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next[44], Cell::Black);
    }

    #[test]
    fn test_score_and_next_player() {
        let board = Board::new();
        assert_eq!(score(&board, Player::Black), 0);
        assert_eq!(next_player(&board, Player::White), Some(Player::Black));
        assert!(!is_game_over(&board, Player::Black));
    }
}
