//! Static board evaluation.
//!
//! Every evaluator returns the value of a board to `player`; the value to the
//! opponent is its negation.

use crate::board::{Board, Player, squares};
use crate::constants::{MAX_VALUE, MIN_VALUE, SQUARE_WEIGHTS};
use crate::rules::score;

/// A static evaluation function used at the search horizon.
pub type Evaluator = fn(&Board, Player) -> i32;

/// Sum of the weights of `player`'s squares minus the opponent's.
pub fn weighted_score(board: &Board, player: Player) -> i32 {
    let opp = player.opponent();
    squares()
        .map(|sq| {
            if board[sq] == player {
                SQUARE_WEIGHTS[sq]
            } else if board[sq] == opp {
                -SQUARE_WEIGHTS[sq]
            } else {
                0
            }
        })
        .sum()
}

/// Value of a finished game to `player`: [`MAX_VALUE`] for a win,
/// [`MIN_VALUE`] for a loss, 0 for a draw.
pub fn final_value(board: &Board, player: Player) -> i32 {
    match score(board, player) {
        diff if diff > 0 => MAX_VALUE,
        diff if diff < 0 => MIN_VALUE,
        diff => diff,
    }
}

/// Look up an evaluator by name ("weighted" or "score").
pub fn evaluator_by_name(name: &str) -> Option<Evaluator> {
    match name {
        "weighted" => Some(weighted_score),
        "score" => Some(score),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    #[test]
    fn test_max_value() {
        // Sum of |weight| over the table.
        assert_eq!(MAX_VALUE, 1176);
        assert_eq!(MIN_VALUE, -1176);
    }

    #[test]
    fn test_opening_is_balanced() {
        let board = Board::new();
        assert_eq!(weighted_score(&board, Player::Black), 0);
        assert_eq!(weighted_score(&board, Player::White), 0);
    }

    #[test]
    fn test_corner_dominates() {
        let board: Board = "
            @ . . . . . . .
            . o . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
        "
        .parse()
        .unwrap();
        // Black holds a1 (120), white holds b2 (-40).
        assert_eq!(weighted_score(&board, Player::Black), 160);
        assert_eq!(weighted_score(&board, Player::White), -160);
    }

    #[test]
    fn test_final_value() {
        let mut board = Board::empty();
        board.set(11, Cell::Black);
        board.set(12, Cell::Black);
        board.set(88, Cell::White);
        assert_eq!(final_value(&board, Player::Black), MAX_VALUE);
        assert_eq!(final_value(&board, Player::White), MIN_VALUE);

        board.set(87, Cell::White);
        assert_eq!(final_value(&board, Player::Black), 0);
    }

    #[test]
    fn test_evaluator_by_name() {
        let board = Board::new();
        let eval = evaluator_by_name("score").unwrap();
        assert_eq!(eval(&board, Player::Black), 0);
        assert!(evaluator_by_name("mobility").is_none());
    }
}
