//! Depth-limited minimax in negamax form.
//!
//! Sign convention: every call returns the value of `board` to `player`. The
//! value of a child board to `player` is the negation of the child search for
//! the opponent.

use crate::board::{Board, Player, Square};
use crate::eval::{Evaluator, final_value};
use crate::rules::{any_legal_move, legal_moves, successor};

/// Find the best move for `player`, looking `depth` plies ahead.
///
/// Returns `(value, move)`, where `value` is the score `player` is guaranteed
/// at the horizon if the move is made. The move is `None` at the horizon, when
/// `player` must pass, and when the game is over.
///
/// Ties go to the earliest move in board order.
pub fn minimax(board: &Board, player: Player, depth: u32, evaluate: Evaluator) -> (i32, Option<Square>) {
    if depth == 0 {
        return (evaluate(board, player), None);
    }

    let opp = player.opponent();
    let moves = legal_moves(board, player);

    if moves.is_empty() {
        if !any_legal_move(board, opp) {
            return (final_value(board, player), None);
        }
        // Forced pass: same board, opponent to move, negated back to us.
        let (value, _) = minimax(board, opp, depth - 1, evaluate);
        return (-value, None);
    }

    let mut best: Option<(i32, Square)> = None;
    for mv in moves {
        let child = successor(board, mv, player);
        // Child value is from the opponent's side; negate to ours.
        let value = -minimax(&child, opp, depth - 1, evaluate).0;
        if best.is_none_or(|(best_value, _)| value > best_value) {
            best = Some((value, mv));
        }
    }

    match best {
        Some((value, mv)) => (value, Some(mv)),
        None => (evaluate(board, player), None),
    }
}
