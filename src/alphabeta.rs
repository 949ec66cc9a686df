//! Minimax with alpha-beta pruning.
//!
//! Same sign convention as [`crate::minimax`]: a call returns the value of
//! `board` to `player`. `alpha` is the best value `player` is already assured
//! of; `beta` is the most the opponent will allow. For the opponent the window
//! becomes `(-beta, -alpha)`.

use std::cmp::Reverse;

use tracing::trace;

use crate::board::{Board, Player, Square};
use crate::constants::{MAX_VALUE, MIN_VALUE, SQUARE_WEIGHTS};
use crate::eval::{Evaluator, final_value};
use crate::rules::{any_legal_move, legal_moves, successor};

/// Legal moves for `player`, heaviest square weight first.
///
/// The sort is stable, so equal weights stay in board order.
pub fn ordered_moves(board: &Board, player: Player) -> Vec<Square> {
    let mut moves = legal_moves(board, player);
    moves.sort_by_key(|&mv| Reverse(SQUARE_WEIGHTS[mv]));
    moves
}

/// Find the best move for `player` within the window `(alpha, beta)`,
/// looking `depth` plies ahead.
///
/// With the full window `(MIN_VALUE, MAX_VALUE)` the returned value equals the
/// plain minimax value. Inside a narrower window the value is a bound.
pub fn alphabeta(
    board: &Board,
    player: Player,
    mut alpha: i32,
    beta: i32,
    depth: u32,
    evaluate: Evaluator,
) -> (i32, Option<Square>) {
    if depth == 0 {
        return (evaluate(board, player), None);
    }

    let opp = player.opponent();
    let moves = ordered_moves(board, player);

    let Some(&first) = moves.first() else {
        if !any_legal_move(board, opp) {
            return (final_value(board, player), None);
        }
        // Forced pass: the opponent searches the same board.
        let (value, _) = alphabeta(board, opp, -beta, -alpha, depth - 1, evaluate);
        return (-value, None);
    };

    let mut best_move = first;
    for (i, &mv) in moves.iter().enumerate() {
        if alpha >= beta {
            trace!(depth, skipped = moves.len() - i, "beta cutoff");
            break;
        }
        let child = successor(board, mv, player);
        let value = -alphabeta(&child, opp, -beta, -alpha, depth - 1, evaluate).0;
        if value > alpha {
            alpha = value;
            best_move = mv;
        }
    }
    (alpha, Some(best_move))
}

/// Alpha-beta search over the full value window.
pub fn alphabeta_full(board: &Board, player: Player, depth: u32, evaluate: Evaluator) -> (i32, Option<Square>) {
    alphabeta(board, player, MIN_VALUE, MAX_VALUE, depth, evaluate)
}
