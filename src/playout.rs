//! Random playouts (game simulation to the end).
//!
//! A playout plays uniformly random legal moves, passing when forced, until
//! neither side can move, then scores the final board.

use crate::board::{Board, Player};
use crate::rules::{any_legal_move, legal_moves, score, successor};

/// Play random moves from `board` with `player` to move until the game ends.
///
/// Returns the final piece difference from `player`'s point of view:
/// positive means `player` won. This is the same number a recursive playout
/// would produce by negating the opponent's result at every ply.
pub fn random_playout(board: &Board, player: Player, rng: &mut fastrand::Rng) -> i32 {
    let mut board = *board;
    let mut to_move = player;

    loop {
        let moves = legal_moves(&board, to_move);
        if !moves.is_empty() {
            let mv = moves[rng.usize(..moves.len())];
            board = successor(&board, mv, to_move);
            to_move = to_move.opponent();
        } else if any_legal_move(&board, to_move.opponent()) {
            to_move = to_move.opponent();
        } else {
            return score(&board, player);
        }
    }
}
