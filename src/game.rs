//! Play a full game between two strategies.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Player, Square, square_name};
use crate::error::IllegalMoveError;
use crate::rules::{apply_move, next_player, score};
use crate::strategy::Strategy;

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),

    #[error("{0} has a legal move but its strategy returned none")]
    NoMove(Player),
}

/// The moves and final position of a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub moves: Vec<(Player, Square)>,
    pub board: Board,
}

impl GameRecord {
    /// Final piece difference from `player`'s point of view.
    pub fn score(&self, player: Player) -> i32 {
        score(&self.board, player)
    }

    /// The player with more pieces, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.score(Player::Black) {
            s if s > 0 => Some(Player::Black),
            s if s < 0 => Some(Player::White),
            _ => None,
        }
    }
}

/// Play from the opening until neither side can move. Black moves first.
pub fn play_game(black: &mut dyn Strategy, white: &mut dyn Strategy) -> Result<GameRecord, GameError> {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut player = Some(Player::Black);

    while let Some(current) = player {
        let strategy: &mut dyn Strategy = match current {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };
        let mv = strategy.choose(&board, current).ok_or(GameError::NoMove(current))?;
        apply_move(&mut board, mv, current)?;
        debug!(player = %current, square = %square_name(mv), strategy = strategy.name(), "move");
        moves.push((current, mv));
        player = next_player(&board, current);
    }

    let record = GameRecord { moves, board };
    info!(
        black = black.name(),
        white = white.name(),
        score = record.score(Player::Black),
        moves = record.moves.len(),
        "game over"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::is_game_over;
    use crate::strategy::RandomStrategy;

    struct Stubborn;

    impl Strategy for Stubborn {
        fn name(&self) -> &'static str {
            "stubborn"
        }

        fn choose(&mut self, _board: &Board, _player: Player) -> Option<Square> {
            Some(11)
        }
    }

    #[test]
    fn test_random_game_finishes() {
        let mut black = RandomStrategy::new(fastrand::Rng::with_seed(1));
        let mut white = RandomStrategy::new(fastrand::Rng::with_seed(2));
        let record = play_game(&mut black, &mut white).unwrap();
        assert!(is_game_over(&record.board, Player::Black));
        assert!(record.moves.len() <= 60);
        assert_eq!(record.moves[0].0, Player::Black);
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let mut black = Stubborn;
        let mut white = RandomStrategy::new(fastrand::Rng::with_seed(1));
        match play_game(&mut black, &mut white) {
            Err(GameError::IllegalMove(err)) => {
                assert_eq!(err.player, Player::Black);
                assert_eq!(err.square, 11);
                assert_eq!(err.board, Board::new());
            }
            other => panic!("expected an illegal move, got {other:?}"),
        }
    }
}
