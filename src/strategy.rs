//! Move-selection strategies.
//!
//! Every strategy is built once with fixed parameters and then answers any
//! number of `(board, player) -> move` requests. Calls are synchronous and
//! never modify the caller's board, so a driver may run one to completion or
//! abandon it.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::alphabeta::alphabeta_full;
use crate::board::{Board, Player, Square};
use crate::config::SearchConfig;
use crate::eval::Evaluator;
use crate::mcts::{Discipline, MonteCarlo};
use crate::minimax::minimax;
use crate::rules::legal_moves;

/// Something that picks moves.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Choose a move for `player`. Returns `None` only when `player` has no
    /// legal move.
    fn choose(&mut self, board: &Board, player: Player) -> Option<Square>;
}

/// Uniformly random legal moves.
pub struct RandomStrategy {
    rng: fastrand::Rng,
}

impl RandomStrategy {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&mut self, board: &Board, player: Player) -> Option<Square> {
        let moves = legal_moves(board, player);
        if moves.is_empty() {
            return None;
        }
        Some(moves[self.rng.usize(..moves.len())])
    }
}

/// Plain minimax to a fixed depth.
pub struct MinimaxSearcher {
    pub depth: u32,
    pub evaluate: Evaluator,
}

impl Strategy for MinimaxSearcher {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose(&mut self, board: &Board, player: Player) -> Option<Square> {
        minimax(board, player, self.depth, self.evaluate).1
    }
}

/// Alpha-beta search to a fixed depth over the full value window.
pub struct AlphaBetaSearcher {
    pub depth: u32,
    pub evaluate: Evaluator,
}

impl Strategy for AlphaBetaSearcher {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn choose(&mut self, board: &Board, player: Player) -> Option<Square> {
        alphabeta_full(board, player, self.depth, self.evaluate).1
    }
}

impl Strategy for MonteCarlo {
    fn name(&self) -> &'static str {
        match self.discipline() {
            Discipline::Flat => "flat-mc",
            Discipline::Tree => "tree-mc",
        }
    }

    fn choose(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.decide(board, player)
    }
}

/// The available strategies, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Minimax,
    AlphaBeta,
    FlatMonteCarlo,
    TreeMonteCarlo,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy {0:?} (expected random, minimax, alphabeta, flat-mc or tree-mc)")]
pub struct UnknownStrategy(pub String);

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Random,
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::FlatMonteCarlo,
        StrategyKind::TreeMonteCarlo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Random => "random",
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alphabeta",
            StrategyKind::FlatMonteCarlo => "flat-mc",
            StrategyKind::TreeMonteCarlo => "tree-mc",
        }
    }

    /// Build a strategy of this kind.
    pub fn build(self, config: &SearchConfig, evaluate: Evaluator) -> Box<dyn Strategy> {
        let rng = || match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(rng())),
            StrategyKind::Minimax => Box::new(MinimaxSearcher {
                depth: config.depth,
                evaluate,
            }),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaSearcher {
                depth: config.depth,
                evaluate,
            }),
            StrategyKind::FlatMonteCarlo => Box::new(MonteCarlo::from_config(Discipline::Flat, config)),
            StrategyKind::TreeMonteCarlo => Box::new(MonteCarlo::from_config(Discipline::Tree, config)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(UnknownStrategy(s))
    }
}
