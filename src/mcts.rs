//! Monte Carlo move selection backed by a table of per-board statistics.
//!
//! Two disciplines share the [`MonteCarlo`] engine:
//!
//! - **Flat**: for every candidate move, run a batch of random playouts from
//!   the resulting board and pick the candidate with the best win rate. The
//!   table keeps growing across decisions.
//! - **Tree**: run guided playouts that always follow the most promising
//!   child (never-seen boards first), updating the table as they unwind. The
//!   table is cleared at the start of every decision.
//!
//! Flat entries hold results for the player who moved *into* the keyed board.
//! Tree entries hold results for the player to move *on* the keyed board.
//! The engine is single-threaded; concurrent decisions need separate engines.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::board::{Board, Player, Square, square_name};
use crate::config::SearchConfig;
use crate::constants::LOOKUP_JITTER;
use crate::playout::random_playout;
use crate::rules::{any_legal_move, legal_moves, score, successor};

/// Win/loss record for one board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStats {
    pub wins: u32,
    pub losses: u32,
    /// Estimated win rate, `wins / (wins + losses)`.
    pub value: f64,
}

impl Default for BoardStats {
    fn default() -> Self {
        Self {
            wins: 0,
            losses: 0,
            value: f64::INFINITY,
        }
    }
}

impl BoardStats {
    /// Number of playouts recorded.
    #[inline]
    pub fn visits(&self) -> u32 {
        self.wins + self.losses
    }

    /// Record one playout result. Positive is a win; draws count as losses.
    pub fn record(&mut self, result: i32) {
        if result > 0 {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.value = self.wins as f64 / self.visits() as f64;
    }
}

/// Statistics keyed by [`Board::key`].
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    entries: HashMap<String, BoardStats>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, board: &Board) -> Option<&BoardStats> {
        self.entries.get(&board.key())
    }

    /// Record one playout result for `board`, creating the entry if needed.
    pub fn record(&mut self, board: &Board, result: i32) -> BoardStats {
        let stats = self.entries.entry(board.key()).or_default();
        stats.record(result);
        *stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Which playout discipline a [`MonteCarlo`] engine uses for its decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    /// Random playouts per candidate; the table persists across decisions.
    Flat,
    /// Table-guided playouts; the table is reset per decision.
    Tree,
}

/// Monte Carlo engine owning its statistics table and random source.
pub struct MonteCarlo {
    discipline: Discipline,
    playouts: usize,
    table: ScoreTable,
    rng: fastrand::Rng,
}

impl MonteCarlo {
    /// Create an engine running `playouts` playouts per decision (per
    /// candidate move for [`Discipline::Flat`]).
    pub fn new(discipline: Discipline, playouts: usize) -> Self {
        Self::with_rng(discipline, playouts, fastrand::Rng::new())
    }

    pub fn with_rng(discipline: Discipline, playouts: usize, rng: fastrand::Rng) -> Self {
        Self {
            discipline,
            playouts,
            table: ScoreTable::new(),
            rng,
        }
    }

    /// Build an engine from a search configuration, seeding it if requested.
    pub fn from_config(discipline: Discipline, config: &SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self::with_rng(discipline, config.playouts, rng)
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// Forget every recorded statistic.
    pub fn reset(&mut self) {
        self.table.clear();
    }

    /// Choose a move for `player` using this engine's discipline.
    pub fn decide(&mut self, board: &Board, player: Player) -> Option<Square> {
        match self.discipline {
            Discipline::Flat => self.flat_decision(board, player),
            Discipline::Tree => self.tree_decision(board, player),
        }
    }

    // =========================================================================
    // Flat discipline
    // =========================================================================

    /// Run `num` random playouts from `board`, the position right after
    /// `mover` played, and add them to the table entry for `board`.
    ///
    /// Returns the accumulated statistics.
    pub fn random_score(&mut self, board: &Board, mover: Player, num: usize) -> BoardStats {
        let mut stats = self.table.get(board).copied().unwrap_or_default();
        for _ in 0..num {
            // The opponent moves next; negate back to the mover.
            let result = -random_playout(board, mover.opponent(), &mut self.rng);
            stats.record(result);
        }
        self.table.entries.insert(board.key(), stats);
        stats
    }

    /// Pick the candidate whose random playouts win most often.
    ///
    /// Ties go to the candidate with more wins, then more visits, then the
    /// later square in board order. Returns `None` when `player` has no legal
    /// move.
    pub fn flat_decision(&mut self, board: &Board, player: Player) -> Option<Square> {
        let mut best: Option<(BoardStats, Square)> = None;

        for mv in legal_moves(board, player) {
            let child = successor(board, mv, player);
            let stats = self.random_score(&child, player, self.playouts);
            debug!(
                square = %square_name(mv),
                win_rate = stats.value,
                wins = stats.wins,
                visits = stats.visits(),
                "flat candidate"
            );
            // Moves arrive in board order, so a full tie replaces the leader.
            let rank = (stats.value, stats.wins, stats.visits());
            let better = best.is_none_or(|(top, _)| {
                rank.partial_cmp(&(top.value, top.wins, top.visits())) != Some(Ordering::Less)
            });
            if better {
                best = Some((stats, mv));
            }
        }

        best.map(|(_, mv)| mv)
    }

    // =========================================================================
    // Tree discipline
    // =========================================================================

    /// Selection score for a board: unseen boards rank above everything, seen
    /// boards rank by win rate plus a small jitter and a bonus that shrinks
    /// with the number of visits.
    pub fn lookup_score(&mut self, board: &Board) -> f64 {
        match self.table.get(board) {
            Some(stats) if stats.visits() > 0 => {
                let jitter = self.rng.f64() * LOOKUP_JITTER;
                stats.value + jitter + 1.0 / (stats.visits() as f64).sqrt()
            }
            _ => f64::INFINITY,
        }
    }

    /// The child of `board` with the best [`lookup_score`](Self::lookup_score).
    ///
    /// Ties go to board order.
    fn most_promising(&mut self, board: &Board, player: Player, moves: &[Square]) -> Option<(Square, Board)> {
        let mut best: Option<(f64, Square, Board)> = None;
        for &mv in moves {
            let child = successor(board, mv, player);
            let urgency = self.lookup_score(&child);
            if best.as_ref().is_none_or(|(top, _, _)| urgency > *top) {
                best = Some((urgency, mv, child));
            }
        }
        best.map(|(_, mv, child)| (mv, child))
    }

    /// One guided playout from `board` with `player` to move.
    ///
    /// Returns the final piece difference from `player`'s point of view and
    /// records it on `board` itself. Each call updates only its own board;
    /// ancestors are updated by their own calls as the recursion unwinds.
    pub fn tree_playout(&mut self, board: &Board, player: Player) -> i32 {
        let opp = player.opponent();
        let moves = legal_moves(board, player);

        let result = match self.most_promising(board, player, &moves) {
            Some((_, child)) => -self.tree_playout(&child, opp),
            // Forced pass.
            None if any_legal_move(board, opp) => -self.tree_playout(board, opp),
            None => score(board, player),
        };
        self.table.record(board, result);
        result
    }

    /// Clear the table, run the configured number of guided playouts, then
    /// return the move whose resulting board looks best.
    pub fn tree_decision(&mut self, board: &Board, player: Player) -> Option<Square> {
        self.reset();
        for _ in 0..self.playouts {
            self.tree_playout(board, player);
        }

        let moves = legal_moves(board, player);
        for &mv in &moves {
            let child = successor(board, mv, player);
            let stats = self.table.get(&child).copied().unwrap_or_default();
            debug!(
                square = %square_name(mv),
                win_rate = stats.value,
                wins = stats.wins,
                visits = stats.visits(),
                "tree candidate"
            );
        }
        self.most_promising(board, player, &moves).map(|(mv, _)| mv)
    }
}
