//! Othello-Search: an Othello rules engine with adversarial move selection.
//!
//! This crate provides the rules of Othello (Reversi) on a padded 100-square
//! board and several ways to pick moves: minimax, alpha-beta, and Monte Carlo
//! playouts backed by a per-board statistics table.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, square weights, and search defaults
//! - [`board`] - Cells, players, and the board itself
//! - [`error`] - Illegal-move and board-parsing errors
//! - [`rules`] - Legal moves, captures, turn order, and scoring
//! - [`eval`] - Static evaluators
//! - [`minimax`] - Depth-limited minimax
//! - [`alphabeta`] - Minimax with alpha-beta pruning
//! - [`playout`] - Random game simulation
//! - [`mcts`] - Monte Carlo move selection (flat and tree-guided)
//! - [`strategy`] - The `(board, player) -> move` interface
//! - [`config`] - Search depth, playout count, and seed
//! - [`game`] - Play a full game between two strategies
//!
//! ## Example
//!
//! ```
//! use othello_search::alphabeta::alphabeta_full;
//! use othello_search::board::{Board, Player, square_name};
//! use othello_search::eval::weighted_score;
//! use othello_search::rules::{legal_moves, make_move};
//!
//! // The opening position has four moves for Black.
//! let board = Board::new();
//! assert_eq!(legal_moves(&board, Player::Black).len(), 4);
//!
//! // Play one and search White's reply three plies deep.
//! let board = make_move(&board, 34, Player::Black).unwrap();
//! let (value, best) = alphabeta_full(&board, Player::White, 3, weighted_score);
//! println!("White plays {} (value {value})", square_name(best.unwrap()));
//! ```

pub mod alphabeta;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod eval;
pub mod game;
pub mod mcts;
pub mod minimax;
pub mod playout;
pub mod rules;
pub mod strategy;
