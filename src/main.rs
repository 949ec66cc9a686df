//! Othello-Search: command-line front end.
//!
//! ## Usage
//!
//! - `othello-search` - Show a demo
//! - `othello-search play --black alphabeta --white tree-mc` - Play one game
//! - `othello-search moves --board position.txt --player white` - List legal moves

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;

use othello_search::board::{Board, Player, square_name};
use othello_search::config::SearchConfig;
use othello_search::constants::{DEFAULT_DEPTH, DEFAULT_PLAYOUTS};
use othello_search::eval::{Evaluator, evaluator_by_name};
use othello_search::game::play_game;
use othello_search::rules::legal_moves;
use othello_search::strategy::StrategyKind;

const DEFAULT_EVALUATOR: &str = "weighted";

/// Othello-Search: Othello engine with minimax, alpha-beta, and Monte Carlo players
#[derive(Parser)]
#[command(name = "othello-search")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct SearchArgs {
    /// Search depth for minimax and alpha-beta
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Playouts per Monte Carlo decision
    #[arg(long, default_value_t = DEFAULT_PLAYOUTS)]
    playouts: usize,

    /// Seed for the random strategies
    #[arg(long)]
    seed: Option<u64>,

    /// Leaf evaluator: weighted or score
    #[arg(long, default_value = DEFAULT_EVALUATOR)]
    evaluator: String,
}

impl Default for SearchArgs {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            playouts: DEFAULT_PLAYOUTS,
            seed: None,
            evaluator: DEFAULT_EVALUATOR.to_string(),
        }
    }
}

impl SearchArgs {
    fn config(&self) -> Result<SearchConfig> {
        let config = SearchConfig {
            depth: self.depth,
            playouts: self.playouts,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }

    fn evaluator(&self) -> Result<Evaluator> {
        evaluator_by_name(&self.evaluator)
            .ok_or_else(|| anyhow!("unknown evaluator '{}', expected weighted or score", self.evaluator))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game between two strategies
    Play {
        /// Strategy for Black: random, minimax, alphabeta, flat-mc, tree-mc
        #[arg(long, default_value = "alphabeta")]
        black: StrategyKind,

        /// Strategy for White
        #[arg(long, default_value = "tree-mc")]
        white: StrategyKind,

        #[command(flatten)]
        search: SearchArgs,
    },
    /// List the legal moves on a board
    Moves {
        /// File holding a text board (64 cells of '.', '@', 'o'); defaults to the opening
        #[arg(long)]
        board: Option<PathBuf>,

        /// Player to move: black or white
        #[arg(long, default_value = "black")]
        player: String,
    },
    /// Show each strategy's choice in the opening
    Demo {
        #[command(flatten)]
        search: SearchArgs,
    },
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if level.parse::<LevelFilter>().is_err() {
        return Err(anyhow!(
            "invalid log level '{level}', expected one of trace, debug, info, warn, error"
        ));
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn parse_player(s: &str) -> Result<Player> {
    match s.to_ascii_lowercase().as_str() {
        "black" | "b" | "@" => Ok(Player::Black),
        "white" | "w" | "o" => Ok(Player::White),
        _ => Err(anyhow!("unknown player '{s}', expected black or white")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Some(Commands::Play {
            black,
            white,
            search,
        }) => run_play(black, white, &search),
        Some(Commands::Moves { board, player }) => run_moves(board, &player),
        Some(Commands::Demo { search }) => run_demo(&search),
        None => run_demo(&SearchArgs::default()),
    }
}

fn run_play(black: StrategyKind, white: StrategyKind, search: &SearchArgs) -> Result<()> {
    let config = search.config()?;
    let evaluate = search.evaluator()?;
    info!(%black, %white, depth = config.depth, playouts = config.playouts, "starting game");

    let mut black_strategy = black.build(&config, evaluate);
    let mut white_strategy = white.build(&config, evaluate);
    let record = play_game(black_strategy.as_mut(), white_strategy.as_mut())?;

    println!("{}", record.board);
    let moves: Vec<String> = record.moves.iter().map(|&(_, mv)| square_name(mv)).collect();
    println!("Moves: {}", moves.join(" "));
    match record.winner() {
        Some(Player::Black) => println!("Black ({black}) wins by {}", record.score(Player::Black)),
        Some(Player::White) => println!("White ({white}) wins by {}", record.score(Player::White)),
        None => println!("Draw"),
    }
    Ok(())
}

fn run_moves(path: Option<PathBuf>, player: &str) -> Result<()> {
    let player = parse_player(player)?;
    let board = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read board from {}", path.display()))?;
            text.parse::<Board>()
                .with_context(|| format!("failed to parse board in {}", path.display()))?
        }
        None => Board::new(),
    };

    println!("{board}");
    let moves: Vec<String> = legal_moves(&board, player).into_iter().map(square_name).collect();
    if moves.is_empty() {
        println!("{player} has no legal moves");
    } else {
        println!("{player} can play: {}", moves.join(" "));
    }
    Ok(())
}

fn run_demo(search: &SearchArgs) -> Result<()> {
    let config = search.config()?;
    let evaluate = search.evaluator()?;
    let board = Board::new();

    println!("Othello-Search: opening position\n");
    println!("{board}");

    for kind in StrategyKind::ALL {
        let mut strategy = kind.build(&config, evaluate);
        match strategy.choose(&board, Player::Black) {
            Some(mv) => println!("{kind:>10}: Black plays {}", square_name(mv)),
            None => println!("{kind:>10}: Black passes"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_defaults_match_search_args_default() {
        let cli = Cli::try_parse_from(["othello-search", "demo"]).unwrap();
        let Some(Commands::Demo { search }) = cli.command else {
            panic!("expected the demo subcommand");
        };
        let defaults = SearchArgs::default();
        assert_eq!(search.depth, defaults.depth);
        assert_eq!(search.playouts, defaults.playouts);
        assert_eq!(search.seed, defaults.seed);
        assert_eq!(search.evaluator, defaults.evaluator);
        assert!(defaults.config().is_ok());
        assert!(defaults.evaluator().is_ok());
    }
}
