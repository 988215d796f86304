//! reversi-arena - pit Reversi bots against each other.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use reversi_engine::{Arena, ArenaConfig, GameConfig, Reversi, Strategy, StrategyKind};

/// Play a series of bot-vs-bot Reversi games and report win rates
#[derive(Parser, Debug)]
#[command(name = "reversi-arena")]
#[command(about = "Play bot-vs-bot Reversi games and report win rates", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 10)]
    games: u32,

    /// Board side length
    #[arg(short, long, default_value_t = 8)]
    side: usize,

    /// Number of players
    #[arg(short, long, default_value_t = 2)]
    players: usize,

    /// Start from the Othello seed instead of an empty board
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    othello: bool,

    /// Root RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Turn limit per game
    #[arg(long, default_value_t = 1_000)]
    max_moves: usize,

    /// Strategy per seat, in seat order (random, greedy, lookahead).
    /// Seats without one play random.
    #[arg(short = 'S', long = "strategy")]
    strategies: Vec<StrategyKind>,

    /// Log every finished game
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let game = GameConfig::new(cli.side, cli.players, cli.othello);
    game.validate().context("invalid board configuration")?;

    if cli.strategies.len() > cli.players {
        bail!(
            "{} strategies given for {} players",
            cli.strategies.len(),
            cli.players
        );
    }
    let kinds: Vec<StrategyKind> = (0..cli.players)
        .map(|seat| cli.strategies.get(seat).copied().unwrap_or_default())
        .collect();
    let seats: Vec<Box<dyn Strategy<Reversi>>> = kinds.iter().map(|kind| kind.build()).collect();

    let config = ArenaConfig::new()
        .with_games(cli.games)
        .with_game(game)
        .with_seed(cli.seed)
        .with_max_moves(cli.max_moves);

    info!(?game, seats = ?kinds, seed = cli.seed, "starting arena");

    let arena = Arena::new(config, seats)?;
    let stats = arena.run().context("arena run failed")?;

    println!("{stats}");
    Ok(())
}
