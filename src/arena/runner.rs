//! Game loop that seats one strategy per player.

use tracing::{debug, info};

use crate::core::{GameRng, ReversiError, ReversiResult};
use crate::bots::Strategy;
use crate::rules::{GameResult, ReversiRules};

use super::config::ArenaConfig;
use super::stats::ArenaStats;

/// What happened in a single arena game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    /// Final result, `None` if the turn limit was hit first.
    pub result: Option<GameResult>,

    /// Moves placed on the board.
    pub moves: usize,

    /// Turns handed on because the seated strategy had no move.
    pub passes: usize,
}

/// Plays games between seated strategies.
///
/// Seat `i` plays as player `i + 1`.
pub struct Arena<G: ReversiRules> {
    config: ArenaConfig,
    seats: Vec<Box<dyn Strategy<G>>>,
}

impl<G: ReversiRules> Arena<G> {
    /// Create an arena. There must be exactly one strategy per player.
    pub fn new(config: ArenaConfig, seats: Vec<Box<dyn Strategy<G>>>) -> ReversiResult<Self> {
        if seats.len() != config.game.players {
            return Err(ReversiError::invalid(format!(
                "{} strategies seated for {} players",
                seats.len(),
                config.game.players
            )));
        }
        Ok(Self { config, seats })
    }

    /// The arena configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Play one game from a fresh board.
    ///
    /// A strategy that returns no move passes the turn to the next player
    /// through `load_game`.
    pub fn play_game(&self, rng: &mut GameRng) -> ReversiResult<GameRecord> {
        let mut game = G::from_config(self.config.game)?;
        let players = game.num_players();
        let mut moves = 0;
        let mut passes = 0;

        for _ in 0..self.config.max_moves {
            if game.done() {
                break;
            }

            let turn = game.turn();
            let strategy = &self.seats[turn.index()];
            match strategy.choose_move(&game, rng)? {
                Some(pos) => {
                    game.apply_move(pos)?;
                    moves += 1;
                }
                None => {
                    let grid = game.grid();
                    game.load_game(turn.next(players), grid)?;
                    passes += 1;
                }
            }
        }

        Ok(GameRecord {
            result: game.result(),
            moves,
            passes,
        })
    }

    /// Play every configured game and aggregate the results.
    pub fn run(&self) -> ReversiResult<ArenaStats> {
        let mut root = GameRng::new(self.config.seed);
        let mut stats = ArenaStats::new(self.config.game.players);

        for index in 0..self.config.games {
            let mut rng = root.fork();
            let record = self.play_game(&mut rng)?;
            debug!(
                game = index,
                result = ?record.result,
                moves = record.moves,
                passes = record.passes,
                "game finished"
            );
            stats.record(record.result.as_ref());
        }

        let seats: Vec<&'static str> = self.seats.iter().map(|s| s.name()).collect();
        info!(
            games = stats.games,
            ties = stats.ties,
            unfinished = stats.unfinished,
            ?seats,
            "arena run complete"
        );
        Ok(stats)
    }
}
