//! The Reversi engine.

use tracing::trace;

use crate::board::{Board, Grid};
use crate::core::{GameConfig, PlayerId, PlayerMap, Position, ReversiError, ReversiResult};
use crate::rules::{captures_any, capturing_directions, ReversiRules};

/// Multi-player Reversi game state.
///
/// Owns the board and the turn counter. All rules are recomputed from the
/// board on every query.
///
/// ## Legality
///
/// Until the `players`×`players` center block is full, a game that has no
/// pieces outside that block only accepts moves on empty center squares.
/// As soon as any square outside the block is occupied, or the block fills
/// up, a move is legal only if it captures in at least one direction.
/// Non-Othello games can only reach an outside piece during the opening
/// through `load_game`; in that case empty center squares become playable
/// only by capture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reversi {
    config: GameConfig,
    board: Board,
    turn: PlayerId,
}

impl Reversi {
    /// Create a game from a configuration.
    pub fn with_config(config: GameConfig) -> ReversiResult<Self> {
        config.validate()?;

        let mut board = Board::new(config.side);
        if config.othello {
            let center = config.side / 2;
            board.set(Position::new(center, center), Some(PlayerId(2)));
            board.set(Position::new(center - 1, center), Some(PlayerId(1)));
            board.set(Position::new(center - 1, center - 1), Some(PlayerId(2)));
            board.set(Position::new(center, center - 1), Some(PlayerId(1)));
        }

        Ok(Self {
            config,
            board,
            turn: PlayerId::FIRST,
        })
    }

    /// The configuration this game was built with.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Whether the game started from the Othello seed.
    #[must_use]
    pub fn is_othello(&self) -> bool {
        self.config.othello
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pieces per player.
    #[must_use]
    pub fn piece_counts(&self) -> PlayerMap<usize> {
        self.board.piece_counts(self.config.players)
    }

    /// Every position `player` could play if it were their turn.
    #[must_use]
    pub fn moves_for(&self, player: PlayerId) -> Vec<Position> {
        let opening = self.in_opening();
        self.board
            .positions()
            .filter(|&pos| self.is_legal_for(pos, player, opening))
            .collect()
    }

    fn has_move(&self, player: PlayerId) -> bool {
        let opening = self.in_opening();
        self.board
            .positions()
            .any(|pos| self.is_legal_for(pos, player, opening))
    }

    fn check_bounds(&self, pos: Position) -> ReversiResult<()> {
        if pos.in_bounds(self.config.side) {
            Ok(())
        } else {
            Err(ReversiError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                side: self.config.side,
            })
        }
    }

    fn in_center(&self, pos: Position) -> bool {
        let span = self.board.center_span(self.config.players);
        span.contains(&pos.row) && span.contains(&pos.col)
    }

    /// Open-center phase: center block not yet full and nothing outside it.
    fn in_opening(&self) -> bool {
        let players = self.config.players;
        !self.board.center_filled(players) && !self.board.occupied_outside_center(players)
    }

    fn is_legal_for(&self, pos: Position, player: PlayerId, opening: bool) -> bool {
        if self.board.is_occupied(pos) {
            return false;
        }
        if opening {
            return self.in_center(pos);
        }
        captures_any(&self.board, player, pos)
    }

    fn place(&mut self, pos: Position, mover: PlayerId) {
        if !self.config.othello && self.in_center(pos) {
            self.board.set(pos, Some(mover));
            return;
        }

        let directions = capturing_directions(&self.board, mover, pos);
        self.board.set(pos, Some(mover));

        let side = self.config.side;
        for direction in directions {
            let mut cursor = pos.step(direction, side);
            while let Some(cell) = cursor {
                if self.board.get(cell) == Some(mover) {
                    break;
                }
                self.board.set(cell, Some(mover));
                cursor = cell.step(direction, side);
            }
        }
    }

    /// Hand the turn to the next player who can move.
    ///
    /// If nobody can move the game is over and the turn stays on the
    /// player right after the mover.
    fn advance_turn(&mut self, mover: PlayerId) {
        let players = self.config.players;
        let first = mover.next(players);

        let mut candidate = first;
        for _ in 0..players {
            if self.has_move(candidate) {
                if candidate != first {
                    trace!(from = %first, to = %candidate, "skipped players without moves");
                }
                self.turn = candidate;
                return;
            }
            candidate = candidate.next(players);
        }

        trace!("no player can move, game over");
        self.turn = first;
    }
}

impl ReversiRules for Reversi {
    fn new(side: usize, players: usize, othello: bool) -> ReversiResult<Self> {
        Self::with_config(GameConfig::new(side, players, othello))
    }

    fn size(&self) -> usize {
        self.config.side
    }

    fn num_players(&self) -> usize {
        self.config.players
    }

    fn grid(&self) -> Grid {
        self.board.to_grid()
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn available_moves(&self) -> Vec<Position> {
        self.moves_for(self.turn)
    }

    fn done(&self) -> bool {
        PlayerId::all(self.config.players).all(|player| !self.has_move(player))
    }

    fn outcome(&self) -> Vec<PlayerId> {
        if !self.done() {
            return Vec::new();
        }

        let counts = self.piece_counts();
        let best = counts.iter().map(|(_, count)| *count).max().unwrap_or(0);
        counts
            .iter()
            .filter(|(_, count)| **count == best)
            .map(|(player, _)| player)
            .collect()
    }

    fn piece_at(&self, pos: Position) -> ReversiResult<Option<PlayerId>> {
        self.check_bounds(pos)?;
        Ok(self.board.get(pos))
    }

    fn legal_move(&self, pos: Position) -> ReversiResult<bool> {
        self.check_bounds(pos)?;
        Ok(self.is_legal_for(pos, self.turn, self.in_opening()))
    }

    fn apply_move(&mut self, pos: Position) -> ReversiResult<()> {
        self.check_bounds(pos)?;

        let mover = self.turn;
        self.place(pos, mover);
        trace!(player = %mover, %pos, "applied move");

        self.advance_turn(mover);
        Ok(())
    }

    fn load_game(&mut self, turn: PlayerId, grid: Grid) -> ReversiResult<()> {
        let GameConfig { side, players, .. } = self.config;

        if !turn.is_valid(players) {
            return Err(ReversiError::invalid(format!(
                "turn {} is not a player in a {}-player game",
                turn.label(),
                players
            )));
        }
        if grid.len() != side {
            return Err(ReversiError::invalid(format!(
                "grid has {} rows, expected {}",
                grid.len(),
                side
            )));
        }
        if let Some((row, cells)) = grid.iter().enumerate().find(|(_, cells)| cells.len() != side) {
            return Err(ReversiError::invalid(format!(
                "grid row {} has {} cells, expected {}",
                row,
                cells.len(),
                side
            )));
        }
        if let Some(label) = grid
            .iter()
            .flatten()
            .flatten()
            .find(|player| !player.is_valid(players))
        {
            return Err(ReversiError::invalid(format!(
                "grid holds label {}, players are 1..={}",
                label.label(),
                players
            )));
        }

        self.board = Board::from_rows(side, &grid);
        self.turn = turn;
        Ok(())
    }

    fn simulate_moves(&self, moves: &[Position]) -> ReversiResult<Self> {
        let mut sim = self.clone();
        for &pos in moves {
            sim.check_bounds(pos)?;
            if sim.board.is_occupied(pos) {
                return Err(ReversiError::OccupiedCell {
                    row: pos.row,
                    col: pos.col,
                });
            }
            sim.apply_move(pos)?;
        }
        Ok(sim)
    }
}

impl std::fmt::Display for Reversi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
