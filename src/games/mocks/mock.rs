//! Adjacency-rule stand-in for the engine.

use crate::board::{Board, Grid};
use crate::core::{Direction, GameConfig, PlayerId, Position, ReversiError, ReversiResult};
use crate::rules::ReversiRules;

/// Two-player stand-in with simplified rules.
///
/// - Boards of side 4 and up, even side, optional Othello seed.
/// - A move is legal on an empty square next to any piece (diagonals
///   included). The two corners `(0, 0)` and `(side-1, side-1)` are always
///   legal.
/// - Nothing is ever flipped.
/// - Playing `(0, 0)` wins outright; playing `(side-1, side-1)` ends the
///   game in a tie.
/// - `load_game` is not modelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversiMock {
    config: GameConfig,
    board: Board,
    turn: PlayerId,
}

impl ReversiMock {
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

    fn winning_corner(&self) -> Position {
        Position::new(0, 0)
    }

    fn tying_corner(&self) -> Position {
        let last = self.config.side - 1;
        Position::new(last, last)
    }

    fn is_legal(&self, pos: Position) -> bool {
        if pos == self.winning_corner() || pos == self.tying_corner() {
            return true;
        }
        !self.board.is_occupied(pos)
            && Direction::ALL.into_iter().any(|direction| {
                pos.step(direction, self.config.side)
                    .is_some_and(|next| self.board.is_occupied(next))
            })
    }
}

impl ReversiRules for ReversiMock {
    fn new(side: usize, players: usize, othello: bool) -> ReversiResult<Self> {
        if players != 2 {
            return Err(ReversiError::invalid("the mock only supports two players"));
        }
        if side < 4 {
            return Err(ReversiError::invalid("the mock needs a board of at least 4x4"));
        }
        if side % 2 != players % 2 {
            return Err(ReversiError::invalid(
                "parity of side and players does not match",
            ));
        }

        let mut board = Board::new(side);
        if othello {
            let center = side / 2;
            board.set(Position::new(center, center), Some(PlayerId(2)));
            board.set(Position::new(center - 1, center), Some(PlayerId(1)));
            board.set(Position::new(center - 1, center - 1), Some(PlayerId(2)));
            board.set(Position::new(center, center - 1), Some(PlayerId(1)));
        }

        Ok(Self {
            config: GameConfig::new(side, players, othello),
            board,
            turn: PlayerId::FIRST,
        })
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
        self.board.positions().filter(|&pos| self.is_legal(pos)).collect()
    }

    fn done(&self) -> bool {
        self.board.is_occupied(self.winning_corner()) || self.board.is_occupied(self.tying_corner())
    }

    fn outcome(&self) -> Vec<PlayerId> {
        if let Some(winner) = self.board.get(self.winning_corner()) {
            vec![winner]
        } else if self.board.is_occupied(self.tying_corner()) {
            vec![PlayerId(1), PlayerId(2)]
        } else {
            Vec::new()
        }
    }

    fn piece_at(&self, pos: Position) -> ReversiResult<Option<PlayerId>> {
        self.check_bounds(pos)?;
        Ok(self.board.get(pos))
    }

    fn legal_move(&self, pos: Position) -> ReversiResult<bool> {
        self.check_bounds(pos)?;
        Ok(self.is_legal(pos))
    }

    fn apply_move(&mut self, pos: Position) -> ReversiResult<()> {
        self.check_bounds(pos)?;
        self.board.set(pos, Some(self.turn));
        self.turn = self.turn.next(self.config.players);
        Ok(())
    }

    fn load_game(&mut self, _turn: PlayerId, _grid: Grid) -> ReversiResult<()> {
        Err(ReversiError::Unsupported {
            operation: "load_game",
        })
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
