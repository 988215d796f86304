//! Fixed-script stand-in for the engine.

use crate::board::{Board, Grid};
use crate::core::{PlayerId, Position, ReversiError, ReversiResult};
use crate::rules::ReversiRules;

/// Two-player stand-in whose behaviour does not depend on Reversi rules.
///
/// - Starts with player 1 in the north-east and south-west corners and
///   player 2 in the north-west and south-east corners.
/// - Every square is always a legal move, even an occupied one.
/// - The game ends after four moves; whoever holds `(0, 1)` wins, and an
///   empty `(0, 1)` is a tie.
/// - `load_game` and `simulate_moves` are not modelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReversiStub {
    board: Board,
    turn: PlayerId,
    moves_played: usize,
}

const MOVES_PER_GAME: usize = 4;

impl ReversiStub {
    fn check_bounds(&self, pos: Position) -> ReversiResult<()> {
        let side = self.board.side();
        if pos.in_bounds(side) {
            Ok(())
        } else {
            Err(ReversiError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                side,
            })
        }
    }
}

impl ReversiRules for ReversiStub {
    fn new(side: usize, players: usize, _othello: bool) -> ReversiResult<Self> {
        if players != 2 {
            return Err(ReversiError::invalid("the stub only supports two players"));
        }
        if side < 2 {
            return Err(ReversiError::invalid("the stub needs a board of at least 2x2"));
        }

        let last = side - 1;
        let mut board = Board::new(side);
        board.set(Position::new(0, last), Some(PlayerId(1)));
        board.set(Position::new(last, 0), Some(PlayerId(1)));
        board.set(Position::new(0, 0), Some(PlayerId(2)));
        board.set(Position::new(last, last), Some(PlayerId(2)));

        Ok(Self {
            board,
            turn: PlayerId::FIRST,
            moves_played: 0,
        })
    }

    fn size(&self) -> usize {
        self.board.side()
    }

    fn num_players(&self) -> usize {
        2
    }

    fn grid(&self) -> Grid {
        self.board.to_grid()
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn available_moves(&self) -> Vec<Position> {
        self.board.positions().collect()
    }

    fn done(&self) -> bool {
        self.moves_played >= MOVES_PER_GAME
    }

    fn outcome(&self) -> Vec<PlayerId> {
        if !self.done() {
            return Vec::new();
        }
        match self.board.get(Position::new(0, 1)) {
            Some(winner) => vec![winner],
            None => vec![PlayerId(1), PlayerId(2)],
        }
    }

    fn piece_at(&self, pos: Position) -> ReversiResult<Option<PlayerId>> {
        self.check_bounds(pos)?;
        Ok(self.board.get(pos))
    }

    fn legal_move(&self, pos: Position) -> ReversiResult<bool> {
        self.check_bounds(pos)?;
        Ok(true)
    }

    fn apply_move(&mut self, pos: Position) -> ReversiResult<()> {
        self.check_bounds(pos)?;
        self.board.set(pos, Some(self.turn));
        self.turn = self.turn.next(2);
        self.moves_played += 1;
        Ok(())
    }

    fn load_game(&mut self, _turn: PlayerId, _grid: Grid) -> ReversiResult<()> {
        Err(ReversiError::Unsupported {
            operation: "load_game",
        })
    }

    fn simulate_moves(&self, _moves: &[Position]) -> ReversiResult<Self> {
        Err(ReversiError::Unsupported {
            operation: "simulate_moves",
        })
    }
}
