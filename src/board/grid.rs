//! Square board storage.

use std::ops::Range;

use im::Vector;

use crate::core::{PlayerId, PlayerMap, Position};

/// Matrix of optional player labels, as exchanged with callers.
///
/// Always a fresh copy: mutating it never affects a game.
pub type Grid = Vec<Vec<Option<PlayerId>>>;

/// `side`×`side` cells of optional player labels, stored row-major.
///
/// Backed by a persistent vector so that cloning a board for a simulation
/// shares structure until one side writes. Writes never become visible
/// through another clone.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    side: usize,
    cells: Vector<Option<PlayerId>>,
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: std::iter::repeat(None).take(side * side).collect(),
        }
    }

    /// Build a board from rows. Rows must already be `side` long.
    pub(crate) fn from_rows(side: usize, rows: &[Vec<Option<PlayerId>>]) -> Self {
        debug_assert!(rows.len() == side && rows.iter().all(|row| row.len() == side));
        Self {
            side,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Squares per side.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    fn offset(&self, pos: Position) -> usize {
        debug_assert!(pos.in_bounds(self.side), "{} off a {}-board", pos, self.side);
        pos.row * self.side + pos.col
    }

    /// Label at `pos`. `pos` must be in bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<PlayerId> {
        self.cells[self.offset(pos)]
    }

    /// Overwrite `pos`, returning the previous label.
    pub fn set(&mut self, pos: Position, player: Option<PlayerId>) -> Option<PlayerId> {
        let offset = self.offset(pos);
        self.cells.set(offset, player)
    }

    /// Whether `pos` holds a piece.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side;
        (0..side).flat_map(move |row| (0..side).map(move |col| Position::new(row, col)))
    }

    /// Rows/cols spanned by the `players`×`players` center block.
    #[must_use]
    pub fn center_span(&self, players: usize) -> Range<usize> {
        let margin = (self.side - players) / 2;
        margin..self.side - margin
    }

    /// Whether every square of the center block holds a piece.
    #[must_use]
    pub fn center_filled(&self, players: usize) -> bool {
        let span = self.center_span(players);
        span.clone()
            .all(|row| span.clone().all(|col| self.is_occupied(Position::new(row, col))))
    }

    /// Whether any square outside the center block holds a piece.
    #[must_use]
    pub fn occupied_outside_center(&self, players: usize) -> bool {
        let span = self.center_span(players);
        self.positions().any(|pos| {
            !(span.contains(&pos.row) && span.contains(&pos.col)) && self.is_occupied(pos)
        })
    }

    /// Number of pieces each player has on the board.
    #[must_use]
    pub fn piece_counts(&self, players: usize) -> PlayerMap<usize> {
        let mut counts = PlayerMap::with_value(players, 0);
        for player in self.cells.iter().flatten() {
            if player.is_valid(players) {
                counts[*player] += 1;
            }
        }
        counts
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(player)).count()
    }

    /// Copy out as rows.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        (0..self.side)
            .map(|row| {
                (0..self.side)
                    .map(|col| self.get(Position::new(row, col)))
                    .collect()
            })
            .collect()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.side {
            for col in 0..self.side {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(player) => write!(f, "{}", player.label())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: Option<PlayerId> = Some(PlayerId(1));
    const P2: Option<PlayerId> = Some(PlayerId(2));

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5);
        assert_eq!(board.side(), 5);
        assert_eq!(board.positions().count(), 25);
        assert!(board.positions().all(|pos| !board.is_occupied(pos)));
        assert_eq!(board.to_grid(), vec![vec![None; 5]; 5]);
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(4);
        let pos = Position::new(1, 2);

        assert_eq!(board.set(pos, P1), None);
        assert_eq!(board.get(pos), P1);
        assert_eq!(board.set(pos, P2), P1);
        assert_eq!(board.to_grid()[1][2], P2);
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut original = Board::new(4);
        original.set(Position::new(0, 0), P1);

        let mut fork = original.clone();
        fork.set(Position::new(0, 0), P2);
        fork.set(Position::new(3, 3), P2);

        assert_eq!(original.get(Position::new(0, 0)), P1);
        assert_eq!(original.get(Position::new(3, 3)), None);
    }

    #[test]
    fn test_center_span() {
        assert_eq!(Board::new(8).center_span(2), 3..5);
        assert_eq!(Board::new(9).center_span(3), 3..6);
        assert_eq!(Board::new(5).center_span(3), 1..4);
        assert_eq!(Board::new(4).center_span(4), 0..4);
    }

    #[test]
    fn test_center_occupancy() {
        let mut board = Board::new(4);
        assert!(!board.center_filled(2));

        for (row, col) in [(1, 1), (1, 2), (2, 1)] {
            board.set(Position::new(row, col), P1);
        }
        assert!(!board.center_filled(2));
        assert!(!board.occupied_outside_center(2));

        board.set(Position::new(2, 2), P2);
        assert!(board.center_filled(2));

        board.set(Position::new(0, 3), P2);
        assert!(board.occupied_outside_center(2));
    }

    #[test]
    fn test_piece_counts() {
        let rows = vec![vec![P1, P1, None], vec![P2, None, None], vec![None, None, P1]];
        let board = Board::from_rows(3, &rows);

        let counts = board.piece_counts(2);
        assert_eq!(counts[PlayerId(1)], 3);
        assert_eq!(counts[PlayerId(2)], 1);
        assert_eq!(board.count(PlayerId(1)), 3);
        assert_eq!(board.to_grid(), rows);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3);
        board.set(Position::new(0, 0), P1);
        board.set(Position::new(2, 1), P2);
        assert_eq!(format!("{}", board), "1 . .\n. . .\n. 2 .\n");
    }
}
