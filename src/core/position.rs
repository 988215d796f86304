//! Board coordinates and the eight compass directions.

use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate on the board. Row 0 is the top edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both coordinates lie in `[0, side)`.
    #[must_use]
    pub const fn in_bounds(self, side: usize) -> bool {
        self.row < side && self.col < side
    }

    /// The neighbouring position one step in `direction`, if it stays on a
    /// `side`×`side` board.
    #[must_use]
    pub fn step(self, direction: Direction, side: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        next.in_bounds(side).then_some(next)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions a capture ray can travel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::South,
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// `(row, col)` offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(4));
        assert!(Position::new(3, 3).in_bounds(4));
        assert!(!Position::new(4, 0).in_bounds(4));
        assert!(!Position::new(0, 4).in_bounds(4));
    }

    #[test]
    fn test_step_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::North, 8), None);
        assert_eq!(corner.step(Direction::West, 8), None);
        assert_eq!(corner.step(Direction::SouthEast, 8), Some(Position::new(1, 1)));

        let edge = Position::new(7, 3);
        assert_eq!(edge.step(Direction::South, 8), None);
        assert_eq!(edge.step(Direction::NorthWest, 8), Some(Position::new(6, 2)));
    }

    #[test]
    fn test_directions_are_distinct() {
        let mut deltas: Vec<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        deltas.sort();
        deltas.dedup();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
    }

    #[test]
    fn test_position_display_and_from() {
        let pos: Position = (2, 5).into();
        assert_eq!(pos, Position::new(2, 5));
        assert_eq!(format!("{}", pos), "(2, 5)");
    }
}
