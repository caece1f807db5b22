//! Board size: the single configuration value of a problem instance.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::ConfigError;

/// A validated N x N board dimension.
///
/// Construction rejects zero, so every consumer can assume a positive
/// board. The size is immutable for the life of a problem instance.
///
/// ```
/// use nqueens_search::BoardSize;
///
/// let board = BoardSize::new(8).unwrap();
/// assert_eq!(board.get(), 8);
/// assert!(BoardSize::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Create a board size, rejecting a zero dimension.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n == 0 {
            return Err(ConfigError::InvalidBoardSize { size: n });
        }
        Ok(Self(n))
    }

    /// The board dimension N.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Whether `cell` lies on the board.
    #[must_use]
    pub const fn contains(self, cell: Cell) -> bool {
        cell.row < self.0 && cell.col < self.0
    }

    /// Iterate every cell in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let n = self.0;
        (0..n).flat_map(move |row| (0..n).map(move |col| Cell::new(row, col)))
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero() {
        assert_eq!(
            BoardSize::new(0),
            Err(ConfigError::InvalidBoardSize { size: 0 })
        );
    }

    #[test]
    fn test_contains() {
        let board = BoardSize::new(4).unwrap();
        assert!(board.contains(Cell::new(0, 0)));
        assert!(board.contains(Cell::new(3, 3)));
        assert!(!board.contains(Cell::new(4, 0)));
        assert!(!board.contains(Cell::new(0, 4)));
    }

    #[test]
    fn test_cells_row_major() {
        let board = BoardSize::new(3).unwrap();
        let cells: Vec<Cell> = board.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(0, 1));
        assert_eq!(cells[8], Cell::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(BoardSize::new(8).unwrap().to_string(), "8x8");
    }
}
