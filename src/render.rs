//! Textual board rendering.
//!
//! Display only: takes a board size and the occupied cells of any state
//! (solved or partial) and draws a `Q`/`.` grid. Not part of the
//! algorithmic core.

use rustc_hash::FxHashSet;

use crate::core::{BoardSize, Cell};

/// Render an N x N grid with `Q` on occupied cells and `.` elsewhere.
///
/// Rows are emitted top to bottom, cells separated by single spaces, each
/// row ending in a newline.
///
/// ```
/// use nqueens_search::{render, BoardSize, Cell};
///
/// let board = BoardSize::new(2).unwrap();
/// let out = render(board, &[Cell::new(0, 1)]);
/// assert_eq!(out, ". Q\n. .\n");
/// ```
#[must_use]
pub fn render(board: BoardSize, occupied: &[Cell]) -> String {
    let n = board.get();
    let cells: FxHashSet<Cell> = occupied.iter().copied().collect();

    let mut out = String::with_capacity(n * 2 * n);
    for row in 0..n {
        for col in 0..n {
            if col > 0 {
                out.push(' ');
            }
            out.push(if cells.contains(&Cell::new(row, col)) {
                'Q'
            } else {
                '.'
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = BoardSize::new(3).unwrap();
        assert_eq!(render(board, &[]), ". . .\n. . .\n. . .\n");
    }

    #[test]
    fn test_four_queens_solution() {
        let board = BoardSize::new(4).unwrap();
        let cells = [
            Cell::new(0, 1),
            Cell::new(1, 3),
            Cell::new(2, 0),
            Cell::new(3, 2),
        ];
        let expected = ". Q . .\n\
                        . . . Q\n\
                        Q . . .\n\
                        . . Q .\n";
        assert_eq!(render(board, &cells), expected);
    }

    #[test]
    fn test_queen_count_matches_input() {
        let board = BoardSize::new(8).unwrap();
        let cells: Vec<Cell> = (0..8).map(|i| Cell::new(i, (i * 3) % 8)).collect();
        let out = render(board, &cells);
        assert_eq!(out.chars().filter(|&c| c == 'Q').count(), 8);
        assert_eq!(out.lines().count(), 8);
    }
}
