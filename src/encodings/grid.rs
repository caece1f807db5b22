//! Whole-board encoding: states are N x N occupancy grids.
//!
//! The naive baseline formulation. Any free cell is a candidate action,
//! and every candidate is validated by re-scanning the ENTIRE occupied set,
//! not just the new cell against the rest. One `actions` call is therefore
//! O(N^3) against the row encoding's O(N^2); that cost profile is part of
//! what this encoding models and is kept as-is.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AttackDetector, BoardSize, Cell, CellBuf, ConfigError, OrderingPolicy};
use crate::problem::SearchProblem;

/// Full occupancy grid, row-major, one flag per cell.
///
/// The structure alone allows 0..N^2 queens; validity is enforced by the
/// action generator, not by the state type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridState {
    n: usize,
    cells: Vector<bool>,
}

impl GridState {
    fn empty(board: BoardSize) -> Self {
        let n = board.get();
        Self {
            n,
            cells: std::iter::repeat(false).take(n * n).collect(),
        }
    }

    /// The board dimension this grid was built for.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Number of queens on the grid.
    #[must_use]
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&occupied| occupied).count()
    }

    /// Whether `cell` holds a queen.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        assert!(
            cell.row < self.n && cell.col < self.n,
            "cell {} is off a {}x{} grid",
            cell,
            self.n,
            self.n
        );
        self.cells[cell.row * self.n + cell.col]
    }

    /// Cells holding queens, row-major.
    #[must_use]
    pub fn occupied_cells(&self) -> CellBuf {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| occupied)
            .map(|(idx, _)| Cell::new(idx / self.n, idx % self.n))
            .collect()
    }

    /// Cells without a queen, row-major.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &occupied)| !occupied)
            .map(|(idx, _)| Cell::new(idx / self.n, idx % self.n))
    }
}

/// The naive whole-board formulation.
#[derive(Clone, Debug)]
pub struct GridEncoding {
    board: BoardSize,
    detector: AttackDetector,
    ordering: OrderingPolicy,
}

impl GridEncoding {
    /// Create a formulation for an `n` x `n` board.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        let board = BoardSize::new(n)?;
        Ok(Self {
            board,
            detector: AttackDetector::new(board),
            ordering: OrderingPolicy::default(),
        })
    }

    /// Set the action ordering policy.
    #[must_use]
    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// The board this formulation works on.
    #[must_use]
    pub const fn board(&self) -> BoardSize {
        self.board
    }
}

impl SearchProblem for GridEncoding {
    type State = GridState;
    type Action = Cell;

    fn initial_state(&self) -> GridState {
        GridState::empty(self.board)
    }

    fn actions(&self, state: &GridState) -> Vec<Cell> {
        if state.queen_count() >= self.board.get() {
            return Vec::new();
        }

        let mut legal: Vec<Cell> = state
            .free_cells()
            .filter(|&cell| {
                let next = self.result(state, &cell);
                self.detector.is_attack_free(&next.occupied_cells())
            })
            .collect();

        if legal.is_empty() {
            debug!(queens = state.queen_count(), "dead end: no free cell is safe");
        }
        self.ordering.apply(&mut legal, state);
        legal
    }

    fn result(&self, state: &GridState, action: &Cell) -> GridState {
        assert!(self.board.contains(*action), "cell {} is off the {} board", action, self.board);
        assert!(!state.is_occupied(*action), "cell {action} already holds a queen");

        let idx = action.row * state.n + action.col;
        GridState {
            n: state.n,
            cells: state.cells.update(idx, true),
        }
    }

    fn is_goal(&self, state: &GridState) -> bool {
        state.queen_count() == self.board.get()
    }

    fn heuristic(&self, state: &GridState) -> u64 {
        let count = state.queen_count();
        debug_assert!(count <= self.board.get(), "more queens than rows");
        (self.board.get() - count) as u64
    }
}
