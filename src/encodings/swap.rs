//! Permutation encoding: one queen per row and per column, actions swap
//! two rows' column assignments.
//!
//! Local-search flavored. Every state holds all N queens, every row pair
//! is a legal action (no filtering: a permutation can never share a row or
//! column), and the heuristic is the raw attack count. The heuristic is a
//! score to minimize, not an admissible estimate: a swap may raise it.
//! The goal test is exactly "zero attacks".

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{
    AttackDetector, BoardSize, Cell, CellBuf, ConfigError, Direction, OrderingPolicy, SearchRng,
};
use crate::problem::SearchProblem;

/// Seed for the initial permutation when none is configured.
const DEFAULT_SEED: u64 = 42;

/// An unordered pair of distinct rows to exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapPair {
    lo: usize,
    hi: usize,
}

impl SwapPair {
    /// Create a pair from two distinct rows, in either order.
    ///
    /// Panics if the rows are equal.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        assert!(a != b, "swap rows must be distinct");
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The two rows, smaller first.
    #[must_use]
    pub const fn rows(self) -> (usize, usize) {
        (self.lo, self.hi)
    }
}

/// A permutation of column indices, indexed by row.
///
/// Always a bijection row -> column: exactly N queens, no shared rows or
/// columns, only diagonal attacks are possible.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapState {
    cols: Vector<usize>,
}

impl SwapState {
    /// Build a state from explicit column assignments.
    ///
    /// Panics unless `cols` is a permutation of `0..cols.len()`.
    #[must_use]
    pub fn from_columns(cols: impl IntoIterator<Item = usize>) -> Self {
        let cols: Vector<usize> = cols.into_iter().collect();
        let mut seen = vec![false; cols.len()];
        for &col in &cols {
            assert!(col < cols.len(), "column {col} out of range");
            assert!(!seen[col], "column {col} assigned twice");
            seen[col] = true;
        }
        Self { cols }
    }

    /// Number of rows (and queens).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Whether the board is empty (only the degenerate zero-row case).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Column assignments, row 0 first.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.cols.iter().copied()
    }

    /// Cells occupied by the queens.
    #[must_use]
    pub fn occupied_cells(&self) -> CellBuf {
        self.cols
            .iter()
            .enumerate()
            .map(|(row, &col)| Cell::new(row, col))
            .collect()
    }
}

/// The permutation-with-swaps formulation.
#[derive(Clone, Debug)]
pub struct SwapEncoding {
    board: BoardSize,
    detector: AttackDetector,
    ordering: OrderingPolicy,
    seed: u64,
}

impl SwapEncoding {
    /// Create a formulation for an `n` x `n` board.
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        let board = BoardSize::new(n)?;
        Ok(Self {
            board,
            detector: AttackDetector::new(board),
            ordering: OrderingPolicy::default(),
            seed: DEFAULT_SEED,
        })
    }

    /// Seed the initial-permutation shuffle.
    ///
    /// `initial_state` is a pure function of the encoding value, so two
    /// encodings with the same seed start from the same permutation.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
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

impl SearchProblem for SwapEncoding {
    type State = SwapState;
    type Action = SwapPair;

    fn initial_state(&self) -> SwapState {
        let n = self.board.get();
        let mut cols: Vec<usize> = (0..n).collect();
        SearchRng::new(self.seed).shuffle(&mut cols);
        trace!(?cols, "shuffled initial permutation");
        SwapState {
            cols: cols.into_iter().collect(),
        }
    }

    fn actions(&self, state: &SwapState) -> Vec<SwapPair> {
        let n = self.board.get();
        // Every pair is legal: any permutation is structurally admissible.
        let mut pairs: Vec<SwapPair> = (0..n)
            .flat_map(|lo| ((lo + 1)..n).map(move |hi| SwapPair::new(lo, hi)))
            .collect();
        self.ordering.apply(&mut pairs, state);
        pairs
    }

    fn result(&self, state: &SwapState, action: &SwapPair) -> SwapState {
        let (lo, hi) = action.rows();
        assert!(hi < state.len(), "row {hi} is off the board");

        let a = state.cols[lo];
        let b = state.cols[hi];
        SwapState {
            cols: state.cols.update(lo, b).update(hi, a),
        }
    }

    fn is_goal(&self, state: &SwapState) -> bool {
        self.heuristic(state) == 0
    }

    fn heuristic(&self, state: &SwapState) -> u64 {
        debug_assert_eq!(state.len(), self.board.get(), "state size mismatch");
        // Horizontal and vertical scans are structurally zero for a
        // permutation but are still run, for uniformity with the other
        // encodings.
        self.detector
            .count_attacks(&state.occupied_cells(), &Direction::ALL) as u64
    }
}
