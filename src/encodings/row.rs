//! Row-by-row encoding: states are partial column assignments.
//!
//! A state of length L places one queen in each of rows 0..L; the next
//! action appends the column for row L. Candidate columns are filtered
//! through the attack kernel at generation time, so any length-N state is
//! already conflict-free and the goal test only checks the length.
//!
//! The heuristic (queens still to place) is admissible and monotonic:
//! every action places exactly one queen.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{AttackDetector, BoardSize, Cell, CellBuf, ConfigError, OrderingPolicy};
use crate::problem::SearchProblem;

/// A column chosen for the next unplaced row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column(pub usize);

/// Partial board: one column index per placed row, row 0 first.
///
/// Backed by a persistent vector: cloning is O(1) and equality and hashing
/// are structural, so engines can deduplicate visited states.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowState {
    cols: Vector<usize>,
}

impl RowState {
    /// Number of placed queens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cols.len()
    }

    /// Whether no queen has been placed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cols.is_empty()
    }

    /// Columns assigned so far, row 0 first.
    pub fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.cols.iter().copied()
    }

    /// Cells occupied by the placed queens.
    #[must_use]
    pub fn occupied_cells(&self) -> CellBuf {
        self.cols
            .iter()
            .enumerate()
            .map(|(row, &col)| Cell::new(row, col))
            .collect()
    }
}

/// The incremental row-by-row formulation.
#[derive(Clone, Debug)]
pub struct RowEncoding {
    board: BoardSize,
    detector: AttackDetector,
    ordering: OrderingPolicy,
}

impl RowEncoding {
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

impl SearchProblem for RowEncoding {
    type State = RowState;
    type Action = Column;

    fn initial_state(&self) -> RowState {
        RowState::default()
    }

    fn actions(&self, state: &RowState) -> Vec<Column> {
        let n = self.board.get();
        if state.len() >= n {
            return Vec::new();
        }

        let mut legal: Vec<Column> = (0..n)
            .map(Column)
            .filter(|col| {
                let next = self.result(state, col);
                self.detector.is_attack_free(&next.occupied_cells())
            })
            .collect();

        if legal.is_empty() {
            debug!(placed = state.len(), "dead end: no column extends this board");
        }
        self.ordering.apply(&mut legal, state);
        legal
    }

    fn result(&self, state: &RowState, action: &Column) -> RowState {
        let n = self.board.get();
        assert!(state.len() < n, "all {n} rows are already placed");
        assert!(action.0 < n, "column {} is off the {} board", action.0, self.board);

        let mut cols = state.cols.clone();
        cols.push_back(action.0);
        RowState { cols }
    }

    fn is_goal(&self, state: &RowState) -> bool {
        state.len() == self.board.get()
    }

    fn heuristic(&self, state: &RowState) -> u64 {
        debug_assert!(state.len() <= self.board.get(), "state longer than the board");
        (self.board.get() - state.len()) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let enc = RowEncoding::new(8).unwrap();
        let state = enc.initial_state();
        assert!(state.is_empty());
        assert_eq!(enc.heuristic(&state), 8);
        assert!(!enc.is_goal(&state));
    }

    #[test]
    fn test_result_appends_one_row() {
        let enc = RowEncoding::new(4).unwrap();
        let state = enc.initial_state();
        let next = enc.result(&state, &Column(2));

        assert_eq!(next.len(), 1);
        assert_eq!(next.columns().collect::<Vec<_>>(), vec![2]);
        // The input state is untouched.
        assert!(state.is_empty());
    }

    #[test]
    fn test_actions_filter_attacked_columns() {
        let enc = RowEncoding::new(4).unwrap();
        let one = enc.result(&enc.initial_state(), &Column(0));

        let legal = enc.actions(&one);
        // Column 0 (vertical) and column 1 (diagonal) attack row 0's queen.
        assert_eq!(legal, vec![Column(2), Column(3)]);
    }

    #[test]
    fn test_dead_end_has_no_actions() {
        let enc = RowEncoding::new(4).unwrap();
        let mut state = enc.initial_state();
        for col in [0, 2] {
            state = enc.result(&state, &Column(col));
        }

        // No third-row column is compatible with [0, 2].
        assert!(enc.actions(&state).is_empty());
        assert!(enc.is_dead_end(&state));
    }

    #[test]
    fn test_goal_is_reached_without_rejection_on_a_known_solution() {
        let enc = RowEncoding::new(4).unwrap();
        let mut state = enc.initial_state();

        for col in [1, 3, 0, 2] {
            let action = Column(col);
            assert!(enc.actions(&state).contains(&action));
            state = enc.result(&state, &action);
        }

        assert_eq!(state.len(), 4);
        assert!(enc.is_goal(&state));
        assert_eq!(enc.heuristic(&state), 0);
        assert!(enc.actions(&state).is_empty());
        assert!(!enc.is_dead_end(&state));
    }

    #[test]
    fn test_single_queen_board_is_trivial() {
        let enc = RowEncoding::new(1).unwrap();
        let state = enc.initial_state();
        assert_eq!(enc.actions(&state), vec![Column(0)]);

        let solved = enc.result(&state, &Column(0));
        assert!(enc.is_goal(&solved));
        assert_eq!(enc.heuristic(&solved), 0);
    }

    #[test]
    fn test_rejects_zero_board() {
        assert!(RowEncoding::new(0).is_err());
    }

    #[test]
    fn test_randomized_ordering_returns_the_same_set() {
        let det = RowEncoding::new(6).unwrap();
        let rnd = RowEncoding::new(6)
            .unwrap()
            .with_ordering(OrderingPolicy::Randomized { seed: 9 });
        let state = det.result(&det.initial_state(), &Column(1));

        let mut a = det.actions(&state);
        let mut b = rnd.actions(&state);
        a.sort_by_key(|c| c.0);
        b.sort_by_key(|c| c.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let enc = RowEncoding::new(4).unwrap();
        let state = enc.result(&enc.initial_state(), &Column(1));

        let json = serde_json::to_string(&state).unwrap();
        let back: RowState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    #[should_panic(expected = "off the 4x4 board")]
    fn test_out_of_range_column_fails_fast() {
        let enc = RowEncoding::new(4).unwrap();
        let _ = enc.result(&enc.initial_state(), &Column(4));
    }
}
