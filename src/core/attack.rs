//! Attack detection kernel shared by every encoding.
//!
//! Scans walk outward from each occupied cell along a direction, in both
//! the positive and negative sense, until they leave the board; every other
//! occupied cell on the way is an attack. Validity checks short-circuit on
//! the first hit, heuristic scoring accumulates a total over all requested
//! directions.
//!
//! Membership tests go through an `FxHashSet`, so one scan is O(Q*N) for Q
//! occupied cells rather than O(Q^2*N) with slice lookups.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::board::BoardSize;
use super::cell::{Cell, Direction};

/// Inline buffer for the occupied cells of one state.
///
/// Eight covers the classic board without spilling to the heap.
pub type CellBuf = SmallVec<[Cell; 8]>;

/// Ray-scan attack detector for one board size.
#[derive(Clone, Copy, Debug)]
pub struct AttackDetector {
    board: BoardSize,
}

impl AttackDetector {
    #[must_use]
    pub const fn new(board: BoardSize) -> Self {
        Self { board }
    }

    /// Whether nothing in `occupied` attacks `origin` along `dir`.
    ///
    /// Walks both senses of the direction from `origin` until leaving the
    /// board. `origin` itself is never counted. Vacuously true for an empty
    /// set.
    #[must_use]
    pub fn no_attack_along(&self, occupied: &[Cell], origin: Cell, dir: Direction) -> bool {
        let cells = self.cell_set(occupied);
        self.hits_from(&cells, origin, dir) == 0
    }

    /// Total attacking pairs over the given directions.
    ///
    /// Accumulates without short-circuiting. Each unordered pair counts
    /// once per direction it is aligned on; a pair lies on exactly one of
    /// the four lines, so scanning all of [`Direction::ALL`] yields the
    /// standard N-Queens conflict count.
    #[must_use]
    pub fn count_attacks(&self, occupied: &[Cell], dirs: &[Direction]) -> usize {
        let cells = self.cell_set(occupied);
        let mut total = 0;
        for &dir in dirs {
            for &origin in occupied {
                total += self.hits_from(&cells, origin, dir);
            }
        }
        // Every aligned pair is seen from both of its endpoints.
        total / 2
    }

    /// Whether the whole set is mutually attack-free along all four
    /// directions. Short-circuits on the first attacking pair.
    #[must_use]
    pub fn is_attack_free(&self, occupied: &[Cell]) -> bool {
        let cells = self.cell_set(occupied);
        Direction::ALL.iter().all(|&dir| {
            occupied
                .iter()
                .all(|&origin| self.hits_from(&cells, origin, dir) == 0)
        })
    }

    fn cell_set(&self, occupied: &[Cell]) -> FxHashSet<Cell> {
        debug_assert!(
            occupied.iter().all(|&c| self.board.contains(c)),
            "occupied cell off the {} board",
            self.board
        );
        occupied.iter().copied().collect()
    }

    /// Occupied cells hit walking both senses of `dir` from `origin`.
    fn hits_from(&self, cells: &FxHashSet<Cell>, origin: Cell, dir: Direction) -> usize {
        let (dr, dc) = dir.delta();
        let mut hits = 0;
        for sense in [1isize, -1] {
            let mut r = origin.row as isize;
            let mut c = origin.col as isize;
            loop {
                r += dr * sense;
                c += dc * sense;
                if r < 0 || c < 0 {
                    break;
                }
                let cell = Cell::new(r as usize, c as usize);
                if !self.board.contains(cell) {
                    break;
                }
                if cells.contains(&cell) {
                    hits += 1;
                }
            }
        }
        hits
    }
}
