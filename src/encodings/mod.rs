//! The three N-Queens formulations.
//!
//! Each encoding is a struct implementing [`crate::problem::SearchProblem`]
//! with its own state and action types:
//!
//! - [`RowEncoding`]: append one column per row; actions are validity
//!   filtered, the heuristic counts queens still to place (admissible).
//! - [`GridEncoding`]: place a queen at any free cell of an N x N grid;
//!   the deliberately naive baseline with whole-board validation.
//! - [`SwapEncoding`]: permutation states and row-pair swaps; the raw
//!   attack count as a score to minimize (not admissible).

pub mod grid;
pub mod row;
pub mod swap;

pub use grid::{GridEncoding, GridState};
pub use row::{Column, RowEncoding, RowState};
pub use swap::{SwapEncoding, SwapPair, SwapState};
