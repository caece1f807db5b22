//! # nqueens-search
//!
//! The N-Queens constraint-satisfaction problem formulated as three
//! alternative state-space encodings for a generic best-first informed
//! search engine.
//!
//! ## Design Principles
//!
//! 1. **Formulation, Not Search**: This crate defines states, actions,
//!    transitions, goal tests and heuristics. The engine exploring them is
//!    an external collaborator consuming the [`SearchProblem`] trait.
//!
//! 2. **Immutable States**: Every transition returns a new value; inputs
//!    are never mutated. States use `im-rs` persistent vectors for O(1)
//!    cloning, with structural equality and hashing so engines can
//!    deduplicate visited states.
//!
//! 3. **Pure Operations**: `actions`, `result`, `is_goal` and `heuristic`
//!    are side-effect-free functions of their inputs. Even randomized
//!    action ordering derives its stream from a configured seed, so every
//!    call is reentrant.
//!
//! ## Encodings
//!
//! - [`RowEncoding`]: append one column per row; validity-filtered actions,
//!   admissible remaining-queens heuristic.
//! - [`GridEncoding`]: place queens anywhere on an N x N grid; the
//!   deliberately naive baseline with whole-board validation per candidate.
//! - [`SwapEncoding`]: permutation states and row-pair swaps; the raw
//!   attack count as a score to minimize (not admissible).
//!
//! All three share the [`AttackDetector`] ray-scan kernel.
//!
//! ## Modules
//!
//! - `core`: board geometry, attack kernel, RNG, ordering policy, errors
//! - `problem`: the engine-facing `SearchProblem` contract
//! - `encodings`: the three formulations
//! - `render`: textual board output (display only)

pub mod core;
pub mod encodings;
pub mod problem;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    AttackDetector, BoardSize, Cell, CellBuf, ConfigError, Direction, OrderingPolicy, SearchError,
    SearchRng,
};

pub use crate::encodings::{
    Column, GridEncoding, GridState, RowEncoding, RowState, SwapEncoding, SwapPair, SwapState,
};

pub use crate::problem::SearchProblem;

pub use crate::render::render;
