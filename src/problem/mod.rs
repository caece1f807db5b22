//! The engine-facing problem contract.
//!
//! Encodings implement [`SearchProblem`] to define:
//! - the state exploration starts from
//! - legal actions and transitions
//! - the goal test and the heuristic score
//!
//! The search engine consuming the contract stays encoding-agnostic and is
//! not part of this crate.

pub mod space;

pub use space::SearchProblem;
