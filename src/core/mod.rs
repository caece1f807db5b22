//! Core board types and shared kernels: geometry, attack scanning,
//! deterministic randomness, ordering policy, errors.
//!
//! Everything here is encoding-agnostic; the three formulations build on
//! these pieces without modifying them.

pub mod attack;
pub mod board;
pub mod cell;
pub mod error;
pub mod ordering;
pub mod rng;

pub use attack::{AttackDetector, CellBuf};
pub use board::BoardSize;
pub use cell::{Cell, Direction};
pub use error::{ConfigError, SearchError};
pub use ordering::OrderingPolicy;
pub use rng::SearchRng;
