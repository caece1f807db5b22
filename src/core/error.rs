//! Error types.
//!
//! Three situations are kept apart:
//! - invalid configuration is rejected at construction with [`ConfigError`];
//! - a state with no legal actions is a normal search dead end, reported as
//!   an empty action set, never as an error;
//! - a search that exhausts its frontier without reaching a goal surfaces
//!   [`SearchError::Exhausted`], never a silent default board.
//!
//! Malformed states (wrong length, out-of-range indices) are programming
//! errors and fail fast via assertions instead of flowing through `Result`.

use thiserror::Error;

/// Rejected problem configuration.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The board dimension must be at least 1.
    #[error("board size must be positive, got {size}")]
    InvalidBoardSize { size: usize },
}

/// Failure surfaced by a search engine driving an encoding.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The frontier emptied before any goal state was found.
    #[error("search exhausted: no goal state is reachable")]
    Exhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidBoardSize { size: 0 };
        assert_eq!(err.to_string(), "board size must be positive, got 0");
    }

    #[test]
    fn test_search_error_message() {
        assert_eq!(
            SearchError::Exhausted.to_string(),
            "search exhausted: no goal state is reachable"
        );
    }
}
