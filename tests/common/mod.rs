//! Reference best-first search used by the integration suites.
//!
//! A deliberately small A*: unit action cost, f = g + h, binary-heap
//! frontier, visited-set deduplication on state values. It drives the
//! encodings end-to-end; it is test support, not library surface.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nqueens_search::{SearchError, SearchProblem};
use rustc_hash::FxHashSet;

/// Safety cap so a broken formulation fails a test instead of spinning.
const MAX_EXPANSIONS: usize = 500_000;

/// A goal state together with how much work finding it took.
#[derive(Debug)]
pub struct Solved<S> {
    pub state: S,
    pub expansions: usize,
}

/// Best-first search over `problem`, ordered by path cost plus heuristic.
///
/// Returns the first goal state found, or [`SearchError::Exhausted`] once
/// the frontier empties. Dead ends simply contribute no successors.
pub fn best_first<P: SearchProblem>(problem: &P) -> Result<Solved<P::State>, SearchError> {
    let start = problem.initial_state();
    if problem.is_goal(&start) {
        return Ok(Solved {
            state: start,
            expansions: 0,
        });
    }

    // Nodes live in an arena; the heap orders (f, arena index).
    let mut states = vec![start];
    let mut costs = vec![0u64];
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    let mut frontier = BinaryHeap::new();
    frontier.push((Reverse(problem.heuristic(&states[0])), 0usize));

    let mut expansions = 0;
    while let Some((Reverse(_), idx)) = frontier.pop() {
        let state = states[idx].clone();
        if !visited.insert(state.clone()) {
            continue;
        }

        expansions += 1;
        assert!(expansions <= MAX_EXPANSIONS, "expansion cap exceeded");

        let g = costs[idx];
        for action in problem.actions(&state) {
            let next = problem.result(&state, &action);
            if visited.contains(&next) {
                continue;
            }
            if problem.is_goal(&next) {
                return Ok(Solved {
                    state: next,
                    expansions,
                });
            }

            let next_cost = g + 1;
            let f = next_cost + problem.heuristic(&next);
            states.push(next);
            costs.push(next_cost);
            frontier.push((Reverse(f), states.len() - 1));
        }
    }

    Err(SearchError::Exhausted)
}
