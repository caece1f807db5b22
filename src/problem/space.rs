//! State-space problem trait consumed by a best-first search engine.
//!
//! The engine is an external collaborator. The contract expected of it:
//! explore states ordered by path cost so far plus `heuristic`, treating
//! each action as unit cost; terminate with a state satisfying `is_goal`,
//! or report exhaustion once the frontier empties (never a silent default
//! result). Dead ends are non-expandable leaves, not failures.

use std::fmt::Debug;
use std::hash::Hash;

/// A state-space problem formulation.
///
/// ## Implementation Notes
///
/// - Every operation is a pure `&self` function of its inputs: no hidden
///   state, safe to call reentrantly, independent candidate evaluation.
/// - `result` returns a fresh value and leaves its input untouched. States
///   compare and hash by value so engines can deduplicate visited states.
/// - `actions` may return an empty vector; such a state is a dead end.
/// - `heuristic` is a score to minimize. It is not admissible for every
///   formulation; engines must not rely on optimality guarantees.
pub trait SearchProblem {
    /// Immutable state value with structural equality and hashing.
    type State: Clone + Eq + Hash + Debug;

    /// Action applicable to a state.
    type Action: Clone + Eq + Debug;

    /// The state exploration starts from.
    fn initial_state(&self) -> Self::State;

    /// Legal actions from `state`.
    ///
    /// Order is governed by the encoding's ordering policy and carries no
    /// meaning. Empty means `state` is a non-expandable leaf.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated remaining cost from `state` to a goal.
    fn heuristic(&self, state: &Self::State) -> u64;

    // === Convenience Methods ===

    /// Whether `state` can make no further progress.
    ///
    /// Default implementation: a non-goal state with no legal actions.
    fn is_dead_end(&self, state: &Self::State) -> bool {
        !self.is_goal(state) && self.actions(state).is_empty()
    }
}
