//! Reducer trait for the reactor architecture.

use super::action::Mutation;
use super::state::ReactorState;

/// Reducer folds mutations into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Mutation) -> State. It takes no
/// `self`, so it cannot reach session data or collaborators.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ReactorState;

    /// The mutation type this reducer handles.
    type Mutation: Mutation;

    /// Apply a mutation and return the new state.
    ///
    /// Must be total: every (state, mutation) pair yields a state.
    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State;
}
