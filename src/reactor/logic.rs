//! The reactor trait: maps actions to mutations.

use async_trait::async_trait;

use super::action::Action;
use super::reducer::Reducer;

/// Per-screen logic driven by a [`Store`](super::Store).
///
/// `mutate` may await collaborators (network, confirmation dialogs) held by
/// the reactor. It must never fail: collaborator errors are translated into
/// mutations carrying failure data.
#[async_trait]
pub trait Reactor: Reducer + Send + Sync + 'static {
    /// The action type accepted from the view.
    type Action: Action;

    /// The state a freshly opened screen starts with.
    fn initial_state(&self) -> Self::State;

    /// Turn one action into an ordered sequence of mutations.
    ///
    /// `state` is the snapshot left by the previous action's complete fold.
    /// Mutations are applied in the returned order, each one folded before
    /// the next.
    async fn mutate(&self, action: Self::Action, state: &Self::State) -> Vec<Self::Mutation>;
}
