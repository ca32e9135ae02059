//! The per-screen store: serializes actions and publishes states.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::logic::Reactor;
use super::stream::{Published, StateStream};
use super::teardown::Teardown;

/// Runs one [`Reactor`] on its own sequential worker task.
///
/// Actions are queued and processed one at a time: an action's mutations are
/// computed against the state left by the previous action's complete fold,
/// and the folded state is published once before the next action starts.
///
/// Dropping the store tears it down.
pub struct Store<R: Reactor> {
    published: Arc<Published<R::State>>,
    actions: mpsc::UnboundedSender<R::Action>,
    teardown: Teardown,
}

impl<R: Reactor> Store<R> {
    /// Create a store and spawn its worker.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn new(reactor: R) -> Self {
        let published = Arc::new(Published::new(reactor.initial_state()));
        let (tx, rx) = mpsc::unbounded_channel();
        let teardown = Teardown::new();

        tokio::spawn(run(reactor, rx, Arc::clone(&published), teardown.clone()));

        Self {
            published,
            actions: tx,
            teardown,
        }
    }

    /// Queue an action. Ignored once the store is torn down.
    pub fn dispatch(&self, action: R::Action) {
        if self.teardown.is_fired() || self.actions.send(action).is_err() {
            tracing::debug!(
                reactor = std::any::type_name::<R>(),
                "Action dropped, store torn down"
            );
        }
    }

    /// Snapshot of the latest published state.
    pub fn current_state(&self) -> R::State {
        self.published.current()
    }

    /// Subscribe to states: the current one immediately, then every
    /// publication in order.
    pub fn observe_state(&self) -> StateStream<R::State> {
        self.published.subscribe()
    }

    /// Cancel any in-flight mutation chain and stop processing.
    ///
    /// Nothing from a cancelled chain is published. Open streams end.
    pub fn teardown(&self) {
        if self.teardown.fire() {
            tracing::debug!(reactor = std::any::type_name::<R>(), "Store torn down");
        }
        self.published.close();
    }

    /// Handle that tears this store down when fired, e.g. from navigation code.
    pub fn teardown_handle(&self) -> Teardown {
        self.teardown.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_fired()
    }
}

impl<R: Reactor> Drop for Store<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run<R: Reactor>(
    reactor: R,
    mut actions: mpsc::UnboundedReceiver<R::Action>,
    published: Arc<Published<R::State>>,
    teardown: Teardown,
) {
    loop {
        let action = tokio::select! {
            biased;
            _ = teardown.wait() => break,
            next = actions.recv() => match next {
                Some(action) => action,
                None => break,
            },
        };

        let snapshot = published.current();
        let mutations = tokio::select! {
            biased;
            _ = teardown.wait() => {
                tracing::debug!(
                    reactor = std::any::type_name::<R>(),
                    "Mutation chain cancelled"
                );
                break;
            }
            mutations = reactor.mutate(action, &snapshot) => mutations,
        };

        if mutations.is_empty() {
            continue;
        }

        let count = mutations.len();
        let state = mutations.into_iter().fold(snapshot, R::reduce);

        if teardown.is_fired() {
            break;
        }
        let observers = published.publish(state);
        tracing::trace!(
            reactor = std::any::type_name::<R>(),
            mutations = count,
            observers,
            "State published"
        );
    }

    published.close();
}
