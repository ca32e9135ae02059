//! Replay-latest state publication.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

/// Latest state plus the live subscriber list, guarded together so that a
/// subscriber never misses or duplicates a publication.
pub(crate) struct Published<S> {
    inner: Mutex<PublishedInner<S>>,
}

struct PublishedInner<S> {
    current: S,
    subscribers: Vec<mpsc::UnboundedSender<S>>,
    closed: bool,
}

impl<S: Clone> Published<S> {
    pub(crate) fn new(initial: S) -> Self {
        Self {
            inner: Mutex::new(PublishedInner {
                current: initial,
                subscribers: Vec::new(),
                closed: false,
            }),
        }
    }

    pub(crate) fn current(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// Register a subscriber; it receives the current state first.
    pub(crate) fn subscribe(&self) -> StateStream<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // A closed store hands out a stream that yields the last state and ends.
        let _ = tx.send(inner.current.clone());
        if !inner.closed {
            inner.subscribers.push(tx);
        }
        StateStream { rx }
    }

    /// Replace the current state and deliver it to every live subscriber.
    /// Subscribers whose stream was dropped are pruned here.
    ///
    /// Once closed, publishing is a no-op and the last state stays current.
    pub(crate) fn publish(&self, state: S) -> usize {
        let mut inner = self.inner.lock();
        if inner.closed {
            return 0;
        }
        inner
            .subscribers
            .retain(|subscriber| subscriber.send(state.clone()).is_ok());
        inner.current = state;
        inner.subscribers.len()
    }

    /// End every stream. The current state stays readable.
    pub(crate) fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.subscribers.clear();
    }
}

/// Infinite stream of states for one observer.
///
/// Yields the state current at subscription time, then every published state
/// in order. Ends only when the owning store is torn down.
pub struct StateStream<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S> StateStream<S> {
    /// Wait for the next state, `None` once the store is torn down.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }

    /// Take an already delivered state without waiting.
    pub fn try_next(&mut self) -> Option<S> {
        self.rx.try_recv().ok()
    }
}

impl<S> Stream for StateStream<S> {
    type Item = S;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        self.rx.poll_recv(cx)
    }
}
