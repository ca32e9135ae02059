//! One-way cancellation signal for a store.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Cancellation signal shared between a store and its worker.
///
/// Firing is one-way: once torn down, a store never processes another action.
#[derive(Clone, Default)]
pub struct Teardown {
    fired: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the signal. Returns true only for the call that actually fired it.
    pub fn fire(&self) -> bool {
        if self.fired.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub fn is_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    pub async fn wait(&self) {
        // Register with Notify before reading the flag, otherwise a fire()
        // between the check and the await would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_fired() {
            return;
        }
        notified.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn fire_is_idempotent() {
        let teardown = Teardown::new();
        assert!(!teardown.is_fired());
        assert!(teardown.fire());
        assert!(!teardown.fire());
        assert!(teardown.is_fired());
    }

    #[tokio::test]
    async fn wait_returns_immediately_when_already_fired() {
        let teardown = Teardown::new();
        teardown.fire();
        tokio::time::timeout(Duration::from_millis(100), teardown.wait())
            .await
            .expect("wait should not block after fire");
    }

    #[tokio::test]
    async fn wait_wakes_on_fire_from_other_task() {
        let teardown = Teardown::new();
        let handle = teardown.clone();
        let waiter = tokio::spawn(async move { handle.wait().await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        teardown.fire();
        tokio::time::timeout(Duration::from_millis(500), waiter)
            .await
            .expect("waiter should wake")
            .unwrap();
    }
}
