use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Default time a simulated settlement takes
pub const DEFAULT_SETTLEMENT_DELAY: Duration = Duration::from_millis(2000);

/// Schedules the one-shot completion of a simulated settlement
#[derive(Debug, Clone, Copy)]
pub struct SettlementTimer {
    delay: Duration,
}

impl SettlementTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `on_elapsed` once the delay has passed.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F, Fut>(&self, on_elapsed: F) -> SettlementHandle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let (done_tx, done_rx) = watch::channel(false);
        debug!("Settlement scheduled in {}ms", delay.as_millis());

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed().await;
            let _ = done_tx.send(true);
        });

        SettlementHandle { task, done_rx }
    }
}

impl Default for SettlementTimer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLEMENT_DELAY)
    }
}

/// Handle to a scheduled settlement
#[derive(Debug)]
pub struct SettlementHandle {
    task: JoinHandle<()>,
    done_rx: watch::Receiver<bool>,
}

impl SettlementHandle {
    /// Stop the settlement if it has not completed yet
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// A waiter that can be awaited without holding on to the handle
    pub fn waiter(&self) -> SettlementWaiter {
        SettlementWaiter {
            done_rx: self.done_rx.clone(),
        }
    }

    /// Wait for the settlement to complete. Returns `false` if it was cancelled.
    pub async fn wait(&self) -> bool {
        self.waiter().wait().await
    }
}

/// Completion signal of a scheduled settlement
#[derive(Debug, Clone)]
pub struct SettlementWaiter {
    done_rx: watch::Receiver<bool>,
}

impl SettlementWaiter {
    /// Resolves once the settlement ran to completion (`true`) or was
    /// aborted before it could (`false`).
    pub async fn wait(mut self) -> bool {
        // an aborted task drops the sender without sending
        self.done_rx.wait_for(|done| *done).await.is_ok()
    }
}
