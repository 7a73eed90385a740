//! Periodic refresh of the live hour.
//!
//! The dashboard re-reads the clock on a fixed period so the "current" column
//! moves on its own. The refresh runs as a tokio task owned by a
//! [`RefreshHandle`]: `stop()` ends it cleanly, dropping the handle aborts it.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

/// Shortest accepted period; tokio intervals cannot be zero.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug)]
pub struct RefreshHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

/// Run `tick` now and then once every `period` until the handle is stopped
/// or dropped. Must be called from within a tokio runtime.
pub fn spawn_refresh<F>(period: Duration, mut tick: F) -> RefreshHandle
where
    F: FnMut() + Send + 'static,
{
    let period = period.max(MIN_PERIOD);
    let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let mut timer = interval(period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut cancel_rx => break,
                _ = timer.tick() => tick(),
            }
        }

        debug!(target: "meridian::refresh", ?period, "refresh task stopped");
    });

    debug!(target: "meridian::refresh", ?period, "refresh task started");
    RefreshHandle { cancel: Some(cancel_tx), task: Some(task) }
}

impl RefreshHandle {
    /// Cancel the task and wait for it to wind down.
    pub async fn stop(mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(|task| task.is_finished())
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
