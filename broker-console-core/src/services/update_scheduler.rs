//! Periodic driver of the update registry

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::traits::UpdateRegistry;

/// Calls `update()` on every registered updater once per period
#[derive(Clone)]
pub struct UpdateScheduler {
    registry: Arc<dyn UpdateRegistry>,
    period: Duration,
}

impl UpdateScheduler {
    #[must_use]
    pub fn new(registry: Arc<dyn UpdateRegistry>, period: Duration) -> Self {
        Self { registry, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Run one round; returns how many updaters were invoked.
    ///
    /// Updaters run concurrently; each one serialises its own fetches.
    pub async fn tick(&self) -> usize {
        let handles = self.registry.handles().await;
        futures::future::join_all(handles.iter().map(|h| h.update())).await;
        handles.len()
    }

    /// Start ticking in the background. The first round runs one period
    /// from now.
    pub fn spawn(self) -> SchedulerHandle {
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval fires immediately once; panels already did their initial load
            interval.tick().await;
            loop {
                interval.tick().await;
                let count = self.tick().await;
                log::trace!("[scheduler] Updated {count} panel(s)");
            }
        });
        SchedulerHandle { task }
    }
}

/// Running scheduler; stops when shut down or dropped
pub struct SchedulerHandle {
    task: JoinHandle<()>,
}

impl SchedulerHandle {
    pub fn shutdown(self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SchedulerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
