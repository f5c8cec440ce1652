//! Named periodic refresh tasks.
//!
//! Each widget concern gets one fixed-period task that injects an action into
//! the app channel: clock every second, weather every ten minutes, crypto
//! every thirty seconds, coin rotation every five. Periods are fixed, there
//! is no jitter and no backoff; a failed fetch simply waits for the next
//! tick. All tasks share one cancellation token so teardown stops everything.

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::action::Action;

pub struct Scheduler {
    tx: UnboundedSender<Action>,
    cancellation_token: CancellationToken,
    tasks: Vec<(String, JoinHandle<()>)>,
}

impl Scheduler {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self {
            tx,
            cancellation_token: CancellationToken::new(),
            tasks: Vec::new(),
        }
    }

    /// Spawn a named task that sends `action` every `period`, starting
    /// immediately.
    pub fn every(&mut self, name: &str, period: std::time::Duration, action: Action) {
        let tx = self.tx.clone();
        let token = self.cancellation_token.clone();
        let task_name = name.to_string();
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if tx.send(action.clone()).is_err() {
                            break;
                        }
                    }
                }
            }
            tracing::debug!("scheduler task {task_name} stopped");
        });
        self.tasks.push((name.to_string(), handle));
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Cancel every task and wait for them to wind down.
    pub async fn shutdown(&mut self) {
        self.cancellation_token.cancel();
        for (name, handle) in self.tasks.drain(..) {
            if handle.await.is_err() {
                tracing::error!("scheduler task {name} did not shut down cleanly");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc;

    use super::*;
    use crate::action::Action;

    #[tokio::test]
    async fn test_task_fires_immediately_and_repeats() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.every("clock", Duration::from_millis(10), Action::TickClock);

        for _ in 0..3 {
            let action = tokio::time::timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("tick should arrive in time")
                .expect("channel open");
            assert_eq!(action, Action::TickClock);
        }
        scheduler.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_all_tasks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = Scheduler::new(tx);
        scheduler.every("crypto", Duration::from_millis(5), Action::RefreshCrypto);
        scheduler.every("weather", Duration::from_millis(5), Action::RefreshWeather);
        assert_eq!(scheduler.task_names(), vec!["crypto", "weather"]);

        scheduler.shutdown().await;
        assert!(scheduler.task_names().is_empty());

        // drain anything queued before the cancel, then the channel is silent
        while rx.try_recv().is_ok() {}
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
    }
}
