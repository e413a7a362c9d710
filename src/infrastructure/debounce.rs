//! Trailing-edge debounce timer
//!
//! At most one timer is pending. Scheduling a new one aborts the previous, and dropping
//! the debouncer aborts whatever is left, so no callback can run after teardown.

use std::time::Duration;

use tokio::{sync::mpsc, task::JoinHandle};

use crate::core::raw_msg::RawMsg;

pub struct Debouncer {
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_tx,
            pending: None,
        }
    }

    /// Deliver `RawMsg::DebounceElapsed { generation }` after `delay`, superseding any
    /// pending timer
    pub fn schedule(&mut self, generation: u64, delay: Duration) {
        self.cancel();
        let tx = self.raw_tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(RawMsg::DebounceElapsed { generation }).is_err() {
                log::debug!("debounce {generation} elapsed after the runtime stopped");
            }
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(tx);
        debouncer.schedule(1, Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(RawMsg::DebounceElapsed { generation: 1 }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_supersedes_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(tx);
        debouncer.schedule(1, Duration::from_millis(500));
        tokio::time::sleep(Duration::from_millis(300)).await;
        debouncer.schedule(2, Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(rx.try_recv().ok(), Some(RawMsg::DebounceElapsed { generation: 2 }));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_and_drop_silence_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(tx.clone());
        debouncer.schedule(1, Duration::from_millis(100));
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        let mut dropped = Debouncer::new(tx);
        dropped.schedule(2, Duration::from_millis(100));
        drop(dropped);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(rx.try_recv().is_err());
    }
}
