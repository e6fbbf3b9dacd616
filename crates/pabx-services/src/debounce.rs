//! Trailing-edge debouncer
//!
//! Each call supersedes the pending one: the earlier task is aborted before
//! the new one is armed, so only the last input within the delay commits.

use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Run `commit` once `delay` has passed without another call.
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&self, commit: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let mut pending = self.pending.lock();
        if let Some(previous) = pending.take() {
            trace!("Superseding pending debounce");
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            commit.await;
        }));
    }

    /// Drop the pending commit, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.pending.lock().take() {
            previous.abort();
        }
    }

    /// True while a commit is armed and has not finished
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(previous) = self.pending.get_mut().take() {
            previous.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_last_call_wins() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let committed = Arc::new(Mutex::new(Vec::new()));

        for text in ["m", "ma", "mar"] {
            let sink = committed.clone();
            debouncer.call(async move { sink.lock().push(text) });
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(committed.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert_eq!(*committed.lock(), vec!["mar"]);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_discards_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(300));
        let committed = Arc::new(Mutex::new(0));

        let sink = committed.clone();
        debouncer.call(async move { *sink.lock() += 1 });
        assert!(debouncer.is_pending());
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*committed.lock(), 0);
    }
}
