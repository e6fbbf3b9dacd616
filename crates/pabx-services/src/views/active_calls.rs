//! Active calls view and its duration ticker
//!
//! While mounted, a single tokio task adds one second to every call's
//! duration per tick. Unmounting, remounting or dropping the view cancels
//! the task. Each mount starts again from the mock baseline.

use crate::seed;
use pabx_core::models::{ActiveCall, Notification};
use pabx_core::traits::NotificationEmitter;
use pabx_core::{AppError, AppResult};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

/// Running ticker. Dropping it stops the task.
#[derive(Debug)]
struct Ticker {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Ticker {
    fn spawn(calls: Arc<Mutex<Vec<ActiveCall>>>, period: Duration) -> Self {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        debug!("Duration ticker stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        for call in calls.lock().iter_mut() {
                            call.duration += 1;
                        }
                    }
                }
            }
        });

        Self { token, handle }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.token.cancel();
        self.handle.abort();
    }
}

pub struct ActiveCallsView {
    calls: Arc<Mutex<Vec<ActiveCall>>>,
    period: Duration,
    ticker: Mutex<Option<Ticker>>,
    notifier: Arc<dyn NotificationEmitter>,
}

impl ActiveCallsView {
    pub fn new(period: Duration, notifier: Arc<dyn NotificationEmitter>) -> Self {
        Self {
            calls: Arc::new(Mutex::new(seed::active_calls())),
            period,
            ticker: Mutex::new(None),
            notifier,
        }
    }

    /// Reset calls to the baseline and start ticking.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(period_ms = self.period.as_millis() as u64))]
    pub fn mount(&self) -> Vec<ActiveCall> {
        let mut ticker = self.ticker.lock();
        // stop the previous task before resetting durations
        ticker.take();

        let baseline = seed::active_calls();
        *self.calls.lock() = baseline.clone();
        *ticker = Some(Ticker::spawn(Arc::clone(&self.calls), self.period));
        info!(calls = baseline.len(), "Active calls view mounted");
        baseline
    }

    /// Stop ticking. Durations keep their last value.
    pub fn unmount(&self) -> bool {
        let stopped = self.ticker.lock().take().is_some();
        if stopped {
            info!("Active calls view unmounted");
        }
        stopped
    }

    pub fn is_mounted(&self) -> bool {
        self.ticker.lock().is_some()
    }

    pub fn snapshot(&self) -> Vec<ActiveCall> {
        self.calls.lock().clone()
    }

    /// Request that a call be ended. Only a notification is produced; the
    /// call stays in the list.
    #[instrument(skip(self))]
    pub fn hang_up(&self, id: u32) -> AppResult<ActiveCall> {
        let call = self
            .calls
            .lock()
            .iter()
            .find(|call| call.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("active call {}", id)))?;

        info!(extension = %call.extension, agent = %call.agent, "Hang-up requested");
        self.notifier.emit(Notification::success(
            "Call ended",
            format!("Call from {} to {} ended", call.caller_id, call.destination),
        ));
        Ok(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationCenter;

    fn view() -> (ActiveCallsView, Arc<NotificationCenter>) {
        let center = Arc::new(NotificationCenter::default());
        (
            ActiveCallsView::new(Duration::from_millis(1000), center.clone()),
            center,
        )
    }

    fn durations(calls: &[ActiveCall]) -> Vec<u32> {
        calls.iter().map(|c| c.duration).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_seconds_then_unmount() {
        let (view, _) = view();
        let baseline = durations(&view.mount());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert!(view.unmount());

        let expected: Vec<u32> = baseline.iter().map(|d| d + 3).collect();
        assert_eq!(durations(&view.snapshot()), expected);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(durations(&view.snapshot()), expected);
        assert!(!view.is_mounted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_after_one_period() {
        let (view, _) = view();
        let baseline = durations(&view.mount());

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert_eq!(durations(&view.snapshot()), baseline);

        tokio::time::sleep(Duration::from_millis(2)).await;
        let after: Vec<u32> = baseline.iter().map(|d| d + 1).collect();
        assert_eq!(durations(&view.snapshot()), after);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remount_restarts_from_baseline() {
        let (view, _) = view();
        let baseline = durations(&view.mount());
        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(durations(&view.mount()), baseline);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        let expected: Vec<u32> = baseline.iter().map(|d| d + 1).collect();
        assert_eq!(durations(&view.snapshot()), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_ticker() {
        let (view, _) = view();
        view.mount();
        let calls = Arc::clone(&view.calls);
        let before = durations(&calls.lock());
        drop(view);

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(durations(&calls.lock()), before);
    }

    #[test]
    fn test_hang_up_only_notifies() {
        let (view, center) = view();
        let call = view.hang_up(2).unwrap();
        assert_eq!(call.id, 2);
        assert_eq!(view.snapshot().len(), 5);
        assert_eq!(center.last().unwrap().title, "Call ended");
        assert!(view.hang_up(42).is_err());
    }
}
