//! Scoped one-shot countdown.
//!
//! An [`ExpiryTimer`] owns a tokio task that sleeps and then runs a callback.
//! Dropping the timer (or calling [`ExpiryTimer::cancel`]) aborts the task, so
//! a callback can never outlive whoever holds the timer.

use std::time::Duration;

use tokio::task::JoinHandle;

/// Handle to a pending delayed callback
#[derive(Debug)]
pub struct ExpiryTimer {
    handle: Option<JoinHandle<()>>,
    delay: Duration,
}

impl ExpiryTimer {
    /// Schedule `on_fire` to run once after `delay`.
    ///
    /// Returns `None` when called outside a tokio runtime; the caller then
    /// simply has no countdown.
    pub fn spawn<F>(delay: Duration, on_fire: F) -> Option<Self>
    where
        F: FnOnce() + Send + 'static,
    {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(rt) => rt,
            Err(e) => {
                tracing::warn!("Cannot schedule expiry countdown: {}", e);
                return None;
            }
        };

        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        });

        Some(Self {
            handle: Some(handle),
            delay,
        })
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the callback has already run (or the task was aborted)
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Abort the countdown. Equivalent to dropping the timer.
    pub fn cancel(self) {
        drop(self);
    }

    /// Release the timer without aborting its task.
    ///
    /// Used from inside the callback itself, where aborting would target the
    /// running task.
    pub fn detach(mut self) {
        self.handle.take();
    }
}

impl Drop for ExpiryTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let timer = ExpiryTimer::spawn(Duration::from_millis(5000), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("inside runtime");

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(timer.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let timer = ExpiryTimer::spawn(Duration::from_millis(100), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("inside runtime");

        timer.cancel();
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_no_runtime() {
        assert!(ExpiryTimer::spawn(Duration::from_millis(1), || {}).is_none());
    }
}
