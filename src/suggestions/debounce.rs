//! Caller-side debouncing for keystroke-driven suggestion queries

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// Lets only the last of a burst of submissions through.
///
/// Each `submit` waits for the quiet period and yields its value only if no
/// newer value was submitted meanwhile. The suggestion engine itself stays
/// free of timers; callers do
/// `if let Some(q) = debouncer.submit(q).await { suggest(..) }`.
#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    generation: AtomicU64,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: AtomicU64::new(0),
        }
    }

    pub async fn submit<T>(&self, value: T) -> Option<T> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.quiet).await;

        if self.generation.load(Ordering::SeqCst) == ticket {
            Some(value)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_submission_in_burst_runs() {
        let debouncer = Arc::new(Debouncer::default());

        let first = {
            let d = debouncer.clone();
            tokio::spawn(async move { d.submit("ac").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = {
            let d = debouncer.clone();
            tokio::spawn(async move { d.submit("acm").await })
        };
        tokio::time::sleep(Duration::from_millis(50)).await;
        let third = {
            let d = debouncer.clone();
            tokio::spawn(async move { d.submit("acme").await })
        };

        assert_eq!(first.await.unwrap(), None);
        assert_eq!(second.await.unwrap(), None);
        assert_eq!(third.await.unwrap(), Some("acme"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_submissions_all_run() {
        let debouncer = Debouncer::new(Duration::from_millis(150));

        assert_eq!(debouncer.submit(1).await, Some(1));
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(debouncer.submit(2).await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_quiet_period() {
        let debouncer = Debouncer::new(Duration::from_millis(150));
        let start = tokio::time::Instant::now();
        debouncer.submit(()).await;
        assert!(start.elapsed() >= Duration::from_millis(150));
    }
}
