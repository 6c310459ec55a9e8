//! Anomaly detector — request-rate and repeated-401 observability.
//!
//! Pure side effect: it logs and never alters control flow. The timestamp
//! window is guarded by its own lightweight mutex because the executor may run
//! requests concurrently.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use async_lock::Mutex;

/// Sliding window length.
const WINDOW: Duration = Duration::from_secs(60);

/// Hard bound on retained timestamps.
const MAX_ENTRIES: usize = 1000;

/// Tracks request timestamps and flags elevated rates or repeated auth
/// failures.
#[derive(Debug)]
pub struct AnomalyDetector {
    threshold: usize,
    window: Mutex<VecDeque<Instant>>,
}

impl AnomalyDetector {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            window: Mutex::new(VecDeque::with_capacity(MAX_ENTRIES)),
        }
    }

    /// Record one request attempt; warns when the windowed rate exceeds the
    /// threshold.
    pub async fn record_request(&self) {
        let mut window = self.window.lock().await;
        if let Some(rate) = observe(&mut window, Instant::now(), self.threshold) {
            tracing::warn!(
                requests = rate,
                window_secs = WINDOW.as_secs(),
                "High request rate detected"
            );
        }
    }

    /// Flag an observed 401; called once per unauthorized response.
    pub fn record_auth_failure(&self) {
        tracing::error!("Repeated 401 Unauthorized responses — possible credential misuse");
    }

    /// Number of timestamps currently inside the window.
    #[cfg(test)]
    async fn len(&self) -> usize {
        self.window.lock().await.len()
    }
}

/// Append `now`, evict entries older than the window, and return the windowed
/// count when it exceeds `threshold`.
fn observe(window: &mut VecDeque<Instant>, now: Instant, threshold: usize) -> Option<usize> {
    if window.len() == MAX_ENTRIES {
        window.pop_front();
    }
    window.push_back(now);

    if let Some(cutoff) = now.checked_sub(WINDOW) {
        while window.front().is_some_and(|&t| t < cutoff) {
            window.pop_front();
        }
    }

    (window.len() > threshold).then_some(window.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warns_exactly_once_when_crossing_the_threshold() {
        let now = Instant::now();
        let mut window = VecDeque::new();
        let warnings = (0..101)
            .filter(|_| observe(&mut window, now, 100).is_some())
            .count();
        assert_eq!(warnings, 1);
    }

    #[test]
    fn stale_timestamps_are_evicted() {
        let start = Instant::now();
        let mut window = VecDeque::new();
        for _ in 0..100 {
            observe(&mut window, start, 100);
        }
        // 61 seconds later, everything recorded at `start` has left the window.
        let later = start + Duration::from_secs(61);
        assert_eq!(observe(&mut window, later, 100), None);
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn window_is_bounded() {
        let now = Instant::now();
        let mut window = VecDeque::new();
        for _ in 0..(MAX_ENTRIES + 50) {
            observe(&mut window, now, usize::MAX);
        }
        assert_eq!(window.len(), MAX_ENTRIES);
    }

    #[test]
    fn record_request_appends() {
        let detector = AnomalyDetector::new(100);
        tokio_test::block_on(async {
            detector.record_request().await;
            detector.record_request().await;
            assert_eq!(detector.len().await, 2);
        });
    }
}
