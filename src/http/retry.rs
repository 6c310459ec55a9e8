//! Retry configuration for the request executor.

use std::time::Duration;

/// Configuration for retry behavior.
///
/// One policy covers transport errors, 429 and 5xx; 401 (immediate retry after
/// a forced token refresh) and 404 (immediate failure) are the only paths that
/// diverge, and they are hard-wired in the executor.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempt budget per logical request (initial try included).
    pub max_retries: u32,
    /// Base delay; retry N sleeps `backoff_factor * 2^(N-1)`.
    pub backoff_factor: Duration,
    /// Cap on any single delay.
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            backoff_factor: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// Delay to sleep after failed attempt `attempt` (1-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(31);
        let base = self.backoff_factor.saturating_mul(1u32 << exp);
        base.min(self.max_delay)
    }
}
