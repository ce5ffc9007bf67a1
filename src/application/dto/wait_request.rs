use crate::config::WaitConfig;
use std::time::Duration;
use tokio::time::Instant;

const FAR_FUTURE: Duration = Duration::from_secs(30 * 365 * 24 * 60 * 60);

/// WaitRequest - Timing parameters for the database readiness use case
#[derive(Debug, Clone)]
pub struct WaitRequest {
    /// Instant the deadline is measured from (process start)
    pub started_at: Instant,
    pub timeout: Duration,
    pub interval: Duration,
    pub connect_timeout: Duration,
    pub backoff: bool,
}

impl WaitRequest {
    pub fn new(config: &WaitConfig, started_at: Instant) -> Self {
        Self {
            started_at,
            timeout: config.timeout,
            interval: config.interval,
            connect_timeout: config.connect_timeout,
            backoff: config.backoff,
        }
    }

    /// Deadline of the whole wait; absurdly large timeouts saturate to
    /// roughly thirty years instead of overflowing
    pub fn deadline(&self) -> Instant {
        self.started_at
            .checked_add(self.timeout)
            .unwrap_or_else(|| self.started_at + FAR_FUTURE)
    }
}
