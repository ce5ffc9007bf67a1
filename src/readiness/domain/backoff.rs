use std::time::Duration;

/// Multiplier applied to the retry interval after each failed attempt
pub const BACKOFF_FACTOR: f64 = 1.5;

/// Upper bound of the retry interval when backoff is enabled
pub const MAX_BACKOFF_INTERVAL: Duration = Duration::from_secs(5);

/// Retry interval state for the readiness loop
///
/// With backoff disabled the interval never changes. With backoff enabled
/// every [`Backoff::advance`] multiplies it by [`BACKOFF_FACTOR`], capped
/// at [`MAX_BACKOFF_INTERVAL`].
#[derive(Debug, Clone, PartialEq)]
pub struct Backoff {
    current: Duration,
    enabled: bool,
}

impl Backoff {
    pub fn new(initial: Duration, enabled: bool) -> Self {
        Self {
            current: initial,
            enabled,
        }
    }

    /// Interval to sleep after the current failure
    pub fn current(&self) -> Duration {
        self.current
    }

    /// Grows the interval for the next failure
    pub fn advance(&mut self) {
        if self.enabled {
            // Clamp first: very large intervals would overflow the multiply
            self.current = self
                .current
                .min(MAX_BACKOFF_INTERVAL)
                .mul_f64(BACKOFF_FACTOR)
                .min(MAX_BACKOFF_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_backoff_is_constant() {
        let mut backoff = Backoff::new(Duration::from_secs(1), false);
        for _ in 0..10 {
            assert_eq!(backoff.current(), Duration::from_secs(1));
            backoff.advance();
        }
    }

    #[test]
    fn test_enabled_backoff_grows_then_caps() {
        let mut backoff = Backoff::new(Duration::from_secs(1), true);
        let mut seen = Vec::new();
        for _ in 0..8 {
            seen.push(backoff.current());
            backoff.advance();
        }

        assert_eq!(
            &seen[..5],
            &[
                Duration::from_millis(1000),
                Duration::from_millis(1500),
                Duration::from_millis(2250),
                Duration::from_millis(3375),
                MAX_BACKOFF_INTERVAL,
            ]
        );

        let cap_index = seen.iter().position(|d| *d == MAX_BACKOFF_INTERVAL).unwrap();
        assert!(seen[..=cap_index].windows(2).all(|w| w[0] < w[1]));
        assert!(seen[cap_index..].iter().all(|d| *d == MAX_BACKOFF_INTERVAL));
    }

    #[test]
    fn test_initial_interval_above_cap_is_clamped_on_first_advance() {
        let mut backoff = Backoff::new(Duration::from_secs(8), true);
        assert_eq!(backoff.current(), Duration::from_secs(8));
        backoff.advance();
        assert_eq!(backoff.current(), MAX_BACKOFF_INTERVAL);
    }

    #[test]
    fn test_huge_initial_interval_does_not_overflow() {
        let mut backoff = Backoff::new(Duration::from_secs_f64(1.7e19), true);
        backoff.advance();
        assert_eq!(backoff.current(), MAX_BACKOFF_INTERVAL);

        let mut backoff = Backoff::new(Duration::MAX, true);
        backoff.advance();
        assert_eq!(backoff.current(), MAX_BACKOFF_INTERVAL);
    }
}
