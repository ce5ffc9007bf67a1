use crate::application::dto::WaitRequest;
use crate::ports::outbound::{DatabaseProbe, ProgressReporter};
use crate::readiness::domain::{Backoff, WaitOutcome};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// WaitForDatabaseUseCase - polls a database until it accepts queries
///
/// Attempts run strictly one after another. Cancellation is cooperative:
/// the token is checked at the top of every iteration, and a pending
/// sleep between attempts ends early once it is cancelled.
///
/// # Type Parameters
/// * `P` - DatabaseProbe implementation
/// * `PR` - ProgressReporter implementation
pub struct WaitForDatabaseUseCase<P, PR> {
    probe: P,
    progress_reporter: PR,
}

impl<P, PR> WaitForDatabaseUseCase<P, PR>
where
    P: DatabaseProbe,
    PR: ProgressReporter,
{
    pub fn new(probe: P, progress_reporter: PR) -> Self {
        Self {
            probe,
            progress_reporter,
        }
    }

    /// Runs the readiness loop until success, deadline or cancellation
    pub async fn execute(&self, request: WaitRequest, stop: &CancellationToken) -> WaitOutcome {
        let deadline = request.deadline();
        let mut backoff = Backoff::new(request.interval, request.backoff);
        let mut attempts = 0;

        self.progress_reporter.report(&format!(
            "Waiting for PostgreSQL (timeout={}s, interval={}s, per_try={}s, backoff={})",
            seconds(request.timeout),
            seconds(request.interval),
            seconds(request.connect_timeout),
            request.backoff
        ));

        loop {
            if stop.is_cancelled() {
                self.progress_reporter
                    .report("Received termination signal; exiting.");
                return WaitOutcome::Interrupted { attempts };
            }

            let now = Instant::now();
            if now >= deadline {
                self.progress_reporter
                    .report(&format!("Timeout after {}s", seconds(request.timeout)));
                return WaitOutcome::TimedOut {
                    attempts,
                    timeout: request.timeout,
                };
            }

            attempts += 1;
            let attempt_timeout = request.connect_timeout.min(deadline - now);

            match self.probe.probe(attempt_timeout).await {
                Ok(()) => {
                    let elapsed = request.started_at.elapsed();
                    self.progress_reporter.report(&format!(
                        "PostgreSQL is available after {} attempt(s), {:.2}s.",
                        attempts,
                        elapsed.as_secs_f64()
                    ));
                    return WaitOutcome::Ready { attempts, elapsed };
                }
                Err(failure) => {
                    self.progress_reporter
                        .report(&format!("Not ready (try {}): {}", attempts, failure));

                    let pause = backoff
                        .current()
                        .min(deadline.saturating_duration_since(Instant::now()));
                    tokio::select! {
                        _ = tokio::time::sleep(pause) => {}
                        _ = stop.cancelled() => {}
                    }
                    backoff.advance();
                }
            }
        }
    }
}

/// Renders a duration as plain seconds (`60`, `0.5`)
fn seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}
