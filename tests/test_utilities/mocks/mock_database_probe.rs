use async_trait::async_trait;
use deploy_utils::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// One recorded call to [`MockDatabaseProbe::probe`]
#[derive(Debug, Clone, Copy)]
pub struct ProbeCall {
    pub at: Instant,
    pub timeout: Duration,
}

/// Mock DatabaseProbe replaying scripted results
///
/// Once the script is exhausted every further attempt fails with
/// `ConnectionRefused`.
#[derive(Clone, Default)]
pub struct MockDatabaseProbe {
    script: Arc<Mutex<VecDeque<std::result::Result<(), ProbeFailure>>>>,
    calls: Arc<Mutex<Vec<ProbeCall>>>,
    cancel_on_attempt: Option<(usize, CancellationToken)>,
}

impl MockDatabaseProbe {
    /// A probe whose every attempt fails
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// A probe that fails `failures` times, then succeeds
    pub fn ready_after(failures: usize) -> Self {
        let mut script: VecDeque<_> = (0..failures)
            .map(|_| Err(ProbeFailure::Io("ConnectionRefused".to_string())))
            .collect();
        script.push_back(Ok(()));
        Self {
            script: Arc::new(Mutex::new(script)),
            ..Self::default()
        }
    }

    /// Cancels `token` while the given (1-based) attempt is running
    pub fn cancelling_on_attempt(mut self, attempt: usize, token: CancellationToken) -> Self {
        self.cancel_on_attempt = Some((attempt, token));
        self
    }

    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DatabaseProbe for MockDatabaseProbe {
    async fn probe(&self, timeout: Duration) -> std::result::Result<(), ProbeFailure> {
        let attempt = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(ProbeCall {
                at: Instant::now(),
                timeout,
            });
            calls.len()
        };

        if let Some((cancel_at, token)) = &self.cancel_on_attempt {
            if *cancel_at == attempt {
                token.cancel();
            }
        }

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProbeFailure::Io("ConnectionRefused".to_string())))
    }
}
