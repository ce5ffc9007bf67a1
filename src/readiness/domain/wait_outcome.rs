use crate::shared::error::ExitCode;
use std::time::Duration;

/// How a readiness wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// A connection and validation query succeeded
    Ready { attempts: u32, elapsed: Duration },
    /// The deadline passed without a successful attempt
    TimedOut { attempts: u32, timeout: Duration },
    /// A termination signal stopped the wait
    Interrupted { attempts: u32 },
}

impl WaitOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaitOutcome::Ready { .. } => ExitCode::Success,
            WaitOutcome::TimedOut { .. } => ExitCode::Timeout,
            WaitOutcome::Interrupted { .. } => ExitCode::Interrupted,
        }
    }

    pub fn attempts(&self) -> u32 {
        match self {
            WaitOutcome::Ready { attempts, .. }
            | WaitOutcome::TimedOut { attempts, .. }
            | WaitOutcome::Interrupted { attempts } => *attempts,
        }
    }
}
